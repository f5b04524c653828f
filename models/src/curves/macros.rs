// Copyright 2024 Aleo Network Foundation
// This file is part of the polydfs library.

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at:

// http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

macro_rules! impl_prime_field_standard_sample {
    ($field: ident, $params: ident) => {
        impl<P: $params> rand::distributions::Distribution<$field<P>> for rand::distributions::Standard {
            #[inline]
            fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> $field<P> {
                loop {
                    // Mask away the unused bits at the beginning.
                    let tmp: u64 = rng.gen::<u64>() & (u64::MAX >> (64 - P::MODULUS_BITS));
                    if tmp < P::MODULUS {
                        return $field::<P>::new(tmp);
                    }
                }
            }
        }
    };
}

macro_rules! impl_prime_field_from_int {
    ($field: ident, $int: ident, $params: ident) => {
        impl<P: $params> From<$int> for $field<P> {
            fn from(other: $int) -> Self {
                Self::from_repr(u64::from(other))
            }
        }
    };
}

/// Derives the by-value arithmetic operators from the by-reference ones.
macro_rules! impl_ops_from_ref {
    ($field: ident, $params: ident) => {
        impl<P: $params> std::ops::Add<Self> for $field<P> {
            type Output = Self;

            #[inline]
            fn add(self, other: Self) -> Self {
                self + &other
            }
        }

        impl<P: $params> std::ops::Sub<Self> for $field<P> {
            type Output = Self;

            #[inline]
            fn sub(self, other: Self) -> Self {
                self - &other
            }
        }

        impl<P: $params> std::ops::Mul<Self> for $field<P> {
            type Output = Self;

            #[inline]
            fn mul(self, other: Self) -> Self {
                self * &other
            }
        }

        impl<P: $params> std::ops::Div<Self> for $field<P> {
            type Output = Self;

            #[inline]
            fn div(self, other: Self) -> Self {
                self / &other
            }
        }

        impl<P: $params> std::ops::AddAssign<Self> for $field<P> {
            #[inline]
            fn add_assign(&mut self, other: Self) {
                *self += &other
            }
        }

        impl<P: $params> std::ops::SubAssign<Self> for $field<P> {
            #[inline]
            fn sub_assign(&mut self, other: Self) {
                *self -= &other
            }
        }

        impl<P: $params> std::ops::MulAssign<Self> for $field<P> {
            #[inline]
            fn mul_assign(&mut self, other: Self) {
                *self *= &other
            }
        }

        impl<P: $params> std::ops::DivAssign<Self> for $field<P> {
            #[inline]
            fn div_assign(&mut self, other: Self) {
                *self /= &other
            }
        }
    };
}
