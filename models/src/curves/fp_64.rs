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

use crate::curves::{Field, FpParameters, One, PrimeField, Zero};

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    marker::PhantomData,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

pub trait Fp64Parameters: FpParameters {}

/// A prime field element whose modulus fits in a single `u64` limb.
/// Elements are kept in canonical form, i.e. in `[0, MODULUS)`.
#[derive(Derivative)]
#[derivative(
    Default(bound = "P: Fp64Parameters"),
    Hash(bound = "P: Fp64Parameters"),
    Clone(bound = "P: Fp64Parameters"),
    Copy(bound = "P: Fp64Parameters"),
    Debug(bound = "P: Fp64Parameters"),
    PartialEq(bound = "P: Fp64Parameters"),
    Eq(bound = "P: Fp64Parameters")
)]
pub struct Fp64<P: Fp64Parameters>(
    pub u64,
    #[derivative(Debug = "ignore")]
    #[doc(hidden)]
    pub PhantomData<P>,
);

impl<P: Fp64Parameters> Fp64<P> {
    #[inline]
    pub const fn new(element: u64) -> Self {
        Fp64::<P>(element, PhantomData)
    }

    #[inline]
    fn is_valid(&self) -> bool {
        self.0 < P::MODULUS
    }

    #[inline]
    fn reduce_wide(value: u128) -> u64 {
        (value % u128::from(P::MODULUS)) as u64
    }
}

impl<P: Fp64Parameters> Zero for Fp64<P> {
    #[inline]
    fn zero() -> Self {
        Fp64::<P>::new(0)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl<P: Fp64Parameters> One for Fp64<P> {
    #[inline]
    fn one() -> Self {
        Fp64::<P>::new(1)
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.0 == 1
    }
}

impl<P: Fp64Parameters> Field for Fp64<P> {
    #[inline]
    fn double(&self) -> Self {
        let mut temp = *self;
        temp.double_in_place();
        temp
    }

    #[inline]
    fn double_in_place(&mut self) -> &mut Self {
        let copy = *self;
        *self += &copy;
        self
    }

    #[inline]
    fn square(&self) -> Self {
        let mut temp = *self;
        temp.square_in_place();
        temp
    }

    #[inline]
    fn square_in_place(&mut self) -> &mut Self {
        self.0 = Self::reduce_wide(u128::from(self.0) * u128::from(self.0));
        self
    }

    #[inline]
    fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            // Fermat's little theorem: a^(p - 2) = a^{-1}.
            Some(self.pow([P::MODULUS - 2]))
        }
    }

    fn inverse_in_place(&mut self) -> Option<&mut Self> {
        if let Some(inverse) = self.inverse() {
            *self = inverse;
            Some(self)
        } else {
            None
        }
    }
}

impl<P: Fp64Parameters> PrimeField for Fp64<P> {
    type Params = P;

    #[inline]
    fn from_repr(repr: u64) -> Self {
        let r = Fp64::<P>::new(repr);
        if r.is_valid() { r } else { Fp64::<P>::new(repr % P::MODULUS) }
    }

    #[inline]
    fn into_repr(&self) -> u64 {
        self.0
    }

    #[inline]
    fn multiplicative_generator() -> Self {
        Fp64::<P>::new(P::GENERATOR)
    }

    #[inline]
    fn root_of_unity() -> Self {
        // GENERATOR^t has order exactly 2^s because GENERATOR generates the whole group.
        Self::multiplicative_generator().pow([P::T])
    }
}

impl<P: Fp64Parameters> Display for Fp64<P> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Fp64({})", self.into_repr())
    }
}

impl<P: Fp64Parameters> Neg for Fp64<P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        if !self.is_zero() { Fp64::<P>::new(P::MODULUS - self.0) } else { self }
    }
}

impl<'a, P: Fp64Parameters> Add<&'a Fp64<P>> for Fp64<P> {
    type Output = Self;

    #[inline]
    fn add(self, other: &Self) -> Self {
        let mut result = self;
        result.add_assign(other);
        result
    }
}

impl<'a, P: Fp64Parameters> Sub<&'a Fp64<P>> for Fp64<P> {
    type Output = Self;

    #[inline]
    fn sub(self, other: &Self) -> Self {
        let mut result = self;
        result.sub_assign(other);
        result
    }
}

impl<'a, P: Fp64Parameters> Mul<&'a Fp64<P>> for Fp64<P> {
    type Output = Self;

    #[inline]
    fn mul(self, other: &Self) -> Self {
        let mut result = self;
        result.mul_assign(other);
        result
    }
}

impl<'a, P: Fp64Parameters> Div<&'a Fp64<P>> for Fp64<P> {
    type Output = Self;

    #[inline]
    fn div(self, other: &Self) -> Self {
        let mut result = self;
        result.div_assign(other);
        result
    }
}

impl<'a, P: Fp64Parameters> AddAssign<&'a Self> for Fp64<P> {
    #[inline]
    fn add_assign(&mut self, other: &Self) {
        let (sum, carry) = self.0.overflowing_add(other.0);
        // A carry means the true sum is at least 2^64 > MODULUS.
        self.0 = if carry || sum >= P::MODULUS { sum.wrapping_sub(P::MODULUS) } else { sum };
    }
}

impl<'a, P: Fp64Parameters> SubAssign<&'a Self> for Fp64<P> {
    #[inline]
    fn sub_assign(&mut self, other: &Self) {
        // If `other` is larger than `self`, wrap around the modulus.
        self.0 = if other.0 > self.0 { P::MODULUS - (other.0 - self.0) } else { self.0 - other.0 };
    }
}

impl<'a, P: Fp64Parameters> MulAssign<&'a Self> for Fp64<P> {
    #[inline]
    fn mul_assign(&mut self, other: &Self) {
        self.0 = Self::reduce_wide(u128::from(self.0) * u128::from(other.0));
    }
}

impl<'a, P: Fp64Parameters> DivAssign<&'a Self> for Fp64<P> {
    #[inline]
    fn div_assign(&mut self, other: &Self) {
        match other.inverse() {
            Some(inverse) => self.mul_assign(&inverse),
            None => panic!("Attempted to divide {} by zero", self),
        }
    }
}

impl_ops_from_ref!(Fp64, Fp64Parameters);
impl_prime_field_standard_sample!(Fp64, Fp64Parameters);
impl_prime_field_from_int!(Fp64, u64, Fp64Parameters);
impl_prime_field_from_int!(Fp64, u32, Fp64Parameters);
impl_prime_field_from_int!(Fp64, u16, Fp64Parameters);
impl_prime_field_from_int!(Fp64, u8, Fp64Parameters);
