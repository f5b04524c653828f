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

use crate::curves::{Field, FpParameters};
use polydfs_errors::curves::FieldError;

/// The interface for a prime field.
pub trait PrimeField: Field {
    type Params: FpParameters;

    /// Returns a prime field element from its canonical representation.
    /// Values at or above the modulus are reduced.
    fn from_repr(repr: u64) -> Self;

    /// Returns the canonical representation of the prime field element.
    fn into_repr(&self) -> u64;

    /// Returns the multiplicative generator of `char()` - 1 order.
    fn multiplicative_generator() -> Self;

    /// Returns the 2^s root of unity.
    fn root_of_unity() -> Self;

    /// Returns the field size in bits.
    fn size_in_bits() -> usize {
        Self::Params::MODULUS_BITS as usize
    }

    /// Returns the two-adicity of the multiplicative group.
    fn two_adicity() -> u32 {
        Self::Params::TWO_ADICITY
    }

    /// Returns a primitive root of unity of the given power-of-two `order`,
    /// obtained by repeatedly squaring the 2^s root of unity.
    fn primitive_root_of_unity(order: usize) -> Result<Self, FieldError> {
        if !order.is_power_of_two() {
            return Err(FieldError::NoRootOfUnity(order));
        }
        let log_order = order.trailing_zeros();
        if log_order > Self::two_adicity() {
            return Err(FieldError::NoRootOfUnity(order));
        }

        let mut omega = Self::root_of_unity();
        for _ in log_order..Self::two_adicity() {
            omega.square_in_place();
        }
        Ok(omega)
    }
}
