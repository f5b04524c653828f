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

//! A multiplicative subgroup of size `n = 2^k` together with the constants
//! needed to move between coefficient form and evaluation form on it.

use crate::fft::ntt::{forward_ntt, inverse_ntt};
use polydfs_errors::{algorithms::PolynomialError, curves::FieldError};
use polydfs_models::curves::PrimeField;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Defines a domain over which finite field (I)NTTs can be performed.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug)]
pub struct EvaluationDomain<F: PrimeField> {
    /// The size of the domain.
    pub size: u64,
    /// `log_2(self.size)`.
    pub log_size_of_group: u32,
    /// Size of the domain as a field element.
    pub size_as_field_element: F,
    /// Inverse of the size in the field.
    pub size_inv: F,
    /// A generator of the subgroup.
    pub group_gen: F,
    /// Inverse of the generator of the subgroup.
    pub group_gen_inv: F,
}

impl<F: PrimeField> EvaluationDomain<F> {
    /// Constructs the domain of exactly `size` points.
    /// Fails unless `size` is a nonzero power of two within the field's two-adicity.
    pub fn new(size: usize) -> Result<Self, PolynomialError> {
        if !size.is_power_of_two() {
            return Err(PolynomialError::InvalidDomainSize(size));
        }

        let group_gen = F::primitive_root_of_unity(size)?;
        let group_gen_inv = group_gen.inverse().ok_or(FieldError::NoRootOfUnity(size))?;
        let size_as_field_element = F::from(size as u64);
        let size_inv = size_as_field_element.inverse().ok_or(PolynomialError::InvalidDomainSize(size))?;

        Ok(Self {
            size: size as u64,
            log_size_of_group: size.trailing_zeros(),
            size_as_field_element,
            size_inv,
            group_gen,
            group_gen_inv,
        })
    }

    /// Returns the size of the domain.
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Returns the `i`-th element of the domain, `group_gen^i`.
    pub fn element(&self, i: usize) -> F {
        self.group_gen.pow([i as u64])
    }

    /// Computes the evaluations of the given coefficients over the domain.
    pub fn fft(&self, coeffs: &[F]) -> Result<Vec<F>, PolynomialError> {
        let mut coeffs = coeffs.to_vec();
        self.fft_in_place(&mut coeffs)?;
        Ok(coeffs)
    }

    /// Evaluates the coefficients in place, truncating or zero-padding them to the domain size first.
    pub fn fft_in_place(&self, coeffs: &mut Vec<F>) -> Result<(), PolynomialError> {
        let timer = start_timer!(|| format!("Forward NTT of size {}", self.size));
        coeffs.resize(self.size(), F::zero());
        forward_ntt(coeffs, self.group_gen)?;
        end_timer!(timer);
        Ok(())
    }

    /// Computes the coefficients of the polynomial with the given evaluations over the domain.
    pub fn ifft(&self, evals: &[F]) -> Result<Vec<F>, PolynomialError> {
        let mut evals = evals.to_vec();
        self.ifft_in_place(&mut evals)?;
        Ok(evals)
    }

    /// Interpolates the evaluations in place.
    pub fn ifft_in_place(&self, evals: &mut Vec<F>) -> Result<(), PolynomialError> {
        let timer = start_timer!(|| format!("Inverse NTT of size {}", self.size));
        evals.resize(self.size(), F::zero());
        inverse_ntt(evals, self.group_gen_inv)?;
        let size_inv = self.size_inv;
        cfg_iter_mut!(evals).for_each(|val| *val *= &size_inv);
        end_timer!(timer);
        Ok(())
    }
}
