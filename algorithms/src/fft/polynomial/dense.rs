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

//! A polynomial represented in coefficient form.

use polydfs_errors::algorithms::PolynomialError;
use polydfs_models::curves::Field;

use rand::Rng;
use std::{
    fmt,
    ops::{Deref, DerefMut},
};

/// Stores a polynomial in coefficient form.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct DensePolynomial<F: Field> {
    /// The coefficient of `x^i` is stored at location `i` in `self.coeffs`.
    pub coeffs: Vec<F>,
}

impl<F: Field> fmt::Debug for DensePolynomial<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        for (i, coeff) in self.coeffs.iter().enumerate().filter(|(_, c)| !c.is_zero()) {
            if i == 0 {
                write!(f, "\n{:?}", coeff)?;
            } else if i == 1 {
                write!(f, " + \n{:?} * x", coeff)?;
            } else {
                write!(f, " + \n{:?} * x^{}", coeff, i)?;
            }
        }
        Ok(())
    }
}

impl<F: Field> Deref for DensePolynomial<F> {
    type Target = [F];

    fn deref(&self) -> &[F] {
        &self.coeffs
    }
}

impl<F: Field> DerefMut for DensePolynomial<F> {
    fn deref_mut(&mut self) -> &mut [F] {
        &mut self.coeffs
    }
}

impl<F: Field> DensePolynomial<F> {
    /// Returns the zero polynomial.
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Checks if the given polynomial is zero.
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|coeff| coeff.is_zero())
    }

    /// Constructs a new polynomial from a list of coefficients.
    pub fn from_coefficients_slice(coeffs: &[F]) -> Self {
        Self::from_coefficients_vec(coeffs.to_vec())
    }

    /// Constructs a new polynomial from a list of coefficients, dropping trailing zeros.
    pub fn from_coefficients_vec(mut coeffs: Vec<F>) -> Self {
        trim_trailing_zeros(&mut coeffs);
        Self { coeffs }
    }

    /// Returns the degree of the polynomial, with the zero polynomial reported as degree 0.
    pub fn degree(&self) -> usize {
        self.coeffs.iter().rposition(|coeff| !coeff.is_zero()).unwrap_or(0)
    }

    /// Returns the coefficient of the highest nonzero term, if any.
    pub fn leading_coefficient(&self) -> Option<&F> {
        self.coeffs.iter().rev().find(|coeff| !coeff.is_zero())
    }

    /// Evaluates `self` at the given `point` by Horner's rule.
    pub fn evaluate(&self, point: F) -> F {
        self.coeffs.iter().rev().fold(F::zero(), |mut acc, coeff| {
            acc *= &point;
            acc += coeff;
            acc
        })
    }

    /// Perform a naive n^2 multiplication of `self` by `other`.
    pub fn naive_mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            DensePolynomial::zero()
        } else {
            let mut result = vec![F::zero(); self.coeffs.len() + other.coeffs.len() - 1];
            for (i, self_coeff) in self.coeffs.iter().enumerate() {
                for (j, other_coeff) in other.coeffs.iter().enumerate() {
                    result[i + j] += &(*self_coeff * other_coeff);
                }
            }
            DensePolynomial::from_coefficients_vec(result)
        }
    }

    /// Outputs a polynomial of degree `d` where each coefficient is sampled uniformly at random
    /// from the field `F`.
    pub fn rand<R: Rng>(d: usize, rng: &mut R) -> Self {
        let random_coeffs = (0..(d + 1)).map(|_| F::rand(rng)).collect();
        Self::from_coefficients_vec(random_coeffs)
    }

    /// Divides `self` by `divisor` using schoolbook long division,
    /// returning the quotient and the remainder.
    pub fn divide_with_q_and_r(&self, divisor: &Self) -> Result<(Self, Self), PolynomialError> {
        let leading_inv = divisor
            .leading_coefficient()
            .and_then(|leading| leading.inverse())
            .ok_or(PolynomialError::DivisionByZeroLeadingCoefficient)?;
        let divisor_degree = divisor.degree();

        let timer = start_timer!(|| format!("Polynomial division by a degree {} divisor", divisor_degree));

        let mut remainder = self.coeffs.clone();
        trim_trailing_zeros(&mut remainder);
        let mut quotient = vec![F::zero(); remainder.len().saturating_sub(divisor_degree)];

        while remainder.len() > divisor_degree {
            let shift = remainder.len() - 1 - divisor_degree;
            let factor = remainder[remainder.len() - 1] * leading_inv;
            quotient[shift] += &factor;
            for (r, d) in remainder[shift..].iter_mut().zip(&divisor.coeffs) {
                *r -= &(factor * d);
            }
            trim_trailing_zeros(&mut remainder);
        }

        end_timer!(timer);
        Ok((Self::from_coefficients_vec(quotient), Self::from_coefficients_vec(remainder)))
    }
}

fn trim_trailing_zeros<F: Field>(coeffs: &mut Vec<F>) {
    while coeffs.last().map_or(false, |c| c.is_zero()) {
        coeffs.pop();
    }
}
