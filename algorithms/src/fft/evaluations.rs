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

//! A polynomial represented in evaluations form.
//!
//! An [`Evaluations`] stores the values `p(ω^0), ..., p(ω^{n-1})` of a polynomial `p`
//! on the multiplicative subgroup of size `n = 2^k`, together with a caller-declared
//! bound on the degree of `p`. The bound is metadata: it is carried through the
//! arithmetic operators by the rules documented on each of them, and is never
//! recomputed from the values except where stated.

use crate::fft::{DensePolynomial, EvaluationDomain};
use polydfs_errors::algorithms::PolynomialError;
use polydfs_models::curves::PrimeField;

use std::{
    borrow::Cow,
    mem,
    ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
    slice,
};

/// Stores a polynomial in evaluation form.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Evaluations<F: PrimeField> {
    /// The evaluations of the polynomial over the domain of size `evals.len()`.
    evals: Vec<F>,
    /// The declared upper bound on the degree of the polynomial.
    degree: usize,
}

impl<F: PrimeField> Default for Evaluations<F> {
    /// Returns the zero polynomial on a one-point domain.
    fn default() -> Self {
        Self { evals: vec![F::zero()], degree: 0 }
    }
}

impl<F: PrimeField> Evaluations<F> {
    /// Returns the zero polynomial on a one-point domain.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Constructs `Self` from a buffer of point values and a declared degree bound.
    /// The buffer length must be a nonzero power of two.
    pub fn new(degree: usize, evals: Vec<F>) -> Result<Self, PolynomialError> {
        check_domain_size(evals.len())?;
        Ok(Self { evals, degree })
    }

    /// Constructs the all-zero buffer of `size` points with the given degree bound.
    pub fn zero_with_size(degree: usize, size: usize) -> Result<Self, PolynomialError> {
        Self::from_element(degree, size, F::zero())
    }

    /// Constructs a buffer of `size` copies of `value` with the given degree bound.
    pub fn from_element(degree: usize, size: usize, value: F) -> Result<Self, PolynomialError> {
        check_domain_size(size)?;
        Ok(Self { evals: vec![value; size], degree })
    }

    /// Evaluates `poly` over the smallest power-of-two domain that holds all its coefficients.
    pub fn from_coefficients(poly: &DensePolynomial<F>) -> Result<Self, PolynomialError> {
        let size = poly.coeffs.len().max(1);
        let size = size.checked_next_power_of_two().ok_or(PolynomialError::InvalidDomainSize(size))?;
        Self::from_coefficients_with_size(poly, size)
    }

    /// Evaluates `poly` over the domain of exactly `size` points.
    pub fn from_coefficients_with_size(poly: &DensePolynomial<F>, size: usize) -> Result<Self, PolynomialError> {
        let degree = poly.degree();
        if !poly.is_zero() && degree >= size {
            debug!("Cannot evaluate a degree {} polynomial over {} points", degree, size);
            return Err(PolynomialError::DomainTooSmall { degree, size });
        }
        let domain = EvaluationDomain::new(size)?;
        trace!("Evaluating a degree {} polynomial over {} points", degree, size);
        Ok(Self { evals: domain.fft(&poly.coeffs)?, degree })
    }

    /// Returns the number of points in the evaluation domain.
    pub fn size(&self) -> usize {
        self.evals.len()
    }

    /// Returns the declared degree bound.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Overrides the declared degree bound. No resizing takes place.
    pub fn set_degree(&mut self, degree: usize) {
        self.degree = degree;
    }

    /// Returns the largest number of coefficients the domain can represent, i.e. its size.
    pub fn max_degree(&self) -> usize {
        self.size()
    }

    /// Returns the stored point values.
    pub fn evals(&self) -> &[F] {
        &self.evals
    }

    /// Consumes `self`, returning the stored point values.
    pub fn into_evals(self) -> Vec<F> {
        self.evals
    }

    /// Returns the value at the `index`-th domain point.
    pub fn get(&self, index: usize) -> Result<&F, PolynomialError> {
        let size = self.size();
        self.evals.get(index).ok_or(PolynomialError::IndexOutOfRange { index, size })
    }

    /// Returns a mutable reference to the value at the `index`-th domain point.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut F, PolynomialError> {
        let size = self.size();
        self.evals.get_mut(index).ok_or(PolynomialError::IndexOutOfRange { index, size })
    }

    pub fn first(&self) -> &F {
        &self.evals[0]
    }

    pub fn last(&self) -> &F {
        &self.evals[self.evals.len() - 1]
    }

    pub fn iter(&self) -> slice::Iter<'_, F> {
        self.evals.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, F> {
        self.evals.iter_mut()
    }

    /// Exchanges the contents of `self` and `other`.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Returns `true` if the declared degree bound is zero.
    /// This is a check on the bound, not on the stored values.
    pub fn is_zero(&self) -> bool {
        self.degree == 0
    }

    /// Moves the polynomial onto the domain of `new_size` points.
    ///
    /// The values are interpolated, truncated or zero-padded in coefficient form,
    /// and evaluated again over the new domain. The degree bound is left untouched.
    /// On failure `self` is left unchanged.
    pub fn resize(&mut self, new_size: usize) -> Result<(), PolynomialError> {
        let new_domain = self.check_resize(new_size)?;
        if new_size == self.size() {
            return Ok(());
        }

        trace!("Resizing a degree {} polynomial from {} to {} points", self.degree, self.size(), new_size);
        let domain = EvaluationDomain::new(self.size())?;
        domain.ifft_in_place(&mut self.evals)?;
        new_domain.fft_in_place(&mut self.evals)
    }

    /// Validates a resize to `new_size` points, returning the target domain.
    fn check_resize(&self, new_size: usize) -> Result<EvaluationDomain<F>, PolynomialError> {
        if new_size < self.degree {
            debug!("Cannot resize a degree {} polynomial to {} points", self.degree, new_size);
            return Err(PolynomialError::DomainTooSmall { degree: self.degree, size: new_size });
        }
        EvaluationDomain::new(new_size).map_err(|error| {
            debug!("Cannot resize a polynomial to {} points: {}", new_size, error);
            error
        })
    }

    /// Reverses the stored values in place, then resizes to `target_len` points.
    /// On failure `self` is left unchanged.
    pub fn reverse(&mut self, target_len: usize) -> Result<(), PolynomialError> {
        self.check_resize(target_len)?;
        self.evals.reverse();
        self.resize(target_len)
    }

    /// Returns the coefficients of the polynomial, with trailing zeros removed.
    pub fn coefficients(&self) -> Result<DensePolynomial<F>, PolynomialError> {
        let domain = EvaluationDomain::new(self.size())?;
        Ok(DensePolynomial::from_coefficients_vec(domain.ifft(&self.evals)?))
    }

    /// Consumes `self`, returning its coefficient form.
    pub fn interpolate(self) -> Result<DensePolynomial<F>, PolynomialError> {
        let Self { mut evals, .. } = self;
        let domain = EvaluationDomain::new(evals.len())?;
        domain.ifft_in_place(&mut evals)?;
        Ok(DensePolynomial::from_coefficients_vec(evals))
    }

    /// Evaluates the polynomial at an arbitrary `point`.
    pub fn evaluate(&self, point: F) -> Result<F, PolynomialError> {
        Ok(self.coefficients()?.evaluate(point))
    }

    /// Returns `self` moved onto a domain of `size` points, borrowing when no move is needed.
    fn lift_to(&self, size: usize) -> Result<Cow<'_, Self>, PolynomialError> {
        if self.size() == size {
            return Ok(Cow::Borrowed(self));
        }
        let mut lifted = self.clone();
        lifted.resize(size)?;
        Ok(Cow::Owned(lifted))
    }

    /// Applies `op` pointwise over the larger of the two domains.
    /// The degree bound of the result is the larger of the two bounds,
    /// unless every resulting value is zero, in which case it is zero.
    fn combine(&self, other: &Self, op: impl Fn(&mut F, &F)) -> Result<Self, PolynomialError> {
        let size = self.size().max(other.size());
        let mut result = self.lift_to(size)?.into_owned();
        let other = other.lift_to(size)?;

        result.evals.iter_mut().zip(&other.evals).for_each(|(a, b)| op(a, b));
        result.degree = match result.evals.iter().all(|eval| eval.is_zero()) {
            true => 0,
            false => self.degree.max(other.degree),
        };
        Ok(result)
    }

    /// Returns `self + other`.
    pub fn checked_add(&self, other: &Self) -> Result<Self, PolynomialError> {
        self.combine(other, |a, b| *a += b)
    }

    /// Returns `self - other`.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, PolynomialError> {
        self.combine(other, |a, b| *a -= b)
    }

    /// Returns `self * other`, evaluated over a domain large enough for the product.
    /// The degree bound of the result is the sum of the two bounds.
    pub fn checked_mul(&self, other: &Self) -> Result<Self, PolynomialError> {
        let degree = self.degree.checked_add(other.degree).ok_or(PolynomialError::InvalidDomainSize(usize::MAX))?;
        let points = degree.checked_add(1).ok_or(PolynomialError::InvalidDomainSize(usize::MAX))?;
        let size = self.size().max(other.size()).max(points);
        let size = size.checked_next_power_of_two().ok_or(PolynomialError::InvalidDomainSize(size))?;

        let mut result = self.lift_to(size)?.into_owned();
        let other = other.lift_to(size)?;

        result.evals.iter_mut().zip(&other.evals).for_each(|(a, b)| *a *= b);
        result.degree = degree;
        Ok(result)
    }

    /// Divides `self` by `divisor`, returning the quotient and the remainder.
    ///
    /// The division is carried out on the coefficients. Both results are evaluated
    /// over the dividend's domain, with degree bounds set to their actual degrees.
    pub fn divide_with_q_and_r(&self, divisor: &Self) -> Result<(Self, Self), PolynomialError> {
        let dividend = self.coefficients()?;
        let divisor = divisor.coefficients()?;
        let (quotient, remainder) = dividend.divide_with_q_and_r(&divisor).map_err(|error| {
            debug!("Cannot divide a degree {} polynomial: {}", self.degree, error);
            error
        })?;

        let size = self.size();
        Ok((Self::from_coefficients_with_size(&quotient, size)?, Self::from_coefficients_with_size(&remainder, size)?))
    }

    /// Returns the quotient of `self` by `divisor`.
    pub fn checked_div(&self, divisor: &Self) -> Result<Self, PolynomialError> {
        Ok(self.divide_with_q_and_r(divisor)?.0)
    }

    /// Returns the remainder of `self` by `divisor`.
    pub fn checked_rem(&self, divisor: &Self) -> Result<Self, PolynomialError> {
        Ok(self.divide_with_q_and_r(divisor)?.1)
    }
}

fn check_domain_size(size: usize) -> Result<(), PolynomialError> {
    match size.is_power_of_two() {
        true => Ok(()),
        false => Err(PolynomialError::InvalidDomainSize(size)),
    }
}

/// Unwraps the result of an operator, panicking with the error message on failure.
fn unwrap_or_panic<F: PrimeField>(result: Result<Evaluations<F>, PolynomialError>) -> Evaluations<F> {
    match result {
        Ok(result) => result,
        Err(error) => panic!("{}", error),
    }
}

impl<F: PrimeField> Index<usize> for Evaluations<F> {
    type Output = F;

    fn index(&self, index: usize) -> &F {
        &self.evals[index]
    }
}

impl<F: PrimeField> IndexMut<usize> for Evaluations<F> {
    fn index_mut(&mut self, index: usize) -> &mut F {
        &mut self.evals[index]
    }
}

impl<'a, F: PrimeField> IntoIterator for &'a Evaluations<F> {
    type IntoIter = slice::Iter<'a, F>;
    type Item = &'a F;

    fn into_iter(self) -> Self::IntoIter {
        self.evals.iter()
    }
}

impl<F: PrimeField> Neg for Evaluations<F> {
    type Output = Evaluations<F>;

    #[inline]
    fn neg(mut self) -> Evaluations<F> {
        self.evals.iter_mut().for_each(|eval| *eval = -*eval);
        self
    }
}

impl<'a, F: PrimeField> Neg for &'a Evaluations<F> {
    type Output = Evaluations<F>;

    #[inline]
    fn neg(self) -> Evaluations<F> {
        -self.clone()
    }
}

macro_rules! impl_evaluations_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $checked:ident) => {
        impl<'a, 'b, F: PrimeField> $trait<&'a Evaluations<F>> for &'b Evaluations<F> {
            type Output = Evaluations<F>;

            #[inline]
            fn $method(self, other: &'a Evaluations<F>) -> Evaluations<F> {
                unwrap_or_panic(self.$checked(other))
            }
        }

        impl<'a, F: PrimeField> $trait<&'a Evaluations<F>> for Evaluations<F> {
            type Output = Evaluations<F>;

            #[inline]
            fn $method(self, other: &'a Evaluations<F>) -> Evaluations<F> {
                unwrap_or_panic(self.$checked(other))
            }
        }

        impl<F: PrimeField> $trait<Evaluations<F>> for Evaluations<F> {
            type Output = Evaluations<F>;

            #[inline]
            fn $method(self, other: Evaluations<F>) -> Evaluations<F> {
                unwrap_or_panic(self.$checked(&other))
            }
        }

        impl<'a, F: PrimeField> $assign_trait<&'a Evaluations<F>> for Evaluations<F> {
            #[inline]
            fn $assign_method(&mut self, other: &'a Evaluations<F>) {
                *self = unwrap_or_panic(self.$checked(other));
            }
        }
    };
}

impl_evaluations_op!(Add, add, AddAssign, add_assign, checked_add);
impl_evaluations_op!(Sub, sub, SubAssign, sub_assign, checked_sub);
impl_evaluations_op!(Mul, mul, MulAssign, mul_assign, checked_mul);
impl_evaluations_op!(Div, div, DivAssign, div_assign, checked_div);
impl_evaluations_op!(Rem, rem, RemAssign, rem_assign, checked_rem);
