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

use crate::fft::{DensePolynomial, EvaluationDomain, Evaluations};
use polydfs_curves::goldilocks::Fr;
use polydfs_errors::{algorithms::PolynomialError, curves::FieldError};
use polydfs_models::curves::{One, UniformRand, Zero};

use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use tracing_test::traced_test;

const ITERATIONS: usize = 5;

fn test_rng() -> XorShiftRng {
    XorShiftRng::seed_from_u64(1231275789u64)
}

/// Maps a signed integer into the field.
fn field(value: i64) -> Fr {
    match value < 0 {
        true => -Fr::from(value.unsigned_abs()),
        false => Fr::from(value as u64),
    }
}

fn values(values: &[i64]) -> Vec<Fr> {
    values.iter().map(|v| field(*v)).collect()
}

fn poly(coeffs: &[i64]) -> DensePolynomial<Fr> {
    DensePolynomial::from_coefficients_vec(values(coeffs))
}

fn evaluations(coeffs: &[i64]) -> Evaluations<Fr> {
    Evaluations::from_coefficients(&poly(coeffs)).unwrap()
}

/// Samples a polynomial of degree `degree` evaluated over `size` points.
fn random_evaluations<R: Rng>(degree: usize, size: usize, rng: &mut R) -> Evaluations<Fr> {
    Evaluations::from_coefficients_with_size(&DensePolynomial::rand(degree, rng), size).unwrap()
}

#[test]
fn test_constructors() {
    let zero = Evaluations::<Fr>::zero_with_size(3, 8).unwrap();
    assert_eq!(zero.size(), 8);
    assert_eq!(zero.degree(), 3);
    assert_eq!(zero.max_degree(), 8);
    assert!(zero.iter().all(|eval| eval.is_zero()));

    let filled = Evaluations::from_element(0, 4, Fr::from(7u64)).unwrap();
    assert_eq!(filled.evals(), &[Fr::from(7u64); 4]);
    assert_eq!(filled.coefficients().unwrap(), poly(&[7]));

    let default = Evaluations::<Fr>::default();
    assert_eq!(default.size(), 1);
    assert_eq!(default.degree(), 0);
    assert!(default.is_zero());
    assert_eq!(default, Evaluations::zero());

    let raw = Evaluations::new(2, values(&[1, 2, 3, 4])).unwrap();
    assert_eq!(raw.degree(), 2);
    assert_eq!(*raw.first(), Fr::from(1u64));
    assert_eq!(*raw.last(), Fr::from(4u64));
    assert_eq!(raw.clone().into_evals(), values(&[1, 2, 3, 4]));
}

#[test]
fn test_constructors_reject_invalid_sizes() {
    for size in [0, 3, 5, 12] {
        assert!(matches!(
            Evaluations::new(0, vec![Fr::one(); size]),
            Err(PolynomialError::InvalidDomainSize(s)) if s == size
        ));
        assert!(matches!(
            Evaluations::<Fr>::zero_with_size(0, size),
            Err(PolynomialError::InvalidDomainSize(s)) if s == size
        ));
    }
    assert!(matches!(
        Evaluations::from_coefficients_with_size(&poly(&[1, 2, 3]), 2),
        Err(PolynomialError::DomainTooSmall { degree: 2, size: 2 })
    ));
}

#[test]
fn test_from_coefficients_sizes_domain() {
    assert_eq!(evaluations(&[]).size(), 1);
    assert_eq!(evaluations(&[4]).size(), 1);
    assert_eq!(evaluations(&[1, 2, 3]).size(), 4);
    assert_eq!(evaluations(&[1, 2, 3, 4, 5]).size(), 8);
    assert_eq!(evaluations(&[1, 2, 3, 4, 5]).degree(), 4);
}

#[test]
fn test_values_are_evaluations_on_the_domain() {
    let mut rng = test_rng();
    let p = DensePolynomial::<Fr>::rand(12, &mut rng);
    let evals = Evaluations::from_coefficients_with_size(&p, 32).unwrap();
    let domain = EvaluationDomain::<Fr>::new(32).unwrap();
    for (i, eval) in evals.iter().enumerate() {
        assert_eq!(*eval, p.evaluate(domain.element(i)));
    }
    assert_eq!(evals.interpolate().unwrap(), p);
}

#[test]
fn test_get_and_index() {
    let mut evals = Evaluations::new(3, values(&[1, 2, 3, 4])).unwrap();
    assert_eq!(*evals.get(2).unwrap(), Fr::from(3u64));
    assert!(matches!(evals.get(4), Err(PolynomialError::IndexOutOfRange { index: 4, size: 4 })));
    assert!(matches!(evals.get_mut(9), Err(PolynomialError::IndexOutOfRange { index: 9, size: 4 })));

    evals[1] = Fr::from(20u64);
    *evals.get_mut(3).unwrap() += &Fr::one();
    evals.iter_mut().for_each(|eval| *eval += &Fr::one());
    assert_eq!(evals.evals(), values(&[2, 21, 4, 6]).as_slice());
    assert_eq!(evals.size(), 4);
}

#[test]
#[should_panic]
fn test_index_out_of_range_panics() {
    let evals = Evaluations::new(0, values(&[1, 2])).unwrap();
    let _value = evals[2];
}

#[test]
fn test_swap() {
    let mut a = Evaluations::new(1, values(&[1, 2])).unwrap();
    let mut b = Evaluations::new(3, values(&[5, 6, 7, 8])).unwrap();
    a.swap(&mut b);
    assert_eq!(a.size(), 4);
    assert_eq!(a.degree(), 3);
    assert_eq!(b.evals(), values(&[1, 2]).as_slice());
    assert_eq!(b.degree(), 1);
}

#[test]
fn test_equality_includes_degree() {
    let a = Evaluations::new(1, values(&[1, 2])).unwrap();
    let mut b = a.clone();
    assert_eq!(a, b);
    b.set_degree(0);
    assert_ne!(a, b);
}

#[test]
fn test_resize_round_trip() {
    let mut rng = test_rng();

    for degree in 0..20usize {
        for _ in 0..ITERATIONS {
            let size = (degree + 1).next_power_of_two();
            let original = random_evaluations(degree, size, &mut rng);

            let mut lifted = original.clone();
            lifted.resize(size * 4).unwrap();
            assert_eq!(lifted.size(), size * 4);
            assert_eq!(lifted.degree(), degree);
            assert_eq!(lifted.coefficients().unwrap(), original.coefficients().unwrap());

            lifted.resize(size).unwrap();
            assert_eq!(lifted, original);
        }
    }
}

#[test]
fn test_resize_shrink_then_grow_round_trip() {
    let mut rng = test_rng();

    for _ in 0..ITERATIONS {
        let original = random_evaluations(3, 16, &mut rng);

        let mut shrunk = original.clone();
        shrunk.resize(4).unwrap();
        assert_eq!(shrunk.size(), 4);
        assert_eq!(shrunk.degree(), 3);
        assert_eq!(shrunk.coefficients().unwrap(), original.coefficients().unwrap());

        shrunk.resize(16).unwrap();
        assert_eq!(shrunk, original);
    }
}

#[test]
fn test_resize_to_same_size_is_identity() {
    let mut rng = test_rng();
    let original = random_evaluations(5, 8, &mut rng);
    let mut resized = original.clone();
    resized.resize(8).unwrap();
    assert_eq!(resized, original);
}

#[test]
fn test_resize_below_degree_fails_and_leaves_values() {
    let mut rng = test_rng();
    let original = random_evaluations(9, 16, &mut rng);
    let mut evals = original.clone();

    assert!(matches!(evals.resize(8), Err(PolynomialError::DomainTooSmall { degree: 9, size: 8 })));
    assert!(matches!(evals.resize(12), Err(PolynomialError::InvalidDomainSize(12))));
    assert!(matches!(
        evals.resize(1 << 33),
        Err(PolynomialError::FieldError(FieldError::NoRootOfUnity(_)))
    ));
    assert_eq!(evals, original);
}

#[test]
fn test_shrinking_truncates_high_coefficients() {
    // Shrinking to exactly the degree bound drops the leading coefficient.
    let mut evals = evaluations(&[1, 2, 3, 4, 5]);
    evals.resize(4).unwrap();
    assert_eq!(evals.coefficients().unwrap(), poly(&[1, 2, 3, 4]));
}

#[test]
fn test_add_sub_examples() {
    let a = Evaluations::new(7, values(&[1, 3, 4, 25, 6, 7, 7, 2])).unwrap();
    let b = Evaluations::new(7, values(&[9, 3, 11, 14, 7, 1, 5, 8])).unwrap();

    let sum = &a + &b;
    assert_eq!(sum.evals(), values(&[10, 6, 15, 39, 13, 8, 12, 10]).as_slice());
    assert_eq!(sum.degree(), 7);
    assert_eq!(&b + &a, sum);

    let difference = &a - &b;
    assert_eq!(difference.evals(), values(&[-8, 0, -7, 11, -1, 6, 2, -6]).as_slice());
    assert_eq!(difference.degree(), 7);
}

#[test]
fn test_add_sub_uneven_sizes() {
    let mut rng = test_rng();

    for _ in 0..ITERATIONS {
        let a = random_evaluations(3, 4, &mut rng);
        let b = random_evaluations(10, 16, &mut rng);

        let sum = a.checked_add(&b).unwrap();
        assert_eq!(sum.size(), 16);
        assert_eq!(sum.degree(), 10);
        assert_eq!(sum, b.checked_add(&a).unwrap());

        let mut expected = b.coefficients().unwrap().coeffs;
        for (e, c) in expected.iter_mut().zip(&a.coefficients().unwrap().coeffs) {
            *e += c;
        }
        assert_eq!(sum.coefficients().unwrap(), DensePolynomial::from_coefficients_vec(expected));

        let difference = &(&sum - &b) - &a;
        assert!(difference.iter().all(|eval| eval.is_zero()));
        assert!(difference.is_zero());
    }
}

#[test]
fn test_additive_identity() {
    let mut rng = test_rng();
    let a = random_evaluations(6, 8, &mut rng);
    let zero = Evaluations::zero();

    assert_eq!(&a + &zero, a);
    assert_eq!(&zero + &a, a);
    assert_eq!(&a - &zero, a);

    let cancelled = &a - &a;
    assert!(cancelled.is_zero());
    assert_eq!(cancelled, Evaluations::zero_with_size(0, 8).unwrap());
    assert!(cancelled.coefficients().unwrap().is_zero());
}

#[test]
fn test_negation() {
    let mut rng = test_rng();
    let a = random_evaluations(6, 8, &mut rng);
    let negated = -&a;
    assert_eq!(negated.degree(), a.degree());
    assert_eq!(&negated + &a, Evaluations::zero_with_size(0, 8).unwrap());
    assert_eq!(-negated, a);
}

#[test]
fn test_mul_example() {
    let a = evaluations(&[13, 0, 1]);
    let b = evaluations(&[5, 0, 0, 13, 0, 1]);
    let expected = poly(&[65, 0, 5, 169, 0, 26, 0, 1]);

    for product in [&a * &b, &b * &a] {
        assert_eq!(product.degree(), 7);
        assert_eq!(product.size(), 8);
        assert_eq!(product.coefficients().unwrap(), expected);
    }
}

#[test]
fn test_mul_random() {
    let mut rng = test_rng();

    for a_degree in 0..12 {
        for b_degree in 0..12 {
            let a_poly = DensePolynomial::<Fr>::rand(a_degree, &mut rng);
            let b_poly = DensePolynomial::<Fr>::rand(b_degree, &mut rng);
            let a = Evaluations::from_coefficients(&a_poly).unwrap();
            let b = Evaluations::from_coefficients(&b_poly).unwrap();

            let product = a.checked_mul(&b).unwrap();
            assert_eq!(product.degree(), a_degree + b_degree);
            assert!(product.size() > product.degree());
            assert!(product.size().is_power_of_two());
            assert_eq!(product.coefficients().unwrap(), a_poly.naive_mul(&b_poly));
        }
    }
}

#[test]
fn test_mul_degree_overflow_is_an_error() {
    let a = Evaluations::new(usize::MAX, values(&[1])).unwrap();
    let b = Evaluations::new(1, values(&[1, 1])).unwrap();
    assert!(matches!(a.checked_mul(&b), Err(PolynomialError::InvalidDomainSize(usize::MAX))));

    let c = Evaluations::new(usize::MAX - 1, values(&[1])).unwrap();
    let d = Evaluations::new(1, values(&[1])).unwrap();
    assert!(matches!(c.checked_mul(&d), Err(PolynomialError::InvalidDomainSize(usize::MAX))));
}

#[test]
fn test_mul_by_zero() {
    let mut rng = test_rng();
    let a = random_evaluations(5, 8, &mut rng);
    let zero = Evaluations::zero_with_size(0, 8).unwrap();

    let product = &a * &zero;
    assert_eq!(product.degree(), 5);
    assert!(product.iter().all(|eval| eval.is_zero()));
    assert!(product.coefficients().unwrap().is_zero());
}

#[test]
fn test_div_rem_example() {
    let a = evaluations(&[5, 0, 0, 13, 0, 1]);
    let b = evaluations(&[13, 0, 1]);

    let quotient = &a / &b;
    assert_eq!(quotient.coefficients().unwrap(), poly(&[0, 0, 0, 1]));
    assert_eq!(quotient.degree(), 3);
    assert_eq!(quotient.size(), a.size());

    let remainder = &a % &b;
    assert_eq!(remainder.coefficients().unwrap(), poly(&[5]));
    assert_eq!(remainder.degree(), 0);
    assert_eq!(remainder.size(), a.size());
}

#[test]
fn test_division_law() {
    let mut rng = test_rng();

    for a_degree in 0..16 {
        for b_degree in 0..16 {
            let a = random_evaluations(a_degree, 16, &mut rng);
            let b = random_evaluations(b_degree, 16, &mut rng);

            let (quotient, remainder) = a.divide_with_q_and_r(&b).unwrap();
            assert_eq!(quotient, a.checked_div(&b).unwrap());
            assert_eq!(remainder, a.checked_rem(&b).unwrap());

            let r = remainder.coefficients().unwrap();
            assert!(r.is_zero() || r.degree() < b.coefficients().unwrap().degree());

            let recombined = &(&quotient * &b) + &remainder;
            assert_eq!(recombined.coefficients().unwrap(), a.coefficients().unwrap());
        }
    }
}

#[test]
fn test_division_by_zero() {
    let a = evaluations(&[1, 2, 3]);
    let zero = Evaluations::zero_with_size(0, 4).unwrap();

    assert!(matches!(a.checked_div(&zero), Err(PolynomialError::DivisionByZeroLeadingCoefficient)));
    assert!(matches!(a.checked_rem(&Evaluations::zero()), Err(PolynomialError::DivisionByZeroLeadingCoefficient)));
}

#[test]
#[should_panic(expected = "Cannot divide by a polynomial whose leading coefficient is not invertible")]
fn test_division_operator_panics_on_zero() {
    let a = evaluations(&[1, 2, 3]);
    let _ = &a / &Evaluations::zero();
}

#[test]
fn test_assign_operators() {
    let mut rng = test_rng();
    let a = random_evaluations(3, 4, &mut rng);
    let b = random_evaluations(2, 4, &mut rng);

    let mut c = a.clone();
    c += &b;
    assert_eq!(c, &a + &b);
    c -= &b;
    assert_eq!(c.coefficients().unwrap(), a.coefficients().unwrap());

    let mut c = a.clone();
    c *= &b;
    assert_eq!(c, &a * &b);
    c /= &b;
    assert_eq!(c.coefficients().unwrap(), a.coefficients().unwrap());

    let mut c = a.clone();
    c %= &b;
    assert_eq!(c, &a % &b);

    assert_eq!(a.clone() + b.clone(), &a + &b);
    assert_eq!(a.clone() * &b, &a * &b);
}

#[test]
fn test_evaluate() {
    let mut rng = test_rng();

    for degree in 0..20 {
        let p = DensePolynomial::<Fr>::rand(degree, &mut rng);
        let evals = Evaluations::from_coefficients(&p).unwrap();
        for _ in 0..ITERATIONS {
            let point = Fr::rand(&mut rng);
            let mut expected = Fr::zero();
            let mut power = Fr::one();
            for coeff in &p.coeffs {
                expected += &(*coeff * power);
                power *= &point;
            }
            assert_eq!(evals.evaluate(point).unwrap(), expected);
        }
    }

    // 1 + 2x + 3x^2 at x = 2
    assert_eq!(evaluations(&[1, 2, 3]).evaluate(Fr::from(2u64)).unwrap(), Fr::from(17u64));
}

#[test]
fn test_reverse() {
    let mut evals = Evaluations::new(3, values(&[1, 2, 3, 4])).unwrap();
    evals.reverse(4).unwrap();
    assert_eq!(evals.evals(), values(&[4, 3, 2, 1]).as_slice());

    // Reversal happens before the resize.
    let mut reversed = Evaluations::new(3, values(&[1, 2, 3, 4])).unwrap();
    reversed.reverse(8).unwrap();
    let mut expected = Evaluations::new(3, values(&[4, 3, 2, 1])).unwrap();
    expected.resize(8).unwrap();
    assert_eq!(reversed, expected);

    let original = Evaluations::new(3, values(&[1, 2, 3, 4])).unwrap();
    let mut failed = original.clone();
    assert!(failed.reverse(2).is_err());
    assert_eq!(failed, original);
}

#[test]
fn test_is_zero_checks_the_degree_bound() {
    // A nonzero constant has a zero degree bound.
    let constant = Evaluations::from_element(0, 4, Fr::from(3u64)).unwrap();
    assert!(constant.is_zero());

    let zero_values = Evaluations::<Fr>::zero_with_size(2, 4).unwrap();
    assert!(!zero_values.is_zero());
}

#[test]
fn test_large_domain_matches_horner() {
    let mut rng = test_rng();
    let p = DensePolynomial::<Fr>::rand(1000, &mut rng);
    let domain = EvaluationDomain::<Fr>::new(1 << 12).unwrap();

    let evals = Evaluations::from_coefficients_with_size(&p, 1 << 12).unwrap();
    for i in (0..1 << 12).step_by(97) {
        assert_eq!(evals[i], p.evaluate(domain.element(i)));
    }
}

#[test]
#[traced_test]
fn test_failures_are_logged() {
    let mut evals = evaluations(&[1, 2, 3, 4, 5]);
    assert!(evals.resize(2).is_err());
    assert!(logs_contain("Cannot resize a degree 4 polynomial to 2 points"));

    assert!(evals.checked_div(&Evaluations::zero()).is_err());
    assert!(logs_contain("Cannot divide a degree 4 polynomial"));
}
