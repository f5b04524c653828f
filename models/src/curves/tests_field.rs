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

//! Generic field-law checks, shared by every concrete field in the workspace.

use crate::curves::{Field, PrimeField};

use polydfs_errors::curves::FieldError;
use rand::Rng;

pub const ITERATIONS: u32 = 10;

fn random_ring_tests<F: Field, R: Rng>(rng: &mut R) {
    for _ in 0..ITERATIONS {
        let a = F::rand(rng);
        let b = F::rand(rng);
        let c = F::rand(rng);

        // -a + a = 0
        assert!((-a + &a).is_zero());
        // (a + b) + c = (a + c) + b
        assert_eq!((a + &b) + &c, (a + &c) + &b);
        // (a - b) + (b - a) = 0
        assert!(((a - &b) + &(b - &a)).is_zero());
        // (a * b) * c = (b * c) * a
        assert_eq!((a * &b) * &c, (b * &c) * &a);
        // (a + b) * c = a * c + b * c
        assert_eq!((a + &b) * &c, a * &c + &(b * &c));
        // a.double() = a + a, a.square() = a * a
        assert_eq!(a.double(), a + &a);
        assert_eq!(a.square(), a * &a);
    }
}

fn random_inversion_tests<F: Field, R: Rng>(rng: &mut R) {
    assert!(F::zero().inverse().is_none());

    for _ in 0..ITERATIONS {
        let a = F::rand(rng);
        if a.is_zero() {
            continue;
        }
        let b = a.inverse().unwrap();
        assert_eq!(a * &b, F::one());
        assert_eq!(F::one() / &a, b);

        let mut c = a;
        c.inverse_in_place().unwrap();
        assert_eq!(c, b);
    }
}

pub fn field_test<F: Field, R: Rng>(a: F, b: F, rng: &mut R) {
    let zero = F::zero();
    let one = F::one();
    assert!(zero.is_zero());
    assert!(!zero.is_one());
    assert!(one.is_one());
    assert_eq!(zero + &one, one);
    assert_eq!(-zero, zero);

    let two = one + &one;
    assert_ne!(one, two);
    assert_eq!(F::from(2u64), two);

    // a - a = 0
    assert_eq!(a - &a, zero);
    // 0 - a = -a
    assert_eq!(zero - &a, -a);
    // a + b = b + a
    assert_eq!(a + &b, b + &a);
    // a - b = -(b - a)
    assert_eq!(a - &b, -(b - &a));
    // a * 0 = 0
    assert_eq!(a * &zero, zero);
    // a * 2 = a.double()
    assert_eq!(a * &two, a.double());
    // a * a * a = a^3
    assert_eq!(a * &(a * &a), a.pow([0x3]));
    // (a + b)^2 = a^2 + 2ab + b^2
    assert_eq!((a + &b).square(), a.square() + &((a * &b).double()) + &b.square());
    // by-value and by-reference operators agree
    assert_eq!(a * b, a * &b);
    assert_eq!(a - b, a - &b);

    random_ring_tests::<F, R>(rng);
    random_inversion_tests::<F, R>(rng);
}

pub fn primefield_test<F: PrimeField>() {
    let one = F::one();
    assert_eq!(F::from_repr(one.into_repr()), one);
    assert_eq!(F::from_repr(0), F::zero());

    // The 2^s root of unity has order exactly 2^s.
    let mut omega = F::root_of_unity();
    for _ in 0..(F::two_adicity() - 1) {
        omega.square_in_place();
    }
    assert_eq!(omega, -one);
    assert_eq!(omega.square(), one);
}

pub fn roots_of_unity_test<F: PrimeField>() {
    for log_order in 0..=F::two_adicity().min(20) {
        let order = 1usize << log_order;
        let omega = F::primitive_root_of_unity(order).unwrap();
        assert_eq!(omega.pow([order as u64]), F::one());
        if order > 1 {
            assert_eq!(omega.pow([(order / 2) as u64]), -F::one());
        }
    }

    assert!(matches!(F::primitive_root_of_unity(0), Err(FieldError::NoRootOfUnity(0))));
    assert!(matches!(F::primitive_root_of_unity(12), Err(FieldError::NoRootOfUnity(12))));
    if (F::two_adicity() as usize) + 1 < usize::BITS as usize {
        let too_large = 1usize << (F::two_adicity() + 1);
        assert!(matches!(F::primitive_root_of_unity(too_large), Err(FieldError::NoRootOfUnity(order)) if order == too_large));
    }
}
