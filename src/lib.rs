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

//! Polynomials stored as their values over power-of-two multiplicative subgroups
//! of a prime field, with NTT-backed conversions and arithmetic.

#![forbid(unsafe_code)]

pub use polydfs_algorithms as algorithms;
pub use polydfs_curves as curves;
pub use polydfs_errors as errors;
pub use polydfs_models as models;

pub use polydfs_algorithms::fft::{DensePolynomial, EvaluationDomain, Evaluations};
pub use polydfs_errors::{algorithms::PolynomialError, curves::FieldError};

pub mod prelude {
    pub use polydfs_algorithms::fft::{forward_ntt, inverse_ntt, DensePolynomial, EvaluationDomain, Evaluations};
    pub use polydfs_curves::goldilocks::Fr;
    pub use polydfs_errors::{algorithms::PolynomialError, curves::FieldError};
    pub use polydfs_models::curves::{Field, One, PrimeField, UniformRand, Zero};
}
