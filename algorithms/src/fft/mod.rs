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

//! Polynomials over power-of-two multiplicative subgroups of a prime field.
//!
//! The central type is [`Evaluations`], a polynomial stored as its values on the
//! `n`-th roots of unity. Conversions to and from coefficient form go through the
//! number-theoretic transform in [`ntt`].

pub mod domain;
pub use domain::*;

pub mod evaluations;
pub use evaluations::*;

#[cfg(feature = "parallel")]
pub(crate) mod multicore;

pub mod ntt;
pub use ntt::*;

pub mod polynomial;
pub use polynomial::*;

#[cfg(test)]
mod tests;
