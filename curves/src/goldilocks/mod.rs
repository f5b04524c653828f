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

//! The Goldilocks prime field, `p = 2^64 - 2^32 + 1`.
//! Its multiplicative group has two-adicity 32, so it supports radix-2 domains of up to 2^32 points.

pub mod fr;
pub use fr::*;
