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

use polydfs_models::curves::{Fp64, Fp64Parameters, FpParameters};

pub type Fr = Fp64<FrParameters>;

pub struct FrParameters;

impl Fp64Parameters for FrParameters {}

impl FpParameters for FrParameters {
    // GENERATOR = 7
    const GENERATOR: u64 = 7;
    // MODULUS = 18446744069414584321
    const MODULUS: u64 = 0xffff_ffff_0000_0001;
    const MODULUS_BITS: u32 = 64;
    /// t = (p - 1) / 2^s = 4294967295
    const T: u64 = 0xffff_ffff;
    const TWO_ADICITY: u32 = 32;
}
