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

//! A thin wrapper around `rayon` that splits work evenly across the global thread pool.

use rayon::Scope;

#[derive(Copy, Clone, Debug)]
pub(crate) struct Worker {
    threads: usize,
}

impl Worker {
    pub(crate) fn new() -> Self {
        Self { threads: rayon::current_num_threads().max(1) }
    }

    pub(crate) fn log_num_threads(&self) -> u32 {
        log2_floor(self.threads)
    }

    /// Runs `f` inside a `rayon` scope, passing the chunk size that spreads
    /// `elements` items over the available threads.
    pub(crate) fn scope<'a, F, R>(&self, elements: usize, f: F) -> R
    where
        F: 'a + Send + FnOnce(&Scope<'a>, usize) -> R,
        R: Send,
    {
        let chunk_size = match elements < self.threads {
            true => 1,
            false => elements / self.threads,
        };
        rayon::scope(move |scope| f(scope, chunk_size))
    }
}

pub(crate) fn log2_floor(num: usize) -> u32 {
    assert!(num > 0);
    usize::BITS - 1 - num.leading_zeros()
}
