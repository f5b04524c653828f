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

//! The number-theoretic transform over power-of-two domains.
//!
//! Both directions run the same radix-2 butterfly network. The forward transform
//! takes a primitive `n`-th root of unity `omega`, the inverse transform takes
//! `omega^{-1}`. The inverse does not scale by `1/n`, callers apply that factor.

#[cfg(feature = "parallel")]
use crate::fft::multicore::Worker;
use polydfs_errors::algorithms::PolynomialError;
use polydfs_models::curves::Field;

/// Replaces the coefficients in `values` with their evaluations on the powers of `omega`.
pub fn forward_ntt<F: Field>(values: &mut [F], omega: F) -> Result<(), PolynomialError> {
    let log_n = log_size(values.len())?;
    best_ntt(values, omega, log_n);
    Ok(())
}

/// Runs the transform with the inverse root `omega_inv`, yielding `n` times the coefficients.
pub fn inverse_ntt<F: Field>(values: &mut [F], omega_inv: F) -> Result<(), PolynomialError> {
    let log_n = log_size(values.len())?;
    best_ntt(values, omega_inv, log_n);
    Ok(())
}

fn log_size(n: usize) -> Result<u32, PolynomialError> {
    match n.is_power_of_two() {
        true => Ok(n.trailing_zeros()),
        false => Err(PolynomialError::InvalidDomainSize(n)),
    }
}

#[cfg(feature = "parallel")]
fn best_ntt<F: Field>(values: &mut [F], omega: F, log_n: u32) {
    let worker = Worker::new();
    let log_threads = worker.log_num_threads();

    if log_n <= log_threads {
        serial_ntt(values, omega, log_n);
    } else {
        parallel_ntt(values, &worker, omega, log_n, log_threads);
    }
}

#[cfg(not(feature = "parallel"))]
fn best_ntt<F: Field>(values: &mut [F], omega: F, log_n: u32) {
    serial_ntt(values, omega, log_n);
}

#[inline]
fn bitreverse(mut n: usize, l: u32) -> usize {
    let mut r = 0;
    for _ in 0..l {
        r = (r << 1) | (n & 1);
        n >>= 1;
    }
    r
}

pub(crate) fn serial_ntt<F: Field>(a: &mut [F], omega: F, log_n: u32) {
    let n = a.len();
    debug_assert_eq!(n, 1 << log_n);

    for k in 0..n {
        let rk = bitreverse(k, log_n);
        if k < rk {
            a.swap(rk, k);
        }
    }

    let mut m = 1;
    for _ in 0..log_n {
        let w_m = omega.pow([(n / (2 * m)) as u64]);

        let mut k = 0;
        while k < n {
            let mut w = F::one();
            for j in 0..m {
                let mut t = a[k + j + m];
                t *= &w;
                let mut tmp = a[k + j];
                tmp -= &t;
                a[k + j + m] = tmp;
                a[k + j] += &t;
                w *= &w_m;
            }
            k += 2 * m;
        }

        m *= 2;
    }
}

/// Splits a transform of size `2^log_n` into `2^log_threads` interleaved
/// sub-transforms, runs them concurrently, and recombines the results.
#[cfg(feature = "parallel")]
pub(crate) fn parallel_ntt<F: Field>(a: &mut [F], worker: &Worker, omega: F, log_n: u32, log_threads: u32) {
    assert!(log_n >= log_threads);

    let num_threads = 1 << log_threads;
    let log_new_n = log_n - log_threads;
    let mut tmp = vec![vec![F::zero(); 1 << log_new_n]; num_threads];
    let new_omega = omega.pow([num_threads as u64]);

    worker.scope(0, |scope, _| {
        let a = &*a;

        for (j, tmp) in tmp.iter_mut().enumerate() {
            scope.spawn(move |_| {
                // Shuffle to a sub-transform
                let omega_j = omega.pow([j as u64]);
                let omega_step = omega.pow([(j as u64) << log_new_n]);

                let mut elt = F::one();
                for (i, tmp) in tmp.iter_mut().enumerate() {
                    for s in 0..num_threads {
                        let idx = (i + (s << log_new_n)) % (1 << log_n);
                        let mut t = a[idx];
                        t *= &elt;
                        *tmp += &t;
                        elt *= &omega_step;
                    }
                    elt *= &omega_j;
                }

                serial_ntt(tmp, new_omega, log_new_n);
            });
        }
    });

    let mask = num_threads - 1;

    worker.scope(a.len(), |scope, chunk| {
        let tmp = &tmp;

        for (idx, a) in a.chunks_mut(chunk).enumerate() {
            scope.spawn(move |_| {
                let mut idx = idx * chunk;
                for a in a {
                    *a = tmp[idx & mask][idx >> log_threads];
                    idx += 1;
                }
            });
        }
    });
}
