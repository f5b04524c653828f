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

#[macro_use]
extern crate criterion;

use polydfs_algorithms::fft::{forward_ntt, DensePolynomial, EvaluationDomain, Evaluations};
use polydfs_curves::goldilocks::Fr;
use polydfs_models::curves::{PrimeField, UniformRand};

use criterion::{BatchSize, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

const LOG_SIZES: [u32; 3] = [10, 14, 16];

fn ntt(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    let mut group = c.benchmark_group("NTT");

    for log_size in LOG_SIZES {
        let size = 1 << log_size;
        let omega = Fr::primitive_root_of_unity(size).unwrap();
        let values: Vec<Fr> = (0..size).map(|_| Fr::rand(&mut rng)).collect();

        group.bench_with_input(BenchmarkId::new("forward", size), &values, |b, values| {
            b.iter_batched(
                || values.clone(),
                |mut values| forward_ntt(&mut values, omega).unwrap(),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn resize(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    let mut group = c.benchmark_group("Resize");

    for log_size in LOG_SIZES {
        let size = 1 << log_size;
        let poly = DensePolynomial::<Fr>::rand(size - 1, &mut rng);
        let evals = Evaluations::from_coefficients_with_size(&poly, size).unwrap();

        group.bench_with_input(BenchmarkId::new("double", size), &evals, |b, evals| {
            b.iter_batched(|| evals.clone(), |mut evals| evals.resize(2 * size).unwrap(), BatchSize::LargeInput)
        });
    }
    group.finish();
}

fn arithmetic(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(1231275789u64);
    let mut group = c.benchmark_group("Arithmetic");

    for log_size in [8u32, 10, 12] {
        let size = 1 << log_size;
        let a = Evaluations::from_coefficients(&DensePolynomial::<Fr>::rand(size - 1, &mut rng)).unwrap();
        let b = Evaluations::from_coefficients(&DensePolynomial::<Fr>::rand(size / 2 - 1, &mut rng)).unwrap();

        group.bench_with_input(BenchmarkId::new("mul", size), &(&a, &b), |bencher, (a, b)| {
            bencher.iter(|| a.checked_mul(b).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("divide_with_q_and_r", size), &(&a, &b), |bencher, (a, b)| {
            bencher.iter(|| a.divide_with_q_and_r(b).unwrap())
        });
    }
    group.finish();

    let domain = EvaluationDomain::<Fr>::new(1 << 12).unwrap();
    c.bench_function("EvaluationDomain::element", |b| b.iter(|| domain.element(4095)));
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = ntt, resize, arithmetic
}

criterion_main!(benches);
