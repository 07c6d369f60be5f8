use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::{BigInt, RandBigInt};
use rand::thread_rng;
use shamir::{reconstruct, RawShare, ShareDecoder};
use shamir_math::Polynomial;
use std::collections::BTreeMap;

fn random_polynomial(k: usize, bits: u64) -> Polynomial {
    let mut rng = thread_rng();
    Polynomial::new((0..k).map(|_| rng.gen_bigint(bits)).collect())
}

fn bench_reconstruct(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconstruct");

    for k in [3usize, 7, 16, 32, 64] {
        for bits in [64u64, 256, 1024] {
            let p = random_polynomial(k, bits);
            let points = p.points(1..=(k as i64));
            group.bench_function(
                BenchmarkId::new(format!("k={k}"), format!("{bits} bits")),
                |b| b.iter(|| reconstruct(&points, k).unwrap()),
            );
        }
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for n in [10u64, 100] {
        let p = random_polynomial(7, 256);
        let records: BTreeMap<u64, RawShare> = (1..=n)
            .map(|i| {
                let base = 2 + (i % 35) as u32;
                let y: BigInt = p.evaluate(i as i64);
                (i, RawShare::new(base.to_string(), y.to_str_radix(base)))
            })
            .collect();
        let decoder = ShareDecoder::new(n).unwrap();
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| decoder.decode(&records))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reconstruct, bench_decode);
criterion_main!(benches);
