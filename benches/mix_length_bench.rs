//! Benchmarks for the mixing-length kernels.
//!
//! Run with: `cargo bench --bench mix_length_bench`
//!
//! Compares the reference (canonical layout, column-outer) and batch
//! (alternate layout, level-outer) kernels across fixture sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use shoc_mix::{
    compute_shoc_mix_length, compute_shoc_mix_length_batch, MixLengthData, TransposeDirection,
};

const SIZES: [(usize, usize); 3] = [(10, 71), (128, 72), (1024, 72)];

fn bench_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("mix_length");
    let mut rng = StdRng::seed_from_u64(0xD6);

    for &(shcol, nlev) in &SIZES {
        let mut canonical = MixLengthData::new(shcol, nlev);
        canonical.randomize(&mut rng);
        let mut alternate = canonical.clone();
        alternate.transpose(TransposeDirection::ToAlternate);

        group.bench_with_input(
            BenchmarkId::new("reference", format!("{}x{}", shcol, nlev)),
            &(),
            |b, _| {
                b.iter(|| {
                    compute_shoc_mix_length(
                        shcol,
                        nlev,
                        black_box(&canonical.tke),
                        black_box(&canonical.brunt),
                        black_box(&canonical.tscale),
                        black_box(&canonical.zt_grid),
                        black_box(&canonical.l_inf),
                        &mut canonical.shoc_mix,
                    )
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("batch", format!("{}x{}", shcol, nlev)),
            &(),
            |b, _| {
                b.iter(|| {
                    compute_shoc_mix_length_batch(
                        nlev,
                        shcol,
                        black_box(&alternate.tke),
                        black_box(&alternate.brunt),
                        black_box(&alternate.tscale),
                        black_box(&alternate.zt_grid),
                        black_box(&alternate.l_inf),
                        &mut alternate.shoc_mix,
                    )
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_kernels);
criterion_main!(benches);
