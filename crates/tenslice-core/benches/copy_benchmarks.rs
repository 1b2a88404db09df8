/// Strided copy benchmarks
///
/// Measures the block copier and the split/concat entry points across a
/// range of shapes, to keep an eye on the per-row dispatch overhead and
/// the parallel-path crossover.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tenslice_core::{concat, copy_strided_bytes, split, CpuContext, SplitSpec, Tensor};

struct BenchConfig {
    name: &'static str,
    before: usize,
    row: usize,
}

const SIZES: &[BenchConfig] = &[
    BenchConfig {
        name: "small_16x64",
        before: 16,
        row: 64,
    },
    BenchConfig {
        name: "medium_256x256",
        before: 256,
        row: 256,
    },
    BenchConfig {
        name: "large_1024x1024",
        before: 1024,
        row: 1024,
    },
];

fn bench_copy_strided_bytes(c: &mut Criterion) {
    let ctx = CpuContext::new();
    let mut group = c.benchmark_group("copy_strided_bytes");

    for config in SIZES {
        let src = vec![1u8; config.before * config.row];
        let mut dst = vec![0u8; config.before * config.row / 2];
        let run = config.row / 2;

        group.bench_with_input(
            BenchmarkId::from_parameter(config.name),
            config,
            |b, config| {
                b.iter(|| {
                    copy_strided_bytes(
                        &ctx,
                        black_box(config.before),
                        run,
                        &src,
                        config.row,
                        &mut dst,
                        run,
                    )
                    .unwrap();
                });
            },
        );
    }
    group.finish();
}

fn bench_split_concat(c: &mut Criterion) {
    let ctx = CpuContext::new();
    let mut group = c.benchmark_group("split_concat");

    for config in SIZES {
        let n = config.before * config.row;
        let input =
            Tensor::from_vec((0..n as i64).collect::<Vec<i64>>(), &[config.before, config.row])
                .unwrap();

        group.bench_with_input(
            BenchmarkId::new("split_equal", config.name),
            &input,
            |b, input| {
                b.iter(|| split(&ctx, black_box(input), 1, false, 4, &SplitSpec::Equal).unwrap());
            },
        );

        let parts = split(&ctx, &input, 1, false, 4, &SplitSpec::Equal).unwrap();
        let refs: Vec<&Tensor> = parts.iter().collect();
        group.bench_with_input(BenchmarkId::new("concat", config.name), &refs, |b, refs| {
            b.iter(|| concat(&ctx, black_box(refs), 1, false).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_copy_strided_bytes, bench_split_concat);
criterion_main!(benches);
