use tufte_core::{stem_and_leaf, NumericSeries, StemLeafFormat};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, black_box};

fn gen_floats(n: usize) -> Vec<f64> {
    (0..n).map(|i| 5.0 + (i as f64 * 0.013).sin() * 4.9 + (i % 7) as f64 * 0.01).collect()
}

fn bench_stem_leaf(c: &mut Criterion) {
    let mut group = c.benchmark_group("stem_and_leaf");
    for &n in &[1_000usize, 10_000usize] {
        let series = NumericSeries::Float(gen_floats(n));
        for format in [StemLeafFormat::Plain, StemLeafFormat::Csv, StemLeafFormat::Latex] {
            group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}_{format}")), &format, |b, &f| {
                b.iter_batched(
                    || series.clone(),
                    |s| { let _ = black_box(stem_and_leaf(&s, f, 2)); },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_stem_leaf);
criterion_main!(benches);
