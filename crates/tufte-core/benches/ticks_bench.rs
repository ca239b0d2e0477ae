use tufte_core::{generate_ticks, histogram};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn gen_ranges(n: usize) -> Vec<(f64, f64)> {
    let mut v = Vec::with_capacity(n);
    for i in 0..n {
        // spans from sub-unit to several decades
        let lo = (i as f64 * 0.37).sin() * 100.0;
        let span = 10f64.powf((i % 9) as f64 - 3.0) * (1.0 + (i as f64 * 0.11).cos().abs());
        v.push((lo, lo + span));
    }
    v
}

fn bench_ticks(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_ticks");
    let ranges = gen_ranges(10_000);
    for &k in &[3usize, 5usize, 10usize] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("k{k}")), &k, |b, &k| {
            b.iter(|| {
                for &(lo, hi) in &ranges {
                    let _ = black_box(generate_ticks(lo, hi, k));
                }
            });
        });
    }
    group.finish();
}

fn bench_histogram(c: &mut Criterion) {
    let data: Vec<f64> = (0..100_000).map(|i| (i as f64 * 0.001).sin() * 50.0).collect();
    c.bench_function("histogram_100k_b20", |b| b.iter(|| black_box(histogram(&data, 20))));
}

criterion_group!(benches, bench_ticks, bench_histogram);
criterion_main!(benches);
