use criterion::{black_box, criterion_group, criterion_main, Criterion};
use futures::StreamExt;
use stateful_calculator::StatefulCalculator;

fn bench_pure_operations(c: &mut Criterion) {
    let calc = StatefulCalculator::new();
    let mut group = c.benchmark_group("pure_operations");

    group.bench_function("add_integers", |b| {
        b.iter(|| calc.add_integers(black_box(2), black_box(2)))
    });

    group.bench_function("add_floats", |b| {
        b.iter(|| calc.add_floats(black_box(2.5), black_box(3.5)))
    });

    group.finish();
}

fn bench_state_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("state_access");

    group.bench_function("increment_and_read", |b| {
        let mut calc = StatefulCalculator::new();
        b.iter(|| {
            calc.increment_state();
            black_box(calc.get_state())
        })
    });

    group.bench_function("observed_value", |b| {
        let calc = StatefulCalculator::new();
        b.iter(|| black_box(calc.observed_value()))
    });

    group.finish();
}

fn bench_stream_collection(c: &mut Criterion) {
    let calc = StatefulCalculator::new();
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("result_stream_collect", |b| {
        b.to_async(&rt)
            .iter(|| async { black_box(calc.result_stream().collect::<Vec<_>>().await) })
    });
}

criterion_group!(
    benches,
    bench_pure_operations,
    bench_state_access,
    bench_stream_collection
);
criterion_main!(benches);
