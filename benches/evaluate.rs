use criterion::{Criterion, criterion_group, criterion_main};
use mkad_distance::{Coordinate, DistanceCalculator};
use std::hint::black_box;

fn evaluate_benchmark(c: &mut Criterion) {
    let calculator = DistanceCalculator::mkad().unwrap();

    c.bench_function("evaluate_inside", |b| {
        b.iter(|| calculator.evaluate(black_box(Coordinate::new(37.615561, 55.741469))));
    });

    c.bench_function("evaluate_outside_bounding_box", |b| {
        b.iter(|| calculator.evaluate(black_box(Coordinate::new(37.194, 55.987))));
    });

    c.bench_function("evaluate_outside_within_bounding_box", |b| {
        b.iter(|| calculator.evaluate(black_box(Coordinate::new(37.843154, 55.910907))));
    });
}

criterion_group!(benches, evaluate_benchmark);
criterion_main!(benches);
