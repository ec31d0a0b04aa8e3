//! Benchmark for the composition macros.
//!
//! Composed, piped, curried and partially applied functions should cost the
//! same as the direct call once inlined.

use criterion::{Criterion, criterion_group, criterion_main};
use optional_fp::optional::{Optional, binding, lift2, mapping};
use optional_fp::{compose, curry2, partial, pipe};
use std::hint::black_box;

fn add(first: i32, second: i32) -> i32 {
    first.wrapping_add(second)
}

fn double(value: i32) -> i32 {
    value.wrapping_mul(2)
}

fn halve_even(value: i32) -> Optional<i32> {
    if value % 2 == 0 {
        Optional::Present(value / 2)
    } else {
        Optional::Absent
    }
}

fn benchmark_composition(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("composition");

    group.bench_function("direct_call", |bencher| {
        bencher.iter(|| black_box(double(add(black_box(20), 1))));
    });

    group.bench_function("compose_macro", |bencher| {
        let composed = compose!(double, partial!(add, __, 1));
        bencher.iter(|| black_box(composed(black_box(20))));
    });

    group.bench_function("pipe_macro", |bencher| {
        bencher.iter(|| black_box(pipe!(black_box(20), partial!(add, __, 1), double)));
    });

    group.finish();
}

fn benchmark_currying(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("currying");

    group.bench_function("curry2_full_application", |bencher| {
        let curried = curry2!(add);
        bencher.iter(|| black_box(curried(black_box(1))(black_box(2))));
    });

    group.bench_function("curry2_with_lift2", |bencher| {
        bencher.iter(|| {
            black_box(lift2(
                curry2!(add),
                black_box(Optional::Present(1)),
                black_box(Optional::Present(2)),
            ))
        });
    });

    group.finish();
}

fn benchmark_optional_pipeline(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("optional_pipeline");

    group.bench_function("pipe_mapping_binding", |bencher| {
        bencher.iter(|| {
            black_box(pipe!(
                black_box(Optional::Present(20)),
                mapping(double),
                binding(halve_even),
                mapping(double)
            ))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_composition,
    benchmark_currying,
    benchmark_optional_pipeline
);
criterion_main!(benches);
