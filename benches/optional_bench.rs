//! Benchmark for the `Optional` combinators.
//!
//! Compares the free-function combinators and `maybe!` against hand-written
//! `match` expressions to measure the overhead (if any) of the abstraction.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use optional_fp::maybe;
use optional_fp::optional::{Optional, bind, lift2, map, sequence, traverse};
use std::hint::black_box;

fn non_zero(value: i32) -> Optional<i32> {
    if value == 0 {
        Optional::Absent
    } else {
        Optional::Present(value)
    }
}

// =============================================================================
// map / bind
// =============================================================================

fn benchmark_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("optional_map");

    group.bench_function("combinator_map_present", |bencher| {
        bencher.iter(|| {
            black_box(map(
                |x: i32| x.wrapping_mul(2),
                black_box(Optional::Present(21)),
            ))
        });
    });

    group.bench_function("manual_match_present", |bencher| {
        bencher.iter(|| {
            let mapped = match black_box(Optional::Present(21_i32)) {
                Optional::Present(value) => Optional::Present(value.wrapping_mul(2)),
                Optional::Absent => Optional::Absent,
            };
            black_box(mapped)
        });
    });

    group.bench_function("combinator_map_absent", |bencher| {
        bencher.iter(|| {
            black_box(map(
                |x: i32| x.wrapping_mul(2),
                black_box(Optional::Absent),
            ))
        });
    });

    group.finish();
}

fn benchmark_bind_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("optional_bind_chain");

    group.bench_function("nested_bind", |bencher| {
        bencher.iter(|| {
            let start = black_box(Optional::Present(8));
            black_box(bind(
                |a| bind(|b| bind(non_zero, non_zero(b)), non_zero(a)),
                start,
            ))
        });
    });

    group.bench_function("maybe_macro", |bencher| {
        bencher.iter(|| {
            let start = black_box(Optional::Present(8));
            let result = maybe! {
                a <= start;
                b <= non_zero(a);
                c <= non_zero(b);
                non_zero(c)
            };
            black_box(result)
        });
    });

    group.bench_function("lift2", |bencher| {
        bencher.iter(|| {
            black_box(lift2(
                |x: i32| move |y: i32| x.wrapping_add(y),
                black_box(Optional::Present(1)),
                black_box(Optional::Present(2)),
            ))
        });
    });

    group.finish();
}

// =============================================================================
// sequence / traverse
// =============================================================================

fn benchmark_sequence(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("optional_sequence");

    for size in [100, 1_000, 10_000] {
        let values: Vec<i32> = (1..=size).collect();
        group.throughput(Throughput::Elements(u64::from(size.unsigned_abs())));

        group.bench_with_input(BenchmarkId::new("traverse", size), &values, |bencher, values| {
            bencher.iter(|| black_box(traverse(non_zero, values.iter().copied())));
        });

        group.bench_with_input(BenchmarkId::new("sequence", size), &values, |bencher, values| {
            bencher.iter(|| {
                black_box(sequence(
                    values.iter().copied().map(Optional::Present),
                ))
            });
        });

        group.bench_with_input(
            BenchmarkId::new("std_option_collect", size),
            &values,
            |bencher, values| {
                bencher.iter(|| {
                    let collected: Option<Vec<i32>> =
                        values
                            .iter()
                            .map(|&value| (value != 0).then_some(value))
                            .collect();
                    black_box(collected)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_map,
    benchmark_bind_chain,
    benchmark_sequence
);
criterion_main!(benches);
