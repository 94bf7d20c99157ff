//! Benchmarks for iterating ranges and compacting range lists.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use rangetools::domains::{Number, Numeric};
use rangetools::{make_inclusive_range, RangeList};

/// linear multiplier for work done by benchmarks
const REPEAT: i64 = 1_000;

fn random_values(count: usize) -> Vec<i64> {
	let mut rng = StdRng::seed_from_u64(42);
	(0..count).map(|_| rng.random_range(0..REPEAT * 4)).collect()
}

fn bench_iter(c: &mut Criterion) {
	let ints = make_inclusive_range(0, REPEAT * 2, 2).unwrap();
	let floats = make_inclusive_range(0, REPEAT as f64 / 10.0, 0.1).unwrap();

	let mut group = c.benchmark_group("iter");
	group.bench_function("ints", |b| b.iter(|| black_box(&ints).iter().count()));
	group.bench_function("floats", |b| {
		b.iter(|| black_box(&floats).iter().count())
	});
	group.bench_function("contains", |b| {
		b.iter(|| {
			(0..REPEAT)
				.filter(|x| floats.contains(&Number::Int(black_box(*x))))
				.count()
		})
	});
	group.finish();
}

fn bench_compact(c: &mut Criterion) {
	let values = random_values(REPEAT as usize);
	let sequential =
		RangeList::<Numeric>::new((0..REPEAT).collect::<Vec<_>>()).unwrap();
	let random = RangeList::<Numeric>::new(values).unwrap();

	let mut group = c.benchmark_group("compact");
	group.bench_function("sequential", |b| {
		b.iter(|| {
			let mut list = sequential.clone();
			list.compact();
			black_box(list)
		})
	});
	group.bench_function("random", |b| {
		b.iter(|| {
			let mut list = random.clone();
			list.compact();
			black_box(list)
		})
	});
	group.finish();
}

criterion_group!(benches, bench_iter, bench_compact);
criterion_main!(benches);
