//! Benchmark suite for the SMALLF archive codec
//!
//! This benchmark measures decode and encode throughput over synthetic
//! archives of several shapes.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml
//!
//! For flamegraph profiling:
//! cargo bench --manifest-path benches/Cargo.toml -- --profile-time=5

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use smallf_benches::{generate_test_archive, generate_test_pairs, sizes};
use smallf_types::file::smf::{File, Variant};
use std::hint::black_box;

/// Benchmark archive decoding across both layouts and several shapes
fn bench_decode(c: &mut Criterion) {
	let mut group = c.benchmark_group("smf_decode");

	let shapes = [("small", sizes::SMALL), ("medium", sizes::MEDIUM), ("large", sizes::LARGE)];

	for variant in [Variant::V1, Variant::V2] {
		for (name, (num_entries, entry_size)) in shapes {
			let data = generate_test_archive(variant, num_entries, entry_size);

			group.throughput(Throughput::Bytes(data.len() as u64));
			group.bench_with_input(
				BenchmarkId::new(format!("{variant}"), name),
				&data,
				|b, data| {
					b.iter(|| {
						let result = File::from_bytes(black_box(data), variant);
						black_box(result)
					});
				},
			);
		}
	}

	group.finish();
}

/// Benchmark layout auto-detection on a V2 archive (the fallback path)
fn bench_auto_detect(c: &mut Criterion) {
	let mut group = c.benchmark_group("smf_auto_detect");

	let data = generate_test_archive(Variant::V2, sizes::MEDIUM.0, sizes::MEDIUM.1);

	group.throughput(Throughput::Bytes(data.len() as u64));
	group.bench_function("v2_fallback", |b| {
		b.iter(|| {
			let result = File::from_bytes_auto(black_box(&data));
			black_box(result)
		});
	});

	group.finish();
}

/// Benchmark archive serialization, excluding the pack-time sort
fn bench_encode(c: &mut Criterion) {
	let mut group = c.benchmark_group("smf_encode");

	let shapes = [("small", sizes::SMALL), ("medium", sizes::MEDIUM), ("large", sizes::LARGE)];

	for variant in [Variant::V1, Variant::V2] {
		for (name, (num_entries, entry_size)) in shapes {
			let archive =
				File::from_pairs(variant, generate_test_pairs(num_entries, entry_size))
					.expect("valid synthetic archive");

			group.throughput(Throughput::Bytes((num_entries * entry_size) as u64));
			group.bench_with_input(
				BenchmarkId::new(format!("{variant}"), name),
				&archive,
				|b, archive| {
					b.iter(|| {
						let result = black_box(archive).to_bytes();
						black_box(result)
					});
				},
			);
		}
	}

	group.finish();
}

/// Benchmark the full pack pipeline: sort, layout, serialize
fn bench_pack_pipeline(c: &mut Criterion) {
	let mut group = c.benchmark_group("smf_pack");

	let pairs = generate_test_pairs(sizes::MEDIUM.0, sizes::MEDIUM.1);
	let total: usize = pairs.iter().map(|(_, d)| d.len()).sum();

	group.throughput(Throughput::Bytes(total as u64));
	group.sample_size(50);
	group.bench_function("from_pairs_to_bytes", |b| {
		b.iter(|| {
			let archive = File::from_pairs(Variant::V1, black_box(pairs.clone()))
				.expect("valid synthetic archive");
			black_box(archive.to_bytes())
		});
	});

	group.finish();
}

criterion_group!(benches, bench_decode, bench_auto_detect, bench_encode, bench_pack_pipeline);

criterion_main!(benches);
