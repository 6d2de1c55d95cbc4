//! Benchmark suite for Xcursor decoding
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::{hint::black_box, io::Cursor};
use xcur_benches::{generate_test_xcursor, sizes};
use xcur_types::file::xcursor::File;

/// Benchmark full decoding across size sets
fn bench_decode(c: &mut Criterion) {
	let mut group = c.benchmark_group("xcursor_decode");

	for (name, set) in [("single", sizes::SINGLE), ("theme", sizes::THEME), ("hidpi", sizes::HIDPI)] {
		let data = generate_test_xcursor(set, 8);
		group.throughput(Throughput::Bytes(data.len() as u64));
		group.bench_with_input(BenchmarkId::new("from_bytes", name), &data, |b, data| {
			b.iter(|| {
				let result = File::from_bytes(black_box(data));
				black_box(result)
			});
		});
	}

	group.finish();
}

/// Benchmark decoding through a caller-owned reader
fn bench_decode_reader(c: &mut Criterion) {
	let mut group = c.benchmark_group("xcursor_reader");
	let data = generate_test_xcursor(sizes::THEME, 24);

	group.throughput(Throughput::Bytes(data.len() as u64));
	group.bench_function("from_reader", |b| {
		b.iter(|| {
			let mut reader = Cursor::new(black_box(data.as_slice()));
			black_box(File::from_reader(&mut reader))
		});
	});

	group.finish();
}

/// Benchmark frame selection helpers on a decoded file
fn bench_frame_selection(c: &mut Criterion) {
	let data = generate_test_xcursor(sizes::HIDPI, 8);
	let Ok(cursor) = File::from_bytes(&data) else {
		eprintln!("Warning: Could not decode synthetic cursor");
		return;
	};

	c.bench_function("best_size", |b| {
		b.iter(|| black_box(cursor.best_size(black_box(40))));
	});
}

criterion_group!(benches, bench_decode, bench_decode_reader, bench_frame_selection);
criterion_main!(benches);
