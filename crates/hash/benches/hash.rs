// Copyright 2025 Irreducible Inc.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use digest::Digest;
use haval_hash::{Haval, Haval128_3, Haval256_5, HavalParams};
use haval_utils::env::{get_bench_log_len, get_bench_params};
use rand::{thread_rng, RngCore};

const DEFAULT_LOG_LEN: usize = 16;

fn bench_params() -> Vec<HavalParams> {
	match get_bench_params().map(|name| name.parse::<HavalParams>()) {
		Some(Ok(params)) => vec![params],
		Some(Err(err)) => {
			tracing::warn!(%err, "ignoring HAVAL_BENCH_PARAMS");
			HavalParams::all().collect()
		}
		None => HavalParams::all().collect(),
	}
}

fn bench_haval(c: &mut Criterion) {
	haval_utils::tracing::init_tracing();

	let mut group = c.benchmark_group("HAVAL");

	let n = 1 << get_bench_log_len().unwrap_or(DEFAULT_LOG_LEN);
	let mut data = vec![0u8; n];
	thread_rng().fill_bytes(&mut data);
	group.throughput(Throughput::Bytes(n as u64));

	for params in bench_params() {
		let mut hasher = Haval::from_params(params);
		group.bench_with_input(BenchmarkId::new("Haval", params), &data, |bench, data| {
			bench.iter(|| {
				hasher.update(data);
				hasher.digest()
			})
		});
	}

	group.bench_function("Haval128_3-Digest", |bench| {
		bench.iter(|| <Haval128_3 as Digest>::digest(&data))
	});
	group.bench_function("Haval256_5-Digest", |bench| {
		bench.iter(|| <Haval256_5 as Digest>::digest(&data))
	});

	group.finish()
}

fn bench_short_messages(c: &mut Criterion) {
	let mut group = c.benchmark_group("HAVAL short messages");

	let mut rng = thread_rng();
	for len in [0, 64, 117, 118, 128] {
		let mut data = vec![0u8; len];
		rng.fill_bytes(&mut data);
		group.throughput(Throughput::Bytes(len as u64));
		group.bench_with_input(BenchmarkId::new("haval-256-5", len), &data, |bench, data| {
			bench.iter(|| <Haval256_5 as Digest>::digest(data))
		});
	}

	group.finish()
}

criterion_group!(hash, bench_haval, bench_short_messages);
criterion_main!(hash);
