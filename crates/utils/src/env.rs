// Copyright 2024 Irreducible Inc.

use std::env;

const BENCH_PARAMS_VAR: &str = "HAVAL_BENCH_PARAMS";
const BENCH_LOG_LEN_VAR: &str = "HAVAL_BENCH_LOG_LEN";

/// Largest accepted value of `HAVAL_BENCH_LOG_LEN`, i.e. a 1 GiB message.
pub const MAX_BENCH_LOG_LEN: usize = 30;

/// Get the algorithm name to benchmark from the environment, e.g. `haval-256-5`.
///
/// The value is returned verbatim and parsed by the caller.
pub fn get_bench_params() -> Option<String> {
	env::var(BENCH_PARAMS_VAR)
		.ok()
		.map(|val| val.trim().to_owned())
		.filter(|val| !val.is_empty())
}

/// Get the log2 of the benchmark message length from the environment.
///
/// Values that are not integers or exceed [`MAX_BENCH_LOG_LEN`] are reported and ignored.
pub fn get_bench_log_len() -> Option<usize> {
	let val = env::var(BENCH_LOG_LEN_VAR).ok()?;
	match val.trim().parse::<usize>() {
		Ok(log_len) if log_len <= MAX_BENCH_LOG_LEN => Some(log_len),
		Ok(log_len) => {
			tracing::warn!(log_len, max = MAX_BENCH_LOG_LEN, "{BENCH_LOG_LEN_VAR} is too large, ignoring");
			None
		}
		Err(err) => {
			tracing::warn!(%err, value = %val, "{BENCH_LOG_LEN_VAR} must be a valid integer, ignoring");
			None
		}
	}
}
