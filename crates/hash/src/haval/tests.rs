// Copyright 2025 Irreducible Inc.

use digest::Digest;
use proptest::prelude::*;

use super::{Haval, Haval160_4, Haval256_3, HavalParams};
use crate::MessageDigest;

fn params_strategy() -> impl Strategy<Value = HavalParams> {
	prop::sample::select(HavalParams::all().collect::<Vec<_>>())
}

fn one_shot(params: HavalParams, data: &[u8]) -> Vec<u8> {
	let mut hasher = Haval::from_params(params);
	hasher.update(data);
	hasher.digest()
}

proptest! {
	#[test]
	fn test_bytewise_matches_bulk(
		params in params_strategy(),
		input in prop::collection::vec(any::<u8>(), 0..=600),
	) {
		let mut hasher = Haval::from_params(params);
		for &byte in &input {
			hasher.update_byte(byte);
		}
		prop_assert_eq!(hasher.digest(), one_shot(params, &input));
	}

	#[test]
	fn test_split_points_do_not_matter(
		params in params_strategy(),
		input in prop::collection::vec(any::<u8>(), 0..=600),
		splits in prop::collection::vec(any::<prop::sample::Index>(), 0..6),
	) {
		let mut cuts: Vec<usize> = splits.iter().map(|idx| idx.index(input.len() + 1)).collect();
		cuts.sort_unstable();

		let mut hasher = Haval::from_params(params);
		let mut start = 0;
		for cut in cuts {
			hasher.update(&input[start..cut]);
			start = cut;
		}
		hasher.update(&input[start..]);

		prop_assert_eq!(hasher.digest(), one_shot(params, &input));
	}

	#[test]
	fn test_update_range_matches_slice(
		input in prop::collection::vec(any::<u8>(), 0..=400),
		offset in any::<prop::sample::Index>(),
		len in any::<prop::sample::Index>(),
	) {
		let offset = offset.index(input.len() + 1);
		let len = len.index(input.len() - offset + 1);

		let mut hasher = Haval::default();
		prop_assert!(hasher.update_range(&input, offset, len).is_ok());
		prop_assert_eq!(hasher.digest(), one_shot(HavalParams::default(), &input[offset..offset + len]));
	}

	#[test]
	fn test_typed_digest_matches_runtime(
		input in prop::collection::vec(any::<u8>(), 0..=1024),
	) {
		prop_assert_eq!(
			Haval256_3::digest(&input).to_vec(),
			one_shot("haval-256-3".parse().unwrap(), &input)
		);
		prop_assert_eq!(
			Haval160_4::digest(&input).to_vec(),
			one_shot("haval-160-4".parse().unwrap(), &input)
		);
	}
}
