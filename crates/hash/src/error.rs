// Copyright 2024 Irreducible Inc.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
	#[error("invalid output size of {0} bytes, expected one of 16, 20, 24, 28 or 32")]
	InvalidOutputSize(usize),
	#[error("invalid number of passes {0}, expected 3, 4 or 5")]
	InvalidPasses(usize),
	#[error("unknown algorithm name {0:?}, expected e.g. \"haval-256-5\"")]
	UnknownAlgorithm(String),
	/// The requested range does not lie within the input buffer.
	#[error("input range of {len} bytes at offset {offset} is out of bounds for {available} bytes")]
	InvalidInput {
		offset: usize,
		len: usize,
		available: usize,
	},
	#[error("malformed hex string: {0}")]
	Format(#[from] hex::FromHexError),
}

impl Error {
	/// Whether the error was caused by invalid hash parameters.
	pub fn is_configuration(&self) -> bool {
		matches!(
			self,
			Self::InvalidOutputSize(_) | Self::InvalidPasses(_) | Self::UnknownAlgorithm(_)
		)
	}
}
