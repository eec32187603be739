// Copyright 2025 Irreducible Inc.

use std::fmt;

use tracing::{debug, trace};

use super::{
	compress::{compress, compress_blocks},
	finalize::{padding, tailor, write_output},
	params::{HavalParams, Passes},
	tables::IV,
	BLOCK_LEN, HAVAL_NAME, STATE_WORDS,
};
use crate::{hasher::MessageDigest, hex, Error};

/// Streaming HAVAL hasher with parameters chosen at runtime.
///
/// Input is accumulated into 128-byte blocks, each full block is compressed as soon as it is
/// complete. [`Haval::digest`] pads the message, produces [`Haval::hash_size`] bytes and returns
/// the hasher to its initial state.
#[derive(Clone)]
pub struct Haval {
	params: HavalParams,
	state: [u32; STATE_WORDS],
	buffer: [u8; BLOCK_LEN],
	/// Total number of bytes absorbed since the last reset.
	count: u64,
}

impl Haval {
	/// Creates a hasher producing `output_size` bytes using `passes` passes.
	pub fn new(output_size: usize, passes: usize) -> Result<Self, Error> {
		Ok(Self::from_params(HavalParams::new(output_size, passes)?))
	}

	pub fn from_params(params: HavalParams) -> Self {
		debug!(%params, "created haval hasher");
		Self {
			params,
			state: IV,
			buffer: [0; BLOCK_LEN],
			count: 0,
		}
	}

	/// Creates a hasher that has already absorbed `data`.
	pub fn with_input(data: &[u8], output_size: usize, passes: usize) -> Result<Self, Error> {
		let mut hasher = Self::new(output_size, passes)?;
		hasher.update(data);
		Ok(hasher)
	}

	/// Hashes `data` in one go and returns the lowercase hex digest.
	pub fn hash_hex(data: &[u8], output_size: usize, passes: usize) -> Result<String, Error> {
		let mut hasher = Self::with_input(data, output_size, passes)?;
		Ok(hex::encode(hasher.digest()))
	}

	pub fn params(&self) -> HavalParams {
		self.params
	}

	pub fn passes(&self) -> Passes {
		self.params.passes()
	}

	pub const fn block_size(&self) -> usize {
		BLOCK_LEN
	}

	pub fn hash_size(&self) -> usize {
		self.params.output_size()
	}

	pub const fn name(&self) -> &'static str {
		HAVAL_NAME
	}

	fn filled(&self) -> usize {
		(self.count % BLOCK_LEN as u64) as usize
	}

	pub fn update_byte(&mut self, byte: u8) {
		let filled = self.filled();
		self.count = self.count.wrapping_add(1);
		self.buffer[filled] = byte;
		if filled == BLOCK_LEN - 1 {
			compress(&mut self.state, &self.buffer, self.params.passes());
		}
	}

	pub fn update(&mut self, mut data: &[u8]) {
		let passes = self.params.passes();
		let filled = self.filled();
		self.count = self.count.wrapping_add(data.len() as u64);

		if filled != 0 {
			let to_copy = std::cmp::min(data.len(), BLOCK_LEN - filled);
			self.buffer[filled..filled + to_copy].copy_from_slice(&data[..to_copy]);
			data = &data[to_copy..];

			if filled + to_copy < BLOCK_LEN {
				return;
			}
			compress(&mut self.state, &self.buffer, passes);
		}

		// whole blocks are compressed straight from the input
		let whole = data.len() - data.len() % BLOCK_LEN;
		let (blocks, remaining) = data.split_at(whole);
		compress_blocks(&mut self.state, blocks, passes);
		self.buffer[..remaining.len()].copy_from_slice(remaining);
	}

	/// Writes the digest into `out`, which must be [`Self::hash_size`] bytes long, and resets.
	pub(crate) fn finalize_into_reset(&mut self, out: &mut [u8]) {
		let padding = padding(self.count, &self.params);
		trace!(
			params = %self.params,
			count = self.count,
			padding = padding.len(),
			"finalizing haval digest"
		);

		self.update(padding.as_slice());
		debug_assert_eq!(self.filled(), 0);

		let width = self.params.width();
		write_output(&tailor(self.state, width), width, out);
		self.reset();
	}

	/// Pads the message, returns the digest and resets the hasher.
	///
	/// Calling this twice in a row yields the digest of the empty message the second time.
	pub fn digest(&mut self) -> Vec<u8> {
		let mut out = vec![0; self.hash_size()];
		self.finalize_into_reset(&mut out);
		out
	}

	pub fn reset(&mut self) {
		self.state = IV;
		self.buffer = [0; BLOCK_LEN];
		self.count = 0;
	}
}

impl Default for Haval {
	fn default() -> Self {
		Self::from_params(HavalParams::default())
	}
}

impl fmt::Debug for Haval {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Haval {{ params: {}, .. }}", self.params)
	}
}

impl MessageDigest for Haval {
	fn block_size(&self) -> usize {
		Haval::block_size(self)
	}

	fn hash_size(&self) -> usize {
		Haval::hash_size(self)
	}

	fn name(&self) -> &'static str {
		Haval::name(self)
	}

	fn update_byte(&mut self, byte: u8) {
		Haval::update_byte(self, byte)
	}

	fn update(&mut self, data: &[u8]) {
		Haval::update(self, data)
	}

	fn digest(&mut self) -> Vec<u8> {
		Haval::digest(self)
	}

	fn reset(&mut self) {
		Haval::reset(self)
	}
}
