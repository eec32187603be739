// Copyright 2023-2024 Ulvetanna Inc.

use crate::{hex, Error};

/// Trait representing a streaming byte-oriented message digest whose parameters are chosen at
/// runtime.
///
/// Unlike [`digest::Digest`], the output length is a property of the instance rather than of the
/// type and finalization resets the hasher in place, so one instance can be reused for many
/// messages.
pub trait MessageDigest: Clone {
	/// Size of an input block in bytes.
	fn block_size(&self) -> usize;

	/// Size of the digest in bytes.
	fn hash_size(&self) -> usize;

	/// Canonical name of the algorithm family.
	fn name(&self) -> &'static str;

	fn update_byte(&mut self, byte: u8);

	fn update(&mut self, data: &[u8]);

	/// Absorbs `len` bytes of `data` starting at `offset`.
	///
	/// Fails without absorbing anything if the range is not contained in `data`.
	fn update_range(&mut self, data: &[u8], offset: usize, len: usize) -> Result<(), Error> {
		let range = offset
			.checked_add(len)
			.and_then(|end| data.get(offset..end))
			.ok_or(Error::InvalidInput {
				offset,
				len,
				available: data.len(),
			})?;
		self.update(range);
		Ok(())
	}

	fn chain_update(mut self, data: &[u8]) -> Self {
		self.update(data);
		self
	}

	/// Pads the message, returns `hash_size()` bytes of digest and resets the hasher.
	fn digest(&mut self) -> Vec<u8>;

	fn reset(&mut self);
}

/// Hashes `data` with a fresh copy of `hasher` and returns the digest as lowercase hex.
pub fn hash_hex<H: MessageDigest>(hasher: &H, data: impl AsRef<[u8]>) -> String {
	let mut hasher = hasher.clone();
	hasher.reset();
	hasher.update(data.as_ref());
	hex::encode(hasher.digest())
}
