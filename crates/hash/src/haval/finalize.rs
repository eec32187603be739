// Copyright 2025 Irreducible Inc.

//! Padding and output transformation.

use super::{
	params::{HavalParams, OutputWidth},
	BLOCK_LEN, STATE_WORDS,
};

/// HAVAL version number carried in the padding trailer.
pub const VERSION: u8 = 1;

/// First padding byte. HAVAL numbers bits from the least significant end, so the single set bit
/// that terminates the message is `0x01`.
pub const PADDING_MARKER: u8 = 0x01;

/// Length of the trailer: 2 bytes of parameters and 8 bytes of message bit length.
pub const TRAILER_LEN: usize = 10;

/// Offset within a block at which the trailer starts.
const TRAILER_OFFSET: usize = BLOCK_LEN - TRAILER_LEN;

/// Bytes appended to a message before the final compressions.
#[derive(Debug, Clone)]
pub struct Padding {
	bytes: [u8; 2 * BLOCK_LEN],
	len: usize,
}

impl Padding {
	pub fn as_slice(&self) -> &[u8] {
		&self.bytes[..self.len]
	}

	#[allow(clippy::len_without_is_empty)]
	pub fn len(&self) -> usize {
		self.len
	}
}

/// Number of marker and zero bytes needed after `count` message bytes so that the trailer ends
/// on a block boundary.
pub const fn padding_len(count: u64) -> usize {
	let filled = (count % BLOCK_LEN as u64) as usize;
	if filled < TRAILER_OFFSET {
		TRAILER_OFFSET - filled
	} else {
		TRAILER_OFFSET + BLOCK_LEN - filled
	}
}

/// Builds the padding for a message of `count` bytes.
pub fn padding(count: u64, params: &HavalParams) -> Padding {
	let mut bytes = [0u8; 2 * BLOCK_LEN];
	let pad_len = padding_len(count);
	bytes[0] = PADDING_MARKER;

	let bits = params.width().bits();
	let passes = params.passes().count() as u8;
	bytes[pad_len] = (((bits & 0x03) as u8) << 6) | ((passes & 0x07) << 3) | (VERSION & 0x07);
	bytes[pad_len + 1] = (bits >> 2) as u8;
	bytes[pad_len + 2..pad_len + TRAILER_LEN].copy_from_slice(&count.wrapping_mul(8).to_le_bytes());

	Padding {
		bytes,
		len: pad_len + TRAILER_LEN,
	}
}

/// Folds the state words that do not appear in a narrow digest into the ones that do.
pub fn tailor(state: [u32; STATE_WORDS], width: OutputWidth) -> [u32; STATE_WORDS] {
	let [mut h0, mut h1, mut h2, mut h3, mut h4, mut h5, mut h6, h7] = state;

	match width {
		OutputWidth::Bits128 => {
			let t = (h7 & 0x000000ff) | (h6 & 0xff000000) | (h5 & 0x00ff0000) | (h4 & 0x0000ff00);
			h0 = h0.wrapping_add(t.rotate_right(8));
			let t = (h7 & 0x0000ff00) | (h6 & 0x000000ff) | (h5 & 0xff000000) | (h4 & 0x00ff0000);
			h1 = h1.wrapping_add(t.rotate_right(16));
			let t = (h7 & 0x00ff0000) | (h6 & 0x0000ff00) | (h5 & 0x000000ff) | (h4 & 0xff000000);
			h2 = h2.wrapping_add(t.rotate_right(24));
			let t = (h7 & 0xff000000) | (h6 & 0x00ff0000) | (h5 & 0x0000ff00) | (h4 & 0x000000ff);
			h3 = h3.wrapping_add(t);
		}
		OutputWidth::Bits160 => {
			let t = (h7 & 0x3f) | (h6 & (0x7f << 25)) | (h5 & (0x3f << 19));
			h0 = h0.wrapping_add(t.rotate_right(19));
			let t = (h7 & (0x3f << 6)) | (h6 & 0x3f) | (h5 & (0x7f << 25));
			h1 = h1.wrapping_add(t.rotate_right(25));
			let t = (h7 & (0x7f << 12)) | (h6 & (0x3f << 6)) | (h5 & 0x3f);
			h2 = h2.wrapping_add(t);
			let t = (h7 & (0x3f << 19)) | (h6 & (0x7f << 12)) | (h5 & (0x3f << 6));
			h3 = h3.wrapping_add(t >> 6);
			let t = (h7 & (0x7f << 25)) | (h6 & (0x3f << 19)) | (h5 & (0x7f << 12));
			h4 = h4.wrapping_add(t >> 12);
		}
		OutputWidth::Bits192 => {
			let t = (h7 & 0x1f) | (h6 & (0x3f << 26));
			h0 = h0.wrapping_add(t.rotate_right(26));
			let t = (h7 & (0x1f << 5)) | (h6 & 0x1f);
			h1 = h1.wrapping_add(t);
			let t = (h7 & (0x3f << 10)) | (h6 & (0x1f << 5));
			h2 = h2.wrapping_add(t >> 5);
			let t = (h7 & (0x1f << 16)) | (h6 & (0x3f << 10));
			h3 = h3.wrapping_add(t >> 10);
			let t = (h7 & (0x1f << 21)) | (h6 & (0x1f << 16));
			h4 = h4.wrapping_add(t >> 16);
			let t = (h7 & (0x3f << 26)) | (h6 & (0x1f << 21));
			h5 = h5.wrapping_add(t >> 21);
		}
		OutputWidth::Bits224 => {
			h0 = h0.wrapping_add((h7 >> 27) & 0x1f);
			h1 = h1.wrapping_add((h7 >> 22) & 0x1f);
			h2 = h2.wrapping_add((h7 >> 18) & 0x0f);
			h3 = h3.wrapping_add((h7 >> 13) & 0x1f);
			h4 = h4.wrapping_add((h7 >> 9) & 0x0f);
			h5 = h5.wrapping_add((h7 >> 4) & 0x1f);
			h6 = h6.wrapping_add(h7 & 0x0f);
		}
		OutputWidth::Bits256 => {}
	}

	[h0, h1, h2, h3, h4, h5, h6, h7]
}

/// Writes the first `width.words()` words little-endian, word 0 first.
pub(crate) fn write_output(words: &[u32; STATE_WORDS], width: OutputWidth, out: &mut [u8]) {
	debug_assert_eq!(out.len(), width.bytes());

	for (chunk, word) in out.chunks_exact_mut(4).zip(&words[..width.words()]) {
		chunk.copy_from_slice(&word.to_le_bytes());
	}
}
