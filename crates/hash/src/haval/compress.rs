// Copyright 2025 Irreducible Inc.

//! The HAVAL compression function.
//!
//! The eight working registers live in a fixed array. Instead of shifting the registers after
//! every step, step `s` reads register `x_k` from slot `(k - s) mod 8`, so the slot written by a
//! step is the one that the next step addresses as `x_0`. A pass has 32 steps, a multiple of 8,
//! so every pass starts and ends with register `x_k` in slot `k`.

#![allow(clippy::many_single_char_names)]

use super::{
	params::Passes,
	tables::{round_constant, wiring, PASS_STEPS, PHI_ARITY, WORD_ORDER},
	BLOCK_LEN, STATE_WORDS,
};

#[inline(always)]
fn f1([x6, x5, x4, x3, x2, x1, x0]: [u32; PHI_ARITY]) -> u32 {
	(x1 & (x0 ^ x4)) ^ (x2 & x5) ^ (x3 & x6) ^ x0
}

#[inline(always)]
fn f2([x6, x5, x4, x3, x2, x1, x0]: [u32; PHI_ARITY]) -> u32 {
	(x2 & ((x1 & !x3) ^ (x4 & x5) ^ x6 ^ x0)) ^ (x4 & (x1 ^ x5)) ^ (x3 & x5) ^ x0
}

#[inline(always)]
fn f3([x6, x5, x4, x3, x2, x1, x0]: [u32; PHI_ARITY]) -> u32 {
	(x3 & ((x1 & x2) ^ x6 ^ x0)) ^ (x1 & x4) ^ (x2 & x5) ^ x0
}

#[inline(always)]
fn f4([x6, x5, x4, x3, x2, x1, x0]: [u32; PHI_ARITY]) -> u32 {
	(x4 & ((x5 & !x2) ^ (x3 & !x6) ^ x1 ^ x6 ^ x0)) ^ (x3 & ((x1 & x2) ^ x5 ^ x6)) ^ (x2 & x6) ^ x0
}

#[inline(always)]
fn f5([x6, x5, x4, x3, x2, x1, x0]: [u32; PHI_ARITY]) -> u32 {
	(x0 & ((x1 & x2 & x3) ^ !x5)) ^ (x1 & x4) ^ (x2 & x5) ^ (x3 & x6)
}

/// Boolean function of the zero-based `pass`.
#[inline(always)]
fn phi(pass: usize, args: [u32; PHI_ARITY]) -> u32 {
	match pass {
		0 => f1(args),
		1 => f2(args),
		2 => f3(args),
		3 => f4(args),
		_ => f5(args),
	}
}

/// Reads the block as 32 little-endian words. `block` must be [`BLOCK_LEN`] bytes long.
fn load_block(block: &[u8]) -> [u32; PASS_STEPS] {
	let mut words = [0u32; PASS_STEPS];
	for (word, bytes) in words.iter_mut().zip(block.chunks_exact(4)) {
		*word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
	}
	words
}

/// Compresses one 128-byte block into `state`.
pub fn compress(state: &mut [u32; STATE_WORDS], block: &[u8; BLOCK_LEN], passes: Passes) {
	compress_words(state, &load_block(block), passes);
}

/// Compresses consecutive blocks, `blocks.len()` must be a multiple of [`BLOCK_LEN`].
pub(crate) fn compress_blocks(state: &mut [u32; STATE_WORDS], blocks: &[u8], passes: Passes) {
	debug_assert_eq!(blocks.len() % BLOCK_LEN, 0);

	for block in blocks.chunks_exact(BLOCK_LEN) {
		compress_words(state, &load_block(block), passes);
	}
}

fn compress_words(state: &mut [u32; STATE_WORDS], words: &[u32; PASS_STEPS], passes: Passes) {
	let mut regs = *state;

	for (pass, wires) in wiring(passes).iter().enumerate() {
		let order = &WORD_ORDER[pass];
		for step in 0..PASS_STEPS {
			// slot of register x_0 at this step
			let base = STATE_WORDS - step % STATE_WORDS;
			let args = wires.map(|k| regs[(base + k) % STATE_WORDS]);
			let target = (base + 7) % STATE_WORDS;

			regs[target] = phi(pass, args)
				.rotate_right(7)
				.wrapping_add(regs[target].rotate_right(11))
				.wrapping_add(words[order[step]])
				.wrapping_add(round_constant(pass, step));
		}
	}

	for (h, t) in state.iter_mut().zip(regs) {
		*h = h.wrapping_add(t);
	}
}
