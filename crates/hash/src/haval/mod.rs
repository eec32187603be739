// Copyright 2025 Irreducible Inc.

pub mod compress;
pub mod finalize;
mod hasher;
mod params;
pub mod tables;
#[cfg(test)]
mod tests;
mod typed;

pub use hasher::Haval;
pub use params::{HavalParams, OutputWidth, Passes};
pub use typed::*;

/// Size of a message block in bytes.
pub const BLOCK_LEN: usize = 128;

/// Number of 32-bit words in the chaining state.
pub const STATE_WORDS: usize = 8;

/// Algorithm name reported by [`Haval::name`].
pub const HAVAL_NAME: &str = "haval";
