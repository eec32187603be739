// Copyright 2023 Ulvetanna Inc.

//! The [HAVAL](https://doi.org/10.1007/3-540-57220-1_87) family of one-way hash functions.
//!
//! HAVAL produces 128, 160, 192, 224 or 256 bit digests and runs 3, 4 or 5 passes of its
//! compression function per 1024-bit block. [`Haval`] chooses both at runtime, while the
//! [`HavalDigest`] aliases such as [`Haval256_5`] fix them in the type and implement the
//! [`digest::Digest`] API.

mod error;
pub mod haval;
pub mod hasher;
pub mod hex;

pub use digest::{self, Digest};
pub use error::Error;
pub use haval::*;
pub use hasher::*;
