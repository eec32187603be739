// Copyright 2025 Irreducible Inc.

//! HAVAL variants with the output width and pass count fixed in the type, implementing the
//! RustCrypto [`digest`] traits.

use core::{fmt, marker::PhantomData};

use digest::{
	block_buffer::Eager,
	core_api::{
		AlgorithmName, Block, BlockSizeUser, Buffer, BufferKindUser, CoreWrapper, FixedOutputCore,
		OutputSizeUser, UpdateCore,
	},
	generic_array::ArrayLength,
	typenum::{U128, U16, U20, U24, U28, U32},
	HashMarker, Output, Reset,
};

use super::{
	compress::compress_blocks,
	finalize::{padding, tailor, write_output},
	params::{HavalParams, OutputWidth, Passes},
	tables::IV,
	BLOCK_LEN, STATE_WORDS,
};

/// Digest width of a typed HAVAL variant.
pub trait DigestWidth: Clone + Send + Sync + 'static {
	const WIDTH: OutputWidth;

	type OutputSize: ArrayLength<u8> + 'static;
}

/// Pass count of a typed HAVAL variant.
pub trait PassCount: Clone + Send + Sync + 'static {
	const PASSES: Passes;
}

macro_rules! impl_width {
	($name:ident, $width:ident, $size:ty) => {
		#[derive(Debug, Clone, Copy, Default)]
		pub struct $name;

		impl DigestWidth for $name {
			const WIDTH: OutputWidth = OutputWidth::$width;

			type OutputSize = $size;
		}
	};
}

impl_width!(Width128, Bits128, U16);
impl_width!(Width160, Bits160, U20);
impl_width!(Width192, Bits192, U24);
impl_width!(Width224, Bits224, U28);
impl_width!(Width256, Bits256, U32);

macro_rules! impl_passes {
	($name:ident, $passes:ident) => {
		#[derive(Debug, Clone, Copy, Default)]
		pub struct $name;

		impl PassCount for $name {
			const PASSES: Passes = Passes::$passes;
		}
	};
}

impl_passes!(ThreePass, Three);
impl_passes!(FourPass, Four);
impl_passes!(FivePass, Five);

/// Core hasher state of a typed HAVAL variant. Buffering is left to [`CoreWrapper`].
#[derive(Clone)]
pub struct HavalCore<W: DigestWidth, P: PassCount> {
	state: [u32; STATE_WORDS],
	blocks_len: u64,
	_marker: PhantomData<(W, P)>,
}

/// HAVAL hasher state generic over width and pass count.
pub type HavalDigest<W, P> = CoreWrapper<HavalCore<W, P>>;

impl<W: DigestWidth, P: PassCount> HavalCore<W, P> {
	pub const PARAMS: HavalParams = HavalParams::from_parts(W::WIDTH, P::PASSES);
}

impl<W: DigestWidth, P: PassCount> Default for HavalCore<W, P> {
	fn default() -> Self {
		Self {
			state: IV,
			blocks_len: 0,
			_marker: PhantomData,
		}
	}
}

impl<W: DigestWidth, P: PassCount> HashMarker for HavalCore<W, P> {}

impl<W: DigestWidth, P: PassCount> BlockSizeUser for HavalCore<W, P> {
	type BlockSize = U128;
}

impl<W: DigestWidth, P: PassCount> BufferKindUser for HavalCore<W, P> {
	type BufferKind = Eager;
}

impl<W: DigestWidth, P: PassCount> OutputSizeUser for HavalCore<W, P> {
	type OutputSize = W::OutputSize;
}

impl<W: DigestWidth, P: PassCount> UpdateCore for HavalCore<W, P> {
	#[inline]
	fn update_blocks(&mut self, blocks: &[Block<Self>]) {
		self.blocks_len = self.blocks_len.wrapping_add(blocks.len() as u64);
		for block in blocks {
			compress_blocks(&mut self.state, block.as_slice(), P::PASSES);
		}
	}
}

impl<W: DigestWidth, P: PassCount> FixedOutputCore for HavalCore<W, P> {
	#[inline]
	fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
		let pending = buffer.get_data();
		let count = self
			.blocks_len
			.wrapping_mul(BLOCK_LEN as u64)
			.wrapping_add(pending.len() as u64);
		let padding = padding(count, &Self::PARAMS);

		let mut tail = [0u8; 3 * BLOCK_LEN];
		let tail_len = pending.len() + padding.len();
		tail[..pending.len()].copy_from_slice(pending);
		tail[pending.len()..tail_len].copy_from_slice(padding.as_slice());

		let mut state = self.state;
		compress_blocks(&mut state, &tail[..tail_len], P::PASSES);
		write_output(&tailor(state, W::WIDTH), W::WIDTH, out.as_mut_slice());
	}
}

impl<W: DigestWidth, P: PassCount> Reset for HavalCore<W, P> {
	#[inline]
	fn reset(&mut self) {
		*self = Self::default();
	}
}

impl<W: DigestWidth, P: PassCount> AlgorithmName for HavalCore<W, P> {
	fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", Self::PARAMS)
	}
}

impl<W: DigestWidth, P: PassCount> fmt::Debug for HavalCore<W, P> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "HavalCore<{}> {{ ... }}", Self::PARAMS)
	}
}

macro_rules! haval_aliases {
	($($alias:ident => ($width:ty, $passes:ty)),* $(,)?) => {
		$(
			#[allow(non_camel_case_types)]
			pub type $alias = HavalDigest<$width, $passes>;
		)*
	};
}

haval_aliases! {
	Haval128_3 => (Width128, ThreePass),
	Haval128_4 => (Width128, FourPass),
	Haval128_5 => (Width128, FivePass),
	Haval160_3 => (Width160, ThreePass),
	Haval160_4 => (Width160, FourPass),
	Haval160_5 => (Width160, FivePass),
	Haval192_3 => (Width192, ThreePass),
	Haval192_4 => (Width192, FourPass),
	Haval192_5 => (Width192, FivePass),
	Haval224_3 => (Width224, ThreePass),
	Haval224_4 => (Width224, FourPass),
	Haval224_5 => (Width224, FivePass),
	Haval256_3 => (Width256, ThreePass),
	Haval256_4 => (Width256, FourPass),
	Haval256_5 => (Width256, FivePass),
}
