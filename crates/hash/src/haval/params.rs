// Copyright 2025 Irreducible Inc.

use std::{fmt, str::FromStr};

use crate::Error;

/// Digest width supported by HAVAL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OutputWidth {
	Bits128,
	Bits160,
	Bits192,
	Bits224,
	Bits256,
}

impl OutputWidth {
	pub const ALL: [Self; 5] = [
		Self::Bits128,
		Self::Bits160,
		Self::Bits192,
		Self::Bits224,
		Self::Bits256,
	];

	/// Width of the digest in bytes.
	pub const fn bytes(self) -> usize {
		match self {
			Self::Bits128 => 16,
			Self::Bits160 => 20,
			Self::Bits192 => 24,
			Self::Bits224 => 28,
			Self::Bits256 => 32,
		}
	}

	pub const fn bits(self) -> usize {
		self.bytes() * 8
	}

	/// Number of state words serialized into the digest.
	pub const fn words(self) -> usize {
		self.bytes() / 4
	}

	pub const fn from_bytes(bytes: usize) -> Option<Self> {
		match bytes {
			16 => Some(Self::Bits128),
			20 => Some(Self::Bits160),
			24 => Some(Self::Bits192),
			28 => Some(Self::Bits224),
			32 => Some(Self::Bits256),
			_ => None,
		}
	}
}

impl TryFrom<usize> for OutputWidth {
	type Error = Error;

	fn try_from(bytes: usize) -> Result<Self, Error> {
		Self::from_bytes(bytes).ok_or(Error::InvalidOutputSize(bytes))
	}
}

/// Number of passes of the compression function, i.e. the security level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Passes {
	Three = 3,
	Four = 4,
	Five = 5,
}

impl Passes {
	pub const ALL: [Self; 3] = [Self::Three, Self::Four, Self::Five];

	pub const fn count(self) -> usize {
		self as usize
	}

	pub const fn from_count(count: usize) -> Option<Self> {
		match count {
			3 => Some(Self::Three),
			4 => Some(Self::Four),
			5 => Some(Self::Five),
			_ => None,
		}
	}
}

impl TryFrom<usize> for Passes {
	type Error = Error;

	fn try_from(count: usize) -> Result<Self, Error> {
		Self::from_count(count).ok_or(Error::InvalidPasses(count))
	}
}

/// A validated choice of output width and number of passes.
///
/// Displayed and parsed as `haval-<bits>-<passes>`, e.g. `haval-256-5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HavalParams {
	width: OutputWidth,
	passes: Passes,
}

impl HavalParams {
	/// Validates a digest size in bytes and a pass count.
	pub fn new(output_size: usize, passes: usize) -> Result<Self, Error> {
		let width = OutputWidth::try_from(output_size)?;
		let passes = Passes::try_from(passes)?;
		Ok(Self::from_parts(width, passes))
	}

	pub const fn from_parts(width: OutputWidth, passes: Passes) -> Self {
		Self { width, passes }
	}

	pub const fn width(&self) -> OutputWidth {
		self.width
	}

	pub const fn passes(&self) -> Passes {
		self.passes
	}

	/// Digest size in bytes.
	pub const fn output_size(&self) -> usize {
		self.width.bytes()
	}

	/// All 15 parameter sets, ordered by width and then by passes.
	pub fn all() -> impl Iterator<Item = Self> {
		OutputWidth::ALL.into_iter().flat_map(|width| {
			Passes::ALL
				.into_iter()
				.map(move |passes| Self::from_parts(width, passes))
		})
	}
}

impl Default for HavalParams {
	fn default() -> Self {
		Self::from_parts(OutputWidth::Bits128, Passes::Three)
	}
}

impl fmt::Display for HavalParams {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "haval-{}-{}", self.width.bits(), self.passes.count())
	}
}

impl FromStr for HavalParams {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Error> {
		let unknown = || Error::UnknownAlgorithm(s.to_owned());

		let lower = s.trim().to_ascii_lowercase();
		let mut parts = lower.split('-');
		if parts.next() != Some("haval") {
			return Err(unknown());
		}
		let (Some(bits), Some(passes), None) = (parts.next(), parts.next(), parts.next()) else {
			return Err(unknown());
		};
		let bits = bits.parse::<usize>().map_err(|_| unknown())?;
		let passes = passes.parse::<usize>().map_err(|_| unknown())?;
		if bits % 8 != 0 {
			return Err(unknown());
		}

		Self::new(bits / 8, passes)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_valid_combinations() {
		for size in [16, 20, 24, 28, 32] {
			for passes in 3..=5 {
				let params = HavalParams::new(size, passes).unwrap();
				assert_eq!(params.output_size(), size);
				assert_eq!(params.passes().count(), passes);
			}
		}
		assert_eq!(HavalParams::all().count(), 15);
	}

	#[test]
	fn test_invalid_combinations() {
		assert_eq!(HavalParams::new(15, 3), Err(Error::InvalidOutputSize(15)));
		assert_eq!(HavalParams::new(64, 3), Err(Error::InvalidOutputSize(64)));
		assert_eq!(HavalParams::new(0, 3), Err(Error::InvalidOutputSize(0)));
		assert_eq!(HavalParams::new(32, 2), Err(Error::InvalidPasses(2)));
		assert_eq!(HavalParams::new(32, 6), Err(Error::InvalidPasses(6)));
		assert!(HavalParams::new(32, 6).unwrap_err().is_configuration());
	}

	#[test]
	fn test_display_and_parse() {
		for params in HavalParams::all() {
			assert_eq!(params.to_string().parse::<HavalParams>(), Ok(params));
		}
		assert_eq!(HavalParams::default().to_string(), "haval-128-3");
		assert_eq!(
			" HAVAL-224-4 ".parse::<HavalParams>(),
			HavalParams::new(28, 4)
		);
	}

	#[test]
	fn test_parse_errors() {
		assert!(matches!("sha-256".parse::<HavalParams>(), Err(Error::UnknownAlgorithm(_))));
		assert!(matches!("haval-256".parse::<HavalParams>(), Err(Error::UnknownAlgorithm(_))));
		assert!(matches!("haval-256-5-1".parse::<HavalParams>(), Err(Error::UnknownAlgorithm(_))));
		assert!(matches!("haval-x-5".parse::<HavalParams>(), Err(Error::UnknownAlgorithm(_))));
		assert_eq!("haval-512-5".parse::<HavalParams>(), Err(Error::InvalidOutputSize(64)));
		assert!(matches!("haval-130-5".parse::<HavalParams>(), Err(Error::UnknownAlgorithm(_))));
		assert_eq!("haval-256-7".parse::<HavalParams>(), Err(Error::InvalidPasses(7)));
	}
}
