// Copyright 2024 Irreducible Inc.

//! Hex rendering of digests.

use ::hex::FromHexError;

use crate::Error;

/// Encodes `bytes` as lowercase hex, most significant nibble first.
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
	::hex::encode(bytes)
}

/// Decodes a hex string of either case.
pub fn decode(hex: &str) -> Result<Vec<u8>, Error> {
	Ok(::hex::decode(hex)?)
}

/// Checks that `hex` has an even number of characters, all of them hex digits.
pub fn validate_hex(hex: &str) -> Result<(), Error> {
	if let Some((index, c)) = hex.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
		return Err(FromHexError::InvalidHexCharacter { c, index }.into());
	}
	if hex.len() % 2 != 0 {
		return Err(FromHexError::OddLength.into());
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_encode_is_lowercase_high_nibble_first() {
		assert_eq!(encode([0x00, 0x0f, 0xa0, 0xff]), "000fa0ff");
		assert_eq!(encode([0u8; 0]), "");
	}

	#[test]
	fn test_validate_hex() {
		assert!(validate_hex("").is_ok());
		assert!(validate_hex("713502673d67e5fa557629a71d331945").is_ok());
		assert!(validate_hex("ABCDEF").is_ok());
		assert_eq!(validate_hex("abc"), Err(Error::Format(FromHexError::OddLength)));
		assert_eq!(
			validate_hex("12g4"),
			Err(Error::Format(FromHexError::InvalidHexCharacter { c: 'g', index: 2 }))
		);
	}

	#[test]
	fn test_invalid_character_is_reported_before_length() {
		assert_eq!(
			validate_hex("zz1"),
			Err(Error::Format(FromHexError::InvalidHexCharacter { c: 'z', index: 0 }))
		);
	}

	#[test]
	fn test_decode_round_trip() {
		let bytes = decode("9446028F42b3768a").unwrap();
		assert_eq!(bytes, [0x94, 0x46, 0x02, 0x8f, 0x42, 0xb3, 0x76, 0x8a]);
		assert_eq!(encode(&bytes), "9446028f42b3768a");
		assert!(decode("0").unwrap_err().to_string().starts_with("malformed hex string"));
	}
}
