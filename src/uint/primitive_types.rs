use primitive_types::U256;

use super::{Sealed, Unsigned};
use crate::Error;

impl Sealed for U256 {}

impl Unsigned for U256 {
	const ZERO: U256 = U256([0, 0, 0, 0]);
	const ONE: U256 = U256([1, 0, 0, 0]);
	const MAX: U256 = U256::MAX;
	// Limbs are little-endian, so bit 255 is the top bit of the last limb.
	const BIAS: U256 = U256([0, 0, 0, 0x8000_0000_0000_0000]);
	const BITS: u32 = 256;

	fn checked_add(self, other: U256) -> Option<U256> {
		U256::checked_add(self, other)
	}

	fn checked_sub(self, other: U256) -> Option<U256> {
		U256::checked_sub(self, other)
	}

	fn checked_mul(self, other: U256) -> Option<U256> {
		U256::checked_mul(self, other)
	}

	fn checked_div(self, other: U256) -> Option<U256> {
		U256::checked_div(self, other)
	}

	fn from_dec_str(s: &str) -> Result<U256, Error> {
		// `U256::from_dec_str` accepts the empty string as zero.
		if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
			return Err(Error::InvalidDigit);
		}

		// Only the length check can fail once every byte is a digit.
		U256::from_dec_str(s).map_err(|_| Error::Overflow)
	}
}
