use core::num::IntErrorKind;

use super::{Sealed, Unsigned};
use crate::Error;

macro_rules! impl_unsigned_native {
	( $( $t:ty ),* ) => {
		$(
			impl Sealed for $t {}

			impl Unsigned for $t {
				const ZERO: $t = 0;
				const ONE: $t = 1;
				const MAX: $t = <$t>::MAX;
				const BIAS: $t = 1 << (<$t>::BITS - 1);
				const BITS: u32 = <$t>::BITS;

				fn checked_add(self, other: $t) -> Option<$t> {
					<$t>::checked_add(self, other)
				}

				fn checked_sub(self, other: $t) -> Option<$t> {
					<$t>::checked_sub(self, other)
				}

				fn checked_mul(self, other: $t) -> Option<$t> {
					<$t>::checked_mul(self, other)
				}

				fn checked_div(self, other: $t) -> Option<$t> {
					<$t>::checked_div(self, other)
				}

				fn from_dec_str(s: &str) -> Result<$t, Error> {
					// `str::parse` tolerates a leading `+`; signs are handled by the caller.
					if s.starts_with('+') {
						return Err(Error::InvalidDigit);
					}

					s.parse::<$t>().map_err(|e| match e.kind() {
						IntErrorKind::PosOverflow => Error::Overflow,
						_ => Error::InvalidDigit,
					})
				}
			}
		)*
	};
}

impl_unsigned_native!(u8, u16, u32, u64, u128);
