//! Conversions between [`Signed`] and unsigned, native signed and decimal
//! string forms.

use core::{fmt, str::FromStr};

use crate::{
	uint::{Unsigned, U256},
	Error, Signed, I256,
};

impl<T: Unsigned> fmt::Display for Signed<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_negative() {
			write!(f, "-{}", self.magnitude())
		} else {
			write!(f, "{}", self.magnitude())
		}
	}
}

impl<T: Unsigned> FromStr for Signed<T> {
	type Err = Error;

	/// Parse an optionally signed decimal string, e.g. `-42` or `+7`.
	fn from_str(s: &str) -> Result<Self, Error> {
		let (negative, digits) = match s.as_bytes().first() {
			Some(b'-') => (true, &s[1..]),
			Some(b'+') => (false, &s[1..]),
			_ => (false, s),
		};

		let magnitude = T::from_dec_str(digits)?;
		if negative {
			Self::checked_neg_from(magnitude)
		} else {
			Self::from_magnitude(magnitude)
		}
	}
}

// Unsigned values convert by magnitude: the unsigned `5` is the signed `5`,
// and only non-negative signed values convert back.
macro_rules! impl_unsigned_conversions {
	( $( $t:ty ),* ) => {
		$(
			impl TryFrom<$t> for Signed<$t> {
				type Error = Error;

				fn try_from(value: $t) -> Result<Self, Error> {
					Self::from_magnitude(value)
				}
			}

			impl TryFrom<Signed<$t>> for $t {
				type Error = Error;

				fn try_from(value: Signed<$t>) -> Result<$t, Error> {
					value.to_magnitude()
				}
			}
		)*
	};
}

impl_unsigned_conversions!(u8, u16, u32, u64, u128, U256);

// Flipping the top bit of a two's-complement pattern adds the bias.
macro_rules! impl_native_conversions {
	( $( $i:ty => $u:ty ),* ) => {
		$(
			impl From<$i> for Signed<$u> {
				fn from(value: $i) -> Self {
					Self::from_uint((value as $u) ^ <$u as Unsigned>::BIAS)
				}
			}

			impl From<Signed<$u>> for $i {
				fn from(value: Signed<$u>) -> $i {
					(value.into_uint() ^ <$u as Unsigned>::BIAS) as $i
				}
			}
		)*
	};
}

impl_native_conversions!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128);

impl From<i128> for I256 {
	fn from(value: i128) -> Self {
		let magnitude = U256::from(value.unsigned_abs());
		// |i128::MIN| is far below the 256-bit bias.
		if value < 0 {
			Self::from_uint(U256::BIAS - magnitude)
		} else {
			Self::from_uint(U256::BIAS + magnitude)
		}
	}
}

impl TryFrom<I256> for i128 {
	type Error = Error;

	fn try_from(value: I256) -> Result<i128, Error> {
		let magnitude = value.magnitude();
		let out_of_range = if value.is_negative() {
			Error::Underflow
		} else {
			Error::Overflow
		};

		if magnitude.bits() > 128 {
			return Err(out_of_range);
		}

		let magnitude = magnitude.low_u128();
		if value.is_negative() {
			match i128::try_from(magnitude) {
				Ok(m) => Ok(-m),
				Err(_) if magnitude == i128::MIN.unsigned_abs() => Ok(i128::MIN),
				Err(_) => Err(out_of_range),
			}
		} else {
			i128::try_from(magnitude).map_err(|_| out_of_range)
		}
	}
}
