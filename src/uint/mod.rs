//! Unsigned storage types a [`Signed`](crate::Signed) value can live in.
//!
//! * `u8`, `u16`, `u32`, `u64`, `u128`: native integers.
//! * [`U256`]: the `primitive-types` 256-bit unsigned integer.

use core::{
	fmt::{Debug, Display},
	hash::Hash,
	ops::{Add, Div, Not, Sub},
};

use crate::Error;

mod native;
mod primitive_types;

pub use ::primitive_types::U256;

mod private {
	pub trait Sealed {}
}

pub(crate) use self::private::Sealed;

/// Unsigned fixed-width integer used as the biased storage of a signed value.
///
/// The plain operators are only used where the caller has already ruled out
/// wrapping; everything else goes through the `checked_*` functions.
// Note on name resolution: both the native integers and `U256` define
// inherent `checked_*` functions. Calling `u8::checked_add` inside the
// trait implementation resolves to the inherent one, which is what the
// implementations below rely on.
pub trait Unsigned:
	Sealed
	+ Copy
	+ Eq
	+ Ord
	+ Hash
	+ Debug
	+ Display
	+ Add<Output = Self>
	+ Sub<Output = Self>
	+ Div<Output = Self>
	+ Not<Output = Self>
{
	/// Zero value.
	const ZERO: Self;
	/// One value.
	const ONE: Self;
	/// All bits set.
	const MAX: Self;
	/// Only the top bit set, i.e. half of the representable range.
	const BIAS: Self;
	/// Width of the type in bits.
	const BITS: u32;

	/// Addition, `None` on overflow.
	fn checked_add(self, other: Self) -> Option<Self>;
	/// Subtraction, `None` on underflow.
	fn checked_sub(self, other: Self) -> Option<Self>;
	/// Multiplication, `None` on overflow.
	fn checked_mul(self, other: Self) -> Option<Self>;
	/// Truncating division, `None` when `other` is zero.
	fn checked_div(self, other: Self) -> Option<Self>;

	/// Parse an unsigned decimal string without sign.
	fn from_dec_str(s: &str) -> Result<Self, Error>;
}
