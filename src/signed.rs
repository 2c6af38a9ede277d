//! Signed integers stored as a biased unsigned value.
//!
//! A semantic value `v` is stored as `v + BIAS`, where `BIAS` is the unsigned
//! value with only the top bit set. Semantic zero is therefore `BIAS`, the
//! semantic minimum is the unsigned zero and the semantic maximum is the
//! unsigned maximum. Ordering falls out of unsigned comparison; every
//! arithmetic operator has to split on which side of `BIAS` its operands are.

use core::{
	cmp::Ordering,
	ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use crate::{uint::Unsigned, Error};

const LOG_TARGET: &str = "signed-integers";

/// Signed integer with the same width as its unsigned storage `T`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
	feature = "with-codec",
	derive(scale_codec::Encode, scale_codec::Decode, scale_info::TypeInfo)
)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Signed<T>(T);

impl<T: Unsigned> Signed<T> {
	/// Offset between the stored value and the semantic value.
	pub const BIAS: T = T::BIAS;

	/// Wrap an already biased value. No validation is done: every bit
	/// pattern of `T` is a valid signed value.
	#[must_use]
	pub const fn from_uint(underlying: T) -> Self {
		Self(underlying)
	}

	/// Semantic zero.
	#[must_use]
	pub const fn new() -> Self {
		Self(T::BIAS)
	}

	/// Semantic zero. Same as [`Signed::new`].
	#[must_use]
	pub const fn zero() -> Self {
		Self::new()
	}

	/// Semantic one.
	#[must_use]
	pub fn one() -> Self {
		Self(T::BIAS + T::ONE)
	}

	/// Smallest value, `-BIAS`.
	#[must_use]
	pub const fn min() -> Self {
		Self(T::ZERO)
	}

	/// Largest value, `BIAS - 1`.
	#[must_use]
	pub const fn max() -> Self {
		Self(T::MAX)
	}

	/// Width in bits.
	#[must_use]
	pub const fn bits() -> u32 {
		T::BITS
	}

	/// The biased representation.
	#[must_use]
	pub fn underlying(&self) -> T {
		self.0
	}

	/// Consume the value, returning the biased representation.
	#[must_use]
	pub fn into_uint(self) -> T {
		self.0
	}

	/// The value `-magnitude`.
	///
	/// # Panics
	///
	/// Panics if `magnitude > BIAS`, which has no signed counterpart.
	#[must_use]
	#[track_caller]
	pub fn neg_from(magnitude: T) -> Self {
		expect_ok(Self::checked_neg_from(magnitude))
	}

	/// The value `-magnitude`, or [`Error::Underflow`] if `magnitude > BIAS`.
	pub fn checked_neg_from(magnitude: T) -> Result<Self, Error> {
		bias_magnitude(magnitude, true).map(Self).map_err(|e| {
			log::trace!(target: LOG_TARGET, "negation of magnitude {} failed: {}", magnitude, e);
			e
		})
	}

	/// The value `+magnitude`, or [`Error::Overflow`] if it is not below `BIAS`.
	pub fn from_magnitude(magnitude: T) -> Result<Self, Error> {
		bias_magnitude(magnitude, false).map(Self).map_err(|e| {
			log::trace!(target: LOG_TARGET, "magnitude {} out of range: {}", magnitude, e);
			e
		})
	}

	/// The value as an unsigned integer, or [`Error::Underflow`] if negative.
	pub fn to_magnitude(self) -> Result<T, Error> {
		self.0.checked_sub(T::BIAS).ok_or_else(|| {
			log::trace!(target: LOG_TARGET, "{} has no unsigned counterpart", self);
			Error::Underflow
		})
	}

	/// Absolute value as an unsigned integer. Defined for every value, since
	/// `|min()| == BIAS` fits in `T`.
	#[must_use]
	pub fn magnitude(self) -> T {
		if self.0 >= T::BIAS {
			self.0 - T::BIAS
		} else {
			T::BIAS - self.0
		}
	}

	/// Whether the value is below zero.
	#[must_use]
	pub fn is_negative(&self) -> bool {
		self.0 < T::BIAS
	}

	/// Whether the value is above zero.
	#[must_use]
	pub fn is_positive(&self) -> bool {
		self.0 > T::BIAS
	}

	/// Whether the value is zero.
	#[must_use]
	pub fn is_zero(&self) -> bool {
		self.0 == T::BIAS
	}

	/// `-1`, `0` or `1` depending on the sign.
	#[must_use]
	pub fn signum(self) -> Self {
		match self.0.cmp(&T::BIAS) {
			Ordering::Less => Self(T::BIAS - T::ONE),
			Ordering::Equal => Self::zero(),
			Ordering::Greater => Self::one(),
		}
	}

	/// Checked addition.
	pub fn checked_add(self, other: Self) -> Result<Self, Error> {
		let bias = T::BIAS;
		let (lhs, rhs) = (self.0, other.0);

		let result = if lhs >= bias {
			(lhs - bias).checked_add(rhs).ok_or(Error::Overflow)
		} else if rhs < bias {
			// Both stored values are below BIAS, so their sum fits.
			(lhs + rhs).checked_sub(bias).ok_or(Error::Underflow)
		} else {
			Ok((rhs - bias) + lhs)
		};

		result.map(Self).map_err(|e| failed("addition", self, other, e))
	}

	/// Checked subtraction.
	pub fn checked_sub(self, other: Self) -> Result<Self, Error> {
		let bias = T::BIAS;
		let (lhs, rhs) = (self.0, other.0);

		let result = match (lhs >= bias, rhs >= bias) {
			(true, true) => Ok(if lhs > rhs {
				lhs - rhs + bias
			} else {
				lhs - (rhs - bias)
			}),
			(true, false) => lhs.checked_add(bias - rhs).ok_or(Error::Overflow),
			(false, true) => lhs.checked_sub(rhs - bias).ok_or(Error::Underflow),
			(false, false) => Ok(if lhs < rhs {
				bias - (rhs - lhs)
			} else {
				lhs - rhs + bias
			}),
		};

		result.map(Self).map_err(|e| failed("subtraction", self, other, e))
	}

	/// Checked multiplication.
	pub fn checked_mul(self, other: Self) -> Result<Self, Error> {
		let bias = T::BIAS;
		let (lhs, rhs) = (self.0, other.0);

		let (product, negative) = match (lhs >= bias, rhs >= bias) {
			(true, true) => ((lhs - bias).checked_mul(rhs - bias), false),
			(false, false) => ((bias - lhs).checked_mul(bias - rhs), false),
			(true, false) => ((lhs - bias).checked_mul(bias - rhs), true),
			(false, true) => ((rhs - bias).checked_mul(bias - lhs), true),
		};

		let result = match product {
			Some(product) => bias_magnitude(product, negative),
			None if negative => Err(Error::Underflow),
			None => Err(Error::Overflow),
		};

		result.map(Self).map_err(|e| failed("multiplication", self, other, e))
	}

	/// Checked division, truncating toward zero.
	pub fn checked_div(self, other: Self) -> Result<Self, Error> {
		if other.is_zero() {
			return Err(failed("division", self, other, Error::DivisionByZero));
		}

		let bias = T::BIAS;
		let (lhs, rhs) = (self.0, other.0);

		// The divisor is not zero, so none of the magnitudes below are.
		let (quotient, negative) = match (lhs >= bias, rhs > bias) {
			(true, true) => ((lhs - bias) / (rhs - bias), false),
			(false, false) => ((bias - lhs) / (bias - rhs), false),
			(true, false) => ((lhs - bias) / (bias - rhs), true),
			(false, true) => ((bias - lhs) / (rhs - bias), true),
		};

		bias_magnitude(quotient, negative)
			.map(Self)
			.map_err(|e| failed("division", self, other, e))
	}

	/// Negate a negative value; non-negative values are returned unchanged.
	///
	/// # Panics
	///
	/// Panics on [`Signed::min`], whose magnitude is not representable.
	#[must_use]
	#[track_caller]
	pub fn twos_complement(self) -> Self {
		expect_ok(self.checked_twos_complement())
	}

	/// Checked form of [`Signed::twos_complement`].
	pub fn checked_twos_complement(self) -> Result<Self, Error> {
		if self.0 >= T::BIAS {
			return Ok(self);
		}

		// With BIAS at half the range, `!x + 1 == 2 * BIAS - x`, which is the
		// biased form of `BIAS - x`, the magnitude.
		(!self.0).checked_add(T::ONE).map(Self).ok_or_else(|| {
			log::trace!(target: LOG_TARGET, "two's complement of {} failed", self);
			Error::Overflow
		})
	}

	/// Checked negation.
	pub fn checked_neg(self) -> Result<Self, Error> {
		if self.is_negative() {
			self.checked_twos_complement()
		} else {
			Ok(Self(T::BIAS - (self.0 - T::BIAS)))
		}
	}
}

/// Put an unsigned magnitude on the biased scale.
fn bias_magnitude<T: Unsigned>(magnitude: T, negative: bool) -> Result<T, Error> {
	if negative {
		T::BIAS.checked_sub(magnitude).ok_or(Error::Underflow)
	} else {
		magnitude.checked_add(T::BIAS).ok_or(Error::Overflow)
	}
}

fn failed<T: Unsigned>(op: &str, lhs: Signed<T>, rhs: Signed<T>, error: Error) -> Error {
	log::trace!(target: LOG_TARGET, "{} of {} and {} failed: {}", op, lhs, rhs, error);
	error
}

#[track_caller]
fn expect_ok<T>(result: Result<T, Error>) -> T {
	match result {
		Ok(value) => value,
		Err(e) => panic!("{}", e),
	}
}

impl<T: Unsigned> Default for Signed<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: Unsigned> Ord for Signed<T> {
	fn cmp(&self, other: &Self) -> Ordering {
		// Adding BIAS is monotonic, so the stored values order like the
		// semantic ones.
		self.0.cmp(&other.0)
	}
}

impl<T: Unsigned> PartialOrd for Signed<T> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

macro_rules! impl_binary_op {
	( $trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $checked:ident ) => {
		impl<T: Unsigned> $trait for Signed<T> {
			type Output = Self;

			#[track_caller]
			fn $method(self, other: Self) -> Self {
				expect_ok(self.$checked(other))
			}
		}

		impl<T: Unsigned> $assign_trait for Signed<T> {
			#[track_caller]
			fn $assign_method(&mut self, other: Self) {
				*self = expect_ok(self.$checked(other));
			}
		}
	};
}

impl_binary_op!(Add, add, AddAssign, add_assign, checked_add);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, checked_sub);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, checked_mul);
impl_binary_op!(Div, div, DivAssign, div_assign, checked_div);

impl<T: Unsigned> Neg for Signed<T> {
	type Output = Self;

	#[track_caller]
	fn neg(self) -> Self {
		expect_ok(self.checked_neg())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{uint::U256, I256, I8};

	fn bias() -> U256 {
		U256::from_big_endian(
			&hex::decode("8000000000000000000000000000000000000000000000000000000000000000")
				.unwrap(),
		)
	}

	fn pos(v: u64) -> I256 {
		I256::from_uint(bias() + U256::from(v))
	}

	fn neg(v: u64) -> I256 {
		I256::from_uint(bias() - U256::from(v))
	}

	#[test]
	fn constructors() {
		assert_eq!(I256::new().underlying(), bias());
		assert_eq!(I256::zero(), I256::new());
		assert_eq!(I256::min().underlying(), U256::zero());
		assert_eq!(I256::max().underlying(), U256::MAX);
		assert_eq!(I256::one(), pos(1));
		assert_eq!(I256::bits(), 256);
		assert_eq!(I256::BIAS, bias());
		assert_eq!(I256::default(), I256::new());
	}

	#[test]
	fn neg_from() {
		assert_eq!(I256::neg_from(U256::from(5u64)), neg(5));
		assert_eq!(I256::neg_from(U256::zero()), I256::new());
		assert_eq!(I256::neg_from(bias()), I256::min());
		assert_eq!(
			I256::checked_neg_from(bias() + U256::one()),
			Err(Error::Underflow)
		);
	}

	#[test]
	#[should_panic(expected = "signed integer underflow")]
	fn neg_from_past_bias_panics() {
		let _ = I256::neg_from(U256::MAX);
	}

	#[test]
	fn magnitudes() {
		assert_eq!(I256::from_magnitude(U256::from(7u64)), Ok(pos(7)));
		assert_eq!(I256::from_magnitude(bias()), Err(Error::Overflow));
		assert_eq!(pos(7).to_magnitude(), Ok(U256::from(7u64)));
		assert_eq!(I256::new().to_magnitude(), Ok(U256::zero()));
		assert_eq!(neg(7).to_magnitude(), Err(Error::Underflow));
		assert_eq!(neg(7).magnitude(), U256::from(7u64));
		assert_eq!(I256::min().magnitude(), bias());
		assert_eq!(I256::max().magnitude(), bias() - U256::one());
	}

	#[test]
	fn predicates() {
		assert!(neg(1).is_negative());
		assert!(!I256::new().is_negative());
		assert!(I256::new().is_zero());
		assert!(pos(1).is_positive());
		assert_eq!(neg(9).signum(), neg(1));
		assert_eq!(I256::new().signum(), I256::new());
		assert_eq!(pos(9).signum(), pos(1));
	}

	#[test]
	fn ordering() {
		assert!(I256::min() < neg(1));
		assert!(neg(2) < neg(1));
		assert!(neg(1) < I256::new());
		assert!(I256::new() < pos(1));
		assert!(pos(1) < I256::max());
		assert_eq!(neg(3).cmp(&neg(3)), Ordering::Equal);
		assert_eq!(core::cmp::max(neg(3), pos(2)), pos(2));
	}

	#[test]
	fn add() {
		assert_eq!(I256::new() + I256::new(), I256::new());
		assert_eq!(neg(5) + pos(3), neg(2));
		assert_eq!(pos(3) + neg(5), neg(2));
		assert_eq!(neg(5) + neg(3), neg(8));
		assert_eq!(pos(5) + pos(3), pos(8));
		assert_eq!(I256::max() + I256::min(), neg(1));
		assert_eq!(I256::max().checked_add(pos(1)), Err(Error::Overflow));
		assert_eq!(I256::min().checked_add(neg(1)), Err(Error::Underflow));
	}

	#[test]
	fn sub() {
		assert_eq!(pos(5) - pos(3), pos(2));
		assert_eq!(pos(3) - pos(5), neg(2));
		assert_eq!(pos(5) - neg(3), pos(8));
		assert_eq!(neg(5) - pos(3), neg(8));
		assert_eq!(neg(5) - neg(3), neg(2));
		assert_eq!(neg(3) - neg(5), pos(2));
		assert_eq!(neg(3) - neg(3), I256::new());
		assert_eq!(I256::min() - I256::min(), I256::new());
		assert_eq!(I256::max() - I256::max(), I256::new());
		assert_eq!(neg(1) - I256::max(), I256::min());
		assert_eq!(I256::new().checked_sub(I256::min()), Err(Error::Overflow));
		assert_eq!(I256::min().checked_sub(pos(1)), Err(Error::Underflow));
	}

	#[test]
	fn mul() {
		assert_eq!(neg(4) * neg(3), pos(12));
		assert_eq!(pos(4) * neg(3), neg(12));
		assert_eq!(neg(4) * pos(3), neg(12));
		assert_eq!(pos(4) * pos(3), pos(12));
		assert_eq!(I256::new() * I256::min(), I256::new());
		assert_eq!(I256::min() * pos(1), I256::min());
		assert_eq!(I256::min().checked_mul(neg(1)), Err(Error::Overflow));
		assert_eq!(I256::max().checked_mul(neg(2)), Err(Error::Underflow));
		assert_eq!(I256::max().checked_mul(I256::max()), Err(Error::Overflow));
	}

	#[test]
	fn div() {
		assert_eq!(pos(7) / neg(2), neg(3));
		assert_eq!(neg(7) / pos(2), neg(3));
		assert_eq!(neg(7) / neg(2), pos(3));
		assert_eq!(pos(7) / pos(2), pos(3));
		assert_eq!(pos(1) / neg(2), I256::new());
		assert_eq!(I256::new() / neg(2), I256::new());
		assert_eq!(I256::min() / pos(1), I256::min());
		assert_eq!(I256::max() / neg(1), I256::min() + pos(1));
		assert_eq!(I256::min().checked_div(neg(1)), Err(Error::Overflow));
		assert_eq!(pos(7).checked_div(I256::new()), Err(Error::DivisionByZero));
	}

	#[test]
	#[should_panic(expected = "attempt to divide by zero")]
	fn div_by_zero_panics() {
		let _ = I256::min() / I256::new();
	}

	#[test]
	fn assign_ops() {
		let mut v = pos(10);
		v += neg(4);
		assert_eq!(v, pos(6));
		v -= pos(8);
		assert_eq!(v, neg(2));
		v *= neg(21);
		assert_eq!(v, pos(42));
		v /= pos(5);
		assert_eq!(v, pos(8));
	}

	#[test]
	fn twos_complement() {
		assert_eq!(neg(5).twos_complement(), pos(5));
		assert_eq!(pos(5).twos_complement(), pos(5));
		assert_eq!(I256::new().twos_complement(), I256::new());
		assert_eq!(neg(1).twos_complement(), pos(1));
		assert_eq!(I256::min().checked_twos_complement(), Err(Error::Overflow));
		assert_eq!((I256::min() + pos(1)).twos_complement(), I256::max());
	}

	#[test]
	fn negation() {
		assert_eq!(-pos(5), neg(5));
		assert_eq!(-neg(5), pos(5));
		assert_eq!(-I256::new(), I256::new());
		assert_eq!(-I256::max(), I256::min() + pos(1));
		assert_eq!(I256::min().checked_neg(), Err(Error::Overflow));
	}

	#[test]
	fn narrow_width() {
		assert_eq!(I8::new().underlying(), 0x80);
		assert_eq!(I8::min().underlying(), 0);
		assert_eq!(I8::max().underlying(), 0xff);
		assert_eq!(I8::bits(), 8);
		assert_eq!(I8::from_uint(0x80 - 5) + I8::from_uint(0x80 + 3), I8::from_uint(0x80 - 2));
	}
}
