/// Reason a signed integer operation failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(
	feature = "with-codec",
	derive(scale_codec::Encode, scale_codec::Decode, scale_info::TypeInfo)
)]
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
	/// The result is above the largest representable value.
	#[cfg_attr(feature = "with-codec", codec(index = 0))]
	Overflow,
	/// The result is below the smallest representable value, or a negative
	/// value was asked for as an unsigned magnitude.
	#[cfg_attr(feature = "with-codec", codec(index = 1))]
	Underflow,
	/// Division by semantic zero.
	#[cfg_attr(feature = "with-codec", codec(index = 2))]
	DivisionByZero,
	/// A string could not be parsed as a decimal integer.
	#[cfg_attr(feature = "with-codec", codec(index = 3))]
	InvalidDigit,
}

impl Error {
	/// Short description, also used as the panic message of operators.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::Overflow => "signed integer overflow",
			Self::Underflow => "signed integer underflow",
			Self::DivisionByZero => "attempt to divide by zero",
			Self::InvalidDigit => "invalid digit found in string",
		}
	}
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(self.as_str())
	}
}
