//! Signed fixed-width integers built on unsigned storage.
//!
//! Values use a bias (offset) encoding: the signed value `v` is stored as the
//! unsigned value `v + 2^(N-1)`. Comparisons are plain unsigned comparisons
//! of the stored value, while addition, subtraction, multiplication and
//! division split on the sign of each operand so that no intermediate
//! unsigned computation wraps.
//!
//! ```
//! use signed_integers::I256;
//!
//! let a: I256 = "-5".parse().unwrap();
//! let b = I256::from(3i128);
//! assert_eq!((a + b).to_string(), "-2");
//! assert_eq!(a.checked_div(I256::new()), Err(signed_integers::Error::DivisionByZero));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

mod convert;
mod error;
mod signed;
pub mod uint;

pub use crate::error::Error;
pub use crate::signed::Signed;

/// Signed 8-bit integer stored in a `u8`.
pub type I8 = Signed<u8>;
/// Signed 16-bit integer stored in a `u16`.
pub type I16 = Signed<u16>;
/// Signed 32-bit integer stored in a `u32`.
pub type I32 = Signed<u32>;
/// Signed 64-bit integer stored in a `u64`.
pub type I64 = Signed<u64>;
/// Signed 128-bit integer stored in a `u128`.
pub type I128 = Signed<u128>;
/// Signed 256-bit integer stored in a [`U256`](uint::U256).
pub type I256 = Signed<uint::U256>;
