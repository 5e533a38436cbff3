//! Arbitrary-precision rationals with bit-exact IEEE-754 conversion.
//!
//! Purpose
//! - Provide the exact scalar every geometric predicate in this crate runs on.
//! - Convert to and from `f32`/`f64` at the bit level, so that a float read
//!   in is the exact rational it denotes and a rational written out is
//!   rounded exactly once, under a caller-chosen rounding mode.
//!
//! Assumptions and conventions
//! - A `Rational` is always reduced: `denom > 0` and `gcd(|numer|, denom) = 1`.
//!   Equality and hashing are therefore structural.
//! - Zero has no sign; it converts to `+0.0`.
//! - Magnitudes are unbounded. Nothing in this module caps operand growth.
//!
//! Code cross-refs: `types::Rational`, `round::RoundingMode`,
//! `convert::{FloatOverflow, OverflowPolicy, BigIntExt}`, `cfg::ConvertCfg`.

mod cfg;
mod convert;
mod ops;
mod round;
mod types;

pub use cfg::ConvertCfg;
pub use convert::{BigIntExt, FloatOverflow, OverflowPolicy};
pub use round::RoundingMode;
pub use types::{Rational, MINUS_ONE, ONE, ONE_HALF, TWO, ZERO};
