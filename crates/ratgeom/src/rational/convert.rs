//! Bit-exact conversion between `Rational` and IEEE-754 binary32/binary64,
//! plus fixed-width integer extraction under an overflow policy.
//!
//! Encoding outline (`encode_bits`)
//! 1. Zero maps to `+0.0`.
//! 2. `normalize` finds `frac · 2^e` with `1 <= |frac| < 2`.
//! 3. Bias the exponent. A non-positive biased exponent becomes a subnormal:
//!    the fraction is shifted right and the exponent field clamped to 0.
//! 4. Round `frac · 2^mantissa_bits` to an integer under the rounding mode,
//!    saturate it into `i64`, and pack sign/exponent/mantissa. A mantissa that
//!    rounds up to the next power of two carries into the exponent field, which
//!    is also how a carry out of the largest finite value turns into infinity.

use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

use super::cfg::ConvertCfg;
use super::round::RoundingMode;
use super::types::{Rational, ONE, TWO};
use crate::error::{GeomError, Result};

/// What an out-of-range fixed-width integer conversion does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverflowPolicy {
    /// Keep the low bits (two's complement).
    Wraparound,
    /// Clamp to the type's min/max.
    Saturate,
    /// Fail with `GeomError::Overflow`.
    Error,
}

/// What a rational too large for the float format does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FloatOverflow {
    #[default]
    SaturateToInfinity,
    Error,
}

/// Fixed-width integer extraction from `BigInt`.
pub trait BigIntExt {
    fn to_i32_with(&self, policy: OverflowPolicy) -> Result<i32>;
    fn to_i64_with(&self, policy: OverflowPolicy) -> Result<i64>;
}

impl BigIntExt for BigInt {
    fn to_i32_with(&self, policy: OverflowPolicy) -> Result<i32> {
        if let Some(v) = self.to_i32() {
            return Ok(v);
        }
        match policy {
            OverflowPolicy::Wraparound => {
                let low = self & &BigInt::from(u32::MAX);
                Ok(low.to_u32().unwrap_or_default() as i32)
            }
            OverflowPolicy::Saturate => Ok(if self.sign() == num_bigint::Sign::Minus {
                i32::MIN
            } else {
                i32::MAX
            }),
            OverflowPolicy::Error => Err(GeomError::Overflow),
        }
    }

    fn to_i64_with(&self, policy: OverflowPolicy) -> Result<i64> {
        if let Some(v) = self.to_i64() {
            return Ok(v);
        }
        match policy {
            OverflowPolicy::Wraparound => {
                let low = self & &BigInt::from(u64::MAX);
                Ok(low.to_u64().unwrap_or_default() as i64)
            }
            OverflowPolicy::Saturate => Ok(if self.sign() == num_bigint::Sign::Minus {
                i64::MIN
            } else {
                i64::MAX
            }),
            OverflowPolicy::Error => Err(GeomError::Overflow),
        }
    }
}

/// Field widths of an IEEE-754 binary format.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FloatLayout {
    pub mantissa_bits: u32,
    pub exponent_bits: u32,
}

impl FloatLayout {
    pub const BINARY32: Self = Self {
        mantissa_bits: 23,
        exponent_bits: 8,
    };
    pub const BINARY64: Self = Self {
        mantissa_bits: 52,
        exponent_bits: 11,
    };

    #[inline]
    fn bias(self) -> i64 {
        (1i64 << (self.exponent_bits - 1)) - 1
    }

    /// The all-ones exponent field reserved for infinity/NaN.
    #[inline]
    fn exponent_max(self) -> u64 {
        (1u64 << self.exponent_bits) - 1
    }

    #[inline]
    fn sign_bit(self) -> u64 {
        1u64 << (self.mantissa_bits + self.exponent_bits)
    }

    #[inline]
    fn infinity(self, negative: bool) -> u64 {
        let bits = self.exponent_max() << self.mantissa_bits;
        if negative {
            bits | self.sign_bit()
        } else {
            bits
        }
    }
}

impl Rational {
    /// Split `self` into `(frac, e)` with `self = frac · 2^e` and `1 <= |frac| < 2`.
    ///
    /// Returns `None` for zero. The exponent is found by repeated squaring of
    /// candidate powers of two, then peeled off largest-first, so the work is
    /// O(log |e|) multiplications even for astronomically large exponents.
    pub fn normalize(&self) -> Option<(Rational, i64)> {
        if self.is_zero() {
            return None;
        }
        if self.is_negative() {
            let (frac, e) = normalize_positive(-self);
            return Some((-frac, e));
        }
        Some(normalize_positive(self.clone()))
    }

    /// Round to the nearest-representable `f64` under `mode`; overflow gives ±∞.
    pub fn to_f64(&self, mode: RoundingMode) -> f64 {
        let bits = encode_bits(self, FloatLayout::BINARY64, mode, FloatOverflow::SaturateToInfinity)
            .unwrap_or_else(|_| FloatLayout::BINARY64.infinity(self.is_negative()));
        f64::from_bits(bits)
    }

    pub fn to_f64_with(&self, cfg: ConvertCfg) -> Result<f64> {
        encode_bits(self, FloatLayout::BINARY64, cfg.rounding, cfg.float_overflow).map(f64::from_bits)
    }

    pub fn to_f32(&self, mode: RoundingMode) -> f32 {
        let bits = encode_bits(self, FloatLayout::BINARY32, mode, FloatOverflow::SaturateToInfinity)
            .unwrap_or_else(|_| FloatLayout::BINARY32.infinity(self.is_negative()));
        f32::from_bits(bits as u32)
    }

    pub fn to_f32_with(&self, cfg: ConvertCfg) -> Result<f32> {
        encode_bits(self, FloatLayout::BINARY32, cfg.rounding, cfg.float_overflow)
            .map(|bits| f32::from_bits(bits as u32))
    }

    /// The exact value of a finite `f64`. Infinity and NaN are not representable.
    pub fn from_f64(d: f64) -> Result<Self> {
        decode_bits(d.to_bits(), FloatLayout::BINARY64)
    }

    pub fn from_f32(f: f32) -> Result<Self> {
        decode_bits(u64::from(f.to_bits()), FloatLayout::BINARY32)
    }
}

impl TryFrom<f64> for Rational {
    type Error = GeomError;
    fn try_from(d: f64) -> Result<Self> {
        Rational::from_f64(d)
    }
}

impl TryFrom<f32> for Rational {
    type Error = GeomError;
    fn try_from(f: f32) -> Result<Self> {
        Rational::from_f32(f)
    }
}

fn normalize_positive(mut r: Rational) -> (Rational, i64) {
    let one = &*ONE;
    let two = &*TWO;
    let mut exponent = 0i64;
    let mut stack: Vec<(Rational, i64)> = Vec::new();

    if r < *one {
        let mut power = Rational::pow2(-1);
        let mut k = -1i64;
        while r < power {
            let next = &power * &power;
            stack.push((power, k));
            power = next;
            k *= 2;
        }
        while let Some((power, k)) = stack.pop() {
            if r < power {
                r = &r / &power;
                exponent += k;
            }
        }
    } else {
        let mut power = two.clone();
        let mut k = 1i64;
        while r > power {
            let next = &power * &power;
            stack.push((power, k));
            power = next;
            k *= 2;
        }
        while let Some((power, k)) = stack.pop() {
            if r > power {
                r = &r / &power;
                exponent += k;
            }
        }
    }

    // At most one step each way remains after the power-of-two descent.
    while r >= *two {
        r = &r / two;
        exponent += 1;
    }
    while r < *one {
        r = &r * two;
        exponent -= 1;
    }
    (r, exponent)
}

pub(crate) fn encode_bits(
    r: &Rational,
    layout: FloatLayout,
    mode: RoundingMode,
    overflow: FloatOverflow,
) -> Result<u64> {
    let Some((frac, e)) = r.normalize() else {
        return Ok(0);
    };
    let negative = frac.is_negative();
    let mb = i64::from(layout.mantissa_bits);
    let emax = layout.exponent_max();

    let overflowed = || match overflow {
        FloatOverflow::SaturateToInfinity => Ok(layout.infinity(negative)),
        FloatOverflow::Error => Err(GeomError::Overflow),
    };

    let mut biased = e.saturating_add(layout.bias());
    if biased >= emax as i64 {
        return overflowed();
    }

    // Subnormal: value = m · 2^(1 - bias - mb), so m = frac · 2^(biased - 1 + mb).
    // Past `mb + 2` extra halvings |m| < 1/2 and every mode rounds it the same way.
    let mut frac = frac;
    if biased <= 0 {
        let shift = (1 - biased).min(mb + 2);
        frac = &frac * &Rational::pow2(-shift);
        biased = 0;
    }

    let scaled = &frac * &Rational::pow2(mb);
    let mantissa = scaled
        .round_with(mode)
        .to_i64_with(OverflowPolicy::Saturate)?
        .unsigned_abs();

    // Normal numbers carry the hidden bit in `mantissa`; fold it into the
    // exponent field by adding `(biased - 1) << mb` instead of masking it off.
    let exponent_part = (biased.max(1) as u64 - 1) << layout.mantissa_bits;
    let bits = exponent_part + mantissa;
    if (bits >> layout.mantissa_bits) >= emax {
        return overflowed();
    }
    Ok(if negative { bits | layout.sign_bit() } else { bits })
}

pub(crate) fn decode_bits(bits: u64, layout: FloatLayout) -> Result<Rational> {
    let fraction_mask = (1u64 << layout.mantissa_bits) - 1;
    let fraction = bits & fraction_mask;
    let exponent_field = (bits >> layout.mantissa_bits) & layout.exponent_max();
    if exponent_field == layout.exponent_max() {
        return Err(GeomError::NotRepresentable);
    }
    let negative = bits & layout.sign_bit() != 0;

    let (mantissa, exponent) = if exponent_field == 0 {
        (fraction, 1 - layout.bias())
    } else {
        (
            fraction | (1u64 << layout.mantissa_bits),
            exponent_field as i64 - layout.bias(),
        )
    };

    let magnitude =
        &Rational::from(mantissa) * &Rational::pow2(exponent - i64::from(layout.mantissa_bits));
    Ok(if negative { -magnitude } else { magnitude })
}
