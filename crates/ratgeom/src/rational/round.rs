//! Rounding a rational to an integer.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;

use super::types::{Rational, ONE_HALF};

/// How a rational is brought to an integer (and, through that, to a float mantissa).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Toward negative infinity.
    Floor,
    /// To nearest; exact halves go to the even neighbour.
    #[default]
    Round,
    /// Toward positive infinity.
    Ceiling,
    TruncateTowardZero,
}

impl Rational {
    pub fn floor(&self) -> BigInt {
        self.numer().div_floor(self.denom())
    }

    pub fn ceil(&self) -> BigInt {
        -(-self.numer()).div_floor(self.denom())
    }

    pub fn trunc(&self) -> BigInt {
        self.numer() / self.denom()
    }

    /// Round half to even.
    ///
    /// `self + 1/2` is an integer exactly when `self` sits on a half-way point
    /// (denominator 2). Only then is there a tie, and an odd shifted value
    /// means the even neighbour is the one below.
    pub fn round(&self) -> BigInt {
        let shifted = self + &*ONE_HALF;
        if shifted.is_integer() {
            let n = shifted.numer();
            if n.is_odd() {
                n - BigInt::one()
            } else {
                n.clone()
            }
        } else {
            shifted.floor()
        }
    }

    pub fn round_with(&self, mode: RoundingMode) -> BigInt {
        match mode {
            RoundingMode::Floor => self.floor(),
            RoundingMode::Round => self.round(),
            RoundingMode::Ceiling => self.ceil(),
            RoundingMode::TruncateTowardZero => self.trunc(),
        }
    }
}
