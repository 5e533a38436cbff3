//! The `Rational` value type: construction, accessors, ordering, constants.

use std::cmp::Ordering;
use std::sync::LazyLock;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{GeomError, Result};

/// Exact rational number `numer / denom`.
///
/// Invariants:
/// - `denom > 0`.
/// - `gcd(|numer|, denom) = 1` (so zero is stored as `0/1`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

pub static ZERO: LazyLock<Rational> = LazyLock::new(|| Rational::from_integer(BigInt::zero()));
pub static ONE: LazyLock<Rational> = LazyLock::new(|| Rational::from_integer(BigInt::one()));
pub static TWO: LazyLock<Rational> = LazyLock::new(|| Rational::from_integer(BigInt::from(2)));
pub static ONE_HALF: LazyLock<Rational> = LazyLock::new(|| Rational::reduced(BigInt::one(), BigInt::from(2)));
pub static MINUS_ONE: LazyLock<Rational> = LazyLock::new(|| Rational::from_integer(-BigInt::one()));

impl Rational {
    /// Build `numer / denom` in reduced, sign-normalized form.
    pub fn new(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Result<Self> {
        let (numer, denom) = (numer.into(), denom.into());
        if denom.is_zero() {
            return Err(GeomError::DivideByZero);
        }
        Ok(Self::reduced(numer, denom))
    }

    /// Reduce a pair known to have a non-zero denominator.
    pub(crate) fn reduced(mut numer: BigInt, mut denom: BigInt) -> Self {
        debug_assert!(!denom.is_zero());
        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }
        let g = numer.gcd(&denom);
        if !g.is_one() {
            numer /= &g;
            denom /= &g;
        }
        Self { numer, denom }
    }

    #[inline]
    pub fn from_integer(i: BigInt) -> Self {
        Self {
            numer: i,
            denom: BigInt::one(),
        }
    }

    /// Exact `2^k` for any `k`, built by shifting rather than repeated multiplication.
    pub fn pow2(k: i64) -> Self {
        let shift = k.unsigned_abs();
        let p = BigInt::one() << shift;
        if k >= 0 {
            Self::from_integer(p)
        } else {
            Self {
                numer: BigInt::one(),
                denom: p,
            }
        }
    }

    #[inline]
    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    #[inline]
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numer.is_negative()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.numer.is_positive()
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    pub fn abs(&self) -> Self {
        Self {
            numer: self.numer.abs(),
            denom: self.denom.clone(),
        }
    }

    /// `1 / self`; fails on zero.
    pub fn recip(&self) -> Result<Self> {
        Self::new(self.denom.clone(), self.numer.clone())
    }

    /// Integer power; negative exponents go through the reciprocal.
    pub fn pow(&self, expt: i32) -> Result<Self> {
        let base = if expt < 0 { self.recip()? } else { self.clone() };
        let e = expt.unsigned_abs() as usize;
        Ok(Self {
            numer: num_traits::pow(base.numer, e),
            denom: num_traits::pow(base.denom, e),
        })
    }

    /// Largest rational `g` such that both `a/g` and `b/g` are integers.
    pub fn gcd(a: &Self, b: &Self) -> Self {
        let x = &a.numer * &b.denom;
        let y = &b.numer * &a.denom;
        let d = &a.denom * &b.denom;
        Self::reduced(x.gcd(&y), d)
    }

    /// Smallest non-negative rational that is an integer multiple of both.
    pub fn lcm(a: &Self, b: &Self) -> Self {
        let x = &a.numer * &b.denom;
        let y = &b.numer * &a.denom;
        let d = &a.denom * &b.denom;
        Self::reduced(x.lcm(&y), d)
    }

    /// `self / rhs`, failing instead of panicking on a zero divisor.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        Self::new(&self.numer * &rhs.denom, &self.denom * &rhs.numer)
    }

    /// `-1`, `0` or `1`.
    #[inline]
    pub fn signum(&self) -> i32 {
        match self.numer.sign() {
            num_bigint::Sign::Minus => -1,
            num_bigint::Sign::NoSign => 0,
            num_bigint::Sign::Plus => 1,
        }
    }
}

impl Ord for Rational {
    /// Cross-multiplication against the positive denominators; no division.
    fn cmp(&self, other: &Self) -> Ordering {
        if self.denom == other.denom {
            return self.numer.cmp(&other.numer);
        }
        (&self.numer * &other.denom).cmp(&(&other.numer * &self.denom))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Rational {
    #[inline]
    fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }
    #[inline]
    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl One for Rational {
    #[inline]
    fn one() -> Self {
        Self::from_integer(BigInt::one())
    }
}

impl From<BigInt> for Rational {
    fn from(i: BigInt) -> Self {
        Self::from_integer(i)
    }
}

macro_rules! from_primitive_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Rational {
            #[inline]
            fn from(i: $t) -> Self {
                Self::from_integer(BigInt::from(i))
            }
        }
    )*};
}

from_primitive_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
