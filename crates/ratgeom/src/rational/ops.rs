//! Arithmetic operators. Every result is re-reduced through `Rational::reduced`.

use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_bigint::BigInt;
use num_traits::Zero;

use super::types::Rational;

impl<'a, 'b> Add<&'b Rational> for &'a Rational {
    type Output = Rational;
    fn add(self, rhs: &'b Rational) -> Rational {
        if self.denom() == rhs.denom() {
            return Rational::reduced(self.numer() + rhs.numer(), self.denom().clone());
        }
        Rational::reduced(
            self.numer() * rhs.denom() + rhs.numer() * self.denom(),
            self.denom() * rhs.denom(),
        )
    }
}

impl<'a, 'b> Sub<&'b Rational> for &'a Rational {
    type Output = Rational;
    fn sub(self, rhs: &'b Rational) -> Rational {
        if self.denom() == rhs.denom() {
            return Rational::reduced(self.numer() - rhs.numer(), self.denom().clone());
        }
        Rational::reduced(
            self.numer() * rhs.denom() - rhs.numer() * self.denom(),
            self.denom() * rhs.denom(),
        )
    }
}

impl<'a, 'b> Mul<&'b Rational> for &'a Rational {
    type Output = Rational;
    fn mul(self, rhs: &'b Rational) -> Rational {
        Rational::reduced(self.numer() * rhs.numer(), self.denom() * rhs.denom())
    }
}

impl<'a, 'b> Div<&'b Rational> for &'a Rational {
    type Output = Rational;
    /// # Panics
    /// On a zero divisor, like integer division. Use `Rational::checked_div`
    /// to get `GeomError::DivideByZero` instead.
    fn div(self, rhs: &'b Rational) -> Rational {
        assert!(!rhs.is_zero(), "attempt to divide a rational by zero");
        Rational::reduced(self.numer() * rhs.denom(), self.denom() * rhs.numer())
    }
}

forward_binop!(impl Add, add for Rational, Rational => Rational);
forward_binop!(impl Sub, sub for Rational, Rational => Rational);
forward_binop!(impl Mul, mul for Rational, Rational => Rational);
forward_binop!(impl Div, div for Rational, Rational => Rational);

forward_assign!(impl AddAssign, add_assign, Add::add for Rational, Rational);
forward_assign!(impl SubAssign, sub_assign, Sub::sub for Rational, Rational);
forward_assign!(impl MulAssign, mul_assign, Mul::mul for Rational, Rational);
forward_assign!(impl DivAssign, div_assign, Div::div for Rational, Rational);

impl Neg for &Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        Rational::reduced(-self.numer(), self.denom().clone())
    }
}

impl Neg for Rational {
    type Output = Rational;
    fn neg(self) -> Rational {
        -&self
    }
}

// Mixed integer operands. Integers are `n/1`, so the denominators stay put.

impl<'a, 'b> Add<&'b BigInt> for &'a Rational {
    type Output = Rational;
    fn add(self, rhs: &'b BigInt) -> Rational {
        Rational::reduced(self.numer() + rhs * self.denom(), self.denom().clone())
    }
}

impl<'a, 'b> Add<&'b Rational> for &'a BigInt {
    type Output = Rational;
    fn add(self, rhs: &'b Rational) -> Rational {
        rhs + self
    }
}

impl<'a, 'b> Sub<&'b BigInt> for &'a Rational {
    type Output = Rational;
    fn sub(self, rhs: &'b BigInt) -> Rational {
        Rational::reduced(self.numer() - rhs * self.denom(), self.denom().clone())
    }
}

impl<'a, 'b> Sub<&'b Rational> for &'a BigInt {
    type Output = Rational;
    fn sub(self, rhs: &'b Rational) -> Rational {
        Rational::reduced(self * rhs.denom() - rhs.numer(), rhs.denom().clone())
    }
}

impl<'a, 'b> Mul<&'b BigInt> for &'a Rational {
    type Output = Rational;
    fn mul(self, rhs: &'b BigInt) -> Rational {
        Rational::reduced(self.numer() * rhs, self.denom().clone())
    }
}

impl<'a, 'b> Mul<&'b Rational> for &'a BigInt {
    type Output = Rational;
    fn mul(self, rhs: &'b Rational) -> Rational {
        rhs * self
    }
}

impl<'a, 'b> Div<&'b BigInt> for &'a Rational {
    type Output = Rational;
    fn div(self, rhs: &'b BigInt) -> Rational {
        assert!(!rhs.is_zero(), "attempt to divide a rational by zero");
        Rational::reduced(self.numer().clone(), self.denom() * rhs)
    }
}

impl<'a, 'b> Div<&'b Rational> for &'a BigInt {
    type Output = Rational;
    fn div(self, rhs: &'b Rational) -> Rational {
        assert!(!rhs.is_zero(), "attempt to divide a rational by zero");
        Rational::reduced(self * rhs.denom(), rhs.numer().clone())
    }
}

forward_binop!(impl Add, add for Rational, BigInt => Rational);
forward_binop!(impl Add, add for BigInt, Rational => Rational);
forward_binop!(impl Sub, sub for Rational, BigInt => Rational);
forward_binop!(impl Sub, sub for BigInt, Rational => Rational);
forward_binop!(impl Mul, mul for Rational, BigInt => Rational);
forward_binop!(impl Mul, mul for BigInt, Rational => Rational);
forward_binop!(impl Div, div for Rational, BigInt => Rational);
forward_binop!(impl Div, div for BigInt, Rational => Rational);

impl Sum for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.fold(Rational::zero(), |acc, x| acc + x)
    }
}

impl Product for Rational {
    fn product<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::from(1), |acc, x| acc * x)
    }
}
