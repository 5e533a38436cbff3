//! `Vector2` / `Vertex2` and their operators.

use std::ops::{Add, Div, Mul, Neg, Sub};

use nalgebra::{Point2, Vector2 as NVector2};
use num_traits::Zero;

use crate::error::Result;
use crate::rational::{Rational, RoundingMode};

/// Exact 2D displacement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vector2 {
    pub x: Rational,
    pub y: Rational,
}

/// Exact 2D point.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vertex2 {
    pub x: Rational,
    pub y: Rational,
}

impl Vector2 {
    #[inline]
    pub fn new(x: impl Into<Rational>, y: impl Into<Rational>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(Rational::zero(), Rational::zero())
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    pub fn dot(&self, other: &Self) -> Rational {
        &self.x * &other.x + &self.y * &other.y
    }

    /// z-component of the 3D cross product of `(x, y, 0)` and `(x', y', 0)`.
    pub fn cross(&self, other: &Self) -> Rational {
        &self.x * &other.y - &self.y * &other.x
    }

    /// Quarter turn clockwise: `(x, y) ↦ (y, −x)`.
    pub fn r90(&self) -> Self {
        Self {
            x: self.y.clone(),
            y: -&self.x,
        }
    }

    #[inline]
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        self.cross(other).is_zero()
    }

    #[inline]
    pub fn is_perpendicular_to(&self, other: &Self) -> bool {
        self.dot(other).is_zero()
    }

    #[inline]
    pub fn length_squared(&self) -> Rational {
        self.dot(self)
    }

    /// Scalar `s` with `axis * s` the projection of `self` onto `axis`.
    /// Fails with `DivideByZero` for a zero axis.
    pub fn scaled_length_along(&self, axis: &Self) -> Result<Rational> {
        self.dot(axis).checked_div(&axis.length_squared())
    }

    pub fn component_along(&self, axis: &Self) -> Result<Self> {
        Ok(axis * &self.scaled_length_along(axis)?)
    }

    /// `self − component_along(axis)`; the two parts sum back to `self` exactly.
    pub fn component_ortho(&self, axis: &Self) -> Result<Self> {
        Ok(self - &self.component_along(axis)?)
    }

    pub fn try_from_nalgebra(v: &NVector2<f64>) -> Result<Self> {
        Ok(Self {
            x: Rational::from_f64(v.x)?,
            y: Rational::from_f64(v.y)?,
        })
    }

    pub fn to_nalgebra(&self, mode: RoundingMode) -> NVector2<f64> {
        NVector2::new(self.x.to_f64(mode), self.y.to_f64(mode))
    }
}

impl Vertex2 {
    #[inline]
    pub fn new(x: impl Into<Rational>, y: impl Into<Rational>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    #[inline]
    pub fn origin() -> Self {
        Self::new(Rational::zero(), Rational::zero())
    }

    pub fn try_from_point(p: &Point2<f64>) -> Result<Self> {
        Ok(Self {
            x: Rational::from_f64(p.x)?,
            y: Rational::from_f64(p.y)?,
        })
    }

    pub fn to_point(&self, mode: RoundingMode) -> Point2<f64> {
        Point2::new(self.x.to_f64(mode), self.y.to_f64(mode))
    }
}

impl<'a, 'b> Add<&'b Vector2> for &'a Vector2 {
    type Output = Vector2;
    fn add(self, rhs: &'b Vector2) -> Vector2 {
        Vector2 {
            x: &self.x + &rhs.x,
            y: &self.y + &rhs.y,
        }
    }
}

impl<'a, 'b> Sub<&'b Vector2> for &'a Vector2 {
    type Output = Vector2;
    fn sub(self, rhs: &'b Vector2) -> Vector2 {
        Vector2 {
            x: &self.x - &rhs.x,
            y: &self.y - &rhs.y,
        }
    }
}

impl<'a, 'b> Mul<&'b Rational> for &'a Vector2 {
    type Output = Vector2;
    fn mul(self, s: &'b Rational) -> Vector2 {
        Vector2 {
            x: &self.x * s,
            y: &self.y * s,
        }
    }
}

impl<'a, 'b> Mul<&'b Vector2> for &'a Rational {
    type Output = Vector2;
    fn mul(self, v: &'b Vector2) -> Vector2 {
        v * self
    }
}

impl<'a, 'b> Div<&'b Rational> for &'a Vector2 {
    type Output = Vector2;
    /// # Panics
    /// On a zero divisor.
    fn div(self, s: &'b Rational) -> Vector2 {
        Vector2 {
            x: &self.x / s,
            y: &self.y / s,
        }
    }
}

impl Neg for &Vector2 {
    type Output = Vector2;
    fn neg(self) -> Vector2 {
        Vector2 {
            x: -&self.x,
            y: -&self.y,
        }
    }
}

impl Neg for Vector2 {
    type Output = Vector2;
    fn neg(self) -> Vector2 {
        -&self
    }
}

impl<'a, 'b> Sub<&'b Vertex2> for &'a Vertex2 {
    type Output = Vector2;
    fn sub(self, rhs: &'b Vertex2) -> Vector2 {
        Vector2 {
            x: &self.x - &rhs.x,
            y: &self.y - &rhs.y,
        }
    }
}

impl<'a, 'b> Add<&'b Vector2> for &'a Vertex2 {
    type Output = Vertex2;
    fn add(self, rhs: &'b Vector2) -> Vertex2 {
        Vertex2 {
            x: &self.x + &rhs.x,
            y: &self.y + &rhs.y,
        }
    }
}

impl<'a, 'b> Add<&'b Vertex2> for &'a Vector2 {
    type Output = Vertex2;
    fn add(self, rhs: &'b Vertex2) -> Vertex2 {
        rhs + self
    }
}

impl<'a, 'b> Sub<&'b Vector2> for &'a Vertex2 {
    type Output = Vertex2;
    fn sub(self, rhs: &'b Vector2) -> Vertex2 {
        Vertex2 {
            x: &self.x - &rhs.x,
            y: &self.y - &rhs.y,
        }
    }
}

forward_binop!(impl Add, add for Vector2, Vector2 => Vector2);
forward_binop!(impl Sub, sub for Vector2, Vector2 => Vector2);
forward_binop!(impl Mul, mul for Vector2, Rational => Vector2);
forward_binop!(impl Mul, mul for Rational, Vector2 => Vector2);
forward_binop!(impl Div, div for Vector2, Rational => Vector2);
forward_binop!(impl Sub, sub for Vertex2, Vertex2 => Vector2);
forward_binop!(impl Add, add for Vertex2, Vector2 => Vertex2);
forward_binop!(impl Add, add for Vector2, Vertex2 => Vertex2);
forward_binop!(impl Sub, sub for Vertex2, Vector2 => Vertex2);
