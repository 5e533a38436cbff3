//! `Vector3` / `Vertex3` and their operators.

use std::ops::{Add, Div, Mul, Neg, Sub};

use nalgebra::{Point3, Vector3 as NVector3};
use num_bigint::BigInt;
use num_traits::Zero;

use crate::error::Result;
use crate::rational::{Rational, RoundingMode};

/// Exact 3D displacement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vector3 {
    pub x: Rational,
    pub y: Rational,
    pub z: Rational,
}

/// Exact 3D point. Hashable, so it can key the hull's edge maps.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vertex3 {
    pub x: Rational,
    pub y: Rational,
    pub z: Rational,
}

impl Vector3 {
    #[inline]
    pub fn new(x: impl Into<Rational>, y: impl Into<Rational>, z: impl Into<Rational>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: z.into(),
        }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(Rational::zero(), Rational::zero(), Rational::zero())
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero() && self.z.is_zero()
    }

    pub fn dot(&self, other: &Self) -> Rational {
        &self.x * &other.x + &self.y * &other.y + &self.z * &other.z
    }

    pub fn cross(&self, other: &Self) -> Self {
        Self {
            x: &self.y * &other.z - &self.z * &other.y,
            y: &self.z * &other.x - &self.x * &other.z,
            z: &self.x * &other.y - &self.y * &other.x,
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

    pub fn try_from_nalgebra(v: &NVector3<f64>) -> Result<Self> {
        Ok(Self {
            x: Rational::from_f64(v.x)?,
            y: Rational::from_f64(v.y)?,
            z: Rational::from_f64(v.z)?,
        })
    }

    pub fn to_nalgebra(&self, mode: RoundingMode) -> NVector3<f64> {
        NVector3::new(self.x.to_f64(mode), self.y.to_f64(mode), self.z.to_f64(mode))
    }
}

impl Vertex3 {
    #[inline]
    pub fn new(x: impl Into<Rational>, y: impl Into<Rational>, z: impl Into<Rational>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: z.into(),
        }
    }

    #[inline]
    pub fn origin() -> Self {
        Self::new(Rational::zero(), Rational::zero(), Rational::zero())
    }

    /// Exact vertex from a finite float point; NaN/∞ coordinates fail with
    /// `NotRepresentable`.
    pub fn try_from_point(p: &Point3<f64>) -> Result<Self> {
        Ok(Self {
            x: Rational::from_f64(p.x)?,
            y: Rational::from_f64(p.y)?,
            z: Rational::from_f64(p.z)?,
        })
    }

    pub fn to_point(&self, mode: RoundingMode) -> Point3<f64> {
        Point3::new(self.x.to_f64(mode), self.y.to_f64(mode), self.z.to_f64(mode))
    }
}

impl<'a, 'b> Add<&'b Vector3> for &'a Vector3 {
    type Output = Vector3;
    fn add(self, rhs: &'b Vector3) -> Vector3 {
        Vector3 {
            x: &self.x + &rhs.x,
            y: &self.y + &rhs.y,
            z: &self.z + &rhs.z,
        }
    }
}

impl<'a, 'b> Sub<&'b Vector3> for &'a Vector3 {
    type Output = Vector3;
    fn sub(self, rhs: &'b Vector3) -> Vector3 {
        Vector3 {
            x: &self.x - &rhs.x,
            y: &self.y - &rhs.y,
            z: &self.z - &rhs.z,
        }
    }
}

impl<'a, 'b> Mul<&'b Rational> for &'a Vector3 {
    type Output = Vector3;
    fn mul(self, s: &'b Rational) -> Vector3 {
        Vector3 {
            x: &self.x * s,
            y: &self.y * s,
            z: &self.z * s,
        }
    }
}

impl<'a, 'b> Mul<&'b Vector3> for &'a Rational {
    type Output = Vector3;
    fn mul(self, v: &'b Vector3) -> Vector3 {
        v * self
    }
}

impl<'a, 'b> Mul<&'b BigInt> for &'a Vector3 {
    type Output = Vector3;
    fn mul(self, s: &'b BigInt) -> Vector3 {
        Vector3 {
            x: &self.x * s,
            y: &self.y * s,
            z: &self.z * s,
        }
    }
}

impl<'a, 'b> Div<&'b Rational> for &'a Vector3 {
    type Output = Vector3;
    /// # Panics
    /// On a zero divisor.
    fn div(self, s: &'b Rational) -> Vector3 {
        Vector3 {
            x: &self.x / s,
            y: &self.y / s,
            z: &self.z / s,
        }
    }
}

impl<'a, 'b> Div<&'b BigInt> for &'a Vector3 {
    type Output = Vector3;
    /// # Panics
    /// On a zero divisor.
    fn div(self, s: &'b BigInt) -> Vector3 {
        Vector3 {
            x: &self.x / s,
            y: &self.y / s,
            z: &self.z / s,
        }
    }
}

impl Neg for &Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        Vector3 {
            x: -&self.x,
            y: -&self.y,
            z: -&self.z,
        }
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        -&self
    }
}

impl<'a, 'b> Sub<&'b Vertex3> for &'a Vertex3 {
    type Output = Vector3;
    fn sub(self, rhs: &'b Vertex3) -> Vector3 {
        Vector3 {
            x: &self.x - &rhs.x,
            y: &self.y - &rhs.y,
            z: &self.z - &rhs.z,
        }
    }
}

impl<'a, 'b> Add<&'b Vector3> for &'a Vertex3 {
    type Output = Vertex3;
    fn add(self, rhs: &'b Vector3) -> Vertex3 {
        Vertex3 {
            x: &self.x + &rhs.x,
            y: &self.y + &rhs.y,
            z: &self.z + &rhs.z,
        }
    }
}

impl<'a, 'b> Add<&'b Vertex3> for &'a Vector3 {
    type Output = Vertex3;
    fn add(self, rhs: &'b Vertex3) -> Vertex3 {
        rhs + self
    }
}

impl<'a, 'b> Sub<&'b Vector3> for &'a Vertex3 {
    type Output = Vertex3;
    fn sub(self, rhs: &'b Vector3) -> Vertex3 {
        Vertex3 {
            x: &self.x - &rhs.x,
            y: &self.y - &rhs.y,
            z: &self.z - &rhs.z,
        }
    }
}

forward_binop!(impl Add, add for Vector3, Vector3 => Vector3);
forward_binop!(impl Sub, sub for Vector3, Vector3 => Vector3);
forward_binop!(impl Mul, mul for Vector3, Rational => Vector3);
forward_binop!(impl Mul, mul for Rational, Vector3 => Vector3);
forward_binop!(impl Mul, mul for Vector3, BigInt => Vector3);
forward_binop!(impl Div, div for Vector3, Rational => Vector3);
forward_binop!(impl Div, div for Vector3, BigInt => Vector3);
forward_binop!(impl Sub, sub for Vertex3, Vertex3 => Vector3);
forward_binop!(impl Add, add for Vertex3, Vector3 => Vertex3);
forward_binop!(impl Add, add for Vector3, Vertex3 => Vertex3);
forward_binop!(impl Sub, sub for Vertex3, Vector3 => Vertex3);
