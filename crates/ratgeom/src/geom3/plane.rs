//! Oriented planes and the half-space predicates the hull is built on.

use std::cmp::Ordering;

use num_traits::Zero;

use crate::error::{GeomError, Result};
use crate::rational::Rational;

use super::line::Line3;
use super::types::{Vector3, Vertex3};

/// Plane through `origin` with outward `normal` (non-zero, unchecked).
///
/// Points with a negative signed distance are *included*, points with a
/// positive one are *excluded*.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Plane3 {
    origin: Vertex3,
    normal: Vector3,
}

impl Plane3 {
    #[inline]
    pub fn new(origin: Vertex3, normal: Vector3) -> Self {
        Self { origin, normal }
    }

    #[inline]
    pub fn origin(&self) -> &Vertex3 {
        &self.origin
    }

    #[inline]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Same plane, opposite orientation.
    pub fn flip(&self) -> Self {
        Self::new(self.origin.clone(), -&self.normal)
    }

    /// Plane through `a` with normal `b − a`; `b` is excluded.
    pub fn from_two_points(a: &Vertex3, b: &Vertex3) -> Self {
        Self::new(a.clone(), b - a)
    }

    /// Plane through three points, normal `(b − a) × (c − a)`.
    ///
    /// Errors: `Colinear` when the points do not span a plane.
    pub fn from_three_points(a: &Vertex3, b: &Vertex3, c: &Vertex3) -> Result<Self> {
        let normal = (b - a).cross(&(c - a));
        if normal.is_zero() {
            return Err(GeomError::Colinear);
        }
        Ok(Self::new(a.clone(), normal))
    }

    /// Plane through `a`, `b`, `c`, oriented so that it includes `keep`.
    ///
    /// Errors: `Colinear` as in `from_three_points`; `Coplanar` when `keep`
    /// lies in the plane.
    pub fn from_four_points(a: &Vertex3, b: &Vertex3, c: &Vertex3, keep: &Vertex3) -> Result<Self> {
        Self::from_three_points(a, b, c)?.flip_to_include(keep)
    }

    pub fn contains(&self, pt: &Vertex3) -> bool {
        self.normal.is_perpendicular_to(&(pt - &self.origin))
    }

    pub fn contains_line(&self, line: &Line3) -> bool {
        self.is_parallel_to_line(line) && self.contains(line.origin())
    }

    pub fn is_parallel_to(&self, other: &Plane3) -> bool {
        self.normal.is_parallel_to(&other.normal)
    }

    pub fn is_parallel_to_line(&self, line: &Line3) -> bool {
        line.direction().is_perpendicular_to(&self.normal)
    }

    pub fn is_perpendicular_to_line(&self, line: &Line3) -> bool {
        line.direction().is_parallel_to(&self.normal)
    }

    pub fn is_coincident_with(&self, other: &Plane3) -> bool {
        self.is_parallel_to(other) && self.contains(&other.origin)
    }

    /// Orthogonal projection of `pt` onto the plane.
    pub fn nearest_point_to(&self, pt: &Vertex3) -> Result<Vertex3> {
        Ok(&self.origin + &(pt - &self.origin).component_ortho(&self.normal)?)
    }

    /// Signed distance of `pt` in units of `|normal|`.
    pub fn scaled_distance_to(&self, pt: &Vertex3) -> Result<Rational> {
        (pt - &self.origin).scaled_length_along(&self.normal)
    }

    // Same sign as `scaled_distance_to` since `|normal|² > 0`; skips the division.
    fn side_of(&self, pt: &Vertex3) -> Ordering {
        self.normal.dot(&(pt - &self.origin)).cmp(&Rational::zero())
    }

    #[inline]
    pub fn includes(&self, pt: &Vertex3) -> bool {
        self.side_of(pt) == Ordering::Less
    }

    #[inline]
    pub fn excludes(&self, pt: &Vertex3) -> bool {
        self.side_of(pt) == Ordering::Greater
    }

    /// `self` or its flip, whichever includes `pt`.
    ///
    /// Errors: `Coplanar` when `pt` lies in the plane.
    pub fn flip_to_include(&self, pt: &Vertex3) -> Result<Self> {
        match self.side_of(pt) {
            Ordering::Less => Ok(self.clone()),
            Ordering::Greater => Ok(self.flip()),
            Ordering::Equal => Err(GeomError::Coplanar),
        }
    }
}
