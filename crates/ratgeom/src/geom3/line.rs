//! Infinite lines in 3D.

use crate::error::Result;
use crate::rational::Rational;

use super::plane::Plane3;
use super::types::{Vector3, Vertex3};

/// Line through `origin` along `direction` (non-zero, unchecked).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Line3 {
    origin: Vertex3,
    direction: Vector3,
}

impl Line3 {
    #[inline]
    pub fn new(origin: Vertex3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Line through `a` and `b`, parametrised so that `a` sits at 0 and `b` at 1.
    pub fn from_two_points(a: &Vertex3, b: &Vertex3) -> Self {
        Self::new(a.clone(), b - a)
    }

    #[inline]
    pub fn origin(&self) -> &Vertex3 {
        &self.origin
    }

    #[inline]
    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    /// `origin + direction * t`.
    pub fn point_at(&self, t: &Rational) -> Vertex3 {
        &self.origin + &(&self.direction * t)
    }

    pub fn contains(&self, pt: &Vertex3) -> bool {
        self.direction.is_parallel_to(&(pt - &self.origin))
    }

    pub fn is_parallel_to(&self, other: &Line3) -> bool {
        self.direction.is_parallel_to(&other.direction)
    }

    pub fn is_parallel_to_plane(&self, plane: &Plane3) -> bool {
        self.direction.is_perpendicular_to(plane.normal())
    }

    /// True iff the lines meet in exactly one point (not parallel, coplanar).
    pub fn intersects(&self, other: &Line3) -> bool {
        if self.is_parallel_to(other) {
            return false;
        }
        let n = self.direction.cross(&other.direction);
        n.is_perpendicular_to(&(&other.origin - &self.origin))
    }

    pub fn is_coincident_with(&self, other: &Line3) -> bool {
        self.is_parallel_to(other) && self.contains(&other.origin)
    }

    /// Orthogonal projection of `pt` onto the line.
    pub fn nearest_point_to(&self, pt: &Vertex3) -> Result<Vertex3> {
        Ok(self.point_at(&self.scaled_coordinate_of(pt)?))
    }

    /// Parameter `t` of the projection of `pt`, in units of `direction`.
    pub fn scaled_coordinate_of(&self, pt: &Vertex3) -> Result<Rational> {
        (pt - &self.origin).scaled_length_along(&self.direction)
    }
}
