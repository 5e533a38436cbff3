//! Exact pairwise intersections of lines and planes.
//!
//! Each routine first classifies the degenerate cases, in the order
//! coincident → parallel → skew, and reports them as
//! `GeomError::Intersection(IntersectionFailed::…)`. Otherwise the point is
//! found by interpolating the line parameter at which a projected
//! displacement crosses zero.

use num_traits::Zero;

use crate::error::{IntersectionFailed, Result};
use crate::rational::Rational;

use super::line::Line3;
use super::plane::Plane3;
use super::types::{Vector3, Vertex3};

/// Exact intersection with `Rhs`.
pub trait Intersect<Rhs: ?Sized = Self> {
    type Output;
    fn intersect(&self, rhs: &Rhs) -> Result<Self::Output>;
}

/// `y1 + (y2 − y1)(x3 − x1)/(x2 − x1)`. Errors with `DivideByZero` when `x1 == x2`.
pub fn interpolate(
    x1: &Rational,
    y1: &Rational,
    x2: &Rational,
    y2: &Rational,
    x3: &Rational,
) -> Result<Rational> {
    let t = (x3 - x1).checked_div(&(x2 - x1))?;
    Ok(y1 + &((y2 - y1) * t))
}

/// Vertex form of [`interpolate`].
pub fn interpolate_vertex(
    x1: &Rational,
    y1: &Vertex3,
    x2: &Rational,
    y2: &Vertex3,
    x3: &Rational,
) -> Result<Vertex3> {
    let t = (x3 - x1).checked_div(&(x2 - x1))?;
    Ok(y1 + &((y2 - y1) * t))
}

/// Point of `line` whose displacement from `anchor`, measured along `axis`, is zero.
fn crossing(line: &Line3, anchor: &Vertex3, axis: &Vector3) -> Result<Vertex3> {
    let tip = line.origin() + line.direction();
    let x1 = (line.origin() - anchor).scaled_length_along(axis)?;
    let x2 = (&tip - anchor).scaled_length_along(axis)?;
    interpolate_vertex(&x1, line.origin(), &x2, &tip, &Rational::zero())
}

impl Intersect for Line3 {
    type Output = Vertex3;

    fn intersect(&self, other: &Line3) -> Result<Vertex3> {
        if self.is_coincident_with(other) {
            return Err(IntersectionFailed::Coincident.into());
        }
        if self.is_parallel_to(other) {
            return Err(IntersectionFailed::Parallel.into());
        }
        if !self.intersects(other) {
            return Err(IntersectionFailed::Skew.into());
        }
        let convergence = other.direction().component_ortho(self.direction())?;
        crossing(other, self.origin(), &convergence)
    }
}

impl Intersect<Plane3> for Line3 {
    type Output = Vertex3;

    fn intersect(&self, plane: &Plane3) -> Result<Vertex3> {
        if plane.contains_line(self) {
            return Err(IntersectionFailed::Coincident.into());
        }
        if plane.is_parallel_to_line(self) {
            return Err(IntersectionFailed::Parallel.into());
        }
        let convergence = self.direction().component_along(plane.normal())?;
        crossing(self, plane.origin(), &convergence)
    }
}

impl Intersect<Line3> for Plane3 {
    type Output = Vertex3;

    #[inline]
    fn intersect(&self, line: &Line3) -> Result<Vertex3> {
        line.intersect(self)
    }
}

impl Intersect for Plane3 {
    type Output = Line3;

    /// Line along `n1 × n2`. Its origin is where the in-plane line of `self`
    /// with direction `(n1 × n2) × n1` meets `other`.
    fn intersect(&self, other: &Plane3) -> Result<Line3> {
        if self.is_coincident_with(other) {
            return Err(IntersectionFailed::Coincident.into());
        }
        if self.is_parallel_to(other) {
            return Err(IntersectionFailed::Parallel.into());
        }
        let binormal = self.normal().cross(other.normal());
        let in_plane = Line3::new(self.origin().clone(), binormal.cross(self.normal()));
        let point = in_plane.intersect(other)?;
        Ok(Line3::new(point, binormal))
    }
}
