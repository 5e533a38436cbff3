//! Incremental exact convex hull in 3D.
//!
//! Purpose
//! - Grow a hull one point at a time through the states
//!   `Empty → SinglePoint → LineSegment → Polygon → Polyhedron`, classifying
//!   points against the current hull exactly.
//!
//! Assumptions and conventions
//! - Every `add` is a pure transition: it returns a new `ConvexHull` and never
//!   mutates `self`. Unchanged faces are shared between the old and the new
//!   value.
//! - Faces are oriented so that their planes *include* the interior
//!   (negative side) and *exclude* the exterior.
//! - `Polygon::new` and `Polyhedron::new` always validate; an invalid ring or
//!   face set is `InvalidGeometry`, never a partially valid value.
//! - The polygon splice and the silhouette walk are bounded by the ring/loop
//!   length. Running out of steps is a `Logic` error, not a user condition.
//!
//! Code cross-refs: `geom3::Plane3::{includes, excludes, flip_to_include}`,
//! `dual_set::DualIndexedSet` (edge bookkeeping).

mod dual_set;
mod polygon;
mod polyhedron;

pub use dual_set::DualIndexedSet;
pub use polygon::{Edge, Polygon};
pub use polyhedron::{DirectedEdge, Polyhedron};

use num_traits::{One, Zero};

use crate::error::Result;
use crate::geom3::{Line3, Vertex3};
use crate::rational::Rational;

/// Where a point lies relative to a hull.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointStatus {
    Outside,
    OnCorner,
    OnEdge,
    OnFace,
    Inside,
}

/// Accumulated state of an incremental hull build.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ConvexHull {
    #[default]
    Empty,
    SinglePoint(Vertex3),
    LineSegment(Vertex3, Vertex3),
    Polygon(Polygon),
    Polyhedron(Polyhedron),
}

impl ConvexHull {
    /// Fold `add` over `points`, starting from `Empty`.
    pub fn from_points<'a, I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Vertex3>,
    {
        points
            .into_iter()
            .try_fold(Self::Empty, |hull, p| hull.add(p))
    }

    /// Affine dimension of the hull; `None` when empty.
    pub fn dimension(&self) -> Option<usize> {
        match self {
            Self::Empty => None,
            Self::SinglePoint(_) => Some(0),
            Self::LineSegment(..) => Some(1),
            Self::Polygon(_) => Some(2),
            Self::Polyhedron(_) => Some(3),
        }
    }

    /// Extreme points of the hull.
    pub fn vertices(&self) -> Vec<Vertex3> {
        match self {
            Self::Empty => Vec::new(),
            Self::SinglePoint(v) => vec![v.clone()],
            Self::LineSegment(a, b) => vec![a.clone(), b.clone()],
            Self::Polygon(p) => p.vertices().to_vec(),
            Self::Polyhedron(p) => p.vertices(),
        }
    }

    pub fn point_status(&self, pt: &Vertex3) -> PointStatus {
        match self {
            Self::Empty => PointStatus::Outside,
            Self::SinglePoint(v) => {
                if v == pt {
                    PointStatus::OnCorner
                } else {
                    PointStatus::Outside
                }
            }
            Self::LineSegment(a, b) => {
                if a == pt || b == pt {
                    PointStatus::OnCorner
                } else {
                    match segment_coordinate(a, b, pt) {
                        Some(t) if t >= Rational::zero() && t <= Rational::one() => {
                            PointStatus::OnEdge
                        }
                        _ => PointStatus::Outside,
                    }
                }
            }
            Self::Polygon(p) => p.point_status(pt),
            Self::Polyhedron(p) => p.point_status(pt),
        }
    }

    /// Hull of `self` and `pt`.
    ///
    /// Errors: only `Logic` (an internal step bound ran out) or
    /// `InvalidGeometry` from a rebuilt face; neither is expected for
    /// any input.
    pub fn add(&self, pt: &Vertex3) -> Result<Self> {
        let next = match self {
            Self::Empty => Self::SinglePoint(pt.clone()),
            Self::SinglePoint(v) if v == pt => self.clone(),
            Self::SinglePoint(v) => Self::LineSegment(v.clone(), pt.clone()),
            Self::LineSegment(a, b) => match segment_coordinate(a, b, pt) {
                Some(t) if t < Rational::zero() => Self::LineSegment(pt.clone(), b.clone()),
                Some(t) if t > Rational::one() => Self::LineSegment(a.clone(), pt.clone()),
                Some(_) => self.clone(),
                None => Self::Polygon(Polygon::new(vec![a.clone(), b.clone(), pt.clone()])?),
            },
            Self::Polygon(p) => p.add(pt)?,
            Self::Polyhedron(p) => Self::Polyhedron(p.add(pt)?),
        };
        if next.dimension() != self.dimension() {
            tracing::trace!(from = ?self.dimension(), to = ?next.dimension(), "hull promoted");
        }
        Ok(next)
    }
}

/// Parameter of `pt` on the line `a → b` (0 at `a`, 1 at `b`), or `None`
/// when `pt` is off that line.
fn segment_coordinate(a: &Vertex3, b: &Vertex3, pt: &Vertex3) -> Option<Rational> {
    let line = Line3::from_two_points(a, b);
    if !line.contains(pt) {
        return None;
    }
    line.scaled_coordinate_of(pt).ok()
}

#[cfg(test)]
mod tests;
