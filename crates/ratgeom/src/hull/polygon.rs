//! Convex planar polygons: validated rings with cached edge planes.

use std::sync::Arc;

use num_traits::{One, Zero};

use crate::error::{GeomError, Result};
use crate::geom3::{Line3, Plane3, Vector3, Vertex3};
use crate::rational::Rational;

use super::polyhedron::Polyhedron;
use super::{ConvexHull, PointStatus};

/// Convex ring of coplanar vertices with normal `(v1 − v0) × (v2 − v1)`.
///
/// Each edge carries a supporting plane through the edge, perpendicular to
/// the polygon, oriented to include the rest of the ring. Construction
/// rejects any ring for which one of these planes fails to include every
/// non-edge vertex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polygon {
    vertices: Vec<Vertex3>,
    normal: Vector3,
    edge_planes: Vec<Plane3>,
}

/// Directed edge `i → i+1` of a polygon ring, borrowed from its polygon.
#[derive(Clone, Copy, Debug)]
pub struct Edge<'a> {
    polygon: &'a Polygon,
    index: usize,
}

impl Edge<'_> {
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn start(&self) -> &Vertex3 {
        &self.polygon.vertices[self.index]
    }

    #[inline]
    pub fn end(&self) -> &Vertex3 {
        self.polygon.vertex_at(self.index + 1)
    }

    /// Vertex after `end`; for a triangle this is the opposite corner.
    #[inline]
    pub fn beyond(&self) -> &Vertex3 {
        self.polygon.vertex_at(self.index + 2)
    }

    pub fn line(&self) -> Line3 {
        Line3::from_two_points(self.start(), self.end())
    }

    #[inline]
    pub fn plane(&self) -> &Plane3 {
        &self.polygon.edge_planes[self.index]
    }
}

impl Polygon {
    /// Validate and build a polygon from its ring.
    ///
    /// Errors: `InvalidGeometry` when the ring has fewer than three vertices,
    /// a degenerate normal, a vertex off the plane, or is not strictly convex.
    pub fn new(vertices: Vec<Vertex3>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(GeomError::invalid("polygon needs at least three vertices"));
        }
        let normal = (&vertices[1] - &vertices[0]).cross(&(&vertices[2] - &vertices[1]));
        if normal.is_zero() {
            return Err(GeomError::invalid("polygon normal is zero"));
        }
        if vertices
            .iter()
            .any(|v| !normal.is_perpendicular_to(&(v - &vertices[0])))
        {
            return Err(GeomError::invalid("polygon vertices are not coplanar"));
        }
        let n = vertices.len();
        let mut edge_planes = Vec::with_capacity(n);
        for i in 0..n {
            let start = &vertices[i];
            let end = &vertices[(i + 1) % n];
            let beyond = &vertices[(i + 2) % n];
            let lifted = start + &normal;
            let plane = Plane3::from_four_points(start, end, &lifted, beyond)
                .map_err(|_| GeomError::invalid("polygon edge is degenerate"))?;
            edge_planes.push(plane);
        }
        let poly = Self {
            vertices,
            normal,
            edge_planes,
        };
        poly.check_convex()?;
        Ok(poly)
    }

    fn check_convex(&self) -> Result<()> {
        let n = self.vertices.len();
        for e in self.edges() {
            let next = (e.index + 1) % n;
            for (i, v) in self.vertices.iter().enumerate() {
                if i == e.index || i == next {
                    continue;
                }
                if !e.plane().includes(v) {
                    return Err(GeomError::invalid("polygon is not strictly convex"));
                }
            }
        }
        Ok(())
    }

    #[inline]
    fn vertex_at(&self, i: usize) -> &Vertex3 {
        &self.vertices[i % self.vertices.len()]
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex3] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false: a valid polygon has at least three vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Supporting plane through the first vertex.
    pub fn plane(&self) -> Plane3 {
        Plane3::new(self.vertices[0].clone(), self.normal.clone())
    }

    pub fn edges(&self) -> impl ExactSizeIterator<Item = Edge<'_>> + '_ {
        (0..self.vertices.len()).map(move |index| Edge {
            polygon: self,
            index,
        })
    }

    /// Same ring in reverse order, so the normal points the other way.
    pub fn flip(&self) -> Result<Self> {
        Self::new(self.vertices.iter().rev().cloned().collect())
    }

    /// `self` or its flip, whichever plane includes `pt`.
    ///
    /// Errors: `Coplanar` when `pt` lies in the polygon's plane.
    pub fn flip_to_include(&self, pt: &Vertex3) -> Result<Self> {
        let plane = self.plane();
        if plane.contains(pt) {
            return Err(GeomError::Coplanar);
        }
        if plane.includes(pt) {
            Ok(self.clone())
        } else {
            self.flip()
        }
    }

    pub fn point_status(&self, pt: &Vertex3) -> PointStatus {
        if !self.plane().contains(pt) {
            return PointStatus::Outside;
        }
        if self.vertices.contains(pt) {
            return PointStatus::OnCorner;
        }
        if self.edge_planes.iter().any(|p| p.excludes(pt)) {
            return PointStatus::Outside;
        }
        for e in self.edges() {
            let line = e.line();
            if !line.contains(pt) {
                continue;
            }
            // Direction is end − start, non-zero for a valid ring.
            let on_segment = line
                .scaled_coordinate_of(pt)
                .map(|t| t >= Rational::zero() && t <= Rational::one())
                .unwrap_or(false);
            return if on_segment {
                PointStatus::OnEdge
            } else {
                PointStatus::Outside
            };
        }
        PointStatus::OnFace
    }

    /// Hull of the polygon and `pt`.
    ///
    /// A coplanar point either changes nothing or replaces the chain of edges
    /// whose planes do not include it by two edges through `pt`. Any other
    /// point promotes the polygon to a polyhedron.
    pub fn add(&self, pt: &Vertex3) -> Result<ConvexHull> {
        if !self.plane().contains(pt) {
            let base = self.flip_to_include(pt)?;
            let solid = Polyhedron::make(vec![Arc::new(base)], pt)?;
            return Ok(ConvexHull::Polyhedron(solid));
        }
        if !self.edge_planes.iter().any(|p| p.excludes(pt)) {
            return Ok(ConvexHull::Polygon(self.clone()));
        }
        let grown = self.splice(pt)?;
        tracing::trace!(from = self.len(), to = grown.len(), "polygon grown");
        Ok(ConvexHull::Polygon(grown))
    }

    // Edges not including `pt` form one cyclic run; its first edge `s` is the
    // one whose predecessor includes `pt`. Found within `n` steps on a convex ring.
    fn splice(&self, pt: &Vertex3) -> Result<Self> {
        let n = self.vertices.len();
        let incl: Vec<bool> = self.edge_planes.iter().map(|p| p.includes(pt)).collect();
        let s = (0..n)
            .find(|&i| !incl[i] && incl[(i + n - 1) % n])
            .ok_or_else(|| GeomError::logic("polygon edge ring has no visible run"))?;
        let f = (1..=n)
            .map(|k| (s + k) % n)
            .find(|&i| incl[i])
            .ok_or_else(|| GeomError::logic("polygon edge ring has no hidden run"))?;
        // Kept edges are f..s (cyclic, exclusive), so kept vertices are f..=s.
        let kept = (s + n - f) % n + 1;
        let mut ring = Vec::with_capacity(kept + 1);
        ring.push(pt.clone());
        ring.extend((0..kept).map(|k| self.vertex_at(f + k).clone()));
        Self::new(ring)
    }
}
