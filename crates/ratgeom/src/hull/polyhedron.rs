//! Closed convex polyhedra and the silhouette rebuild used by `add`.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::error::{GeomError, Result};
use crate::geom3::{Plane3, Vertex3};

use super::dual_set::DualIndexedSet;
use super::polygon::Polygon;
use super::PointStatus;

/// Ordered vertex pair `(start, end)`.
pub type DirectedEdge = (Vertex3, Vertex3);

type EdgeSet = DualIndexedSet<DirectedEdge, fn(&DirectedEdge) -> DirectedEdge>;

fn reverse(e: &DirectedEdge) -> DirectedEdge {
    (e.1.clone(), e.0.clone())
}

/// Index every directed edge of `faces`; the map goes from signed edge index
/// to the face that traverses it.
///
/// Errors: `InvalidGeometry` when two faces traverse an edge the same way.
fn index_edges(faces: &[Arc<Polygon>]) -> Result<(EdgeSet, HashMap<isize, usize>)> {
    let mut set: EdgeSet = DualIndexedSet::new(reverse);
    let mut edge_to_face = HashMap::new();
    for (fi, face) in faces.iter().enumerate() {
        for e in face.edges() {
            let (idx, _) = set.ensure_added((e.start().clone(), e.end().clone()));
            if edge_to_face.insert(idx, fi).is_some() {
                return Err(GeomError::invalid(
                    "edge traversed in the same direction by two faces",
                ));
            }
        }
    }
    Ok((set, edge_to_face))
}

/// Closed convex polyhedron as a list of outward-oriented faces.
///
/// Faces are shared behind `Arc`, so a rebuild that keeps most faces only
/// allocates the new ones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polyhedron {
    faces: Vec<Arc<Polygon>>,
}

impl Polyhedron {
    /// Validate and build from faces.
    ///
    /// Errors: `InvalidGeometry` for a duplicated directed edge, two faces in
    /// the same plane, a face whose plane excludes another face's vertex, or
    /// an edge used in only one direction.
    pub fn new(faces: Vec<Polygon>) -> Result<Self> {
        Self::from_shared(faces.into_iter().map(Arc::new).collect())
    }

    fn from_shared(faces: Vec<Arc<Polygon>>) -> Result<Self> {
        let solid = Self { faces };
        solid.check_integrity()?;
        Ok(solid)
    }

    fn check_integrity(&self) -> Result<()> {
        let (edges, edge_to_face) = index_edges(&self.faces)?;
        let planes: Vec<Plane3> = self.faces.iter().map(|f| f.plane()).collect();
        for (i, pi) in planes.iter().enumerate() {
            for (j, fj) in self.faces.iter().enumerate() {
                if i == j {
                    continue;
                }
                if pi.is_coincident_with(&planes[j]) {
                    return Err(GeomError::invalid("two faces share a plane"));
                }
                if fj.vertices().iter().any(|v| pi.excludes(v)) {
                    return Err(GeomError::invalid("a face plane cuts another face"));
                }
            }
        }
        for slot in 0..edges.len() as isize {
            if !edge_to_face.contains_key(&slot) || !edge_to_face.contains_key(&!slot) {
                return Err(GeomError::invalid("loose edge"));
            }
        }
        Ok(())
    }

    #[inline]
    pub fn faces(&self) -> &[Arc<Polygon>] {
        &self.faces
    }

    /// Distinct vertices in order of first appearance.
    pub fn vertices(&self) -> Vec<Vertex3> {
        let mut seen = HashSet::new();
        self.faces
            .iter()
            .flat_map(|f| f.vertices().iter())
            .filter(|v| seen.insert(*v))
            .cloned()
            .collect()
    }

    /// Undirected edge count; each one is traversed once per direction.
    pub fn edge_count(&self) -> usize {
        self.faces.iter().map(|f| f.len()).sum::<usize>() / 2
    }

    pub fn point_status(&self, pt: &Vertex3) -> PointStatus {
        if self.faces.iter().any(|f| f.plane().excludes(pt)) {
            return PointStatus::Outside;
        }
        self.faces
            .iter()
            .map(|f| f.point_status(pt))
            .find(|s| *s != PointStatus::Outside)
            .unwrap_or(PointStatus::Inside)
    }

    /// Hull of `self` and `pt`; unchanged unless `pt` is outside.
    pub fn add(&self, pt: &Vertex3) -> Result<Self> {
        if self.point_status(pt) != PointStatus::Outside {
            return Ok(self.clone());
        }
        let kept: Vec<Arc<Polygon>> = self
            .faces
            .iter()
            .filter(|f| f.plane().includes(pt))
            .cloned()
            .collect();
        tracing::trace!(
            dropped = self.faces.len() - kept.len(),
            kept = kept.len(),
            "polyhedron sees point"
        );
        Self::make(kept, pt)
    }

    /// Close `faces_away` with a cap of new faces meeting at `v`.
    ///
    /// Every face in `faces_away` must include `v`. The boundary of the face
    /// set (edges whose reverse no face traverses) is walked into a single
    /// loop, and each maximal run of loop edges coplanar with `v` becomes
    /// one new face.
    pub(crate) fn make(faces_away: Vec<Arc<Polygon>>, v: &Vertex3) -> Result<Self> {
        if faces_away.iter().any(|f| !f.plane().includes(v)) {
            return Err(GeomError::invalid("retained faces must face away from the new point"));
        }
        let (edges, edge_to_face) = index_edges(&faces_away)?;

        // Loose edges: orientations of stored slots that no face traverses.
        let mut loose: Vec<DirectedEdge> = Vec::new();
        let mut by_start: HashMap<Vertex3, usize> = HashMap::new();
        for slot in 0..edges.len() as isize {
            for idx in [slot, !slot] {
                if edge_to_face.contains_key(&idx) {
                    continue;
                }
                let edge = edges
                    .get(idx)
                    .ok_or_else(|| GeomError::logic("edge slot out of range"))?;
                if by_start.insert(edge.0.clone(), loose.len()).is_some() {
                    return Err(GeomError::logic("two loose edges share a start vertex"));
                }
                loose.push(edge);
            }
        }
        if loose.is_empty() {
            return Err(GeomError::logic("no loose edges to close"));
        }

        let mut ring = walk_loop(&loose, &by_start)?;
        rotate_off_seam(&mut ring, &loose, v)?;

        let mut faces: Vec<Arc<Polygon>> = Vec::with_capacity(ring.len() + faces_away.len());
        let mut corners: Vec<Vertex3> = Vec::new();
        let mut last: Option<usize> = None;
        for &e in &ring {
            if let Some(prev) = last {
                if !same_plane(&loose[prev], &loose[e], v)? {
                    corners.push(loose[prev].1.clone());
                    corners.push(v.clone());
                    faces.push(Arc::new(Polygon::new(std::mem::take(&mut corners))?));
                }
            }
            corners.push(loose[e].0.clone());
            last = Some(e);
        }
        if let Some(prev) = last {
            corners.push(loose[prev].1.clone());
            corners.push(v.clone());
            faces.push(Arc::new(Polygon::new(corners)?));
        }
        let created = faces.len();
        faces.extend(faces_away);
        let solid = Self::from_shared(faces)?;
        tracing::debug!(
            created,
            faces = solid.faces.len(),
            edges = solid.edge_count(),
            loop_len = ring.len(),
            "polyhedron rebuilt"
        );
        Ok(solid)
    }
}

/// Follow loose edges end-to-start from the first one. The walk must close
/// after visiting every loose edge exactly once.
fn walk_loop(loose: &[DirectedEdge], by_start: &HashMap<Vertex3, usize>) -> Result<Vec<usize>> {
    let mut ring = vec![0usize];
    for _ in 0..loose.len() {
        let end = &loose[ring[ring.len() - 1]].1;
        let next = *by_start
            .get(end)
            .ok_or_else(|| GeomError::logic("loose edges do not chain"))?;
        if next == ring[0] {
            if ring.len() != loose.len() {
                return Err(GeomError::logic("loose edges form more than one loop"));
            }
            return Ok(ring);
        }
        ring.push(next);
    }
    Err(GeomError::logic("loose edge walk did not close"))
}

/// Rotate `ring` until its first and last edges are not coplanar with `v`,
/// so no coplanar run spans the seam.
fn rotate_off_seam(ring: &mut [usize], loose: &[DirectedEdge], v: &Vertex3) -> Result<()> {
    for _ in 0..ring.len() {
        if !same_plane(&loose[ring[0]], &loose[ring[ring.len() - 1]], v)? {
            return Ok(());
        }
        ring.rotate_left(1);
    }
    Err(GeomError::logic("every loose edge is coplanar with the new point"))
}

/// True iff `b` lies in the plane through `a` and `v`.
fn same_plane(a: &DirectedEdge, b: &DirectedEdge, v: &Vertex3) -> Result<bool> {
    let p = Plane3::from_three_points(&a.0, &a.1, v)?;
    Ok(p.contains(&b.0) && p.contains(&b.1))
}
