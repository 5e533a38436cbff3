//! Exact 3D primitives: vectors, vertices, lines, planes, intersections.
//!
//! Purpose
//! - Supply the exact predicates the hull engine is built from: parallelism,
//!   coplanarity and, above all, the half-space test of `Plane3`.
//!
//! Assumptions and conventions
//! - `Line3::direction` and `Plane3::normal` are non-zero. This is the
//!   caller's precondition and is not checked on construction; operations
//!   that divide by their squared length report `DivideByZero` if it is broken.
//! - Half-space convention: a plane *includes* a point when the signed scaled
//!   distance is strictly negative and *excludes* it when strictly positive.
//!   Zero means the point lies in the plane. Normals therefore point "out".
//!
//! Code cross-refs: `types::{Vector3, Vertex3}`, `line::Line3`, `plane::Plane3`,
//! `intersect::{Intersect, interpolate, interpolate_vertex}`.

mod intersect;
mod line;
mod plane;
mod types;

pub use intersect::{interpolate, interpolate_vertex, Intersect};
pub use line::Line3;
pub use plane::Plane3;
pub use types::{Vector3, Vertex3};
