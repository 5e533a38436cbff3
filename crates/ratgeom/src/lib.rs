//! Exact 3D computational geometry over arbitrary-precision rationals.
//!
//! Layers, leaves first:
//! - `rational`: reduced big rationals, rounding, bit-exact IEEE-754 conversion.
//! - `geom2`, `geom3`: vectors (displacements) and vertices (affine points),
//!   lines, planes and their pairwise intersections.
//! - `hull`: the incremental convex hull (point → segment → polygon → polyhedron).
//!
//! Conventions
//! - Every predicate is exact; there are no tolerances anywhere in the crate.
//!   Floating-point values only appear at the conversion boundary
//!   (`Rational::to_f64`, `Vertex3::to_point`, ...).
//! - All values are immutable; operations return new values. Hulls are
//!   `Send + Sync` and may be shared read-only across threads.
//! - Operand magnitudes grow with use (repeated hull insertions compose exact
//!   plane computations). Callers that need bounded cost should bound their
//!   inputs.

#[macro_use]
mod macros;

pub mod error;
pub mod geom2;
pub mod geom3;
pub mod hull;
pub mod rational;

pub use error::{GeomError, IntersectionFailed, Result};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{GeomError, IntersectionFailed, Result};
    pub use crate::geom2::{Vector2, Vertex2};
    pub use crate::geom3::{Intersect, Line3, Plane3, Vector3, Vertex3};
    pub use crate::hull::{ConvexHull, PointStatus, Polygon, Polyhedron};
    pub use crate::rational::{ConvertCfg, FloatOverflow, OverflowPolicy, Rational, RoundingMode};
}
