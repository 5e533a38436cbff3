//! Crate-wide error type.
//!
//! All failures are fail-fast: the operation that detects one aborts and
//! nothing is downgraded or retried internally.

use thiserror::Error;

/// Why an intersection of two lines/planes has no single answer.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum IntersectionFailed {
    #[error("the operands coincide")]
    Coincident,
    #[error("the operands are parallel and distinct")]
    Parallel,
    #[error("the lines are skew")]
    Skew,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GeomError {
    /// A rational was formed with a zero denominator.
    #[error("denominator of a rational number cannot be zero")]
    DivideByZero,

    /// Fixed-width integer or float conversion out of range under an erroring policy.
    #[error("value does not fit the target representation")]
    Overflow,

    /// Infinity or NaN bit pattern; has no exact rational value.
    #[error("floating-point value is not representable as a rational")]
    NotRepresentable,

    #[error("points are colinear")]
    Colinear,

    #[error("point lies in the plane")]
    Coplanar,

    /// A polygon or polyhedron failed its construction-time integrity check.
    #[error("invalid geometry: {reason}")]
    InvalidGeometry { reason: &'static str },

    /// An internal step bound was exhausted. Indicates a bug, not bad input.
    #[error("internal logic error: {reason}")]
    Logic { reason: &'static str },

    #[error("intersection failed: {0}")]
    Intersection(#[from] IntersectionFailed),
}

impl GeomError {
    pub(crate) fn invalid(reason: &'static str) -> Self {
        Self::InvalidGeometry { reason }
    }

    pub(crate) fn logic(reason: &'static str) -> Self {
        tracing::error!(reason, "hull step bound exhausted");
        Self::Logic { reason }
    }
}

pub type Result<T> = std::result::Result<T, GeomError>;
