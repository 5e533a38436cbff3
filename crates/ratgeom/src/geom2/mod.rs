//! Exact 2D vectors and vertices.
//!
//! `Vector2` is a displacement, `Vertex2` an affine point. The type split
//! enforces the usual affine rules: vertex − vertex is a vector, vertex ±
//! vector is a vertex, and there is no vertex + vertex.

mod types;

pub use types::{Vector2, Vertex2};

#[cfg(test)]
mod tests;
