//! 2D vertex geometry for clipping.
//!
//! Purpose
//! - Provide the vertex polygon (`Polygon`) consumed and produced by the
//!   clipper stages, plus the predicates they share: segment intersection,
//!   even-odd point location, and orientation-agnostic comparison.
//!
//! Conventions
//! - One absolute tolerance (`EPS`) for every predicate.
//! - Point location uses the even-odd rule with an explicit boundary test
//!   first; self-intersecting inputs are not supported.
//!
//! Code cross-refs: `clip::{make_intersection_points, mark_entry_exit_points,
//! return_clipped_polygons}`.

mod cfg;
mod polygon;
pub mod rand;
mod types;
pub(crate) mod util;

pub use cfg::EPS;
pub use polygon::Polygon;
pub use types::{Check, Label, Location, Mismatch, Vertex};
pub(crate) use types::coincide;

#[cfg(test)]
mod tests;
