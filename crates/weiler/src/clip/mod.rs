//! Weiler–Atherton clipping: insert crossings, mark entry/exit, traverse.
//!
//! Purpose
//! - Intersect a `source` polygon with a `clip` polygon and return the
//!   region(s) of the intersection as independent vertex polygons.
//!
//! Stages (each runs the previous one on the raw inputs)
//! 1. `make_intersection_points`: splice every boundary crossing into both
//!    polygons, in edge order, and link the two copies by index.
//! 2. `mark_entry_exit_points`: label crossings `Entry`/`Exit` along each
//!    boundary, relative to the other polygon; labels alternate strictly.
//! 3. `return_clipped_polygons`: walk inside segments, switching polygons at
//!    every crossing; the label at the switch vertex picks the direction.
//!
//! Degeneracies
//! - Points that coincide with an existing vertex reuse it.
//! - Only genuine crossings are linked; touches are left unlinked and, if
//!   they are not original vertices, dropped again.
//! - A shared collinear stretch is one crossing, placed at its end in source
//!   order, when the source boundary leaves on the other side from where it
//!   arrived; otherwise it is a touch. Sides are judged by the nearest
//!   sub-edge off the other boundary.
//! - `ClipError` is reserved for input that is not a pair of simple
//!   polygons, e.g. a self-intersecting boundary.

mod classify;
mod insert;
mod traverse;

pub use classify::mark_entry_exit_points;
pub use insert::make_intersection_points;
pub use traverse::return_clipped_polygons;

/// Contract violations detected while classifying or traversing.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ClipError {
    /// Crossings along a closed boundary must come in entry/exit pairs.
    #[error("boundary crossings ({count}) do not alternate between entry and exit")]
    BrokenAlternation { count: usize },
    /// A linked vertex where the boundary stays on one side of the other.
    #[error("boundary does not change sides at ({x}, {y})")]
    Unclassified { x: f64, y: f64 },
    /// A traversal did not return to its start vertex.
    #[error("traversal starting at source vertex {start} did not close")]
    Unclosed { start: usize },
}
