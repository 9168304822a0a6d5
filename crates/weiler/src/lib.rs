//! Polygon clipping (Weiler–Atherton) and the bridge-crossing schedule.
//!
//! Layout
//! - `geom2`: vertices, polygons, point location, exact comparison, sampler.
//! - `clip`: the three clipper stages (insert, classify, traverse).
//! - `bridge`: minimum-time bridge crossing with a replayable schedule.
//! - `verify`: order-free region matching and a timed case runner.
//!
//! API Policy
//! - Internal crate; the CLI is the only consumer. Breaking changes are fine
//!   when they improve clarity.

pub mod api;
pub mod bridge;
pub mod clip;
pub mod geom2;
pub mod verify;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use clip::ClipError;
pub use geom2::{Label, Polygon, Vertex};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::clip::{
        make_intersection_points, mark_entry_exit_points, return_clipped_polygons, ClipError,
    };
    pub use crate::geom2::{Check, Label, Location, Polygon, Vertex, EPS};
    pub use nalgebra::Vector2 as Vec2;
}
