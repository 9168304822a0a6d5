//! Curated internal API (UNSTABLE).
//!
//! Important
//! - Convenience surface for the CLI and benches. Breaking changes are allowed.

// clipping
pub use crate::clip::{
    make_intersection_points, mark_entry_exit_points, return_clipped_polygons, ClipError,
};
// 2D geometry
pub use crate::geom2::{Check, Label, Location, Mismatch, Polygon, Vertex, EPS};
// random polygons
pub use crate::geom2::rand::{
    area_centroid, draw_polygon_radial, draw_polygon_star, RadialCfg, ReplayToken as PolygonReplay,
    VertexCount,
};
// bridge
pub use crate::bridge::{cross_bridge, verify_strategy, Bank, Crossing, StrategyError};
// checks
pub use crate::verify::{match_polygon_sets, Case, Outcome, SetMismatch};
