//! Tolerance defaults for 2D vertex geometry (internal).
//!
//! Policy
//! - One fixed absolute tolerance for every predicate (coincidence, on-segment,
//!   edge parameters). Inputs are expected at O(1)..O(1e3) scales; callers
//!   with extreme scalings should rescale first.

/// Coordinate / parameter tolerance shared by all 2D predicates.
pub const EPS: f64 = 1e-9;
