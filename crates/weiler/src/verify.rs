//! Result checks for clipper and bridge outputs.
//!
//! - `match_polygon_sets`: order-independent comparison of region lists.
//! - `Case`: run one operation and one verification closure, timed.
//!
//! Polygon-level comparison lives on `Polygon::same_as`; strategy replay lives
//! in `bridge::verify_strategy`.

use std::fmt;
use std::time::{Duration, Instant};

use crate::geom2::{Check, Polygon};

/// Why two lists of polygons differ as multisets.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetMismatch {
    #[error("number of polygons in result is wrong: {actual} (expected: {expected})")]
    Count { expected: usize, actual: usize },
    #[error(
        "{} polygon(s) in the result are not expected: {}; {} expected polygon(s) are missing: {}",
        extra.len(),
        extra.join(" "),
        missing.len(),
        missing.join(" ")
    )]
    Unmatched {
        extra: Vec<String>,
        missing: Vec<String>,
    },
}

/// Match `actual` against `expected` up to order, rotation and direction.
///
/// Matching is greedy: each expected polygon claims the first unclaimed
/// result that is the same polygon.
pub fn match_polygon_sets(expected: &[Polygon], actual: &[Polygon]) -> Result<(), SetMismatch> {
    if expected.len() != actual.len() {
        return Err(SetMismatch::Count {
            expected: expected.len(),
            actual: actual.len(),
        });
    }
    let mut claimed = vec![false; actual.len()];
    let mut missing = Vec::new();
    for e in expected {
        let hit = (0..actual.len())
            .find(|&j| !claimed[j] && e.same_as(&actual[j], Check::Coordinates).is_ok());
        match hit {
            Some(j) => claimed[j] = true,
            None => missing.push(e.to_string()),
        }
    }
    if missing.is_empty() {
        return Ok(());
    }
    let extra = actual
        .iter()
        .zip(&claimed)
        .filter(|(_, c)| !**c)
        .map(|(p, _)| p.to_string())
        .collect();
    Err(SetMismatch::Unmatched { extra, missing })
}

/// A named check: one operation and the verification of its output.
#[derive(Clone, Debug)]
pub struct Case {
    pub name: String,
}

/// Outcome of one `Case::run`.
#[derive(Clone, Debug)]
pub struct Outcome {
    pub name: String,
    pub elapsed: Duration,
    pub result: Result<(), String>,
}

impl Outcome {
    #[inline]
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(()) => write!(f, "{}: OK, {:.2?}", self.name, self.elapsed),
            Err(msg) => write!(f, "{}: X  {}", self.name, msg),
        }
    }
}

impl Case {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Time `perform`, then check its output with `verify`.
    pub fn run<T, E, P, V>(self, perform: P, verify: V) -> Outcome
    where
        P: FnOnce() -> T,
        V: FnOnce(&T) -> Result<(), E>,
        E: fmt::Display,
    {
        let t0 = Instant::now();
        let out = perform();
        let elapsed = t0.elapsed();
        let result = verify(&out).map_err(|e| e.to_string());
        Outcome {
            name: self.name,
            elapsed,
            result,
        }
    }
}
