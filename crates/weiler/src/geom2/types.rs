//! Vertex-level types shared by polygons and the clipper stages.
//!
//! - `Vertex`: point plus optional entry/exit label and cross-polygon link.
//! - `Label`, `Location`, `Check`: small enums used by predicates and comparisons.
//! - `Mismatch`: descriptive failure of a polygon comparison.

use std::fmt;

use nalgebra::Vector2;

use super::cfg::EPS;

/// Entry/exit classification of an intersection vertex.
///
/// `Entry` means the boundary carrying the vertex passes from outside to
/// inside the *other* polygon at this point; `Exit` is the converse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    Entry,
    Exit,
}

impl Label {
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Label::Entry => Label::Exit,
            Label::Exit => Label::Entry,
        }
    }

    #[inline]
    pub fn is_entry(self) -> bool {
        matches!(self, Label::Entry)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Entry => write!(f, "entry"),
            Label::Exit => write!(f, "exit"),
        }
    }
}

/// Polygon vertex.
///
/// `link` is the index of the counterpart vertex in the *other* polygon of a
/// clipping pair. It is only meaningful for the pair of polygons returned
/// together by one clipper stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub p: Vector2<f64>,
    pub label: Option<Label>,
    pub link: Option<usize>,
}

impl Vertex {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self::at(Vector2::new(x, y))
    }

    #[inline]
    pub fn labelled(x: f64, y: f64, label: Label) -> Self {
        Self {
            label: Some(label),
            ..Self::new(x, y)
        }
    }

    #[inline]
    pub fn at(p: Vector2<f64>) -> Self {
        Self {
            p,
            label: None,
            link: None,
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.p.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.p.y
    }

    /// True for vertices spliced in (or reused) as a boundary crossing.
    #[inline]
    pub fn is_intersection(&self) -> bool {
        self.link.is_some()
    }

    /// Coordinate equality within `EPS`; labels and links are ignored.
    #[inline]
    pub fn coincides(&self, other: &Vertex) -> bool {
        coincide(self.p, other.p)
    }

    /// Same coordinates, no label, no link.
    #[inline]
    pub fn plain(&self) -> Self {
        Self::at(self.p)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label {
            Some(label) => write!(f, "({}, {} {})", self.p.x, self.p.y, label),
            None => write!(f, "({}, {})", self.p.x, self.p.y),
        }
    }
}

#[inline]
pub(crate) fn coincide(a: Vector2<f64>, b: Vector2<f64>) -> bool {
    (a.x - b.x).abs() <= EPS && (a.y - b.y).abs() <= EPS
}

/// Where a point lies relative to a closed polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    Inside,
    Outside,
    Boundary,
}

/// What participates in a polygon comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Check {
    /// Coordinates only.
    Coordinates,
    /// Coordinates and entry/exit labels.
    Classified,
}

/// Why two polygons are not the same.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Mismatch {
    #[error("vertex count is {actual} (expected: {expected})")]
    Length { expected: usize, actual: usize },
    #[error("vertices match but entry/exit labels differ: {actual} (expected: {expected})")]
    Labels { expected: String, actual: String },
    #[error("{actual} is not a rotation of {expected}")]
    Vertices { expected: String, actual: String },
}
