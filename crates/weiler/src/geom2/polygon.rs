//! Vertex polygons (ordered, cyclic boundary).
//!
//! Invariants (established by `Polygon::new`, assumed elsewhere):
//! - No two consecutive vertices coincide, including the closing pair.
//! - The closing edge (last → first) is implicit.
//!
//! Clipper stages build their outputs directly through the `vertices` field so
//! that `link` indices stay valid; `new` may drop vertices and must only be
//! used on fresh, unlinked vertices.

use std::fmt;

use nalgebra::Vector2;

use super::types::{Check, Label, Location, Mismatch, Vertex};
use super::util::{convex_hull, on_segment};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Vertex>,
}

impl Polygon {
    /// Build from vertices, dropping consecutive duplicates and a repeated
    /// closing vertex.
    pub fn new(vertices: Vec<Vertex>) -> Self {
        let mut out: Vec<Vertex> = Vec::with_capacity(vertices.len());
        for v in vertices {
            if out.last().is_some_and(|last| last.coincides(&v)) {
                continue;
            }
            out.push(v);
        }
        while out.len() > 1 && out[0].coincides(&out[out.len() - 1]) {
            out.pop();
        }
        Self { vertices: out }
    }

    pub fn from_points(points: &[(f64, f64)]) -> Self {
        Self::new(points.iter().map(|&(x, y)| Vertex::new(x, y)).collect())
    }

    /// Convex hull of `points` in CCW order; `None` for fewer than 3 hull vertices.
    pub fn convex_hull(points: &[Vector2<f64>]) -> Option<Self> {
        let hull = convex_hull(points)?;
        Some(Self::new(hull.into_iter().map(Vertex::at).collect()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn points(&self) -> impl Iterator<Item = Vector2<f64>> + '_ {
        self.vertices.iter().map(|v| v.p)
    }

    /// Edge `i` as `(start, end)`; edge `len-1` is the closing edge.
    #[inline]
    pub fn edge(&self, i: usize) -> (Vector2<f64>, Vector2<f64>) {
        let n = self.vertices.len();
        (self.vertices[i].p, self.vertices[(i + 1) % n].p)
    }

    /// Shoelace signed area; positive for counterclockwise boundaries.
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }
        let mut a = 0.0;
        for i in 0..n {
            let (p, q) = self.edge(i);
            a += p.x * q.y - q.x * p.y;
        }
        0.5 * a
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    #[inline]
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Number of vertices linked to the other polygon of a clipping pair.
    pub fn intersection_count(&self) -> usize {
        self.vertices.iter().filter(|v| v.is_intersection()).count()
    }

    /// Count of vertices carrying `label`.
    pub fn label_count(&self, label: Label) -> usize {
        self.vertices
            .iter()
            .filter(|v| v.label == Some(label))
            .count()
    }

    /// Copy with labels and links cleared.
    pub fn plain(&self) -> Self {
        Self {
            vertices: self.vertices.iter().map(Vertex::plain).collect(),
        }
    }

    /// Opposite traversal order; labels are kept, links are dropped.
    pub fn reversed(&self) -> Self {
        Self {
            vertices: self
                .vertices
                .iter()
                .rev()
                .map(|v| Vertex { link: None, ..*v })
                .collect(),
        }
    }

    pub fn translated(&self, t: Vector2<f64>) -> Self {
        Self {
            vertices: self
                .vertices
                .iter()
                .map(|v| Vertex { p: v.p + t, ..*v })
                .collect(),
        }
    }

    /// Even-odd point location; points within `EPS` of an edge are `Boundary`.
    pub fn locate(&self, p: Vector2<f64>) -> Location {
        let n = self.vertices.len();
        let mut inside = false;
        for i in 0..n {
            let (a, b) = self.edge(i);
            if on_segment(p, a, b) {
                return Location::Boundary;
            }
            if (a.y > p.y) != (b.y > p.y) {
                let x = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if p.x < x {
                    inside = !inside;
                }
            }
        }
        if inside {
            Location::Inside
        } else {
            Location::Outside
        }
    }

    /// "Same polygon" test: `other` must be a cyclic rotation of `self`, read
    /// in either direction. With `Check::Classified` the labels must match too.
    ///
    /// `self` plays the expected side in the error message.
    pub fn same_as(&self, other: &Polygon, check: Check) -> Result<(), Mismatch> {
        let n = self.len();
        if n != other.len() {
            return Err(Mismatch::Length {
                expected: n,
                actual: other.len(),
            });
        }
        let mut shape_matched = false;
        for shift in 0..n {
            for reverse in [false, true] {
                let at = |i: usize| {
                    if reverse {
                        (shift + n - i) % n
                    } else {
                        (shift + i) % n
                    }
                };
                let coords = (0..n).all(|i| self.vertices[i].coincides(&other.vertices[at(i)]));
                if !coords {
                    continue;
                }
                let labels = check == Check::Coordinates
                    || (0..n).all(|i| self.vertices[i].label == other.vertices[at(i)].label);
                if labels {
                    return Ok(());
                }
                shape_matched = true;
            }
        }
        if n == 0 {
            return Ok(());
        }
        let expected = self.to_string();
        let actual = other.to_string();
        Err(if shape_matched {
            Mismatch::Labels { expected, actual }
        } else {
            Mismatch::Vertices { expected, actual }
        })
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

impl From<Vec<Vertex>> for Polygon {
    fn from(vertices: Vec<Vertex>) -> Self {
        Self::new(vertices)
    }
}
