//! Stage 3: walk the labelled boundaries and emit the clipped regions.

use tracing::{debug, trace};

use super::{mark_entry_exit_points, ClipError};
use crate::geom2::{Label, Location, Polygon, Vertex};

/// Walking direction along a boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Inside segments run forward from an entry and backward from an exit.
    #[inline]
    fn leaving(label: Label) -> Self {
        if label.is_entry() {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    #[inline]
    fn step(self, i: usize, n: usize) -> usize {
        match self {
            Direction::Forward => (i + 1) % n,
            Direction::Backward => (i + n - 1) % n,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Source,
    Clip,
}

/// Intersection of `source` and `clip` as a list of independent polygons.
///
/// - No crossings: the contained polygon (if any) is returned as a copy,
///   disjoint inputs give an empty list.
/// - Otherwise one polygon per connected region, in unspecified order and
///   orientation.
pub fn return_clipped_polygons(source: &Polygon, clip: &Polygon) -> Result<Vec<Polygon>, ClipError> {
    if source.len() < 3 || clip.len() < 3 {
        return Ok(Vec::new());
    }
    let (src, clp) = mark_entry_exit_points(source, clip)?;
    if src.intersection_count() == 0 {
        return Ok(nested(&src, &clp));
    }

    let mut visited = vec![false; src.len()];
    let mut regions = Vec::new();
    while let Some(start) = (0..src.len())
        .find(|&i| !visited[i] && src.vertices[i].label == Some(Label::Entry))
    {
        let region = trace_region(&src, &clp, start, &mut visited)?;
        trace!(start, vertices = region.len(), "region closed");
        regions.push(region);
    }
    debug!(regions = regions.len(), "clipped polygons");
    Ok(regions)
}

/// Follow inside segments from source entry `start` until the walk closes.
fn trace_region(
    src: &Polygon,
    clp: &Polygon,
    start: usize,
    visited: &mut [bool],
) -> Result<Polygon, ClipError> {
    let unclosed = ClipError::Unclosed { start };
    let budget = src.len() + clp.len();
    let mut out: Vec<Vertex> = Vec::new();
    let mut side = Side::Source;
    let mut cur = start;
    loop {
        let poly = match side {
            Side::Source => src,
            Side::Clip => clp,
        };
        let n = poly.len();
        let v = poly.vertices[cur];
        let src_index = match side {
            Side::Source => cur,
            Side::Clip => v.link.ok_or_else(|| unclosed.clone())?,
        };
        visited[src_index] = true;
        out.push(v.plain());

        let dir = Direction::leaving(v.label.ok_or_else(|| unclosed.clone())?);
        let mut i = dir.step(cur, n);
        while !poly.vertices[i].is_intersection() {
            out.push(poly.vertices[i].plain());
            if out.len() > budget {
                return Err(unclosed);
            }
            i = dir.step(i, n);
        }
        let link = poly.vertices[i].link.ok_or_else(|| unclosed.clone())?;
        let closed = match side {
            Side::Source => i == start,
            Side::Clip => link == start,
        };
        if closed {
            break;
        }
        if out.len() > budget {
            return Err(unclosed);
        }
        side = match side {
            Side::Source => Side::Clip,
            Side::Clip => Side::Source,
        };
        cur = link;
    }
    Ok(Polygon::new(out))
}

/// Result when the boundaries never cross.
fn nested(src: &Polygon, clp: &Polygon) -> Vec<Polygon> {
    match side_of(src, clp) {
        // every test point on the clip boundary: the polygons coincide
        None | Some(Location::Inside) => return vec![src.plain()],
        _ => {}
    }
    if side_of(clp, src) == Some(Location::Inside) {
        vec![clp.plain()]
    } else {
        Vec::new()
    }
}

/// Location of `a` relative to `b`, judged at the first vertex or edge
/// midpoint of `a` that is not on the boundary of `b`.
fn side_of(a: &Polygon, b: &Polygon) -> Option<Location> {
    let vertices = a.points();
    let midpoints = (0..a.len()).map(|i| {
        let (p, q) = a.edge(i);
        (p + q) * 0.5
    });
    vertices
        .chain(midpoints)
        .map(|p| b.locate(p))
        .find(|loc| *loc != Location::Boundary)
}
