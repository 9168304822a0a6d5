//! Stage 2: entry/exit labels along both augmented boundaries.

use tracing::debug;

use super::insert::{insert, Sides};
use super::ClipError;
use crate::geom2::{Label, Polygon};

/// Insert crossings (stage 1) and label every crossing vertex.
///
/// Each boundary is labelled relative to the *other* polygon: a crossing is
/// `Entry` if the boundary arrives from outside the other polygon and leaves
/// into it, `Exit` for the converse. Stretches running along the other
/// boundary are skipped when looking for the side, so shared collinear edges
/// get the label of the nearest sub-edge off the boundary. Linked pairs agree
/// exactly when the two polygons have opposite orientations.
///
/// Polygons without crossings are returned unlabelled. Labels that fail to
/// alternate along a boundary (self-intersecting input) are an error.
pub fn mark_entry_exit_points(
    source: &Polygon,
    clip: &Polygon,
) -> Result<(Polygon, Polygon), ClipError> {
    let ins = insert(source, clip);
    let (mut src, mut clp) = (ins.src, ins.clp);
    let count = src.intersection_count();
    if count == 0 {
        return Ok((src, clp));
    }
    if count % 2 != 0 || clp.intersection_count() != count {
        return Err(ClipError::BrokenAlternation { count });
    }
    label_boundary(&mut src, &ins.src_sides)?;
    label_boundary(&mut clp, &ins.clp_sides)?;
    debug!(crossings = count, "entry/exit points");
    Ok((src, clp))
}

fn label_boundary(poly: &mut Polygon, sides: &[Option<Sides>]) -> Result<(), ClipError> {
    let count = poly.intersection_count();
    let mut last: Option<Label> = None;
    for (v, sd) in poly.vertices.iter_mut().zip(sides.iter().copied()) {
        if !v.is_intersection() {
            continue;
        }
        let label = sd
            .and_then(Sides::label)
            .ok_or(ClipError::Unclassified { x: v.x(), y: v.y() })?;
        // an even count that alternates in order also alternates cyclically
        if last == Some(label) {
            return Err(ClipError::BrokenAlternation { count });
        }
        v.label = Some(label);
        last = Some(label);
    }
    Ok(())
}
