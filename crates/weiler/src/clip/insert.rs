//! Stage 1: splice boundary crossings into both polygons.

use nalgebra::Vector2;
use tracing::debug;

use crate::geom2::util::segment_hits;
use crate::geom2::{coincide, Label, Location, Polygon, Vertex};

/// Compute all boundary crossings of `source` and `clip` and return both
/// polygons with the crossings spliced in.
///
/// - Crossings on one edge are ordered by distance from the edge start.
/// - A crossing that coincides with an existing vertex reuses it.
/// - Each crossing vertex links (`Vertex::link`) to its copy in the other
///   returned polygon. Labels are left unset.
/// - Where the boundaries share a collinear stretch, the stretch counts as one
///   crossing if the source boundary changes sides across it; the crossing is
///   placed at the end of the stretch in source order.
/// - Fewer than 3 vertices on either side, or no crossing at all, returns
///   unchanged copies (stale labels and links from earlier runs are cleared).
///
/// Running the function on its own output adds no vertices.
pub fn make_intersection_points(source: &Polygon, clip: &Polygon) -> (Polygon, Polygon) {
    let ins = insert(source, clip);
    (ins.src, ins.clp)
}

/// Side of the other polygon on which a boundary runs just before and just
/// after a vertex. Stretches along the other boundary are skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct Sides {
    pub before: Location,
    pub after: Location,
}

impl Sides {
    /// `Entry` for outside to inside, `Exit` for the converse.
    pub fn label(self) -> Option<Label> {
        match (self.before, self.after) {
            (Location::Outside, Location::Inside) => Some(Label::Entry),
            (Location::Inside, Location::Outside) => Some(Label::Exit),
            _ => None,
        }
    }
}

/// Augmented pair plus the sides seen at every linked vertex (`None` for
/// vertices without a link).
pub(super) struct Insertion {
    pub src: Polygon,
    pub clp: Polygon,
    pub src_sides: Vec<Option<Sides>>,
    pub clp_sides: Vec<Option<Sides>>,
}

impl Insertion {
    fn unchanged(source: &Polygon, clip: &Polygon) -> Self {
        Self {
            src: source.plain(),
            clp: clip.plain(),
            src_sides: vec![None; source.len()],
            clp_sides: vec![None; clip.len()],
        }
    }
}

pub(super) fn insert(source: &Polygon, clip: &Polygon) -> Insertion {
    if source.len() < 3 || clip.len() < 3 {
        return Insertion::unchanged(source, clip);
    }

    let mut points: Vec<Vector2<f64>> = Vec::new();
    let mut src_cuts = Cuts::new(source.len());
    let mut clip_cuts = Cuts::new(clip.len());
    for i in 0..source.len() {
        let (a, b) = source.edge(i);
        for j in 0..clip.len() {
            let (c, d) = clip.edge(j);
            for hit in segment_hits(a, b, c, d) {
                let id = register(&mut points, hit.p);
                src_cuts.record(source, i, hit.t, id, points[id]);
                clip_cuts.record(clip, j, hit.u, id, points[id]);
            }
        }
    }
    if points.is_empty() {
        return Insertion::unchanged(source, clip);
    }

    let src = src_cuts.splice(source, &points);
    let clp = clip_cuts.splice(clip, &points);
    let src_locs = sub_edge_locations(&src, clip);
    let clp_locs = sub_edge_locations(&clp, source);

    // a stretch along the clip boundary crosses only at its last point
    let mut crossing = vec![false; points.len()];
    for (k, s) in src.iter().enumerate() {
        let Some(id) = s.id else { continue };
        if src_locs[k] == Location::Boundary {
            continue;
        }
        if sides_at(&src_locs, k).is_some_and(|sd| sd.before != sd.after) {
            crossing[id] = true;
        }
    }
    let count = crossing.iter().filter(|c| **c).count();
    debug!(
        candidates = points.len(),
        crossings = count,
        "intersection points"
    );
    if count == 0 {
        return Insertion::unchanged(source, clip);
    }

    let src_kept = keep(src, &src_locs, &crossing);
    let clp_kept = keep(clp, &clp_locs, &crossing);
    let mut src_vertices = src_kept.vertices;
    let mut clp_vertices = clp_kept.vertices;
    link(&mut src_vertices, &src_kept.ids, &clp_kept.ids, points.len());
    link(&mut clp_vertices, &clp_kept.ids, &src_kept.ids, points.len());
    Insertion {
        src: Polygon {
            vertices: src_vertices,
        },
        clp: Polygon {
            vertices: clp_vertices,
        },
        src_sides: src_kept.sides,
        clp_sides: clp_kept.sides,
    }
}

/// Candidate points found on one polygon, before splicing.
struct Cuts {
    /// Registry id of a point that coincides with original vertex `i`.
    at_vertex: Vec<Option<usize>>,
    /// Points strictly inside edge `i`: (edge parameter, registry id).
    on_edge: Vec<Vec<(f64, usize)>>,
}

/// Vertex of an augmented boundary before links are resolved.
#[derive(Clone, Copy)]
struct Spliced {
    vertex: Vertex,
    id: Option<usize>,
    original: bool,
}

impl Cuts {
    fn new(n: usize) -> Self {
        Self {
            at_vertex: vec![None; n],
            on_edge: vec![Vec::new(); n],
        }
    }

    fn record(&mut self, poly: &Polygon, edge: usize, t: f64, id: usize, p: Vector2<f64>) {
        let next = (edge + 1) % poly.len();
        if coincide(poly.vertices[edge].p, p) {
            self.at_vertex[edge] = Some(id);
        } else if coincide(poly.vertices[next].p, p) {
            self.at_vertex[next] = Some(id);
        } else {
            self.on_edge[edge].push((t, id));
        }
    }

    fn splice(mut self, poly: &Polygon, points: &[Vector2<f64>]) -> Vec<Spliced> {
        let extra: usize = self.on_edge.iter().map(Vec::len).sum();
        let mut out = Vec::with_capacity(poly.len() + extra);
        for (i, v) in poly.vertices.iter().enumerate() {
            out.push(Spliced {
                vertex: v.plain(),
                id: self.at_vertex[i],
                original: true,
            });
            let cuts = &mut self.on_edge[i];
            cuts.sort_by(|a, b| a.0.total_cmp(&b.0));
            for &(_, id) in cuts.iter() {
                // several edges of the other polygon may meet at one point
                if out.last().is_some_and(|s: &Spliced| s.id == Some(id)) {
                    continue;
                }
                out.push(Spliced {
                    vertex: Vertex::at(points[id]),
                    id: Some(id),
                    original: false,
                });
            }
        }
        out
    }
}

/// Registry of distinct candidate points; coinciding points share an id.
fn register(points: &mut Vec<Vector2<f64>>, p: Vector2<f64>) -> usize {
    if let Some(k) = points.iter().position(|q| coincide(*q, p)) {
        return k;
    }
    points.push(p);
    points.len() - 1
}

/// Location of sub-edge `k -> k+1` relative to `other`.
///
/// Every candidate is spliced in, so a sub-edge either runs along the other
/// boundary or meets it only at its ends; the midpoint decides.
fn sub_edge_locations(boundary: &[Spliced], other: &Polygon) -> Vec<Location> {
    let n = boundary.len();
    (0..n)
        .map(|k| {
            let p = boundary[k].vertex.p;
            let q = boundary[(k + 1) % n].vertex.p;
            other.locate((p + q) * 0.5)
        })
        .collect()
}

/// Nearest non-boundary sub-edge before and after vertex `k`.
fn sides_at(locs: &[Location], k: usize) -> Option<Sides> {
    let n = locs.len();
    let off = |l: &Location| *l != Location::Boundary;
    let before = (1..=n).map(|d| locs[(k + n - d) % n]).find(off)?;
    let after = (0..n).map(|d| locs[(k + d) % n]).find(off)?;
    Some(Sides { before, after })
}

struct Kept {
    vertices: Vec<Vertex>,
    ids: Vec<Option<usize>>,
    sides: Vec<Option<Sides>>,
}

/// Drop non-crossing candidates that were not original vertices; keep the
/// crossing id and sides of every remaining vertex.
fn keep(boundary: Vec<Spliced>, locs: &[Location], crossing: &[bool]) -> Kept {
    let mut kept = Kept {
        vertices: Vec::with_capacity(boundary.len()),
        ids: Vec::with_capacity(boundary.len()),
        sides: Vec::with_capacity(boundary.len()),
    };
    for (k, s) in boundary.into_iter().enumerate() {
        let id = s.id.filter(|&id| crossing[id]);
        if id.is_none() && !s.original {
            continue;
        }
        kept.vertices.push(s.vertex);
        kept.ids.push(id);
        kept.sides.push(id.and_then(|_| sides_at(locs, k)));
    }
    kept
}

fn link(
    vertices: &mut [Vertex],
    ids: &[Option<usize>],
    other_ids: &[Option<usize>],
    n_points: usize,
) {
    let mut index_of = vec![None; n_points];
    for (k, id) in other_ids.iter().enumerate() {
        if let Some(id) = id {
            index_of[*id] = Some(k);
        }
    }
    for (v, id) in vertices.iter_mut().zip(ids) {
        v.link = id.and_then(|id| index_of[id]);
    }
}
