use super::util::{convex_hull, segment_hits};
use super::*;
use nalgebra::{vector, Vector2};

fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon {
    Polygon::from_points(&[(x0, y0), (x0, y1), (x1, y1), (x1, y0)])
}

#[test]
fn new_drops_repeated_and_closing_vertices() {
    let p = Polygon::from_points(&[(0.0, 0.0), (0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]);
    assert_eq!(p.len(), 3);
    assert!(p.vertices[0].coincides(&Vertex::new(0.0, 0.0)));
    assert!(p.vertices[2].coincides(&Vertex::new(1.0, 1.0)));
}

#[test]
fn area_and_orientation() {
    let cw = square(-1.0, -1.0, 1.0, 1.0);
    assert!((cw.signed_area() + 4.0).abs() < 1e-12);
    assert!(!cw.is_ccw());
    let ccw = cw.reversed();
    assert!(ccw.is_ccw());
    assert!((ccw.area() - 4.0).abs() < 1e-12);
    assert_eq!(Polygon::default().signed_area(), 0.0);
}

#[test]
fn locate_inside_outside_boundary() {
    let sq = square(0.0, 0.0, 2.0, 2.0);
    assert_eq!(sq.locate(vector![1.0, 1.0]), Location::Inside);
    assert_eq!(sq.locate(vector![3.0, 1.0]), Location::Outside);
    assert_eq!(sq.locate(vector![-0.5, 2.0]), Location::Outside);
    assert_eq!(sq.locate(vector![0.0, 1.0]), Location::Boundary);
    assert_eq!(sq.locate(vector![2.0, 2.0]), Location::Boundary);
    // ray through a vertex must not double count
    let diamond = Polygon::from_points(&[(0.0, -1.0), (1.0, 0.0), (0.0, 1.0), (-1.0, 0.0)]);
    assert_eq!(diamond.locate(vector![-0.5, 0.0]), Location::Inside);
    assert_eq!(diamond.locate(vector![-2.0, 0.0]), Location::Outside);
}

#[test]
fn locate_concave_notch() {
    // [0,4]x[0,3] with the notch [2,3]x[0,2] removed
    let notched = Polygon::from_points(&[
        (3.0, 2.0),
        (2.0, 2.0),
        (2.0, 0.0),
        (0.0, 0.0),
        (0.0, 3.0),
        (4.0, 3.0),
        (4.0, 0.0),
        (3.0, 0.0),
    ]);
    assert_eq!(notched.locate(vector![2.5, 1.0]), Location::Outside);
    assert_eq!(notched.locate(vector![1.0, 1.0]), Location::Inside);
    assert_eq!(notched.locate(vector![3.5, 1.0]), Location::Inside);
    assert_eq!(notched.locate(vector![2.5, 2.5]), Location::Inside);
}

#[test]
fn same_as_accepts_rotation_and_reversal() {
    let a = square(0.0, 0.0, 1.0, 1.0);
    let rotated = Polygon::from_points(&[(1.0, 1.0), (1.0, 0.0), (0.0, 0.0), (0.0, 1.0)]);
    let reversed = Polygon::from_points(&[(1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]);
    assert!(a.same_as(&rotated, Check::Coordinates).is_ok());
    assert!(a.same_as(&reversed, Check::Coordinates).is_ok());
    let other = square(0.0, 0.0, 1.0, 2.0);
    assert!(matches!(
        a.same_as(&other, Check::Coordinates),
        Err(Mismatch::Vertices { .. })
    ));
    let tri = Polygon::from_points(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
    assert_eq!(
        a.same_as(&tri, Check::Coordinates),
        Err(Mismatch::Length {
            expected: 4,
            actual: 3
        })
    );
}

#[test]
fn same_as_classified_compares_labels() {
    let a = Polygon::new(vec![
        Vertex::new(0.0, 0.0),
        Vertex::labelled(0.0, 1.0, Label::Entry),
        Vertex::new(1.0, 1.0),
        Vertex::labelled(1.0, 0.0, Label::Exit),
    ]);
    let swapped = Polygon::new(vec![
        Vertex::new(0.0, 0.0),
        Vertex::labelled(0.0, 1.0, Label::Exit),
        Vertex::new(1.0, 1.0),
        Vertex::labelled(1.0, 0.0, Label::Entry),
    ]);
    assert!(a.same_as(&swapped, Check::Coordinates).is_ok());
    let err = a.same_as(&swapped, Check::Classified).unwrap_err();
    assert!(matches!(err, Mismatch::Labels { .. }));
    assert!(err.to_string().contains("(0, 1 entry)"));
    assert!(a.same_as(&a.reversed(), Check::Classified).is_ok());
}

#[test]
fn crossing_segments_hit_once() {
    let hits = segment_hits(
        vector![-1.0, 1.0],
        vector![1.0, 1.0],
        vector![0.0, 0.0],
        vector![0.0, 2.0],
    );
    assert_eq!(hits.len(), 1);
    assert!((hits[0].p - vector![0.0, 1.0]).norm() < 1e-12);
    assert!((hits[0].t - 0.5).abs() < 1e-12);
    assert!((hits[0].u - 0.5).abs() < 1e-12);
}

#[test]
fn touching_and_disjoint_segments() {
    // endpoint touch
    let hits = segment_hits(
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, 1.0],
    );
    assert_eq!(hits.len(), 1);
    assert!((hits[0].t - 1.0).abs() < 1e-12 && hits[0].u.abs() < 1e-12);
    // parallel, apart
    assert!(segment_hits(
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![0.0, 1.0],
        vector![1.0, 1.0]
    )
    .is_empty());
    // lines cross outside the segments
    assert!(segment_hits(
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![2.0, -1.0],
        vector![2.0, 1.0]
    )
    .is_empty());
}

#[test]
fn collinear_overlap_reports_both_ends() {
    let hits = segment_hits(
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![3.0, 0.0],
        vector![1.0, 0.0],
    );
    assert_eq!(hits.len(), 2);
    assert!((hits[0].p - vector![1.0, 0.0]).norm() < 1e-12);
    assert!((hits[0].u - 1.0).abs() < 1e-12);
    assert!((hits[1].p - vector![3.0, 0.0]).norm() < 1e-12);
    assert!(hits[1].u.abs() < 1e-12);
}

#[test]
fn hull_is_ccw_and_drops_interior_points() {
    let points = vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 0.0),
        Vector2::new(0.5, 0.5),
        Vector2::new(1.0, 1.0),
        Vector2::new(0.0, 1.0),
    ];
    let hull = convex_hull(&points).unwrap();
    assert_eq!(hull.len(), 4);
    let p = Polygon::convex_hull(&points).unwrap();
    assert!(p.is_ccw());
    assert!(convex_hull(&points[..2]).is_none());
}

#[test]
fn display_lists_vertices_and_labels() {
    let p = Polygon::new(vec![
        Vertex::new(0.0, 0.0),
        Vertex::labelled(0.5, 1.0, Label::Exit),
        Vertex::new(1.0, 0.0),
    ]);
    assert_eq!(p.to_string(), "[(0, 0), (0.5, 1 exit), (1, 0)]");
}
