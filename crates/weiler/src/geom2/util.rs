use nalgebra::Vector2;

use super::cfg::EPS;

/// z-component of `a × b`.
#[inline]
pub(crate) fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Distance from `p` to the closed segment `[a, b]`.
pub(crate) fn distance_to_segment(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 <= 0.0 {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len2).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}

#[inline]
pub(crate) fn on_segment(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> bool {
    distance_to_segment(p, a, b) <= EPS
}

/// One common point of two segments `a + t (b - a)` and `c + u (d - c)`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Hit {
    pub p: Vector2<f64>,
    pub t: f64,
    pub u: f64,
}

/// Common points of the closed segments `[a, b]` and `[c, d]`.
///
/// Transversal segments give at most one hit. Collinear overlapping segments
/// give the endpoints of the overlap (one hit if it degenerates to a point).
pub(crate) fn segment_hits(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    d: Vector2<f64>,
) -> Vec<Hit> {
    let r = b - a;
    let s = d - c;
    let qp = c - a;
    let denom = cross(r, s);
    let scale = r.norm() * s.norm();
    if scale <= 0.0 {
        return Vec::new();
    }
    if denom.abs() > EPS * scale {
        let t = cross(qp, s) / denom;
        let u = cross(qp, r) / denom;
        if (-EPS..=1.0 + EPS).contains(&t) && (-EPS..=1.0 + EPS).contains(&u) {
            let t = t.clamp(0.0, 1.0);
            let u = u.clamp(0.0, 1.0);
            return vec![Hit { p: a + r * t, t, u }];
        }
        return Vec::new();
    }
    // parallel: only collinear overlaps matter
    if cross(qp, r).abs() > EPS * r.norm() {
        return Vec::new();
    }
    let rr = r.norm_squared();
    let ss = s.norm_squared();
    let t0 = qp.dot(&r) / rr;
    let t1 = (d - a).dot(&r) / rr;
    let lo = t0.min(t1).max(0.0);
    let hi = t0.max(t1).min(1.0);
    if lo > hi + EPS {
        return Vec::new();
    }
    let at = |t: f64| {
        let p = a + r * t;
        Hit {
            p,
            t,
            u: ((p - c).dot(&s) / ss).clamp(0.0, 1.0),
        }
    };
    if (hi - lo) * r.norm() <= EPS {
        vec![at(lo)]
    } else {
        vec![at(lo), at(hi)]
    }
}

/// Andrew’s monotone chain convex hull (returns hull in CCW order).
pub(crate) fn convex_hull(points: &[Vector2<f64>]) -> Option<Vec<Vector2<f64>>> {
    if points.len() < 3 {
        return None;
    }
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    pts.dedup_by(|a, b| (*a - *b).norm() < 1e-12);
    if pts.len() < 3 {
        return None;
    }
    let turn = |o: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>| cross(a - o, b - o);
    let mut lower: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && turn(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && turn(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    if hull.len() < 3 {
        None
    } else {
        Some(hull)
    }
}
