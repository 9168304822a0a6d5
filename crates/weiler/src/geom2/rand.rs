//! Random polygons in 2D (radial jitter + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler of clipping inputs for property
//!   tests and benchmarks. Draws are reproducible from a `(seed, index)` token.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, then translate to `center`.
//! - `draw_polygon_radial` takes the convex hull (CCW).
//! - `draw_polygon_star` keeps the points in angular order: a CCW polygon,
//!   star-shaped around `center`, usually not convex.

use super::{Polygon, Vertex};
use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
    pub center: Vector2<f64>,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            random_phase: true,
            center: Vector2::zeros(),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random convex polygon (CCW vertex order) via radial jitter + convex hull.
pub fn draw_polygon_radial(cfg: RadialCfg, tok: ReplayToken) -> Option<Polygon> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    Polygon::convex_hull(&radial_points(&cfg, n, &mut rng))
}

/// Draw a random star-shaped polygon (CCW vertex order), simple but in
/// general not convex.
///
/// At least 4 vertices are drawn so that every angular gap stays below π and
/// `center` sees the whole boundary.
pub fn draw_polygon_star(cfg: RadialCfg, tok: ReplayToken) -> Option<Polygon> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng).max(4);
    let pts = radial_points(&cfg, n, &mut rng);
    let poly = Polygon::new(pts.into_iter().map(Vertex::at).collect());
    (poly.len() >= 3 && poly.area() > 1e-12).then_some(poly)
}

/// `n` jittered points in increasing angular order around `cfg.center`.
fn radial_points<R: Rng>(cfg: &RadialCfg, n: usize, rng: &mut R) -> Vec<Vector2<f64>> {
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = 2.0 * std::f64::consts::PI / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * 2.0 * std::f64::consts::PI
    } else {
        0.0
    };
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let base = phase + (k as f64) * delta;
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            base + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.total_cmp(b));
    angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u).max(1e-6) * r0;
            cfg.center + Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect()
}

/// Polygon area centroid; `None` for (near-)zero area.
pub fn area_centroid(poly: &Polygon) -> Option<Vector2<f64>> {
    let n = poly.len();
    if n < 3 {
        return None;
    }
    let mut a: f64 = 0.0;
    let mut cx: f64 = 0.0;
    let mut cy: f64 = 0.0;
    for i in 0..n {
        let (p, q) = poly.edge(i);
        let cross = p.x * q.y - q.x * p.y;
        a += cross;
        cx += (p.x + q.x) * cross;
        cy += (p.y + q.y) * cross;
    }
    a *= 0.5;
    if a.abs() < 1e-18 {
        return None;
    }
    Some(Vector2::new(cx / (6.0 * a), cy / (6.0 * a)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::Location;

    #[test]
    fn reproducible_draw() {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Fixed(10),
            angle_jitter_frac: 0.2,
            radial_jitter: 0.1,
            ..RadialCfg::default()
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_polygon_radial(cfg, tok).expect("poly");
        let p2 = draw_polygon_radial(cfg, tok).expect("poly");
        assert_eq!(p1.len(), p2.len());
        for (a, b) in p1.points().zip(p2.points()) {
            assert!((a - b).norm() < 1e-12);
        }
    }

    #[test]
    fn draws_are_convex_ccw_around_center() {
        let center = Vector2::new(3.0, -2.0);
        let cfg = RadialCfg {
            vertex_count: VertexCount::Uniform { min: 3, max: 16 },
            center,
            ..RadialCfg::default()
        };
        for index in 0..20 {
            let p = draw_polygon_radial(cfg, ReplayToken { seed: 5, index }).unwrap();
            assert!(p.len() >= 3);
            assert!(p.is_ccw());
            let c = area_centroid(&p).unwrap();
            assert_eq!(p.locate(c), Location::Inside);
            // every sample lies within base_radius * (1 + radial_jitter)
            assert!((c - center).norm() <= 1.25 + 1e-12);
        }
    }

    #[test]
    fn star_draws_are_simple_ccw_and_sometimes_concave() {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Uniform { min: 5, max: 12 },
            radial_jitter: 0.6,
            ..RadialCfg::default()
        };
        let mut concave = 0;
        for index in 0..20 {
            let p = draw_polygon_star(cfg, ReplayToken { seed: 9, index }).unwrap();
            assert!(p.len() >= 4);
            assert!(p.is_ccw());
            // the center sees every vertex, so it is strictly inside
            assert_eq!(p.locate(cfg.center), Location::Inside);
            let hull = Polygon::convex_hull(&p.points().collect::<Vec<_>>()).unwrap();
            if hull.len() < p.len() {
                concave += 1;
            }
        }
        assert!(concave > 0);
    }
}
