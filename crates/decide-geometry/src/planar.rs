// ─────────────────────────────────────────────────────────────────────
// DECIDE Launch Interceptor — Planar Measures
// ─────────────────────────────────────────────────────────────────────
//! Distances, areas, angles and quadrant labels over [`Point`]s.
//!
//! All functions are pure. Degenerate input (coincident points, zero
//! length rays) is reported through `Option`, never through panics.

use decide_types::Point;

/// Euclidean distance between two points.
#[inline]
pub fn distance(p1: Point, p2: Point) -> f64 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    (dx * dx + dy * dy).sqrt()
}

/// Midpoint of the segment p1–p2.
#[inline]
pub fn midpoint(p1: Point, p2: Point) -> Point {
    Point::new((p1.x + p2.x) / 2.0, (p1.y + p2.y) / 2.0)
}

/// Area of the triangle p1 p2 p3 (shoelace form):
///
///   A = ½ |x₁(y₂ − y₃) + x₂(y₃ − y₁) + x₃(y₁ − y₂)|
///
/// Exactly 0 for collinear or coincident vertices.
#[inline]
pub fn triangle_area(p1: Point, p2: Point, p3: Point) -> f64 {
    0.5 * (p1.x * (p2.y - p3.y) + p2.x * (p3.y - p1.y) + p3.x * (p1.y - p2.y)).abs()
}

/// Angle at vertex `p2` between the rays p2→p1 and p2→p3, in [0, π].
///
/// Returns `None` when either ray has zero length.
pub fn angle_at_vertex(p1: Point, p2: Point, p3: Point) -> Option<f64> {
    let v1 = (p1.x - p2.x, p1.y - p2.y);
    let v2 = (p3.x - p2.x, p3.y - p2.y);

    let norm_v1 = (v1.0 * v1.0 + v1.1 * v1.1).sqrt();
    let norm_v2 = (v2.0 * v2.0 + v2.1 * v2.1).sqrt();
    if norm_v1 == 0.0 || norm_v2 == 0.0 {
        return None;
    }

    let cos_angle = (v1.0 * v2.0 + v1.1 * v2.1) / (norm_v1 * norm_v2);
    // Rounding can push |cos| a hair past 1 for straight lines.
    Some(cos_angle.clamp(-1.0, 1.0).acos())
}

/// Perpendicular distance from `p` to the infinite line through `a` and `b`.
///
/// Callers must ensure `a != b`; the result is NaN otherwise.
pub fn distance_to_line(p: Point, a: Point, b: Point) -> f64 {
    let cross = (b.x - a.x) * (a.y - p.y) - (a.x - p.x) * (b.y - a.y);
    cross.abs() / distance(a, b)
}

/// Cartesian quadrant of a point, as labelled by LIC 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    First,
    Second,
    Third,
    Fourth,
}

impl Quadrant {
    /// 0-based slot, handy for bitsets.
    pub fn index(self) -> usize {
        match self {
            Quadrant::First => 0,
            Quadrant::Second => 1,
            Quadrant::Third => 2,
            Quadrant::Fourth => 3,
        }
    }
}

/// Quadrant of `p`, with the classic priority rules:
///
/// - `(x ≥ 0, y ≥ 0)` → I (origin and positive axes included)
/// - `(x < 0, y > 0)` → II
/// - `(x < 0, y < 0)` → III
/// - `(x > 0, y < 0)` → IV
///
/// Points on the negative x axis or the negative y axis match none of
/// the rules and return `None`.
pub fn quadrant(p: Point) -> Option<Quadrant> {
    let (x, y) = (p.x, p.y);
    if x >= 0.0 && y >= 0.0 {
        Some(Quadrant::First)
    } else if x < 0.0 && y > 0.0 {
        Some(Quadrant::Second)
    } else if x < 0.0 && y < 0.0 {
        Some(Quadrant::Third)
    } else if x > 0.0 && y < 0.0 {
        Some(Quadrant::Fourth)
    } else {
        None
    }
}

/// Number of distinct quadrants touched by `points`.
pub fn distinct_quadrants(points: &[Point]) -> usize {
    let mut seen = [false; 4];
    for q in points.iter().copied().filter_map(quadrant) {
        seen[q.index()] = true;
    }
    seen.iter().filter(|&&s| s).count()
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_distance_exact_values() {
        let cases = [
            (p(0.0, 0.0), p(0.0, 0.0), 0.0),
            (p(1.0, 1.0), p(1.0, 1.0), 0.0),
            (p(-1.0, -1.0), p(2.0, 3.0), 5.0),
            (p(0.0, 0.0), p(-6.0, -8.0), 10.0),
            (p(1.0, 0.0), p(0.0, 1.0), 2f64.sqrt()),
            (p(-2468.0, -3702.0), p(2468.0, 0.0), 6170.0),
            (p(-10.0, -10.0), p(-6.0, -7.0), 5.0),
        ];
        for (a, b, expected) in cases {
            assert_eq!(distance(a, b), expected, "distance({a}, {b})");
        }
    }

    #[test]
    fn test_triangle_area_exact_values() {
        let cases = [
            (p(0.0, 0.0), p(0.0, 0.0), p(0.0, 0.0), 0.0),
            (p(1.0, 1.0), p(1.0, 1.0), p(1.0, 1.0), 0.0),
            (p(0.0, 1.0), p(1.0, 0.0), p(-1.0, 0.0), 1.0),
            (p(0.0, 10.0), p(-1.0, -7.0), p(3.0, -11.0), 36.0),
            (p(-10.0, 5.0), p(-10.0, -5.0), p(10.0, 0.0), 100.0),
            (p(-9.0, -3234.0), p(-7.0, -8.0), p(60903.0, 8.0), 98247814.0),
        ];
        for (a, b, c, expected) in cases {
            assert_eq!(triangle_area(a, b, c), expected);
        }
    }

    #[test]
    fn test_triangle_area_collinear_is_zero() {
        assert_eq!(triangle_area(p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)), 0.0);
    }

    #[test]
    fn test_angle_straight_and_right() {
        let straight = angle_at_vertex(p(1.0, 0.0), p(0.0, 0.0), p(-1.0, 0.0)).unwrap();
        assert!((straight - PI).abs() < 1e-12);
        let right = angle_at_vertex(p(1.0, 0.0), p(0.0, 0.0), p(0.0, 1.0)).unwrap();
        assert!((right - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_angle_degenerate_ray() {
        assert!(angle_at_vertex(p(0.0, 0.0), p(0.0, 0.0), p(1.0, 1.0)).is_none());
        assert!(angle_at_vertex(p(1.0, 1.0), p(0.0, 0.0), p(0.0, 0.0)).is_none());
    }

    #[test]
    fn test_angle_never_nan_on_collinear() {
        let a = angle_at_vertex(p(0.1, 0.1), p(0.2, 0.2), p(0.3, 0.3)).unwrap();
        assert!(a.is_finite());
    }

    #[test]
    fn test_distance_to_line() {
        let d = distance_to_line(p(1.0, 2.0), p(0.0, 0.0), p(2.0, 0.0));
        assert!((d - 2.0).abs() < 1e-12);
        let d = distance_to_line(p(1.0, 0.0), p(0.0, 0.0), p(2.0, 0.0));
        assert_eq!(d, 0.0);
    }

    #[test]
    fn test_quadrant_rules() {
        assert_eq!(quadrant(p(0.0, 0.0)), Some(Quadrant::First));
        assert_eq!(quadrant(p(3.0, 0.0)), Some(Quadrant::First));
        assert_eq!(quadrant(p(0.0, 3.0)), Some(Quadrant::First));
        assert_eq!(quadrant(p(-1.0, 1.0)), Some(Quadrant::Second));
        assert_eq!(quadrant(p(-1.0, -1.0)), Some(Quadrant::Third));
        assert_eq!(quadrant(p(1.0, -1.0)), Some(Quadrant::Fourth));
        assert_eq!(quadrant(p(-1.0, 0.0)), None);
        assert_eq!(quadrant(p(0.0, -1.0)), None);
    }

    #[test]
    fn test_distinct_quadrants() {
        let pts = [p(0.0, 0.0), p(-1.0, 1.0), p(2.0, -2.0), p(-3.0, -3.0)];
        assert_eq!(distinct_quadrants(&pts), 4);
        let pts = [p(0.0, 0.0); 4];
        assert_eq!(distinct_quadrants(&pts), 1);
        let pts = [p(-1.0, 0.0), p(0.0, -1.0)];
        assert_eq!(distinct_quadrants(&pts), 0);
    }
}
