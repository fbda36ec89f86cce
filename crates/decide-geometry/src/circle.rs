// ─────────────────────────────────────────────────────────────────────
// DECIDE Launch Interceptor — Circumscribed Circles
// ─────────────────────────────────────────────────────────────────────
//! Circumcenter by perpendicular-bisector intersection, plus the
//! side-length (Heron) form of the circumradius.
//!
//! Vertical chords carry [`Slope::Undefined`] instead of an infinite
//! slope, so no division by zero is ever performed on the slope path.

use decide_types::Point;

use crate::planar::{distance, midpoint};

/// Slope of a chord.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slope {
    Finite(f64),
    /// Vertical chord (equal x coordinates).
    Undefined,
}

impl Slope {
    pub fn between(p1: Point, p2: Point) -> Self {
        if p1.x == p2.x {
            Slope::Undefined
        } else {
            Slope::Finite((p2.y - p1.y) / (p2.x - p1.x))
        }
    }
}

/// Line in the form `a·x + b·y = c`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Line {
    a: f64,
    b: f64,
    c: f64,
}

impl Line {
    /// Perpendicular bisector of a chord with slope `slope` and midpoint `mid`.
    ///
    /// A horizontal chord (slope exactly 0) yields `None`: its bisector is
    /// vertical and the other two chords are used instead.
    fn bisector(slope: Slope, mid: Point) -> Option<Self> {
        match slope {
            Slope::Finite(k) if k == 0.0 => None,
            Slope::Undefined => Some(Line {
                a: 0.0,
                b: 1.0,
                c: mid.y,
            }),
            Slope::Finite(k) => {
                // y − m_y = −(1/k)(x − m_x)
                let m = -1.0 / k;
                Some(Line {
                    a: -m,
                    b: 1.0,
                    c: mid.y - m * mid.x,
                })
            }
        }
    }

    fn intersect(&self, other: &Line) -> Option<Point> {
        let det = self.a * other.b - other.a * self.b;
        if det == 0.0 {
            return None;
        }
        Some(Point::new(
            (self.c * other.b - other.c * self.b) / det,
            (self.a * other.c - other.a * self.c) / det,
        ))
    }
}

/// Center of the circle through p1, p2, p3.
///
/// Returns `None` when two chord midpoints coincide (two vertices are the
/// same point) or when all three chord slopes are equal (collinear).
pub fn circumcenter(p1: Point, p2: Point, p3: Point) -> Option<Point> {
    let chords = [(p1, p2), (p1, p3), (p2, p3)];
    let mids = chords.map(|(a, b)| midpoint(a, b));
    if mids[0] == mids[1] || mids[0] == mids[2] || mids[1] == mids[2] {
        return None;
    }

    let slopes = chords.map(|(a, b)| Slope::between(a, b));
    if slopes[0] == slopes[1] && slopes[1] == slopes[2] {
        return None;
    }

    let mut bisectors = slopes
        .iter()
        .zip(mids.iter())
        .filter_map(|(&s, &m)| Line::bisector(s, m));
    let first = bisectors.next()?;
    let second = bisectors.next()?;
    first.intersect(&second)
}

/// Radius of the circle through p1, p2, p3, measured from the circumcenter.
pub fn circumradius(p1: Point, p2: Point, p3: Point) -> Option<f64> {
    circumcenter(p1, p2, p3).map(|c| distance(c, p1))
}

/// Triangle area from its side lengths (Heron's formula).
///
/// Rounding on near-collinear input can make the radicand slightly
/// negative; it is floored at zero.
pub fn heron_area(a: f64, b: f64, c: f64) -> f64 {
    let s = (a + b + c) / 2.0;
    (s * (s - a) * (s - b) * (s - c)).max(0.0).sqrt()
}

/// Circumradius `abc / 4A` from side lengths. `None` when the area is zero.
pub fn circumradius_from_sides(a: f64, b: f64, c: f64) -> Option<f64> {
    let area = heron_area(a, b, c);
    if area == 0.0 {
        return None;
    }
    Some((a * b * c) / (4.0 * area))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn assert_close(actual: Point, expected: Point) {
        assert!(
            (actual.x - expected.x).abs() < 1e-9 && (actual.y - expected.y).abs() < 1e-9,
            "{actual} != {expected}"
        );
    }

    #[test]
    fn test_circumcenter_coincident() {
        assert!(circumcenter(p(0.0, 0.0), p(0.0, 0.0), p(0.0, 0.0)).is_none());
        assert!(circumcenter(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 0.0)).is_none());
    }

    #[test]
    fn test_circumcenter_collinear() {
        assert!(circumcenter(p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0)).is_none());
        assert!(circumcenter(p(0.0, 0.0), p(0.0, 1.0), p(0.0, 3.0)).is_none());
        assert!(circumcenter(p(0.0, 0.0), p(3.0, 0.0), p(1.0, 0.0)).is_none());
    }

    #[test]
    fn test_circumcenter_equilateral() {
        let c = circumcenter(p(0.0, 0.0), p(2.0, 0.0), p(1.0, 3f64.sqrt())).unwrap();
        assert_close(c, p(1.0, 0.577350269189626));
    }

    #[test]
    fn test_circumcenter_right_triangle() {
        let c = circumcenter(p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0)).unwrap();
        assert_close(c, p(0.5, 0.5));
    }

    #[test]
    fn test_circumcenter_almost_collinear() {
        let c = circumcenter(p(-1.0, -1.0), p(0.2, -0.2), p(1.0, 1.0)).unwrap();
        assert_close(c, p(-2.4, 2.4));
    }

    #[test]
    fn test_circumradius_equidistant() {
        let (a, b, c) = (p(0.0, 0.0), p(3.9, 0.0), p(1.95, 3.376));
        let center = circumcenter(a, b, c).unwrap();
        let r = circumradius(a, b, c).unwrap();
        assert!((distance(center, b) - r).abs() < 1e-9);
        assert!((distance(center, c) - r).abs() < 1e-9);
        assert!(r > 2.0);
    }

    #[test]
    fn test_heron_matches_shoelace() {
        let (a, b, c) = (p(0.0, 0.0), p(4.0, 0.0), p(0.0, 3.0));
        let area = heron_area(distance(a, b), distance(b, c), distance(a, c));
        assert!((area - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_circumradius_from_sides_right_triangle() {
        // Hypotenuse 5 is a diameter.
        let r = circumradius_from_sides(3.0, 4.0, 5.0).unwrap();
        assert!((r - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_circumradius_from_sides_degenerate() {
        assert!(circumradius_from_sides(1.0, 1.0, 2.0).is_none());
        assert!(circumradius_from_sides(0.0, 0.0, 0.0).is_none());
    }
}
