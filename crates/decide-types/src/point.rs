// ─────────────────────────────────────────────────────────────────────
// DECIDE Launch Interceptor — Planar Points
// ─────────────────────────────────────────────────────────────────────

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DecideError, DecideResult};

/// Smallest allowed NUMPOINTS / POINTS length.
pub const MIN_POINTS: usize = 2;
/// Largest allowed NUMPOINTS / POINTS length.
pub const MAX_POINTS: usize = 100;

/// A planar radar return. Serialized as a bare `[x, y]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Collect `(x, y)` pairs into points.
pub fn points_from_pairs(pairs: &[(f64, f64)]) -> Vec<Point> {
    pairs.iter().copied().map(Point::from).collect()
}

/// Check a NUMPOINTS value against [`MIN_POINTS`, `MAX_POINTS`].
pub fn validate_numpoints(numpoints: usize) -> DecideResult<()> {
    if !(MIN_POINTS..=MAX_POINTS).contains(&numpoints) {
        return Err(DecideError::Validation(format!(
            "NUMPOINTS must be an integer between {MIN_POINTS} and {MAX_POINTS}, got {numpoints}"
        )));
    }
    Ok(())
}

/// Check a point sequence on its own: length bounds and finite coordinates.
///
/// Cross-checking against an already fixed NUMPOINTS is the engine's job.
pub fn validate_points(points: &[Point]) -> DecideResult<()> {
    if !(MIN_POINTS..=MAX_POINTS).contains(&points.len()) {
        return Err(DecideError::Validation(format!(
            "POINTS must contain between {MIN_POINTS} and {MAX_POINTS} points, got {}",
            points.len()
        )));
    }
    if let Some((i, p)) = points.iter().enumerate().find(|(_, p)| !p.is_finite()) {
        return Err(DecideError::Validation(format!(
            "POINTS must contain only finite coordinates, point {i} is {p}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_serializes_as_pair() {
        let json = serde_json::to_string(&Point::new(1.5, -2.0)).unwrap();
        assert_eq!(json, "[1.5,-2.0]");
        let p: Point = serde_json::from_str("[3, 4]").unwrap();
        assert_eq!(p, Point::new(3.0, 4.0));
    }

    #[test]
    fn test_point_rejects_wrong_arity() {
        assert!(serde_json::from_str::<Point>("[1.0]").is_err());
        assert!(serde_json::from_str::<Point>("[1.0, 2.0, 3.0]").is_err());
        assert!(serde_json::from_str::<Point>("[1.0, \"a\"]").is_err());
    }

    #[test]
    fn test_validate_numpoints_bounds() {
        assert!(validate_numpoints(2).is_ok());
        assert!(validate_numpoints(100).is_ok());
        assert!(validate_numpoints(1).is_err());
        assert!(validate_numpoints(101).is_err());
    }

    #[test]
    fn test_validate_points_length() {
        assert!(validate_points(&[Point::ORIGIN]).is_err());
        assert!(validate_points(&vec![Point::ORIGIN; 101]).is_err());
        assert!(validate_points(&vec![Point::ORIGIN; 100]).is_ok());
    }

    #[test]
    fn test_validate_points_non_finite() {
        let pts = [Point::ORIGIN, Point::new(f64::NAN, 1.0)];
        let err = validate_points(&pts).unwrap_err();
        assert!(err.to_string().contains("point 1"));
        let pts = [Point::ORIGIN, Point::new(0.0, f64::INFINITY)];
        assert!(validate_points(&pts).is_err());
    }
}
