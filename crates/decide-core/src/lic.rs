// ─────────────────────────────────────────────────────────────────────
// DECIDE Launch Interceptor — Launch Interceptor Conditions (LIC 0–14)
// ─────────────────────────────────────────────────────────────────────
//! The fifteen Launch Interceptor Conditions as pure predicates.
//!
//! Every predicate takes the point sequence plus only the thresholds it
//! reads, and returns `true` iff at least one window of points passes
//! its test. Windows are scanned left to right and the scan stops at
//! the first match.
//!
//! Window shapes:
//! - **consecutive**: `points.windows(n)`.
//! - **spaced pair**: indices `(i, i + k + 1)` with `k` intervening points.
//! - **spaced triple**: indices `(i, i + a + 1, i + a + b + 2)`.
//!
//! Spaced windows share one convention: the start index ranges over
//! `0..len − span + 1` (empty when the span does not fit).
//!
//! Comparisons are strict unless a condition says otherwise, and the
//! degenerate-geometry handling of each condition is its own: LIC 1 and
//! LIC 8 both test "cannot fit in a circle" but treat collinear triples
//! differently.

use std::f64::consts::PI;

use decide_geometry::{
    angle_at_vertex, circumradius, circumradius_from_sides, distance, distance_to_line,
    distinct_quadrants, midpoint, triangle_area,
};
use decide_types::{ConditionVector, Parameters, Point, LIC_COUNT};

// ── Window iterators ────────────────────────────────────────────────

/// Index pairs `(i, j)` with exactly `gap` points between them.
///
/// Spans are saturating, so a gap too large for any slice yields no pairs.
fn spaced_pairs(len: usize, gap: usize) -> impl Iterator<Item = (usize, usize)> {
    let span = gap.saturating_add(2);
    (0..(len + 1).saturating_sub(span)).map(move |i| (i, i + gap + 1))
}

/// Index triples `(i, j, k)` with `first_gap` points between i and j
/// and `second_gap` points between j and k. Empty when the span does
/// not fit.
fn spaced_triples(
    len: usize,
    first_gap: usize,
    second_gap: usize,
) -> impl Iterator<Item = (usize, usize, usize)> {
    let span = triple_span(first_gap, second_gap);
    (0..(len + 1).saturating_sub(span)).map(move |i| {
        let j = i + first_gap + 1;
        (i, j, j + second_gap + 1)
    })
}

/// Points covered by a spaced triple, saturating at `usize::MAX`.
fn triple_span(first_gap: usize, second_gap: usize) -> usize {
    first_gap.saturating_add(second_gap).saturating_add(3)
}

fn side_lengths(p1: Point, p2: Point, p3: Point) -> [f64; 3] {
    [distance(p1, p2), distance(p1, p3), distance(p2, p3)]
}

/// Index and value of the longest side; ties go to the earliest side.
fn longest_side(sides: &[f64; 3]) -> (usize, f64) {
    let mut best = (0, sides[0]);
    for (i, &s) in sides.iter().enumerate().skip(1) {
        if s > best.1 {
            best = (i, s);
        }
    }
    best
}

// ── LIC 0–5: consecutive windows ────────────────────────────────────

/// LIC 0: two consecutive points farther apart than `length1`.
pub fn lic_0(points: &[Point], length1: f64) -> bool {
    if points.len() < 2 {
        return false;
    }
    points
        .windows(2)
        .any(|w| distance(w[0], w[1]) > length1)
}

/// LIC 1: three consecutive points that cannot be contained within or
/// on a circle of radius `radius1`.
///
/// A pairwise distance above the diameter is decisive. Otherwise the
/// circumradius decides, and triples without a circumcircle (collinear
/// or coincident) are skipped.
pub fn lic_1(points: &[Point], radius1: f64) -> bool {
    if points.len() < 3 {
        return false;
    }
    let diameter = 2.0 * radius1;
    points.windows(3).any(|w| {
        let (p1, p2, p3) = (w[0], w[1], w[2]);
        if side_lengths(p1, p2, p3).iter().any(|&d| d > diameter) {
            return true;
        }
        circumradius(p1, p2, p3).is_some_and(|r| r > radius1)
    })
}

/// LIC 2: three consecutive points whose angle at the middle point is
/// below `π − epsilon` or above `π + epsilon`.
///
/// Triples where the vertex coincides with either end are skipped.
pub fn lic_2(points: &[Point], epsilon: f64) -> bool {
    points.windows(3).any(|w| {
        angle_at_vertex(w[0], w[1], w[2])
            .is_some_and(|angle| angle < PI - epsilon || angle > PI + epsilon)
    })
}

/// LIC 3: three consecutive points forming a triangle with area above
/// `area1`. Zero-area triples never count, even for negative `area1`.
pub fn lic_3(points: &[Point], area1: f64) -> bool {
    points.windows(3).any(|w| {
        let area = triangle_area(w[0], w[1], w[2]);
        area != 0.0 && area > area1
    })
}

/// LIC 4: `q_pts` consecutive points lying in more than `quads`
/// quadrants.
pub fn lic_4(points: &[Point], q_pts: usize, quads: usize) -> bool {
    if q_pts == 0 || points.len() < q_pts {
        return false;
    }
    points
        .windows(q_pts)
        .any(|w| distinct_quadrants(w) > quads)
}

/// LIC 5: two consecutive points with `x[j] − x[i] < 0`.
pub fn lic_5(points: &[Point]) -> bool {
    points.windows(2).any(|w| w[1].x - w[0].x < 0.0)
}

// ── LIC 6: line deviation ───────────────────────────────────────────

/// LIC 6: `n_pts` consecutive points where some interior point lies
/// farther than `dist` from the line through the first and last.
///
/// When first and last coincide, distance to that point is used instead
/// of distance to a line. Windows shorter than three points have no
/// interior and never match.
pub fn lic_6(points: &[Point], n_pts: usize, dist: f64) -> bool {
    if points.len() < 3 || n_pts > points.len() || dist < 0.0 || n_pts < 3 {
        return false;
    }
    points.windows(n_pts).any(|w| {
        let first = w[0];
        let last = w[n_pts - 1];
        let interior = &w[1..n_pts - 1];
        if first == last {
            interior.iter().any(|&p| distance(first, p) > dist)
        } else {
            interior
                .iter()
                .any(|&p| distance_to_line(p, first, last) > dist)
        }
    })
}

// ── LIC 7–14: spaced windows ────────────────────────────────────────

/// LIC 7: two points with exactly `k_pts` points between them that are
/// farther apart than `length1`.
pub fn lic_7(points: &[Point], k_pts: usize, length1: f64) -> bool {
    let n = points.len();
    if n < 3 || k_pts < 1 || k_pts > n - 2 {
        return false;
    }
    spaced_pairs(n, k_pts).any(|(i, j)| distance(points[i], points[j]) > length1)
}

/// LIC 8: three points separated by `a_pts` and `b_pts` intervening
/// points that cannot be contained within or on a circle of radius
/// `radius1`.
///
/// The longest side is checked against the diameter first, so a
/// collinear triple that is too long still matches. Otherwise the
/// circumradius comes from the side lengths (Heron), and zero-area
/// triples are skipped.
pub fn lic_8(points: &[Point], a_pts: usize, b_pts: usize, radius1: f64) -> bool {
    let n = points.len();
    if n < 5 || a_pts < 1 || b_pts < 1 || triple_span(a_pts, b_pts) > n {
        return false;
    }
    spaced_triples(n, a_pts, b_pts).any(|(i, j, k)| {
        let (p1, p2, p3) = (points[i], points[j], points[k]);
        let d1 = distance(p1, p2);
        let d2 = distance(p3, p1);
        let d3 = distance(p3, p2);
        if d1.max(d2).max(d3) > 2.0 * radius1 {
            return true;
        }
        circumradius_from_sides(d1, d2, d3).is_some_and(|r| r > radius1)
    })
}

/// LIC 9: three points separated by `c_pts` and `d_pts` intervening
/// points whose vertex angle deviates from π by more than `epsilon`.
pub fn lic_9(points: &[Point], c_pts: usize, d_pts: usize, epsilon: f64) -> bool {
    let n = points.len();
    if c_pts < 1 || d_pts < 1 || triple_span(c_pts, d_pts) > n {
        return false;
    }
    spaced_triples(n, c_pts, d_pts).any(|(i, j, k)| {
        angle_at_vertex(points[i], points[j], points[k])
            .is_some_and(|angle| (angle - PI).abs() > epsilon)
    })
}

/// LIC 10: three points separated by `e_pts` and `f_pts` intervening
/// points forming a triangle with area above `area1`.
pub fn lic_10(points: &[Point], e_pts: usize, f_pts: usize, area1: f64) -> bool {
    let n = points.len();
    if n < 5 || triple_span(e_pts, f_pts) > n {
        return false;
    }
    if e_pts < 1 || f_pts < 1 {
        return false;
    }
    spaced_triples(n, e_pts, f_pts)
        .any(|(i, j, k)| triangle_area(points[i], points[j], points[k]) > area1)
}

/// LIC 11: two points with exactly `g_pts` points between them where
/// `x[j] − x[i] < 0`.
pub fn lic_11(points: &[Point], g_pts: usize) -> bool {
    let n = points.len();
    if n < 3 || g_pts < 1 || g_pts > n - 2 {
        return false;
    }
    spaced_pairs(n, g_pts).any(|(i, j)| points[j].x - points[i].x < 0.0)
}

/// LIC 12: among pairs with `k_pts` points between them, one pair is
/// farther apart than `length1` and one pair (possibly the same) is
/// closer than `length2`.
pub fn lic_12(points: &[Point], k_pts: usize, length1: f64, length2: f64) -> bool {
    let n = points.len();
    if n < 3 || k_pts < 1 || k_pts > n - 2 {
        return false;
    }
    if length1 < 0.0 || length2 < 0.0 {
        return false;
    }

    let mut beyond_length1 = false;
    let mut within_length2 = false;
    for (i, j) in spaced_pairs(n, k_pts) {
        let d = distance(points[i], points[j]);
        beyond_length1 |= d > length1;
        within_length2 |= d < length2;
        if beyond_length1 && within_length2 {
            return true;
        }
    }
    false
}

/// LIC 13: among triples separated by `a_pts` and `b_pts` intervening
/// points, one cannot fit in a circle of radius `radius1` and one
/// (possibly the same) fits in a circle of radius `radius2`.
///
/// "Cannot fit": longest side above `2·radius1`, or circumradius above
/// `radius1`. "Fits": longest side at most `2·radius2` with the third
/// vertex within `radius2` of that side's midpoint, or circumradius
/// below `radius2`. Circumradius checks are skipped for collinear or
/// coincident triples.
pub fn lic_13(
    points: &[Point],
    a_pts: usize,
    b_pts: usize,
    radius1: f64,
    radius2: f64,
) -> bool {
    let n = points.len();
    if triple_span(a_pts, b_pts) > n || n < 5 || a_pts < 1 || b_pts < 1 {
        return false;
    }

    let mut outside_radius1 = false;
    let mut inside_radius2 = false;
    for (i, j, k) in spaced_triples(n, a_pts, b_pts) {
        let (p1, p2, p3) = (points[i], points[j], points[k]);
        let sides = side_lengths(p1, p2, p3);
        let (longest, max_side) = longest_side(&sides);

        if max_side > 2.0 * radius1 {
            outside_radius1 = true;
        }
        if max_side <= 2.0 * radius2 {
            let (a, b, opposite) = match longest {
                0 => (p1, p2, p3),
                1 => (p1, p3, p2),
                _ => (p2, p3, p1),
            };
            if distance(midpoint(a, b), opposite) <= radius2 {
                inside_radius2 = true;
            }
        }
        if let Some(r) = circumradius(p1, p2, p3) {
            if r > radius1 {
                outside_radius1 = true;
            }
            if r < radius2 {
                inside_radius2 = true;
            }
        }

        if outside_radius1 && inside_radius2 {
            return true;
        }
    }
    false
}

/// LIC 14: among triples separated by `e_pts` and `f_pts` intervening
/// points, one has area above `area1` and one (possibly the same) has
/// area below `area2`.
///
/// Unlike LIC 10 there is no lower bound on the gaps: zero gaps select
/// consecutive triples.
pub fn lic_14(points: &[Point], e_pts: usize, f_pts: usize, area1: f64, area2: f64) -> bool {
    let n = points.len();
    if n < 5 || area2 < 0.0 {
        return false;
    }

    let mut above_area1 = false;
    let mut below_area2 = false;
    for (i, j, k) in spaced_triples(n, e_pts, f_pts) {
        let area = triangle_area(points[i], points[j], points[k]);
        above_area1 |= area > area1;
        below_area2 |= area < area2;
        if above_area1 && below_area2 {
            return true;
        }
    }
    false
}

// ── Static dispatch table ───────────────────────────────────────────

/// One Launch Interceptor Condition, in CMV order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lic {
    ConsecutiveLength,
    ConsecutiveCircle,
    ConsecutiveAngle,
    ConsecutiveArea,
    QuadrantSpread,
    ConsecutiveRetreat,
    LineDeviation,
    SpacedLength,
    SpacedCircle,
    SpacedAngle,
    SpacedArea,
    SpacedRetreat,
    SpacedLengthBand,
    SpacedCircleBand,
    SpacedAreaBand,
}

impl Lic {
    /// All conditions, indexed by their CMV position.
    pub const ALL: [Lic; LIC_COUNT] = [
        Lic::ConsecutiveLength,
        Lic::ConsecutiveCircle,
        Lic::ConsecutiveAngle,
        Lic::ConsecutiveArea,
        Lic::QuadrantSpread,
        Lic::ConsecutiveRetreat,
        Lic::LineDeviation,
        Lic::SpacedLength,
        Lic::SpacedCircle,
        Lic::SpacedAngle,
        Lic::SpacedArea,
        Lic::SpacedRetreat,
        Lic::SpacedLengthBand,
        Lic::SpacedCircleBand,
        Lic::SpacedAreaBand,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Lic> {
        Self::ALL.get(index).copied()
    }

    /// Conventional label, e.g. `"LIC 7"`.
    pub fn name(self) -> String {
        format!("LIC {}", self.index())
    }

    /// One-line summary of the test.
    pub fn description(self) -> &'static str {
        match self {
            Lic::ConsecutiveLength => "2 consecutive points farther apart than LENGTH1",
            Lic::ConsecutiveCircle => "3 consecutive points outside any circle of RADIUS1",
            Lic::ConsecutiveAngle => "3 consecutive points bending more than EPSILON from straight",
            Lic::ConsecutiveArea => "3 consecutive points enclosing more than AREA1",
            Lic::QuadrantSpread => "Q_PTS consecutive points spanning more than QUADS quadrants",
            Lic::ConsecutiveRetreat => "2 consecutive points with decreasing x",
            Lic::LineDeviation => "N_PTS consecutive points straying more than DIST from their chord",
            Lic::SpacedLength => "2 points K_PTS apart farther than LENGTH1",
            Lic::SpacedCircle => "3 points A_PTS/B_PTS apart outside any circle of RADIUS1",
            Lic::SpacedAngle => "3 points C_PTS/D_PTS apart bending more than EPSILON",
            Lic::SpacedArea => "3 points E_PTS/F_PTS apart enclosing more than AREA1",
            Lic::SpacedRetreat => "2 points G_PTS apart with decreasing x",
            Lic::SpacedLengthBand => "pairs K_PTS apart beyond LENGTH1 and within LENGTH2",
            Lic::SpacedCircleBand => "triples A_PTS/B_PTS apart outside RADIUS1 and inside RADIUS2",
            Lic::SpacedAreaBand => "triples E_PTS/F_PTS apart above AREA1 and below AREA2",
        }
    }

    /// Evaluate this condition, pulling its thresholds out of `params`.
    pub fn evaluate(self, points: &[Point], params: &Parameters) -> bool {
        let p = params;
        match self {
            Lic::ConsecutiveLength => lic_0(points, p.length1),
            Lic::ConsecutiveCircle => lic_1(points, p.radius1),
            Lic::ConsecutiveAngle => lic_2(points, p.epsilon),
            Lic::ConsecutiveArea => lic_3(points, p.area1),
            Lic::QuadrantSpread => lic_4(points, p.q_pts, p.quads),
            Lic::ConsecutiveRetreat => lic_5(points),
            Lic::LineDeviation => lic_6(points, p.n_pts, p.dist),
            Lic::SpacedLength => lic_7(points, p.k_pts, p.length1),
            Lic::SpacedCircle => lic_8(points, p.a_pts, p.b_pts, p.radius1),
            Lic::SpacedAngle => lic_9(points, p.c_pts, p.d_pts, p.epsilon),
            Lic::SpacedArea => lic_10(points, p.e_pts, p.f_pts, p.area1),
            Lic::SpacedRetreat => lic_11(points, p.g_pts),
            Lic::SpacedLengthBand => lic_12(points, p.k_pts, p.length1, p.length2),
            Lic::SpacedCircleBand => lic_13(points, p.a_pts, p.b_pts, p.radius1, p.radius2),
            Lic::SpacedAreaBand => lic_14(points, p.e_pts, p.f_pts, p.area1, p.area2),
        }
    }
}

/// Evaluate every condition in CMV order.
pub fn evaluate_all(points: &[Point], params: &Parameters) -> ConditionVector {
    let mut cmv = [false; LIC_COUNT];
    for lic in Lic::ALL {
        cmv[lic.index()] = lic.evaluate(points, params);
    }
    cmv
}
