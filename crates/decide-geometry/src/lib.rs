// ─────────────────────────────────────────────────────────────────────
// DECIDE Launch Interceptor — Planar Geometry
// (C) 2026 The DECIDE Launch Interceptor contributors.
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Planar geometry primitives behind the Launch Interceptor Conditions:
//! distance, shoelace and Heron areas, vertex angles, quadrant labels,
//! and circumcircles.

pub mod circle;
pub mod planar;

pub use circle::{
    circumcenter, circumradius, circumradius_from_sides, heron_area, Slope,
};
pub use planar::{
    angle_at_vertex, distance, distance_to_line, distinct_quadrants, midpoint, quadrant,
    triangle_area, Quadrant,
};
