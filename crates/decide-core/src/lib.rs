// ─────────────────────────────────────────────────────────────────────
// DECIDE Launch Interceptor — Core Engine
// (C) 2026 The DECIDE Launch Interceptor contributors.
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Launch Interceptor Conditions and the decision pipeline that turns
//! a set of radar points into a single YES/NO launch verdict.
//!
//! # Pipeline
//!
//! 1. **CMV**: each of the 15 LICs is evaluated over the point sequence.
//! 2. **PUM**: every CMV pair is combined through its LCM connector
//!    (`ANDD`, `ORR`, or `NOTUSED` which always unlocks).
//! 3. **FUV**: a row whose PUV flag is off is unlocked outright; an
//!    active row is unlocked only if its whole PUM row is.
//! 4. **LAUNCH**: `YES` iff every FUV entry is unlocked.
//!
//! NUMPOINTS is fixed at most once per engine. Any rejected assignment
//! leaves the engine unchanged.

pub mod engine;
pub mod lic;

pub use engine::{Decide, EngineState};
pub use lic::{evaluate_all, Lic};
