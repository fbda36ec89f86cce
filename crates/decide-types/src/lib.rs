// ─────────────────────────────────────────────────────────────────────
// DECIDE Launch Interceptor — Types
// (C) 2026 The DECIDE Launch Interceptor contributors.
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Type definitions, parameters, and error hierarchy for the DECIDE
//! launch interceptor: points, the 19 LIC thresholds, the LCM connector
//! tags, and the vectors/matrices of a decision cycle.

pub mod config;
pub mod decision;
pub mod error;
pub mod point;

pub use config::{DecideInput, Parameters};
pub use decision::{
    ConditionVector, Connector, ConnectorMatrix, DecisionReport, Launch, UnlockingMatrix,
    LIC_COUNT,
};
pub use error::{DecideError, DecideResult};
pub use point::{Point, MAX_POINTS, MIN_POINTS};
