// ─────────────────────────────────────────────────────────────────────
// DECIDE Launch Interceptor — Decision Vectors and Matrices
// ─────────────────────────────────────────────────────────────────────

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DecideError;

/// Number of Launch Interceptor Conditions.
pub const LIC_COUNT: usize = 15;

/// Conditions-Met Vector, Preliminary Unlocking Vector, Final Unlocking Vector.
pub type ConditionVector = [bool; LIC_COUNT];
/// Preliminary Unlocking Matrix.
pub type UnlockingMatrix = [[bool; LIC_COUNT]; LIC_COUNT];
/// Logical Connector Matrix.
pub type ConnectorMatrix = [[Connector; LIC_COUNT]; LIC_COUNT];

/// Logical connector between two LICs, one LCM cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Connector {
    #[serde(rename = "ANDD")]
    And,
    #[serde(rename = "ORR")]
    Or,
    #[default]
    #[serde(rename = "NOTUSED")]
    NotUsed,
}

impl Connector {
    /// Combine two condition results. `NotUsed` always unlocks.
    #[inline]
    pub fn apply(self, a: bool, b: bool) -> bool {
        match self {
            Connector::And => a && b,
            Connector::Or => a || b,
            Connector::NotUsed => true,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Connector::And => "ANDD",
            Connector::Or => "ORR",
            Connector::NotUsed => "NOTUSED",
        }
    }
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Connector {
    type Err = DecideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ANDD" => Ok(Connector::And),
            "ORR" => Ok(Connector::Or),
            "NOTUSED" => Ok(Connector::NotUsed),
            other => Err(DecideError::Validation(format!(
                "connector must be one of ANDD, ORR, NOTUSED, got {other:?}"
            ))),
        }
    }
}

/// Final launch verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Launch {
    #[serde(rename = "YES")]
    Yes,
    #[default]
    #[serde(rename = "NO")]
    No,
}

impl Launch {
    pub fn from_unlocked(unlocked: bool) -> Self {
        if unlocked {
            Launch::Yes
        } else {
            Launch::No
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Launch::Yes => "YES",
            Launch::No => "NO",
        }
    }
}

impl fmt::Display for Launch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of one decision cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionReport {
    pub numpoints: usize,
    pub cmv: ConditionVector,
    pub pum: UnlockingMatrix,
    pub fuv: ConditionVector,
    pub launch: Launch,
}

impl DecisionReport {
    /// Indices of the LICs that held this cycle.
    pub fn conditions_met(&self) -> Vec<usize> {
        true_indices(&self.cmv)
    }

    /// Indices of FUV rows that blocked the launch.
    pub fn blocking_rows(&self) -> Vec<usize> {
        self.fuv
            .iter()
            .enumerate()
            .filter_map(|(i, &unlocked)| (!unlocked).then_some(i))
            .collect()
    }
}

fn true_indices(v: &ConditionVector) -> Vec<usize> {
    v.iter()
        .enumerate()
        .filter_map(|(i, &b)| b.then_some(i))
        .collect()
}
