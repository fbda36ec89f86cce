// ─────────────────────────────────────────────────────────────────────
// DECIDE Launch Interceptor — Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for all DECIDE failures.
///
/// Degenerate geometry (collinear triples, coincident points) is never
/// an error; the predicates skip or fall through on it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecideError {
    /// A write-once field was assigned a second time. The engine
    /// instance cannot be reconfigured; build a new one.
    #[error("contract violation: {0}")]
    Contract(String),

    /// Malformed input rejected at assignment time. Prior state is kept.
    #[error("validation error: {0}")]
    Validation(String),

    /// Input document could not be parsed or has the wrong shape.
    #[error("config error: {0}")]
    Config(String),
}

impl DecideError {
    /// True for errors that leave the engine unusable for reconfiguration.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, DecideError::Contract(_))
    }
}

pub type DecideResult<T> = Result<T, DecideError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        let e = DecideError::Contract("NUMPOINTS already set".into());
        assert_eq!(e.to_string(), "contract violation: NUMPOINTS already set");
        let e = DecideError::Validation("too few points".into());
        assert_eq!(e.to_string(), "validation error: too few points");
    }

    #[test]
    fn test_contract_classification() {
        assert!(DecideError::Contract(String::new()).is_contract_violation());
        assert!(!DecideError::Validation(String::new()).is_contract_violation());
        assert!(!DecideError::Config(String::new()).is_contract_violation());
    }
}
