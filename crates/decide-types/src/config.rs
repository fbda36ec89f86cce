// ─────────────────────────────────────────────────────────────────────
// DECIDE Launch Interceptor — Parameters and Input Document
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::decision::{ConditionVector, ConnectorMatrix, LIC_COUNT};
use crate::error::{DecideError, DecideResult};
use crate::point::{validate_numpoints, validate_points, Point};

/// The 19 named thresholds consumed by the Launch Interceptor Conditions.
///
/// Serialized with the classic upper-case names (`LENGTH1`, `Q_PTS`, ...).
/// Every field defaults to zero, matching a freshly constructed engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Parameters {
    /// Length threshold for LIC 0, 7, 12.
    pub length1: f64,

    /// Radius threshold for LIC 1, 8, 13.
    pub radius1: f64,

    /// Angle deviation from π for LIC 2, 9.
    pub epsilon: f64,

    /// Area threshold for LIC 3, 10, 14.
    pub area1: f64,

    /// Line distance threshold for LIC 6.
    pub dist: f64,

    /// Upper length bound for LIC 12.
    pub length2: f64,

    /// Containing radius for LIC 13.
    pub radius2: f64,

    /// Upper area bound for LIC 14.
    pub area2: f64,

    /// Quadrant count LIC 4 must exceed.
    pub quads: usize,

    /// Consecutive points examined by LIC 4.
    pub q_pts: usize,

    /// Consecutive points examined by LIC 6.
    pub n_pts: usize,

    /// Intervening points for LIC 7, 12.
    pub k_pts: usize,

    /// First gap for LIC 8, 13.
    pub a_pts: usize,

    /// Second gap for LIC 8, 13.
    pub b_pts: usize,

    /// First gap for LIC 9.
    pub c_pts: usize,

    /// Second gap for LIC 9.
    pub d_pts: usize,

    /// First gap for LIC 10, 14.
    pub e_pts: usize,

    /// Second gap for LIC 10, 14.
    pub f_pts: usize,

    /// Intervening points for LIC 11.
    pub g_pts: usize,
}

impl Parameters {
    /// Reject non-finite or negative real thresholds.
    ///
    /// The predicates themselves accept any value; this is the gate
    /// applied to externally supplied documents.
    pub fn validate(&self) -> DecideResult<()> {
        let reals = [
            ("LENGTH1", self.length1),
            ("RADIUS1", self.radius1),
            ("EPSILON", self.epsilon),
            ("AREA1", self.area1),
            ("DIST", self.dist),
            ("LENGTH2", self.length2),
            ("RADIUS2", self.radius2),
            ("AREA2", self.area2),
        ];
        for (name, value) in reals {
            if !value.is_finite() {
                return Err(DecideError::Config(format!(
                    "{name} must be finite, got {value}"
                )));
            }
            if value < 0.0 {
                return Err(DecideError::Config(format!(
                    "{name} must be >= 0, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Load from JSON string.
    pub fn from_json(json: &str) -> DecideResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| DecideError::Config(format!("JSON parse error: {e}")))
    }
}

/// Everything a collaborator hands to the engine for one decision.
///
/// `lcm` defaults to all `NOTUSED`, `puv` to all `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecideInput {
    /// Optional explicit NUMPOINTS; must equal `points.len()` when given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numpoints: Option<usize>,
    pub points: Vec<Point>,
    #[serde(default)]
    pub parameters: Parameters,
    #[serde(default)]
    pub lcm: ConnectorMatrix,
    #[serde(default)]
    pub puv: ConditionVector,
}

impl DecideInput {
    pub fn new(points: Vec<Point>, parameters: Parameters) -> Self {
        Self {
            numpoints: None,
            points,
            parameters,
            lcm: Default::default(),
            puv: [false; LIC_COUNT],
        }
    }

    /// Effective NUMPOINTS: explicit value or the point count.
    pub fn numpoints(&self) -> usize {
        self.numpoints.unwrap_or(self.points.len())
    }

    /// Validate shapes and thresholds before handing off to the engine.
    pub fn validate(&self) -> DecideResult<()> {
        let to_config = |e: DecideError| DecideError::Config(e.to_string());
        if let Some(n) = self.numpoints {
            validate_numpoints(n).map_err(to_config)?;
            if n != self.points.len() {
                return Err(DecideError::Config(format!(
                    "numpoints is {n} but {} points were supplied",
                    self.points.len()
                )));
            }
        }
        validate_points(&self.points).map_err(to_config)?;
        self.parameters.validate()
    }

    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> DecideResult<Self> {
        let input: Self = serde_json::from_str(json)
            .map_err(|e| DecideError::Config(format!("JSON parse error: {e}")))?;
        if let Err(e) = input.validate() {
            log::warn!("rejected input document: {e}");
            return Err(e);
        }
        Ok(input)
    }

    pub fn to_json(&self) -> DecideResult<String> {
        serde_json::to_string(self)
            .map_err(|e| DecideError::Config(format!("JSON encode error: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::Connector;

    #[test]
    fn test_parameters_default_all_zero() {
        let p = Parameters::default();
        assert_eq!(p.length1, 0.0);
        assert_eq!(p.g_pts, 0);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_parameters_upper_case_names() {
        let p = Parameters::from_json(r#"{"LENGTH1": 2.5, "Q_PTS": 3, "QUADS": 2}"#).unwrap();
        assert_eq!(p.length1, 2.5);
        assert_eq!(p.q_pts, 3);
        assert_eq!(p.quads, 2);
        assert_eq!(p.radius1, 0.0);
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"G_PTS\":0"));
        assert!(json.contains("\"AREA2\":0.0"));
    }

    #[test]
    fn test_parameters_negative_count_rejected_by_type() {
        assert!(Parameters::from_json(r#"{"K_PTS": -1}"#).is_err());
    }

    #[test]
    fn test_parameters_validate_rejects_negative_real() {
        let p = Parameters {
            radius2: -0.5,
            ..Default::default()
        };
        let err = p.validate().unwrap_err();
        assert!(err.to_string().contains("RADIUS2"));
    }

    #[test]
    fn test_parameters_validate_rejects_nan() {
        let p = Parameters {
            epsilon: f64::NAN,
            ..Default::default()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_input_defaults() {
        let input = DecideInput::from_json(r#"{"points": [[0, 0], [1, 1]]}"#).unwrap();
        assert_eq!(input.numpoints(), 2);
        assert!(input.puv.iter().all(|&b| !b));
        assert!(input
            .lcm
            .iter()
            .all(|row| row.iter().all(|&c| c == Connector::NotUsed)));
    }

    #[test]
    fn test_input_numpoints_mismatch() {
        let err =
            DecideInput::from_json(r#"{"numpoints": 3, "points": [[0, 0], [1, 1]]}"#).unwrap_err();
        assert!(matches!(err, DecideError::Config(_)));
    }

    #[test]
    fn test_input_too_few_points() {
        assert!(DecideInput::from_json(r#"{"points": [[0, 0]]}"#).is_err());
    }

    #[test]
    fn test_input_bad_connector_tag() {
        let mut rows = vec![vec!["NOTUSED"; LIC_COUNT]; LIC_COUNT];
        rows[0][1] = "XOR";
        let json = format!(
            r#"{{"points": [[0, 0], [1, 1]], "lcm": {}}}"#,
            serde_json::to_string(&rows).unwrap()
        );
        assert!(DecideInput::from_json(&json).is_err());
    }

    #[test]
    fn test_input_json_round_trip_keeps_matrix() {
        let mut input = DecideInput::new(
            vec![Point::new(0.0, 0.0), Point::new(4.0, 5.0)],
            Parameters {
                length1: 5.0,
                ..Default::default()
            },
        );
        input.lcm[0][1] = Connector::And;
        input.puv[0] = true;
        let back = DecideInput::from_json(&input.to_json().unwrap()).unwrap();
        assert_eq!(back, input);
    }
}
