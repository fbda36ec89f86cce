// ─────────────────────────────────────────────────────────────────────
// DECIDE Launch Interceptor — Decision Engine (CMV → PUM → FUV → LAUNCH)
// ─────────────────────────────────────────────────────────────────────
//! Holds one point configuration and turns it into a launch verdict.
//!
//! Lifecycle:
//! - NUMPOINTS is write-once. Setting POINTS first fixes it from the
//!   sequence length; a second assignment is a contract violation.
//! - Assignments are validated before anything is stored, so a rejected
//!   assignment leaves the engine exactly as it was.
//! - `decide()` recomputes CMV, PUM and FUV from scratch on every call.

use decide_types::point::{validate_numpoints, validate_points};
use decide_types::{
    ConditionVector, Connector, ConnectorMatrix, DecideError, DecideInput, DecideResult,
    DecisionReport, Launch, Parameters, Point, UnlockingMatrix, LIC_COUNT,
};

use crate::lic::Lic;

/// Where the engine is in its configure → decide lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// NUMPOINTS not fixed yet.
    Unconfigured,
    /// NUMPOINTS fixed; no decision since the last change.
    Configured,
    /// CMV/PUM/FUV/LAUNCH reflect the current configuration.
    Decided,
}

/// The DECIDE launch interceptor.
#[derive(Debug, Clone)]
pub struct Decide {
    numpoints: Option<usize>,
    points: Vec<Point>,
    parameters: Parameters,
    lcm: ConnectorMatrix,
    puv: ConditionVector,
    cmv: ConditionVector,
    pum: UnlockingMatrix,
    fuv: ConditionVector,
    launch: Launch,
    decided: bool,
}

impl Default for Decide {
    fn default() -> Self {
        Self {
            numpoints: None,
            points: Vec::new(),
            parameters: Parameters::default(),
            lcm: [[Connector::NotUsed; LIC_COUNT]; LIC_COUNT],
            puv: [false; LIC_COUNT],
            cmv: [false; LIC_COUNT],
            pum: [[true; LIC_COUNT]; LIC_COUNT],
            fuv: [false; LIC_COUNT],
            launch: Launch::No,
            decided: false,
        }
    }
}

impl Decide {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a fully configured engine from a validated input document.
    pub fn from_input(input: &DecideInput) -> DecideResult<Self> {
        input.validate()?;
        let mut engine = Self::new();
        if let Some(n) = input.numpoints {
            engine.set_numpoints(n)?;
        }
        engine.set_points(input.points.clone())?;
        engine.set_parameters(input.parameters.clone());
        engine.set_lcm(input.lcm);
        engine.set_puv(input.puv);
        Ok(engine)
    }

    // ── Configuration ─────────────────────────────────────────────

    /// Fix NUMPOINTS. Only the first call can succeed.
    pub fn set_numpoints(&mut self, numpoints: usize) -> DecideResult<()> {
        if let Some(current) = self.numpoints {
            log::warn!("rejected NUMPOINTS={numpoints}: already fixed at {current}");
            return Err(DecideError::Contract(
                "NUMPOINTS is immutable and cannot be changed after it is set".to_string(),
            ));
        }
        if let Err(e) = validate_numpoints(numpoints) {
            log::warn!("rejected NUMPOINTS: {e}");
            return Err(e);
        }
        self.numpoints = Some(numpoints);
        self.decided = false;
        Ok(())
    }

    /// Replace POINTS. Fixes NUMPOINTS from the length if it is unset.
    pub fn set_points(&mut self, points: Vec<Point>) -> DecideResult<()> {
        if let Err(e) = self.check_points(&points) {
            log::warn!("rejected POINTS: {e}");
            return Err(e);
        }
        if self.numpoints.is_none() {
            self.numpoints = Some(points.len());
        }
        self.points = points;
        self.decided = false;
        Ok(())
    }

    fn check_points(&self, points: &[Point]) -> DecideResult<()> {
        if let Some((i, p)) = points.iter().enumerate().find(|(_, p)| !p.is_finite()) {
            return Err(DecideError::Validation(format!(
                "POINTS must contain only finite coordinates, point {i} is {p}"
            )));
        }
        if let Some(n) = self.numpoints {
            if points.len() != n {
                return Err(DecideError::Validation(format!(
                    "POINTS must have the same length as NUMPOINTS ({n}), got {}",
                    points.len()
                )));
            }
        }
        validate_points(points)
    }

    pub fn set_parameters(&mut self, parameters: Parameters) {
        self.parameters = parameters;
        self.decided = false;
    }

    /// Mutable access to the thresholds for field-by-field tuning.
    pub fn parameters_mut(&mut self) -> &mut Parameters {
        self.decided = false;
        &mut self.parameters
    }

    pub fn set_lcm(&mut self, lcm: ConnectorMatrix) {
        self.lcm = lcm;
        self.decided = false;
    }

    /// Set one LCM cell.
    pub fn set_connector(&mut self, i: usize, j: usize, connector: Connector) -> DecideResult<()> {
        check_index("LCM row", i)?;
        check_index("LCM column", j)?;
        self.lcm[i][j] = connector;
        self.decided = false;
        Ok(())
    }

    pub fn set_puv(&mut self, puv: ConditionVector) {
        self.puv = puv;
        self.decided = false;
    }

    /// Set one PUV entry.
    pub fn set_puv_entry(&mut self, i: usize, active: bool) -> DecideResult<()> {
        check_index("PUV", i)?;
        self.puv[i] = active;
        self.decided = false;
        Ok(())
    }

    // ── Pipeline ──────────────────────────────────────────────────

    /// Evaluate LIC 0..14 in order into the CMV.
    pub fn calculate_cmv(&mut self) {
        for lic in Lic::ALL {
            let met = lic.evaluate(&self.points, &self.parameters);
            log::debug!("{} ({}): {met}", lic.name(), lic.description());
            self.cmv[lic.index()] = met;
        }
    }

    /// Combine CMV pairs through the LCM into the PUM.
    pub fn calculate_pum(&mut self) {
        for i in 0..LIC_COUNT {
            for j in 0..LIC_COUNT {
                self.pum[i][j] = self.lcm[i][j].apply(self.cmv[i], self.cmv[j]);
            }
        }
    }

    /// Gate PUM rows by the PUV into the FUV.
    pub fn calculate_fuv(&mut self) {
        for i in 0..LIC_COUNT {
            self.fuv[i] = !self.puv[i] || self.pum[i].iter().all(|&unlocked| unlocked);
        }
    }

    /// Run CMV → PUM → FUV and return the launch verdict.
    pub fn decide(&mut self) -> Launch {
        if self.numpoints.is_none() {
            log::warn!("decide() called before POINTS were configured");
        }
        self.calculate_cmv();
        self.calculate_pum();
        self.calculate_fuv();

        self.launch = Launch::from_unlocked(self.fuv.iter().all(|&unlocked| unlocked));
        self.decided = true;

        let met = self.cmv.iter().filter(|&&m| m).count();
        log::info!(
            "LAUNCH {}: {met}/{LIC_COUNT} conditions met over {} points",
            self.launch,
            self.points.len()
        );
        self.launch
    }

    // ── Accessors ─────────────────────────────────────────────────

    pub fn state(&self) -> EngineState {
        match (self.numpoints, self.decided) {
            (None, _) => EngineState::Unconfigured,
            (Some(_), false) => EngineState::Configured,
            (Some(_), true) => EngineState::Decided,
        }
    }

    pub fn numpoints(&self) -> Option<usize> {
        self.numpoints
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn lcm(&self) -> &ConnectorMatrix {
        &self.lcm
    }

    pub fn puv(&self) -> &ConditionVector {
        &self.puv
    }

    pub fn cmv(&self) -> &ConditionVector {
        &self.cmv
    }

    pub fn pum(&self) -> &UnlockingMatrix {
        &self.pum
    }

    pub fn fuv(&self) -> &ConditionVector {
        &self.fuv
    }

    /// Result of the last `decide()`; `NO` before the first one.
    pub fn launch(&self) -> Launch {
        self.launch
    }

    /// Snapshot of the last decision, if it is still current.
    pub fn report(&self) -> Option<DecisionReport> {
        if !self.decided {
            return None;
        }
        Some(DecisionReport {
            numpoints: self.points.len(),
            cmv: self.cmv,
            pum: self.pum,
            fuv: self.fuv,
            launch: self.launch,
        })
    }
}

fn check_index(what: &str, i: usize) -> DecideResult<()> {
    if i >= LIC_COUNT {
        return Err(DecideError::Validation(format!(
            "{what} index must be < {LIC_COUNT}, got {i}"
        )));
    }
    Ok(())
}
