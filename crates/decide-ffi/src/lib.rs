// ─────────────────────────────────────────────────────────────────────
// DECIDE Launch Interceptor — PyO3 FFI Bindings
// (C) 2026 The DECIDE Launch Interceptor contributors.
// License: GNU AGPL v3
// ─────────────────────────────────────────────────────────────────────
// Note: #[deny(unsafe_code)] not applied: PyO3 proc macros generate
// unsafe blocks internally. All hand-written code in this crate is safe.
//! Python-callable wrappers around the DECIDE engine.
//!
//! Exposes `Parameters`, `Decide`, and `lic_check` to Python via PyO3.
//!
//! # Error mapping
//!
//! - NUMPOINTS reassignment → `AttributeError`.
//! - Rejected values (bad counts, non-finite points, unknown connector
//!   tags, out-of-range indices, invalid documents) → `ValueError`.
//!
//! Install: `pip install -e crates/decide-ffi` (requires maturin).
//!
//! Usage from Python:
//! ```python
//! from decide_kernel import Decide, Parameters
//!
//! d = Decide()
//! d.points = [(0.0, 0.0), (4.0, 5.0)]
//! d.parameters = Parameters(length1=5.0)
//! d.set_connector(0, 0, "ANDD")
//! d.set_puv_entry(0, True)
//! assert d.decide() == "YES"
//! ```

use std::str::FromStr;

use pyo3::exceptions::{PyAttributeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use decide_core::{Decide, EngineState, Lic};
use decide_types::point::points_from_pairs;
use decide_types::{
    Connector, ConnectorMatrix, DecideError, DecideInput, Parameters, Point, LIC_COUNT,
};

fn to_py_err(err: DecideError) -> PyErr {
    if err.is_contract_violation() {
        PyAttributeError::new_err(err.to_string())
    } else {
        PyValueError::new_err(err.to_string())
    }
}

fn pairs(points: &[Point]) -> Vec<(f64, f64)> {
    points.iter().map(|&p| p.into()).collect()
}

// ─── PyParameters ───────────────────────────────────────────────────

/// Python-visible LIC thresholds. Attribute names are the lower-case
/// forms of `LENGTH1`, `Q_PTS`, ...
#[pyclass(name = "Parameters", get_all, set_all)]
#[derive(Clone, Default)]
struct PyParameters {
    length1: f64,
    radius1: f64,
    epsilon: f64,
    area1: f64,
    dist: f64,
    length2: f64,
    radius2: f64,
    area2: f64,
    quads: usize,
    q_pts: usize,
    n_pts: usize,
    k_pts: usize,
    a_pts: usize,
    b_pts: usize,
    c_pts: usize,
    d_pts: usize,
    e_pts: usize,
    f_pts: usize,
    g_pts: usize,
}

impl From<&PyParameters> for Parameters {
    fn from(p: &PyParameters) -> Self {
        Parameters {
            length1: p.length1,
            radius1: p.radius1,
            epsilon: p.epsilon,
            area1: p.area1,
            dist: p.dist,
            length2: p.length2,
            radius2: p.radius2,
            area2: p.area2,
            quads: p.quads,
            q_pts: p.q_pts,
            n_pts: p.n_pts,
            k_pts: p.k_pts,
            a_pts: p.a_pts,
            b_pts: p.b_pts,
            c_pts: p.c_pts,
            d_pts: p.d_pts,
            e_pts: p.e_pts,
            f_pts: p.f_pts,
            g_pts: p.g_pts,
        }
    }
}

impl From<&Parameters> for PyParameters {
    fn from(p: &Parameters) -> Self {
        PyParameters {
            length1: p.length1,
            radius1: p.radius1,
            epsilon: p.epsilon,
            area1: p.area1,
            dist: p.dist,
            length2: p.length2,
            radius2: p.radius2,
            area2: p.area2,
            quads: p.quads,
            q_pts: p.q_pts,
            n_pts: p.n_pts,
            k_pts: p.k_pts,
            a_pts: p.a_pts,
            b_pts: p.b_pts,
            c_pts: p.c_pts,
            d_pts: p.d_pts,
            e_pts: p.e_pts,
            f_pts: p.f_pts,
            g_pts: p.g_pts,
        }
    }
}

#[pymethods]
impl PyParameters {
    #[new]
    #[pyo3(signature = (
        *,
        length1 = 0.0,
        radius1 = 0.0,
        epsilon = 0.0,
        area1 = 0.0,
        dist = 0.0,
        length2 = 0.0,
        radius2 = 0.0,
        area2 = 0.0,
        quads = 0,
        q_pts = 0,
        n_pts = 0,
        k_pts = 0,
        a_pts = 0,
        b_pts = 0,
        c_pts = 0,
        d_pts = 0,
        e_pts = 0,
        f_pts = 0,
        g_pts = 0,
    ))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        length1: f64,
        radius1: f64,
        epsilon: f64,
        area1: f64,
        dist: f64,
        length2: f64,
        radius2: f64,
        area2: f64,
        quads: usize,
        q_pts: usize,
        n_pts: usize,
        k_pts: usize,
        a_pts: usize,
        b_pts: usize,
        c_pts: usize,
        d_pts: usize,
        e_pts: usize,
        f_pts: usize,
        g_pts: usize,
    ) -> Self {
        Self {
            length1,
            radius1,
            epsilon,
            area1,
            dist,
            length2,
            radius2,
            area2,
            quads,
            q_pts,
            n_pts,
            k_pts,
            a_pts,
            b_pts,
            c_pts,
            d_pts,
            e_pts,
            f_pts,
            g_pts,
        }
    }

    /// Construct from a JSON object keyed `LENGTH1`, `Q_PTS`, ...
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let params = Parameters::from_json(json).map_err(to_py_err)?;
        params.validate().map_err(to_py_err)?;
        Ok(Self::from(&params))
    }

    fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let p = Parameters::from(self);
        let dict = PyDict::new(py);
        dict.set_item("LENGTH1", p.length1)?;
        dict.set_item("RADIUS1", p.radius1)?;
        dict.set_item("EPSILON", p.epsilon)?;
        dict.set_item("AREA1", p.area1)?;
        dict.set_item("Q_PTS", p.q_pts)?;
        dict.set_item("QUADS", p.quads)?;
        dict.set_item("DIST", p.dist)?;
        dict.set_item("N_PTS", p.n_pts)?;
        dict.set_item("K_PTS", p.k_pts)?;
        dict.set_item("A_PTS", p.a_pts)?;
        dict.set_item("B_PTS", p.b_pts)?;
        dict.set_item("C_PTS", p.c_pts)?;
        dict.set_item("D_PTS", p.d_pts)?;
        dict.set_item("E_PTS", p.e_pts)?;
        dict.set_item("F_PTS", p.f_pts)?;
        dict.set_item("G_PTS", p.g_pts)?;
        dict.set_item("LENGTH2", p.length2)?;
        dict.set_item("RADIUS2", p.radius2)?;
        dict.set_item("AREA2", p.area2)?;
        Ok(dict)
    }

    fn __repr__(&self) -> String {
        format!(
            "Parameters(length1={}, radius1={}, epsilon={}, area1={}, length2={}, radius2={}, area2={})",
            self.length1, self.radius1, self.epsilon, self.area1, self.length2, self.radius2, self.area2
        )
    }
}

// ─── PyDecide ───────────────────────────────────────────────────────

/// Python-visible launch interceptor.
#[pyclass(name = "Decide")]
struct PyDecide {
    inner: Decide,
}

#[pymethods]
impl PyDecide {
    #[new]
    fn new() -> Self {
        Self {
            inner: Decide::new(),
        }
    }

    /// Build a configured engine from a JSON input document.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let input = DecideInput::from_json(json).map_err(to_py_err)?;
        let inner = Decide::from_input(&input).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    #[getter]
    fn numpoints(&self) -> Option<usize> {
        self.inner.numpoints()
    }

    /// Write-once. Negative values are rejected like any other out-of-range count.
    #[setter]
    fn set_numpoints(&mut self, value: i64) -> PyResult<()> {
        let n = usize::try_from(value).map_err(|_| {
            PyValueError::new_err(format!(
                "NUMPOINTS must be an integer between 2 and 100, got {value}"
            ))
        })?;
        self.inner.set_numpoints(n).map_err(to_py_err)
    }

    #[getter]
    fn points(&self) -> Vec<(f64, f64)> {
        pairs(self.inner.points())
    }

    #[setter]
    fn set_points(&mut self, value: Vec<(f64, f64)>) -> PyResult<()> {
        self.inner
            .set_points(points_from_pairs(&value))
            .map_err(to_py_err)
    }

    #[getter]
    fn parameters(&self) -> PyParameters {
        PyParameters::from(self.inner.parameters())
    }

    #[setter]
    fn set_parameters(&mut self, value: PyParameters) {
        self.inner.set_parameters(Parameters::from(&value));
    }

    /// Set one LCM cell from its tag: `"ANDD"`, `"ORR"`, or `"NOTUSED"`.
    fn set_connector(&mut self, i: usize, j: usize, connector: &str) -> PyResult<()> {
        let connector = Connector::from_str(connector).map_err(to_py_err)?;
        self.inner.set_connector(i, j, connector).map_err(to_py_err)
    }

    /// Replace the whole LCM from a 15×15 nested list of tags.
    fn set_lcm(&mut self, lcm: Vec<Vec<String>>) -> PyResult<()> {
        if lcm.len() != LIC_COUNT || lcm.iter().any(|row| row.len() != LIC_COUNT) {
            return Err(PyValueError::new_err(format!(
                "LCM must be a {LIC_COUNT}x{LIC_COUNT} matrix"
            )));
        }
        let mut matrix: ConnectorMatrix = Default::default();
        for (i, row) in lcm.iter().enumerate() {
            for (j, tag) in row.iter().enumerate() {
                matrix[i][j] = Connector::from_str(tag).map_err(to_py_err)?;
            }
        }
        self.inner.set_lcm(matrix);
        Ok(())
    }

    #[getter]
    fn lcm(&self) -> Vec<Vec<&'static str>> {
        self.inner
            .lcm()
            .iter()
            .map(|row| row.iter().map(|c| c.as_str()).collect())
            .collect()
    }

    fn set_puv(&mut self, puv: Vec<bool>) -> PyResult<()> {
        let puv: [bool; LIC_COUNT] = puv.try_into().map_err(|v: Vec<bool>| {
            PyValueError::new_err(format!(
                "PUV must have {LIC_COUNT} entries, got {}",
                v.len()
            ))
        })?;
        self.inner.set_puv(puv);
        Ok(())
    }

    fn set_puv_entry(&mut self, i: usize, active: bool) -> PyResult<()> {
        self.inner.set_puv_entry(i, active).map_err(to_py_err)
    }

    #[getter]
    fn puv(&self) -> Vec<bool> {
        self.inner.puv().to_vec()
    }

    /// Run CMV → PUM → FUV and return `"YES"` or `"NO"`.
    fn decide(&mut self) -> &'static str {
        self.inner.decide().as_str()
    }

    #[getter]
    fn launch(&self) -> &'static str {
        self.inner.launch().as_str()
    }

    #[getter]
    fn cmv(&self) -> Vec<bool> {
        self.inner.cmv().to_vec()
    }

    #[getter]
    fn pum(&self) -> Vec<Vec<bool>> {
        self.inner.pum().iter().map(|row| row.to_vec()).collect()
    }

    #[getter]
    fn fuv(&self) -> Vec<bool> {
        self.inner.fuv().to_vec()
    }

    #[getter]
    fn state(&self) -> &'static str {
        match self.inner.state() {
            EngineState::Unconfigured => "UNCONFIGURED",
            EngineState::Configured => "CONFIGURED",
            EngineState::Decided => "DECIDED",
        }
    }

    /// Last decision as a dict, or `None` if the configuration changed since.
    fn report<'py>(&self, py: Python<'py>) -> PyResult<Option<Bound<'py, PyDict>>> {
        let Some(report) = self.inner.report() else {
            return Ok(None);
        };
        let dict = PyDict::new(py);
        dict.set_item("numpoints", report.numpoints)?;
        dict.set_item("cmv", report.cmv.to_vec())?;
        dict.set_item("fuv", report.fuv.to_vec())?;
        dict.set_item("launch", report.launch.as_str())?;
        dict.set_item("conditions_met", report.conditions_met())?;
        dict.set_item("blocking_rows", report.blocking_rows())?;
        Ok(Some(dict))
    }

    fn __repr__(&self) -> String {
        format!(
            "Decide(numpoints={:?}, state={}, launch={})",
            self.inner.numpoints(),
            self.state(),
            self.inner.launch()
        )
    }
}

// ─── Standalone predicates ──────────────────────────────────────────

/// Evaluate a single LIC by index over `points`.
#[pyfunction]
#[pyo3(signature = (index, points, parameters = None))]
fn lic_check(
    index: usize,
    points: Vec<(f64, f64)>,
    parameters: Option<PyParameters>,
) -> PyResult<bool> {
    let lic = Lic::from_index(index).ok_or_else(|| {
        PyValueError::new_err(format!("LIC index must be < {LIC_COUNT}, got {index}"))
    })?;
    let params = parameters
        .as_ref()
        .map(Parameters::from)
        .unwrap_or_default();
    Ok(lic.evaluate(&points_from_pairs(&points), &params))
}

// ─── Module Registration ────────────────────────────────────────────

/// DECIDE launch interceptor, Rust core.
///
/// - `Parameters`: the 19 LIC thresholds
/// - `Decide`: configuration, decision, CMV/PUM/FUV inspection
/// - `lic_check`: evaluate one condition in isolation
#[pymodule]
fn decide_kernel(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyParameters>()?;
    m.add_class::<PyDecide>()?;
    m.add_function(wrap_pyfunction!(lic_check, m)?)?;
    Ok(())
}
