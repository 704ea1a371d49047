//! Environment bindings for Python.

use numpy::PyArray2;
use pyo3::prelude::*;

use crate::env::CheckersEnv;

use super::py_core::observation_to_numpy;

/// Python wrapper for the gym-style environment.
///
/// Actions are integer ids in [0, 4096): `from_index * 64 + to_index`
/// with `index = file * 8 + rank`. Illegal actions are not applied;
/// they return a shaping penalty and an unchanged observation.
#[pyclass(name = "CheckersEnv")]
pub struct PyCheckersEnv {
    inner: CheckersEnv,
}

#[pymethods]
impl PyCheckersEnv {
    /// Create an environment with a deterministic RNG seed.
    #[new]
    #[pyo3(signature = (seed = 42))]
    fn new(seed: u64) -> Self {
        Self {
            inner: CheckersEnv::new(seed),
        }
    }

    /// Restart the game and return the initial observation.
    fn reset<'py>(&mut self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u8>>> {
        let obs = self.inner.reset();
        observation_to_numpy(py, &obs)
    }

    /// Attempt an action.
    ///
    /// Returns (observation, reward, done, report) where report is one
    /// of "applied_simple", "applied_capture", "rejected_illegal",
    /// "rejected_mandatory_capture".
    fn step<'py>(
        &mut self,
        py: Python<'py>,
        action: usize,
    ) -> PyResult<(Bound<'py, PyArray2<u8>>, f32, bool, String)> {
        let report = self.inner.step(action);
        Ok((
            observation_to_numpy(py, &report.observation)?,
            report.reward,
            report.done,
            report.report.as_str().to_string(),
        ))
    }

    /// The current observation without stepping.
    fn observation<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u8>>> {
        observation_to_numpy(py, &self.inner.observation())
    }

    /// A uniformly random action id from the whole action space.
    fn sample_action(&mut self) -> usize {
        self.inner.sample_action()
    }

    /// A uniformly random legal action id, or None when the game is
    /// over.
    fn sample_legal_action(&mut self) -> Option<usize> {
        self.inner.sample_legal_action()
    }

    /// All currently legal action ids.
    fn legal_action_ids(&self) -> Vec<usize> {
        self.inner.legal_action_ids()
    }

    /// The side to move: "light" or "dark".
    #[getter]
    fn turn(&self) -> String {
        self.inner.game().current_turn().to_string()
    }

    /// The winner, "light" or "dark", or None while the game runs.
    fn winner(&self) -> Option<String> {
        self.inner.game().winner().map(|w| w.to_string())
    }

    fn __repr__(&self) -> String {
        format!(
            "CheckersEnv(turn={}, round={}, done={})",
            self.inner.game().current_turn(),
            self.inner.game().round(),
            self.inner.game().winner().is_some(),
        )
    }
}
