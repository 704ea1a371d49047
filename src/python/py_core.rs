//! Game bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{GameError, Position};
use crate::nn::Observation;
use crate::rules::Game;

pub(crate) fn to_py_err(err: GameError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub(crate) fn observation_to_numpy<'py>(
    py: Python<'py>,
    obs: &Observation,
) -> PyResult<Bound<'py, PyArray2<u8>>> {
    let flat: Vec<u8> = obs.iter().flatten().copied().collect();
    PyArray1::from_vec_bound(py, flat)
        .reshape([8, 8])
        .map_err(|e| PyValueError::new_err(format!("{e}")))
}

/// Python wrapper for the rules engine.
#[pyclass(name = "Game")]
pub struct PyGame {
    inner: Game,
}

#[pymethods]
impl PyGame {
    /// Create a fresh game with the standard setup. Light moves first.
    #[new]
    fn new() -> Self {
        Self { inner: Game::new() }
    }

    /// Restart with the standard setup.
    fn reset(&mut self) {
        self.inner.reset();
    }

    /// Select the piece at (file, rank) for the side to move.
    ///
    /// Raises ValueError on empty squares, opponent pieces, or
    /// out-of-bounds coordinates.
    fn select(&mut self, file: i8, rank: i8) -> PyResult<()> {
        self.inner
            .select(Position::new(file, rank))
            .map_err(to_py_err)
    }

    /// Apply the move (from -> to).
    ///
    /// Returns (kind, chained, promoted) where kind is "simple" or
    /// "capture". Raises ValueError for any rejected move.
    fn commit(&mut self, from: (i8, i8), to: (i8, i8)) -> PyResult<(String, bool, bool)> {
        let outcome = self
            .inner
            .commit(Position::new(from.0, from.1), Position::new(to.0, to.1))
            .map_err(to_py_err)?;
        let kind = match outcome.kind {
            crate::core::MoveKind::Simple => "simple",
            crate::core::MoveKind::Capture => "capture",
        };
        Ok((kind.to_string(), outcome.chained, outcome.promoted))
    }

    /// Legal destinations for the piece at (file, rank).
    fn legal_moves(&self, file: i8, rank: i8) -> PyResult<Vec<(i8, i8)>> {
        let dests = self
            .inner
            .legal_moves(Position::new(file, rank))
            .map_err(to_py_err)?;
        Ok(dests.into_iter().map(|p| (p.file, p.rank)).collect())
    }

    /// Every legal (from, to) pair for the side to move, with the
    /// board-wide mandatory-capture rule applied.
    fn legal_actions(&self) -> Vec<((i8, i8), (i8, i8))> {
        self.inner
            .legal_actions()
            .into_iter()
            .map(|mv| ((mv.from.file, mv.from.rank), (mv.to.file, mv.to.rank)))
            .collect()
    }

    /// The side to move: "light" or "dark".
    #[getter]
    fn turn(&self) -> String {
        self.inner.current_turn().to_string()
    }

    /// Round counter, starting at 1.
    #[getter]
    fn round(&self) -> u32 {
        self.inner.round()
    }

    /// The winner, "light" or "dark", or None while the game runs.
    fn winner(&self) -> Option<String> {
        self.inner.winner().map(|w| w.to_string())
    }

    /// The board as an 8x8 numpy array: 0 empty, 1 light man, 2 dark
    /// man, +2 for kings. Indexed [file, rank].
    fn observation<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u8>>> {
        observation_to_numpy(py, &self.inner.board_snapshot())
    }

    fn __repr__(&self) -> String {
        format!(
            "Game(turn={}, round={}, winner={:?})",
            self.inner.current_turn(),
            self.inner.round(),
            self.inner.winner().map(|w| w.to_string()),
        )
    }
}
