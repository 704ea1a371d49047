//! Python bindings for the draughts engine.
//!
//! This module provides PyO3 bindings for driving games and gym-style
//! environments from Python training code.
//!
//! # Quick Start
//!
//! ```python
//! import rust_draughts as draughts
//!
//! env = draughts.CheckersEnv(seed=42)
//! obs = env.reset()
//! done = False
//! while not done:
//!     action = env.sample_legal_action()
//!     obs, reward, done, report = env.step(action)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_env;

pub use py_core::*;
pub use py_env::*;

/// rust-draughts: a checkers rules engine for RL training.
///
/// This module provides:
/// - Game: the rules engine with select/commit and typed rejections
/// - CheckersEnv: a gym-style environment over integer action ids
#[pymodule]
fn rust_draughts(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGame>()?;
    m.add_class::<PyCheckersEnv>()?;
    m.add("ACTION_SPACE", crate::nn::ACTION_SPACE)?;
    m.add("GRID_SIZE", crate::nn::GRID_SIZE)?;
    Ok(())
}
