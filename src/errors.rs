// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the solver.
//!
//! Cancellation is not an error: a cancelled search still produces a
//! partial `SimulationResults`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur before or around a search.
#[derive(Debug, Error)]
pub enum SolveError {
    /// Board size outside `1..=127`. Raised before any search state exists.
    #[error("invalid board size {0}: must be between 1 and {max}", max = crate::board::MAX_BOARD_SIZE)]
    InvalidBoardSize(i64),

    /// A configuration file exists but could not be read.
    #[error("failed to read config file {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration text is not valid TOML for `SolverConfig`.
    #[error("failed to parse solver config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The blocking task running an async search panicked or was aborted.
    #[error("search task failed: {0}")]
    TaskFailed(String),
}

pub type Result<T> = std::result::Result<T, SolveError>;
