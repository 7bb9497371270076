// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solver configuration.
//!
//! ```
//! use nqueen_search::config::SolverConfig;
//!
//! let config = SolverConfig::from_toml_str("delay_milliseconds = 250").unwrap();
//! assert_eq!(config.delay_milliseconds, 250);
//! assert_eq!(config.max_stored_solutions, 1000);
//! ```

use crate::errors::{Result, SolveError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default All-mode storage cap.
pub const DEFAULT_MAX_STORED_SOLUTIONS: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolverConfig {
    /// Pause after each queen-placed event while visualizing. Ignored for
    /// hidden runs.
    #[serde(default)]
    pub delay_milliseconds: u64,

    /// All mode stores at most this many solutions. The reported total is
    /// not capped.
    #[serde(default = "default_max_stored_solutions")]
    pub max_stored_solutions: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            delay_milliseconds: 0,
            max_stored_solutions: default_max_stored_solutions(),
        }
    }
}

impl SolverConfig {
    pub fn with_delay_milliseconds(mut self, delay_milliseconds: u64) -> Self {
        self.delay_milliseconds = delay_milliseconds;
        self
    }

    pub fn with_max_stored_solutions(mut self, max_stored_solutions: usize) -> Self {
        self.max_stored_solutions = max_stored_solutions;
        self
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_milliseconds)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config file. A missing file yields the defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no solver config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| SolveError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

fn default_max_stored_solutions() -> usize {
    DEFAULT_MAX_STORED_SOLUTIONS
}
