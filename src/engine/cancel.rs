// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cooperative cancellation.
//!
//! The search polls the token once per frame; setting it never interrupts a
//! frame already running.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A shared flag that asks a running search to stop.
///
/// Clones share the same flag, so a caller keeps one clone and the solver
/// another.
///
/// ```
/// use nqueen_search::engine::CancellationToken;
///
/// let token = CancellationToken::new();
/// let handle = token.clone();
/// assert!(!token.is_cancelled());
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
