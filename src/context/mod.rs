// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context for one run.
//!
//! The context owns everything a search mutates: the queen list, the solution
//! set and the statistics. It borrows the solver's configuration and
//! observers for the duration of the run, so nothing else can touch that
//! state while a search is in flight.
//!
//! ```text
//! SearchContext {
//!     board_size, half_size, mode, display,   // fixed for the run
//!     queens: QueenList,                      // mutated in place
//!     solutions: SolutionSet,                 // grows as solutions are accepted
//!     statistics: Statistics,
//!     cancellation: CancellationToken,        // polled once per frame
//!     observers: &mut CompositeObserver,      // Visualize only
//! }
//! ```

use crate::board::{BoardSize, QueenList};
use crate::config::SolverConfig;
use crate::engine::{CancellationToken, DisplayMode, SolutionMode};
use crate::observer::{progress_percent, CompositeObserver, SolverObserver};
use crate::state::{Counters, Offer, SolutionSet, Statistics};
use std::time::Duration;

pub struct SearchContext<'a> {
    pub board_size: BoardSize,
    pub half_size: i8,
    pub mode: SolutionMode,
    pub display: DisplayMode,
    pub queens: QueenList,
    pub solutions: SolutionSet,
    pub statistics: Statistics,
    cancellation: CancellationToken,
    observers: &'a mut CompositeObserver,
    delay: Duration,
    cancelled: bool,
    stopped_early: bool,
}

impl<'a> SearchContext<'a> {
    pub fn new(
        board_size: BoardSize,
        mode: SolutionMode,
        display: DisplayMode,
        config: &SolverConfig,
        cancellation: CancellationToken,
        observers: &'a mut CompositeObserver,
    ) -> Self {
        Self {
            board_size,
            half_size: board_size.half_size(),
            mode,
            display,
            queens: QueenList::new(board_size),
            solutions: SolutionSet::new(config.max_stored_solutions),
            statistics: Statistics::new(),
            cancellation,
            observers,
            delay: config.delay(),
            cancelled: false,
            stopped_early: false,
        }
    }

    /// Poll the cancellation token, remembering a positive answer.
    pub fn check_cancelled(&mut self) -> bool {
        if !self.cancelled && self.cancellation.is_cancelled() {
            log::debug!("search cancelled at {}", self.queens);
            self.cancelled = true;
        }
        self.cancelled
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Apply the mode's early-stop predicate.
    ///
    /// The first time Unique mode stops, a final progress event is emitted.
    pub fn check_early_stop(&mut self) -> bool {
        let stop = self
            .mode
            .should_stop(&self.queens, self.half_size, self.solutions.len());
        if stop && !self.stopped_early {
            self.stopped_early = true;
            if self.mode == SolutionMode::Unique {
                log::debug!(
                    "leading column reached half size {}, remaining placements are mirror images",
                    self.half_size
                );
                self.report_progress();
            }
        }
        stop
    }

    /// Emit a queen-placed event and pause. No-op for hidden runs.
    pub fn visualize_step(&mut self) {
        if !self.display.is_visualized() {
            return;
        }
        self.statistics
            .increment_counter(Counters::VisualizationSteps);
        self.observers.on_queen_placed(self.queens.as_slice());
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }

    /// Hand the complete assignment to the mode's acceptance policy.
    pub fn accept_solution(&mut self) {
        debug_assert!(self.queens.is_complete_solution());
        self.statistics.increment_counter(Counters::SolutionsFound);
        let offer = self.solutions.offer(self.mode, self.queens.as_slice());
        match offer {
            Offer::Stored => self.statistics.increment_counter(Counters::SolutionsStored),
            Offer::Counted => {}
            Offer::Duplicate => {
                self.statistics
                    .increment_counter(Counters::SymmetricDuplicates);
                return;
            }
        }
        log::trace!("accepted solution {}", self.queens);
        if self.display.is_visualized() {
            self.observers.on_solution_found(self.queens.as_slice());
            self.report_progress();
        }
    }

    fn report_progress(&mut self) {
        if self.display.is_visualized() {
            let percent = progress_percent(self.queens.get(0), self.half_size);
            self.observers.on_progress_changed(percent);
        }
    }
}
