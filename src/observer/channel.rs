// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use crate::observer::{SolverEvent, SolverObserver};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Sends each event as a `SolverEvent` over an unbounded channel.
///
/// Sending never blocks the search. Once the receiver is dropped, events are
/// discarded.
///
/// ```
/// use nqueen_search::observer::{ChannelObserver, SolverEvent, SolverObserver};
///
/// let (mut observer, mut events) = ChannelObserver::channel();
/// observer.on_progress_changed(50.0);
/// assert_eq!(events.try_recv().unwrap(), SolverEvent::ProgressChanged(50.0));
/// ```
#[derive(Debug)]
pub struct ChannelObserver {
    sender: UnboundedSender<SolverEvent>,
}

impl ChannelObserver {
    pub fn new(sender: UnboundedSender<SolverEvent>) -> Self {
        Self { sender }
    }

    /// An observer together with the receiving end of its channel.
    pub fn channel() -> (Self, UnboundedReceiver<SolverEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self::new(sender), receiver)
    }

    fn send(&self, event: SolverEvent) {
        if self.sender.send(event).is_err() {
            log::trace!("event receiver dropped");
        }
    }
}

impl SolverObserver for ChannelObserver {
    fn name(&self) -> &str {
        "ChannelObserver"
    }

    fn on_queen_placed(&mut self, queens: &[i8]) {
        self.send(SolverEvent::QueenPlaced(queens.to_vec()));
    }

    fn on_solution_found(&mut self, queens: &[i8]) {
        self.send(SolverEvent::SolutionFound(queens.to_vec()));
    }

    fn on_progress_changed(&mut self, percent: f64) {
        self.send(SolverEvent::ProgressChanged(percent));
    }
}
