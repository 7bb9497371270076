// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use crate::observer::SolverObserver;

/// Forwards every event to each observer in registration order.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Box<dyn SolverObserver>>,
}

impl std::fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = self
            .observers
            .iter()
            .map(|observer| observer.name())
            .collect::<Vec<&str>>()
            .join(", ");
        f.debug_struct("CompositeObserver")
            .field("observers", &names)
            .finish()
    }
}

impl CompositeObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_observer<O>(&mut self, observer: O)
    where
        O: SolverObserver + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl FromIterator<Box<dyn SolverObserver>> for CompositeObserver {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn SolverObserver>>,
    {
        Self {
            observers: iter.into_iter().collect(),
        }
    }
}

impl SolverObserver for CompositeObserver {
    fn name(&self) -> &str {
        "CompositeObserver"
    }

    fn on_queen_placed(&mut self, queens: &[i8]) {
        for observer in &mut self.observers {
            observer.on_queen_placed(queens);
        }
    }

    fn on_solution_found(&mut self, queens: &[i8]) {
        for observer in &mut self.observers {
            observer.on_solution_found(queens);
        }
    }

    fn on_progress_changed(&mut self, percent: f64) {
        for observer in &mut self.observers {
            observer.on_progress_changed(percent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct Recorder {
        name: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    }

    impl SolverObserver for Recorder {
        fn name(&self) -> &str {
            self.name
        }

        fn on_solution_found(&mut self, queens: &[i8]) {
            self.log
                .lock()
                .unwrap()
                .push(format!("{} {:?}", self.name, queens));
        }
    }

    #[test]
    fn test_forwards_in_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut composite = CompositeObserver::new();
        composite.add_observer(Recorder {
            name: "first",
            log: log.clone(),
        });
        composite.add_observer(Recorder {
            name: "second",
            log: log.clone(),
        });

        composite.on_solution_found(&[1, 3, 0, 2]);
        composite.on_queen_placed(&[1, -1, -1, -1]);

        assert_eq!(
            *log.lock().unwrap(),
            vec!["first [1, 3, 0, 2]", "second [1, 3, 0, 2]"]
        );
    }

    #[test]
    fn test_debug_lists_names() {
        let composite: CompositeObserver = vec![Box::new(Recorder {
            name: "rec",
            log: Arc::default(),
        }) as Box<dyn SolverObserver>]
        .into_iter()
        .collect();
        assert_eq!(composite.len(), 1);
        assert_eq!(
            format!("{:?}", composite),
            "CompositeObserver { observers: \"rec\" }"
        );
    }
}
