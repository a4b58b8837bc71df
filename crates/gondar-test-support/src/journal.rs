//! Call journal — shared, ordered log of calls across several doubles.

use std::sync::{Arc, Mutex};

/// Ordered log shared between test doubles, used to assert the relative
/// order of calls made to different sinks.
#[derive(Debug, Clone, Default)]
pub struct CallJournal(Arc<Mutex<Vec<String>>>);

impl CallJournal {
    /// Creates an empty journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn record(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    /// Returns a snapshot of all entries in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}
