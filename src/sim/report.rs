use average::{Estimate, Mean};

use crate::core::Ticks;

/// Outcome of a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub label: String,
    pub elapsed: Ticks,
    // Final wait per process, indexed by pid
    pub waits: Vec<Ticks>,
}

impl Report {
    pub fn new(label: String, elapsed: Ticks, waits: Vec<Ticks>) -> Self {
        Self {
            label,
            elapsed,
            waits,
        }
    }

    /// Mean of the final waits, `0.0` when there were no processes.
    pub fn average_wait(&self) -> f64 {
        if self.waits.is_empty() {
            return 0.0;
        }
        self.waits
            .iter()
            .map(|&wait| wait as f64)
            .collect::<Mean>()
            .estimate()
    }
}
