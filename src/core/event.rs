use std::fmt;

use crate::core::{Pid, Ticks};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedEvent {
    Dispatched {
        pid: Pid,
        amount: Ticks,
        burst_left: Ticks,
    },
    // Burst reached zero during the preceding slice; wait is final from here on
    Completed {
        pid: Pid,
        wait: Ticks,
    },
}

impl fmt::Display for SchedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dispatched {
                pid,
                amount,
                burst_left,
            } => write!(f, "Running P{pid} for {amount} (burst left {burst_left})"),
            Self::Completed { pid, wait } => write!(f, "P{pid} completed (wait {wait})"),
        }
    }
}
