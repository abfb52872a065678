pub mod fcfs;
pub mod rr;

use std::fmt;

use crate::core::{PcbStore, Pid, Ticks};
pub use fcfs::{Fcfs, fcfs_run};
pub use rr::{RoundRobin, rr_next, rr_run};

/// CPU time handed to one process by a single dispatch decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    pub pid: Pid,
    pub amount: Ticks,
}

pub trait Scheduler {
    fn label(&self) -> String;

    /// Picks the next process, runs it and updates the store.
    ///
    /// Returns `None` once no runnable process remains; every later call must
    /// keep returning `None`.
    fn step(&mut self, store: &mut PcbStore) -> Option<Slice>;
}

impl<S: Scheduler + ?Sized> Scheduler for Box<S> {
    fn label(&self) -> String {
        (**self).label()
    }

    fn step(&mut self, store: &mut PcbStore) -> Option<Slice> {
        (**self).step(store)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Fcfs,
    RoundRobin { quantum: Ticks },
}

impl Algorithm {
    pub fn scheduler(self) -> Box<dyn Scheduler> {
        match self {
            Self::Fcfs => Box::new(Fcfs::new()),
            Self::RoundRobin { quantum } => Box::new(RoundRobin::new(quantum)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fcfs => write!(f, "FCFS"),
            Self::RoundRobin { quantum } => write!(f, "RR({quantum})"),
        }
    }
}
