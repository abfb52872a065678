pub mod cli;
pub mod core;
pub mod scheduler;
pub mod shell;
pub mod sim;

pub use crate::core::{Pcb, PcbStore, SchedEvent};
pub use scheduler::{Algorithm, Scheduler, fcfs_run, rr_next, rr_run};
pub use sim::{Report, Sim};
