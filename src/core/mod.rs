pub mod engine;
pub mod event;
pub mod observer;
pub mod state;

pub use engine::run_proc;
pub use event::SchedEvent;
pub use observer::Observer;
pub use state::{Pcb, PcbStore, Pid, StoreError, Ticks, total_burst};
