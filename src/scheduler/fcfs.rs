use super::{Scheduler, Slice};
use crate::core::{PcbStore, Pid, Ticks};

/// Runs processes to completion in pid order.
///
/// Wait is assigned directly as the time elapsed before a process's turn
/// instead of being accrued slice by slice through [`crate::core::run_proc`].
/// Without preemption the two agree, since a process waits for exactly the
/// bursts run ahead of it.
#[derive(Debug, Default)]
pub struct Fcfs {
    cursor: Pid,
    elapsed: Ticks,
}

impl Fcfs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for Fcfs {
    fn label(&self) -> String {
        "FCFS".to_string()
    }

    fn step(&mut self, store: &mut PcbStore) -> Option<Slice> {
        while self.cursor < store.len() {
            let pid = self.cursor;
            self.cursor += 1;

            let pcb = store.pcb_mut(pid);
            // Finished before its turn: wait keeps its initial value
            if !pcb.is_runnable() {
                continue;
            }

            pcb.wait = self.elapsed;
            let amount = pcb.burst_left;
            pcb.burst_left = 0;
            self.elapsed += amount;

            return Some(Slice { pid, amount });
        }

        None
    }
}

/// Runs every process under FCFS and returns the total elapsed time.
pub fn fcfs_run(store: &mut PcbStore) -> Ticks {
    let mut fcfs = Fcfs::new();
    std::iter::from_fn(|| fcfs.step(store))
        .map(|slice| slice.amount)
        .sum()
}
