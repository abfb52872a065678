use rustc_hash::FxHashMap;

use super::state::{PcbStore, Pid, Ticks};

/// Cross-checks store bookkeeping after every simulation step.
#[derive(Debug)]
pub struct Observer {
    step: u64,
    initial_burst: Ticks,
    // Wait recorded when each process finished; must never move afterwards
    frozen_waits: FxHashMap<Pid, Ticks>,
}

impl Observer {
    pub fn new(store: &PcbStore) -> Self {
        let mut observer = Self {
            step: 0,
            initial_burst: store.total_burst_left(),
            frozen_waits: FxHashMap::default(),
        };
        observer.record_finished(store);
        observer
    }

    pub fn steps(&self) -> u64 {
        self.step
    }

    pub fn observe(&mut self, store: &PcbStore, elapsed: Ticks) {
        self.step += 1;

        debug_assert_eq!(
            elapsed + store.total_burst_left(),
            self.initial_burst,
            "elapsed time plus remaining burst must equal the initial burst total"
        );

        for (&pid, &wait) in &self.frozen_waits {
            let pcb = store.pcb(pid);
            debug_assert!(
                !pcb.is_runnable(),
                "Finished process {pid} became runnable again"
            );
            debug_assert_eq!(
                pcb.wait, wait,
                "Finished process {pid} accrued wait after completion"
            );
        }

        self.record_finished(store);
    }

    fn record_finished(&mut self, store: &PcbStore) {
        for pcb in store {
            if !pcb.is_runnable() {
                self.frozen_waits.entry(pcb.pid).or_insert(pcb.wait);
            }
        }
    }
}
