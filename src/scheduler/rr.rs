use super::{Scheduler, Slice};
use crate::core::{PcbStore, Pid, Ticks, run_proc};

/// Next process to run after `current` under round-robin order.
///
/// Scans the pids following `current`, wrapping around, and falls back to
/// `current` itself when it is the only process left. Returns `None` when
/// nothing is runnable or `current` is out of range.
pub fn rr_next(current: Pid, store: &PcbStore) -> Option<Pid> {
    let len = store.len();
    if current >= len {
        return None;
    }

    (1..len)
        .map(|offset| (current + offset) % len)
        .find(|&pid| store.is_runnable(pid))
        .or_else(|| store.is_runnable(current).then_some(current))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RrState {
    Start,
    Selected(Pid),
    Done,
}

#[derive(Debug)]
pub struct RoundRobin {
    quantum: Ticks,
    state: RrState,
}

impl RoundRobin {
    /// A zero quantum never dispatches anything.
    pub fn new(quantum: Ticks) -> Self {
        Self {
            quantum,
            state: RrState::Start,
        }
    }

    fn select(&mut self, store: &PcbStore) -> Option<Pid> {
        loop {
            match self.state {
                RrState::Start => {
                    let first = if store.is_runnable(0) {
                        Some(0)
                    } else {
                        rr_next(0, store)
                    };
                    self.state = first.map_or(RrState::Done, RrState::Selected);
                }
                RrState::Selected(pid) if store.is_runnable(pid) => return Some(pid),
                // Finished outside our own slices; pick again from its position
                RrState::Selected(pid) => {
                    self.state = rr_next(pid, store).map_or(RrState::Done, RrState::Selected);
                }
                RrState::Done => return None,
            }
        }
    }
}

impl Scheduler for RoundRobin {
    fn label(&self) -> String {
        format!("RR({})", self.quantum)
    }

    fn step(&mut self, store: &mut PcbStore) -> Option<Slice> {
        if self.quantum == 0 {
            self.state = RrState::Done;
            return None;
        }

        let pid = self.select(store)?;
        let amount = self.quantum.min(store.pcb(pid).burst_left);
        let granted = run_proc(store, pid, amount);
        debug_assert_eq!(granted, amount, "selected process must be runnable");

        self.state = rr_next(pid, store).map_or(RrState::Done, RrState::Selected);

        Some(Slice {
            pid,
            amount: granted,
        })
    }
}

/// Runs every process under round-robin and returns the total elapsed time.
pub fn rr_run(store: &mut PcbStore, quantum: Ticks) -> Ticks {
    let mut rr = RoundRobin::new(quantum);
    std::iter::from_fn(|| rr.step(store))
        .map(|slice| slice.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn slices(store: &mut PcbStore, quantum: Ticks) -> Vec<Slice> {
        let mut rr = RoundRobin::new(quantum);
        std::iter::from_fn(|| rr.step(store)).collect()
    }

    #[test]
    fn next_wraps_around() {
        let store = PcbStore::from_bursts(&[4, 0, 3]).unwrap();

        assert_eq!(rr_next(0, &store), Some(2));
        assert_eq!(rr_next(2, &store), Some(0));
        assert_eq!(rr_next(1, &store), Some(2));
    }

    #[test]
    fn next_falls_back_to_current() {
        let store = PcbStore::from_bursts(&[0, 5, 0]).unwrap();
        assert_eq!(rr_next(1, &store), Some(1));
    }

    #[test]
    fn next_with_nothing_runnable() {
        let store = PcbStore::from_bursts(&[0, 0, 0]).unwrap();
        for current in 0..3 {
            assert_eq!(rr_next(current, &store), None);
        }
    }

    #[test]
    fn next_guards_degenerate_input() {
        let store = PcbStore::from_bursts(&[5, 8]).unwrap();
        assert_eq!(rr_next(2, &store), None);
        assert_eq!(rr_next(0, &PcbStore::default()), None);
    }

    #[test]
    fn two_processes_quantum_four() {
        let mut store = PcbStore::from_bursts(&[5, 8]).unwrap();

        assert_eq!(
            slices(&mut store, 4),
            vec![
                Slice { pid: 0, amount: 4 },
                Slice { pid: 1, amount: 4 },
                Slice { pid: 0, amount: 1 },
                Slice { pid: 1, amount: 4 },
            ]
        );
        assert_eq!(store.waits(), vec![4, 9]);
    }

    #[test]
    fn starts_at_first_runnable_process() {
        let mut store = PcbStore::from_bursts(&[0, 0, 2, 3]).unwrap();

        let order: Vec<Pid> = slices(&mut store, 2).iter().map(|s| s.pid).collect();

        assert_eq!(order, vec![2, 3, 3]);
        assert_eq!(store.waits(), vec![0, 0, 0, 2]);
    }

    #[test]
    fn zero_quantum_is_a_noop() {
        let mut store = PcbStore::from_bursts(&[5, 8]).unwrap();
        let before = store.clone();

        assert_eq!(rr_run(&mut store, 0), 0);
        assert_eq!(store, before);
    }

    #[test]
    fn single_process_never_waits() {
        let mut store = PcbStore::from_bursts(&[7]).unwrap();

        assert_eq!(rr_run(&mut store, 3), 7);
        assert_eq!(store.waits(), vec![0]);
    }

    #[test]
    fn skips_process_finished_between_steps() {
        let mut store = PcbStore::from_bursts(&[4, 4, 4]).unwrap();
        let mut rr = RoundRobin::new(2);

        assert_eq!(rr.step(&mut store), Some(Slice { pid: 0, amount: 2 }));
        store.pcb_mut(1).burst_left = 0;

        assert_eq!(rr.step(&mut store), Some(Slice { pid: 2, amount: 2 }));
    }

    #[test]
    fn burst_total_at_tick_limit() {
        let mut store = PcbStore::from_bursts(&[Ticks::MAX - 1, 1]).unwrap();

        assert_eq!(rr_run(&mut store, Ticks::MAX), Ticks::MAX);
        assert_eq!(store.waits(), vec![0, Ticks::MAX - 1]);
    }

    proptest! {
        #[test]
        fn elapsed_is_sum_of_bursts(
            bursts in prop::collection::vec(0u64..60, 0..16),
            quantum in 1u64..10,
        ) {
            let mut store = PcbStore::from_bursts(&bursts).unwrap();
            prop_assert_eq!(rr_run(&mut store, quantum), bursts.iter().sum::<u64>());
            prop_assert!(store.all_finished());
        }

        #[test]
        fn next_is_none_once_everything_finished(
            len in 1usize..16,
            current in 0usize..20,
        ) {
            let store = PcbStore::from_bursts(&vec![0u64; len]).unwrap();
            prop_assert_eq!(rr_next(current, &store), None);
        }

        #[test]
        fn only_the_last_slice_of_a_process_is_short(
            bursts in prop::collection::vec(0u64..60, 1..16),
            quantum in 1u64..10,
        ) {
            let mut store = PcbStore::from_bursts(&bursts).unwrap();
            let mut remaining = bursts.clone();

            for slice in slices(&mut store, quantum) {
                prop_assert!(slice.amount <= quantum);
                remaining[slice.pid] -= slice.amount;
                if slice.amount < quantum {
                    prop_assert_eq!(remaining[slice.pid], 0);
                }
            }
        }

        // Between two turns of the same process, every process still alive
        // afterwards gets exactly one turn.
        #[test]
        fn every_live_process_runs_once_per_cycle(
            bursts in prop::collection::vec(0u64..40, 1..10),
            quantum in 1u64..8,
        ) {
            let mut store = PcbStore::from_bursts(&bursts).unwrap();
            let order: Vec<Pid> = slices(&mut store, quantum).iter().map(|s| s.pid).collect();

            for (a, &pid) in order.iter().enumerate() {
                let Some(gap) = order[a + 1..].iter().position(|&p| p == pid) else {
                    continue;
                };
                let b = a + 1 + gap;
                for other in 0..bursts.len() {
                    if other == pid || !order[b..].contains(&other) {
                        continue;
                    }
                    let turns = order[a + 1..b].iter().filter(|&&p| p == other).count();
                    prop_assert_eq!(turns, 1, "P{} in cycle of P{}: {:?}", other, pid, order);
                }
            }
        }
    }
}
