use super::state::{PcbStore, Pid, Ticks};

/// Gives the CPU to `current` for up to `amount` ticks.
///
/// Every other unfinished process accrues the granted time as wait. Returns
/// the ticks actually granted, which is `0` when `current` is out of range or
/// already finished, or when `amount` is zero; in those cases the store is
/// left untouched.
pub fn run_proc(store: &mut PcbStore, current: Pid, amount: Ticks) -> Ticks {
    if amount == 0 || !store.is_runnable(current) {
        return 0;
    }

    let pcb = store.pcb_mut(current);
    let actual = amount.min(pcb.burst_left);
    pcb.burst_left -= actual;

    for pcb in store.iter_mut() {
        if pcb.pid != current && pcb.is_runnable() {
            pcb.wait += actual;
        }
    }

    actual
}
