use std::collections::TryReserveError;
use std::fmt;

use thiserror::Error;

// Index into the PCB Vec
pub type Pid = usize;
pub type Ticks = u64;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to allocate {count} processes: {source}")]
    Allocation {
        count: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("total burst of {count} processes does not fit in a tick counter")]
    BurstOverflow { count: usize },
}

/// Sum of `bursts`, or `None` if it overflows `Ticks`.
pub fn total_burst(bursts: &[Ticks]) -> Option<Ticks> {
    bursts
        .iter()
        .try_fold(0 as Ticks, |total, &burst| total.checked_add(burst))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pcb {
    pub pid: Pid,
    pub burst_left: Ticks,
    pub wait: Ticks,
}

impl Pcb {
    pub fn is_runnable(&self) -> bool {
        self.burst_left > 0
    }
}

/// Fixed-length table of process control blocks for a single run.
///
/// A PCB's position is its pid; nothing is inserted or removed once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PcbStore {
    pcbs: Vec<Pcb>,
}

impl PcbStore {
    /// Builds one PCB per burst with `pid = index` and zero wait.
    ///
    /// An empty burst list yields an empty store. Allocation failure is
    /// reported rather than handing back a partially built table, and so is
    /// a burst total that would overflow the elapsed-time counter.
    pub fn from_bursts(bursts: &[Ticks]) -> Result<Self, StoreError> {
        if total_burst(bursts).is_none() {
            return Err(StoreError::BurstOverflow {
                count: bursts.len(),
            });
        }

        let mut pcbs = Vec::new();
        pcbs.try_reserve_exact(bursts.len())
            .map_err(|source| StoreError::Allocation {
                count: bursts.len(),
                source,
            })?;

        for (pid, &burst_left) in bursts.iter().enumerate() {
            debug_assert_eq!(pcbs.len(), pid, "Pid must match Vec index");
            pcbs.push(Pcb {
                pid,
                burst_left,
                wait: 0,
            });
        }

        Ok(Self { pcbs })
    }

    pub fn len(&self) -> usize {
        self.pcbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pcbs.is_empty()
    }

    pub fn get(&self, pid: Pid) -> Option<&Pcb> {
        self.pcbs.get(pid)
    }

    pub fn pcb(&self, pid: Pid) -> &Pcb {
        &self.pcbs[pid]
    }

    pub fn pcb_mut(&mut self, pid: Pid) -> &mut Pcb {
        &mut self.pcbs[pid]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pcb> {
        self.pcbs.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Pcb> {
        self.pcbs.iter_mut()
    }

    /// Out-of-range pids are never runnable.
    pub fn is_runnable(&self, pid: Pid) -> bool {
        self.get(pid).is_some_and(Pcb::is_runnable)
    }

    pub fn runnable_count(&self) -> usize {
        self.pcbs.iter().filter(|pcb| pcb.is_runnable()).count()
    }

    pub fn all_finished(&self) -> bool {
        self.pcbs.iter().all(|pcb| !pcb.is_runnable())
    }

    pub fn total_burst_left(&self) -> Ticks {
        self.pcbs.iter().map(|pcb| pcb.burst_left).sum()
    }

    pub fn waits(&self) -> Vec<Ticks> {
        self.pcbs.iter().map(|pcb| pcb.wait).collect()
    }
}

impl<'a> IntoIterator for &'a PcbStore {
    type Item = &'a Pcb;
    type IntoIter = std::slice::Iter<'a, Pcb>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for PcbStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pcb in &self.pcbs {
            writeln!(f, "P{}: burst={} wait={}", pcb.pid, pcb.burst_left, pcb.wait)?;
        }
        Ok(())
    }
}
