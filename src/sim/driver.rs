use tracing::{debug, info};

use super::report::Report;
use crate::{
    core::{Observer, PcbStore, SchedEvent, StoreError, Ticks},
    scheduler::{Scheduler, Slice},
};

/// One simulation run: a scheduling policy applied to a store it owns.
pub struct Sim<S: Scheduler> {
    pub scheduler: S,
    store: PcbStore,
    elapsed: Ticks,
    finished: bool,
    observer: Observer,
}

impl<S: Scheduler> Sim<S> {
    pub fn new(scheduler: S, store: PcbStore) -> Self {
        let observer = Observer::new(&store);
        Self {
            scheduler,
            store,
            elapsed: 0,
            finished: false,
            observer,
        }
    }

    pub fn from_bursts(scheduler: S, bursts: &[Ticks]) -> Result<Self, StoreError> {
        Ok(Self::new(scheduler, PcbStore::from_bursts(bursts)?))
    }

    /// Makes one dispatch decision. Returns no events once the run is over.
    pub fn step(&mut self) -> Vec<SchedEvent> {
        if self.finished {
            return Vec::new();
        }

        let Some(Slice { pid, amount }) = self.scheduler.step(&mut self.store) else {
            self.finished = true;
            info!(
                scheduler = %self.scheduler.label(),
                elapsed = self.elapsed,
                steps = self.observer.steps(),
                "simulation finished"
            );
            return Vec::new();
        };

        self.elapsed += amount;
        self.observer.observe(&self.store, self.elapsed);

        let pcb = self.store.pcb(pid);
        debug!(pid, amount, burst_left = pcb.burst_left, elapsed = self.elapsed, "slice");

        let mut events = vec![SchedEvent::Dispatched {
            pid,
            amount,
            burst_left: pcb.burst_left,
        }];
        if !pcb.is_runnable() {
            events.push(SchedEvent::Completed {
                pid,
                wait: pcb.wait,
            });
        }
        events
    }

    pub fn run_to_completion(&mut self) -> Report {
        info!(
            scheduler = %self.scheduler.label(),
            processes = self.store.len(),
            runnable = self.store.runnable_count(),
            "simulation started"
        );
        while !self.all_completed() {
            self.step();
        }
        self.report()
    }

    /// True once the scheduler has reported that nothing is left to run.
    pub fn all_completed(&self) -> bool {
        self.finished
    }

    pub fn now(&self) -> Ticks {
        self.elapsed
    }

    pub fn store(&self) -> &PcbStore {
        &self.store
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }

    pub fn report(&self) -> Report {
        Report::new(self.scheduler.label(), self.elapsed, self.store.waits())
    }
}
