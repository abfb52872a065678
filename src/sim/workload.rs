use rand::prelude::*;

use crate::core::{StoreError, Ticks};

/// Shape of a generated workload: each process is independently short with
/// probability `p_short`, long otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Workload {
    pub count: usize,
    pub p_short: f64,
    pub short_burst: Ticks,
    pub long_burst: Ticks,
}

impl Default for Workload {
    fn default() -> Self {
        Self {
            count: 8,
            p_short: 0.3,
            short_burst: 2,
            long_burst: 6,
        }
    }
}

impl Workload {
    pub fn with_count(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    /// Deterministic for a given seed. Fails instead of aborting when
    /// `count` bursts cannot be allocated.
    pub fn bursts(&self, seed: u64) -> Result<Vec<Ticks>, StoreError> {
        let mut bursts = Vec::new();
        bursts
            .try_reserve_exact(self.count)
            .map_err(|source| StoreError::Allocation {
                count: self.count,
                source,
            })?;

        let mut rng = StdRng::seed_from_u64(seed);
        bursts.extend((0..self.count).map(|_| {
            if rng.random::<f64>() < self.p_short {
                self.short_burst
            } else {
                self.long_burst
            }
        }));
        Ok(bursts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_bursts() {
        let workload = Workload::with_count(32);
        assert_eq!(workload.bursts(7).unwrap(), workload.bursts(7).unwrap());
    }

    #[test]
    fn bursts_take_only_configured_values() {
        let workload = Workload {
            count: 64,
            p_short: 0.5,
            short_burst: 1,
            long_burst: 9,
        };

        let bursts = workload.bursts(42).unwrap();

        assert_eq!(bursts.len(), 64);
        assert!(bursts.iter().all(|&b| b == 1 || b == 9));
    }

    #[test]
    fn certain_probabilities() {
        let all_short = Workload {
            p_short: 1.0,
            ..Workload::with_count(10)
        };
        let all_long = Workload {
            p_short: 0.0,
            ..Workload::with_count(10)
        };

        assert_eq!(all_short.bursts(0).unwrap(), vec![2; 10]);
        assert_eq!(all_long.bursts(0).unwrap(), vec![6; 10]);
    }

    #[test]
    fn unallocatable_count_is_an_error() {
        let err = Workload::with_count(usize::MAX).bursts(0).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Allocation {
                count: usize::MAX,
                ..
            }
        ));
    }
}
