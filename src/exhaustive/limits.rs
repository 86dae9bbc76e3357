//! Step, time and cancellation limits for one search call.

use crate::error::OptimizeError;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Clock and cancellation flag are polled once per this many nodes.
const CHECK_INTERVAL: u64 = 1024;

/// Counters collected during an exhaustive search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchStats {
    /// Decision tree nodes visited (DP: table cells filled).
    pub nodes: u64,

    /// Subtrees cut by the upper bound.
    pub pruned: u64,

    /// Times a strictly better complete selection replaced the incumbent.
    pub improvements: u64,
}

impl SearchStats {
    #[cfg(any(test, feature = "parallel"))]
    pub(crate) fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.pruned += other.pruned;
        self.improvements += other.improvements;
    }
}

/// Budget shared by every worker of one search call.
#[derive(Debug)]
pub(crate) struct SearchLimits {
    max_nodes: u64,
    started: Instant,
    deadline: Option<Instant>,
    cancel: Option<Arc<AtomicBool>>,
    visited: AtomicU64,
}

impl SearchLimits {
    pub fn new(max_nodes: u64, time_limit_ms: u64, cancel: Option<Arc<AtomicBool>>) -> Self {
        let started = Instant::now();
        let deadline = (time_limit_ms > 0).then(|| started + Duration::from_millis(time_limit_ms));
        Self {
            max_nodes,
            started,
            deadline,
            cancel,
            visited: AtomicU64::new(0),
        }
    }

    /// Records `amount` units of work and fails once a limit is crossed.
    pub fn charge(&self, amount: u64) -> Result<(), OptimizeError> {
        let before = self.visited.fetch_add(amount, Ordering::Relaxed);
        let after = before + amount;

        if self.max_nodes > 0 && after > self.max_nodes {
            return Err(self.exceeded(self.max_nodes));
        }

        if before == 0 || before / CHECK_INTERVAL != after / CHECK_INTERVAL {
            if let Some(ref flag) = self.cancel {
                if flag.load(Ordering::Relaxed) {
                    return Err(OptimizeError::Cancelled);
                }
            }
            if let Some(deadline) = self.deadline {
                if Instant::now() >= deadline {
                    return Err(self.exceeded(after));
                }
            }
        }

        Ok(())
    }

    fn exceeded(&self, nodes: u64) -> OptimizeError {
        OptimizeError::SearchBudgetExceeded {
            nodes,
            elapsed_ms: self.started.elapsed().as_millis() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlimited() {
        let limits = SearchLimits::new(0, 0, None);
        for _ in 0..10_000 {
            assert!(limits.charge(1).is_ok());
        }
    }

    #[test]
    fn test_node_limit() {
        let limits = SearchLimits::new(5, 0, None);
        for _ in 0..5 {
            assert!(limits.charge(1).is_ok());
        }
        match limits.charge(1) {
            Err(OptimizeError::SearchBudgetExceeded { nodes, .. }) => assert_eq!(nodes, 5),
            other => panic!("expected budget error, got {other:?}"),
        }
    }

    #[test]
    fn test_bulk_charge_over_limit() {
        let limits = SearchLimits::new(100, 0, None);
        assert!(limits.charge(60).is_ok());
        assert!(limits.charge(60).is_err());
    }

    #[test]
    fn test_cancel_checked_on_first_charge() {
        let cancel = Arc::new(AtomicBool::new(true));
        let limits = SearchLimits::new(0, 0, Some(cancel));
        assert_eq!(limits.charge(1), Err(OptimizeError::Cancelled));
    }

    #[test]
    fn test_stats_merge() {
        let mut stats = SearchStats {
            nodes: 3,
            pruned: 1,
            improvements: 0,
        };
        stats.merge(&SearchStats {
            nodes: 4,
            pruned: 2,
            improvements: 1,
        });
        assert_eq!(
            stats,
            SearchStats {
                nodes: 7,
                pruned: 3,
                improvements: 1
            }
        );
    }
}
