//! Depth-first branch-and-bound over the include/exclude decision tree.

use super::limits::{SearchLimits, SearchStats};
use super::path::Path;
use crate::error::OptimizeError;
use crate::model::{SelectionResult, ServiceOption};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Rounding slack on a subtree's bound, in units of its own epsilon.
const BOUND_ULPS: f64 = 4.0;

/// Best complete selection found so far.
#[derive(Debug, Clone)]
pub(crate) struct Incumbent {
    pub revenue: f64,
    pub fuel_cost: f64,
    pub path: Path,
}

impl Incumbent {
    pub fn empty() -> Self {
        Self {
            revenue: 0.0,
            fuel_cost: 0.0,
            path: Path::empty(),
        }
    }

    pub fn from_selection(selection: &SelectionResult) -> Self {
        Self {
            revenue: selection.total_revenue,
            fuel_cost: selection.total_fuel_cost,
            path: Path::from_ids(selection.selected_ids.iter().copied()),
        }
    }

    pub fn into_selection(self, excluded: usize) -> SelectionResult {
        SelectionResult {
            selected_ids: self.path.to_vec(),
            total_revenue: self.revenue,
            total_fuel_cost: self.fuel_cost,
            excluded,
        }
    }

    /// Whether a subtree bounded by `upper` may hold a strictly better
    /// selection. Ties are cut.
    fn can_beat(&self, upper: f64) -> bool {
        upper - self.revenue > upper.abs() * BOUND_ULPS * f64::EPSILON
    }
}

/// One pending node of the decision tree.
#[derive(Debug, Clone)]
struct Frame {
    position: usize,
    fuel_cost: f64,
    revenue: f64,
    path: Path,
}

impl Frame {
    fn root() -> Self {
        Self {
            position: 0,
            fuel_cost: 0.0,
            revenue: 0.0,
            path: Path::empty(),
        }
    }
}

/// Upper bound on the revenue `ranked[from..]` can add within `capacity`,
/// from the fractional relaxation. `ranked` must be sorted densest first.
pub(crate) fn fractional_bound(ranked: &[ServiceOption], from: usize, capacity: f64) -> f64 {
    let mut remaining = capacity.max(0.0);
    let mut bound = 0.0;

    for option in &ranked[from..] {
        if option.fuel_cost <= remaining {
            remaining -= option.fuel_cost;
            bound += option.revenue;
        } else {
            bound += option.revenue * (remaining / option.fuel_cost);
            break;
        }
    }

    bound
}

/// Branch-and-bound search over density-ranked options.
pub(crate) struct BranchAndBound<'a> {
    ranked: &'a [ServiceOption],
    budget: f64,
    limits: &'a SearchLimits,
}

impl<'a> BranchAndBound<'a> {
    pub fn new(ranked: &'a [ServiceOption], budget: f64, limits: &'a SearchLimits) -> Self {
        Self {
            ranked,
            budget,
            limits,
        }
    }

    /// Searches the whole tree starting from `incumbent`.
    pub fn run(&self, incumbent: Incumbent) -> Result<(Incumbent, SearchStats), OptimizeError> {
        let mut stats = SearchStats::default();
        let best = self.explore(Frame::root(), incumbent, &mut stats)?;
        Ok((best, stats))
    }

    /// Splits the tree at `split_depth` and searches the subtrees in parallel.
    ///
    /// Each subtree starts from its own copy of `incumbent`. Local bests are
    /// merged in depth-first subtree order, keeping the earliest among equal
    /// revenues, so the result does not depend on scheduling.
    #[cfg(feature = "parallel")]
    pub fn run_parallel(
        &self,
        incumbent: Incumbent,
        split_depth: usize,
    ) -> Result<(Incumbent, SearchStats), OptimizeError> {
        let (roots, mut stats) = self.frontier(split_depth)?;

        let outcomes: Vec<Result<(Incumbent, SearchStats), OptimizeError>> = roots
            .into_par_iter()
            .map(|root| {
                let mut local = SearchStats::default();
                self.explore(root, incumbent.clone(), &mut local)
                    .map(|best| (best, local))
            })
            .collect();

        let mut best = incumbent;
        for outcome in outcomes {
            let (local_best, local_stats) = outcome?;
            stats.merge(&local_stats);
            if local_best.revenue > best.revenue {
                best = local_best;
            }
        }

        Ok((best, stats))
    }

    /// Expands the tree breadth-first to `depth`, keeping depth-first order
    /// among the resulting frames.
    #[cfg(feature = "parallel")]
    fn frontier(&self, depth: usize) -> Result<(Vec<Frame>, SearchStats), OptimizeError> {
        let mut stats = SearchStats::default();
        let mut frames = vec![Frame::root()];

        for _ in 0..depth {
            let mut next = Vec::with_capacity(frames.len() * 2);
            for frame in frames {
                if frame.position == self.ranked.len() {
                    next.push(frame);
                    continue;
                }
                self.limits.charge(1)?;
                stats.nodes += 1;
                let (include, exclude) = self.branch(&frame);
                next.extend(include);
                next.push(exclude);
            }
            frames = next;
        }

        Ok((frames, stats))
    }

    /// Children of a non-terminal frame. The include child is `None` when
    /// the option does not fit.
    fn branch(&self, frame: &Frame) -> (Option<Frame>, Frame) {
        let option = &self.ranked[frame.position];

        let include = (frame.fuel_cost + option.fuel_cost <= self.budget).then(|| Frame {
            position: frame.position + 1,
            fuel_cost: frame.fuel_cost + option.fuel_cost,
            revenue: frame.revenue + option.revenue,
            path: frame.path.with(option.id),
        });

        let exclude = Frame {
            position: frame.position + 1,
            fuel_cost: frame.fuel_cost,
            revenue: frame.revenue,
            path: frame.path.clone(),
        };

        (include, exclude)
    }

    fn explore(
        &self,
        root: Frame,
        mut best: Incumbent,
        stats: &mut SearchStats,
    ) -> Result<Incumbent, OptimizeError> {
        let mut stack = vec![root];

        while let Some(frame) = stack.pop() {
            self.limits.charge(1)?;
            stats.nodes += 1;

            if frame.position == self.ranked.len() {
                if frame.revenue > best.revenue {
                    best = Incumbent {
                        revenue: frame.revenue,
                        fuel_cost: frame.fuel_cost,
                        path: frame.path,
                    };
                    stats.improvements += 1;
                }
                continue;
            }

            let capacity = self.budget - frame.fuel_cost;
            let upper = frame.revenue + fractional_bound(self.ranked, frame.position, capacity);
            if !best.can_beat(upper) {
                stats.pruned += 1;
                continue;
            }

            // LIFO: push exclude first so the include branch is explored first
            let (include, exclude) = self.branch(&frame);
            stack.push(exclude);
            stack.extend(include);
        }

        Ok(best)
    }
}
