//! Exhaustive search entry point.

use super::config::{ExhaustiveConfig, SearchMethod};
use super::dp;
use super::limits::{SearchLimits, SearchStats};
use super::search::{BranchAndBound, Incumbent};
use crate::error::OptimizeError;
use crate::model::{Budget, OptionSet, SelectionResult};
use crate::optimizer::Optimizer;
use crate::ranked::{fill, rank_by_density};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Result of an exhaustive search run.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// The optimal selection.
    pub selection: SelectionResult,

    /// Work done to find it.
    pub stats: SearchStats,
}

/// Exact optimizer over the include/exclude decision tree.
///
/// # Examples
///
/// ```
/// use u_servicing::exhaustive::ExhaustiveSearchOptimizer;
/// use u_servicing::model::{Budget, OptionSet};
///
/// let options = OptionSet::from_pairs([(10.0, 11.0), (6.0, 6.0), (6.0, 6.0)]);
/// let outcome = ExhaustiveSearchOptimizer::default()
///     .run(&options, Budget::new(12.0))
///     .unwrap();
///
/// assert_eq!(outcome.selection.total_revenue, 12.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExhaustiveSearchOptimizer {
    config: ExhaustiveConfig,
}

impl ExhaustiveSearchOptimizer {
    pub fn new(config: ExhaustiveConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExhaustiveConfig {
        &self.config
    }

    /// Finds the revenue-maximizing feasible selection.
    pub fn run(
        &self,
        options: &OptionSet,
        budget: Budget,
    ) -> Result<SearchOutcome, OptimizeError> {
        self.run_with_cancel(options, budget, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// If `cancel` is set to `true` the search stops at its next check and
    /// returns [`OptimizeError::Cancelled`].
    #[instrument(level = "debug", skip_all, fields(options = options.len(), budget = budget.fuel()))]
    pub fn run_with_cancel(
        &self,
        options: &OptionSet,
        budget: Budget,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SearchOutcome, OptimizeError> {
        self.config
            .validate()
            .map_err(OptimizeError::InvalidConfig)?;

        let screened = options.screen();
        let excluded = screened.excluded;
        if !budget.is_spendable() || screened.eligible.is_empty() {
            return Ok(SearchOutcome {
                selection: SelectionResult::empty(excluded),
                stats: SearchStats::default(),
            });
        }

        let ranked = rank_by_density(screened.eligible);
        let fuel = budget.fuel();

        let total_cost: f64 = ranked.iter().map(|o| o.fuel_cost).sum();
        if total_cost <= fuel {
            debug!(selected = ranked.len(), "every eligible option fits the budget");
            return Ok(SearchOutcome {
                selection: fill(&ranked, fuel, excluded),
                stats: SearchStats::default(),
            });
        }

        let incumbent = if self.config.warm_start {
            Incumbent::from_selection(&fill(&ranked, fuel, excluded))
        } else {
            Incumbent::empty()
        };

        let limits = SearchLimits::new(self.config.max_nodes, self.config.time_limit_ms, cancel);

        let (best, stats) = match self.config.method {
            SearchMethod::BranchAndBound => {
                let search = BranchAndBound::new(&ranked, fuel, &limits);
                self.branch_and_bound(&search, incumbent)?
            }
            SearchMethod::DynamicProgramming { resolution } => {
                let (candidate, stats) = dp::solve(
                    &ranked,
                    fuel,
                    resolution,
                    self.config.max_table_cells,
                    &limits,
                )?;
                match candidate {
                    Some(candidate) if candidate.revenue > incumbent.revenue => (candidate, stats),
                    _ => (incumbent, stats),
                }
            }
        };

        debug!(
            nodes = stats.nodes,
            pruned = stats.pruned,
            improvements = stats.improvements,
            revenue = best.revenue,
            excluded,
            "exhaustive search finished"
        );

        Ok(SearchOutcome {
            selection: best.into_selection(excluded),
            stats,
        })
    }

    #[cfg(feature = "parallel")]
    fn branch_and_bound(
        &self,
        search: &BranchAndBound<'_>,
        incumbent: Incumbent,
    ) -> Result<(Incumbent, SearchStats), OptimizeError> {
        if self.config.parallel {
            search.run_parallel(incumbent, self.config.split_depth)
        } else {
            search.run(incumbent)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn branch_and_bound(
        &self,
        search: &BranchAndBound<'_>,
        incumbent: Incumbent,
    ) -> Result<(Incumbent, SearchStats), OptimizeError> {
        search.run(incumbent)
    }
}

impl Optimizer for ExhaustiveSearchOptimizer {
    fn name(&self) -> &str {
        "exhaustive_search"
    }

    fn optimize(
        &self,
        options: &OptionSet,
        budget: Budget,
    ) -> Result<SelectionResult, OptimizeError> {
        self.run(options, budget).map(|outcome| outcome.selection)
    }
}
