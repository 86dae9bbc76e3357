//! Single-pass greedy fill.

use super::density::rank_by_density;
use crate::error::OptimizeError;
use crate::model::{Budget, OptionSet, SelectionResult, ServiceOption};
use crate::optimizer::Optimizer;
use tracing::{debug, instrument};

/// Greedy heuristic that fills the budget in density order.
///
/// # Examples
///
/// ```
/// use u_servicing::model::{Budget, OptionSet};
/// use u_servicing::ranked::RankedFillOptimizer;
///
/// let options = OptionSet::from_pairs([(5.0, 10.0), (3.0, 9.0), (4.0, 8.0)]);
/// let result = RankedFillOptimizer::new().run(&options, Budget::new(7.0));
///
/// assert_eq!(result.selected_ids, vec![1, 2]);
/// assert_eq!(result.total_revenue, 17.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RankedFillOptimizer;

impl RankedFillOptimizer {
    pub fn new() -> Self {
        Self
    }

    /// Selects options in density order while they fit the budget.
    #[instrument(level = "debug", skip_all, fields(options = options.len(), budget = budget.fuel()))]
    pub fn run(&self, options: &OptionSet, budget: Budget) -> SelectionResult {
        let screened = options.screen();
        if !budget.is_spendable() || screened.eligible.is_empty() {
            return SelectionResult::empty(screened.excluded);
        }

        let ranked = rank_by_density(screened.eligible);
        let result = fill(&ranked, budget.fuel(), screened.excluded);

        debug!(
            selected = result.len(),
            excluded = result.excluded,
            revenue = result.total_revenue,
            "ranked fill finished"
        );
        result
    }
}

impl Optimizer for RankedFillOptimizer {
    fn name(&self) -> &str {
        "ranked_fill"
    }

    fn optimize(
        &self,
        options: &OptionSet,
        budget: Budget,
    ) -> Result<SelectionResult, OptimizeError> {
        Ok(self.run(options, budget))
    }
}

/// Walks `ranked` once, taking every option that still fits within `budget`.
pub(crate) fn fill(ranked: &[ServiceOption], budget: f64, excluded: usize) -> SelectionResult {
    let mut result = SelectionResult::empty(excluded);

    for option in ranked {
        if result.total_fuel_cost + option.fuel_cost <= budget {
            result.total_fuel_cost += option.fuel_cost;
            result.total_revenue += option.revenue;
            result.selected_ids.push(option.id);
        }
    }

    result
}
