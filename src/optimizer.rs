//! The shared optimizer contract and caller-selected strategy.

use crate::error::OptimizeError;
use crate::exhaustive::ExhaustiveSearchOptimizer;
use crate::model::{Budget, OptionSet, SelectionResult};
use crate::ranked::RankedFillOptimizer;
use std::str::FromStr;

/// Selects options from an [`OptionSet`] within a [`Budget`].
///
/// Every implementation returns the same [`SelectionResult`] shape, so
/// callers can switch strategies without code changes.
pub trait Optimizer {
    /// Returns the name of this optimizer.
    fn name(&self) -> &str;

    /// Selects a feasible subset of `options` maximizing total revenue.
    fn optimize(
        &self,
        options: &OptionSet,
        budget: Budget,
    ) -> Result<SelectionResult, OptimizeError>;
}

/// An optimizer chosen by the caller.
///
/// # Examples
///
/// ```
/// use u_servicing::model::{Budget, OptionSet};
/// use u_servicing::{Optimizer, Strategy};
///
/// let options = OptionSet::from_pairs([(10.0, 11.0), (6.0, 6.0), (6.0, 6.0)]);
///
/// let heuristic: Strategy = "ranked_fill".parse().unwrap();
/// let exact: Strategy = "exhaustive_search".parse().unwrap();
///
/// let approx = heuristic.optimize(&options, Budget::new(12.0)).unwrap();
/// let best = exact.optimize(&options, Budget::new(12.0)).unwrap();
/// assert!(best.total_revenue > approx.total_revenue);
/// ```
#[derive(Debug, Clone)]
pub enum Strategy {
    /// Approximate, single-pass density fill.
    RankedFill(RankedFillOptimizer),

    /// Exact search over every feasible selection.
    ExhaustiveSearch(ExhaustiveSearchOptimizer),
}

impl Strategy {
    pub fn ranked_fill() -> Self {
        Strategy::RankedFill(RankedFillOptimizer::new())
    }

    pub fn exhaustive_search() -> Self {
        Strategy::ExhaustiveSearch(ExhaustiveSearchOptimizer::default())
    }

    /// Whether this strategy guarantees an optimal selection.
    pub fn is_exact(&self) -> bool {
        matches!(self, Strategy::ExhaustiveSearch(_))
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Self::exhaustive_search()
    }
}

impl Optimizer for Strategy {
    fn name(&self) -> &str {
        match self {
            Strategy::RankedFill(optimizer) => optimizer.name(),
            Strategy::ExhaustiveSearch(optimizer) => optimizer.name(),
        }
    }

    fn optimize(
        &self,
        options: &OptionSet,
        budget: Budget,
    ) -> Result<SelectionResult, OptimizeError> {
        match self {
            Strategy::RankedFill(optimizer) => optimizer.optimize(options, budget),
            Strategy::ExhaustiveSearch(optimizer) => optimizer.optimize(options, budget),
        }
    }
}

impl FromStr for Strategy {
    type Err = OptimizeError;

    /// Accepts `ranked_fill` (alias `greedy_lazy`) and `exhaustive_search`
    /// (aliases `exhaustive`, `greedy`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ranked_fill" | "greedy_lazy" => Ok(Self::ranked_fill()),
            "exhaustive_search" | "exhaustive" | "greedy" => Ok(Self::exhaustive_search()),
            _ => Err(OptimizeError::UnknownStrategy(s.to_string())),
        }
    }
}

impl From<RankedFillOptimizer> for Strategy {
    fn from(optimizer: RankedFillOptimizer) -> Self {
        Strategy::RankedFill(optimizer)
    }
}

impl From<ExhaustiveSearchOptimizer> for Strategy {
    fn from(optimizer: ExhaustiveSearchOptimizer) -> Self {
        Strategy::ExhaustiveSearch(optimizer)
    }
}
