//! Ranked fill heuristic.
//!
//! Ranks options by value density (revenue per unit of fuel) and fills
//! the budget in a single greedy pass:
//!
//! - **Ranking**: densest first; zero-cost options are infinitely dense;
//!   ties are broken by original id so the order is deterministic.
//! - **Fill**: each option is taken if it still fits, otherwise skipped
//!   for good. There is no backtracking.
//!
//! Runs in O(n log n) and always returns a feasible selection, but not
//! necessarily an optimal one: a dense option can block two lighter
//! options whose combined revenue is higher.
//!
//! # References
//!
//! Dantzig (1957), "Discrete-Variable Extremum Problems"

mod density;
mod runner;

pub use density::density;
pub(crate) use density::rank_by_density;
pub(crate) use runner::fill;
pub use runner::RankedFillOptimizer;
