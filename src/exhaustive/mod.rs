//! Exhaustive (exact) search.
//!
//! Explores the include/exclude decision tree over density-ranked options
//! and returns a globally optimal selection. Two methods keep the tree
//! tractable:
//!
//! - **Branch-and-bound** (default): depth-first on an explicit work stack,
//!   include branch before exclude, cutting subtrees whose fractional
//!   relaxation bound cannot beat the incumbent.
//! - **Dynamic programming**: bottom-up table over `(position, remaining
//!   budget)` at a chosen integer resolution.
//!
//! Each branch carries its own persistent path of chosen ids, so sibling
//! branches never see each other's choices. The incumbent is seeded with the
//! ranked fill selection unless disabled, which also guarantees the result
//! is never below the heuristic.
//!
//! Node and time budgets turn runaway searches into
//! [`OptimizeError::SearchBudgetExceeded`](crate::error::OptimizeError).
//! With the `parallel` feature, disjoint subtrees are explored on rayon.
//!
//! # References
//!
//! - Kolesar (1967), "A Branch and Bound Algorithm for the Knapsack Problem"
//! - Martello & Toth (1990), "Knapsack Problems: Algorithms and Computer
//!   Implementations"

mod config;
mod dp;
mod limits;
mod path;
mod runner;
mod search;

pub use config::{ExhaustiveConfig, SearchMethod};
pub use limits::SearchStats;
pub use runner::{ExhaustiveSearchOptimizer, SearchOutcome};
