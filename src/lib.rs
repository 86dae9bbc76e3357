//! Fuel-budgeted selection of servicing options.
//!
//! Each servicing option has a fixed fuel cost and a revenue. Given a fuel
//! reserve, the crate picks the subset of options with the highest total
//! revenue whose cost fits the reserve (a 0/1 knapsack). Two optimizers
//! share one contract:
//!
//! - **Ranked fill**: sorts by revenue per unit of fuel and fills the
//!   budget in one greedy pass. Fast and approximate.
//! - **Exhaustive search**: exact branch-and-bound over the include/exclude
//!   decision tree, or a quantized dynamic program. Optional rayon-parallel
//!   subtree exploration with the `parallel` feature.
//!
//! Both take an [`OptionSet`](model::OptionSet) and a
//! [`Budget`](model::Budget) and return a
//! [`SelectionResult`](model::SelectionResult). [`Strategy`] wraps them
//! for callers that choose at runtime.
//!
//! # Example
//!
//! ```
//! use u_servicing::model::{Budget, OptionSet};
//! use u_servicing::{Optimizer, Strategy};
//!
//! let options = OptionSet::from_pairs([(5.0, 10.0), (3.0, 9.0), (4.0, 8.0)]);
//! let result = Strategy::exhaustive_search()
//!     .optimize(&options, Budget::new(7.0))
//!     .unwrap();
//!
//! assert_eq!(result.total_revenue, 17.0);
//! println!("{result}");
//! ```
//!
//! # Features
//!
//! - `serde`: serialization for models, results and configuration
//! - `parallel`: rayon-parallel exhaustive search
//! - `wasm`: `wasm_bindgen` entry point

pub mod error;
pub mod exhaustive;
pub mod model;
pub mod optimizer;
pub mod ranked;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::OptimizeError;
pub use optimizer::{Optimizer, Strategy};
