//! Input and output data shared by every optimizer.
//!
//! - [`ServiceOption`]: one servicing choice with a fuel cost and revenue
//! - [`OptionSet`]: the ordered, read-only options of one run
//! - [`Budget`]: the fuel reserve a selection may consume
//! - [`SelectionResult`]: the chosen option ids and their totals
//!
//! Option identity is the original input position. Optimizers reorder
//! working copies only, so results are always reported against the
//! caller's ordering.

mod option;
mod selection;

pub use option::{Budget, Ineligibility, OptionSet, Screened, ServiceOption};
pub use selection::SelectionResult;
