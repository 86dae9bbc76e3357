//! Error type shared by all optimizers.

use thiserror::Error;

/// Failure of an optimization run.
///
/// Ineligible input options are not errors: they are screened out and
/// counted in [`SelectionResult::excluded`](crate::model::SelectionResult).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptimizeError {
    /// The exhaustive search hit its node or time budget before proving
    /// optimality.
    #[error("search budget exceeded after {nodes} nodes in {elapsed_ms} ms")]
    SearchBudgetExceeded { nodes: u64, elapsed_ms: u64 },

    /// The cancellation flag was raised during the search.
    #[error("search cancelled")]
    Cancelled,

    /// The quantized dynamic program would need more table cells than allowed.
    #[error("dynamic programming table needs {cells} cells, limit is {limit}")]
    TableTooLarge { cells: u64, limit: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown optimization strategy `{0}`")]
    UnknownStrategy(String),
}
