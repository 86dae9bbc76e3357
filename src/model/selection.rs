//! Selection result shared by all optimizers.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The options chosen by one optimization call.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SelectionResult {
    /// Ids of the chosen options, in selection order.
    pub selected_ids: Vec<usize>,

    /// Sum of the chosen options' revenue.
    pub total_revenue: f64,

    /// Sum of the chosen options' fuel cost. Never above the budget.
    pub total_fuel_cost: f64,

    /// Number of input options screened out as ineligible: non-finite cost
    /// or revenue, negative cost, negative revenue, or zero cost with zero
    /// revenue. Zero-revenue options with a positive cost stay eligible.
    pub excluded: usize,
}

impl SelectionResult {
    /// An empty selection with zero revenue.
    pub fn empty(excluded: usize) -> Self {
        Self {
            excluded,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.selected_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected_ids.is_empty()
    }

    pub fn contains(&self, id: usize) -> bool {
        self.selected_ids.contains(&id)
    }
}

impl fmt::Display for SelectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Maximum Revenue: ${}", self.total_revenue)?;
        for (i, id) in self.selected_ids.iter().enumerate() {
            if i > 0 {
                write!(f, "  ->  ")?;
            }
            write!(f, "{id}")?;
        }
        Ok(())
    }
}
