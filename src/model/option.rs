//! Servicing options, option sets and the fuel budget.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A single servicing choice.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ServiceOption {
    /// Position of the option in the caller's input.
    pub id: usize,

    /// Fuel consumed when the option is selected.
    pub fuel_cost: f64,

    /// Revenue earned when the option is selected.
    pub revenue: f64,
}

/// Reason an option cannot take part in any selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ineligibility {
    /// Cost or revenue is NaN or infinite.
    NonFinite,
    /// Cost is below zero, so its density is undefined.
    NegativeCost,
    /// Revenue is below zero; selecting it can only lower the total.
    NegativeRevenue,
    /// Zero cost and zero revenue, so its density is `0 / 0`.
    Degenerate,
}

impl ServiceOption {
    pub fn new(id: usize, fuel_cost: f64, revenue: f64) -> Self {
        Self {
            id,
            fuel_cost,
            revenue,
        }
    }

    /// Returns why this option is screened out, or `None` if it is eligible.
    pub fn ineligibility(&self) -> Option<Ineligibility> {
        if !self.fuel_cost.is_finite() || !self.revenue.is_finite() {
            Some(Ineligibility::NonFinite)
        } else if self.fuel_cost < 0.0 {
            Some(Ineligibility::NegativeCost)
        } else if self.revenue < 0.0 {
            Some(Ineligibility::NegativeRevenue)
        } else if self.fuel_cost == 0.0 && self.revenue == 0.0 {
            Some(Ineligibility::Degenerate)
        } else {
            None
        }
    }

    pub fn is_eligible(&self) -> bool {
        self.ineligibility().is_none()
    }
}

/// Options split into those eligible for selection and a count of the rest.
#[derive(Debug, Clone, Default)]
pub struct Screened {
    /// Eligible options in input order.
    pub eligible: Vec<ServiceOption>,

    /// Number of options screened out.
    pub excluded: usize,
}

/// An ordered collection of servicing options.
///
/// Ids are assigned from input position on construction and never change.
///
/// # Examples
///
/// ```
/// use u_servicing::model::OptionSet;
///
/// let options = OptionSet::from_pairs([(5.0, 10.0), (3.0, 9.0), (4.0, 8.0)]);
/// assert_eq!(options.len(), 3);
/// assert_eq!(options.get(1).map(|o| o.revenue), Some(9.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionSet {
    options: Vec<ServiceOption>,
}

impl OptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from `(fuel_cost, revenue)` pairs; the id of each option
    /// is its position in the iterator.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        pairs.into_iter().collect()
    }

    /// Appends an option and returns its id.
    pub fn push(&mut self, fuel_cost: f64, revenue: f64) -> usize {
        let id = self.options.len();
        self.options.push(ServiceOption::new(id, fuel_cost, revenue));
        id
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn get(&self, id: usize) -> Option<&ServiceOption> {
        self.options.get(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ServiceOption> {
        self.options.iter()
    }

    pub fn as_slice(&self) -> &[ServiceOption] {
        &self.options
    }

    /// Splits the set into eligible options and a count of excluded ones.
    pub fn screen(&self) -> Screened {
        let mut screened = Screened::default();
        for option in &self.options {
            match option.ineligibility() {
                None => screened.eligible.push(*option),
                Some(reason) => {
                    trace!(id = option.id, ?reason, "excluding service option");
                    screened.excluded += 1;
                }
            }
        }
        screened
    }
}

impl FromIterator<(f64, f64)> for OptionSet {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let mut set = OptionSet::new();
        for (fuel_cost, revenue) in iter {
            set.push(fuel_cost, revenue);
        }
        set
    }
}

impl<'a> IntoIterator for &'a OptionSet {
    type Item = &'a ServiceOption;
    type IntoIter = std::slice::Iter<'a, ServiceOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}

/// Maximum cumulative fuel a selection may consume (the fuel reserve).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Budget(f64);

impl Budget {
    pub fn new(fuel: f64) -> Self {
        Self(fuel)
    }

    pub fn fuel(&self) -> f64 {
        self.0
    }

    /// Whether any fuel can be spent at all. False for zero, negative and NaN.
    pub fn is_spendable(&self) -> bool {
        self.0 > 0.0
    }
}

impl From<f64> for Budget {
    fn from(fuel: f64) -> Self {
        Self(fuel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_position() {
        let mut options = OptionSet::from_pairs([(1.0, 2.0), (3.0, 4.0)]);
        assert_eq!(options.push(5.0, 6.0), 2);

        let ids: Vec<usize> = options.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(options.get(2), Some(&ServiceOption::new(2, 5.0, 6.0)));
        assert!(options.get(3).is_none());
    }

    #[test]
    fn test_ineligibility_reasons() {
        let cases = [
            (f64::NAN, 1.0, Some(Ineligibility::NonFinite)),
            (1.0, f64::INFINITY, Some(Ineligibility::NonFinite)),
            (-1.0, 5.0, Some(Ineligibility::NegativeCost)),
            (0.0, 0.0, Some(Ineligibility::Degenerate)),
            (2.0, -3.0, Some(Ineligibility::NegativeRevenue)),
            (0.0, -1.0, Some(Ineligibility::NegativeRevenue)),
            (2.0, 0.0, None),
            (0.0, 4.0, None),
            (2.0, 4.0, None),
        ];

        for (cost, revenue, expected) in cases {
            let option = ServiceOption::new(0, cost, revenue);
            assert_eq!(option.ineligibility(), expected, "cost={cost} revenue={revenue}");
        }
    }

    #[test]
    fn test_screen_counts_excluded() {
        let options = OptionSet::from_pairs([
            (1.0, 2.0),
            (-1.0, 2.0),
            (0.0, 0.0),
            (3.0, f64::NAN),
            (0.0, 1.0),
            (4.0, 0.0),
        ]);
        let screened = options.screen();

        assert_eq!(screened.excluded, 3);
        let ids: Vec<usize> = screened.eligible.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![0, 4, 5]);
    }

    #[test]
    fn test_budget_spendable() {
        assert!(Budget::new(0.5).is_spendable());
        assert!(!Budget::new(0.0).is_spendable());
        assert!(!Budget::new(-2.0).is_spendable());
        assert!(!Budget::new(f64::NAN).is_spendable());
        assert_eq!(Budget::from(7.0).fuel(), 7.0);
    }
}
