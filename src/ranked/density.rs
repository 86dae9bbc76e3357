//! Value density ranking.

use crate::model::ServiceOption;

/// Revenue per unit of fuel.
///
/// Zero-cost options have infinite density. Callers screen out
/// ineligible options first, so the `0 / 0` case never reaches here.
pub fn density(option: &ServiceOption) -> f64 {
    if option.fuel_cost == 0.0 {
        f64::INFINITY
    } else {
        option.revenue / option.fuel_cost
    }
}

/// Sorts eligible options densest first, breaking ties by id ascending.
pub(crate) fn rank_by_density(options: Vec<ServiceOption>) -> Vec<ServiceOption> {
    let mut keyed: Vec<(f64, ServiceOption)> =
        options.into_iter().map(|o| (density(&o), o)).collect();

    keyed.sort_by(|(da, a), (db, b)| db.total_cmp(da).then_with(|| a.id.cmp(&b.id)));

    keyed.into_iter().map(|(_, o)| o).collect()
}
