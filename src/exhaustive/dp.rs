//! Quantized 0/1 knapsack dynamic program.

use super::limits::{SearchLimits, SearchStats};
use super::path::Path;
use super::search::Incumbent;
use crate::error::OptimizeError;
use crate::model::ServiceOption;
use fixedbitset::FixedBitSet;
use tracing::warn;

/// Slack applied before rounding so `0.3 * 10` still quantizes to 3.
const QUANTIZE_EPSILON: f64 = 1e-9;

/// Solves the selection over `ranked` with costs rounded up to multiples of
/// `1 / resolution` and the budget rounded down.
///
/// Returns `None` when the quantized optimum is empty or fails the
/// real-valued budget check.
pub(crate) fn solve(
    ranked: &[ServiceOption],
    budget: f64,
    resolution: f64,
    max_cells: usize,
    limits: &SearchLimits,
) -> Result<(Option<Incumbent>, SearchStats), OptimizeError> {
    let mut stats = SearchStats::default();

    let capacity_units = (budget * resolution + QUANTIZE_EPSILON).floor();
    let cells = ranked.len() as f64 * (capacity_units + 1.0);
    if !cells.is_finite() || cells > max_cells as f64 {
        return Err(OptimizeError::TableTooLarge {
            cells: if cells.is_finite() { cells as u64 } else { u64::MAX },
            limit: max_cells,
        });
    }
    let capacity = capacity_units as usize;
    let width = capacity + 1;

    let weights: Vec<usize> = ranked
        .iter()
        .map(|o| (o.fuel_cost * resolution - QUANTIZE_EPSILON).ceil().max(0.0) as usize)
        .collect();

    // best[c] = highest revenue using at most c units
    let mut best = vec![0.0_f64; width];
    let mut take = FixedBitSet::with_capacity(ranked.len() * width);

    for (i, option) in ranked.iter().enumerate() {
        limits.charge(width as u64)?;
        stats.nodes += width as u64;

        let weight = weights[i];
        if weight > capacity {
            continue;
        }
        for c in (weight..=capacity).rev() {
            let candidate = best[c - weight] + option.revenue;
            if candidate > best[c] {
                best[c] = candidate;
                take.insert(i * width + c);
            }
        }
    }

    let mut picked = Vec::new();
    let mut c = capacity;
    for i in (0..ranked.len()).rev() {
        if take.contains(i * width + c) {
            picked.push(i);
            c -= weights[i];
        }
    }
    picked.reverse();

    if picked.is_empty() {
        return Ok((None, stats));
    }

    let mut incumbent = Incumbent::empty();
    for &i in &picked {
        incumbent.fuel_cost += ranked[i].fuel_cost;
        incumbent.revenue += ranked[i].revenue;
    }
    if incumbent.fuel_cost > budget {
        warn!(
            fuel_cost = incumbent.fuel_cost,
            budget, "quantized selection exceeds the budget, discarding it"
        );
        return Ok((None, stats));
    }
    incumbent.path = Path::from_ids(picked.iter().map(|&i| ranked[i].id));
    stats.improvements = 1;

    Ok((Some(incumbent), stats))
}
