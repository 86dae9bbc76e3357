//! WebAssembly bindings.

use crate::model::{Budget, OptionSet};
use crate::optimizer::{Optimizer, Strategy};
use wasm_bindgen::prelude::*;

/// Selects servicing options and returns the serialized `SelectionResult`.
///
/// `fuel_costs[i]` and `revenues[i]` describe option `i`. `strategy` takes
/// the same names as [`Strategy`]'s `FromStr`.
#[wasm_bindgen]
pub fn optimize(
    fuel_costs: Vec<f64>,
    revenues: Vec<f64>,
    budget: f64,
    strategy: &str,
) -> Result<JsValue, JsValue> {
    if fuel_costs.len() != revenues.len() {
        return Err(JsValue::from_str(&format!(
            "expected as many revenues as fuel costs, got {} and {}",
            revenues.len(),
            fuel_costs.len()
        )));
    }

    let strategy: Strategy = strategy
        .parse()
        .map_err(|e: crate::error::OptimizeError| JsValue::from_str(&e.to_string()))?;
    let options: OptionSet = fuel_costs.into_iter().zip(revenues).collect();

    let selection = strategy
        .optimize(&options, Budget::new(budget))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&selection).map_err(|e| JsValue::from_str(&e.to_string()))
}
