//! End-to-end scenarios through the public API.

use u_servicing::exhaustive::{ExhaustiveConfig, ExhaustiveSearchOptimizer};
use u_servicing::model::{Budget, OptionSet};
use u_servicing::{OptimizeError, Optimizer, Strategy};

#[test]
fn test_tie_broken_by_id_both_strategies_agree() {
    // A: 5/10, B: 3/9, C: 4/8
    let options = OptionSet::from_pairs([(5.0, 10.0), (3.0, 9.0), (4.0, 8.0)]);

    let heuristic = Strategy::ranked_fill()
        .optimize(&options, Budget::new(7.0))
        .unwrap();
    assert_eq!(heuristic.selected_ids, vec![1, 2]);
    assert_eq!(heuristic.total_revenue, 17.0);

    let exact = Strategy::exhaustive_search()
        .optimize(&options, Budget::new(7.0))
        .unwrap();
    assert_eq!(exact.total_revenue, 17.0);
    assert_eq!(exact.to_string(), "Maximum Revenue: $17\n1  ->  2");
}

#[test]
fn test_exact_beats_heuristic() {
    // X: 10/11, Y: 6/6, Z: 6/6
    let options = OptionSet::from_pairs([(10.0, 11.0), (6.0, 6.0), (6.0, 6.0)]);

    let heuristic = Strategy::ranked_fill()
        .optimize(&options, Budget::new(12.0))
        .unwrap();
    assert_eq!(heuristic.selected_ids, vec![0]);
    assert_eq!(heuristic.total_revenue, 11.0);

    let exact = Strategy::exhaustive_search()
        .optimize(&options, Budget::new(12.0))
        .unwrap();
    let mut ids = exact.selected_ids.clone();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(exact.total_revenue, 12.0);
    assert_eq!(exact.total_fuel_cost, 12.0);
}

#[test]
fn test_strategy_by_name() {
    let options = OptionSet::from_pairs([(10.0, 11.0), (6.0, 6.0), (6.0, 6.0)]);

    let lazy: Strategy = "greedy_lazy".parse().unwrap();
    let full: Strategy = "greedy".parse().unwrap();

    assert_eq!(lazy.optimize(&options, Budget::new(12.0)).unwrap().total_revenue, 11.0);
    assert_eq!(full.optimize(&options, Budget::new(12.0)).unwrap().total_revenue, 12.0);
}

#[test]
fn test_large_instance_within_step_budget() {
    let options: OptionSet = (0..200)
        .map(|i| {
            let cost = (i % 17 + 1) as f64;
            (cost, cost * 1.5 + (i % 5) as f64)
        })
        .collect();

    let optimizer =
        ExhaustiveSearchOptimizer::new(ExhaustiveConfig::default().with_max_nodes(5_000_000));
    let outcome = optimizer.run(&options, Budget::new(150.0)).unwrap();

    assert!(outcome.selection.total_fuel_cost <= 150.0);
    assert!(outcome.stats.nodes > 0);
}

#[test]
fn test_tiny_step_budget_fails_fast() {
    let options: OptionSet = (0..60)
        .map(|i| (((i * 13) % 29 + 3) as f64, ((i * 7) % 19 + 2) as f64))
        .collect();

    let result = ExhaustiveSearchOptimizer::new(
        ExhaustiveConfig::default()
            .with_warm_start(false)
            .with_max_nodes(50),
    )
    .run(&options, Budget::new(200.0));

    assert!(matches!(result, Err(OptimizeError::SearchBudgetExceeded { .. })));
}
