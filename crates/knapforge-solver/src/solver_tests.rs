//! Tests for the solver entry point.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use knapforge_test::{
    brute_force, classic_capacity, classic_items, infeasible_single, tied_items,
    InstanceGenerator,
};

use super::*;
use crate::termination::ExternalTermination;

fn all_configs() -> Vec<SolverConfig> {
    let mut configs = vec![
        SolverConfig::new().with_strategy(SearchStrategy::BruteForce),
        SolverConfig::new().with_strategy(SearchStrategy::DynamicProgramming),
        SolverConfig::new().with_strategy(SearchStrategy::Auto),
    ];
    for bounder in [
        BounderType::None,
        BounderType::RemainingValue,
        BounderType::Fractional,
    ] {
        configs.push(
            SolverConfig::new()
                .with_strategy(SearchStrategy::BranchAndBound)
                .with_bounder(bounder),
        );
    }
    configs
}

#[test]
fn test_classic_instance() {
    for config in all_configs() {
        let result = Solver::with_config(config.clone())
            .solve(&classic_items(), classic_capacity())
            .unwrap();
        assert_eq!(result.status, SolveStatus::Optimal, "{config:?}");
        assert_eq!(result.solution.total_value(), 220);
        assert_eq!(result.solution.indices(), &[1, 2]);
        let names: Vec<&str> = result.solution.items().iter().map(Item::name).collect();
        assert_eq!(names, vec!["B", "C"]);
        assert_eq!(result.solution.total_weight(), 50);
    }
}

#[test]
fn test_nothing_fits() {
    let result = Solver::new().solve(&infeasible_single(), 5).unwrap();
    assert!(result.is_optimal());
    assert_eq!(result.solution.total_value(), 0);
    assert!(result.solution.is_empty());
}

#[test]
fn test_degenerate_inputs() {
    let solver = Solver::new();

    let empty = solver.solve(&[], 10).unwrap().into_solution();
    assert_eq!(empty.total_value(), 0);
    assert!(empty.is_empty());

    let zero_capacity = solver.solve(&classic_items(), 0).unwrap().into_solution();
    assert_eq!(zero_capacity.total_value(), 0);
    assert!(zero_capacity.is_empty());

    let single = solver
        .solve(&[Item::new("only", 7, 3)], 3)
        .unwrap()
        .into_solution();
    assert_eq!(single.total_value(), 7);
    assert_eq!(single.indices(), &[0]);
}

#[test]
fn test_all_zero_values_select_nothing() {
    let items = vec![Item::new("a", 0, 1), Item::new("b", 0, 0)];
    for config in all_configs() {
        let solution = Solver::with_config(config).solve(&items, 5).unwrap().solution;
        assert_eq!(solution.total_value(), 0);
        assert!(solution.is_empty());
    }
}

#[test]
fn test_invalid_input() {
    let solver = Solver::new();

    let err = solver.solve(&classic_items(), -1).unwrap_err();
    assert!(err.is_invalid_input());

    let items = vec![Item::new("A", 10, 5), Item::new("bad", 4, -3)];
    let err = solver.solve(&items, 10).unwrap_err();
    assert!(err.is_invalid_input());
    assert!(err.to_string().contains("bad"));

    let items = vec![Item::new("neg", -1, 1)];
    assert!(solver.solve(&items, 10).unwrap_err().is_invalid_input());
}

#[test]
fn test_items_heavier_than_any_capacity_do_not_fail() {
    // Weights sum past i64::MAX, but only "Z" can ever be selected.
    let items = vec![
        Item::new("X", 1, i64::MAX),
        Item::new("Y", 1, i64::MAX),
        Item::new("Z", 7, 2),
    ];
    for config in all_configs() {
        let checked = config.clone().with_environment_mode(EnvironmentMode::FullAssert);
        let result = Solver::with_config(checked).solve(&items, 5).unwrap();
        assert!(result.is_optimal(), "{config:?}");
        assert_eq!(result.solution.total_value(), 7, "{config:?}");
        assert_eq!(result.solution.indices(), &[2], "{config:?}");
    }
}

#[test]
fn test_overflowing_selectable_values_are_invalid() {
    let items = vec![Item::new("a", i64::MAX, 1), Item::new("b", 1, 1)];
    let err = Solver::new().solve(&items, 10).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_invalid_config() {
    let solver = Solver::with_config(SolverConfig::new().with_dp_cell_limit(0));
    let err = solver.solve(&classic_items(), 50).unwrap_err();
    assert!(matches!(err, KnapsackError::Config(_)));
}

#[test]
fn test_tie_break_is_shared_by_all_strategies() {
    let items = tied_items();
    for config in all_configs() {
        let solution = Solver::with_config(config.clone())
            .solve(&items, 6)
            .unwrap()
            .solution;
        assert_eq!(solution.total_value(), 10, "{config:?}");
        assert_eq!(solution.indices(), &[3], "{config:?}");
    }
}

#[test]
fn test_matches_brute_force_oracle() {
    let mut generator = InstanceGenerator::new(0x5eed).with_max_value(6);
    for _ in 0..60 {
        let instance = generator.instance(12);
        let expected = brute_force(&instance.items, instance.capacity);
        for config in all_configs() {
            let solution = Solver::with_config(config.clone())
                .solve(&instance.items, instance.capacity)
                .unwrap()
                .solution;
            assert_eq!(solution.total_value(), expected.total_value, "{config:?}");
            assert_eq!(solution.indices(), expected.indices.as_slice(), "{config:?}");
            assert!(solution.total_weight() <= instance.capacity);
        }
    }
}

#[test]
fn test_monotone_in_capacity() {
    let mut generator = InstanceGenerator::new(42);
    let instance = generator.instance(10);
    let solver = Solver::new();
    let mut previous = 0;
    for capacity in 0..=instance.capacity + 5 {
        let value = solver
            .solve(&instance.items, capacity)
            .unwrap()
            .solution
            .total_value();
        assert!(value >= previous, "capacity {capacity}");
        previous = value;
    }
}

#[test]
fn test_deterministic() {
    let instance = InstanceGenerator::new(9).instance(14);
    let solver = Solver::new();
    let first = solver.solve(&instance.items, instance.capacity).unwrap();
    let second = solver.solve(&instance.items, instance.capacity).unwrap();
    assert_eq!(first.solution, second.solution);
    assert_eq!(
        first.statistics.nodes_explored,
        second.statistics.nodes_explored
    );
}

#[test]
fn test_concurrent_solves() {
    let solver = Solver::new();
    let instances: Vec<_> = (0..4)
        .map(|seed| InstanceGenerator::new(seed).instance(12))
        .collect();

    std::thread::scope(|s| {
        let handles: Vec<_> = instances
            .iter()
            .map(|instance| {
                let solver = &solver;
                s.spawn(move || solver.solve(&instance.items, instance.capacity).unwrap())
            })
            .collect();
        for (handle, instance) in handles.into_iter().zip(&instances) {
            let result = handle.join().unwrap();
            let expected = brute_force(&instance.items, instance.capacity);
            assert_eq!(result.solution.total_value(), expected.total_value);
        }
    });
}

#[test]
fn test_node_limit_returns_incumbent() {
    let instance = InstanceGenerator::new(3).instance(16);
    let config = SolverConfig::new()
        .with_strategy(SearchStrategy::BruteForce)
        .with_node_count_limit(1);
    let result = Solver::with_config(config)
        .solve(&instance.items, instance.capacity)
        .unwrap();
    assert_eq!(result.status, SolveStatus::Terminated);
    assert!(!result.is_optimal());
    assert!(result.solution.total_weight() <= instance.capacity);
    assert_eq!(result.statistics.nodes_explored, 1);
}

#[test]
fn test_node_limit_keeps_feasible_progress() {
    let items = InstanceGenerator::new(5).instance(16).items;
    // Half the total weight keeps the unpruned tree far above the limit.
    let capacity: i64 = items.iter().map(Item::weight).sum::<i64>() / 2;
    let config = SolverConfig::new()
        .with_strategy(SearchStrategy::BruteForce)
        .with_node_count_limit(200);
    let result = Solver::with_config(config).solve(&items, capacity).unwrap();
    let optimum = brute_force(&items, capacity);
    assert_eq!(result.status, SolveStatus::Terminated);
    assert_eq!(result.statistics.nodes_explored, 200);
    assert!(result.solution.total_value() <= optimum.total_value);
    result.solution.check_against(&items, capacity).unwrap();
}

#[test]
fn test_external_termination_before_solve() {
    let flag = Arc::new(AtomicBool::new(true));
    let solver = Solver::new().with_termination(ExternalTermination::new(flag.clone()));

    let result = solver.solve(&classic_items(), classic_capacity()).unwrap();
    assert_eq!(result.status, SolveStatus::Terminated);
    assert!(result.solution.is_empty());
    assert_eq!(result.statistics.nodes_explored, 0);

    flag.store(false, Ordering::Relaxed);
    let result = solver.solve(&classic_items(), classic_capacity()).unwrap();
    assert!(result.is_optimal());
    assert_eq!(result.solution.total_value(), 220);
}

#[test]
fn test_full_assert_mode() {
    let config = SolverConfig::new().with_environment_mode(EnvironmentMode::FullAssert);
    let mut generator = InstanceGenerator::new(11);
    for _ in 0..10 {
        let instance = generator.instance(10);
        let result = Solver::with_config(config.clone())
            .solve(&instance.items, instance.capacity)
            .unwrap();
        assert!(result.is_optimal());
    }
}

#[test]
fn test_resolve_strategy() {
    let auto = Solver::with_config(
        SolverConfig::new()
            .with_strategy(SearchStrategy::Auto)
            .with_dp_cell_limit(100),
    );
    // (3 + 1) * (24 + 1) = 100 cells
    assert_eq!(
        auto.resolve_strategy(3, 24),
        SearchStrategy::DynamicProgramming
    );
    assert_eq!(auto.resolve_strategy(3, 25), SearchStrategy::BranchAndBound);

    let dp = Solver::with_config(
        SolverConfig::new()
            .with_strategy(SearchStrategy::DynamicProgramming)
            .with_dp_cell_limit(100),
    );
    assert_eq!(dp.resolve_strategy(3, 24), SearchStrategy::DynamicProgramming);
    assert_eq!(dp.resolve_strategy(3, 1_000), SearchStrategy::BranchAndBound);

    let brute = Solver::with_config(SolverConfig::new().with_strategy(SearchStrategy::BruteForce));
    assert_eq!(brute.resolve_strategy(3, 1_000), SearchStrategy::BruteForce);
}

#[test]
fn test_statistics_report_strategy_used() {
    let config = SolverConfig::new()
        .with_strategy(SearchStrategy::DynamicProgramming)
        .with_dp_cell_limit(10);
    let result = Solver::with_config(config)
        .solve(&classic_items(), classic_capacity())
        .unwrap();
    assert_eq!(result.statistics.strategy, SearchStrategy::BranchAndBound);
    assert_eq!(result.statistics.bounder, Some(BounderType::Fractional));
    assert_eq!(result.statistics.table_cells, 0);
    assert_eq!(result.solution.total_value(), 220);

    let config = SolverConfig::new().with_strategy(SearchStrategy::DynamicProgramming);
    let result = Solver::with_config(config)
        .solve(&classic_items(), classic_capacity())
        .unwrap();
    assert_eq!(result.statistics.strategy, SearchStrategy::DynamicProgramming);
    assert_eq!(result.statistics.bounder, None);
    assert_eq!(result.statistics.table_cells, 4 * 51);
}

#[test]
fn test_solve_problem() {
    let problem = KnapsackProblem::new(classic_capacity(), classic_items());
    let result = Solver::new().solve_problem(&problem).unwrap();
    assert!(problem.is_feasible(&result.solution));
    assert_eq!(result.solution.total_value(), 220);
}
