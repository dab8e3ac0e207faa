//! End-to-end tests through the public facade.

use std::io::Write;

use knapforge::prelude::*;
use knapforge::{load_config, BounderType, Catalogue, EnvironmentMode, SolveReport};
use knapforge_test::{brute_force, InstanceGenerator};

#[test]
fn test_catalogue_to_report() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Lamp,60,10,lamp.png").unwrap();
    writeln!(file, "garbage line").unwrap();
    writeln!(file, "Chair,100,20,chair.png").unwrap();
    writeln!(file, "Desk,120,30,desk.png").unwrap();

    let catalogue = Catalogue::from_path(file.path()).unwrap();
    let solution = solve(&catalogue.items(), 50).unwrap();
    let report = SolveReport::new(&solution, 50).to_string();

    assert!(report.contains("Capacity used: 100.00% (50/50)"));
    assert!(report.contains("Maximum value: 220"));
    assert!(report.contains("- Chair: value 100, weight 20"));
    assert!(report.contains("- Desk: value 120, weight 30"));
    assert!(!report.contains("Lamp"));
}

#[test]
fn test_filtered_catalogue() {
    let catalogue: Catalogue = "Red Lamp,60,10,\nChair,100,20,\nBlue lamp,120,30,\n"
        .parse()
        .unwrap();
    let lamps = catalogue.filter_by_name("lamp");
    let solution = solve(&lamps.items(), 35).unwrap();
    assert_eq!(solution.total_value(), 120);
    assert_eq!(solution.items()[0].name(), "Blue lamp");
}

#[test]
fn test_negative_catalogue_value_is_rejected_by_solver() {
    let catalogue: Catalogue = "Debt,-5,3,\n".parse().unwrap();
    let err = solve(&catalogue.items(), 10).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_every_configuration_matches_oracle() {
    let strategies = [
        SearchStrategy::Auto,
        SearchStrategy::BruteForce,
        SearchStrategy::BranchAndBound,
        SearchStrategy::DynamicProgramming,
    ];
    let bounders = [
        BounderType::None,
        BounderType::RemainingValue,
        BounderType::Fractional,
    ];
    let mut generator = InstanceGenerator::new(2024)
        .with_max_value(40)
        .with_max_weight(25);

    for size in [0, 1, 2, 5, 9, 14] {
        let instance = generator.instance(size);
        let expected = brute_force(&instance.items, instance.capacity);
        for strategy in strategies {
            for bounder in bounders {
                let config = SolverConfig::new()
                    .with_strategy(strategy)
                    .with_bounder(bounder)
                    .with_environment_mode(EnvironmentMode::FullAssert);
                let result =
                    solve_with_config(&instance.items, instance.capacity, config).unwrap();
                assert_eq!(result.status, SolveStatus::Optimal);
                assert_eq!(
                    result.solution.indices(),
                    expected.indices.as_slice(),
                    "{strategy} / {bounder} on {size} items"
                );
            }
        }
    }
}

#[test]
fn test_many_items_do_not_overflow_the_stack() {
    // Every item is too heavy, so the search is one long exclude chain.
    let mut items: Vec<Item> = (0..100_000)
        .map(|i| Item::new(format!("heavy-{i}"), 1, 10))
        .collect();
    items.push(Item::new("free", 3, 0));
    let config = SolverConfig::new().with_bounder(BounderType::RemainingValue);
    let result = solve_with_config(&items, 5, config).unwrap();
    assert_eq!(result.solution.total_value(), 3);
    assert_eq!(result.solution.indices(), &[100_000]);
}

#[test]
fn test_load_config_falls_back_to_default() {
    let config = load_config("/nonexistent/solver.toml");
    assert_eq!(config, SolverConfig::default());

    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[search]\nstrategy = \"dynamic_programming\"").unwrap();
    let config = load_config(file.path());
    assert_eq!(config.search.strategy, SearchStrategy::DynamicProgramming);
}
