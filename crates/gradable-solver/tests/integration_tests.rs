//! Integration tests for gradable-solver
//!
//! These tests run the whole pipeline on small hand-written tables.

use gradable_domain::{EquationTable, Relation};
use gradable_solver::{ScalePipeline, SolverConfig, SolverError, VariableMode};

fn temperature_table() -> EquationTable {
    vec![
        Relation::new("cold", "high_prop", -1.0, "having a low temperature"),
        Relation::new("hot", "high_prop", 1.0, "having a high temperature"),
        Relation::new("warm", "hot", 0.6, "somewhat hot"),
        Relation::new("cool", "cold", 0.6, "somewhat cold"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_temperature_scale() {
    let report = ScalePipeline::new(SolverConfig::default())
        .run(&temperature_table())
        .unwrap();

    let ranking = &report.ranking;
    assert_eq!(ranking.score_of("cold"), Some(-10.0));
    assert_eq!(ranking.score_of("cool"), Some(-6.0));
    assert_eq!(ranking.score_of("warm"), Some(6.0));
    assert_eq!(ranking.score_of("hot"), Some(10.0));
    assert_eq!(report.anchor_score(), Some(10.0));

    let cold = ranking.position("cold").unwrap();
    let cool = ranking.position("cool").unwrap();
    let warm = ranking.position("warm").unwrap();
    let hot = ranking.position("hot").unwrap();
    assert!(cold < cool && cool < warm && warm < hot);
}

#[test]
fn test_anchor_only_table() {
    let mut table = EquationTable::new();
    table.insert(Relation::new("high_prop", "high_prop", 1.0, "self reference"));

    let report = ScalePipeline::new(SolverConfig::default()).run(&table).unwrap();
    assert_eq!(report.ranking.len(), 1);
    assert_eq!(report.ranking.words(), vec!["high_prop"]);
    assert_eq!(report.anchor_score(), Some(10.0));
}

#[test]
fn test_missing_anchor_is_input_error() {
    let table: EquationTable = vec![Relation::new("warm", "hot", 0.6, "somewhat hot")]
        .into_iter()
        .collect();

    for config in [SolverConfig::default(), SolverConfig::all_words()] {
        let err = ScalePipeline::new(config).run(&table).unwrap_err();
        assert!(matches!(err, SolverError::MissingAnchor(_)));
        assert!(err.to_string().contains("high_prop"));
    }
}

#[test]
fn test_zero_factor_relation_skipped() {
    let mut table = temperature_table();
    table.insert(Relation::new("tepid", "warm", 0.0, "neither warm nor cool"));
    table.insert(Relation::new("tepid", "high_prop", 0.3, "of a slightly high temperature"));

    let report = ScalePipeline::new(SolverConfig::default()).run(&table).unwrap();
    let tepid = report.system.index_of("tepid").unwrap();
    let warm = report.system.index_of("warm").unwrap();

    // Only the non-zero relation contributes to tepid's row
    assert_eq!(report.system.matrix[(tepid, tepid)], 1.0);
    assert_eq!(report.system.matrix[(tepid, warm)], 0.0);
    assert_eq!(report.ranking.score_of("tepid"), Some(3.0));
    assert_eq!(table.stats().zero_factor, 1);
}

#[test]
fn test_zero_factor_relation_skipped_in_all_mode() {
    let table: EquationTable = vec![
        Relation::new("hot", "high_prop", 1.0, "having a high temperature"),
        Relation::new("tepid", "hot", 0.0, "not hot"),
    ]
    .into_iter()
    .collect();

    let report = ScalePipeline::new(SolverConfig::all_words()).run(&table).unwrap();
    assert_eq!(report.system.len(), 2);
    assert!(report.system.index_of("tepid").is_none());
    assert!(report.ranking.score_of("tepid").is_none());
    assert_eq!(report.ranking.words(), vec!["high_prop", "hot"]);
    assert_eq!(report.solution.rank, 2);
}

#[test]
fn test_anchor_only_in_skipped_rows_is_missing() {
    let zero: EquationTable = vec![
        Relation::new("hot", "warm", 1.0, "warm"),
        Relation::new("cold", "high_prop", 0.0, "not hot"),
    ]
    .into_iter()
    .collect();
    let deduced: EquationTable = vec![
        Relation::new("hot", "warm", 1.0, "warm"),
        Relation::new("high_prop", "hot", 1.0, "hot").deduced(),
    ]
    .into_iter()
    .collect();

    for table in [&zero, &deduced] {
        for config in [SolverConfig::default(), SolverConfig::all_words()] {
            let err = ScalePipeline::new(config).run(table).unwrap_err();
            assert!(matches!(err, SolverError::MissingAnchor(ref a) if a == "high_prop"));
        }
    }
}

#[test]
fn test_disconnected_pair_by_mode() {
    let mut table = temperature_table();
    table.insert(Relation::new("balmy", "sultry", 0.8, "rather sultry"));
    table.insert(Relation::new("sultry", "balmy", 1.4, "very balmy"));

    let connected = ScalePipeline::new(SolverConfig::default()).run(&table).unwrap();
    assert_eq!(connected.mode, VariableMode::Connected);
    assert!(connected.ranking.position("balmy").is_none());
    assert!(connected.ranking.position("sultry").is_none());
    assert_eq!(connected.ranking.len(), 5);

    let all = ScalePipeline::new(SolverConfig::all_words()).run(&table).unwrap();
    assert_eq!(all.mode, VariableMode::All);
    assert_eq!(all.ranking.len(), 7);
    assert!(all.ranking.score_of("balmy").unwrap().is_finite());
    assert!(all.ranking.score_of("sultry").unwrap().is_finite());
    assert_eq!(all.anchor_score(), Some(10.0));
    // Connected words are unaffected by the extra component
    assert_eq!(all.ranking.score_of("warm"), Some(6.0));
}

#[test]
fn test_all_mode_rank_deficient_best_fit() {
    let mut table = temperature_table();
    // Mutually consistent but unanchored: any balmy = sultry fits
    table.insert(Relation::new("balmy", "sultry", 1.0, "sultry"));
    table.insert(Relation::new("sultry", "balmy", 1.0, "balmy"));

    let report = ScalePipeline::new(SolverConfig::all_words()).run(&table).unwrap();
    assert!(report.solution.rank < report.system.len());
    assert_eq!(report.ranking.score_of("balmy"), Some(0.0));
    assert_eq!(report.ranking.score_of("sultry"), Some(0.0));
}

#[test]
fn test_deduced_relations_ignored() {
    let mut table = temperature_table();
    let extra = Relation::new("warm", "hot", 0.6, "somewhat hot");
    table.insert(extra.reciprocal().unwrap());

    let report = ScalePipeline::new(SolverConfig::default()).run(&table).unwrap();
    assert_eq!(report.system.equation_count, 4);
    assert_eq!(report.ranking.score_of("hot"), Some(10.0));
}

#[test]
fn test_deduced_setting_must_match_table() {
    let mut config = SolverConfig::default();
    config.include_deduced = true;
    let err = ScalePipeline::new(config).run(&temperature_table()).unwrap_err();
    assert!(matches!(err, SolverError::Config(_)));

    let mut table = EquationTable::including_deduced();
    table.extend(vec![
        Relation::new("hot", "high_prop", 1.0, "hot"),
        Relation::new("warm", "hot", 0.5, "fairly hot"),
        Relation::new("warm", "hot", 0.5, "fairly hot").reciprocal().unwrap(),
    ]);
    let err = ScalePipeline::new(SolverConfig::default()).run(&table).unwrap_err();
    assert!(matches!(err, SolverError::Config(_)));

    let mut config = SolverConfig::default();
    config.include_deduced = true;
    let report = ScalePipeline::new(config).run(&table).unwrap();
    assert_eq!(report.system.equation_count, 3);
}

#[test]
fn test_runs_are_identical() {
    let table = temperature_table();
    let pipeline = ScalePipeline::new(SolverConfig::default());
    let first = pipeline.run(&table).unwrap();
    let second = pipeline.run(&table).unwrap();

    assert_eq!(first.system, second.system);
    assert_eq!(first.solution, second.solution);
    assert_eq!(first.ranking, second.ranking);
}
