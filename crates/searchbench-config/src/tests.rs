//! Tests for driver configuration.

use std::io::Write;

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        problems = ["rect20a", "rect20b"]
        heuristics = ["h_edist", "h_walldist"]
        strategies = ["a*"]
        verbosity = 3
        draw = true
        problem_files = ["extra.toml"]

        [benchmark]
        run_count = 4
    "#;

    let config = DriverConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.problems, vec!["rect20a", "rect20b"]);
    assert_eq!(config.heuristics, vec!["h_edist", "h_walldist"]);
    assert_eq!(config.verbosity, 3);
    assert!(config.draw);
    assert!(!config.time_tests);
    assert_eq!(config.problem_files, vec![PathBuf::from("extra.toml")]);
    assert_eq!(config.benchmark.warmup_count(), 1);
    assert_eq!(config.benchmark.run_count(), 4);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        problems: [wall8a]
        heuristics: [h0]
        strategies: [bf, uc]
        time_tests: true
        benchmark:
          warmup_count: 0
    "#;

    let config = DriverConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.strategies, vec!["bf", "uc"]);
    assert!(config.time_tests);
    assert_eq!(config.benchmark.warmup_count(), 0);
    assert_eq!(config.benchmark.run_count(), 10);
}

#[test]
fn test_unknown_key_rejected() {
    let err = DriverConfig::from_toml_str("problemz = [\"a\"]").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_load_picks_format_by_extension() {
    let dir = tempfile::tempdir().unwrap();

    let toml_path = dir.path().join("run.toml");
    let mut file = std::fs::File::create(&toml_path).unwrap();
    writeln!(file, "problems = [\"rect20a\"]").unwrap();
    writeln!(file, "problem_files = [\"tracks.toml\", \"/abs/other.toml\"]").unwrap();

    let config = DriverConfig::load(&toml_path).unwrap();
    assert_eq!(config.problems, vec!["rect20a"]);
    assert_eq!(
        config.problem_files,
        vec![dir.path().join("tracks.toml"), PathBuf::from("/abs/other.toml")]
    );

    let yaml_path = dir.path().join("run.yml");
    std::fs::write(&yaml_path, "heuristics: [h_esdist]\n").unwrap();
    let config = DriverConfig::load(&yaml_path).unwrap();
    assert_eq!(config.heuristics, vec!["h_esdist"]);
}

#[test]
fn test_load_rejects_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.ini");
    std::fs::write(&path, "").unwrap();

    assert!(matches!(
        DriverConfig::load(&path),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = DriverConfig::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_overrides_replace_lists() {
    let config = DriverConfig {
        problems: vec!["rect20a".into(), "rect20b".into()],
        heuristics: vec!["h0".into()],
        verbosity: 2,
        ..DriverConfig::default()
    };

    let merged = config.apply(Overrides {
        problems: vec!["wall8a".into()],
        verbosity: Some(0),
        time_tests: true,
        run_count: Some(3),
        ..Overrides::default()
    });

    assert_eq!(merged.problems, vec!["wall8a"]);
    assert_eq!(merged.heuristics, vec!["h0"]);
    assert_eq!(merged.verbosity, 0);
    assert!(merged.time_tests);
    assert!(!merged.draw);
    assert_eq!(merged.benchmark.run_count(), 3);
}

#[test]
fn test_selection_carries_modes() {
    let config = DriverConfig {
        strategies: vec!["gbf".into()],
        verbosity: 1,
        draw: true,
        time_tests: true,
        ..DriverConfig::default()
    };

    let selection = config.selection();
    assert_eq!(selection.strategies, vec!["gbf"]);
    assert_eq!(selection.verbosity, 1);
    assert!(selection.draw);
    assert!(selection.timing);
}

#[test]
fn test_zero_run_count_invalid() {
    let config = DriverConfig::new().apply(Overrides {
        run_count: Some(0),
        ..Overrides::default()
    });
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    assert!(DriverConfig::new().validate().is_ok());
}

#[test]
fn test_benchmark_config_from_settings() {
    let settings = BenchmarkSettings {
        warmup_count: Some(0),
        run_count: Some(7),
    };
    let config = settings.to_benchmark_config("bf, h0, rect20a");
    assert_eq!(config.name(), "bf, h0, rect20a");
    assert_eq!(config.warmup_count(), 0);
    assert_eq!(config.run_count(), 7);
}
