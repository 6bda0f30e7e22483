// ===== gramforge/tests/config_test.rs =====
use gramforge::config::{Config, DrillParams, SessionThresholds};
use gramforge::corpus::SourceKind;
use gramforge::error::GramForgeError;
use std::fs::File;
use std::io::Write;

#[test]
fn defaults_match_the_presets() {
    let config = Config::default();
    assert_eq!(config.drill.scope, None);
    assert_eq!(config.drill.combination, 2);
    assert_eq!(config.drill.repetition, 3);
    assert_eq!(config.thresholds.min_cpm, 200);
    assert_eq!(config.thresholds.min_accuracy, 100);
}

#[test]
fn zero_combination_is_a_config_error() {
    let params = DrillParams {
        combination: 0,
        ..Default::default()
    };
    let err = params.validate().unwrap_err();
    assert!(matches!(err, GramForgeError::Config(_)));
    assert!(err.to_string().contains("combination"));
}

#[test]
fn zero_repetition_is_a_config_error() {
    let params = DrillParams {
        repetition: 0,
        ..Default::default()
    };
    let err = params.validate().unwrap_err();
    assert!(matches!(err, GramForgeError::Config(_)));
    assert!(err.to_string().contains("repetition"));
}

#[test]
fn accuracy_above_100_is_a_config_error() {
    let thresholds = SessionThresholds {
        min_accuracy: 101,
        ..Default::default()
    };
    assert!(matches!(
        thresholds.validate().unwrap_err(),
        GramForgeError::Config(_)
    ));
}

#[test]
fn valid_params_pass_validation() {
    let config = Config::default();
    assert!(config.validate().is_ok());
}

#[test]
fn absent_scope_defaults_to_top_50_on_ranked_corpora() {
    let params = DrillParams::default();
    assert_eq!(params.scope_for(SourceKind::Bigrams), Some(50));
    assert_eq!(params.scope_for(SourceKind::Words), Some(50));
}

#[test]
fn absent_scope_means_everything_for_custom_words() {
    let params = DrillParams::default();
    assert_eq!(params.scope_for(SourceKind::CustomWords), None);
}

#[test]
fn explicit_zero_scope_means_the_whole_source() {
    let params = DrillParams {
        scope: Some(0),
        ..Default::default()
    };
    assert_eq!(params.scope_for(SourceKind::Bigrams), None);
}

#[test]
fn explicit_scope_wins_everywhere() {
    let params = DrillParams {
        scope: Some(150),
        ..Default::default()
    };
    assert_eq!(params.scope_for(SourceKind::CustomWords), Some(150));
    assert_eq!(params.scope_for(SourceKind::Trigrams), Some(150));
}

#[test]
fn profile_loads_partial_json_over_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("profile.json");
    let mut file = File::create(&path).unwrap();
    write!(
        file,
        r#"{{"drill": {{"combination": 4}}, "thresholds": {{"min_cpm": 150}}}}"#
    )
    .unwrap();

    let config = Config::load_from_file(&path).expect("profile load failed");
    assert_eq!(config.drill.combination, 4);
    // Unlisted fields keep their defaults.
    assert_eq!(config.drill.repetition, 3);
    assert_eq!(config.thresholds.min_cpm, 150);
    assert_eq!(config.thresholds.min_accuracy, 100);
}

#[test]
fn profile_may_omit_whole_sections() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("drill_only.json");
    let mut file = File::create(&path).unwrap();
    write!(file, r#"{{"drill": {{"scope": 100}}}}"#).unwrap();

    let config = Config::load_from_file(&path).expect("profile load failed");
    assert_eq!(config.drill.scope, Some(100));
    assert_eq!(config.thresholds.min_cpm, 200);
}

#[test]
fn profile_with_broken_json_is_a_json_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.json");
    let mut file = File::create(&path).unwrap();
    write!(file, "{{not json").unwrap();

    assert!(matches!(
        Config::load_from_file(&path).unwrap_err(),
        GramForgeError::Json(_)
    ));
}

#[test]
fn missing_profile_is_an_io_error() {
    assert!(matches!(
        Config::load_from_file("/definitely/not/here.json").unwrap_err(),
        GramForgeError::Io(_)
    ));
}
