//! Integration tests for the full analysis run.
//!
//! These tests exercise loading, the step pipeline, and the artifact set
//! end-to-end against small CSV fixtures.

use mission_eda::{
    AnalysisConfig, AnalysisError, ChartStatus, Reporter, RunReport, loader, reporter,
};
use std::path::PathBuf;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_fixture(filename: &str) -> loader::LoadedDataset {
    loader::load_dataset(&fixtures_path().join(filename)).expect("Failed to load fixture")
}

fn reporter_for(dir: &tempfile::TempDir) -> Reporter {
    let config = AnalysisConfig::builder()
        .output_dir(dir.path())
        .build()
        .expect("Config should validate");
    Reporter::new(config).expect("Reporter should build")
}

// ============================================================================
// Full Run
// ============================================================================

#[test]
fn test_full_run_produces_all_artifacts() {
    let mut loaded = load_fixture("space_missions.csv");
    let dir = tempfile::tempdir().unwrap();

    let outcome = reporter_for(&dir).run(&mut loaded.df).unwrap();

    assert_eq!(outcome.artifacts.len(), reporter::ALL_ARTIFACTS.len());
    assert_eq!(outcome.rendered_count(), reporter::ALL_ARTIFACTS.len());
    for name in reporter::ALL_ARTIFACTS {
        let path = dir.path().join(name);
        assert!(path.exists(), "Expected artifact {} to exist", name);
        assert!(
            std::fs::metadata(&path).unwrap().len() > 0,
            "Artifact {} should not be empty",
            name
        );
    }
}

#[test]
fn test_full_run_summary_counts() {
    let mut loaded = load_fixture("space_missions.csv");
    let dir = tempfile::tempdir().unwrap();

    let outcome = reporter_for(&dir).run(&mut loaded.df).unwrap();

    // The fixture has 12 rows, one of which duplicates another.
    assert_eq!(outcome.summary.shape.0, 12);
    assert_eq!(outcome.summary.duplicate_count, 1);

    // Three rows have a null Price; the cleaned copy drops exactly those.
    assert_eq!(outcome.cleaned_shape.0, 9);
    // The original table is untouched by the cleaned-copy step (aside from
    // the derived Year and IsSuccessful columns added later).
    assert_eq!(loaded.df.height(), 12);

    let vocabulary = outcome.success_vocabulary.as_ref().unwrap();
    assert!(vocabulary.contains(&"Success".to_string()));
}

// ============================================================================
// Degraded Inputs
// ============================================================================

#[test]
fn test_missing_status_column_skips_status_charts() {
    let mut loaded = load_fixture("no_status.csv");
    let dir = tempfile::tempdir().unwrap();

    let outcome = reporter_for(&dir).run(&mut loaded.df).unwrap();

    for name in [
        reporter::MISSION_STATUS_PIE,
        reporter::MISSION_STATUS_BAR,
        reporter::SUCCESS_RATE_BY_COMPANY,
    ] {
        let record = outcome.artifact(name).unwrap();
        assert_eq!(record.status, ChartStatus::Skipped, "{} should skip", name);
        assert!(!dir.path().join(name).exists());
    }

    // The remaining charts still render.
    for name in [
        reporter::MISSING_VALUES_HEATMAP,
        reporter::TOP_COMPANIES,
        reporter::YEARLY_LAUNCHES,
        reporter::TOP_ROCKETS,
    ] {
        assert!(dir.path().join(name).exists(), "{} should render", name);
    }

    assert!(outcome.success_vocabulary.is_none());
}

#[test]
fn test_missing_company_column_is_fatal() {
    let mut loaded = load_fixture("no_company.csv");
    let dir = tempfile::tempdir().unwrap();

    let result = reporter_for(&dir).run(&mut loaded.df);

    match result {
        Err(AnalysisError::ColumnNotFound(column)) => assert_eq!(column, "Company"),
        other => panic!("Expected ColumnNotFound, got {:?}", other),
    }
}

#[test]
fn test_unparseable_dates_do_not_abort_the_run() {
    let mut loaded = load_fixture("bad_dates.csv");
    let dir = tempfile::tempdir().unwrap();

    let outcome = reporter_for(&dir).run(&mut loaded.df).unwrap();

    // No row yields a year, so the trend chart is skipped, not fatal.
    let record = outcome.artifact(reporter::YEARLY_LAUNCHES).unwrap();
    assert_eq!(record.status, ChartStatus::Skipped);

    // Everything downstream of the date step still ran.
    assert!(dir.path().join(reporter::SUCCESS_RATE_BY_COMPANY).exists());
    assert!(dir.path().join(reporter::TOP_ROCKETS).exists());
}

// ============================================================================
// Encoding Fallback
// ============================================================================

#[test]
fn test_latin1_fixture_loads_and_runs() {
    let loaded = load_fixture("latin1_missions.csv");
    assert_eq!(loaded.encoding, loader::SourceEncoding::Latin1);
    assert_eq!(loaded.replaced_chars, 0);

    // The 0xE9 byte decodes to 'é' rather than a replacement character.
    let rockets: Vec<String> = loaded
        .df
        .column("Rocket")
        .unwrap()
        .as_materialized_series()
        .str()
        .unwrap()
        .into_iter()
        .flatten()
        .map(|s| s.to_string())
        .collect();
    assert!(rockets.iter().any(|r| r.contains('é')));

    let mut df = loaded.df;
    let dir = tempfile::tempdir().unwrap();
    let outcome = reporter_for(&dir).run(&mut df).unwrap();
    assert_eq!(outcome.artifacts.len(), reporter::ALL_ARTIFACTS.len());
}

#[test]
fn test_missing_input_file_errors() {
    let result = loader::load_dataset(&fixtures_path().join("does_not_exist.csv"));
    assert!(matches!(result, Err(AnalysisError::Io(_))));
}

// ============================================================================
// Run Report
// ============================================================================

#[test]
fn test_run_report_written_next_to_artifacts() {
    let mut loaded = load_fixture("space_missions.csv");
    let dir = tempfile::tempdir().unwrap();

    let outcome = reporter_for(&dir).run(&mut loaded.df).unwrap();

    let report = RunReport::build("space_missions.csv", &loaded, &outcome);
    let path = report.write_to_file(dir.path(), "space_missions").unwrap();
    assert!(path.exists());

    let text = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed["encoding"], "latin-1");
    assert_eq!(
        parsed["artifacts"].as_array().unwrap().len(),
        reporter::ALL_ARTIFACTS.len()
    );
}
