//! Space-Missions EDA Library
//!
//! Exploratory data analysis for space-mission launch records, built with
//! Rust and Polars.
//!
//! # Overview
//!
//! This library provides the pieces of a small, linear analysis pipeline:
//!
//! - **Loading**: CSV ingestion with encoding fallback (Latin-1 first,
//!   lossy UTF-8 second) and column-name normalization
//! - **Profiling**: shape, dtypes, duplicate and missing-value counts
//! - **Aggregation**: value counts, yearly launch counts, success
//!   vocabulary and per-company success rates
//! - **Charts**: PNG rendering of the fixed artifact set (heatmap, ranked
//!   bars, pie, yearly trend)
//! - **Reporting**: the step pipeline plus an optional JSON run report
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use mission_eda::{AnalysisConfig, Reporter, loader};
//! use std::path::Path;
//!
//! let mut loaded = loader::load_dataset(Path::new("space_missions.csv"))?;
//!
//! let config = AnalysisConfig::builder()
//!     .output_dir("charts")
//!     .build()?;
//!
//! let outcome = Reporter::new(config)?.run(&mut loaded.df)?;
//! println!("{} chart(s) written", outcome.rendered_count());
//! ```
//!
//! Optional columns (`MissionStatus`, `Date`, `Rocket`) degrade to skipped
//! artifacts when absent; a missing `Company` column is a precondition
//! failure because the launch-count ranking is the core of the report.

pub mod charts;
pub mod config;
pub mod error;
pub mod loader;
pub mod profiler;
pub mod report;
pub mod reporter;
pub mod stats;
pub mod types;

// Re-exports for convenient access
pub use config::{AnalysisConfig, AnalysisConfigBuilder, ConfigValidationError};
pub use error::{AnalysisError, Result as AnalysisResult, ResultExt};
pub use loader::{LoadedDataset, SourceEncoding, load_dataset};
pub use profiler::{ColumnSummary, DatasetSummary};
pub use report::RunReport;
pub use reporter::{ALL_ARTIFACTS, Reporter};
pub use stats::CompanySuccessRate;
pub use types::{AnalysisOutcome, ArtifactRecord, ChartStatus};
