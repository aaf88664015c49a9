//! The report pipeline: console diagnostics plus the chart artifacts.
//!
//! Each visualization step is an independent function taking the table and
//! returning an [`ArtifactRecord`]; steps share nothing beyond the table
//! and the two derived columns (`Year`, `IsSuccessful`) added in place.
//!
//! Note: this module uses `println!` intentionally for the structural
//! diagnostics. That text is the primary output of the tool and should
//! always be visible regardless of log level; `tracing` is used for
//! progress and warnings only.

use crate::charts;
use crate::charts::style;
use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};
use crate::profiler::{self, DatasetSummary};
use crate::stats;
use crate::types::{AnalysisOutcome, ArtifactRecord};
use polars::prelude::*;
use std::path::PathBuf;
use tracing::{info, warn};

/// Fixed artifact file names.
pub const MISSING_VALUES_HEATMAP: &str = "missing_values_heatmap.png";
pub const TOP_COMPANIES: &str = "top_companies.png";
pub const MISSION_STATUS_PIE: &str = "mission_status_pie.png";
pub const MISSION_STATUS_BAR: &str = "mission_status_bar.png";
pub const YEARLY_LAUNCHES: &str = "yearly_launches.png";
pub const SUCCESS_RATE_BY_COMPANY: &str = "success_rate_by_company.png";
pub const TOP_ROCKETS: &str = "top_rockets.png";

/// All artifact names, in pipeline order.
pub const ALL_ARTIFACTS: [&str; 7] = [
    MISSING_VALUES_HEATMAP,
    TOP_COMPANIES,
    MISSION_STATUS_PIE,
    MISSION_STATUS_BAR,
    YEARLY_LAUNCHES,
    SUCCESS_RATE_BY_COMPANY,
    TOP_ROCKETS,
];

/// Runs the analysis steps over a loaded table.
pub struct Reporter {
    config: AnalysisConfig,
}

impl Reporter {
    /// Create a reporter with a validated configuration.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| AnalysisError::InvalidConfig(e.to_string()))?;
        Ok(Self { config })
    }

    /// Execute every step in order, mutating the table in place with the
    /// derived columns. A missing `Company` column is a precondition
    /// failure; missing optional columns degrade to skipped artifacts.
    pub fn run(&self, df: &mut DataFrame) -> Result<AnalysisOutcome> {
        std::fs::create_dir_all(&self.config.output_dir)?;

        // Step 1: structural diagnostics.
        let summary = profiler::summarize(df)?;
        self.print_summary(&summary, df);

        let mut artifacts = Vec::with_capacity(ALL_ARTIFACTS.len());

        // Step 2: missing-value heatmap.
        artifacts.push(self.heatmap_step(df));

        // Step 3: cleaned copy, reported only.
        let cleaned_shape = profiler::drop_rows_with_nulls(df)?.shape();
        println!("\nShape after removing missing values: {:?}", cleaned_shape);

        // Step 4: top companies. The Company column is a hard precondition.
        if !stats::has_column(df, stats::COMPANY) {
            return Err(AnalysisError::ColumnNotFound(stats::COMPANY.to_string()));
        }
        artifacts.push(self.top_companies_step(df)?);

        // Step 5: mission status distribution (pie + bar).
        let (pie, bar) = self.status_steps(df)?;
        artifacts.push(pie);
        artifacts.push(bar);

        // Step 6: yearly launch trend. Failures here are logged, not fatal.
        artifacts.push(self.yearly_launches_step(df));

        // Step 7: success rate by company.
        let (success_artifact, success_vocabulary) = self.success_rate_step(df)?;
        artifacts.push(success_artifact);

        // Step 8: top rockets.
        artifacts.push(self.top_rockets_step(df)?);

        Ok(AnalysisOutcome {
            summary,
            cleaned_shape,
            success_vocabulary,
            artifacts,
        })
    }

    fn artifact_path(&self, name: &str) -> PathBuf {
        self.config.output_dir.join(name)
    }

    fn print_summary(&self, summary: &DatasetSummary, df: &DataFrame) {
        println!("Shape of the dataset: {:?}", summary.shape);

        println!("\nData types:");
        for column in &summary.columns {
            println!("  {:<24} {}", column.name, column.dtype);
        }

        println!("\nFirst {} rows:", self.config.head_rows);
        println!("{}", df.head(Some(self.config.head_rows)));

        println!("\nNumber of duplicate rows: {}", summary.duplicate_count);

        println!("\nMissing values in each column:");
        for column in &summary.columns {
            println!("  {:<24} {}", column.name, column.null_count);
        }
    }

    fn heatmap_step(&self, df: &DataFrame) -> ArtifactRecord {
        let path = self.artifact_path(MISSING_VALUES_HEATMAP);
        match charts::missing_values_heatmap(&path, "Missing Values Heatmap", df) {
            Ok(()) => {
                info!("Saved {}", path.display());
                ArtifactRecord::rendered(MISSING_VALUES_HEATMAP, path)
            }
            Err(e) => {
                warn!("Could not render missing-value heatmap: {}", e);
                ArtifactRecord::failed(MISSING_VALUES_HEATMAP, e.to_string())
            }
        }
    }

    fn top_companies_step(&self, df: &DataFrame) -> Result<ArtifactRecord> {
        let top = stats::top_values(df, stats::COMPANY, self.config.top_companies)?;
        let entries: Vec<(String, f64)> = top
            .into_iter()
            .map(|(name, count)| (name, count as f64))
            .collect();

        let path = self.artifact_path(TOP_COMPANIES);
        let record = match charts::horizontal_bar_chart(
            &path,
            &format!(
                "Top {} Most Active Space Organizations",
                self.config.top_companies
            ),
            "Number of Launches",
            "Company Name",
            &entries,
            &style::COOLWARM,
            None,
        ) {
            Ok(()) => {
                info!("Saved {}", path.display());
                ArtifactRecord::rendered(TOP_COMPANIES, path)
            }
            Err(e) => {
                warn!("Could not render top-companies chart: {}", e);
                ArtifactRecord::failed(TOP_COMPANIES, e.to_string())
            }
        };
        Ok(record)
    }

    fn status_steps(&self, df: &DataFrame) -> Result<(ArtifactRecord, ArtifactRecord)> {
        if !stats::has_column(df, stats::MISSION_STATUS) {
            println!("'{}' column not found in the dataset", stats::MISSION_STATUS);
            let reason = format!("column '{}' not present", stats::MISSION_STATUS);
            return Ok((
                ArtifactRecord::skipped(MISSION_STATUS_PIE, reason.clone()),
                ArtifactRecord::skipped(MISSION_STATUS_BAR, reason),
            ));
        }

        let counts = stats::value_counts(df, stats::MISSION_STATUS)?;

        let pie_path = self.artifact_path(MISSION_STATUS_PIE);
        let pie = match charts::pie_chart(
            &pie_path,
            "Mission Outcome Distribution",
            &counts,
            &style::STATUS_PIE_COLORS,
        ) {
            Ok(()) => {
                info!("Saved {}", pie_path.display());
                ArtifactRecord::rendered(MISSION_STATUS_PIE, pie_path)
            }
            Err(e) => {
                warn!("Could not render status pie chart: {}", e);
                ArtifactRecord::failed(MISSION_STATUS_PIE, e.to_string())
            }
        };

        let bar_entries: Vec<(String, f64)> = counts
            .iter()
            .map(|(name, count)| (name.clone(), *count as f64))
            .collect();
        let bar_path = self.artifact_path(MISSION_STATUS_BAR);
        let bar = match charts::vertical_bar_chart(
            &bar_path,
            "Mission Outcome Distribution",
            "Mission Status",
            "Number of Missions",
            &bar_entries,
            &style::STATUS_BAR_COLORS,
        ) {
            Ok(()) => {
                info!("Saved {}", bar_path.display());
                ArtifactRecord::rendered(MISSION_STATUS_BAR, bar_path)
            }
            Err(e) => {
                warn!("Could not render status bar chart: {}", e);
                ArtifactRecord::failed(MISSION_STATUS_BAR, e.to_string())
            }
        };

        Ok((pie, bar))
    }

    /// Step 6 carries its own catch-all: a failure while deriving years or
    /// drawing the trend is logged and the run continues.
    fn yearly_launches_step(&self, df: &mut DataFrame) -> ArtifactRecord {
        if !stats::has_column(df, stats::DATE) {
            println!("'{}' column not found in the dataset", stats::DATE);
            return ArtifactRecord::skipped(
                YEARLY_LAUNCHES,
                format!("column '{}' not present", stats::DATE),
            );
        }

        match self.render_yearly_launches(df) {
            Ok(record) => record,
            Err(e) => {
                warn!("Error processing date column: {}", e);
                ArtifactRecord::failed(YEARLY_LAUNCHES, e.to_string())
            }
        }
    }

    fn render_yearly_launches(&self, df: &mut DataFrame) -> Result<ArtifactRecord> {
        stats::add_year_column(df)?;
        let counts = stats::yearly_launch_counts(df)?;
        if counts.is_empty() {
            warn!("No parseable dates; skipping yearly launch chart");
            return Ok(ArtifactRecord::skipped(
                YEARLY_LAUNCHES,
                "no parseable dates",
            ));
        }

        let path = self.artifact_path(YEARLY_LAUNCHES);
        match charts::line_chart(
            &path,
            "Year-wise Space Launch Frequency",
            "Year",
            "Number of Launches",
            &counts,
            &style::TREND_LINE_COLOR,
        ) {
            Ok(()) => {
                info!("Saved {}", path.display());
                Ok(ArtifactRecord::rendered(YEARLY_LAUNCHES, path))
            }
            Err(e) => {
                warn!("Could not render yearly launch chart: {}", e);
                Ok(ArtifactRecord::failed(YEARLY_LAUNCHES, e.to_string()))
            }
        }
    }

    fn success_rate_step(
        &self,
        df: &mut DataFrame,
    ) -> Result<(ArtifactRecord, Option<Vec<String>>)> {
        if !stats::has_column(df, stats::MISSION_STATUS) {
            // Company presence was already enforced in step 4.
            return Ok((
                ArtifactRecord::skipped(
                    SUCCESS_RATE_BY_COMPANY,
                    format!("column '{}' not present", stats::MISSION_STATUS),
                ),
                None,
            ));
        }

        println!("\nUnique mission status values:");
        for status in stats::unique_statuses(df)? {
            println!("  {}", status);
        }

        let vocabulary = stats::success_vocabulary(df)?;
        println!(
            "Using these values as success indicators: {:?}",
            vocabulary
        );

        stats::add_is_successful_column(df, &vocabulary)?;
        let rates = stats::success_rates_by_company(df, self.config.success_rate_companies)?;
        let entries: Vec<(String, f64)> = rates
            .into_iter()
            .map(|r| (r.company, r.rate))
            .collect();

        let path = self.artifact_path(SUCCESS_RATE_BY_COMPANY);
        let record = match charts::horizontal_bar_chart(
            &path,
            "Success Rate by Space Organization",
            "Success Rate",
            "Company",
            &entries,
            &style::VIRIDIS,
            Some(1.0), // rates live in [0, 1]
        ) {
            Ok(()) => {
                info!("Saved {}", path.display());
                ArtifactRecord::rendered(SUCCESS_RATE_BY_COMPANY, path)
            }
            Err(e) => {
                warn!("Could not render success-rate chart: {}", e);
                ArtifactRecord::failed(SUCCESS_RATE_BY_COMPANY, e.to_string())
            }
        };

        Ok((record, Some(vocabulary)))
    }

    fn top_rockets_step(&self, df: &DataFrame) -> Result<ArtifactRecord> {
        if !stats::has_column(df, stats::ROCKET) {
            println!("'{}' column not found in the dataset", stats::ROCKET);
            return Ok(ArtifactRecord::skipped(
                TOP_ROCKETS,
                format!("column '{}' not present", stats::ROCKET),
            ));
        }

        let top = stats::top_values(df, stats::ROCKET, self.config.top_rockets)?;
        let entries: Vec<(String, f64)> = top
            .into_iter()
            .map(|(name, count)| (name, count as f64))
            .collect();

        let path = self.artifact_path(TOP_ROCKETS);
        let record = match charts::horizontal_bar_chart(
            &path,
            &format!("Top {} Most Used Rockets", self.config.top_rockets),
            "Number of Launches",
            "Rocket Name",
            &entries,
            &style::MAGMA,
            None,
        ) {
            Ok(()) => {
                info!("Saved {}", path.display());
                ArtifactRecord::rendered(TOP_ROCKETS, path)
            }
            Err(e) => {
                warn!("Could not render top-rockets chart: {}", e);
                ArtifactRecord::failed(TOP_ROCKETS, e.to_string())
            }
        };
        Ok(record)
    }
}
