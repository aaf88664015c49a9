//! JSON run report, written next to the chart artifacts on request.

use crate::error::Result;
use crate::loader::LoadedDataset;
use crate::types::AnalysisOutcome;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Machine-readable summary of one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Timestamp when the report was generated.
    pub generated_at: String,
    /// Path to the input file.
    pub input_file: String,
    /// Which decode attempt produced the table.
    pub encoding: String,
    /// Replacement characters introduced by a lossy decode.
    pub replaced_chars: usize,
    /// The run outcome: structural summary, vocabulary, artifact records.
    #[serde(flatten)]
    pub outcome: AnalysisOutcome,
}

impl RunReport {
    /// Assemble a report from the loaded dataset diagnostics and the run
    /// outcome.
    pub fn build(input_file: &str, loaded: &LoadedDataset, outcome: &AnalysisOutcome) -> Self {
        Self {
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            input_file: input_file.to_string(),
            encoding: loaded.encoding.as_str().to_string(),
            replaced_chars: loaded.replaced_chars,
            outcome: outcome.clone(),
        }
    }

    /// Write the report as `<base_name>_report.json` in `output_dir`.
    pub fn write_to_file(&self, output_dir: &Path, base_name: &str) -> Result<PathBuf> {
        fs::create_dir_all(output_dir)?;

        let report_path = output_dir.join(format!("{}_report.json", base_name));
        let mut file = File::create(&report_path)?;
        file.write_all(serde_json::to_string_pretty(self)?.as_bytes())?;

        info!("Report saved: {}", report_path.display());
        Ok(report_path)
    }
}
