//! Shared result types for the analysis run.

use crate::profiler::DatasetSummary;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What happened to one chart artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartStatus {
    /// The image was written.
    Rendered,
    /// A required column was absent; the chart was skipped.
    Skipped,
    /// Rendering was attempted and failed; the run continued.
    Failed,
}

/// Record of one chart step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactRecord {
    /// Fixed artifact file name, e.g. `top_companies.png`.
    pub name: String,
    pub status: ChartStatus,
    /// Full path of the written image, for rendered artifacts.
    pub path: Option<PathBuf>,
    /// Skip or failure reason.
    pub detail: Option<String>,
}

impl ArtifactRecord {
    pub fn rendered(name: &str, path: PathBuf) -> Self {
        Self {
            name: name.to_string(),
            status: ChartStatus::Rendered,
            path: Some(path),
            detail: None,
        }
    }

    pub fn skipped(name: &str, reason: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            status: ChartStatus::Skipped,
            path: None,
            detail: Some(reason.into()),
        }
    }

    pub fn failed(name: &str, reason: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            status: ChartStatus::Failed,
            path: None,
            detail: Some(reason.into()),
        }
    }
}

/// Everything a completed run produced, for console output and the JSON
/// report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub summary: DatasetSummary,
    /// Shape of the all-rows-complete copy (computed and reported only).
    pub cleaned_shape: (usize, usize),
    /// The success vocabulary, when `MissionStatus` was present.
    pub success_vocabulary: Option<Vec<String>>,
    pub artifacts: Vec<ArtifactRecord>,
}

impl AnalysisOutcome {
    /// Number of images actually written.
    pub fn rendered_count(&self) -> usize {
        self.artifacts
            .iter()
            .filter(|a| a.status == ChartStatus::Rendered)
            .count()
    }

    /// Look up one artifact record by file name.
    pub fn artifact(&self, name: &str) -> Option<&ArtifactRecord> {
        self.artifacts.iter().find(|a| a.name == name)
    }
}
