//! Configuration types for the analysis run.
//!
//! This module provides configuration options using the builder pattern
//! for flexible and ergonomic setup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for an analysis run.
///
/// Use [`AnalysisConfig::builder()`] to create a new configuration with
/// a fluent API.
///
/// # Example
///
/// ```rust,ignore
/// use mission_eda::config::AnalysisConfig;
///
/// let config = AnalysisConfig::builder()
///     .output_dir("charts")
///     .top_companies(10)
///     .build()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Directory where chart images and reports are written.
    /// Default: "." (the working directory, as the original tool behaves)
    pub output_dir: PathBuf,

    /// Number of preview rows printed in the structural summary.
    /// Default: 5
    pub head_rows: usize,

    /// Number of companies shown in the launch-count chart.
    /// Default: 10
    pub top_companies: usize,

    /// Number of rockets shown in the rocket-usage chart.
    /// Default: 10
    pub top_rockets: usize,

    /// Number of most-active companies considered for the success-rate chart.
    /// Default: 8
    pub success_rate_companies: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            head_rows: 5,
            top_companies: 10,
            top_rockets: 10,
            success_rate_companies: 8,
        }
    }
}

impl AnalysisConfig {
    /// Create a new configuration builder.
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.head_rows == 0 {
            return Err(ConfigValidationError::InvalidCount {
                field: "head_rows",
                value: self.head_rows,
            });
        }
        if self.top_companies == 0 {
            return Err(ConfigValidationError::InvalidCount {
                field: "top_companies",
                value: self.top_companies,
            });
        }
        if self.top_rockets == 0 {
            return Err(ConfigValidationError::InvalidCount {
                field: "top_rockets",
                value: self.top_rockets,
            });
        }
        if self.success_rate_companies == 0 {
            return Err(ConfigValidationError::InvalidCount {
                field: "success_rate_companies",
                value: self.success_rate_companies,
            });
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigValidationError::EmptyOutputDir);
        }
        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid value for '{field}': {value} (must be at least 1)")]
    InvalidCount { field: &'static str, value: usize },

    #[error("Output directory must not be empty")]
    EmptyOutputDir,
}

/// Builder for [`AnalysisConfig`].
#[derive(Debug, Default)]
pub struct AnalysisConfigBuilder {
    config: AnalysisConfig,
}

impl AnalysisConfigBuilder {
    /// Set the output directory for charts and reports.
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    /// Set the number of preview rows printed in the summary.
    pub fn head_rows(mut self, n: usize) -> Self {
        self.config.head_rows = n;
        self
    }

    /// Set the number of companies shown in the launch-count chart.
    pub fn top_companies(mut self, n: usize) -> Self {
        self.config.top_companies = n;
        self
    }

    /// Set the number of rockets shown in the rocket-usage chart.
    pub fn top_rockets(mut self, n: usize) -> Self {
        self.config.top_rockets = n;
        self
    }

    /// Set the number of companies considered for the success-rate chart.
    pub fn success_rate_companies(mut self, n: usize) -> Self {
        self.config.success_rate_companies = n;
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<AnalysisConfig, ConfigValidationError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AnalysisConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.top_companies, 10);
        assert_eq!(config.success_rate_companies, 8);
    }

    #[test]
    fn test_builder_overrides() {
        let config = AnalysisConfig::builder()
            .output_dir("charts")
            .top_companies(5)
            .build()
            .unwrap();
        assert_eq!(config.output_dir, PathBuf::from("charts"));
        assert_eq!(config.top_companies, 5);
        assert_eq!(config.top_rockets, 10); // untouched default
    }

    #[test]
    fn test_zero_count_rejected() {
        let result = AnalysisConfig::builder().top_companies(0).build();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("top_companies"));
    }

    #[test]
    fn test_empty_output_dir_rejected() {
        let result = AnalysisConfig::builder().output_dir("").build();
        assert!(matches!(
            result,
            Err(ConfigValidationError::EmptyOutputDir)
        ));
    }
}
