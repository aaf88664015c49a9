//! Structural summary of the loaded table.
//!
//! Produces the shape, per-column dtypes, duplicate-row count, and
//! per-column missing-value counts that the reporter prints before any
//! chart is rendered.

use crate::error::Result;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-column structural facts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub name: String,
    pub dtype: String,
    pub null_count: usize,
    pub null_percentage: f64,
}

/// Structural summary of the whole table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// (rows, columns)
    pub shape: (usize, usize),
    pub columns: Vec<ColumnSummary>,
    pub duplicate_count: usize,
    pub duplicate_percentage: f64,
}

impl DatasetSummary {
    /// Total missing cells across all columns.
    pub fn total_missing(&self) -> usize {
        self.columns.iter().map(|c| c.null_count).sum()
    }
}

/// Summarize the structure of a DataFrame.
pub fn summarize(df: &DataFrame) -> Result<DatasetSummary> {
    let height = df.height();

    let mut columns = Vec::with_capacity(df.width());
    for (name, dtype) in df.get_column_names().iter().zip(df.dtypes().iter()) {
        let null_count = df.column(name)?.as_materialized_series().null_count();
        let null_percentage = if height > 0 {
            (null_count as f64 / height as f64) * 100.0
        } else {
            0.0
        };
        columns.push(ColumnSummary {
            name: name.to_string(),
            dtype: format!("{:?}", dtype),
            null_count,
            null_percentage,
        });
    }

    let duplicate_count = height
        - df.unique::<&str, &str>(None, UniqueKeepStrategy::First, None)?
            .height();
    let duplicate_percentage = if height > 0 {
        (duplicate_count as f64 / height as f64) * 100.0
    } else {
        0.0
    };

    Ok(DatasetSummary {
        shape: df.shape(),
        columns,
        duplicate_count,
        duplicate_percentage,
    })
}

/// Copy of the table with every row containing a missing value removed.
///
/// The reporter prints the resulting shape; nothing downstream consumes the
/// copy itself.
pub fn drop_rows_with_nulls(df: &DataFrame) -> Result<DataFrame> {
    let height = df.height();
    let mut keep = vec![true; height];

    for column in df.get_columns() {
        let mask = column.as_materialized_series().is_null();
        for (i, flag) in keep.iter_mut().enumerate() {
            if mask.get(i).unwrap_or(false) {
                *flag = false;
            }
        }
    }

    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    Ok(df.filter(&mask)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_df() -> DataFrame {
        df!(
            "Company" => [Some("SpaceX"), Some("SpaceX"), Some("ULA"), None],
            "Rocket" => [Some("Falcon 9"), Some("Falcon 9"), Some("Atlas V"), Some("Vulcan")],
        )
        .unwrap()
    }

    #[test]
    fn test_summarize_counts_nulls() {
        let summary = summarize(&sample_df()).unwrap();
        assert_eq!(summary.shape, (4, 2));
        assert_eq!(summary.columns[0].null_count, 1);
        assert_eq!(summary.columns[1].null_count, 0);
        assert_eq!(summary.total_missing(), 1);
    }

    #[test]
    fn test_summarize_detects_duplicates() {
        let summary = summarize(&sample_df()).unwrap();
        assert_eq!(summary.duplicate_count, 1);
        assert!((summary.duplicate_percentage - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_drop_rows_with_nulls() {
        let cleaned = drop_rows_with_nulls(&sample_df()).unwrap();
        assert_eq!(cleaned.shape(), (3, 2));
    }

    #[test]
    fn test_no_duplicates_in_distinct_table() {
        let df = df!("A" => [1, 2, 3]).unwrap();
        let summary = summarize(&df).unwrap();
        assert_eq!(summary.duplicate_count, 0);
        assert_eq!(summary.duplicate_percentage, 0.0);
    }
}
