//! Aggregate computations over the mission table.
//!
//! Everything in this module is a plain function over the DataFrame: value
//! counts, the success vocabulary and predicate, the two derived columns
//! (`Year`, `IsSuccessful`), yearly launch counts, and per-company success
//! rates. Chart rendering lives elsewhere so these stay testable.

use crate::error::{AnalysisError, Result, ResultExt};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use polars::prelude::*;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Column names the analysis keys on.
pub const COMPANY: &str = "Company";
pub const MISSION_STATUS: &str = "MissionStatus";
pub const DATE: &str = "Date";
pub const ROCKET: &str = "Rocket";
/// Derived: launch year extracted from `Date`.
pub const YEAR: &str = "Year";
/// Derived: whether `MissionStatus` matches the success vocabulary.
pub const IS_SUCCESSFUL: &str = "IsSuccessful";

/// Status strings always treated as indicating success, before any
/// data-derived additions.
pub const BASE_SUCCESS_VOCABULARY: [&str; 2] = ["Success", "Successful"];

/// Launch count and mean success rate for one company.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanySuccessRate {
    pub company: String,
    pub launches: u32,
    pub rate: f64,
}

/// Check whether a column exists by (trimmed) name.
pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_names().iter().any(|c| c.as_str() == name)
}

/// Read a column as optional strings, casting non-string dtypes through
/// their display form.
fn column_as_strings(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let series = df
        .column(name)
        .map_err(|_| AnalysisError::ColumnNotFound(name.to_string()))?
        .as_materialized_series()
        .clone();
    let casted = series
        .cast(&DataType::String)
        .context(format!("While reading column '{}'", name))?;
    let values = casted.str().context("While materializing string values")?;
    Ok(values
        .into_iter()
        .map(|v| v.map(|s| s.to_string()))
        .collect())
}

/// Frequency table for a column, sorted by count descending with name
/// ascending as the tie-break. Null values are not counted.
pub fn value_counts(df: &DataFrame, column: &str) -> Result<Vec<(String, u32)>> {
    let mut counts: HashMap<String, u32> = HashMap::new();
    for value in column_as_strings(df, column)?.into_iter().flatten() {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut counts: Vec<(String, u32)> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    Ok(counts)
}

/// The `n` most frequent values of a column.
pub fn top_values(df: &DataFrame, column: &str, n: usize) -> Result<Vec<(String, u32)>> {
    let mut counts = value_counts(df, column)?;
    counts.truncate(n);
    Ok(counts)
}

/// Distinct non-null status values, sorted for stable output.
pub fn unique_statuses(df: &DataFrame) -> Result<Vec<String>> {
    let set: BTreeSet<String> = column_as_strings(df, MISSION_STATUS)?
        .into_iter()
        .flatten()
        .collect();
    Ok(set.into_iter().collect())
}

/// Build the success vocabulary: the fixed base terms plus every observed
/// status containing "success" or "succeed" (case-insensitive).
pub fn success_vocabulary(df: &DataFrame) -> Result<Vec<String>> {
    let mut vocabulary: BTreeSet<String> = BASE_SUCCESS_VOCABULARY
        .iter()
        .map(|s| s.to_string())
        .collect();

    for status in unique_statuses(df)? {
        let lower = status.to_lowercase();
        if lower.contains("success") || lower.contains("succeed") {
            vocabulary.insert(status);
        }
    }

    Ok(vocabulary.into_iter().collect())
}

/// Whether a status value counts as a success: any vocabulary entry is a
/// case-insensitive substring of the status. Missing statuses are failures.
pub fn is_successful(status: Option<&str>, vocabulary: &[String]) -> bool {
    let Some(status) = status else {
        return false;
    };
    let status = status.to_lowercase();
    vocabulary
        .iter()
        .any(|term| status.contains(&term.to_lowercase()))
}

/// Add the boolean `IsSuccessful` column derived from `MissionStatus`.
pub fn add_is_successful_column(df: &mut DataFrame, vocabulary: &[String]) -> Result<()> {
    let flags: Vec<bool> = column_as_strings(df, MISSION_STATUS)?
        .iter()
        .map(|status| is_successful(status.as_deref(), vocabulary))
        .collect();
    df.with_column(Series::new(IS_SUCCESSFUL.into(), flags))?;
    Ok(())
}

/// Parse a launch date leniently. The archive mixes ISO dates with the
/// "Fri Aug 07, 2020 05:12 UTC" form; unparseable values become `None`.
pub fn parse_launch_date(raw: &str) -> Option<NaiveDate> {
    const DATETIME_FORMATS: [&str; 3] = [
        "%a %b %d, %Y %H:%M UTC",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
    ];
    const DATE_FORMATS: [&str; 5] = [
        "%a %b %d, %Y",
        "%Y-%m-%d",
        "%m/%d/%Y",
        "%d/%m/%Y",
        "%B %d, %Y",
    ];

    let raw = raw.trim();
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.date());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date);
        }
    }
    None
}

/// Add the `Year` column derived from `Date`. Rows whose date does not
/// parse get a null year.
pub fn add_year_column(df: &mut DataFrame) -> Result<()> {
    let years: Vec<Option<i32>> = column_as_strings(df, DATE)?
        .iter()
        .map(|raw| {
            raw.as_deref()
                .and_then(parse_launch_date)
                .map(|date| date.year())
        })
        .collect();
    df.with_column(Series::new(YEAR.into(), years))?;
    Ok(())
}

/// Launches per year, sorted by year ascending. Requires the derived
/// `Year` column; rows without a year contribute nothing.
pub fn yearly_launch_counts(df: &DataFrame) -> Result<Vec<(i32, u32)>> {
    let series = df
        .column(YEAR)
        .map_err(|_| AnalysisError::ColumnNotFound(YEAR.to_string()))?
        .as_materialized_series()
        .clone();
    let years = series.i32().context("While reading launch years")?;

    let mut counts: BTreeMap<i32, u32> = BTreeMap::new();
    for year in years.into_iter().flatten() {
        *counts.entry(year).or_insert(0) += 1;
    }
    Ok(counts.into_iter().collect())
}

/// Mean success rate for the `top` most active companies, sorted by rate
/// descending with name ascending as the tie-break. Requires the derived
/// `IsSuccessful` column.
pub fn success_rates_by_company(df: &DataFrame, top: usize) -> Result<Vec<CompanySuccessRate>> {
    let companies = column_as_strings(df, COMPANY)?;
    let series = df
        .column(IS_SUCCESSFUL)
        .map_err(|_| AnalysisError::ColumnNotFound(IS_SUCCESSFUL.to_string()))?
        .as_materialized_series()
        .clone();
    let flags = series.bool().context("While reading success flags")?;

    let mut tallies: HashMap<String, (u32, u32)> = HashMap::new();
    for (company, flag) in companies.into_iter().zip(flags.into_iter()) {
        let Some(company) = company else { continue };
        let entry = tallies.entry(company).or_insert((0, 0));
        entry.0 += 1;
        if flag.unwrap_or(false) {
            entry.1 += 1;
        }
    }

    // Restrict to the most active companies before ranking by rate.
    let mut by_launches: Vec<(String, (u32, u32))> = tallies.into_iter().collect();
    by_launches.sort_by(|a, b| b.1.0.cmp(&a.1.0).then_with(|| a.0.cmp(&b.0)));
    by_launches.truncate(top);

    let mut rates: Vec<CompanySuccessRate> = by_launches
        .into_iter()
        .map(|(company, (launches, successes))| CompanySuccessRate {
            company,
            launches,
            rate: successes as f64 / launches as f64,
        })
        .collect();
    rates.sort_by(|a, b| {
        b.rate
            .partial_cmp(&a.rate)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.company.cmp(&b.company))
    });
    Ok(rates)
}
