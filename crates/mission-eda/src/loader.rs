//! Dataset loading with encoding fallback.
//!
//! The launch archive circulates in inconsistent encodings, so the loader
//! decodes Latin-1 first (every byte maps to a character, which also covers
//! ISO-8859-1 exports) and falls back to lossy UTF-8 when the decoded text
//! does not parse as CSV. The number of replaced characters is logged so a
//! lossy load is never silent.

use crate::error::{AnalysisError, Result, ResultExt};
use polars::io::csv::read::{CsvParseOptions, CsvReadOptions};
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info, warn};

/// Which decode attempt produced the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    /// Latin-1 / ISO-8859-1 byte-to-char mapping.
    Latin1,
    /// UTF-8 with invalid sequences replaced by U+FFFD.
    Utf8Lossy,
}

impl SourceEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Latin1 => "latin-1",
            Self::Utf8Lossy => "utf-8 (lossy)",
        }
    }
}

/// A successfully loaded dataset together with decode diagnostics.
#[derive(Debug)]
pub struct LoadedDataset {
    pub df: DataFrame,
    pub encoding: SourceEncoding,
    /// Number of replacement characters introduced by a lossy decode.
    pub replaced_chars: usize,
}

/// Load the mission table from `path`, trying decode strategies in order.
///
/// A fully parsed table is returned or nothing is; no partial table ever
/// escapes this function. Column names are trimmed of surrounding
/// whitespace after a successful parse.
pub fn load_dataset(path: &Path) -> Result<LoadedDataset> {
    let bytes = std::fs::read(path)?;

    // First attempt: Latin-1. This mirrors the archive's ISO-8859-1 exports
    // and cannot fail at the decode stage, so any failure here comes from
    // CSV parsing itself.
    let latin1_text = decode_latin1(&bytes);
    match parse_csv(&latin1_text) {
        Ok(mut df) => {
            info!("Loaded dataset with latin-1 decoding");
            trim_column_names(&mut df)?;
            ensure_non_empty(&df)?;
            return Ok(LoadedDataset {
                df,
                encoding: SourceEncoding::Latin1,
                replaced_chars: 0,
            });
        }
        Err(e) => {
            debug!("CSV parse of latin-1 text failed: {}", e);
        }
    }

    // Second attempt: permissive UTF-8. Replacement can mask corrupt bytes,
    // so the replacement count is logged explicitly.
    let lossy_text = String::from_utf8_lossy(&bytes);
    let replaced_chars = lossy_text.matches(char::REPLACEMENT_CHARACTER).count();
    if replaced_chars > 0 {
        warn!(
            "UTF-8 decode replaced {} invalid character(s); values may be altered",
            replaced_chars
        );
    }
    match parse_csv(&lossy_text) {
        Ok(mut df) => {
            info!("Loaded dataset with utf-8 decoding and error replacement");
            trim_column_names(&mut df)?;
            ensure_non_empty(&df)?;
            Ok(LoadedDataset {
                df,
                encoding: SourceEncoding::Utf8Lossy,
                replaced_chars,
            })
        }
        Err(e) => Err(AnalysisError::LoadFailed(format!(
            "all decode attempts exhausted, last error: {}",
            e
        ))),
    }
}

/// Decode bytes as Latin-1. Every byte maps to the code point of the same
/// value, so this never fails.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Parse CSV text into a DataFrame using an in-memory reader.
fn parse_csv(text: &str) -> PolarsResult<DataFrame> {
    CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_quote_char(Some(b'"')))
        .into_reader_with_file_handle(Cursor::new(text.as_bytes()))
        .finish()
}

/// Strip leading/trailing whitespace from all column names in place.
fn trim_column_names(df: &mut DataFrame) -> Result<()> {
    let trimmed: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.trim().to_string())
        .collect();
    df.set_column_names(trimmed)
        .context("While normalizing column names")?;
    Ok(())
}

fn ensure_non_empty(df: &DataFrame) -> Result<()> {
    if df.height() == 0 {
        return Err(AnalysisError::EmptyDataset);
    }
    Ok(())
}
