//! Term dataset loading.
//!
//! The dataset is a JSON array of entry objects, supplied externally and
//! loaded once at startup. Content problems degrade instead of failing:
//! a top-level value that isn't an array becomes the empty list, and
//! array elements that aren't entry objects are skipped. Only a missing
//! or unreadable file — a path the user explicitly pointed at — is an
//! error.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::core::types::TermEntry;

/// Errors that can occur while loading the term dataset.
#[derive(Debug, Error)]
pub enum DataError {
    /// The dataset file does not exist.
    #[error("Term dataset not found: {0}")]
    NotFound(PathBuf),
    /// The dataset file is not valid JSON at all.
    #[error("Term dataset is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load the term dataset from a JSON file.
///
/// # Errors
///
/// Returns `DataError::NotFound` for a missing file and
/// `DataError::Parse` when the file isn't JSON. A JSON document whose
/// top level isn't an array yields `Ok` with an empty list.
pub fn load_terms(path: &Path) -> Result<Vec<TermEntry>, DataError> {
    if !path.exists() {
        return Err(DataError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content)?;
    Ok(entries_from_value(value))
}

/// Interpret an already-parsed JSON value as the term list.
///
/// Non-array input degrades to the empty list; elements that don't
/// deserialize as entries are skipped.
pub fn entries_from_value(value: Value) -> Vec<TermEntry> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}
