//! CSV input and output tables.
//!
//! The input file must carry a `Name` column; names are trimmed, blanks are
//! skipped, and duplicates are dropped while preserving first-occurrence
//! order. The two outputs are flat CSVs written in one shot at the end of a
//! run.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

use crate::core::{MechanismRow, Resolution};

/// Required input column
const NAME_COLUMN: &str = "Name";

#[derive(Error, Debug)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("input CSV must contain a '{0}' column")]
    MissingColumn(&'static str),
}

/// Load query names from the input CSV.
///
/// # Errors
///
/// Returns `TableError::MissingColumn` when no `Name` header is present
/// (fatal, before any processing), or an IO/CSV error if the file cannot
/// be read.
pub fn load_query_names(path: &Path) -> Result<Vec<String>, TableError> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    let name_index = headers
        .iter()
        .position(|h| h == NAME_COLUMN)
        .ok_or(TableError::MissingColumn(NAME_COLUMN))?;

    let mut seen: HashSet<String> = HashSet::new();
    let mut names = Vec::new();
    for record in reader.records() {
        let record = record?;
        let Some(raw) = record.get(name_index) else {
            continue;
        };
        let name = raw.trim();
        if name.is_empty() {
            continue;
        }
        if seen.insert(name.to_string()) {
            names.push(name.to_string());
        }
    }

    Ok(names)
}

/// Write the metadata table: one row per query name.
///
/// # Errors
///
/// Returns an IO/CSV error if the file cannot be written.
pub fn write_metadata(path: &Path, resolutions: &[Resolution]) -> Result<(), TableError> {
    let mut writer = csv::Writer::from_path(path)?;
    for resolution in resolutions {
        writer.serialize(resolution)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the targets table: zero or more mechanism rows per resolved
/// small molecule.
///
/// # Errors
///
/// Returns an IO/CSV error if the file cannot be written.
pub fn write_targets(path: &Path, rows: &[MechanismRow]) -> Result<(), TableError> {
    let mut writer = csv::Writer::from_path(path)?;
    // An empty run still gets a header row so downstream tooling sees the
    // expected columns
    if rows.is_empty() {
        writer.write_record([
            "molecule_chembl_id",
            "target_chembl_id",
            "target_pref_name",
            "target_organism",
            "action_type",
            "mechanism_of_action",
            "query_name",
        ])?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
