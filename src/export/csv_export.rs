//! CSV export for the filtered result set.
//!
//! Writes every displayed row (all pages, after high-value filtering) with
//! an `Index` column followed by the union of the rows' column names.

use crate::core::record::ResultEntry;
use crate::core::render_pass::column_union;
use crate::util::error::EventLensError;
use std::path::Path;

/// Check that `path` can plausibly be written before doing any work.
///
/// # Errors
/// Returns [`EventLensError::Export`] if the parent directory does not exist
/// or is not a directory.
pub fn validate_export_path(path: &Path) -> Result<(), EventLensError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        // Bare file name: relative to the working directory.
        _ => return Ok(()),
    };
    if !parent.exists() {
        return Err(EventLensError::Export(format!(
            "Target directory does not exist: {}",
            parent.display()
        )));
    }
    if !parent.is_dir() {
        return Err(EventLensError::Export(format!(
            "Target parent is not a directory: {}",
            parent.display()
        )));
    }
    Ok(())
}

/// Export the given entries to a CSV file at `path`.
///
/// # Errors
/// Returns [`EventLensError::Export`] if the file cannot be created or written.
pub fn export_csv(entries: &[&ResultEntry], path: &Path) -> Result<(), EventLensError> {
    validate_export_path(path)?;

    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| EventLensError::Export(format!("Failed to create CSV file: {e}")))?;

    let columns = column_union(entries.iter().copied());

    let header = std::iter::once("Index").chain(columns.iter().map(String::as_str));
    writer
        .write_record(header)
        .map_err(|e| EventLensError::Export(format!("Failed to write CSV header: {e}")))?;

    for entry in entries {
        let cells = std::iter::once(entry.index.as_str())
            .chain(columns.iter().map(|c| entry.row.get(c).unwrap_or_default()));
        writer
            .write_record(cells)
            .map_err(|e| EventLensError::Export(format!("Failed to write CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| EventLensError::Export(format!("Failed to flush CSV: {e}")))?;

    tracing::info!(
        "Exported {} rows to CSV: {}",
        entries.len(),
        path.display()
    );
    Ok(())
}
