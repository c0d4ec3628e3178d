//! JSON export of the rendered view model.
//!
//! Serialises a [`RenderPlan`] (cards or table page plus summary) as
//! pretty-printed JSON using Serde.

use crate::core::render_pass::RenderPlan;
use crate::export::csv_export::validate_export_path;
use crate::util::error::EventLensError;
use std::path::Path;

/// Export the given plan to a JSON file at `path`.
///
/// # Errors
/// Returns [`EventLensError::Export`] if the file cannot be created or written.
pub fn export_json(plan: &RenderPlan, path: &Path) -> Result<(), EventLensError> {
    validate_export_path(path)?;

    let file = std::fs::File::create(path)
        .map_err(|e| EventLensError::Export(format!("Failed to create JSON file: {e}")))?;

    let mut writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, plan)
        .map_err(|e| EventLensError::Export(format!("Failed to write JSON: {e}")))?;

    // Explicit flush so I/O errors are not silently swallowed by BufWriter::drop.
    use std::io::Write;
    writer
        .flush()
        .map_err(|e| EventLensError::Export(format!("Failed to flush JSON output: {e}")))?;

    let count = plan
        .summary()
        .map_or(0, |s| s.displayed_count);
    tracing::info!(
        "Exported view of {} results to JSON: {}",
        count,
        path.display()
    );
    Ok(())
}
