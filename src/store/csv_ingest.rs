//! CSV ingestion into the index store.
//!
//! Each CSV file becomes one index named after its file stem. The header
//! row supplies column names; cell values are kept verbatim (no trimming,
//! no type coercion). Short records simply lack the trailing columns.

use std::io::Read;
use std::path::Path;

use crate::core::record::Row;
use crate::store::IndexStore;
use crate::util::error::{EventLensError, Result};

/// Read every record of a CSV source into rows.
///
/// # Errors
/// Returns [`EventLensError::Csv`] if the header or a record cannot be read.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<Row>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| EventLensError::Csv(format!("Failed to read CSV header: {e}")))?
        .clone();

    let mut rows = Vec::new();
    for (line, record) in csv_reader.records().enumerate() {
        let record = record
            .map_err(|e| EventLensError::Csv(format!("Failed to read CSV record {}: {e}", line + 1)))?;
        let row: Row = headers.iter().zip(record.iter()).collect();
        rows.push(row);
    }
    Ok(rows)
}

impl IndexStore {
    /// Load a CSV source as index `name`. Returns the number of rows read.
    pub fn load_csv<R: Read>(&mut self, name: &str, reader: R) -> Result<usize> {
        let rows = read_rows(reader)?;
        let count = rows.len();
        self.insert_index(name, rows);
        Ok(count)
    }

    /// Load a CSV file, naming the index after the file stem.
    ///
    /// # Errors
    /// Returns [`EventLensError::Csv`] if the path has no usable stem or the
    /// file cannot be parsed, and [`EventLensError::Io`] if it cannot be opened.
    pub fn load_csv_path(&mut self, path: &Path) -> Result<usize> {
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                EventLensError::Csv(format!("Cannot derive index name from {}", path.display()))
            })?
            .to_owned();

        let file = std::fs::File::open(path)?;
        let count = self.load_csv(&name, std::io::BufReader::new(file))?;
        tracing::info!("Loaded {} rows into index {} from {}", count, name, path.display());
        Ok(count)
    }
}
