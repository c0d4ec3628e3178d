//! Unified error types for EventLens.
//!
//! The classification core never fails. Everything around it (store
//! ingestion, catalog and config files, export) returns
//! `Result<T, EventLensError>` so failures propagate cleanly via `?`.

/// Unified error type used by the fallible shell around the core.
#[derive(Debug, thiserror::Error)]
pub enum EventLensError {
    /// A CSV source could not be read into an index.
    #[error("CSV ingest error: {0}")]
    Csv(String),

    /// A catalog file was malformed or contained an invalid entry.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// A configuration file or flag combination was invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A user-supplied search query could not be compiled.
    #[error("Query error: {0}")]
    Query(String),

    /// Export (CSV or JSON) failed, typically an I/O error.
    #[error("Export failed: {0}")]
    Export(String),

    /// Catch-all for I/O errors (file reads, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EventLensError>;
