//! Application-wide constants for EventLens.
//!
//! Centralising magic numbers and configuration defaults here keeps the rest
//! of the codebase clean and makes tuning straightforward.

/// Name of the one index whose results qualify for the security card view.
pub const SECURITY_EVENTS_INDEX: &str = "SecurityEvents";

/// Label given to events whose identifier is missing or not catalogued.
pub const UNKNOWN_EVENT_LABEL: &str = "Unknown Event";

/// Marker appended to extra-field values cut at the character cap.
pub const TRUNCATION_MARKER: &str = "\u{2026}";

/// Character cap for extra-field values in the compact card layout.
pub const COMPACT_VALUE_CHAR_CAP: usize = 50;

/// Number of extra fields shown per card in the compact layout.
pub const COMPACT_EXTRA_FIELD_CAP: usize = 6;

/// Character cap for extra-field values in the detailed card layout.
pub const DETAILED_VALUE_CHAR_CAP: usize = 60;

/// Number of extra fields shown per card in the detailed layout.
pub const DETAILED_EXTRA_FIELD_CAP: usize = 8;

/// Rows per page when neither the config file nor the CLI sets one.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Application display name used in log lines and the CLI.
pub const APP_NAME: &str = "EventLens";

/// Application version string.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default log file name when `--log-file` points at a directory.
pub const LOG_FILE_NAME: &str = "eventlens.log";

/// Maximum log file size in bytes before rotation (5 MB).
pub const MAX_LOG_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Maximum cell width in the plain-text results table.
pub const TABLE_CELL_CHAR_CAP: usize = 40;
