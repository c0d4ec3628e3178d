//! File exports of the current results: CSV for the filtered rows, JSON for
//! the rendered view model.

pub mod csv_export;
pub mod json_export;
