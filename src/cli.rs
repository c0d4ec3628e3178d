//! Command-line arguments for the `eventlens` binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use eventlens::core::normalizer::{UsedFieldTracking, ViewDensity};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// CSV files to load; each becomes an index named after the file stem
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Free-text search applied to column names and values
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Treat the query as a regular expression
    #[arg(long)]
    pub regex: bool,

    /// Match the query case-sensitively
    #[arg(long)]
    pub case_sensitive: bool,

    /// Page to display (1-based)
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page (overrides the config file)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Card density (overrides the config file)
    #[arg(long, value_enum)]
    pub density: Option<DensityArg>,

    /// How columns count as shown by a canonical field (overrides the config file)
    #[arg(long, value_enum)]
    pub track_by: Option<TrackingArg>,

    /// JSON catalog replacing the built-in Windows Security catalog
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the rendered page as JSON to this path
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Write all displayed rows (every page) as CSV to this path
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Disable ANSI colour in terminal output
    #[arg(long)]
    pub no_color: bool,

    /// Also write debug-level logs to this file (or directory)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum DensityArg {
    Compact,
    Detailed,
}

impl From<DensityArg> for ViewDensity {
    fn from(arg: DensityArg) -> Self {
        match arg {
            DensityArg::Compact => ViewDensity::Compact,
            DensityArg::Detailed => ViewDensity::Detailed,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum TrackingArg {
    Key,
    Value,
}

impl From<TrackingArg> for UsedFieldTracking {
    fn from(arg: TrackingArg) -> Self {
        match arg {
            TrackingArg::Key => UsedFieldTracking::ByKey,
            TrackingArg::Value => UsedFieldTracking::ByValue,
        }
    }
}
