//! EventLens: forensic card view over multi-index CSV search results.
//!
//! Entry point: parses arguments, initialises structured logging, loads the
//! CSV indexes, runs one render pass, and prints or exports the result.

mod cli;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::Layer as _;

use cli::Cli;
use eventlens::core::pagination::PageRequest;
use eventlens::export::{csv_export, json_export};
use eventlens::store::query::SearchQuery;
use eventlens::store::{IndexStore, SearchSource};
use eventlens::ui;
use eventlens::util::config::ViewConfig;
use eventlens::util::constants;
use eventlens::util::error::Result;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_path = cli.log_file.as_deref().and_then(prepare_log_file);
    init_logging(log_path.as_deref());

    tracing::info!(
        "{} v{} starting",
        constants::APP_NAME,
        constants::APP_VERSION,
    );
    if let Some(path) = &log_path {
        tracing::info!("Log file: {}", path.display());
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Load, search, render, export.
fn run(cli: &Cli) -> Result<()> {
    let config = build_config(cli)?;
    let pipeline = config.build_pipeline()?;

    let mut store = IndexStore::new();
    for path in &cli.inputs {
        store.load_csv_path(path)?;
    }
    store.set_query(SearchQuery::new(
        cli.query.as_str(),
        cli.case_sensitive,
        cli.regex,
    )?);

    let results = store.search_results();
    tracing::debug!(
        "Query {:?} matched {} of {} rows",
        cli.query,
        results.len(),
        store.total_rows()
    );

    let page = PageRequest::new(cli.page, config.page_size);
    let plan = pipeline.plan(store.index_count(), &results, page);

    let rendered = ui::render_plan(&plan, config.use_color());
    if !rendered.is_empty() {
        if rendered.ends_with('\n') {
            print!("{rendered}");
        } else {
            println!("{rendered}");
        }
    }

    if let Some(path) = &cli.json {
        json_export::export_json(&plan, path)?;
    }
    if let Some(path) = &cli.csv {
        let (displayed, _) = pipeline.displayed(&results);
        csv_export::export_csv(&displayed, path)?;
    }
    Ok(())
}

/// Config file (if any) with command-line overrides applied.
fn build_config(cli: &Cli) -> Result<ViewConfig> {
    let mut config = match &cli.config {
        Some(path) => ViewConfig::from_path(path)?,
        None => ViewConfig::default(),
    };
    if let Some(size) = cli.page_size {
        config.page_size = size;
    }
    if let Some(density) = cli.density {
        config.density = density.into();
    }
    if let Some(tracking) = cli.track_by {
        config.used_field_tracking = tracking.into();
    }
    if let Some(catalog) = &cli.catalog {
        config.catalog_path = Some(catalog.clone());
    }
    if cli.no_color {
        config.color = Some(false);
    }
    config.validate()?;
    Ok(config)
}

/// Resolve the log file path and rotate it if it exceeds the size limit.
///
/// A directory argument gets the default file name appended. Returns `None`
/// if the parent directory cannot be created (logging falls back to stderr
/// only).
fn prepare_log_file(requested: &Path) -> Option<PathBuf> {
    let log_file = if requested.is_dir() {
        requested.join(constants::LOG_FILE_NAME)
    } else {
        requested.to_path_buf()
    };
    if let Some(parent) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).ok()?;
    }

    if let Ok(meta) = std::fs::metadata(&log_file) {
        if meta.len() > constants::MAX_LOG_FILE_SIZE {
            let mut backup = log_file.clone().into_os_string();
            backup.push(".old");
            let _ = std::fs::rename(&log_file, PathBuf::from(backup));
        }
    }

    Some(log_file)
}

/// Initialise the dual-layer tracing subscriber.
///
/// - **stderr layer**: filtered by `RUST_LOG` env var (default: `info`).
/// - **file layer** (if `log_path` is `Some`): always writes at `debug`
///   level for post-mortem diagnostics.
fn init_logging(log_path: Option<&Path>) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    if let Some(path) = log_path {
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
        {
            let file_layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .with_filter(tracing_subscriber::EnvFilter::new("debug"));

            tracing_subscriber::registry()
                .with(stderr_layer.with_filter(env_filter))
                .with(file_layer)
                .init();
            return;
        }
    }

    // Fallback: stderr only
    tracing_subscriber::registry()
        .with(stderr_layer.with_filter(env_filter))
        .init();
}
