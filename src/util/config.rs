//! Runtime configuration for EventLens.
//!
//! [`ViewConfig`] is the serialisable set of knobs a user can persist in a
//! JSON file. Every field has a default, so an empty object is a valid
//! config. Command-line flags are layered on top by the binary.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use crate::core::catalog::EventCatalog;
use crate::core::eligibility::EventClassifier;
use crate::core::normalizer::{NormalizeOptions, UsedFieldTracking, ViewDensity};
use crate::core::render_pass::SecurityViewPipeline;
use crate::util::constants::{DEFAULT_PAGE_SIZE, SECURITY_EVENTS_INDEX};
use crate::util::error::{EventLensError, Result};

/// Persistable view configuration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Index whose results qualify for the security card view.
    pub specialized_index: String,
    /// Rows per page.
    pub page_size: usize,
    /// Card density (value and extra-field caps).
    pub density: ViewDensity,
    /// How columns are marked as consumed by canonical fields.
    pub used_field_tracking: UsedFieldTracking,
    /// Optional JSON catalog replacing the built-in one.
    pub catalog_path: Option<PathBuf>,
    /// Whether terminal output uses ANSI colour. Unset means colour only
    /// when stdout is a terminal.
    pub color: Option<bool>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            specialized_index: SECURITY_EVENTS_INDEX.to_owned(),
            page_size: DEFAULT_PAGE_SIZE,
            density: ViewDensity::default(),
            used_field_tracking: UsedFieldTracking::default(),
            catalog_path: None,
            color: None,
        }
    }
}

impl ViewConfig {
    /// Parse and validate a JSON config.
    ///
    /// # Errors
    /// Returns [`EventLensError::Config`] on malformed JSON or invalid values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ViewConfig = serde_json::from_str(json)
            .map_err(|e| EventLensError::Config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Reject values the rest of the program cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(EventLensError::Config("page_size must be greater than 0".into()));
        }
        if self.specialized_index.trim().is_empty() {
            return Err(EventLensError::Config(
                "specialized_index must not be empty".into(),
            ));
        }
        if self.specialized_index.trim() != self.specialized_index {
            return Err(EventLensError::Config(format!(
                "specialized_index {:?} has leading or trailing whitespace",
                self.specialized_index
            )));
        }
        Ok(())
    }

    /// Explicit colour setting, else whether stdout is a terminal.
    pub fn use_color(&self) -> bool {
        self.color.unwrap_or_else(|| std::io::stdout().is_terminal())
    }

    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            density: self.density,
            tracking: self.used_field_tracking,
        }
    }

    /// Load the configured catalog, or the built-in one.
    pub fn load_catalog(&self) -> Result<EventCatalog> {
        match &self.catalog_path {
            Some(path) => EventCatalog::from_json_path(path),
            None => Ok(EventCatalog::security_events()),
        }
    }

    /// Build the render pipeline this configuration describes.
    pub fn build_pipeline(&self) -> Result<SecurityViewPipeline> {
        let catalog = self.load_catalog()?;
        let classifier = EventClassifier::new(catalog, self.specialized_index.clone());
        Ok(SecurityViewPipeline::new(classifier, self.normalize_options()))
    }
}
