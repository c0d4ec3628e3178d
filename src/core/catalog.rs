//! Catalog of forensically significant Windows Security event IDs.
//!
//! The catalog maps an event-identifier string to a human label, a
//! category, and a [`Severity`]. Membership in the catalog is what makes an
//! event "high value" in the security card view.
//!
//! An [`EventCatalog`] is built once at start-up (either from the built-in
//! table or from a JSON file) and never mutated afterwards; it is handed to
//! the classifier and normalizer by reference.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use crate::util::error::{EventLensError, Result};

/// Severity assigned to a catalogued event.
///
/// Ordered by increasing importance so callers can sort or take a maximum.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
    serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Warn,
    Critical,
}

impl Severity {
    /// Lower-case name as used in catalog files and JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for one catalogued event ID.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CatalogEntry {
    /// Human-readable description, e.g. `"Failed Logon"`.
    pub label: String,
    /// Grouping such as `"Authentication"` or `"Persistence"`.
    pub category: String,
    /// How prominently the event should be presented.
    pub severity: Severity,
}

// ── Built-in table ──────────────────────────────────────────────────────

/// `(event id, label, category, severity)` for the built-in catalog.
const SECURITY_EVENT_TABLE: &[(&str, &str, &str, Severity)] = &[
    // Authentication
    ("4624", "Successful Logon", "Authentication", Severity::Info),
    ("4625", "Failed Logon", "Authentication", Severity::Warn),
    ("4648", "Logon Using Explicit Credentials", "Authentication", Severity::Warn),
    ("4771", "Kerberos Pre-Auth Failed", "Authentication", Severity::Warn),
    ("4776", "NTLM Credential Validation", "Authentication", Severity::Info),
    // Privilege Escalation
    ("4672", "Special Privileges Assigned to Logon", "Privilege Escalation", Severity::Warn),
    // Account Management
    ("4720", "User Account Created", "Account Management", Severity::Warn),
    ("4724", "Password Reset Attempt", "Account Management", Severity::Warn),
    ("4726", "User Account Deleted", "Account Management", Severity::Warn),
    ("4728", "Member Added to Security-Enabled Global Group", "Account Management", Severity::Warn),
    ("4732", "Member Added to Security-Enabled Local Group", "Account Management", Severity::Warn),
    ("4740", "Account Locked Out", "Account Management", Severity::Critical),
    ("4756", "Member Added to Universal Security Group", "Account Management", Severity::Warn),
    // Persistence & Execution
    ("4688", "New Process Created", "Execution", Severity::Info),
    ("4697", "Service Installed on System", "Persistence", Severity::Warn),
    ("7045", "New Service Installed", "Persistence", Severity::Warn),
    ("4698", "Scheduled Task Created", "Persistence", Severity::Warn),
    // Lateral Movement
    ("4768", "Kerberos TGT Requested", "Lateral Movement", Severity::Info),
    ("4769", "Kerberos Service Ticket Requested", "Lateral Movement", Severity::Info),
    ("5140", "Network Share Object Accessed", "Lateral Movement", Severity::Info),
    ("5145", "Network Share Object Checked", "Lateral Movement", Severity::Info),
    // Defense Evasion
    ("1102", "Audit Log Was Cleared", "Defense Evasion", Severity::Critical),
    ("4719", "System Audit Policy Changed", "Defense Evasion", Severity::Critical),
];

// ── Catalog ─────────────────────────────────────────────────────────────

/// Immutable event-ID lookup table.
///
/// Keys are matched exactly against the trimmed identifier resolved from a
/// row; `"4625"` and `" 4625"` resolve the same because resolution trims,
/// but `"04625"` does not match.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct EventCatalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl EventCatalog {
    /// The built-in Windows Security catalog.
    pub fn security_events() -> Self {
        let entries = SECURITY_EVENT_TABLE
            .iter()
            .map(|&(id, label, category, severity)| {
                (
                    id.to_owned(),
                    CatalogEntry {
                        label: label.to_owned(),
                        category: category.to_owned(),
                        severity,
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Build a catalog from arbitrary `(id, entry)` pairs.
    ///
    /// # Errors
    /// Returns [`EventLensError::Catalog`] if an ID is blank or padded with
    /// whitespace (it could never match a resolved identifier), or if an
    /// entry has an empty label.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, CatalogEntry)>,
    {
        let mut map = BTreeMap::new();
        for (id, entry) in entries {
            if id.trim().is_empty() || id.trim() != id {
                return Err(EventLensError::Catalog(format!(
                    "Event ID {id:?} must be non-empty and unpadded"
                )));
            }
            if entry.label.trim().is_empty() {
                return Err(EventLensError::Catalog(format!(
                    "Event ID {id} has an empty label"
                )));
            }
            map.insert(id, entry);
        }
        Ok(Self { entries: map })
    }

    /// Parse a JSON object of `id -> {label, category, severity}`.
    ///
    /// # Errors
    /// Returns [`EventLensError::Catalog`] on malformed JSON or invalid entries.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: BTreeMap<String, CatalogEntry> = serde_json::from_reader(reader)
            .map_err(|e| EventLensError::Catalog(format!("Failed to parse catalog JSON: {e}")))?;
        Self::from_entries(raw)
    }

    /// Load a JSON catalog from disk.
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|e| {
            EventLensError::Catalog(format!("Failed to open {}: {e}", path.display()))
        })?;
        let catalog = Self::from_json_reader(std::io::BufReader::new(file))?;
        tracing::info!(
            "Loaded catalog with {} entries from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Look up an event ID.
    pub fn get(&self, event_id: &str) -> Option<&CatalogEntry> {
        self.entries.get(event_id)
    }

    pub fn contains(&self, event_id: &str) -> bool {
        self.entries.contains_key(event_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in ascending ID order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CatalogEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Default for EventCatalog {
    fn default() -> Self {
        Self::security_events()
    }
}
