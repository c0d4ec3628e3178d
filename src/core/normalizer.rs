//! Re-projection of a loosely-schematized row onto the canonical forensic
//! field model.
//!
//! [`normalize`] resolves every canonical field through its alias group,
//! classifies the event against the catalog, and splits whatever is left of
//! the row into a capped list of extra fields. It is a pure function of its
//! inputs and never fails: missing data simply produces fewer fields.

use std::collections::HashSet;

use crate::core::alias::{RowIndex, CANONICAL_FIELDS, DESCRIPTION_LABEL, EVENT_ID};
use crate::core::catalog::{EventCatalog, Severity};
use crate::core::record::Row;
use crate::util::constants::*;
use crate::util::text::truncate_with_marker;

// ── Options ─────────────────────────────────────────────────────────────

/// Presentation density of a security card.
///
/// Controls how long extra-field values may be and how many extra fields
/// are listed before the rest are summarised as "+N more".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ViewDensity {
    #[default]
    Compact,
    Detailed,
}

impl ViewDensity {
    /// Maximum characters of an extra-field value before truncation.
    pub fn value_char_cap(self) -> usize {
        match self {
            ViewDensity::Compact => COMPACT_VALUE_CHAR_CAP,
            ViewDensity::Detailed => DETAILED_VALUE_CHAR_CAP,
        }
    }

    /// Maximum number of extra fields listed on a card.
    pub fn extra_field_cap(self) -> usize {
        match self {
            ViewDensity::Compact => COMPACT_EXTRA_FIELD_CAP,
            ViewDensity::Detailed => DETAILED_EXTRA_FIELD_CAP,
        }
    }
}

/// How columns are marked as "already shown" before computing extras.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum UsedFieldTracking {
    /// Exactly the columns that supplied a canonical value are used.
    #[default]
    ByKey,
    /// Any column whose trimmed value equals a displayed canonical value
    /// (including the event description) is used, which also hides
    /// unrelated columns that happen to repeat a shown value.
    ByValue,
}

/// Knobs for [`normalize`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(default)]
pub struct NormalizeOptions {
    pub density: ViewDensity,
    pub tracking: UsedFieldTracking,
}

// ── View model ──────────────────────────────────────────────────────────

/// A canonical field with its resolved value.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LabeledField {
    pub label: &'static str,
    pub value: String,
}

/// A residual column that did not feed any canonical field.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ExtraField {
    pub key: String,
    /// Value as found in the row, truncated to the density's character cap.
    pub value: String,
}

/// Structured card model for one security event row.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct NormalizedView {
    /// Resolved event identifier; empty if the row has none.
    pub event_id: String,
    /// Catalog label, or [`UNKNOWN_EVENT_LABEL`].
    pub label: String,
    /// Catalog category, if the event is catalogued.
    pub category: Option<String>,
    /// Catalog severity, [`Severity::Info`] if not catalogued.
    pub severity: Severity,
    /// Canonical fields in display order. Never contains an empty value.
    pub canonical_fields: Vec<LabeledField>,
    /// Visible residual fields in row order.
    pub extra_fields: Vec<ExtraField>,
    /// Residual fields beyond the density cap.
    pub hidden_extra_count: usize,
}

impl NormalizedView {
    /// `true` if the event ID was found in the catalog.
    pub fn is_catalogued(&self) -> bool {
        self.category.is_some()
    }

    /// Look up a canonical field value by label.
    pub fn field(&self, label: &str) -> Option<&str> {
        self.canonical_fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }
}

// ── Normalisation ───────────────────────────────────────────────────────

/// Normalise one row against the catalog.
///
/// Output order of `canonical_fields`: Event ID (if resolved), Description
/// (always), then every entry of [`CANONICAL_FIELDS`] that resolved.
pub fn normalize(row: &Row, catalog: &EventCatalog, options: &NormalizeOptions) -> NormalizedView {
    let index = RowIndex::new(row);
    let mut used_keys: HashSet<&str> = HashSet::new();
    let mut canonical_fields = Vec::with_capacity(CANONICAL_FIELDS.len() + 2);

    let event_id = match EVENT_ID.resolve(&index) {
        Some(hit) => {
            used_keys.insert(hit.key);
            canonical_fields.push(LabeledField {
                label: EVENT_ID.label,
                value: hit.value.to_owned(),
            });
            hit.value
        }
        None => "",
    };

    let meta = if event_id.is_empty() {
        None
    } else {
        catalog.get(event_id)
    };
    let label = meta.map_or(UNKNOWN_EVENT_LABEL, |m| m.label.as_str());
    canonical_fields.push(LabeledField {
        label: DESCRIPTION_LABEL,
        value: label.to_owned(),
    });

    for group in CANONICAL_FIELDS {
        if let Some(hit) = group.resolve(&index) {
            used_keys.insert(hit.key);
            canonical_fields.push(LabeledField {
                label: group.label,
                value: hit.value.to_owned(),
            });
        }
    }

    if options.tracking == UsedFieldTracking::ByValue {
        let shown: HashSet<&str> = canonical_fields.iter().map(|f| f.value.as_str()).collect();
        used_keys.extend(
            row.iter()
                .filter(|(_, v)| shown.contains(v.trim()))
                .map(|(k, _)| k),
        );
    }

    let (extra_fields, hidden_extra_count) = collect_extras(row, &used_keys, options.density);

    NormalizedView {
        event_id: event_id.to_owned(),
        label: label.to_owned(),
        category: meta.map(|m| m.category.clone()),
        severity: meta.map_or(Severity::Info, |m| m.severity),
        canonical_fields,
        extra_fields,
        hidden_extra_count,
    }
}

/// Residual non-blank columns in row order, capped and truncated.
fn collect_extras(
    row: &Row,
    used_keys: &HashSet<&str>,
    density: ViewDensity,
) -> (Vec<ExtraField>, usize) {
    let cap = density.extra_field_cap();
    let value_cap = density.value_char_cap();

    let mut visible = Vec::with_capacity(cap);
    let mut total = 0usize;
    for (key, value) in row.iter() {
        if used_keys.contains(key) || value.trim().is_empty() {
            continue;
        }
        total += 1;
        if visible.len() < cap {
            visible.push(ExtraField {
                key: key.to_owned(),
                value: truncate_with_marker(value, value_cap),
            });
        }
    }
    let hidden = total - visible.len();
    (visible, hidden)
}
