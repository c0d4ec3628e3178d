//! Result-set eligibility for the security card view.
//!
//! The card view applies only when every hit comes from the designated
//! security-events index. When it applies, rows whose event ID resolves to
//! something outside the catalog are treated as noise and hidden; rows with
//! no resolvable ID are kept, since an unknown shape says nothing about
//! significance.

use crate::core::alias::resolve_event_id;
use crate::core::catalog::EventCatalog;
use crate::core::record::ResultEntry;
use crate::util::constants::SECURITY_EVENTS_INDEX;

/// Outcome of [`EventClassifier::filter_high_value`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighValueSelection<'a> {
    /// Surviving entries in input order.
    pub kept: Vec<&'a ResultEntry>,
    /// Number of entries removed as low-value.
    pub hidden_count: usize,
}

/// Owns the catalog and the name of the index that qualifies for the
/// specialized view.
#[derive(Debug, Clone)]
pub struct EventClassifier {
    catalog: EventCatalog,
    specialized_index: String,
}

impl EventClassifier {
    pub fn new(catalog: EventCatalog, specialized_index: impl Into<String>) -> Self {
        Self {
            catalog,
            specialized_index: specialized_index.into(),
        }
    }

    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }

    pub fn specialized_index(&self) -> &str {
        &self.specialized_index
    }

    /// `true` iff `results` is non-empty and every entry comes from the
    /// specialized index (exact name match).
    pub fn is_specialized_view(&self, results: &[ResultEntry]) -> bool {
        is_specialized_view(results, &self.specialized_index)
    }

    /// Drop low-value rows from a specialized result set.
    ///
    /// Non-specialized input passes through untouched with a zero hidden
    /// count.
    pub fn filter_high_value<'a>(&self, results: &'a [ResultEntry]) -> HighValueSelection<'a> {
        let selection = filter_high_value(results, &self.specialized_index, &self.catalog);
        if selection.hidden_count > 0 {
            tracing::debug!(
                "High-value filter kept {} of {} rows ({} hidden)",
                selection.kept.len(),
                results.len(),
                selection.hidden_count
            );
        }
        selection
    }
}

impl Default for EventClassifier {
    fn default() -> Self {
        Self::new(EventCatalog::security_events(), SECURITY_EVENTS_INDEX)
    }
}

fn is_high_value(entry: &ResultEntry, catalog: &EventCatalog) -> bool {
    match resolve_event_id(&entry.row) {
        Some(id) => catalog.contains(id),
        None => true,
    }
}

/// Free-function form of [`EventClassifier::is_specialized_view`].
pub fn is_specialized_view(results: &[ResultEntry], specialized_index: &str) -> bool {
    !results.is_empty() && results.iter().all(|r| r.index == specialized_index)
}

/// Free-function form of [`EventClassifier::filter_high_value`].
pub fn filter_high_value<'a>(
    results: &'a [ResultEntry],
    specialized_index: &str,
    catalog: &EventCatalog,
) -> HighValueSelection<'a> {
    if !is_specialized_view(results, specialized_index) {
        return HighValueSelection {
            kept: results.iter().collect(),
            hidden_count: 0,
        };
    }
    let kept: Vec<&ResultEntry> = results
        .iter()
        .filter(|entry| is_high_value(entry, catalog))
        .collect();
    let hidden_count = results.len() - kept.len();
    HighValueSelection { kept, hidden_count }
}
