//! In-memory store of named indexes.
//!
//! The classification core only needs an ordered list of
//! [`ResultEntry`] values for the current query; [`SearchSource`] is that
//! seam. [`IndexStore`] is the bundled implementation: CSV files loaded into
//! memory, one index per file, searched with a [`SearchQuery`].

pub mod csv_ingest;
pub mod query;

use std::collections::BTreeMap;

use crate::core::record::{ResultEntry, Row};
use query::SearchQuery;

/// Anything that can produce the full (unpaginated) result set for the
/// current query.
pub trait SearchSource {
    /// All hits for the current query, in a stable order.
    fn search_results(&self) -> Vec<ResultEntry>;

    /// Number of indexes loaded, matched or not.
    fn index_count(&self) -> usize;
}

/// Named indexes of rows plus the active query.
#[derive(Debug, Clone, Default)]
pub struct IndexStore {
    indexes: BTreeMap<String, Vec<Row>>,
    query: SearchQuery,
}

impl IndexStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an index.
    pub fn insert_index(&mut self, name: impl Into<String>, rows: Vec<Row>) {
        let name = name.into();
        tracing::debug!("Index {} holds {} rows", name, rows.len());
        if self.indexes.insert(name.clone(), rows).is_some() {
            tracing::warn!("Replaced existing index {}", name);
        }
    }

    pub fn set_query(&mut self, query: SearchQuery) {
        self.query = query;
    }

    /// Total rows across all indexes.
    pub fn total_rows(&self) -> usize {
        self.indexes.values().map(Vec::len).sum()
    }
}

impl SearchSource for IndexStore {
    /// Hits ordered by index name, then by row order within the index.
    fn search_results(&self) -> Vec<ResultEntry> {
        let query = &self.query;
        self.indexes
            .iter()
            .flat_map(move |(name, rows)| {
                rows.iter()
                    .filter(move |row| query.matches(row))
                    .map(move |row| ResultEntry::new(name.clone(), row.clone()))
            })
            .collect()
    }

    fn index_count(&self) -> usize {
        self.indexes.len()
    }
}
