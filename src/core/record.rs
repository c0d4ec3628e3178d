//! Data structures for a single search hit.
//!
//! A [`Row`] is one record of imported tabular data: an ordered set of
//! column-name/value string pairs with no fixed schema. A [`ResultEntry`]
//! tags a row with the index it was found in.

use serde::ser::SerializeMap;

/// One record from an index, as produced by the store.
///
/// Column names are unique within a row (exact comparison). Insertion order
/// is preserved because residual fields are displayed in the order the
/// source produced them. Inserting an existing column replaces its value in
/// place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    fields: Vec<(String, String)>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a column value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Exact-name lookup.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate `(column, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate column names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Number of columns in the row.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}

impl serde::Serialize for Row {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// A single search hit: the row plus the name of the index it came from.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ResultEntry {
    /// Source index name (e.g. `"SecurityEvents"`).
    pub index: String,
    /// The matched record.
    pub row: Row,
}

impl ResultEntry {
    pub fn new(index: impl Into<String>, row: Row) -> Self {
        Self {
            index: index.into(),
            row,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order() {
        let row: Row = [("b", "2"), ("a", "1"), ("c", "3")].into_iter().collect();
        let keys: Vec<&str> = row.keys().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_reinsert_replaces_in_place() {
        let mut row: Row = [("b", "2"), ("a", "1")].into_iter().collect();
        row.insert("b", "20");
        let pairs: Vec<(&str, &str)> = row.iter().collect();
        assert_eq!(pairs, vec![("b", "20"), ("a", "1")]);
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn test_case_variants_are_distinct_keys() {
        let row: Row = [("EventID", "1"), ("eventid", "2")].into_iter().collect();
        assert_eq!(row.len(), 2);
        assert_eq!(row.get("eventid"), Some("2"));
    }

    #[test]
    fn test_serialises_as_ordered_object() {
        let row: Row = [("z", "1"), ("a", "2")].into_iter().collect();
        let json = serde_json::to_string(&row).expect("serialize");
        assert_eq!(json, r#"{"z":"1","a":"2"}"#);
    }
}
