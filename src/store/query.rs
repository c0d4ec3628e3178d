//! Free-text search over rows.
//!
//! A [`SearchQuery`] matches a row if any column name or value contains the
//! search text. Matching is case-insensitive by default, with optional case
//! sensitivity and optional regular expressions.

use regex::{Regex, RegexBuilder};

use crate::core::record::Row;
use crate::util::error::{EventLensError, Result};

/// A compiled search query. The default query matches every row.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    /// Raw search text as entered.
    pub text: String,
    /// Whether matching is case-sensitive.
    pub case_sensitive: bool,
    /// Whether `text` is a regular expression.
    pub use_regex: bool,
    /// Lower-cased `text`, cached for case-insensitive substring search.
    text_lower: String,
    /// Compiled pattern when `use_regex` is set and `text` is non-empty.
    regex: Option<Regex>,
}

impl SearchQuery {
    /// Compile a query.
    ///
    /// # Errors
    /// Returns [`EventLensError::Query`] if `use_regex` is set and the
    /// pattern does not compile.
    pub fn new(text: impl Into<String>, case_sensitive: bool, use_regex: bool) -> Result<Self> {
        let text = text.into();
        let regex = if use_regex && !text.is_empty() {
            let compiled = RegexBuilder::new(&text)
                .case_insensitive(!case_sensitive)
                .build()
                .map_err(|e| EventLensError::Query(format!("Invalid pattern {text:?}: {e}")))?;
            Some(compiled)
        } else {
            None
        };
        Ok(Self {
            text_lower: text.to_lowercase(),
            text,
            case_sensitive,
            use_regex,
            regex,
        })
    }

    /// Plain substring query (case-insensitive).
    pub fn substring(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            text_lower: text.to_lowercase(),
            text,
            ..Self::default()
        }
    }

    /// Test whether any column name or value of `row` matches.
    pub fn matches(&self, row: &Row) -> bool {
        if self.text.is_empty() {
            return true;
        }
        if let Some(re) = &self.regex {
            return row.iter().any(|(k, v)| re.is_match(k) || re.is_match(v));
        }
        if self.case_sensitive {
            let q = self.text.as_str();
            row.iter().any(|(k, v)| k.contains(q) || v.contains(q))
        } else {
            let q = self.text_lower.as_str();
            row.iter()
                .any(|(k, v)| k.to_lowercase().contains(q) || v.to_lowercase().contains(q))
        }
    }
}
