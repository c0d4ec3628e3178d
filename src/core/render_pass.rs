//! One render pass over the current search results.
//!
//! [`SecurityViewPipeline::plan`] ties the pieces together: it decides
//! between the security card view and the generic table, applies the
//! high-value filter to the whole result set, paginates the survivors, and
//! normalises the rows of the visible page. The resulting [`RenderPlan`] is
//! a plain view model; drawing it is left to the caller.

use std::collections::HashSet;
use std::fmt;

use crate::core::catalog::EventCatalog;
use crate::core::eligibility::EventClassifier;
use crate::core::normalizer::{normalize, NormalizeOptions, NormalizedView};
use crate::core::pagination::PageRequest;
use crate::core::record::{ResultEntry, Row};

// ── View model ──────────────────────────────────────────────────────────

/// Counters and navigation state shown above the results.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ResultSummary {
    /// Rows in the displayed population (after high-value filtering).
    pub displayed_count: usize,
    /// Rows removed by the high-value filter.
    pub hidden_count: usize,
    /// Distinct source indexes across the unfiltered results.
    pub unique_index_count: usize,
    /// Whether the security card view is active.
    pub specialized: bool,
    pub page: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.specialized {
            "high-value events"
        } else {
            "results"
        };
        let index_noun = if self.unique_index_count == 1 {
            "index"
        } else {
            "indexes"
        };
        write!(
            f,
            "{} {noun} from {} {index_noun}",
            self.displayed_count, self.unique_index_count
        )?;
        if self.hidden_count > 0 {
            write!(f, " ({} low-value events hidden)", self.hidden_count)?;
        }
        Ok(())
    }
}

/// A normalised security event together with its source index.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SecurityCard {
    pub index: String,
    #[serde(flatten)]
    pub view: NormalizedView,
}

/// The visible page of the security card view.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CardPage {
    pub summary: ResultSummary,
    pub cards: Vec<SecurityCard>,
}

/// One table line: the source index plus a cell per column.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TableRow {
    pub index: String,
    pub cells: Vec<String>,
}

/// The visible page of the generic table view.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TablePage {
    pub summary: ResultSummary,
    /// Union of all column names across the full result set, first-seen order.
    pub columns: Vec<String>,
    pub rows: Vec<TableRow>,
}

/// What to draw for the current state.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum RenderPlan {
    /// The store holds no indexes at all; nothing is drawn.
    Nothing,
    Cards(CardPage),
    Table(TablePage),
}

impl RenderPlan {
    pub fn summary(&self) -> Option<&ResultSummary> {
        match self {
            RenderPlan::Nothing => None,
            RenderPlan::Cards(page) => Some(&page.summary),
            RenderPlan::Table(page) => Some(&page.summary),
        }
    }
}

// ── Pipeline ────────────────────────────────────────────────────────────

/// Classifier plus normalisation options, built once at start-up.
#[derive(Debug, Clone, Default)]
pub struct SecurityViewPipeline {
    classifier: EventClassifier,
    options: NormalizeOptions,
}

impl SecurityViewPipeline {
    pub fn new(classifier: EventClassifier, options: NormalizeOptions) -> Self {
        Self {
            classifier,
            options,
        }
    }

    pub fn classifier(&self) -> &EventClassifier {
        &self.classifier
    }

    pub fn catalog(&self) -> &EventCatalog {
        self.classifier.catalog()
    }

    /// Normalise one row with this pipeline's catalog and options.
    pub fn normalize(&self, row: &Row) -> NormalizedView {
        normalize(row, self.classifier.catalog(), &self.options)
    }

    /// Entries that make up the displayed population (before paging),
    /// together with the hidden count.
    pub fn displayed<'a>(&self, results: &'a [ResultEntry]) -> (Vec<&'a ResultEntry>, usize) {
        let selection = self.classifier.filter_high_value(results);
        (selection.kept, selection.hidden_count)
    }

    /// Build the view model for one render pass.
    ///
    /// `index_count` is the number of indexes loaded in the store; when it
    /// is zero nothing is rendered, not even an empty table.
    pub fn plan(&self, index_count: usize, results: &[ResultEntry], page: PageRequest) -> RenderPlan {
        if index_count == 0 {
            return RenderPlan::Nothing;
        }

        let specialized = self.classifier.is_specialized_view(results);
        let (displayed, hidden_count) = self.displayed(results);
        let unique_index_count = results
            .iter()
            .map(|r| r.index.as_str())
            .collect::<HashSet<_>>()
            .len();

        let summary = ResultSummary {
            displayed_count: displayed.len(),
            hidden_count,
            unique_index_count,
            specialized,
            page: page.page,
            total_pages: page.total_pages(displayed.len()),
            has_previous: page.has_previous(),
            has_next: page.has_next(displayed.len()),
        };
        let paged = page.slice(&displayed);

        if specialized {
            let cards = paged
                .iter()
                .map(|entry| SecurityCard {
                    index: entry.index.clone(),
                    view: self.normalize(&entry.row),
                })
                .collect();
            RenderPlan::Cards(CardPage { summary, cards })
        } else {
            let columns = column_union(results);
            let rows = paged
                .iter()
                .map(|entry| TableRow {
                    index: entry.index.clone(),
                    cells: columns
                        .iter()
                        .map(|col| entry.row.get(col).unwrap_or_default().to_owned())
                        .collect(),
                })
                .collect();
            RenderPlan::Table(TablePage {
                summary,
                columns,
                rows,
            })
        }
    }
}

/// Distinct column names across `results`, in first-seen order.
pub fn column_union<'a, I>(results: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a ResultEntry>,
{
    let mut seen = HashSet::new();
    let mut columns = Vec::new();
    for entry in results {
        for key in entry.row.keys() {
            if seen.insert(key) {
                columns.push(key.to_owned());
            }
        }
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Severity;

    fn entry(index: &str, pairs: &[(&str, &str)]) -> ResultEntry {
        ResultEntry::new(index, pairs.iter().copied().collect::<Row>())
    }

    #[test]
    fn test_no_indexes_renders_nothing() {
        let plan = SecurityViewPipeline::default().plan(0, &[], PageRequest::new(1, 10));
        assert_eq!(plan, RenderPlan::Nothing);
        assert!(plan.summary().is_none());
    }

    #[test]
    fn test_empty_results_fall_back_to_table() {
        let plan = SecurityViewPipeline::default().plan(2, &[], PageRequest::new(1, 10));
        let RenderPlan::Table(table) = plan else {
            panic!("expected table view");
        };
        assert!(table.rows.is_empty());
        assert_eq!(table.summary.total_pages, 1);
        assert!(!table.summary.specialized);
        assert_eq!(table.summary.to_string(), "0 results from 0 indexes");
    }

    #[test]
    fn test_generic_table_pagination() {
        let results: Vec<ResultEntry> = (0..25)
            .map(|i| {
                let idx = if i % 2 == 0 { "Web" } else { "Dns" };
                let n = i.to_string();
                entry(idx, &[("n", n.as_str())])
            })
            .collect();
        let plan = SecurityViewPipeline::default().plan(2, &results, PageRequest::new(1, 10));
        let RenderPlan::Table(table) = plan else {
            panic!("expected table view");
        };
        assert_eq!(table.summary.total_pages, 3);
        assert_eq!(table.rows.len(), 10);
        assert!(!table.summary.has_previous);
        assert!(table.summary.has_next);
        assert_eq!(table.summary.to_string(), "25 results from 2 indexes");
    }

    #[test]
    fn test_table_columns_are_union_in_first_seen_order() {
        let results = vec![
            entry("A", &[("x", "1"), ("y", "2")]),
            entry("B", &[("z", "3"), ("x", "4")]),
        ];
        let RenderPlan::Table(table) =
            SecurityViewPipeline::default().plan(2, &results, PageRequest::new(1, 10))
        else {
            panic!("expected table view");
        };
        assert_eq!(table.columns, vec!["x", "y", "z"]);
        assert_eq!(table.rows[1].cells, vec!["4", "", "3"]);
    }

    #[test]
    fn test_security_cards_filter_before_paging() {
        let mut results = Vec::new();
        for _ in 0..12 {
            results.push(entry("SecurityEvents", &[("EventID", "4625")]));
        }
        for _ in 0..5 {
            results.push(entry("SecurityEvents", &[("EventID", "5156")]));
        }
        let plan = SecurityViewPipeline::default().plan(1, &results, PageRequest::new(2, 10));
        let RenderPlan::Cards(page) = plan else {
            panic!("expected card view");
        };
        assert_eq!(page.summary.displayed_count, 12);
        assert_eq!(page.summary.hidden_count, 5);
        assert_eq!(page.summary.total_pages, 2);
        assert_eq!(page.cards.len(), 2);
        assert_eq!(page.cards[0].view.severity, Severity::Warn);
        assert_eq!(
            page.summary.to_string(),
            "12 high-value events from 1 index (5 low-value events hidden)"
        );
    }

    #[test]
    fn test_plan_serialises_with_view_tag() {
        let results = vec![entry("SecurityEvents", &[("EventID", "1102")])];
        let plan = SecurityViewPipeline::default().plan(1, &results, PageRequest::new(1, 10));
        let json = serde_json::to_value(&plan).expect("json");
        assert_eq!(json["view"], "cards");
        assert_eq!(json["cards"][0]["severity"], "critical");
        assert_eq!(json["cards"][0]["index"], "SecurityEvents");
    }
}
