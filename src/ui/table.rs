//! Plain-text rendering of the generic results table.

use crate::core::render_pass::TablePage;
use crate::ui::theme;
use crate::util::constants::TABLE_CELL_CHAR_CAP;
use crate::util::text::{pad_to, truncate_with_marker};

/// Render the table page with an `Index` column followed by every column
/// in the result set. An empty page renders a "No results found" line.
pub fn render_table(page: &TablePage, color: bool) -> String {
    if page.rows.is_empty() {
        return "No results found\n".to_owned();
    }

    let header: Vec<String> = std::iter::once("Index".to_owned())
        .chain(page.columns.iter().cloned())
        .collect();
    let body: Vec<Vec<String>> = page
        .rows
        .iter()
        .map(|row| {
            std::iter::once(row.index.clone())
                .chain(
                    row.cells
                        .iter()
                        .map(|c| truncate_with_marker(c, TABLE_CELL_CHAR_CAP)),
                )
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|i| {
            body.iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(header[i].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let header_line: Vec<String> = header
        .iter()
        .zip(&widths)
        .map(|(h, w)| pad_to(h, *w))
        .collect();
    out.push_str(header_line.join("  ").trim_end());
    out.push('\n');

    for (row, cells) in page.rows.iter().zip(&body) {
        let mut line: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| pad_to(c, *w))
            .collect();
        // Colour only after padding so escape codes do not skew widths.
        line[0] = theme::paint(&line[0], theme::index_color(&row.index), color);
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render_pass::{ResultSummary, TableRow};

    fn page(rows: Vec<TableRow>) -> TablePage {
        TablePage {
            summary: ResultSummary {
                displayed_count: rows.len(),
                hidden_count: 0,
                unique_index_count: 1,
                specialized: false,
                page: 1,
                total_pages: 1,
                has_previous: false,
                has_next: false,
            },
            columns: vec!["host".into(), "port".into()],
            rows,
        }
    }

    #[test]
    fn test_empty_page_message() {
        assert_eq!(render_table(&page(Vec::new()), false), "No results found\n");
    }

    #[test]
    fn test_aligned_columns() {
        let text = render_table(
            &page(vec![
                TableRow {
                    index: "Web".into(),
                    cells: vec!["a".into(), "80".into()],
                },
                TableRow {
                    index: "Web".into(),
                    cells: vec!["longhost".into(), "".into()],
                },
            ]),
            false,
        );
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Index  host      port");
        assert_eq!(lines[1], "Web    a         80");
        assert_eq!(lines[2], "Web    longhost");
    }
}
