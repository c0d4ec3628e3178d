//! Summary line shown above the results: counts plus page navigation.

use crate::core::render_pass::ResultSummary;
use crate::ui::theme;

/// Render e.g. `25 results from 2 indexes   < Page 1 of 3 >`.
///
/// The arrows are dimmed (or replaced by spaces without colour) when the
/// corresponding navigation is unavailable.
pub fn render_status(summary: &ResultSummary, color: bool) -> String {
    let prev = nav_arrow("<", summary.has_previous, color);
    let next = nav_arrow(">", summary.has_next, color);
    format!(
        "{summary}   {prev} Page {} of {} {next}",
        summary.page, summary.total_pages
    )
}

fn nav_arrow(glyph: &str, enabled: bool, color: bool) -> String {
    match (enabled, color) {
        (true, _) => glyph.to_owned(),
        (false, true) => theme::paint(glyph, theme::TEXT_MUTED, true),
        (false, false) => " ".to_owned(),
    }
}
