//! Plain-text rendering of a [`crate::core::render_pass::RenderPlan`] for the
//! terminal.
//!
//! Each sub-module renders one part of the view into a `String`; the binary
//! decides where to write it.

pub mod card;
pub mod status_bar;
pub mod table;
pub mod theme;

use crate::core::render_pass::RenderPlan;

/// Render a whole plan: status line, then cards or table.
///
/// [`RenderPlan::Nothing`] renders as an empty string.
pub fn render_plan(plan: &RenderPlan, color: bool) -> String {
    match plan {
        RenderPlan::Nothing => String::new(),
        RenderPlan::Cards(page) => {
            let mut out = status_bar::render_status(&page.summary, color);
            for card in &page.cards {
                out.push('\n');
                out.push_str(&card::render_card(card, color));
            }
            out
        }
        RenderPlan::Table(page) => {
            let mut out = status_bar::render_status(&page.summary, color);
            out.push('\n');
            out.push_str(&table::render_table(page, color));
            out
        }
    }
}
