//! Text rendering of a single security event card.

use crate::core::render_pass::SecurityCard;
use crate::ui::theme;
use crate::util::text::pad_to;

/// Width of the field-label column inside a card.
const LABEL_WIDTH: usize = 17;

/// Render one card: a header line, the canonical fields, then the extras.
pub fn render_card(card: &SecurityCard, color: bool) -> String {
    let view = &card.view;
    let style = theme::severity_style(view.severity);
    let border = theme::paint("|", style.accent, color);

    let event_id = if view.event_id.is_empty() {
        "?"
    } else {
        view.event_id.as_str()
    };

    let mut header = format!(
        "{} {} {}",
        theme::paint(style.icon, style.accent, color),
        event_id,
        view.label
    );
    if let Some(category) = &view.category {
        header.push_str(&format!(
            " [{}]",
            theme::paint(category, theme::category_color(category), color)
        ));
    }
    header.push_str(&format!(
        " ({})",
        theme::paint(&card.index, theme::index_color(&card.index), color)
    ));

    let mut out = format!("{border} {header}\n");
    for field in &view.canonical_fields {
        let label = pad_to(&format!("{}:", field.label), LABEL_WIDTH);
        out.push_str(&format!(
            "{border}   {} {}\n",
            theme::paint(&label, theme::TEXT_MUTED, color),
            field.value
        ));
    }

    if !view.extra_fields.is_empty() {
        let mut extras: Vec<String> = view
            .extra_fields
            .iter()
            .map(|e| format!("{}: {}", e.key, e.value))
            .collect();
        if view.hidden_extra_count > 0 {
            extras.push(format!("+{} more", view.hidden_extra_count));
        }
        out.push_str(&format!(
            "{border}   {}\n",
            theme::paint(&extras.join("  "), theme::TEXT_MUTED, color)
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::EventCatalog;
    use crate::core::normalizer::{normalize, NormalizeOptions};
    use crate::core::record::Row;

    fn card(pairs: &[(&str, &str)]) -> SecurityCard {
        let row: Row = pairs.iter().copied().collect();
        SecurityCard {
            index: "SecurityEvents".into(),
            view: normalize(&row, &EventCatalog::security_events(), &NormalizeOptions::default()),
        }
    }

    #[test]
    fn test_header_and_fields() {
        let text = render_card(
            &card(&[("EventID", "4740"), ("TargetUserName", "bob"), ("Note", "locked")]),
            false,
        );
        let first = text.lines().next().unwrap_or_default();
        assert_eq!(
            first,
            "| [X] 4740 Account Locked Out [Account Management] (SecurityEvents)"
        );
        assert!(text.contains("Target Account:"));
        assert!(text.contains("bob"));
        assert!(text.contains("Note: locked"));
    }

    #[test]
    fn test_missing_id_shows_placeholder() {
        let text = render_card(&card(&[("Foo", "bar")]), false);
        assert!(text.starts_with("| [i] ? Unknown Event (SecurityEvents)"));
    }

    #[test]
    fn test_overflow_marker() {
        let pairs: Vec<(String, String)> =
            (0..9).map(|i| (format!("k{i}"), format!("v{i}"))).collect();
        let borrowed: Vec<(&str, &str)> =
            pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        let text = render_card(&card(&borrowed), false);
        assert!(text.contains("+3 more"));
    }
}
