//! Colour palette and glyph lookup tables for the terminal renderer.
//!
//! Severity and category presentation are fixed tables; index colours are
//! derived from the index name so the same index always gets the same
//! colour.

use crate::core::catalog::Severity;

/// 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Presentation bound to one severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityStyle {
    /// Short glyph shown before the event ID.
    pub icon: &'static str,
    /// Left-border / accent colour of the card.
    pub accent: Rgb,
}

// ── Severity colours ────────────────────────────────────────────────────

/// Info: blue.
pub const SEVERITY_INFO: Rgb = Rgb(96, 165, 250);

/// Warn: amber.
pub const SEVERITY_WARN: Rgb = Rgb(251, 191, 36);

/// Critical: red.
pub const SEVERITY_CRITICAL: Rgb = Rgb(239, 68, 68);

// ── Text colours ────────────────────────────────────────────────────────

/// Muted text for field labels and hints.
pub const TEXT_MUTED: Rgb = Rgb(140, 140, 160);

/// Fallback badge colour for categories outside the known set.
pub const CATEGORY_DEFAULT: Rgb = Rgb(170, 170, 170);

/// Palette cycled through for index badges.
const INDEX_PALETTE: [Rgb; 6] = [
    Rgb(80, 200, 220),
    Rgb(167, 139, 250),
    Rgb(52, 211, 153),
    Rgb(251, 146, 60),
    Rgb(244, 114, 182),
    Rgb(250, 204, 21),
];

/// Return the presentation bound to a severity.
pub fn severity_style(severity: Severity) -> SeverityStyle {
    match severity {
        Severity::Info => SeverityStyle {
            icon: "[i]",
            accent: SEVERITY_INFO,
        },
        Severity::Warn => SeverityStyle {
            icon: "[!]",
            accent: SEVERITY_WARN,
        },
        Severity::Critical => SeverityStyle {
            icon: "[X]",
            accent: SEVERITY_CRITICAL,
        },
    }
}

/// Badge colour for a catalog category.
pub fn category_color(category: &str) -> Rgb {
    match category {
        "Authentication" => Rgb(59, 130, 246),
        "Privilege Escalation" => Rgb(147, 51, 234),
        "Account Management" => Rgb(217, 119, 6),
        "Execution" => Rgb(8, 145, 178),
        "Persistence" => Rgb(234, 88, 12),
        "Lateral Movement" => Rgb(79, 70, 229),
        "Defense Evasion" => Rgb(220, 38, 38),
        _ => CATEGORY_DEFAULT,
    }
}

/// Stable colour for an index name.
pub fn index_color(index: &str) -> Rgb {
    let hash = index
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(u32::from(b)));
    INDEX_PALETTE[hash as usize % INDEX_PALETTE.len()]
}

/// Wrap `text` in an ANSI 24-bit foreground colour when `enabled`.
pub fn paint(text: &str, color: Rgb, enabled: bool) -> String {
    if !enabled {
        return text.to_owned();
    }
    let Rgb(r, g, b) = color;
    format!("\x1b[38;2;{r};{g};{b}m{text}\x1b[0m")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_severity_has_distinct_style() {
        let styles = [
            severity_style(Severity::Info),
            severity_style(Severity::Warn),
            severity_style(Severity::Critical),
        ];
        assert_ne!(styles[0], styles[1]);
        assert_ne!(styles[1], styles[2]);
        assert_ne!(styles[0], styles[2]);
    }

    #[test]
    fn test_unknown_category_falls_back() {
        assert_eq!(category_color("Something Else"), CATEGORY_DEFAULT);
    }

    #[test]
    fn test_index_color_is_stable() {
        assert_eq!(index_color("SecurityEvents"), index_color("SecurityEvents"));
    }

    #[test]
    fn test_paint_disabled_is_identity() {
        assert_eq!(paint("x", SEVERITY_INFO, false), "x");
        assert!(paint("x", SEVERITY_INFO, true).starts_with("\x1b[38;2;"));
    }
}
