//! Shared rendering utilities.
//!
//! Widths are measured in characters, not bytes, so captions with accented or
//! non-Latin text are cut on character boundaries.

use crate::ui::theme::Theme;
use std::fmt::Write;

/// Shortens `text` to at most `width` characters, ending in `…` when cut.
///
/// ```rust
/// use pixgrid::ui::helpers::truncate;
///
/// assert_eq!(truncate("a red fox", 20), "a red fox");
/// assert_eq!(truncate("a red fox in snow", 8), "a red f…");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Pads `text` with spaces to exactly `width` characters, truncating if longer.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let cut = truncate(text, width);
    let len = cut.chars().count();
    format!("{cut}{}", " ".repeat(width.saturating_sub(len)))
}

/// Left padding that centers `text` in `cols` columns.
#[must_use]
pub fn center_padding(text: &str, cols: usize) -> usize {
    cols.saturating_sub(text.chars().count()) / 2
}

/// Appends a full-width horizontal rule.
pub fn push_border(out: &mut String, color: &str, cols: usize) {
    let _ = writeln!(out, "{}{}{}", Theme::fg(color), "─".repeat(cols), Theme::reset());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_respects_characters() {
        assert_eq!(truncate("café au lait", 5), "café…");
        assert_eq!(truncate("abc", 0), "");
        assert_eq!(truncate("abc", 3), "abc");
    }

    #[test]
    fn centering_splits_spare_columns() {
        assert_eq!(center_padding("abcd", 10), 3);
        assert_eq!(center_padding("too long", 4), 0);
    }

    #[test]
    fn fit_pads_and_cuts() {
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("abcdef", 4), "abc…");
    }
}
