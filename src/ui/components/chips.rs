//! Filter and recent-search chip rows.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::Chip;
use std::fmt::Write;

/// Appends one row of chips, wrapping onto further lines when `cols` runs out.
///
/// History chips show the number used to pick them (`1 cats`); filter chips
/// show their label only.
pub fn render_chips(out: &mut String, chips: &[Chip], numbered: bool, theme: &Theme, cols: usize) {
    let mut used = 0;
    for chip in chips {
        let text = if numbered {
            format!(" {} {} ", chip.key, chip.label)
        } else {
            format!(" {} ", chip.label)
        };
        let width = text.chars().count() + 1;

        if used > 0 && used + width > cols {
            out.push('\n');
            used = 0;
        }

        let (fg, bg) = if chip.active {
            (&theme.colors.chip_active_fg, &theme.colors.chip_active_bg)
        } else {
            (&theme.colors.chip_fg, &theme.colors.chip_bg)
        };
        let _ = write!(out, "{}{}{text}{} ", Theme::fg(fg), Theme::bg(bg), Theme::reset());
        used += width;
    }
    out.push('\n');
}

/// Appends the "Recent Searches" heading and its chips. Nothing if empty.
pub fn render_history(out: &mut String, history: &[Chip], theme: &Theme, cols: usize) {
    if history.is_empty() {
        return;
    }
    let _ = writeln!(
        out,
        "{}{}Recent Searches{}",
        Theme::bold(),
        Theme::fg(&theme.colors.text_normal),
        Theme::reset()
    );
    render_chips(out, history, true, theme, cols);
}
