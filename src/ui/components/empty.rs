//! Empty state component renderer.
//!
//! Shown in place of the grid while the first page loads or when a query
//! returned nothing.

use crate::ui::helpers::center_padding;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;
use std::fmt::Write;

/// Appends the centered message and subtitle with a blank line above.
pub fn render_empty_state(out: &mut String, empty: &EmptyState, theme: &Theme, cols: usize) {
    out.push('\n');

    let _ = writeln!(
        out,
        "{}{}{}{}",
        Theme::fg(&theme.colors.empty_state_fg),
        " ".repeat(center_padding(&empty.message, cols)),
        empty.message,
        Theme::reset()
    );

    let _ = writeln!(
        out,
        "{}{}{}{}{}",
        Theme::dim(),
        Theme::fg(&theme.colors.text_dim),
        " ".repeat(center_padding(&empty.subtitle, cols)),
        empty.subtitle,
        Theme::reset()
    );
    out.push('\n');
}
