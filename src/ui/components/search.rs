//! Search bar component renderer.
//!
//! Draws the input box with the current draft and the search button:
//!
//! ```text
//! ╭──────────────────────────────────────────╮
//! │ mountains▏                    [ Search ] │
//! ╰──────────────────────────────────────────╯
//! ```

use crate::ui::helpers::fit;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;
use std::fmt::Write;

const PLACEHOLDER: &str = "Search for images...";

/// Appends the three search bar lines.
pub fn render_search_bar(out: &mut String, search: &SearchBarInfo, theme: &Theme, cols: usize) {
    let inner = cols.saturating_sub(2);
    let button = format!("[ {} ]", search.button_label);
    let field_width = inner.saturating_sub(button.chars().count() + 3);

    let border = Theme::fg(&theme.colors.border);
    let _ = writeln!(out, "{border}╭{}╮{}", "─".repeat(inner), Theme::reset());

    let field = if search.draft.is_empty() {
        format!("{}{}{}", Theme::fg(&theme.colors.text_dim), fit(PLACEHOLDER, field_width), Theme::reset())
    } else {
        format!("{}{}{}", Theme::fg(&theme.colors.text_normal), fit(&search.draft, field_width), Theme::reset())
    };

    let button_style = if search.busy { Theme::dim() } else { Theme::bold() };
    let _ = writeln!(
        out,
        "{border}│{} {field} {button_style}{}{button}{} {border}│{}",
        Theme::reset(),
        Theme::fg(&theme.colors.accent),
        Theme::reset(),
        Theme::reset(),
    );

    let _ = writeln!(out, "{border}╰{}╯{}", "─".repeat(inner), Theme::reset());
}
