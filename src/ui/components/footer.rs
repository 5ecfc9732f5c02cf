//! Load-more control, status line and keybinding hints.

use crate::ui::helpers::center_padding;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, LoadMoreInfo};
use std::fmt::Write;

/// Appends the centered load-more button; disabled renders dimmed.
pub fn render_load_more(out: &mut String, load_more: &LoadMoreInfo, theme: &Theme, cols: usize) {
    let button = format!("[ {} ]", load_more.label);
    let style = if load_more.enabled { Theme::bold() } else { Theme::dim() };
    let _ = writeln!(
        out,
        "{}{style}{}{button}{}",
        " ".repeat(center_padding(&button, cols)),
        Theme::fg(&theme.colors.accent),
        Theme::reset()
    );
}

pub fn render_footer(out: &mut String, footer: &FooterInfo, theme: &Theme) {
    let _ = writeln!(out, "{}{}{}", Theme::fg(&theme.colors.text_normal), footer.status, Theme::reset());
    let _ = writeln!(
        out,
        "{}{}{}{}",
        Theme::dim(),
        Theme::fg(&theme.colors.text_dim),
        footer.keybindings,
        Theme::reset()
    );
}
