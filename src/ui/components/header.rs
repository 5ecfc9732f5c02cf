//! Header component renderer.
//!
//! Renders the centered bold title with the tagline beneath it.

use crate::ui::helpers::center_padding;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;
use std::fmt::Write;

/// Appends the two header lines.
///
/// The title line is padded to the full width so an optional `header_bg`
/// paints a solid bar.
pub fn render_header(out: &mut String, header: &HeaderInfo, theme: &Theme, cols: usize) {
    let padding = center_padding(&header.title, cols);
    let trailing = cols.saturating_sub(padding + header.title.chars().count());

    let background = theme.colors.header_bg.as_deref().map(Theme::bg).unwrap_or_default();
    let _ = writeln!(
        out,
        "{}{}{background}{}{}{}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.header_fg),
        " ".repeat(padding),
        header.title,
        " ".repeat(trailing),
        Theme::reset(),
    );

    let padding = center_padding(&header.subtitle, cols);
    let _ = writeln!(
        out,
        "{}{}{}{}",
        Theme::fg(&theme.colors.text_dim),
        " ".repeat(padding),
        header.subtitle,
        Theme::reset(),
    );
}
