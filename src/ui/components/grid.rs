//! Image grid renderer.
//!
//! A terminal cannot show the thumbnails themselves, so each cell is two
//! lines: the caption, then the thumbnail URL (or the "No Image Available"
//! placeholder).

use crate::app::state::CELL_WIDTH;
use crate::ui::helpers::fit;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ImageCell;
use std::fmt::Write;

pub fn render_grid(out: &mut String, rows: &[Vec<ImageCell>], theme: &Theme) {
    let width = CELL_WIDTH.saturating_sub(2);

    for row in rows {
        for cell in row {
            let _ = write!(
                out,
                "{}{}{}  ",
                Theme::fg(&theme.colors.text_normal),
                fit(&cell.caption, width),
                Theme::reset()
            );
        }
        out.push('\n');

        for cell in row {
            let color = if cell.has_preview {
                &theme.colors.text_dim
            } else {
                &theme.colors.placeholder_fg
            };
            let _ = write!(out, "{}{}{}  ", Theme::fg(color), fit(&cell.preview, width), Theme::reset());
        }
        out.push('\n');
        out.push('\n');
    }
}
