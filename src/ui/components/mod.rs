//! Composable UI component renderers.
//!
//! Each component appends its lines to a shared output buffer, top to bottom.
//!
//! # Components
//!
//! - [`header`]: Title and tagline
//! - [`search`]: Search input box and button
//! - [`chips`]: Filter categories and recent searches
//! - [`grid`]: Image cells
//! - [`empty`]: Message shown instead of an empty grid
//! - [`footer`]: Load-more control, status and keybinding hints
//!
//! # Layout
//!
//! ```text
//! [Header]
//! [Search Bar - 3 lines]
//! [Filter chips]
//! [Recent Searches]      (only with history)
//! [Border]
//! [Error banner]         (only after a failed fetch)
//! [Grid | Empty state]
//! [Load More]            (only with items)
//! [Border]
//! [Footer]
//! ```

mod chips;
mod empty;
mod footer;
mod grid;
mod header;
mod search;

use crate::ui::helpers::push_border;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::GalleryViewModel;
use std::fmt::Write;

use chips::{render_chips, render_history};
use empty::render_empty_state;
use footer::{render_footer, render_load_more};
use grid::render_grid;
use header::render_header;
use search::render_search_bar;

/// Renders the whole gallery layout into `out`.
pub fn render_gallery(out: &mut String, vm: &GalleryViewModel, theme: &Theme, cols: usize) {
    render_header(out, &vm.header, theme, cols);
    render_search_bar(out, &vm.search_bar, theme, cols);
    render_chips(out, &vm.filters, false, theme, cols);
    render_history(out, &vm.history, theme, cols);
    push_border(out, &theme.colors.border, cols);

    if let Some(error) = &vm.error {
        let _ = writeln!(out, "{}{}{error}{}", Theme::bold(), Theme::fg(&theme.colors.error_fg), Theme::reset());
    }

    if let Some(empty) = &vm.empty_state {
        render_empty_state(out, empty, theme, cols);
    } else {
        render_grid(out, &vm.grid, theme);
    }

    if let Some(load_more) = &vm.load_more {
        render_load_more(out, load_more, theme, cols);
    }

    push_border(out, &theme.colors.border, cols);
    render_footer(out, &vm.footer, theme);
}
