//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute the view model from `AppState`, then let
//! the components turn it into ANSI-styled text. The result is returned as a
//! string so the caller decides where it goes (stdout in the binary, an
//! assertion in tests).
//!
//! # Example
//!
//! ```rust
//! use pixgrid::app::AppState;
//! use pixgrid::ui::render;
//! use pixgrid::{Config, Theme};
//!
//! let state = AppState::new(&Config::default(), Theme::default());
//! let frame = render(&state, 100);
//! assert!(frame.contains("Unsplash Gallery"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::GalleryViewModel;

/// Renders the gallery for a terminal `cols` wide.
#[must_use]
pub fn render(state: &AppState, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(cols);
    render_viewmodel(&viewmodel, &state.theme, cols)
}

/// Renders a precomputed view model.
#[must_use]
pub fn render_viewmodel(vm: &GalleryViewModel, theme: &Theme, cols: usize) -> String {
    let mut out = String::new();
    components::render_gallery(&mut out, vm, theme, cols);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Image, ImagePage, NO_PREVIEW_TEXT};
    use crate::Config;

    #[test]
    fn renders_empty_state_before_first_page() {
        let mut state = AppState::new(&Config::default(), Theme::default());
        state.sync_query();
        let frame = render(&state, 90);
        assert!(frame.contains("Loading images..."));
        assert!(frame.contains("Searching..."));
        assert!(!frame.contains("Load More Images"));
    }

    #[test]
    fn renders_cells_placeholders_and_history() {
        let mut state = AppState::new(&Config::default(), Theme::default());
        state.history.record("mountains");
        let images = vec![
            Image::new("1").with_thumbnail("https://images.example/1.jpg"),
            Image::new("2").with_description("fog over a lake"),
        ];
        state.store.reconcile(1, ImagePage::new(images, true));

        let frame = render(&state, 120);
        assert!(frame.contains("https://images.example/1.jpg"));
        assert!(frame.contains(NO_PREVIEW_TEXT));
        assert!(frame.contains("No description"));
        assert!(frame.contains("fog over a lake"));
        assert!(frame.contains("Recent Searches"));
        assert!(frame.contains("1 mountains"));
        assert!(frame.contains("Load More Images"));
    }
}
