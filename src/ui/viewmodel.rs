//! View model types representing renderable gallery state.
//!
//! View models are computed from [`AppState`](crate::app::AppState) by
//! `compute_viewmodel` and consumed by the renderer. They hold display-ready
//! strings and flags only; every decision about *what* to show (which label
//! the load-more control carries, whether the empty state replaces the grid)
//! is made while computing them, so the renderer stays dumb.
//!
//! # Example
//!
//! ```rust
//! use pixgrid::ui::viewmodel::{EmptyState, GalleryViewModel};
//!
//! fn describe(vm: &GalleryViewModel) -> &str {
//!     vm.empty_state.as_ref().map_or("grid", |empty: &EmptyState| empty.message.as_str())
//! }
//! ```

/// Complete gallery view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryViewModel {
    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,

    /// One chip per filter category, in display order.
    pub filters: Vec<Chip>,

    /// Recent searches, most recent first. Empty hides the section.
    pub history: Vec<Chip>,

    /// Image cells laid out in rows of `columns` cells.
    pub grid: Vec<Vec<ImageCell>>,

    /// Number of cells per grid row.
    pub columns: usize,

    /// Error banner shown above the grid; prior results stay visible below it.
    pub error: Option<String>,

    /// Replaces the grid when there are no items.
    pub empty_state: Option<EmptyState>,

    /// Load-more control; hidden while there are no items.
    pub load_more: Option<LoadMoreInfo>,

    pub footer: FooterInfo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Uncommitted input.
    pub draft: String,
    /// "Search" or "Searching...".
    pub button_label: String,
    pub busy: bool,
}

/// A selectable pill: a filter category or a history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    /// Number the user types to pick the chip (history) or its category name.
    pub key: String,
    pub label: String,
    pub active: bool,
}

/// One image in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCell {
    pub id: String,
    /// Description, or the no-description placeholder, truncated to the cell.
    pub caption: String,
    /// Thumbnail URL, or the no-preview placeholder.
    pub preview: String,
    pub has_preview: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadMoreInfo {
    pub label: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Result counters, e.g. "24 images · page 2".
    pub status: String,
    pub keybindings: String,
}
