//! Terminal rendering layer.
//!
//! ```text
//! AppState → compute_viewmodel → GalleryViewModel → render → ANSI text
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready gallery state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable component renderers
//! - [`helpers`]: Width-aware text utilities
//! - [`input`]: Command-line parsing into events
//! - [`theme`]: Color schemes and ANSI escapes

pub mod components;
pub mod helpers;
pub mod input;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use input::{parse_command, Command, HELP_TEXT};
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    Chip, EmptyState, FooterInfo, GalleryViewModel, HeaderInfo, ImageCell, LoadMoreInfo,
    SearchBarInfo,
};
