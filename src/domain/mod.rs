//! Domain layer for the gallery client.
//!
//! Core types shared by the state machine, the upstream adapter and the view,
//! independent of HTTP or terminal concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`image`]: Image, page and filter category models
//!
//! # Examples
//!
//! ```
//! use pixgrid::domain::{Image, ImagePage};
//!
//! let page = ImagePage::new(vec![Image::new("a"), Image::new("b")], false);
//! assert_eq!(page.len(), 2);
//! ```

pub mod error;
pub mod image;

pub use error::{FetchError, GalleryError, Result};
pub use image::{FilterCategory, Image, ImagePage, NO_DESCRIPTION_TEXT, NO_PREVIEW_TEXT};
