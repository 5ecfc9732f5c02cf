//! Upstream photo API adapter.
//!
//! Isolates the two external response envelopes and the HTTP transport behind
//! one normalized [`ImagePage`](crate::domain::ImagePage) interface.
//!
//! # Modules
//!
//! - [`client`]: Endpoint selection, the [`PhotoTransport`] seam and the reqwest client
//! - [`schema`]: Wire shapes and shape-based decoding

pub mod client;
pub mod schema;

pub use client::{Endpoint, FetchRequest, PhotoTransport, UnsplashClient};
pub use schema::decode_page;
