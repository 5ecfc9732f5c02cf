//! Wire shapes of the photo API and their normalization into [`ImagePage`].
//!
//! The search endpoint nests photos under `results` alongside pagination
//! metadata; the feed endpoint returns a bare array. Decoding branches on the
//! *shape* of the body rather than on which endpoint was asked, so either
//! envelope is accepted from either endpoint.

use crate::domain::{FetchError, Image, ImagePage};
use serde::Deserialize;

/// Raw photo object as served by the API. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct RawPhoto {
    id: String,
    #[serde(default)]
    alt_description: Option<String>,
    #[serde(default)]
    urls: Option<RawUrls>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawUrls {
    #[serde(default)]
    small: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchEnvelope {
    results: Vec<RawPhoto>,
    #[serde(default)]
    total: Option<u64>,
    #[serde(default)]
    total_pages: Option<u32>,
}

/// Either response envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Envelope {
    Search(SearchEnvelope),
    Feed(Vec<RawPhoto>),
}

impl From<RawPhoto> for Image {
    fn from(raw: RawPhoto) -> Self {
        Self {
            id: raw.id,
            thumbnail_url: raw.urls.and_then(|urls| urls.small),
            description: raw.alt_description,
        }
    }
}

/// Decodes a response body into a normalized page.
///
/// `page` and `per_page` are the values that were requested; they drive the
/// "has more" inference:
/// - search envelope with `total_pages`: more pages exist while `page < total_pages`
/// - otherwise: a full-length page means "probably more", a short one "probably last"
///
/// # Errors
///
/// Returns [`FetchError::Decode`] if the body is not JSON or matches neither
/// envelope.
///
/// # Example
///
/// ```
/// use pixgrid::api::decode_page;
///
/// let body = r#"[{"id":"a","urls":{"small":"https://img/a"}}]"#;
/// let page = decode_page(body, 1, 12)?;
/// assert_eq!(page.images[0].thumbnail_url.as_deref(), Some("https://img/a"));
/// assert!(!page.has_more);
/// # Ok::<(), pixgrid::FetchError>(())
/// ```
pub fn decode_page(body: &str, page: u32, per_page: u32) -> Result<ImagePage, FetchError> {
    let _span = tracing::debug_span!("decode_page", body_len = body.len(), page, per_page).entered();

    let envelope: Envelope = serde_json::from_str(body).map_err(|e| {
        tracing::debug!(error = %e, "response matched no known envelope");
        FetchError::Decode(e.to_string())
    })?;

    let (photos, total_pages) = match envelope {
        Envelope::Search(search) => {
            tracing::debug!(
                results = search.results.len(),
                total = ?search.total,
                total_pages = ?search.total_pages,
                "decoded search envelope"
            );
            (search.results, search.total_pages)
        }
        Envelope::Feed(photos) => {
            tracing::debug!(results = photos.len(), "decoded feed envelope");
            (photos, None)
        }
    };

    let full_page = u32::try_from(photos.len()).map_or(true, |len| len >= per_page);
    let has_more = total_pages.map_or(full_page, |total| page < total);

    Ok(ImagePage::new(
        photos.into_iter().map(Image::from).collect(),
        has_more,
    ))
}
