//! Image domain model, result pages and filter categories.
//!
//! These are the normalized types the rest of the crate works with. The two
//! upstream response envelopes are mapped into them by [`crate::api::schema`].

use std::fmt;
use std::str::FromStr;

/// Placeholder shown when an image has no preview URL.
pub const NO_PREVIEW_TEXT: &str = "No Image Available";

/// Placeholder shown when an image has no description.
pub const NO_DESCRIPTION_TEXT: &str = "No description";

/// One fetched photo.
///
/// Immutable once constructed and owned by the
/// [`ResultStore`](crate::app::ResultStore).
///
/// # Fields
///
/// - `id`: Stable upstream identity
/// - `thumbnail_url`: Small preview URL, `None` means "no preview"
/// - `description`: Alternative text, if the photographer or API supplied one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub id: String,
    pub thumbnail_url: Option<String>,
    pub description: Option<String>,
}

impl Image {
    /// Creates an image with only an id.
    ///
    /// ```
    /// use pixgrid::Image;
    ///
    /// let image = Image::new("abc123")
    ///     .with_thumbnail("https://images.example/abc123-small.jpg")
    ///     .with_description("a red fox in snow");
    /// assert_eq!(image.caption(), "a red fox in snow");
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            thumbnail_url: None,
            description: None,
        }
    }

    #[must_use]
    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Description text, or the "no description" placeholder.
    #[must_use]
    pub fn caption(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(NO_DESCRIPTION_TEXT)
    }

    /// Preview URL, or the "no preview" placeholder.
    #[must_use]
    pub fn preview(&self) -> &str {
        self.thumbnail_url.as_deref().unwrap_or(NO_PREVIEW_TEXT)
    }
}

/// A normalized page of results.
///
/// `has_more` is inferred by the decoder: the feed endpoint carries no
/// pagination metadata, so a full-length page means "probably more".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePage {
    pub images: Vec<Image>,
    pub has_more: bool,
}

impl ImagePage {
    #[must_use]
    pub const fn new(images: Vec<Image>, has_more: bool) -> Self {
        Self { images, has_more }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Fixed set of browse categories offered next to the search box.
///
/// `All` maps to the configured default term; every other category searches
/// for its own lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterCategory {
    #[default]
    All,
    Nature,
    Technology,
    People,
    Animals,
    Travel,
}

impl FilterCategory {
    /// Every category, in display order.
    pub const ALL: [Self; 6] = [
        Self::All,
        Self::Nature,
        Self::Technology,
        Self::People,
        Self::Animals,
        Self::Travel,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Nature => "nature",
            Self::Technology => "technology",
            Self::People => "people",
            Self::Animals => "animals",
            Self::Travel => "travel",
        }
    }

    /// Capitalized label for chips.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Nature => "Nature",
            Self::Technology => "Technology",
            Self::People => "People",
            Self::Animals => "Animals",
            Self::Travel => "Travel",
        }
    }

    /// Concrete search term this category stands for.
    ///
    /// ```
    /// use pixgrid::FilterCategory;
    ///
    /// assert_eq!(FilterCategory::All.search_term("nature"), "nature");
    /// assert_eq!(FilterCategory::Travel.search_term("nature"), "travel");
    /// ```
    #[must_use]
    pub fn search_term(self, default_term: &str) -> String {
        match self {
            Self::All => default_term.to_string(),
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|c| c.as_str()).collect();
                format!("unknown category '{s}' (expected one of: {})", known.join(", "))
            })
    }
}
