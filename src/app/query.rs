//! Query state: what the user is currently asking the API for.
//!
//! [`QueryState`] separates the raw input (`draft`) from the committed search
//! term so that typing never fetches. Every intent that must signal a fetch
//! bumps `revision`; the reactive trigger in [`AppState`](super::AppState)
//! watches the [`QueryKey`] snapshot and issues a fetch whenever it changes.

use crate::domain::FilterCategory;

/// Dependency snapshot observed by the reactive trigger.
///
/// Two snapshots compare equal only if no intent happened in between, which is
/// what lets "search the same term again" re-fetch (for example to retry after
/// an error).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryKey {
    pub term: String,
    pub page: u32,
    pub revision: u64,
}

/// Current search term, filter category and page cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    draft: String,
    search_term: String,
    filter: FilterCategory,
    page_cursor: u32,
    revision: u64,
}

impl QueryState {
    /// Starts on page 1 of `initial_term` with the `All` filter.
    ///
    /// The draft is pre-filled with the same term, like a search box that
    /// shows the default query.
    #[must_use]
    pub fn new(initial_term: &str) -> Self {
        Self {
            draft: initial_term.to_string(),
            search_term: initial_term.to_string(),
            filter: FilterCategory::All,
            page_cursor: 1,
            revision: 0,
        }
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Committed term; empty means "default feed".
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub const fn filter(&self) -> FilterCategory {
        self.filter
    }

    #[must_use]
    pub const fn page_cursor(&self) -> u32 {
        self.page_cursor
    }

    #[must_use]
    pub fn key(&self) -> QueryKey {
        QueryKey {
            term: self.search_term.clone(),
            page: self.page_cursor,
            revision: self.revision,
        }
    }

    /// Stores raw input. Never signals a fetch.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.draft = term.into();
    }

    /// Commits the trimmed draft as the search term and rewinds to page 1.
    ///
    /// Returns the committed term, or `None` (and changes nothing) when the
    /// trimmed draft is empty.
    ///
    /// ```
    /// use pixgrid::app::QueryState;
    ///
    /// let mut query = QueryState::new("nature");
    /// query.set_search_term("  mountains ");
    /// assert_eq!(query.submit_search().as_deref(), Some("mountains"));
    /// assert_eq!(query.page_cursor(), 1);
    ///
    /// query.set_search_term("   ");
    /// assert_eq!(query.submit_search(), None);
    /// assert_eq!(query.search_term(), "mountains");
    /// ```
    pub fn submit_search(&mut self) -> Option<String> {
        let term = self.draft.trim();
        if term.is_empty() {
            return None;
        }
        let term = term.to_string();
        self.search_term.clone_from(&term);
        self.page_cursor = 1;
        self.revision += 1;
        Some(term)
    }

    /// Switches category; the mapped term is committed and mirrored into the draft.
    pub fn select_filter(&mut self, category: FilterCategory, default_term: &str) {
        let term = category.search_term(default_term);
        self.filter = category;
        self.draft.clone_from(&term);
        self.search_term = term;
        self.page_cursor = 1;
        self.revision += 1;
    }

    /// Moves to the next page.
    ///
    /// `loaded_through` is the last page the result store has reconciled. If
    /// the cursor is ahead of it, the page under the cursor never arrived and
    /// is requested again instead of being skipped. The cursor never moves
    /// backwards.
    pub fn advance_page(&mut self, loaded_through: u32) {
        if self.page_cursor <= loaded_through {
            self.page_cursor = self.page_cursor.saturating_add(1);
        }
        self.revision += 1;
    }

    /// Clears the term so the default feed is shown from page 1.
    pub fn clear_search(&mut self) {
        self.draft.clear();
        self.search_term.clear();
        self.filter = FilterCategory::All;
        self.page_cursor = 1;
        self.revision += 1;
    }
}
