//! Result store: the accumulated images and the loading/error flags.
//!
//! Items form an explicit append-only sequence between resets. The store does
//! not deduplicate ids across pages and never evicts; a well-behaved upstream
//! does not repeat photos, and memory grows with the number of pages loaded.

use crate::domain::{Image, ImagePage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultStore {
    items: Vec<Image>,
    is_loading: bool,
    last_error: Option<String>,
    has_more: bool,
    loaded_through: u32,
}

impl Default for ResultStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            is_loading: false,
            last_error: None,
            has_more: true,
            loaded_through: 0,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[Image] {
        &self.items
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Whether another page plausibly exists for the current query.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.has_more
    }

    /// Last page reconciled since the reset, `0` if none.
    #[must_use]
    pub const fn loaded_through(&self) -> u32 {
        self.loaded_through
    }

    /// Forgets everything fetched for the previous query.
    pub fn reset(&mut self) {
        self.items.clear();
        self.last_error = None;
        self.has_more = true;
        self.loaded_through = 0;
    }

    /// Marks a fetch as outstanding.
    pub fn begin_loading(&mut self) {
        self.is_loading = true;
    }

    /// Folds a successfully fetched page in.
    ///
    /// Page 1 replaces the items; any later page is appended in received order.
    pub fn reconcile(&mut self, page_number: u32, page: ImagePage) {
        if page_number <= 1 {
            self.items = page.images;
        } else {
            self.items.extend(page.images);
        }
        self.has_more = page.has_more;
        self.loaded_through = page_number;
        self.last_error = None;
        self.is_loading = false;
    }

    /// Records a failed fetch. Items are left untouched.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
        self.is_loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(prefix: &str, count: usize, has_more: bool) -> ImagePage {
        ImagePage::new(
            (0..count).map(|i| Image::new(format!("{prefix}-{i}"))).collect(),
            has_more,
        )
    }

    #[test]
    fn first_page_replaces_later_pages_append() {
        let mut store = ResultStore::new();
        store.reconcile(1, page("a", 3, true));
        store.reconcile(2, page("b", 2, true));
        let ids: Vec<&str> = store.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["a-0", "a-1", "a-2", "b-0", "b-1"]);

        store.reconcile(1, page("c", 1, false));
        assert_eq!(store.items().len(), 1);
        assert!(!store.has_more());
        assert_eq!(store.loaded_through(), 1);
    }

    #[test]
    fn failure_keeps_items_and_clears_loading() {
        let mut store = ResultStore::new();
        store.reconcile(1, page("a", 2, true));
        store.begin_loading();
        store.fail("boom");
        assert_eq!(store.items().len(), 2);
        assert!(!store.is_loading());
        assert_eq!(store.last_error(), Some("boom"));
        assert_eq!(store.loaded_through(), 1);
    }

    #[test]
    fn duplicates_across_pages_are_kept() {
        let mut store = ResultStore::new();
        store.reconcile(1, page("a", 2, true));
        store.reconcile(2, page("a", 2, true));
        assert_eq!(store.items().len(), 4);
    }
}
