//! Application state and view model computation.
//!
//! [`AppState`] owns the three pieces of gallery state (query, results and
//! history), the fetch lifecycle, and the theme. It is mutated only by
//! [`handle_event`](super::handle_event).
//!
//! # Reactive trigger
//!
//! Intents only touch [`QueryState`]. After each one the handler calls
//! [`AppState::sync_query`], which compares the current [`QueryKey`] with the
//! key of the last issued fetch and, if it differs, supersedes whatever is in
//! flight and issues a new request. This keeps "what should be on screen" and
//! "what has been asked for" from drifting apart no matter which intent
//! changed the query.
//!
//! # Example
//!
//! ```rust
//! use pixgrid::app::{Action, AppState};
//! use pixgrid::{Config, Theme};
//!
//! let mut state = AppState::new(&Config::default(), Theme::default());
//! let actions = state.sync_query();
//! assert!(matches!(actions.as_slice(), [Action::PostToWorker(_)]));
//! assert!(state.store.is_loading());
//!
//! // Nothing changed, nothing issued.
//! assert!(state.sync_query().is_empty());
//! ```

use super::history::SearchHistory;
use super::modes::FetchState;
use super::query::{QueryKey, QueryState};
use super::store::ResultStore;
use super::Action;
use crate::domain::FilterCategory;
use crate::ui::helpers::truncate;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    Chip, EmptyState, FooterInfo, GalleryViewModel, HeaderInfo, ImageCell, LoadMoreInfo,
    SearchBarInfo,
};
use crate::worker::{RequestId, WorkerMessage};
use crate::Config;

/// Terminal columns taken by one grid cell, including its gutter.
pub const CELL_WIDTH: usize = 30;

/// Grid never shows more than this many cells per row.
pub const MAX_COLUMNS: usize = 4;

const TITLE: &str = "Unsplash Gallery";
const SUBTITLE: &str = "Discover beautiful free images from Unsplash";
const EMPTY_HINT: &str = "Try searching for something else or browse using the categories above.";
const KEYBINDINGS: &str =
    "search <term> · filter <category> · more · history <n> · feed · help · quit";

/// Central gallery state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub query: QueryState,
    pub store: ResultStore,
    pub history: SearchHistory,

    /// Which request, if any, is allowed to change `store`.
    pub fetch: FetchState,

    pub theme: Theme,

    default_term: String,
    page_size: u32,
    next_request_id: RequestId,

    /// Key the last fetch was issued for; `None` until the first fetch.
    last_issued: Option<QueryKey>,
}

impl AppState {
    /// Creates state positioned on page 1 of the configured default term.
    ///
    /// No fetch is issued until the first call to [`sync_query`](Self::sync_query).
    #[must_use]
    pub fn new(config: &Config, theme: Theme) -> Self {
        Self {
            query: QueryState::new(&config.default_term),
            store: ResultStore::new(),
            history: SearchHistory::with_capacity(config.history_capacity),
            fetch: FetchState::Idle,
            theme,
            default_term: config.default_term.clone(),
            page_size: config.page_size,
            next_request_id: RequestId(1),
            last_issued: None,
        }
    }

    #[must_use]
    pub fn default_term(&self) -> &str {
        &self.default_term
    }

    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Whether any fetch has been issued yet.
    #[must_use]
    pub const fn has_started(&self) -> bool {
        self.last_issued.is_some()
    }

    /// Issues a fetch if the query changed since the last one.
    ///
    /// When a fetch is still outstanding it is cancelled first; its late
    /// resolution, if any, will no longer match [`FetchState`] and is dropped.
    pub fn sync_query(&mut self) -> Vec<Action> {
        let key = self.query.key();
        if self.last_issued.as_ref() == Some(&key) {
            return vec![];
        }

        let _span = tracing::debug_span!(
            "sync_query",
            term = %key.term,
            page = key.page,
            revision = key.revision
        )
        .entered();

        let mut actions = Vec::with_capacity(2);

        if let Some(superseded) = self.fetch.request_id() {
            tracing::debug!(request_id = %superseded, "superseding in-flight fetch");
            actions.push(Action::PostToWorker(WorkerMessage::cancel_fetch(superseded)));
        }

        let request_id = self.next_request_id;
        self.next_request_id = request_id.next();

        self.store.begin_loading();
        self.fetch = FetchState::Fetching {
            request_id,
            page: key.page,
        };

        tracing::debug!(request_id = %request_id, "issuing fetch");
        actions.push(Action::PostToWorker(WorkerMessage::fetch_page(
            request_id,
            key.term.clone(),
            key.page,
            self.page_size,
        )));

        self.last_issued = Some(key);
        actions
    }

    /// Number of grid columns that fit in `cols` terminal columns.
    #[must_use]
    pub fn grid_columns(cols: usize) -> usize {
        (cols / CELL_WIDTH).clamp(1, MAX_COLUMNS)
    }

    /// Computes the view model for a terminal `cols` wide.
    #[must_use]
    pub fn compute_viewmodel(&self, cols: usize) -> GalleryViewModel {
        let columns = Self::grid_columns(cols);
        let caption_width = CELL_WIDTH.saturating_sub(2);
        let loading = self.store.is_loading();

        let filters = FilterCategory::ALL
            .iter()
            .map(|category| Chip {
                key: category.as_str().to_string(),
                label: category.label().to_string(),
                active: *category == self.query.filter(),
            })
            .collect();

        let history = self
            .history
            .entries()
            .iter()
            .enumerate()
            .map(|(index, term)| Chip {
                key: (index + 1).to_string(),
                label: term.clone(),
                active: term == self.query.search_term(),
            })
            .collect();

        let cells: Vec<ImageCell> = self
            .store
            .items()
            .iter()
            .map(|image| ImageCell {
                id: image.id.clone(),
                caption: truncate(image.caption(), caption_width),
                preview: image.preview().to_string(),
                has_preview: image.thumbnail_url.is_some(),
            })
            .collect();
        let grid = cells.chunks(columns).map(<[ImageCell]>::to_vec).collect();

        let (empty_state, load_more) = if self.store.items().is_empty() {
            let message = if loading { "Loading images..." } else { "No images found" };
            let empty = EmptyState {
                message: message.to_string(),
                subtitle: EMPTY_HINT.to_string(),
            };
            (Some(empty), None)
        } else {
            let load_more = if loading {
                LoadMoreInfo {
                    label: "Loading...".to_string(),
                    enabled: false,
                }
            } else if self.store.has_more() {
                LoadMoreInfo {
                    label: "Load More Images".to_string(),
                    enabled: true,
                }
            } else {
                LoadMoreInfo {
                    label: "No more images".to_string(),
                    enabled: false,
                }
            };
            (None, Some(load_more))
        };

        let term = self.query.search_term();
        let source = if term.is_empty() {
            "latest photos".to_string()
        } else {
            format!("\"{term}\"")
        };
        let status = format!(
            "{} images · page {} · {source}",
            self.store.items().len(),
            self.store.loaded_through().max(1),
        );

        GalleryViewModel {
            header: HeaderInfo {
                title: TITLE.to_string(),
                subtitle: SUBTITLE.to_string(),
            },
            search_bar: SearchBarInfo {
                draft: self.query.draft().to_string(),
                button_label: if loading { "Searching..." } else { "Search" }.to_string(),
                busy: loading,
            },
            filters,
            history,
            grid,
            columns,
            error: self.store.last_error().map(str::to_string),
            empty_state,
            load_more,
            footer: FooterInfo {
                status,
                keybindings: KEYBINDINGS.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Image, ImagePage};

    fn state() -> AppState {
        AppState::new(&Config::default(), Theme::default())
    }

    #[test]
    fn first_sync_issues_page_one_of_default_term() {
        let mut state = state();
        let actions = state.sync_query();
        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerMessage::fetch_page(RequestId(1), "nature", 1, 12))]
        );
        assert!(state.fetch.is_current(RequestId(1)));
        assert!(state.has_started());
    }

    #[test]
    fn query_change_while_fetching_cancels_before_issuing() {
        let mut state = state();
        state.sync_query();

        state.query.set_search_term("a");
        state.query.submit_search();
        let actions = state.sync_query();

        assert_eq!(
            actions,
            vec![
                Action::PostToWorker(WorkerMessage::cancel_fetch(RequestId(1))),
                Action::PostToWorker(WorkerMessage::fetch_page(RequestId(2), "a", 1, 12)),
            ]
        );
        assert!(state.fetch.is_current(RequestId(2)));
        assert!(!state.fetch.is_current(RequestId(1)));
    }

    #[test]
    fn grid_columns_are_clamped() {
        assert_eq!(AppState::grid_columns(0), 1);
        assert_eq!(AppState::grid_columns(CELL_WIDTH * 2 + 5), 2);
        assert_eq!(AppState::grid_columns(500), MAX_COLUMNS);
    }

    #[test]
    fn viewmodel_while_first_page_loads() {
        let mut state = state();
        state.sync_query();
        let vm = state.compute_viewmodel(80);

        assert_eq!(vm.empty_state.as_ref().map(|e| e.message.as_str()), Some("Loading images..."));
        assert!(vm.load_more.is_none());
        assert_eq!(vm.search_bar.button_label, "Searching...");
        assert!(vm.filters.iter().any(|chip| chip.label == "All" && chip.active));
        assert!(vm.history.is_empty());
    }

    #[test]
    fn viewmodel_lays_out_rows_and_load_more() {
        let mut state = state();
        state.sync_query();
        let images = (0..5)
            .map(|i| Image::new(format!("img-{i}")).with_description("a ridge at dawn"))
            .collect();
        state.store.reconcile(1, ImagePage::new(images, true));

        let vm = state.compute_viewmodel(CELL_WIDTH * 2);
        assert_eq!(vm.columns, 2);
        assert_eq!(vm.grid.len(), 3);
        assert_eq!(vm.grid[2].len(), 1);
        assert_eq!(vm.grid[0][0].preview, crate::domain::NO_PREVIEW_TEXT);
        assert_eq!(
            vm.load_more,
            Some(LoadMoreInfo {
                label: "Load More Images".to_string(),
                enabled: true
            })
        );
        assert!(vm.footer.status.starts_with("5 images · page 1"));
    }

    #[test]
    fn viewmodel_keeps_items_under_error_banner() {
        let mut state = state();
        state.store.reconcile(1, ImagePage::new(vec![Image::new("x")], false));
        state.store.fail("Could not load images: boom");

        let vm = state.compute_viewmodel(80);
        assert_eq!(vm.error.as_deref(), Some("Could not load images: boom"));
        assert_eq!(vm.grid.len(), 1);
        assert_eq!(vm.load_more.map(|l| l.enabled), Some(false));
    }
}
