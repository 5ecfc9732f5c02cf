//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place [`AppState`] changes. Each event either
//! edits the query (after which the reactive trigger decides whether to issue
//! a fetch) or delivers a worker response, which is applied only if it belongs
//! to the current request.
//!
//! # Event Types
//!
//! - **Lifecycle**: `Start`, `Quit`
//! - **Query intents**: `SetSearchTerm`, `SubmitSearch`, `SelectFilter`,
//!   `LoadMore`, `SelectFromHistory`, `ClearSearch`
//! - **Worker**: `WorkerResponse`
//!
//! # Example
//!
//! ```rust
//! use pixgrid::app::{handle_event, AppState, Event};
//! use pixgrid::{Config, Theme};
//!
//! let mut state = AppState::new(&Config::default(), Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::Start)?;
//! assert!(render);
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), pixgrid::GalleryError>(())
//! ```

use crate::app::{Action, AppState};
use crate::domain::{FilterCategory, Result};
use crate::worker::WorkerResponse;

/// Events triggered by user intents or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Issues the initial fetch for the default term. Ignored once started.
    Start,

    /// Replaces the uncommitted search input. Never fetches.
    SetSearchTerm(String),

    /// Commits the search input, records it in history and fetches page 1.
    SubmitSearch,

    /// Switches category and fetches page 1 of its term.
    SelectFilter(FilterCategory),

    /// Fetches the next page and appends it.
    ///
    /// Ignored while a fetch is outstanding or when no more pages exist.
    LoadMore,

    /// Searches again for the history entry at this index (0 = most recent).
    SelectFromHistory(usize),

    /// Drops the search term and shows the latest-photos feed.
    ClearSearch,

    Quit,

    /// A fetch resolved.
    WorkerResponse(WorkerResponse),
}

/// Processes an event and returns `(needs_render, actions)`.
///
/// # Errors
///
/// No event currently fails.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Start => {
            if state.has_started() {
                tracing::debug!("already started, ignoring");
                return Ok((false, vec![]));
            }
            tracing::debug!(term = %state.query.search_term(), "initial load");
            Ok((true, state.sync_query()))
        }
        Event::SetSearchTerm(term) => {
            state.query.set_search_term(term.clone());
            tracing::trace!(draft = %state.query.draft(), "search draft updated");
            Ok((true, vec![]))
        }
        Event::SubmitSearch => {
            let Some(term) = state.query.submit_search() else {
                tracing::debug!("empty search submitted, ignoring");
                return Ok((false, vec![]));
            };

            let inserted = state.history.record(&term);
            tracing::debug!(term = %term, inserted, "search submitted");

            state.store.reset();
            Ok((true, state.sync_query()))
        }
        Event::SelectFilter(category) => {
            let default_term = state.default_term().to_string();
            state.query.select_filter(*category, &default_term);
            tracing::debug!(filter = %category, term = %state.query.search_term(), "filter selected");

            state.store.reset();
            Ok((true, state.sync_query()))
        }
        Event::LoadMore => {
            if state.fetch.is_fetching() {
                tracing::debug!("fetch outstanding, load more ignored");
                return Ok((false, vec![]));
            }
            if !state.store.has_more() {
                tracing::debug!("no more pages");
                return Ok((false, vec![]));
            }

            state.query.advance_page(state.store.loaded_through());
            tracing::debug!(page = state.query.page_cursor(), "loading more");
            Ok((true, state.sync_query()))
        }
        Event::SelectFromHistory(index) => {
            let Some(term) = state.history.get(*index).map(str::to_string) else {
                tracing::debug!(index, "no history entry at index");
                return Ok((false, vec![]));
            };

            tracing::debug!(term = %term, "search from history");
            state.query.set_search_term(term);
            state.query.submit_search();

            state.store.reset();
            Ok((true, state.sync_query()))
        }
        Event::ClearSearch => {
            tracing::debug!("search cleared, switching to feed");
            state.query.clear_search();

            state.store.reset();
            Ok((true, state.sync_query()))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
        Event::WorkerResponse(response) => Ok(apply_response(state, response)),
    }
}

fn apply_response(state: &mut AppState, response: &WorkerResponse) -> (bool, Vec<Action>) {
    let request_id = response.request_id();
    if !state.fetch.is_current(request_id) {
        tracing::debug!(request_id = %request_id, current = ?state.fetch.request_id(), "discarding stale response");
        return (false, vec![]);
    }

    match response {
        WorkerResponse::PageLoaded {
            page_number, page, ..
        } => {
            tracing::debug!(
                request_id = %request_id,
                page_number,
                images = page.len(),
                has_more = page.has_more,
                "page loaded"
            );
            state.store.reconcile(*page_number, page.clone());
        }
        WorkerResponse::FetchFailed {
            page_number, error, ..
        } => {
            tracing::warn!(request_id = %request_id, page_number, error = %error, "fetch failed");
            state.store.fail(error.user_message());
        }
    }

    state.fetch = crate::app::FetchState::Idle;
    (true, vec![])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FetchError, Image, ImagePage};
    use crate::worker::{RequestId, WorkerMessage};
    use crate::{Config, Theme};

    fn state() -> AppState {
        AppState::new(&Config::default(), Theme::default())
    }

    fn page(prefix: &str, count: usize, has_more: bool) -> ImagePage {
        let images = (0..count).map(|i| Image::new(format!("{prefix}-{i}"))).collect();
        ImagePage::new(images, has_more)
    }

    fn fetched_ids(actions: &[Action]) -> Vec<RequestId> {
        actions
            .iter()
            .filter_map(|action| match action {
                Action::PostToWorker(WorkerMessage::FetchPage { request_id, .. }) => Some(*request_id),
                _ => None,
            })
            .collect()
    }

    fn loaded(request_id: RequestId, page_number: u32, page: ImagePage) -> Event {
        Event::WorkerResponse(WorkerResponse::PageLoaded {
            request_id,
            page_number,
            page,
        })
    }

    fn search(state: &mut AppState, term: &str) -> Vec<Action> {
        handle_event(state, &Event::SetSearchTerm(term.to_string())).unwrap();
        handle_event(state, &Event::SubmitSearch).unwrap().1
    }

    #[test]
    fn start_is_idempotent() {
        let mut state = state();
        let (_, first) = handle_event(&mut state, &Event::Start).unwrap();
        let (render, second) = handle_event(&mut state, &Event::Start).unwrap();
        assert_eq!(fetched_ids(&first), vec![RequestId(1)]);
        assert!(!render);
        assert!(second.is_empty());
    }

    #[test]
    fn typing_never_fetches() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::SetSearchTerm("moun".into())).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert!(!state.store.is_loading());
    }

    #[test]
    fn blank_submit_is_ignored() {
        let mut state = state();
        let actions = search(&mut state, "   ");
        assert!(actions.is_empty());
        assert!(state.history.is_empty());
    }

    #[test]
    fn submit_records_history_and_fetches_page_one() {
        let mut state = state();
        let actions = search(&mut state, "mountains");
        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerMessage::fetch_page(RequestId(1), "mountains", 1, 12))]
        );
        assert_eq!(state.history.entries(), ["mountains"]);
    }

    #[test]
    fn pages_accumulate_in_order() {
        let mut state = state();
        let ids = fetched_ids(&search(&mut state, "mountains"));
        handle_event(&mut state, &loaded(ids[0], 1, page("p1", 12, true))).unwrap();

        let ids = fetched_ids(&handle_event(&mut state, &Event::LoadMore).unwrap().1);
        handle_event(&mut state, &loaded(ids[0], 2, page("p2", 12, true))).unwrap();

        let items = state.store.items();
        assert_eq!(items.len(), 24);
        assert_eq!(items[0].id, "p1-0");
        assert_eq!(items[12].id, "p2-0");
        assert!(!state.store.is_loading());
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state = state();
        let a = fetched_ids(&search(&mut state, "a"));
        let b = fetched_ids(&search(&mut state, "b"));

        let (render, _) = handle_event(&mut state, &loaded(a[0], 1, page("a", 3, false))).unwrap();
        assert!(!render);
        assert!(state.store.items().is_empty());
        assert!(state.store.is_loading());

        handle_event(&mut state, &loaded(b[0], 1, page("b", 2, false))).unwrap();
        assert_eq!(state.store.items().len(), 2);
        assert!(state.store.items().iter().all(|image| image.id.starts_with("b-")));
    }

    #[test]
    fn load_more_is_ignored_while_fetching() {
        let mut state = state();
        handle_event(&mut state, &Event::Start).unwrap();
        let (render, actions) = handle_event(&mut state, &Event::LoadMore).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.query.page_cursor(), 1);
    }

    #[test]
    fn load_more_past_last_page_is_noop() {
        let mut state = state();
        let ids = fetched_ids(&handle_event(&mut state, &Event::Start).unwrap().1);
        handle_event(&mut state, &loaded(ids[0], 1, page("n", 4, false))).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::LoadMore).unwrap();
        assert!(actions.is_empty());
        assert_eq!(state.query.page_cursor(), 1);
    }

    #[test]
    fn failure_keeps_items_and_failed_page_is_retried() {
        let mut state = state();
        let ids = fetched_ids(&handle_event(&mut state, &Event::Start).unwrap().1);
        handle_event(&mut state, &loaded(ids[0], 1, page("n", 12, true))).unwrap();

        let ids = fetched_ids(&handle_event(&mut state, &Event::LoadMore).unwrap().1);
        let failed = Event::WorkerResponse(WorkerResponse::FetchFailed {
            request_id: ids[0],
            page_number: 2,
            error: FetchError::Transport("connection reset".into()),
        });
        handle_event(&mut state, &failed).unwrap();

        assert_eq!(state.store.items().len(), 12);
        assert!(!state.store.is_loading());
        assert!(state
            .store
            .last_error()
            .is_some_and(|message| message.starts_with(FetchError::USER_HEADLINE)));

        let (_, actions) = handle_event(&mut state, &Event::LoadMore).unwrap();
        assert!(matches!(
            actions.as_slice(),
            [Action::PostToWorker(WorkerMessage::FetchPage { request, .. })] if request.page == 2
        ));
    }

    #[test]
    fn filter_all_searches_default_term_without_history() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::SelectFilter(FilterCategory::All)).unwrap();
        assert!(matches!(
            actions.as_slice(),
            [Action::PostToWorker(WorkerMessage::FetchPage { request, .. })] if request.term == "nature"
        ));
        assert!(state.history.is_empty());
        assert_eq!(state.query.draft(), "nature");
    }

    #[test]
    fn history_pick_refetches_without_reordering() {
        let mut state = state();
        search(&mut state, "cats");
        search(&mut state, "dogs");

        let (_, actions) = handle_event(&mut state, &Event::SelectFromHistory(1)).unwrap();
        assert!(matches!(
            actions.as_slice(),
            [Action::PostToWorker(WorkerMessage::CancelFetch { .. }), Action::PostToWorker(WorkerMessage::FetchPage { request, .. })]
                if request.term == "cats"
        ));
        assert_eq!(state.history.entries(), ["dogs", "cats"]);

        let (render, actions) = handle_event(&mut state, &Event::SelectFromHistory(7)).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn clear_search_switches_to_feed() {
        let mut state = state();
        search(&mut state, "cats");
        let (_, actions) = handle_event(&mut state, &Event::ClearSearch).unwrap();
        assert!(matches!(
            actions.last(),
            Some(Action::PostToWorker(WorkerMessage::FetchPage { request, .. })) if request.term.is_empty()
        ));
    }

    #[test]
    fn quit_emits_quit() {
        let mut state = state();
        assert_eq!(handle_event(&mut state, &Event::Quit).unwrap(), (false, vec![Action::Quit]));
    }
}
