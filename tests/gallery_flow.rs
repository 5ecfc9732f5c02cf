mod common;

use common::{feed_body, search_body, MockPhotoClient};
use pixgrid::api::{Endpoint, UnsplashClient};
use pixgrid::worker::{RequestId, WorkerResponse};
use pixgrid::{initialize, Config, Event, FetchError, FilterCategory, GallerySession, ImagePage, Image};
use std::sync::Arc;
use std::time::Duration;

fn session_with(client: &MockPhotoClient) -> GallerySession {
    GallerySession::new(initialize(&Config::default()), Arc::new(client.clone()))
}

fn search(session: &mut GallerySession, term: &str) {
    session.dispatch(&Event::SetSearchTerm(term.to_string())).unwrap();
    session.dispatch(&Event::SubmitSearch).unwrap();
}

fn ids(session: &GallerySession) -> Vec<String> {
    session.state().store.items().iter().map(|image| image.id.clone()).collect()
}

#[tokio::test]
async fn mountains_grows_from_twelve_to_twenty_four() {
    let client = MockPhotoClient::new();
    client.mock_response("mountains", 1, search_body("m", 1, 12, 5));
    client.mock_response("mountains", 2, search_body("m", 2, 12, 5));
    let mut session = session_with(&client);

    search(&mut session, "mountains");
    session.settle().await.unwrap();

    let first_page = ids(&session);
    assert_eq!(first_page.len(), 12);
    assert_eq!(session.state().query.page_cursor(), 1);
    assert_eq!(session.state().history.entries(), ["mountains"]);

    session.dispatch(&Event::LoadMore).unwrap();
    assert!(session.state().store.is_loading());
    session.settle().await.unwrap();

    let both_pages = ids(&session);
    assert_eq!(both_pages.len(), 24);
    assert_eq!(both_pages[..12], first_page[..]);
    assert_eq!(both_pages[12], "m-2-0");
    assert!(!session.state().store.is_loading());
    assert!(session.state().store.has_more());
}

#[tokio::test]
async fn each_load_more_appends_the_next_page_in_order() {
    const PAGES: u32 = 5;
    let client = MockPhotoClient::new();
    for page in 1..=PAGES {
        client.mock_response("lakes", page, search_body(&format!("lake{page}"), page, 12, PAGES + 1));
    }
    let mut session = session_with(&client);

    search(&mut session, "lakes");
    session.settle().await.unwrap();

    for loaded in 1..=PAGES {
        let expected: Vec<String> = (1..=loaded)
            .flat_map(|page| (0..12).map(move |i| format!("lake{page}-{page}-{i}")))
            .collect();
        assert_eq!(ids(&session), expected, "after {loaded} page(s)");
        assert_eq!(session.state().query.page_cursor(), loaded);

        if loaded < PAGES {
            session.dispatch(&Event::LoadMore).unwrap();
            session.settle().await.unwrap();
        }
    }
}

#[tokio::test(start_paused = true)]
async fn superseded_search_never_lands() {
    let client = MockPhotoClient::new();
    client.mock_delayed("a", 1, Duration::from_millis(100), search_body("a", 1, 4, 1));
    client.mock_delayed("b", 1, Duration::from_millis(400), search_body("b", 1, 3, 1));
    let mut session = session_with(&client);

    search(&mut session, "a");
    tokio::time::sleep(Duration::from_millis(50)).await;
    search(&mut session, "b");
    session.settle().await.unwrap();

    let items = ids(&session);
    assert_eq!(items.len(), 3);
    assert!(items.iter().all(|id| id.starts_with("b-")));
    assert_eq!(session.state().query.search_term(), "b");
    assert_eq!(session.state().history.entries(), ["b", "a"]);
}

#[tokio::test(start_paused = true)]
async fn superseded_search_resolving_last_is_discarded() {
    let client = MockPhotoClient::new();
    client.mock_delayed("a", 1, Duration::from_millis(400), search_body("a", 1, 4, 1));
    client.mock_delayed("b", 1, Duration::from_millis(100), search_body("b", 1, 3, 1));
    let mut session = session_with(&client);

    search(&mut session, "a");
    search(&mut session, "b");
    session.settle().await.unwrap();

    // A late page for the first request arrives after "b" has been applied.
    let late = WorkerResponse::PageLoaded {
        request_id: RequestId(1),
        page_number: 1,
        page: ImagePage::new(vec![Image::new("a-late")], false),
    };
    let dispatch = session.deliver(late).unwrap();

    assert!(!dispatch.render);
    let items = ids(&session);
    assert_eq!(items, ["b-1-0", "b-1-1", "b-1-2"]);
}

#[tokio::test]
async fn failed_page_keeps_items_and_is_retried() {
    let client = MockPhotoClient::new();
    client.mock_response("ocean", 1, search_body("o", 1, 12, 3));
    client.mock_error("ocean", 2, FetchError::Transport("connection reset".to_string()));
    let mut session = session_with(&client);

    search(&mut session, "ocean");
    session.settle().await.unwrap();
    session.dispatch(&Event::LoadMore).unwrap();
    session.settle().await.unwrap();

    let state = session.state();
    assert_eq!(state.store.items().len(), 12);
    assert!(!state.store.is_loading());
    let error = state.store.last_error().unwrap();
    assert!(error.starts_with(FetchError::USER_HEADLINE));
    assert!(error.contains("connection reset"));

    client.mock_response("ocean", 2, search_body("o", 2, 12, 3));
    session.dispatch(&Event::LoadMore).unwrap();
    session.settle().await.unwrap();

    let state = session.state();
    assert_eq!(state.store.items().len(), 24);
    assert!(state.store.last_error().is_none());
    assert_eq!(
        client.calls().last(),
        Some(&Endpoint::Search {
            query: "ocean".to_string(),
            page: 2,
            per_page: 12
        })
    );
}

#[tokio::test]
async fn load_more_after_last_page_does_nothing() {
    let client = MockPhotoClient::new();
    client.mock_response("rare", 1, search_body("r", 1, 2, 1));
    let mut session = session_with(&client);

    search(&mut session, "rare");
    session.settle().await.unwrap();
    assert!(!session.state().store.has_more());

    let dispatch = session.dispatch(&Event::LoadMore).unwrap();
    assert!(!dispatch.render);
    assert_eq!(client.calls().len(), 1);
    assert_eq!(session.state().query.page_cursor(), 1);
}

#[tokio::test]
async fn filter_all_matches_default_term() {
    let client = MockPhotoClient::new();
    client.mock_response("nature", 1, search_body("n", 1, 12, 9));
    let mut by_filter = session_with(&client);
    let mut by_search = session_with(&client);

    by_filter.dispatch(&Event::SelectFilter(FilterCategory::All)).unwrap();
    by_filter.settle().await.unwrap();
    search(&mut by_search, "nature");
    by_search.settle().await.unwrap();

    assert_eq!(ids(&by_filter), ids(&by_search));
    let calls = client.calls();
    assert_eq!(calls[0], calls[1]);
    assert!(by_filter.state().history.is_empty());
}

#[tokio::test]
async fn history_stays_bounded_and_unique() {
    let client = MockPhotoClient::new();
    let mut session = session_with(&client);

    for term in ["a", "b", "c", "a", "d", "e", "f", "g"] {
        search(&mut session, term);
    }
    session.settle().await.unwrap();

    assert_eq!(session.state().history.entries(), ["g", "f", "e", "d", "c"]);
}

#[tokio::test]
async fn feed_is_decoded_from_bare_array() {
    let client = MockPhotoClient::new();
    client.mock_response("", 1, feed_body(1, 12));
    client.mock_response("", 2, feed_body(2, 5));
    let mut session = session_with(&client);

    session.dispatch(&Event::ClearSearch).unwrap();
    session.settle().await.unwrap();
    assert_eq!(session.state().store.items().len(), 12);
    assert!(session.state().store.has_more());

    session.dispatch(&Event::LoadMore).unwrap();
    session.settle().await.unwrap();
    let state = session.state();
    assert_eq!(state.store.items().len(), 17);
    assert!(!state.store.has_more());
    assert!(state.store.items()[1].thumbnail_url.is_none());
    assert!(matches!(client.calls()[0], Endpoint::Feed { page: 1, per_page: 12 }));
}

#[tokio::test]
async fn start_loads_default_term_once() {
    let client = MockPhotoClient::new();
    client.mock_response("nature", 1, search_body("n", 1, 12, 2));
    let mut session = session_with(&client);

    session.dispatch(&Event::Start).unwrap();
    session.dispatch(&Event::Start).unwrap();
    session.settle().await.unwrap();

    assert_eq!(client.calls().len(), 1);
    assert_eq!(session.state().store.items().len(), 12);

    let frame = pixgrid::ui::render(session.state(), 120);
    assert!(frame.contains("Load More Images"));
    assert!(frame.contains("n photo 0"));
}

#[tokio::test]
async fn missing_access_key_becomes_load_error() {
    let config = Config {
        access_key: None,
        access_key_env: "PIXGRID_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
        ..Config::default()
    };
    let transport = Arc::new(UnsplashClient::new(&config));
    let mut session = GallerySession::new(initialize(&config), transport);

    session.dispatch(&Event::Start).unwrap();
    session.settle().await.unwrap();

    let state = session.state();
    assert!(state.store.items().is_empty());
    assert!(!state.store.is_loading());
    let error = state.store.last_error().unwrap();
    assert!(error.starts_with(FetchError::USER_HEADLINE));
    assert!(error.contains("PIXGRID_TEST_KEY_THAT_IS_NEVER_SET"));
}
