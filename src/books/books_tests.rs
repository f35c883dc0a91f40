//! Tests for book search state

use super::*;
use crate::api::{BookAuthor, BookSummary};
use crate::config::SearchConfig;
use crate::test_utils::test_helpers::drain_requests;
use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

fn state() -> (BookSearchState, UnboundedReceiver<ApiRequest>) {
    let (tx, rx) = unbounded_channel();
    let mut state = BookSearchState::new();
    state.set_request_channel(tx);
    (state, rx)
}

fn query() -> SearchQuery {
    SearchQuery::new("Dune", "", "", &SearchConfig::default())
}

fn page(current_page: u32, total_pages: u32) -> BookPage {
    BookPage {
        books: vec![BookSummary {
            id: 1,
            title: "Dune".to_string(),
            image_file_name: None,
            author: BookAuthor {
                id: 2,
                name: "Frank Herbert".to_string(),
            },
        }],
        total_books: 25,
        total_pages,
        current_page,
    }
}

#[test]
fn test_submit_sends_request_and_marks_loading() {
    let (mut state, mut rx) = state();

    assert!(state.submit(query()));

    assert!(state.loading);
    assert!(state.has_searched());
    assert_eq!(
        drain_requests(&mut rx),
        vec![ApiRequest::SearchBooks {
            query: query(),
            request_id: 1
        }]
    );
}

#[test]
fn test_response_shows_page() {
    let (mut state, _rx) = state();
    state.submit(query());

    assert!(state.apply_response(1, Ok(page(0, 3))));

    assert!(!state.loading);
    assert_eq!(state.page.as_ref().unwrap().total_pages, 3);
}

#[test]
fn test_failure_sets_error_message() {
    let (mut state, _rx) = state();
    state.submit(query());

    state.apply_response(1, Err(ApiError::Network("down".to_string())));

    assert_eq!(state.error.as_deref(), Some(SEARCH_FAILED_TEXT));
    assert!(!state.loading);
}

#[test]
fn test_only_latest_search_applies() {
    let (mut state, _rx) = state();
    state.submit(query());
    state.submit(query().with_page(1));

    assert!(!state.apply_response(1, Ok(page(0, 3))));
    assert!(state.page.is_none());
    assert!(state.apply_response(2, Ok(page(1, 3))));
}

#[test]
fn test_next_page_stops_at_last_page() {
    let (mut state, mut rx) = state();
    state.submit(query());
    state.apply_response(1, Ok(page(0, 2)));
    drain_requests(&mut rx);

    assert!(state.next_page());
    state.apply_response(2, Ok(page(1, 2)));
    assert!(!state.next_page());

    let requests = drain_requests(&mut rx);
    assert_eq!(requests.len(), 1);
    assert!(matches!(
        &requests[0],
        ApiRequest::SearchBooks { query, .. } if query.page == 1 && query.title == "Dune"
    ));
}

#[test]
fn test_prev_page_stops_at_first_page() {
    let (mut state, _rx) = state();
    assert!(!state.prev_page());

    state.submit(query().with_page(1));
    state.apply_response(1, Ok(page(1, 2)));

    assert!(state.prev_page());
    state.apply_response(2, Ok(page(0, 2)));
    assert!(!state.prev_page());
}

#[test]
fn test_next_page_without_results_does_nothing() {
    let (mut state, _rx) = state();
    assert!(!state.next_page());
}

#[test]
fn test_load_dictionaries_sends_request() {
    let (mut state, mut rx) = state();

    assert!(state.load_dictionaries());

    assert_eq!(drain_requests(&mut rx), vec![ApiRequest::Dictionaries]);
}

#[test]
fn test_dictionaries_fill_filter_choices() {
    let (mut state, _rx) = state();

    state.apply_dictionaries(Ok(Dictionaries {
        genres: vec![crate::api::DictionaryEntry {
            id: 4,
            name: "Poetry".to_string(),
        }],
        languages: Vec::new(),
    }));
    state.filters.cycle_genre();

    assert_eq!(state.filters.genre().map(|g| g.id), Some(4));
    assert_eq!(state.error, None);
}

#[test]
fn test_dictionaries_failure_sets_error() {
    let (mut state, _rx) = state();

    state.apply_dictionaries(Err(ApiError::Api {
        code: 500,
        message: "boom".to_string(),
    }));

    assert_eq!(state.error.as_deref(), Some(DICTIONARIES_FAILED_TEXT));
    assert!(state.filters.dictionaries().genres.is_empty());
}
