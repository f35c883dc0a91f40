//! Tests for the API worker thread

use super::*;
use crate::api::{BookPage, Dictionaries, DictionaryEntry, SearchQuery};
use crate::field::FieldKind;
use futures::future::BoxFuture;
use std::time::Duration;

/// Fake backend: queries starting with "slow" take longer, "fail" errors
struct FakeCatalog;

impl CatalogApi for FakeCatalog {
    fn suggest<'a>(
        &'a self,
        _kind: FieldKind,
        query: &'a str,
        _limit: usize,
    ) -> BoxFuture<'a, Result<Vec<String>, ApiError>> {
        Box::pin(async move {
            if query.starts_with("slow") {
                tokio::time::sleep(Duration::from_millis(200)).await;
            }
            if query.starts_with("fail") {
                return Err(ApiError::Network("connection refused".to_string()));
            }
            Ok(vec![format!("{} result", query)])
        })
    }

    fn search_books<'a>(
        &'a self,
        query: &'a SearchQuery,
    ) -> BoxFuture<'a, Result<BookPage, ApiError>> {
        Box::pin(async move {
            Ok(BookPage {
                books: Vec::new(),
                total_books: 0,
                total_pages: 1,
                current_page: query.page,
            })
        })
    }

    fn dictionaries(&self) -> BoxFuture<'_, Result<Dictionaries, ApiError>> {
        Box::pin(async {
            Ok(Dictionaries {
                genres: vec![DictionaryEntry {
                    id: 1,
                    name: "Fantasy".to_string(),
                }],
                languages: Vec::new(),
            })
        })
    }
}

fn suggest(query: &str, request_id: u64) -> ApiRequest {
    ApiRequest::Suggest {
        kind: FieldKind::Title,
        query: query.to_string(),
        limit: 5,
        request_id,
    }
}

const RECV_TIMEOUT: Duration = Duration::from_secs(2);

#[test]
fn test_worker_answers_suggest_request() {
    let mut worker = spawn_worker(Arc::new(FakeCatalog));
    let responses = worker.take_responses().unwrap();

    worker.request_tx.send(suggest("Dune", 1)).unwrap();

    let response = responses.recv_timeout(RECV_TIMEOUT).unwrap();
    assert_eq!(
        response,
        ApiResponse::Suggestions {
            kind: FieldKind::Title,
            request_id: 1,
            result: Ok(vec!["Dune result".to_string()]),
        }
    );
}

#[test]
fn test_worker_reports_lookup_failure() {
    let mut worker = spawn_worker(Arc::new(FakeCatalog));
    let responses = worker.take_responses().unwrap();

    worker.request_tx.send(suggest("fail", 4)).unwrap();

    match responses.recv_timeout(RECV_TIMEOUT).unwrap() {
        ApiResponse::Suggestions {
            request_id, result, ..
        } => {
            assert_eq!(request_id, 4);
            assert!(matches!(result, Err(ApiError::Network(_))));
        }
        other => panic!("Expected suggestions response, got {:?}", other),
    }
}

#[test]
fn test_slow_request_does_not_block_later_one() {
    let mut worker = spawn_worker(Arc::new(FakeCatalog));
    let responses = worker.take_responses().unwrap();

    worker.request_tx.send(suggest("slow D", 1)).unwrap();
    worker.request_tx.send(suggest("Dune", 2)).unwrap();

    let first = responses.recv_timeout(RECV_TIMEOUT).unwrap();
    let second = responses.recv_timeout(RECV_TIMEOUT).unwrap();

    // The later, fast request overtakes the slow one
    assert!(matches!(first, ApiResponse::Suggestions { request_id: 2, .. }));
    assert!(matches!(second, ApiResponse::Suggestions { request_id: 1, .. }));
}

#[test]
fn test_worker_answers_search_request() {
    let mut worker = spawn_worker(Arc::new(FakeCatalog));
    let responses = worker.take_responses().unwrap();

    let query = SearchQuery::new("Dune", "", "", &Default::default()).with_page(2);
    worker
        .request_tx
        .send(ApiRequest::SearchBooks {
            query,
            request_id: 9,
        })
        .unwrap();

    match responses.recv_timeout(RECV_TIMEOUT).unwrap() {
        ApiResponse::Books { request_id, result } => {
            assert_eq!(request_id, 9);
            assert_eq!(result.unwrap().current_page, 2);
        }
        other => panic!("Expected books response, got {:?}", other),
    }
}

#[test]
fn test_worker_answers_dictionaries_request() {
    let mut worker = spawn_worker(Arc::new(FakeCatalog));
    let responses = worker.take_responses().unwrap();

    worker.request_tx.send(ApiRequest::Dictionaries).unwrap();

    match responses.recv_timeout(RECV_TIMEOUT).unwrap() {
        ApiResponse::Dictionaries { result } => {
            assert_eq!(result.unwrap().genres[0].name, "Fantasy");
        }
        other => panic!("Expected dictionaries response, got {:?}", other),
    }
}

#[test]
fn test_shutdown_cancels_in_flight_request() {
    let mut worker = spawn_worker(Arc::new(FakeCatalog));
    let responses = worker.take_responses().unwrap();

    worker.request_tx.send(suggest("slow Dune", 1)).unwrap();
    std::thread::sleep(Duration::from_millis(20));
    worker.shutdown();

    // Either the cancelled response made it out, or the task was dropped
    // with the runtime; a successful result must never appear.
    if let Ok(response) = responses.recv_timeout(Duration::from_millis(300)) {
        assert!(matches!(
            response,
            ApiResponse::Suggestions {
                result: Err(ApiError::Cancelled),
                ..
            }
        ));
    }
}

#[test]
fn test_worker_loop_drains_accepted_requests_when_senders_close() {
    let (request_tx, request_rx) = unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();

    request_tx.send(suggest("slow Dune", 3)).unwrap();
    drop(request_tx);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    runtime.block_on(worker_loop(
        Arc::new(FakeCatalog),
        request_rx,
        response_tx,
        CancellationToken::new(),
    ));

    // The loop only returns after the slow request finished
    let response = response_rx.try_recv().unwrap();
    assert!(matches!(
        response,
        ApiResponse::Suggestions {
            request_id: 3,
            result: Ok(_),
            ..
        }
    ));
}
