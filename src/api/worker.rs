//! API Worker Thread
//!
//! Runs catalog requests on a background thread so the UI loop never blocks
//! on the network. The thread hosts a current-thread tokio runtime; each
//! request becomes its own task, so a slow lookup does not hold back a later
//! one and responses can arrive in any order. Callers tag requests with ids
//! and drop responses they no longer care about.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use super::{ApiError, ApiRequest, ApiResponse, CatalogApi};

/// Owning handle for a running worker
///
/// Dropping the handle (or calling `shutdown`) cancels in-flight requests and
/// joins the thread.
pub struct WorkerHandle {
    pub request_tx: UnboundedSender<ApiRequest>,
    pub response_rx: Option<Receiver<ApiResponse>>,
    cancel: CancellationToken,
    thread: Option<JoinHandle<()>>,
}

impl WorkerHandle {
    /// Take the response channel; the UI loop drains it
    pub fn take_responses(&mut self) -> Option<Receiver<ApiResponse>> {
        self.response_rx.take()
    }

    /// Cancel outstanding work and wait for the thread to exit
    pub fn shutdown(&mut self) {
        self.cancel.cancel();
        if let Some(thread) = self.thread.take()
            && thread.join().is_err()
        {
            log::warn!("API worker thread panicked");
        }
    }
}

impl Drop for WorkerHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Spawn the API worker thread
///
/// Creates both channels and a cancellation token, and returns the handle
/// owning the UI-side ends.
pub fn spawn_worker(api: Arc<dyn CatalogApi>) -> WorkerHandle {
    let (request_tx, request_rx) = unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();
    let cancel = CancellationToken::new();

    let worker_cancel = cancel.clone();
    let thread = std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                log::warn!("Failed to start API worker runtime: {}", e);
                return;
            }
        };
        runtime.block_on(worker_loop(api, request_rx, response_tx, worker_cancel));
    });

    WorkerHandle {
        request_tx,
        response_rx: Some(response_rx),
        cancel,
        thread: Some(thread),
    }
}

/// Main worker loop - processes requests until the channel closes or the
/// token is cancelled
async fn worker_loop(
    api: Arc<dyn CatalogApi>,
    mut request_rx: UnboundedReceiver<ApiRequest>,
    response_tx: Sender<ApiResponse>,
    cancel: CancellationToken,
) {
    let mut tasks = JoinSet::new();

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                log::debug!("API worker cancelled with {} request(s) in flight", tasks.len());
                break;
            }
            Some(_) = tasks.join_next(), if !tasks.is_empty() => {}
            request = request_rx.recv() => match request {
                Some(request) => {
                    tasks.spawn(handle_request(
                        Arc::clone(&api),
                        request,
                        response_tx.clone(),
                        cancel.clone(),
                    ));
                }
                None => {
                    // Senders gone: finish what was accepted, then exit
                    while tasks.join_next().await.is_some() {}
                    break;
                }
            },
        }
    }

    log::debug!("API worker thread shutting down");
}

/// Run one request and report its outcome
async fn handle_request(
    api: Arc<dyn CatalogApi>,
    request: ApiRequest,
    response_tx: Sender<ApiResponse>,
    cancel: CancellationToken,
) {
    let response = match request {
        ApiRequest::Suggest {
            kind,
            query,
            limit,
            request_id,
        } => {
            log::debug!("Lookup {} #{}: {:?}", kind, request_id, query);
            let result = tokio::select! {
                biased;
                _ = cancel.cancelled() => Err(ApiError::Cancelled),
                result = api.suggest(kind, &query, limit) => result,
            };
            ApiResponse::Suggestions {
                kind,
                request_id,
                result,
            }
        }
        ApiRequest::SearchBooks { query, request_id } => {
            log::debug!("Book search #{} page {}", request_id, query.page);
            let result = tokio::select! {
                biased;
                _ = cancel.cancelled() => Err(ApiError::Cancelled),
                result = api.search_books(&query) => result,
            };
            ApiResponse::Books { request_id, result }
        }
        ApiRequest::Dictionaries => {
            log::debug!("Loading genre and language dictionaries");
            let result = tokio::select! {
                biased;
                _ = cancel.cancelled() => Err(ApiError::Cancelled),
                result = api.dictionaries() => result,
            };
            ApiResponse::Dictionaries { result }
        }
    };

    if response_tx.send(response).is_err() {
        log::debug!("UI side disconnected, dropping response");
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
