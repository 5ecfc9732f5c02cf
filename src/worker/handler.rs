//! Fetch orchestrator.
//!
//! [`fetch_page`] is the request/decode contract for a single page. The
//! [`FetchWorker`] runs it on tokio tasks, keeps an abort handle per in-flight
//! request so superseded fetches can be cancelled, and reports every
//! resolution over an unbounded channel.
//!
//! Every spawned fetch resolves exactly once. A drop guard travels with the
//! task; if the task is aborted or panics before reporting, the guard reports
//! [`FetchError::Cancelled`] instead. The state machine therefore always gets
//! the chance to clear its loading flag, and stale cancellations are
//! discarded by request id.

use crate::api::{decode_page, Endpoint, FetchRequest, PhotoTransport};
use crate::domain::{FetchError, ImagePage};
use crate::worker::{RequestId, WorkerMessage, WorkerResponse};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::AbortHandle;
use tracing::Instrument;

/// Fetches and decodes one page.
///
/// Chooses the search or feed endpoint from the request term, performs the
/// call through `transport`, and normalizes whichever envelope comes back.
///
/// # Errors
///
/// Propagates transport failures and decode failures as [`FetchError`]. No
/// retry is attempted.
pub async fn fetch_page(
    transport: &dyn PhotoTransport,
    request: &FetchRequest,
) -> Result<ImagePage, FetchError> {
    let endpoint = Endpoint::for_request(request);
    let body = transport.get(&endpoint).await?;
    decode_page(&body, request.page, request.per_page)
}

/// Reports a fetch resolution exactly once.
struct ResolveGuard {
    request_id: RequestId,
    page_number: u32,
    responses: Option<UnboundedSender<WorkerResponse>>,
}

impl ResolveGuard {
    fn new(request_id: RequestId, page_number: u32, responses: UnboundedSender<WorkerResponse>) -> Self {
        Self {
            request_id,
            page_number,
            responses: Some(responses),
        }
    }

    fn resolve(mut self, result: Result<ImagePage, FetchError>) {
        let response = match result {
            Ok(page) => WorkerResponse::PageLoaded {
                request_id: self.request_id,
                page_number: self.page_number,
                page,
            },
            Err(error) => WorkerResponse::FetchFailed {
                request_id: self.request_id,
                page_number: self.page_number,
                error,
            },
        };
        self.send(response);
    }

    fn send(&mut self, response: WorkerResponse) {
        if let Some(responses) = self.responses.take() {
            if responses.send(response).is_err() {
                tracing::debug!(request_id = %self.request_id, "response receiver dropped");
            }
        }
    }
}

impl Drop for ResolveGuard {
    fn drop(&mut self) {
        if self.responses.is_some() {
            tracing::debug!(request_id = %self.request_id, "fetch ended without resolving, reporting cancellation");
            self.send(WorkerResponse::FetchFailed {
                request_id: self.request_id,
                page_number: self.page_number,
                error: FetchError::Cancelled,
            });
        }
    }
}

/// Runs fetches for the state machine.
///
/// Must be driven from within a tokio runtime: `handle_message` spawns tasks.
pub struct FetchWorker {
    transport: Arc<dyn PhotoTransport>,
    responses: UnboundedSender<WorkerResponse>,
    in_flight: HashMap<RequestId, AbortHandle>,
}

impl FetchWorker {
    /// Creates a worker and the receiver its responses arrive on.
    #[must_use]
    pub fn new(transport: Arc<dyn PhotoTransport>) -> (Self, UnboundedReceiver<WorkerResponse>) {
        let (responses, receiver) = mpsc::unbounded_channel();
        let worker = Self {
            transport,
            responses,
            in_flight: HashMap::new(),
        };
        (worker, receiver)
    }

    /// Number of fetches spawned and not yet acknowledged or cancelled.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// Processes one message from the state machine.
    pub fn handle_message(&mut self, message: WorkerMessage) {
        let _span = tracing::debug_span!("worker_handle_message", message_type = ?message).entered();

        match message {
            WorkerMessage::FetchPage { request_id, request } => self.spawn_fetch(request_id, request),
            WorkerMessage::CancelFetch { request_id } => self.cancel(request_id),
        }
    }

    /// Forgets the abort handle of a request whose response has been received.
    pub fn acknowledge(&mut self, request_id: RequestId) {
        self.in_flight.remove(&request_id);
    }

    fn spawn_fetch(&mut self, request_id: RequestId, request: FetchRequest) {
        self.in_flight.retain(|_, handle| !handle.is_finished());

        let transport = Arc::clone(&self.transport);
        let guard = ResolveGuard::new(request_id, request.page, self.responses.clone());
        let span = tracing::debug_span!(
            "fetch_page",
            request_id = %request_id,
            term = %request.term,
            page = request.page
        );

        let task = tokio::spawn(
            async move {
                let result = fetch_page(transport.as_ref(), &request).await;
                match &result {
                    Ok(page) => tracing::debug!(images = page.len(), has_more = page.has_more, "page fetched"),
                    Err(e) => tracing::debug!(error = %e, "page fetch failed"),
                }
                guard.resolve(result);
            }
            .instrument(span),
        );

        self.in_flight.insert(request_id, task.abort_handle());
    }

    fn cancel(&mut self, request_id: RequestId) {
        if let Some(handle) = self.in_flight.remove(&request_id) {
            tracing::debug!(request_id = %request_id, "aborting superseded fetch");
            handle.abort();
        } else {
            tracing::debug!(request_id = %request_id, "fetch already finished, nothing to cancel");
        }
    }
}

impl std::fmt::Debug for FetchWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchWorker")
            .field("in_flight", &self.in_flight.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
