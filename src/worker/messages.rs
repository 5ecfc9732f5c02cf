//! Message types exchanged between the state machine and the fetch worker.
//!
//! Requests go out as [`WorkerMessage`]s inside
//! [`Action::PostToWorker`](crate::app::Action::PostToWorker); every spawned
//! fetch comes back as exactly one [`WorkerResponse`], tagged with the
//! [`RequestId`] it was issued under so stale resolutions can be recognised.

use crate::api::FetchRequest;
use crate::domain::{FetchError, ImagePage};
use std::fmt;

/// Monotonically increasing identity of an issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

impl RequestId {
    /// The id issued after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Messages sent from the state machine to the fetch worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerMessage {
    /// Fetch one page and report back under `request_id`.
    FetchPage {
        request_id: RequestId,
        request: FetchRequest,
    },

    /// Abort a superseded fetch if it is still running.
    CancelFetch { request_id: RequestId },
}

impl WorkerMessage {
    /// Creates a `FetchPage` message.
    ///
    /// ```
    /// use pixgrid::worker::{RequestId, WorkerMessage};
    ///
    /// let message = WorkerMessage::fetch_page(RequestId(1), "mountains", 2, 12);
    /// assert!(matches!(message, WorkerMessage::FetchPage { request_id: RequestId(1), .. }));
    /// ```
    #[must_use]
    pub fn fetch_page(request_id: RequestId, term: impl Into<String>, page: u32, per_page: u32) -> Self {
        Self::FetchPage {
            request_id,
            request: FetchRequest {
                term: term.into(),
                page,
                per_page,
            },
        }
    }

    #[must_use]
    pub const fn cancel_fetch(request_id: RequestId) -> Self {
        Self::CancelFetch { request_id }
    }
}

/// Responses sent from the fetch worker back to the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerResponse {
    /// A page was fetched and decoded.
    PageLoaded {
        request_id: RequestId,
        page_number: u32,
        page: ImagePage,
    },

    /// The fetch failed or was aborted.
    FetchFailed {
        request_id: RequestId,
        page_number: u32,
        error: FetchError,
    },
}

impl WorkerResponse {
    #[must_use]
    pub const fn request_id(&self) -> RequestId {
        match self {
            Self::PageLoaded { request_id, .. } | Self::FetchFailed { request_id, .. } => *request_id,
        }
    }
}
