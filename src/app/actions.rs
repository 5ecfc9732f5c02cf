//! Side effects requested by the event handler.
//!
//! [`handle_event`](super::handle_event) never performs I/O itself. It mutates
//! [`AppState`](super::AppState) and returns a list of [`Action`]s which the
//! session executes in order: fetch requests and cancellations go to the
//! worker, and `Quit` ends the interactive loop.
//!
//! # Example
//!
//! ```rust
//! use pixgrid::app::Action;
//! use pixgrid::worker::{RequestId, WorkerMessage};
//!
//! let actions = vec![
//!     Action::PostToWorker(WorkerMessage::cancel_fetch(RequestId(1))),
//!     Action::PostToWorker(WorkerMessage::fetch_page(RequestId(2), "mountains", 1, 12)),
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::worker::WorkerMessage;

/// Commands produced by the event handler and executed by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hands a message to the fetch worker.
    ///
    /// Cancellations for superseded requests are always emitted before the
    /// fetch that replaces them.
    PostToWorker(WorkerMessage),

    /// Stops the interactive loop.
    Quit,
}
