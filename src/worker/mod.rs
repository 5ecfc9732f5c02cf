//! Background fetch worker.
//!
//! Page fetches run on tokio tasks so the state machine never blocks on the
//! network. The state machine talks to the worker only through messages.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types and request ids
//! - `handler`: Fetch orchestration, task spawning and cancellation

pub mod handler;
pub mod messages;

pub use handler::{fetch_page, FetchWorker};
pub use messages::{RequestId, WorkerMessage, WorkerResponse};
