//! Application layer: the gallery state machine.
//!
//! Sits between the interactive session (session.rs / main.rs) and the
//! worker, api and ui layers. Nothing in here performs I/O.
//!
//! # Architecture
//!
//! ```text
//! User Intent → Event → handle_event → QueryState change → sync_query → Actions
//!                            ↑                                             ↓
//!                            └────────────── WorkerResponse ◀── FetchWorker
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects emitted by the event handler
//! - [`handler`]: Event processing and response reconciliation
//! - [`history`]: Bounded recent-search list
//! - [`modes`]: Fetch lifecycle (idle / fetching a given request)
//! - [`query`]: Draft, search term, filter and page cursor
//! - [`state`]: State container, reactive trigger, view model computation
//! - [`store`]: Accumulated images plus loading and error flags

pub mod actions;
pub mod handler;
pub mod history;
pub mod modes;
pub mod query;
pub mod state;
pub mod store;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use history::{SearchHistory, DEFAULT_HISTORY_CAPACITY};
pub use modes::FetchState;
pub use query::{QueryKey, QueryState};
pub use state::AppState;
pub use store::ResultStore;
