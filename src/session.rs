//! Interactive session: the state machine wired to a running fetch worker.
//!
//! [`GallerySession`] owns the [`AppState`], executes the [`Action`]s the
//! handler returns, and feeds worker responses back in as events. It is the
//! runtime counterpart of the pure `handle_event` function and the piece the
//! binary's input loop drives.
//!
//! Must be used from within a tokio runtime.

use crate::api::PhotoTransport;
use crate::app::{handle_event, Action, AppState, Event};
use crate::domain::{GalleryError, Result};
use crate::worker::{FetchWorker, WorkerResponse};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;

/// What the caller should do after an event was processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dispatch {
    pub render: bool,
    pub quit: bool,
}

#[derive(Debug)]
pub struct GallerySession {
    state: AppState,
    worker: FetchWorker,
    responses: UnboundedReceiver<WorkerResponse>,
}

impl GallerySession {
    #[must_use]
    pub fn new(state: AppState, transport: Arc<dyn PhotoTransport>) -> Self {
        let (worker, responses) = FetchWorker::new(transport);
        Self {
            state,
            worker,
            responses,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Handles one event and executes the resulting actions.
    ///
    /// # Errors
    ///
    /// Propagates handler errors.
    pub fn dispatch(&mut self, event: &Event) -> Result<Dispatch> {
        let (render, actions) = handle_event(&mut self.state, event)?;
        let quit = self.execute(actions);
        Ok(Dispatch { render, quit })
    }

    /// Applies a worker response and releases its bookkeeping.
    ///
    /// # Errors
    ///
    /// Propagates handler errors.
    pub fn deliver(&mut self, response: WorkerResponse) -> Result<Dispatch> {
        self.worker.acknowledge(response.request_id());
        self.dispatch(&Event::WorkerResponse(response))
    }

    /// Waits for the next worker response.
    ///
    /// Returns `None` only if the worker side of the channel is gone, which
    /// cannot happen while the session is alive.
    pub async fn next_response(&mut self) -> Option<WorkerResponse> {
        self.responses.recv().await
    }

    /// Delivers every response that is already queued.
    ///
    /// Returns whether any of them needs a render.
    ///
    /// # Errors
    ///
    /// Propagates handler errors.
    pub fn pump(&mut self) -> Result<bool> {
        let mut render = false;
        while let Ok(response) = self.responses.try_recv() {
            render |= self.deliver(response)?.render;
        }
        Ok(render)
    }

    /// Runs until no fetch is outstanding and every spawned fetch reported back.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Worker`] if the response channel closes early.
    pub async fn settle(&mut self) -> Result<()> {
        while self.state.fetch.is_fetching() || self.worker.in_flight() > 0 {
            let response = self
                .next_response()
                .await
                .ok_or_else(|| GalleryError::Worker("response channel closed".to_string()))?;
            self.deliver(response)?;
        }
        Ok(())
    }

    fn execute(&mut self, actions: Vec<Action>) -> bool {
        let mut quit = false;
        for action in actions {
            match action {
                Action::PostToWorker(message) => self.worker.handle_message(message),
                Action::Quit => quit = true,
            }
        }
        quit
    }
}
