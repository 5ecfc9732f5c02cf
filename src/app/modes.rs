//! Fetch lifecycle state machine.
//!
//! The gallery is either idle or waiting on exactly one *current* request.
//! Older requests may still be in flight after being superseded, but only the
//! request named here is allowed to change the result store.
//!
//! ```text
//!            query key changes            current request resolves
//!   Idle ─────────────────────────▶ Fetching ─────────────────────────▶ Idle
//!                                    │   ▲
//!                                    └───┘ query key changes again
//!                               (old request cancelled, new id issued)
//! ```
//!
//! # Example
//!
//! ```rust
//! use pixgrid::app::FetchState;
//! use pixgrid::worker::RequestId;
//!
//! let state = FetchState::Fetching { request_id: RequestId(7), page: 1 };
//! assert!(state.is_current(RequestId(7)));
//! assert!(!state.is_current(RequestId(6)));
//! ```

use crate::worker::RequestId;

/// Whether a fetch is outstanding, and which one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchState {
    /// No fetch is outstanding.
    #[default]
    Idle,

    /// A fetch is outstanding.
    ///
    /// Resolutions carrying any other request id are stale and discarded.
    Fetching {
        /// Id of the current request.
        request_id: RequestId,
        /// Page the current request asked for.
        page: u32,
    },
}

impl FetchState {
    #[must_use]
    pub const fn is_fetching(&self) -> bool {
        matches!(self, Self::Fetching { .. })
    }

    /// Whether a resolution for `request_id` may be applied.
    #[must_use]
    pub fn is_current(&self, request_id: RequestId) -> bool {
        matches!(self, Self::Fetching { request_id: current, .. } if *current == request_id)
    }

    /// The current request id, if fetching.
    #[must_use]
    pub const fn request_id(&self) -> Option<RequestId> {
        match self {
            Self::Idle => None,
            Self::Fetching { request_id, .. } => Some(*request_id),
        }
    }
}
