//! Error types for the gallery client.
//!
//! This module defines the crate-wide error type [`GalleryError`], the fetch
//! taxonomy [`FetchError`], and a [`Result`] alias. All errors are implemented
//! using the `thiserror` crate.
//!
//! Fetch failures are modelled separately because they travel across the worker
//! boundary inside [`WorkerResponse`](crate::worker::WorkerResponse) values and
//! therefore need to be `Clone` and comparable, which `std::io::Error` is not.

use thiserror::Error;

/// The main error type for gallery operations.
///
/// Consolidates configuration, theme, worker and I/O failures. Fetch failures
/// never surface here; the state machine turns them into a store message.
///
/// # Examples
///
/// ```
/// use pixgrid::GalleryError;
///
/// fn validate_page_size(size: u32) -> Result<(), GalleryError> {
///     if size == 0 {
///         return Err(GalleryError::Config("page_size must be positive".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_page_size(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum GalleryError {
    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// The fetch worker could not accept or deliver a message.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or could not be read.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Failure of a single page fetch.
///
/// The variants keep the transport / upstream / decode distinction for logging,
/// but the state machine collapses all of them into one user-visible
/// "could not load images" state. None of them is retried automatically and
/// none is fatal: the user retries by repeating the triggering intent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// No access key was available when the request was about to be sent.
    ///
    /// The string names the environment variable that was consulted.
    #[error("no access key configured (set {0})")]
    MissingAccessKey(String),

    /// The request never produced a response (DNS, connect, timeout, reset).
    #[error("network error: {0}")]
    Transport(String),

    /// The API answered with a non-success status, including rate limiting.
    #[error("upstream returned status {status}: {message}")]
    Upstream {
        /// HTTP status code.
        status: u16,
        /// Response body excerpt or reason phrase.
        message: String,
    },

    /// The response body matched neither known envelope shape.
    #[error("unexpected response shape: {0}")]
    Decode(String),

    /// The fetch was aborted before it resolved.
    ///
    /// Reported by the worker's cleanup guard for superseded requests. Such
    /// resolutions are always stale by the time they arrive.
    #[error("request was cancelled")]
    Cancelled,
}

impl FetchError {
    /// Headline shown to the user for every fetch failure.
    pub const USER_HEADLINE: &'static str = "Could not load images";

    /// Returns the single user-facing message for this failure.
    ///
    /// ```
    /// use pixgrid::FetchError;
    ///
    /// let err = FetchError::Transport("connection refused".into());
    /// assert_eq!(err.user_message(), "Could not load images: network error: connection refused");
    /// ```
    #[must_use]
    pub fn user_message(&self) -> String {
        format!("{}: {self}", Self::USER_HEADLINE)
    }
}

/// A specialized `Result` type for gallery operations.
pub type Result<T> = std::result::Result<T, GalleryError>;
