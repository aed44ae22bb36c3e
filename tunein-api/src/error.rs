//! Error types for the TuneIn directory client.

use thiserror::Error;

/// Errors that can occur when talking to the TuneIn directory.
#[derive(Debug, Error)]
pub enum TuneinError {
    /// HTTP transport error or non-2xx status (connection refused, timeout,
    /// 401 on an expired token, etc.).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// `Tune.ashx` answered with a `head.status` other than `"200"`.
    ///
    /// The OPML endpoint always replies with HTTP 200 and reports failures
    /// inside the envelope, e.g. `{"head": {"status": "400", "fault": "Invalid root"}}`.
    #[error("API error (status {status}): {fault}")]
    Api {
        /// Envelope status string.
        status: String,
        /// Human-readable fault message from the envelope.
        fault: String,
    },

    /// No bearer token is configured. Call `login` first.
    #[error("not logged in")]
    NotLoggedIn,

    /// A response parsed as JSON but lacks a field the client depends on.
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),

    /// File I/O error (session read/write).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse or serialize JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catch-all for other errors (e.g. missing config directory).
    #[error("{0}")]
    Other(String),
}

/// Convenience alias for `Result<T, TuneinError>`.
pub type Result<T> = std::result::Result<T, TuneinError>;
