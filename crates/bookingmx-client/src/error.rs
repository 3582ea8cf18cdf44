//! Error types for bookingmx-client.

use thiserror::Error;

/// Reservation client error types.
#[derive(Error, Debug)]
pub enum Error {
    /// The server answered with a non-success status.
    ///
    /// `message` is the server-provided `message` field when present,
    /// otherwise the operation's default message.
    #[error("{message}")]
    Fetch {
        /// HTTP status code returned by the server.
        status: u16,
        /// Error message.
        message: String,
    },

    /// Reservation request rejected before it was sent.
    #[error("Invalid reservation: {0}")]
    InvalidReservation(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for reservation client operations.
pub type Result<T> = std::result::Result<T, Error>;
