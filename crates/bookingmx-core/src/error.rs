//! Error types for bookingmx-core.
//!
//! These are contract errors: they signal misuse of the graph API (bad city
//! names, references to cities that were never added, invalid distances)
//! and are always returned as `Err`. Data-level validation of a whole
//! dataset is reported through [`crate::graph::GraphValidation`] instead.

use thiserror::Error;

/// Graph error types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// City name is empty or whitespace-only.
    #[error("Invalid city name: {0:?}")]
    InvalidCity(String),

    /// City has not been added to the graph.
    #[error("Unknown city: {0}")]
    UnknownCity(String),

    /// Distance is negative, NaN or infinite.
    #[error("Invalid distance: {0}")]
    InvalidDistance(f64),

    /// The graph argument of a nearby-city query is not a [`crate::graph::Graph`].
    #[error("graph must be Graph")]
    InvalidGraphArgument,

    /// Dataset could not be decoded from JSON.
    #[error("Invalid dataset JSON: {0}")]
    Dataset(String),
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;
