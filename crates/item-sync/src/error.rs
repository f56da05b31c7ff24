//! Error types for the item synchronizer.

use thiserror::Error;

/// Result type for synchronizer operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Message shown for every rejected draft.
pub const VALIDATION_MESSAGE: &str = "Please provide a name and a valid price.";

/// The remote operation a request belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `GET /items`
    Load,
    /// `POST /items` or `PUT /items/{id}`
    Save,
    /// `DELETE /items/{id}`
    Delete,
}

impl Operation {
    /// Static user-facing message for a failed request.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::Load => "Failed to load items",
            Operation::Save => "Failed to save item",
            Operation::Delete => "Failed to delete item",
        }
    }
}

/// A draft that cannot be submitted.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Name is empty after trimming.
    #[error("Please provide a name and a valid price.")]
    MissingName,
    /// Price is not a finite number.
    #[error("Please provide a name and a valid price.")]
    InvalidPrice,
}

/// What the transport observed when a request failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Server answered with a non-2xx status.
    #[error("unexpected status {0}")]
    Status(u16),
    /// Request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// Response body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Errors surfaced by the synchronizer.
///
/// `Display` is the message meant for the user; transport detail is kept as
/// the error source.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyncError {
    /// Draft rejected before any request was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A request to the remote collection failed.
    #[error("{}", .op.failure_message())]
    Request {
        /// Operation that failed.
        op: Operation,
        /// Transport detail.
        #[source]
        source: ApiError,
    },
}

impl SyncError {
    pub fn request(op: Operation, source: ApiError) -> Self {
        Self::Request { op, source }
    }

    /// Returns true if no request was attempted.
    pub fn is_validation(&self) -> bool {
        matches!(self, SyncError::Validation(_))
    }
}

/// Invalid client configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("unsupported url scheme {0:?}, expected http or https")]
    UnsupportedScheme(String),

    #[error("collection path must not be empty")]
    EmptyCollection,
}
