//! Error types for the Lectern library.
//!
//! All fallible operations return [`Result`], an alias over [`LecternError`].
//! The taxonomy separates caller mistakes (rejected before any external call
//! is made) from dependency failures, so a host transport can map errors to
//! the right status class.
//!
//! # Examples
//!
//! ```
//! use lectern::error::{LecternError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LecternError::invalid_request("query must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => assert!(e.is_client_error()),
//! }
//! ```

use thiserror::Error;

/// The main error type for Lectern operations.
#[derive(Error, Debug)]
pub enum LecternError {
    /// The request failed validation. No external call was made.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Two embeddings of different dimensionality were compared.
    ///
    /// Mismatched vectors carry no comparable signal, so this is a
    /// precondition violation rather than a scoring outcome.
    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Dimensionality of the query embedding.
        expected: usize,
        /// Dimensionality of the offending chunk embedding.
        actual: usize,
    },

    /// The embedding provider call failed or timed out. Aborts the request.
    #[error("embedding provider failure: {0}")]
    EmbeddingFailure(#[source] anyhow::Error),

    /// The chunk store call failed or timed out. Aborts the request.
    #[error("chunk store failure: {0}")]
    RetrievalFailure(#[source] anyhow::Error),
}

/// Result type alias for operations that may fail with [`LecternError`].
pub type Result<T> = std::result::Result<T, LecternError>;

impl LecternError {
    /// Create a new invalid request error.
    pub fn invalid_request<S: Into<String>>(msg: S) -> Self {
        LecternError::InvalidRequest(msg.into())
    }

    /// Create a new embedding failure carrying the underlying cause.
    pub fn embedding<E: Into<anyhow::Error>>(err: E) -> Self {
        LecternError::EmbeddingFailure(err.into())
    }

    /// Create a new retrieval failure carrying the underlying cause.
    pub fn retrieval<E: Into<anyhow::Error>>(err: E) -> Self {
        LecternError::RetrievalFailure(err.into())
    }

    /// Whether this error was caused by the caller's input.
    ///
    /// Client errors map to a 4xx-equivalent status at the transport
    /// boundary; everything else is a dependency failure (5xx-equivalent).
    pub fn is_client_error(&self) -> bool {
        matches!(self, LecternError::InvalidRequest(_))
    }
}
