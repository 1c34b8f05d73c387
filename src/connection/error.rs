//! Error types for connection collaborators.

use thiserror::Error;

/// Errors raised by [`ServerConnection`](super::ServerConnection) operations.
///
/// Every operation on the capability trait may fail with one of these. The
/// retrieval client catches them at its boundary and converts them into an
/// absent result; they never reach the client's caller.
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// Transport-level I/O failure (reset, refused, broken pipe, etc.)
    #[error("I/O failure during {operation}: {source}")]
    Io {
        /// The connection operation that was in flight.
        operation: &'static str,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The collaborator was driven outside its protocol (e.g. a read before
    /// a successful content request).
    #[error("protocol violation: {message}")]
    Protocol {
        /// What the collaborator observed.
        message: String,
    },
}

impl ConnectionError {
    /// Wraps an I/O error with the operation it interrupted.
    #[must_use]
    pub fn io(operation: &'static str, source: std::io::Error) -> Self {
        Self::Io { operation, source }
    }

    /// Creates a protocol-violation error.
    #[must_use]
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }
}
