//! Error types for the simulation API client.
//!
//! Every failure mode collapses to a [`ClientError`] variant carrying a
//! formatted description. The controller treats them all uniformly as
//! transport failures; the variants exist so logs and tests can tell a
//! refused connection from a bad status from a malformed body.

/// Errors that can occur when talking to the simulation backend.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request could not be sent or the connection dropped mid-flight.
    #[error("request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success HTTP status.
    #[error("backend returned {0}")]
    Status(String),

    /// The response body could not be decoded into the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),
}
