//! Client error definitions.

use thiserror::Error;

/// Errors raised by the chat client
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP request could not be sent or the body could not be decoded
    #[error("Failed to send request: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Server returned {status}: {message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },

    /// Terminal input could not be read
    #[error("Failed to read input: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    /// The blocking input task panicked or was cancelled
    #[error("Input task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
