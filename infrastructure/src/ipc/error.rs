//! Error types for the IPC client

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for IPC operations
pub type Result<T> = std::result::Result<T, IpcError>;

/// Errors that can occur when talking to a daemon socket
#[derive(Error, Debug)]
pub enum IpcError {
    #[error("Failed to connect to {}: {source}", path.display())]
    Connect {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    Parse { error: String, raw: String },

    #[error("Frame of {length} bytes exceeds the {limit} byte limit")]
    FrameTooLarge { length: usize, limit: usize },

    #[error("Daemon error (code {code}): {message}")]
    Rpc { code: i64, message: String },

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("Connection closed by daemon")]
    TransportClosed,

    #[error("Session already closed")]
    SessionClosed,

    #[error("Request timeout")]
    Timeout,
}

impl IpcError {
    /// Daemon status code carried by an error response
    pub fn status_code(&self) -> Option<i64> {
        match self {
            IpcError::Rpc { code, .. } => Some(*code),
            _ => None,
        }
    }
}
