use std::time::Duration;

use tokio_tungstenite::tungstenite;

/// Errors that can occur in transport session operations.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The endpoint description is unusable.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// The TLS connector could not be built.
    #[error("TLS setup failed: {0}")]
    Tls(#[from] native_tls::Error),

    /// The WebSocket handshake failed.
    #[error("connection to {url} failed: {source}")]
    Handshake {
        url: String,
        source: tungstenite::Error,
    },

    /// The handshake did not complete within the configured timeout.
    #[error("connection handshake timed out after {0:?}")]
    HandshakeTimeout(Duration),

    /// The connection failed mid-stream.
    #[error("transport failure: {0}")]
    WebSocket(tungstenite::Error),

    /// `run()` was called without a prior successful `connect()`.
    #[error("session is not connected")]
    NotConnected,
}

pub type Result<T> = std::result::Result<T, TransportError>;
