use std::fmt;

use crate::error::{Result, TransportError};

/// Default telemetry port.
pub const DEFAULT_PORT: u16 = 443;

/// Fixed state-stream path on the remote endpoint.
pub const DEFAULT_PATH: &str = "/ws/ws_state";

/// Identifies the remote telemetry source. Immutable for the lifetime of
/// a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
    pub path: String,
}

impl Endpoint {
    /// An endpoint with the default port and state-stream path.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
            path: DEFAULT_PATH.to_string(),
        }
    }

    /// Override the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Override the path.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Check the endpoint is well-formed.
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(TransportError::InvalidEndpoint(
                "host must not be empty".to_string(),
            ));
        }
        if !self.path.starts_with('/') {
            return Err(TransportError::InvalidEndpoint(format!(
                "path must start with '/': {}",
                self.path
            )));
        }
        Ok(())
    }

    /// Render the WebSocket URL for this endpoint.
    pub fn url(&self, secure: bool) -> String {
        let scheme = if secure { "wss" } else { "ws" };
        format!("{scheme}://{}:{}{}", self.host, self.port, self.path)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}{}", self.host, self.port, self.path)
    }
}
