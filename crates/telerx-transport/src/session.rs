use std::time::Duration;

use bytes::Bytes;
use futures_util::StreamExt;
use telerx_frame::{RawFrame, Reassembler};
use tokio_tungstenite::tungstenite::protocol::{Message, WebSocketConfig};
use tokio_tungstenite::{connect_async_tls_with_config, Connector};
use tokio_util::sync::CancellationToken;

use crate::endpoint::Endpoint;
use crate::error::{Result, TransportError};

/// Connection lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Disconnected,
    Connecting,
    Connected,
    Terminating,
}

/// Notifications delivered synchronously from the service loop, in
/// arrival order.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// The handshake completed.
    Connected,
    /// One complete logical message arrived.
    Message(Bytes),
    /// The connection ended (remote close, local error, or disconnect).
    Closed,
    /// A transport error occurred. Always precedes or accompanies a
    /// transition out of Connecting/Connected.
    Error(String),
}

/// Transport-layer tunables.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Bound on the TLS + WebSocket handshake.
    pub connect_timeout: Duration,
    /// Maximum assembled message size, enforced by the WebSocket layer.
    pub max_message_size: usize,
    /// Maximum single-frame size, enforced by the WebSocket layer.
    pub max_frame_size: usize,
    /// Use TLS (`wss://`). Disabled only for local test servers.
    pub use_tls: bool,
    /// Accept self-signed / expired / mismatched certificates. Local and
    /// dev endpoints only.
    pub danger_accept_invalid_certs: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            max_message_size: 16 * 1024 * 1024,
            max_frame_size: 4 * 1024 * 1024,
            use_tls: true,
            danger_accept_invalid_certs: true,
        }
    }
}

/// Cross-thread handle for requesting session teardown.
///
/// `disconnect` is idempotent, never blocks, and is safe to call from an
/// event handler or a signal task while `run` is in flight.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    token: CancellationToken,
}

impl SessionHandle {
    /// Request termination of the session.
    pub fn disconnect(&self) {
        self.token.cancel();
    }

    /// Whether termination has been requested.
    pub fn stop_requested(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// One WebSocket connection attempt and its resulting data stream.
pub struct WsSession {
    endpoint: Endpoint,
    config: SessionConfig,
    state: SessionState,
    token: CancellationToken,
    reassembler: Reassembler,
}

impl WsSession {
    /// Create a session for the given endpoint with default tunables.
    pub fn new(endpoint: Endpoint) -> Self {
        Self::with_config(endpoint, SessionConfig::default())
    }

    /// Create a session with explicit tunables.
    pub fn with_config(endpoint: Endpoint, config: SessionConfig) -> Self {
        Self {
            endpoint,
            config,
            state: SessionState::Disconnected,
            token: CancellationToken::new(),
            reassembler: Reassembler::new(),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the session is currently connected.
    pub fn is_connected(&self) -> bool {
        self.state == SessionState::Connected
    }

    /// The endpoint this session targets.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// A cloneable teardown handle.
    pub fn handle(&self) -> SessionHandle {
        SessionHandle {
            token: self.token.clone(),
        }
    }

    /// Request termination. Equivalent to `handle().disconnect()`.
    pub fn disconnect(&self) {
        self.token.cancel();
    }

    /// Initiate a connection. Validates the endpoint and transitions to
    /// Connecting; the handshake itself happens inside [`WsSession::run`]
    /// and its outcome is delivered as an event.
    pub fn connect(&mut self) -> Result<()> {
        self.endpoint.validate()?;
        self.state = SessionState::Connecting;
        tracing::debug!(endpoint = %self.endpoint, "connection requested");
        Ok(())
    }

    /// Drive the connection until close, error, or requested teardown.
    ///
    /// The sole suspending operation of the session. Every event handler
    /// runs to completion before the next poll; a blocking handler stalls
    /// the connection (intentional backpressure, there is no queue).
    pub async fn run(&mut self, mut on_event: impl FnMut(SessionEvent)) -> Result<()> {
        if self.state != SessionState::Connecting {
            return Err(TransportError::NotConnected);
        }

        let url = self.endpoint.url(self.config.use_tls);
        let connector = self.build_connector()?;
        let mut ws_config = WebSocketConfig::default();
        ws_config.max_message_size = Some(self.config.max_message_size);
        ws_config.max_frame_size = Some(self.config.max_frame_size);

        tracing::info!(url = %url, "connecting");

        let handshake =
            connect_async_tls_with_config(url.as_str(), Some(ws_config), false, connector);

        let mut stream = tokio::select! {
            biased;
            () = self.token.cancelled() => {
                self.state = SessionState::Disconnected;
                on_event(SessionEvent::Closed);
                return Ok(());
            }
            outcome = tokio::time::timeout(self.config.connect_timeout, handshake) => {
                match outcome {
                    Err(_) => {
                        let timeout = self.config.connect_timeout;
                        self.state = SessionState::Disconnected;
                        on_event(SessionEvent::Error(format!(
                            "connection handshake timed out after {timeout:?}"
                        )));
                        return Err(TransportError::HandshakeTimeout(timeout));
                    }
                    Ok(Err(err)) => {
                        self.state = SessionState::Disconnected;
                        on_event(SessionEvent::Error(format!("connection failed: {err}")));
                        return Err(TransportError::Handshake { url, source: err });
                    }
                    Ok(Ok((stream, _response))) => stream,
                }
            }
        };

        self.state = SessionState::Connected;
        tracing::info!("connected");
        on_event(SessionEvent::Connected);

        loop {
            // Biased: a pending teardown request always wins over further
            // input, so handlers see no messages after requesting stop.
            tokio::select! {
                biased;
                () = self.token.cancelled() => {
                    self.state = SessionState::Terminating;
                    tracing::debug!("teardown requested, closing");
                    let _ = stream.close(None).await;
                    self.state = SessionState::Disconnected;
                    on_event(SessionEvent::Closed);
                    return Ok(());
                }
                incoming = stream.next() => match incoming {
                    Some(Ok(Message::Binary(data))) => {
                        self.deliver(RawFrame::fin(data), &mut on_event);
                    }
                    Some(Ok(Message::Text(text))) => {
                        self.deliver(RawFrame::fin(text.into_bytes()), &mut on_event);
                    }
                    Some(Ok(Message::Frame(frame))) => {
                        let fin = frame.header().is_final;
                        self.deliver(RawFrame::new(frame.into_data(), fin), &mut on_event);
                    }
                    Some(Ok(Message::Ping(_) | Message::Pong(_))) => {}
                    Some(Ok(Message::Close(_))) | None => {
                        self.state = SessionState::Disconnected;
                        tracing::info!("connection closed by remote");
                        on_event(SessionEvent::Closed);
                        return Ok(());
                    }
                    Some(Err(err)) => {
                        self.state = SessionState::Disconnected;
                        tracing::warn!(error = %err, "transport failure");
                        on_event(SessionEvent::Error(format!("transport failure: {err}")));
                        on_event(SessionEvent::Closed);
                        return Err(TransportError::WebSocket(err));
                    }
                },
            }
        }
    }

    fn deliver(&mut self, frame: RawFrame, on_event: &mut impl FnMut(SessionEvent)) {
        if let Some(message) = self.reassembler.accept(frame) {
            tracing::trace!(bytes = message.len(), "message complete");
            on_event(SessionEvent::Message(message));
        }
    }

    fn build_connector(&self) -> Result<Option<Connector>> {
        if !self.config.use_tls {
            return Ok(Some(Connector::Plain));
        }

        let mut builder = native_tls::TlsConnector::builder();
        if self.config.danger_accept_invalid_certs {
            // Local/dev trust exception; see crate docs.
            builder
                .danger_accept_invalid_certs(true)
                .danger_accept_invalid_hostnames(true);
        }
        Ok(Some(Connector::NativeTls(builder.build()?)))
    }
}
