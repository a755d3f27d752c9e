//! WebSocket transport session for telemetry streams.
//!
//! [`WsSession`] owns exactly one connection attempt: connect, service
//! loop, disconnect. Connection state changes, complete messages and
//! transport errors surface as [`SessionEvent`]s, delivered synchronously
//! on the thread driving [`WsSession::run`] in arrival order.
//!
//! The certificate policy deliberately accepts self-signed, expired and
//! hostname-mismatched certificates. Telemetry endpoints on local devices
//! rarely carry real certificates; never point this at a production trust
//! boundary.

pub mod endpoint;
pub mod error;
pub mod session;

pub use endpoint::Endpoint;
pub use error::{Result, TransportError};
pub use session::{SessionConfig, SessionEvent, SessionHandle, SessionState, WsSession};
