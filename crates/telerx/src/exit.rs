use std::fmt;
use std::io;

use telerx_capture::CaptureError;
use telerx_transport::TransportError;

// Exit code table shared across subcommands.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const TRANSPORT_ERROR: i32 = 3;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const TIMEOUT: i32 = 124;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn transport_error(context: &str, err: TransportError) -> CliError {
    let code = match &err {
        TransportError::InvalidEndpoint(_) => USAGE,
        TransportError::HandshakeTimeout(_) => TIMEOUT,
        TransportError::Handshake { .. } | TransportError::WebSocket(_) => TRANSPORT_ERROR,
        TransportError::Tls(_) => TRANSPORT_ERROR,
        TransportError::NotConnected => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn capture_error(context: &str, err: CaptureError) -> CliError {
    let code = match &err {
        CaptureError::CreateDir { source, .. }
        | CaptureError::Write { source, .. }
        | CaptureError::Read { source, .. } => match source.kind() {
            io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
            io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => TIMEOUT,
            io::ErrorKind::NotFound | io::ErrorKind::ConnectionRefused => FAILURE,
            _ => INTERNAL,
        },
        CaptureError::Empty { .. } => DATA_INVALID,
    };
    CliError::new(code, format!("{context}: {err}"))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn handshake_timeout_maps_to_timeout_code() {
        let err = transport_error(
            "stream failed",
            TransportError::HandshakeTimeout(Duration::from_secs(10)),
        );
        assert_eq!(err.code, TIMEOUT);
    }

    #[test]
    fn bad_endpoint_is_a_usage_error() {
        let err = transport_error(
            "connect failed",
            TransportError::InvalidEndpoint("host must not be empty".into()),
        );
        assert_eq!(err.code, USAGE);
    }

    #[test]
    fn empty_capture_is_invalid_data() {
        let err = capture_error(
            "replay failed",
            CaptureError::Empty {
                path: "dumps/state_0001.bin".into(),
            },
        );
        assert_eq!(err.code, DATA_INVALID);
        assert!(err.message.contains("state_0001.bin"));
    }

    #[test]
    fn missing_capture_file_is_a_plain_failure() {
        let err = capture_error(
            "replay failed",
            CaptureError::Read {
                path: "gone.bin".into(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
            },
        );
        assert_eq!(err.code, FAILURE);
    }
}
