use std::path::PathBuf;

/// Errors that can occur while capturing or reading payloads.
///
/// Capture failures are surfaced distinctly from validation errors at the
/// operator boundary.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    /// The capture directory could not be created.
    #[error("failed to create capture directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A payload file could not be written.
    #[error("failed to write capture {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A payload file could not be read.
    #[error("failed to read capture {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The payload file exists but holds no bytes.
    #[error("capture file is empty: {path}")]
    Empty { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, CaptureError>;
