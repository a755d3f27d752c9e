//! Capture storage for raw telemetry payloads.
//!
//! Each captured message lands in its own sequence-numbered file
//! (`state_0001.bin`, `state_0002.bin`, …) inside a directory created on
//! demand. Files hold exactly the raw payload bytes, so a replay run sees
//! what the wire delivered.
//!
//! Captured payloads may contain sensitive device state — handle the
//! directory accordingly.

pub mod error;
pub mod store;

pub use error::{CaptureError, Result};
pub use store::CaptureStore;
