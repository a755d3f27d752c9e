//! Fragment reassembly for telemetry message streams.
//!
//! A WebSocket message may arrive split across several wire fragments.
//! This crate turns the fragment sequence back into complete logical
//! messages. One message is in flight at a time per connection — a new
//! fragment always belongs to the message currently accumulating.
//!
//! Reassembly cannot fail on its own; malformed content surfaces later in
//! the validation engine. Size limits are enforced by the transport layer
//! (WebSocket frame/message caps), not here.

pub mod reassembly;

pub use reassembly::{RawFrame, Reassembler};
