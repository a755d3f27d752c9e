use bytes::{Bytes, BytesMut};

const INITIAL_BUFFER_CAPACITY: usize = 8 * 1024;

/// One wire fragment: payload bytes plus the final-fragment flag.
#[derive(Debug, Clone)]
pub struct RawFrame {
    /// Fragment payload.
    pub payload: Bytes,
    /// True when this fragment completes the current message.
    pub fin: bool,
}

impl RawFrame {
    /// Create a fragment.
    pub fn new(payload: impl Into<Bytes>, fin: bool) -> Self {
        Self {
            payload: payload.into(),
            fin,
        }
    }

    /// Create a final (message-completing) fragment.
    pub fn fin(payload: impl Into<Bytes>) -> Self {
        Self::new(payload, true)
    }
}

/// Accumulates wire fragments into complete logical messages.
///
/// Callers feed every received fragment through [`Reassembler::accept`];
/// a complete message comes back exactly when the final fragment arrives.
#[derive(Debug, Default)]
pub struct Reassembler {
    buf: BytesMut,
}

impl Reassembler {
    /// Create a reassembler with no message in flight.
    pub fn new() -> Self {
        Self {
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
        }
    }

    /// Feed one fragment. Returns the complete message when `frame` is
    /// final, `None` while the message is still accumulating.
    ///
    /// The single-fragment case hands the payload through without copying.
    pub fn accept(&mut self, frame: RawFrame) -> Option<Bytes> {
        if frame.fin && self.buf.is_empty() {
            return Some(frame.payload);
        }

        self.buf.extend_from_slice(&frame.payload);

        if frame.fin {
            let assembled = self.buf.split().freeze();
            return Some(assembled);
        }

        None
    }

    /// Bytes currently buffered for the in-flight message.
    pub fn pending(&self) -> usize {
        self.buf.len()
    }
}
