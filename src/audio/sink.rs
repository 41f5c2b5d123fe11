//! Utilities for creating `rodio` sinks from in-memory audio bytes.
//!
//! The helper here encapsulates decoding the downloaded resource and
//! preparing a paused `Sink` at the requested start position.

use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

use rodio::{Decoder, OutputStream, Sink, Source};

/// Downloaded audio bytes, cheaply cloneable so every rebuilt sink can read
/// the same buffer.
#[derive(Clone)]
pub(super) struct SharedBytes(pub(super) Arc<Vec<u8>>);

impl AsRef<[u8]> for SharedBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Create a paused `Sink` over `bytes` that starts playback at `start_at`.
/// Returns `None` when the bytes do not decode; playback then stays inert.
pub(super) fn create_sink_at(
    handle: &OutputStream,
    bytes: &SharedBytes,
    start_at: Duration,
) -> Option<Sink> {
    let source = Decoder::new(Cursor::new(bytes.clone()))
        .ok()?
        // `skip_duration` is our seeking primitive; even Duration::ZERO is fine.
        .skip_duration(start_at);

    let sink = Sink::connect_new(handle.mixer());
    sink.append(source);
    sink.pause();
    Some(sink)
}
