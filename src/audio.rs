//! Audio module: the playback capability and the duration probe.
//!
//! `AudioPlayer` owns a worker thread that decodes the downloaded bytes
//! into a rodio sink and reacts to commands; while audible it emits
//! progress events on a channel. `DurationProbe` is the transient,
//! cancellable lookup that resolves a resource's playable length
//! independently of playback.

mod player;
mod probe;
mod sink;
mod thread;
mod types;

pub use player::*;
pub use probe::*;
pub use types::*;

#[cfg(test)]
mod tests;
