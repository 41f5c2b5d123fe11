//! Audio-related small types.

/// Commands accepted by the playback worker.
#[derive(Debug)]
pub enum AudioCmd {
    /// Mirror the widget's playing flag (play on true, pause on false).
    SetPlaying(bool),
    /// Set the sink volume, `[0, 1]`, untransformed.
    SetVolume(f32),
    /// Seek to an absolute position in seconds.
    SeekTo(f32),
    /// Stop playback and end the worker thread.
    Quit,
}

/// One progress report from the playback worker.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProgressEvent {
    /// Elapsed playback time in seconds.
    pub played_seconds: f32,
}
