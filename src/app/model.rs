//! The player widget model.
//!
//! `App` holds the component-local state of the audio-player view: playing
//! flag, volume, scrub position, discovered duration and the decorative
//! backdrop chosen from the gallery. It is pure state; the runtime feeds it
//! events and mirrors its flags into the audio worker.

use crate::gallery::{self, FileDescriptor, FileKind};

/// The main widget model.
pub struct App {
    /// The file this player was opened for.
    pub file: FileDescriptor,
    /// Snapshot of the gallery's file list, injected by the runtime.
    pub files: Vec<FileDescriptor>,

    pub playing: bool,
    /// Playback volume in `[0, 1]`, passed through untransformed.
    pub volume: f32,
    /// Current position in seconds: overwritten by progress events while
    /// playing, moved directly while scrubbing.
    pub played_time: f32,
    /// Playable length in seconds, once the duration probe has resolved it.
    pub duration: Option<f32>,
    /// Retrieval URL of the decorative backdrop image, once one is chosen.
    pub backdrop_url: Option<String>,
    /// Write-only scrub flag carried over from the source component; both
    /// seek handlers clear it and nothing reads it.
    pub seeking: bool,

    spin_steps: u64,
    base_url: String,
}

impl App {
    /// Create the widget for `file`, immediately sampling a backdrop from
    /// the supplied gallery list.
    pub fn new(
        file: FileDescriptor,
        files: Vec<FileDescriptor>,
        base_url: &str,
        initial_volume: f32,
    ) -> Self {
        let mut app = Self {
            file,
            files: Vec::new(),
            playing: false,
            volume: initial_volume.clamp(0.0, 1.0),
            played_time: 0.0,
            duration: None,
            backdrop_url: None,
            seeking: false,
            spin_steps: 0,
            base_url: base_url.trim_end_matches('/').to_string(),
        };
        app.set_files(files);
        app
    }

    /// Replace the gallery snapshot and re-sample the backdrop. When the
    /// new list has no image entries, no selection occurs and any previous
    /// backdrop is kept.
    pub fn set_files(&mut self, files: Vec<FileDescriptor>) {
        self.files = files;
        if let Some(url) = gallery::pick_backdrop(&self.files, &self.base_url) {
            self.backdrop_url = Some(url);
        }
    }

    /// Whether the viewed file classifies as audio.
    pub fn is_audio(&self) -> bool {
        self.file.kind() == FileKind::Audio
    }

    /// The widget renders nothing unless the file is audio and a backdrop
    /// has been resolved.
    pub fn should_render(&self) -> bool {
        self.is_audio() && self.backdrop_url.is_some()
    }

    /// Invert the playing flag.
    pub fn toggle_playing(&mut self) {
        self.playing = !self.playing;
    }

    /// Set the volume, clamped to `[0, 1]`.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    /// Record the duration discovered by the probe. Later reports are
    /// ignored; the first one wins.
    pub fn set_duration(&mut self, seconds: f32) {
        if self.duration.is_none() && seconds.is_finite() && seconds > 0.0 {
            self.duration = Some(seconds);
        }
    }

    /// A progress event from the playback capability overwrites the
    /// displayed position.
    pub fn apply_progress(&mut self, played_seconds: f32) {
        self.played_time = played_seconds;
    }

    /// Grabbing the seek control. Mirrors the source component's
    /// mouse-down handler, which clears the scrub flag.
    pub fn grab_seek(&mut self) {
        self.seeking = false;
    }

    /// Move the scrub position to `seconds`, clamped to `[0, duration]`.
    /// Does not issue a seek; that happens on [`App::commit_seek`].
    /// No-op until the duration is known (the seek bar does not exist yet).
    pub fn scrub_to(&mut self, seconds: f32) {
        if let Some(duration) = self.duration {
            self.played_time = seconds.clamp(0.0, duration);
        }
    }

    /// Move the scrub position relative to the current one.
    pub fn scrub_by(&mut self, delta_seconds: f32) {
        self.scrub_to(self.played_time + delta_seconds);
    }

    /// Release the seek control: clears the scrub flag and yields the
    /// position for exactly one seek command, or `None` while the seek bar
    /// does not exist.
    pub fn commit_seek(&mut self) -> Option<f32> {
        self.seeking = false;
        self.duration.map(|_| self.played_time)
    }

    /// Advance the record rotation by one frame tick. Only moves while
    /// playing; the paused record stands still.
    pub fn advance_spin(&mut self) {
        if self.playing {
            self.spin_steps += 1;
        }
    }

    /// Whether the rotation visual is active. Matches `playing` exactly.
    pub fn is_spinning(&self) -> bool {
        self.playing
    }

    /// Current rotation frame index in `0..4`. Several ticks per frame keep
    /// the rotation slow at the runtime's draw rate.
    pub fn spin_frame(&self) -> usize {
        ((self.spin_steps / 3) % 4) as usize
    }
}
