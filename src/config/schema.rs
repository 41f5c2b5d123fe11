use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/platter/config.toml` or `~/.config/platter/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `PLATTER__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub playback: PlaybackSettings,
    pub controls: ControlsSettings,
    pub ui: UiSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Base URL of the file registry. Can also be given as the first
    /// command-line argument, which wins over this value.
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Volume the player starts with, `[0, 1]`.
    pub initial_volume: f32,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            initial_volume: 0.5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Number of seconds the seek control moves per scrub keypress.
    pub seek_seconds: u64,
    /// Volume change per volume keypress, `(0, 1]`.
    pub volume_step: f32,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            seek_seconds: 5,
            volume_step: 0.05,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// The record-label line printed on the spinning plate.
    pub label_text: String,
    /// Event-loop tick in milliseconds; also paces the record rotation.
    pub tick_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ platter ~ spinning records from the gallery ~ ".to_string(),
            label_text: "platter records".to_string(),
            tick_ms: 50,
        }
    }
}
