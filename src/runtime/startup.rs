use crate::app::App;
use crate::audio::{AudioPlayer, DurationProbe};
use crate::config::Settings;
use crate::gallery::{self, Client, GalleryError};

/// Everything a running player session owns.
pub struct Session {
    pub app: App,
    pub audio: AudioPlayer,
    /// Pending duration lookup; dropped once the result is adopted.
    pub probe: Option<DurationProbe>,
}

/// Fetch the gallery, resolve the requested file and bring up playback.
pub fn start(settings: &Settings, base_url: &str, wanted: &str) -> Result<Session, GalleryError> {
    let client = Client::new(base_url)?;

    let files = client.list_files()?;
    let file = gallery::find_file(&files, wanted)
        .cloned()
        .ok_or_else(|| GalleryError::UnknownFile(wanted.to_string()))?;

    let app = App::new(
        file.clone(),
        files,
        client.base_url(),
        settings.playback.initial_volume,
    );

    let bytes = client.download(&file.hash)?;
    let audio = AudioPlayer::new(bytes, app.volume);

    // One probe per session, only while the duration is unknown. It runs
    // against its own download, independent of the playback instance.
    let probe = app
        .duration
        .is_none()
        .then(|| DurationProbe::spawn(client, file.hash.clone()));

    Ok(Session { app, audio, probe })
}
