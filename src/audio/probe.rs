use std::io::Cursor;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use lofty::file::AudioFile;
use lofty::probe::Probe;
use thiserror::Error;

use crate::gallery::Client;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to read the resource: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to read audio properties: {0}")]
    Metadata(#[from] lofty::error::LoftyError),
}

/// One-shot duration lookup running on its own thread.
///
/// The worker downloads the resource and reads its playable length from the
/// stream metadata, reporting over a channel. Dropping the probe cancels
/// delivery: the worker's send against the disconnected channel is a no-op,
/// so a finished lookup can never touch a discarded widget.
pub struct DurationProbe {
    rx: Receiver<Duration>,
}

impl DurationProbe {
    /// Start resolving the duration of the resource stored under `hash`.
    /// Failures are silent; the probe then simply never reports.
    pub fn spawn(client: Client, hash: String) -> Self {
        let (tx, rx) = mpsc::channel::<Duration>();

        thread::spawn(move || {
            let Ok(bytes) = client.download(&hash) else {
                return;
            };
            if let Ok(duration) = read_duration(&bytes) {
                let _ = tx.send(duration);
            }
        });

        Self { rx }
    }

    /// The resolved duration, once the lookup has finished.
    pub fn poll(&self) -> Option<Duration> {
        self.rx.try_recv().ok()
    }

    #[cfg(test)]
    pub(crate) fn from_channel(rx: Receiver<Duration>) -> Self {
        Self { rx }
    }
}

/// Read the playable length out of an in-memory audio resource.
pub(crate) fn read_duration(bytes: &[u8]) -> Result<Duration, ProbeError> {
    let tagged = Probe::new(Cursor::new(bytes)).guess_file_type()?.read()?;
    Ok(tagged.properties().duration())
}
