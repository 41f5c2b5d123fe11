use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use super::sink::SharedBytes;
use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, ProgressEvent};

/// Handle to the playback worker.
///
/// Owns the command channel, the receiving end of the progress stream and
/// the worker's join handle. Dropping or quitting the handle ends the scope
/// of the playback capability.
pub struct AudioPlayer {
    tx: Sender<AudioCmd>,
    progress: Receiver<ProgressEvent>,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl AudioPlayer {
    /// Spawn the worker over the downloaded audio bytes. The sink starts
    /// paused at the configured volume.
    pub fn new(bytes: Vec<u8>, initial_volume: f32) -> Self {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let (progress_tx, progress_rx) = mpsc::channel::<ProgressEvent>();

        let join = spawn_audio_thread(SharedBytes(Arc::new(bytes)), initial_volume, rx, progress_tx);

        Self {
            tx,
            progress: progress_rx,
            join: Mutex::new(Some(join)),
        }
    }

    pub fn send(&self, cmd: AudioCmd) -> Result<(), mpsc::SendError<AudioCmd>> {
        self.tx.send(cmd)
    }

    /// Next pending progress event, if the worker has emitted one.
    pub fn poll_progress(&self) -> Option<ProgressEvent> {
        self.progress.try_recv().ok()
    }

    /// Stop playback and wait for the worker to finish.
    pub fn quit(&self) {
        let _ = self.send(AudioCmd::Quit);

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}
