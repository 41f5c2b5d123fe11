use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use rodio::{OutputStreamBuilder, Sink};

use super::sink::{SharedBytes, create_sink_at};
use super::types::{AudioCmd, ProgressEvent};

const PROGRESS_INTERVAL: Duration = Duration::from_millis(500);

pub(super) fn spawn_audio_thread(
    bytes: SharedBytes,
    initial_volume: f32,
    rx: Receiver<AudioCmd>,
    progress_tx: Sender<ProgressEvent>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let Ok(mut stream) = OutputStreamBuilder::open_default_stream() else {
            // No output device: keep draining commands so senders stay happy.
            while !matches!(rx.recv(), Ok(AudioCmd::Quit) | Err(_)) {}
            return;
        };
        // rodio logs to stderr when OutputStream is dropped. That's useful in
        // debugging, but noisy for a TUI app.
        stream.log_on_drop(false);

        // The sink is prepared up front and left paused, like a hidden
        // player element waiting for its playing flag.
        let mut sink: Option<Sink> = create_sink_at(&stream, &bytes, Duration::ZERO);

        let mut volume = initial_volume;
        if let Some(ref s) = sink {
            s.set_volume(volume);
        }

        let mut paused = true;
        // Seek base plus wall-clock segment tracking for the elapsed time.
        let mut accumulated = Duration::ZERO;
        let mut started_at: Option<Instant> = None;

        loop {
            match rx.recv_timeout(PROGRESS_INTERVAL) {
                Ok(AudioCmd::SetPlaying(play)) => {
                    let Some(ref s) = sink else { continue };
                    if play != paused {
                        // Already in the requested state.
                        continue;
                    }
                    if play {
                        s.play();
                        started_at = Some(Instant::now());
                    } else {
                        s.pause();
                        if let Some(st) = started_at.take() {
                            accumulated += st.elapsed();
                        }
                    }
                    paused = !play;
                }

                Ok(AudioCmd::SetVolume(v)) => {
                    volume = v;
                    if let Some(ref s) = sink {
                        s.set_volume(volume);
                    }
                }

                Ok(AudioCmd::SeekTo(seconds)) => {
                    // Scrubbing: rebuild the sink and skip into the stream.
                    if sink.is_none() {
                        continue;
                    }
                    let target = Duration::from_secs_f32(seconds.max(0.0));

                    if let Some(s) = sink.take() {
                        s.stop();
                    }

                    let new_sink = create_sink_at(&stream, &bytes, target);
                    if let Some(ref s) = new_sink {
                        s.set_volume(volume);
                        if paused {
                            started_at = None;
                        } else {
                            s.play();
                            started_at = Some(Instant::now());
                        }
                    }

                    sink = new_sink;
                    accumulated = target;
                }

                Ok(AudioCmd::Quit) => {
                    if let Some(ref s) = sink {
                        s.stop();
                    }
                    break;
                }

                Err(RecvTimeoutError::Timeout) => {
                    // Progress heartbeat. Stops once the sink drains, so the
                    // reported position freezes at the end of the track.
                    let Some(ref s) = sink else { continue };
                    if !paused && !s.empty() {
                        let elapsed = accumulated
                            + started_at.map_or(Duration::ZERO, |st| st.elapsed());
                        let _ = progress_tx.send(ProgressEvent {
                            played_seconds: elapsed.as_secs_f32(),
                        });
                    }
                }

                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}
