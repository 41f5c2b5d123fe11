use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::{AudioCmd, AudioPlayer, DurationProbe};
use crate::config;
use crate::ui;

/// State tracked by the runtime event loop across iterations.
struct EventLoopState {
    /// Last playing flag pushed to the audio worker.
    last_sent_playing: bool,
    /// Last volume pushed to the audio worker.
    last_sent_volume: f32,
}

impl EventLoopState {
    fn new(app: &App) -> Self {
        Self {
            last_sent_playing: app.playing,
            last_sent_volume: app.volume,
        }
    }
}

/// Main terminal event loop: adopts the probe result, drains progress
/// events, mirrors the widget flags into the audio worker, draws and
/// handles input. Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    audio: &AudioPlayer,
    probe: &mut Option<DurationProbe>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = EventLoopState::new(app);
    let seek_step = settings.controls.seek_seconds as f32;

    loop {
        // Duration discovery: adopt the probe result once, then drop the
        // probe so a late worker reports into a closed channel.
        if let Some(p) = probe.as_ref() {
            if let Some(d) = p.poll() {
                app.set_duration(d.as_secs_f32());
                *probe = None;
            }
        }

        // Progress events overwrite the displayed position while playing.
        while let Some(ev) = audio.poll_progress() {
            app.apply_progress(ev.played_seconds);
        }

        // The playback capability follows the widget's flags continuously.
        if app.playing != state.last_sent_playing {
            let _ = audio.send(AudioCmd::SetPlaying(app.playing));
            state.last_sent_playing = app.playing;
        }
        if app.volume != state.last_sent_volume {
            let _ = audio.send(AudioCmd::SetVolume(app.volume));
            state.last_sent_volume = app.volume;
        }

        app.advance_spin();
        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        if event::poll(Duration::from_millis(settings.ui.tick_ms))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,

                    KeyCode::Char(' ') | KeyCode::Char('p') => {
                        app.toggle_playing();
                    }

                    // Scrubbing moves the displayed position only; the seek
                    // command goes out on commit.
                    KeyCode::Char('h') | KeyCode::Left => {
                        app.grab_seek();
                        app.scrub_by(-seek_step);
                    }
                    KeyCode::Char('l') | KeyCode::Right => {
                        app.grab_seek();
                        app.scrub_by(seek_step);
                    }
                    KeyCode::Enter => {
                        if let Some(target) = app.commit_seek() {
                            let _ = audio.send(AudioCmd::SeekTo(target));
                        }
                    }

                    KeyCode::Char('k') | KeyCode::Up => {
                        app.set_volume(app.volume + settings.controls.volume_step);
                    }
                    KeyCode::Char('j') | KeyCode::Down => {
                        app.set_volume(app.volume - settings.controls.volume_step);
                    }

                    _ => {}
                }
            }
        }
    }

    Ok(())
}
