use ratatui::{Terminal, backend::TestBackend};

use crate::app::App;
use crate::config::UiSettings;
use crate::gallery::FileDescriptor;

const BASE: &str = "https://files.example";

fn fd(name: &str, hash: &str) -> FileDescriptor {
    FileDescriptor {
        name: name.into(),
        hash: hash.into(),
    }
}

/// Draw once and flatten the buffer into a newline-joined string.
fn render(app: &App) -> String {
    let backend = TestBackend::new(80, 34);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| super::draw(frame, app, &UiSettings::default()))
        .unwrap();

    let buffer = terminal.backend().buffer().clone();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn non_audio_file_renders_an_empty_frame() {
    let app = App::new(
        fd("notes.txt", "h9"),
        vec![fd("a.png", "h1")],
        BASE,
        0.5,
    );
    assert!(render(&app).chars().all(|c| c == ' ' || c == '\n'));
}

#[test]
fn missing_backdrop_renders_an_empty_frame() {
    let app = App::new(fd("song.mp3", "h2"), vec![fd("other.ogg", "h4")], BASE, 0.5);
    assert!(render(&app).chars().all(|c| c == ' ' || c == '\n'));
}

#[test]
fn widget_renders_name_volume_and_backdrop() {
    let app = App::new(fd("song.mp3", "h2"), vec![fd("a.png", "h1")], BASE, 0.75);
    let out = render(&app);

    assert!(out.contains("song.mp3"));
    assert!(out.contains(" volume "));
    assert!(out.contains("75%"));
    assert!(out.contains("https://files.example/h1"));
}

#[test]
fn seek_bar_appears_exactly_once_after_duration_resolves() {
    let mut app = App::new(fd("song.mp3", "h2"), vec![fd("a.png", "h1")], BASE, 0.5);

    let before = render(&app);
    assert_eq!(before.matches(" seek ").count(), 0);

    app.set_duration(180.0);
    let after = render(&app);
    assert_eq!(after.matches(" seek ").count(), 1);
    assert!(after.contains("00:00 / 03:00"));
}

#[test]
fn rotation_marker_moves_only_while_playing() {
    let mut app = App::new(fd("song.mp3", "h2"), vec![fd("a.png", "h1")], BASE, 0.5);

    // Paused: static hub marker, no rotation frames.
    let paused = render(&app);
    for frame in super::SPIN_FRAMES {
        assert!(!paused.contains(&format!("|    {frame}    |")));
    }

    app.toggle_playing();
    let playing = render(&app);
    let spinning = super::SPIN_FRAMES
        .iter()
        .any(|frame| playing.contains(&format!("|    {frame}    |")));
    assert!(spinning);
    assert!(playing.contains("Playing"));
}
