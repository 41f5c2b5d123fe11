use super::*;
use crate::gallery::FileDescriptor;

const BASE: &str = "https://files.example";

fn fd(name: &str, hash: &str) -> FileDescriptor {
    FileDescriptor {
        name: name.into(),
        hash: hash.into(),
    }
}

fn audio_app(files: Vec<FileDescriptor>) -> App {
    App::new(fd("song.mp3", "h2"), files, BASE, 0.5)
}

#[test]
fn non_audio_file_never_renders() {
    let app = App::new(
        fd("notes.txt", "h9"),
        vec![fd("a.png", "h1"), fd("b.jpg", "h3")],
        BASE,
        0.5,
    );
    // A backdrop resolves, but the type guard still wins.
    assert!(app.backdrop_url.is_some());
    assert!(!app.should_render());
}

#[test]
fn audio_without_backdrop_does_not_render() {
    let app = audio_app(vec![fd("other.mp3", "h4"), fd("doc.pdf", "h5")]);
    assert_eq!(app.backdrop_url, None);
    assert!(!app.should_render());
}

#[test]
fn single_image_candidate_is_always_chosen() {
    let app = audio_app(vec![fd("a.png", "h1")]);
    assert_eq!(app.backdrop_url.as_deref(), Some("https://files.example/h1"));
    assert!(app.should_render());
}

#[test]
fn backdrop_is_drawn_from_the_image_subset() {
    let files = vec![
        fd("a.png", "h1"),
        fd("song.mp3", "h2"),
        fd("b.jpg", "h3"),
        fd("notes.txt", "h4"),
    ];

    // Selection is random; over repeated mounts only image URLs may appear.
    for _ in 0..50 {
        let app = audio_app(files.clone());
        let url = app.backdrop_url.expect("images available");
        assert!(
            url == "https://files.example/h1" || url == "https://files.example/h3",
            "unexpected backdrop {url}"
        );
    }
}

#[test]
fn empty_image_subset_keeps_previous_backdrop() {
    let mut app = audio_app(vec![fd("a.png", "h1")]);
    assert!(app.backdrop_url.is_some());

    app.set_files(vec![fd("other.mp3", "h7")]);
    assert_eq!(app.backdrop_url.as_deref(), Some("https://files.example/h1"));
}

#[test]
fn toggling_twice_restores_playing_and_rotation_tracks_it() {
    let mut app = audio_app(vec![fd("a.png", "h1")]);
    assert!(!app.playing);
    assert!(!app.is_spinning());

    app.toggle_playing();
    assert!(app.playing);
    assert!(app.is_spinning());

    app.toggle_playing();
    assert!(!app.playing);
    assert!(!app.is_spinning());
}

#[test]
fn spin_only_advances_while_playing() {
    let mut app = audio_app(vec![fd("a.png", "h1")]);
    for _ in 0..10 {
        app.advance_spin();
    }
    assert_eq!(app.spin_frame(), 0);

    app.toggle_playing();
    for _ in 0..4 {
        app.advance_spin();
    }
    assert_ne!(app.spin_frame(), 0);
}

#[test]
fn volume_is_passed_through_untransformed_and_clamped() {
    let mut app = audio_app(vec![fd("a.png", "h1")]);
    app.set_volume(0.75);
    assert_eq!(app.volume, 0.75);

    app.set_volume(1.3);
    assert_eq!(app.volume, 1.0);
    app.set_volume(-0.2);
    assert_eq!(app.volume, 0.0);
}

#[test]
fn scrubbing_is_inert_until_duration_resolves() {
    let mut app = audio_app(vec![fd("a.png", "h1")]);
    app.scrub_to(30.0);
    assert_eq!(app.played_time, 0.0);
    assert_eq!(app.commit_seek(), None);
}

#[test]
fn commit_seek_yields_the_scrubbed_position() {
    let mut app = audio_app(vec![fd("a.png", "h1")]);
    app.set_duration(180.0);

    app.grab_seek();
    app.scrub_to(42.5);
    assert_eq!(app.played_time, 42.5);

    assert_eq!(app.commit_seek(), Some(42.5));
}

#[test]
fn scrub_clamps_to_duration_bounds() {
    let mut app = audio_app(vec![fd("a.png", "h1")]);
    app.set_duration(60.0);

    app.scrub_by(500.0);
    assert_eq!(app.played_time, 60.0);

    app.scrub_by(-500.0);
    assert_eq!(app.played_time, 0.0);
}

#[test]
fn first_duration_report_wins() {
    let mut app = audio_app(vec![fd("a.png", "h1")]);
    app.set_duration(120.0);
    app.set_duration(999.0);
    assert_eq!(app.duration, Some(120.0));
}

#[test]
fn invalid_duration_reports_are_ignored() {
    let mut app = audio_app(vec![fd("a.png", "h1")]);
    app.set_duration(0.0);
    app.set_duration(f32::NAN);
    assert_eq!(app.duration, None);
}

#[test]
fn progress_events_overwrite_played_time() {
    let mut app = audio_app(vec![fd("a.png", "h1")]);
    app.set_duration(180.0);
    app.scrub_to(90.0);

    app.apply_progress(12.25);
    assert_eq!(app.played_time, 12.25);
}

#[test]
fn seeking_flag_is_cleared_by_both_handlers_and_never_set() {
    let mut app = audio_app(vec![fd("a.png", "h1")]);
    app.set_duration(10.0);

    app.grab_seek();
    assert!(!app.seeking);
    app.commit_seek();
    assert!(!app.seeking);
}
