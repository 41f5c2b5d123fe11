//! UI rendering helpers for the terminal user interface.
//!
//! This module renders the player widget with `ratatui`: header, spinning
//! record art, the seek gauge (only once the duration is known), the volume
//! gauge and a status/controls footer. When the widget guard fails the
//! frame is left untouched.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::app::App;
use crate::config::UiSettings;

/// Rotation marker frames for the record hub, one per spin frame.
const SPIN_FRAMES: [char; 4] = ['|', '/', '-', '\\'];

/// Marker shown while the record stands still.
const IDLE_MARKER: char = '.';

/// Format seconds as `MM:SS`.
fn format_mmss(seconds: f32) -> String {
    let secs = seconds.max(0.0) as u64;
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// The ASCII record, with the hub marker reflecting the rotation state.
fn record_lines(app: &App) -> Vec<String> {
    let marker = if app.is_spinning() {
        SPIN_FRAMES[app.spin_frame()]
    } else {
        IDLE_MARKER
    };

    vec![
        r"      .-~~~~~~~-.      ".into(),
        r"    .~           ~.    ".into(),
        r"   /    .-----.    \   ".into(),
        r"  |    /       \    |  ".into(),
        format!(r"  |   |    {marker}    |   |  "),
        r"  |    \       /    |  ".into(),
        r"   \    '-----'    /   ".into(),
        r"    '~           ~'    ".into(),
        r"      '-~~~~~~~-'      ".into(),
    ]
}

/// Render the controls help text.
fn controls_text() -> String {
    "[space/p] play/pause | [h/l] scrub | [enter] seek | [j/k] volume | [q] quit".to_string()
}

/// Render the player into `frame`. Renders nothing at all when the file is
/// not audio or no backdrop has been resolved yet.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings) {
    if !app.should_render() {
        return;
    }

    let has_seek_bar = app.duration.is_some();

    let mut constraints = vec![Constraint::Length(3), Constraint::Min(13)];
    if has_seek_bar {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Length(3));
    constraints.push(Constraint::Length(3));
    constraints.push(Constraint::Length(3));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());
    let mut next = 0;
    let mut chunk = || {
        let area = chunks[next];
        next += 1;
        area
    };

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" platter ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunk());

    // Record art with the file name and label on the plate.
    {
        let mut lines: Vec<Line> = record_lines(app).into_iter().map(Line::from).collect();
        lines.push(Line::from(""));
        lines.push(
            Line::from(app.file.name.as_str())
                .style(Style::default().add_modifier(Modifier::ITALIC | Modifier::BOLD)),
        );
        lines.push(
            Line::from(ui_settings.label_text.as_str())
                .style(Style::default().add_modifier(Modifier::ITALIC)),
        );

        let art = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" record "));
        frame.render_widget(art, chunk());
    }

    // Seek bar, only once the duration probe has resolved.
    if has_seek_bar {
        let duration = app.duration.unwrap_or(0.0);
        let ratio = if duration > 0.0 {
            f64::from((app.played_time / duration).clamp(0.0, 1.0))
        } else {
            0.0
        };

        let seek = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(" seek "))
            .ratio(ratio)
            .label(format!(
                "{} / {}",
                format_mmss(app.played_time),
                format_mmss(duration)
            ));
        frame.render_widget(seek, chunk());
    }

    // Volume bar
    let volume = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" volume "))
        .ratio(f64::from(app.volume.clamp(0.0, 1.0)))
        .label(format!("{:.0}%", app.volume * 100.0));
    frame.render_widget(volume, chunk());

    // Status box
    let status = {
        let mut parts: Vec<String> = Vec::new();

        if app.playing {
            parts.push("Playing".to_string());
        } else {
            parts.push("Paused".to_string());
        }

        parts.push(format!("At: {}", format_mmss(app.played_time)));

        if let Some(url) = &app.backdrop_url {
            parts.push(format!("Backdrop: {}", url));
        }

        parts.join(" • ")
    };
    let status_par = Paragraph::new(status).block(
        Block::bordered()
            .padding(Padding {
                left: 1,
                right: 0,
                top: 0,
                bottom: 0,
            })
            .title(" status "),
    );
    frame.render_widget(status_par, chunk());

    // Footer
    let footer = Paragraph::new(controls_text()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" controls ")
            .padding(Padding {
                left: 1,
                right: 0,
                top: 0,
                bottom: 0,
            }),
    );
    frame.render_widget(footer, chunk());
}

#[cfg(test)]
mod tests;
