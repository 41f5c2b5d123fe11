//! Runtime: argument handling, session startup and the terminal event loop.

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::env;

mod event_loop;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();

    let mut args = env::args().skip(1);
    let (base_url, wanted) = match (args.next(), args.next()) {
        (Some(base), Some(file)) => (base, file),
        (Some(file), None) => {
            let Some(base) = settings.server.base_url.clone() else {
                return Err(USAGE.into());
            };
            (base, file)
        }
        _ => return Err(USAGE.into()),
    };

    let startup::Session {
        mut app,
        audio,
        mut probe,
    } = startup::start(&settings, &base_url, &wanted)?;

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app, &audio, &mut probe);

    audio.quit();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}

const USAGE: &str =
    "usage: platter [base-url] <file-name-or-hash> (base-url may come from server.base_url in config)";
