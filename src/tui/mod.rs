//! TUI (Text User Interface): an interactive form of inequality rows.

mod app;
mod constants;
mod draw;
mod handlers;
mod shortcuts;

use app::App;

use crossterm::event::{self, Event};
use crossterm::execute;
use std::io;
use std::time::Duration;

use crate::core::config::Config;

use handlers::HandleResult;

use draw::draw;

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Self {
        Self
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the TUI loop. Returns the last plotted command, if any.
pub fn run(config: &Config) -> io::Result<Option<String>> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    let guard = TerminalGuard::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.render);
    log::info!("TUI started");

    loop {
        terminal.draw(|f| {
            let area = f.area();
            draw(f, &mut app, area)
        })?;

        if event::poll(Duration::from_millis(constants::EVENT_POLL_TIMEOUT_MS))?
            && let Event::Key(key) = event::read()?
            && handlers::handle_key(key, &mut app) == HandleResult::Break
        {
            break;
        }
    }

    terminal.show_cursor()?;
    drop(guard);
    Ok(app.last_command)
}
