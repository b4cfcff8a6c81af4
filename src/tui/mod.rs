mod app;
mod ui;

use crate::index::SearchIndex;
use anyhow::Result;
use app::{App, Signal};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Run the interactive browser.
///
/// Raw mode and the alternate screen bracket the whole session: acquired
/// before the event loop starts, released unconditionally afterwards even
/// when the loop returns an error, so the key dispatcher never outlives
/// the screen it was attached for.
pub fn run(index: SearchIndex) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    terminal.clear()?;

    let mut app = App::new(index);
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            // Only handle key press events, not release or repeat.
            // This avoids duplicate keypresses on Windows where both
            // press and release are reported.
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(Signal::Quit) = app.on_key(key) {
                    return Ok(());
                }
            }
        }
    }
}
