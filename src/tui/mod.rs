mod actions;
mod app;
mod event;
mod theme;
mod ui;
pub mod widgets;

use crate::config::Config;
use crate::error::{PaletteError, Result};
use crate::models::ItemSource;
pub use app::{App, Content};

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

/// Run the palette until the user quits
pub fn run(source: ItemSource, config: Config) -> Result<()> {
    // Setup terminal
    enable_raw_mode().map_err(|e| PaletteError::Tui(e.to_string()))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| PaletteError::Tui(e.to_string()))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| PaletteError::Tui(e.to_string()))?;

    let res = terminal
        .size()
        .map_err(|e| PaletteError::Tui(e.to_string()))
        .and_then(|size| App::new(config, size.width, size.height))
        .and_then(|mut app| run_app(&mut terminal, &mut app, source));

    // Restore terminal
    disable_raw_mode().map_err(|e| PaletteError::Tui(e.to_string()))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| PaletteError::Tui(e.to_string()))?;
    terminal
        .show_cursor()
        .map_err(|e| PaletteError::Tui(e.to_string()))?;

    res
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, source: ItemSource) -> Result<()> {
    let events = event::EventHandler::new(app.config.tick_rate, source);

    while app.running {
        terminal
            .draw(|f| ui::render(f, app))
            .map_err(|e| PaletteError::Tui(e.to_string()))?;

        match events.next()? {
            event::Event::Key(key) => {
                actions::handle_key_event(app, key);
            }
            event::Event::Resize(width, height) => {
                app.resize(width, height);
            }
            event::Event::Tick => {}
            event::Event::ItemsLoaded(result) => {
                app.items_loaded(result);
            }
        }
    }

    Ok(())
}
