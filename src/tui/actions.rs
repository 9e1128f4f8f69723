use crossterm::event::KeyEvent;

use crate::keymap::Action;

use super::app::App;

/// Handle a key event. Returns whether anything changed and a redraw is due.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    let Some(action) = app.keymap.resolve(&key) else {
        return false;
    };

    if action == Action::ForceQuit {
        tracing::info!("quit requested");
        app.quit();
        return true;
    }

    let Some(grid) = app.grid_mut() else {
        return false;
    };
    let moved = grid.handle(action);
    if moved {
        tracing::debug!(?action, cursor = ?grid.cursor(), "cursor moved");
        app.follow_cursor();
    }
    moved
}
