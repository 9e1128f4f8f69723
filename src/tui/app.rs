use crate::config::Config;
use crate::error::{PaletteError, Result};
use crate::grid::{GridOptions, GridSelector};
use crate::keymap::KeyMap;
use crate::models::Item;

use super::theme::TuiTheme;
use super::ui;
use super::widgets::palette_view::{scroll_offset, visible_rows};

/// What the content area currently shows
#[derive(Debug)]
pub enum Content {
    /// Waiting for the item source
    Loading,
    /// The source produced no items
    Empty,
    /// The source failed
    Failed(String),
    Grid(GridSelector),
}

/// Main application state
pub struct App {
    pub content: Content,
    /// Application running flag
    pub running: bool,
    /// Theme colors for rendering
    pub theme: TuiTheme,
    pub keymap: KeyMap,
    /// Configuration
    pub config: Config,
    options: GridOptions,
    /// Size of the content area the grid lays itself out in
    viewport: (u16, u16),
    /// First tile row on screen, kept between frames
    scroll_row: usize,
}

impl App {
    /// Create the app for a terminal of the given size
    pub fn new(config: Config, width: u16, height: u16) -> Result<Self> {
        let keymap = KeyMap::from_config(&config.keymap)?;
        let theme = TuiTheme::from(&config.theme.resolve());
        let options = config.grid_options();

        Ok(Self {
            content: Content::Loading,
            running: true,
            theme,
            keymap,
            config,
            options,
            viewport: ui::content_size(width, height),
            scroll_row: 0,
        })
    }

    /// Build the grid once the item source has answered
    pub fn items_loaded(&mut self, result: Result<Vec<Item>>) {
        let (width, height) = self.viewport;
        self.content = match result
            .and_then(|items| GridSelector::with_options(items, width, height, self.options.clone()))
        {
            Ok(mut grid) => {
                grid.mark_ready();
                tracing::info!(items = grid.items().len(), "palette ready");
                Content::Grid(grid)
            }
            Err(PaletteError::EmptyInput) => {
                tracing::info!("item source is empty");
                Content::Empty
            }
            Err(e) => Content::Failed(e.to_string()),
        };
        self.scroll_row = 0;
    }

    /// Track a terminal resize
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = ui::content_size(width, height);
        if let Content::Grid(ref mut grid) = self.content {
            let (width, height) = self.viewport;
            if let Err(e) = grid.set_size(width, height) {
                tracing::warn!(error = %e, "ignoring resize");
            }
        }
        self.follow_cursor();
    }

    /// Scroll just enough to keep the cursor row on screen
    pub fn follow_cursor(&mut self) {
        if let Some(grid) = self.grid() {
            let visible = visible_rows(self.viewport.1);
            self.scroll_row =
                scroll_offset(self.scroll_row, grid.cursor().row, visible, grid.num_lines());
        }
    }

    pub fn scroll_row(&self) -> usize {
        self.scroll_row
    }

    pub fn grid(&self) -> Option<&GridSelector> {
        match self.content {
            Content::Grid(ref grid) => Some(grid),
            _ => None,
        }
    }

    pub fn grid_mut(&mut self) -> Option<&mut GridSelector> {
        match self.content {
            Content::Grid(ref mut grid) => Some(grid),
            _ => None,
        }
    }

    pub fn viewport(&self) -> (u16, u16) {
        self.viewport
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cursor;
    use crate::models::sample_items;

    #[test]
    fn starts_loading() {
        let app = App::new(Config::default(), 80, 24).unwrap();
        assert!(matches!(app.content, Content::Loading));
        assert!(app.grid().is_none());
        assert!(app.running);
    }

    #[test]
    fn loaded_items_build_a_ready_grid() {
        let mut app = App::new(Config::default(), 80, 24).unwrap();
        app.items_loaded(Ok(sample_items()));

        let grid = app.grid().unwrap();
        assert!(grid.is_ready());
        assert_eq!(grid.viewport(), ui::content_size(80, 24));
    }

    #[test]
    fn empty_items_show_empty_state() {
        let mut app = App::new(Config::default(), 80, 24).unwrap();
        app.items_loaded(Ok(Vec::new()));
        assert!(matches!(app.content, Content::Empty));
    }

    #[test]
    fn load_failure_is_kept_for_display() {
        let mut app = App::new(Config::default(), 80, 24).unwrap();
        app.items_loaded(Err(PaletteError::Tui("boom".to_string())));
        assert!(matches!(app.content, Content::Failed(ref msg) if msg.contains("boom")));
    }

    #[test]
    fn resize_relayouts_grid() {
        let mut app = App::new(Config::default(), 200, 24).unwrap();
        app.items_loaded(Ok(sample_items()));
        let wide = app.grid().unwrap().items_per_line();

        if let Some(grid) = app.grid_mut() {
            grid.cursor_right();
        }
        app.resize(10, 24);

        let grid = app.grid().unwrap();
        assert!(grid.items_per_line() < wide);
        assert_eq!(grid.items_per_line(), 1);
        assert_eq!(grid.cursor(), Cursor::new(0, 0));
    }

    #[test]
    fn scroll_holds_until_cursor_leaves_the_view() {
        // 21x13 leaves a 20x8 content area: two tiles across, two rows shown
        let items = (0..10).map(|i| Item::new(format!("{:02}", i), "")).collect();
        let mut app = App::new(Config::default(), 21, 13).unwrap();
        app.items_loaded(Ok(items));
        assert_eq!(app.grid().unwrap().items_per_line(), 2);

        let mut down = |app: &mut App| {
            app.grid_mut().unwrap().cursor_down();
            app.follow_cursor();
        };
        down(&mut app);
        assert_eq!(app.scroll_row(), 0);
        down(&mut app);
        down(&mut app);
        assert_eq!(app.grid().unwrap().cursor().row, 3);
        assert_eq!(app.scroll_row(), 2);

        app.grid_mut().unwrap().cursor_up();
        app.follow_cursor();
        assert_eq!(app.scroll_row(), 2);

        app.grid_mut().unwrap().cursor_up();
        app.follow_cursor();
        assert_eq!(app.grid().unwrap().cursor().row, 1);
        assert_eq!(app.scroll_row(), 1);
    }

    #[test]
    fn bad_keymap_config_is_rejected() {
        let mut config = Config::default();
        config.keymap.cursor_down = Some(vec!["ctrl+nothing".to_string()]);
        assert!(App::new(config, 80, 24).is_err());
    }
}
