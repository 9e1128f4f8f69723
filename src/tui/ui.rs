use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::grid::{EMPTY_PLACEHOLDER, LOADING_PLACEHOLDER};

use super::app::{App, Content};
use super::widgets::palette_view::{render_palette, SCROLLBAR_WIDTH};
use super::widgets::status_bar::render_status_bar;

/// Rows taken by everything except the tiles: header, the content block's
/// top and bottom borders, and two status lines.
pub const CHROME_HEIGHT: u16 = 5;

/// Area left for the tiles in a terminal of the given size
pub fn content_size(width: u16, height: u16) -> (u16, u16) {
    (
        width.saturating_sub(SCROLLBAR_WIDTH).max(1),
        height.saturating_sub(CHROME_HEIGHT).max(1),
    )
}

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(2), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_content(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(format!("  {}", app.config.heading), app.theme.title),
    ];

    if let Some(grid) = app.grid() {
        let cursor = grid.cursor();
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!(
                "{} items · row {}/{}",
                grid.items().len(),
                cursor.row + 1,
                grid.num_lines()
            ),
            app.theme.muted,
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_content(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(app.theme.border);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (message, style) = match app.content {
        Content::Grid(ref grid) => {
            render_palette(frame, app, grid, inner);
            return;
        }
        Content::Loading => (LOADING_PLACEHOLDER.to_string(), app.theme.muted),
        Content::Empty => (EMPTY_PLACEHOLDER.to_string(), app.theme.muted),
        Content::Failed(ref error) => (format!("Failed to load items: {}", error), app.theme.error),
    };

    let paragraph = Paragraph::new(message)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::Item;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn content_size_leaves_room_for_chrome() {
        assert_eq!(content_size(80, 24), (79, 19));
        assert_eq!(content_size(80, 3), (79, 1));
        assert_eq!(content_size(0, 0), (1, 1));
    }

    #[test]
    fn loading_screen_shows_placeholder() {
        let app = App::new(Config::default(), 60, 12).unwrap();
        let screen = draw(&app, 60, 12);
        assert!(screen.contains(LOADING_PLACEHOLDER));
    }

    #[test]
    fn empty_screen_shows_placeholder() {
        let mut app = App::new(Config::default(), 60, 12).unwrap();
        app.items_loaded(Ok(Vec::new()));
        let screen = draw(&app, 60, 12);
        assert!(screen.contains(EMPTY_PLACEHOLDER));
    }

    fn cell(app: &App, width: u16, height: u16, x: u16, y: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal.backend().buffer()[(x, y)].symbol().to_string()
    }

    #[test]
    fn huge_tile_margin_renders_without_overflow() {
        let mut config = Config::default();
        config.tile.margin = 40000;
        let mut app = App::new(config, 60, 12).unwrap();
        app.items_loaded(Ok(vec![Item::new("a", "")]));

        let screen = draw(&app, 60, 12);
        assert!(screen.contains("Palette"));
    }

    #[test]
    fn scrollbar_does_not_cover_last_tile_column() {
        let mut config = Config::default();
        config.tile.margin = 0;
        let items = (0..10).map(|i| Item::new(format!("{:02}", i), "")).collect();
        let mut app = App::new(config, 17, 13).unwrap();
        app.items_loaded(Ok(items));

        let grid = app.grid().unwrap();
        assert_eq!(grid.tile_width(), 8);
        assert_eq!(grid.items_per_line(), 2);
        assert!(grid.num_lines() > 2);

        // Second tile spans columns 8..=15; the scrollbar owns column 16
        assert_eq!(cell(&app, 17, 13, 15, 2), "┐");
        assert_eq!(cell(&app, 17, 13, 15, 3), "│");
        assert_ne!(cell(&app, 17, 13, 16, 2), " ");
    }

    #[test]
    fn grid_screen_shows_titles_and_selection() {
        let mut app = App::new(Config::default(), 60, 16).unwrap();
        app.items_loaded(Ok(vec![
            Item::new("alpha", "first body"),
            Item::new("beta", "second body"),
        ]));

        let screen = draw(&app, 60, 16);
        assert!(screen.contains("alpha"));
        assert!(screen.contains("beta"));
        assert!(screen.contains("2 items"));
        assert!(screen.contains("first body"));
        assert!(screen.contains('╔'));
    }
}
