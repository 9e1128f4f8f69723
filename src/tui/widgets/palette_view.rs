use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    symbols::border,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::grid::{display_title, Cursor, GridSelector, ROW_SPACING, TILE_HEIGHT};
use crate::tui::app::App;

/// Column kept free on the right for the scrollbar
pub const SCROLLBAR_WIDTH: u16 = 1;

/// Rows of tiles that fit in `height` lines, at least one
pub fn visible_rows(height: u16) -> usize {
    (height / (TILE_HEIGHT + ROW_SPACING)).max(1) as usize
}

/// First row to draw. Starts from the previous offset and only scrolls
/// when the cursor row would leave the view.
pub fn scroll_offset(previous: usize, cursor_row: usize, visible: usize, num_lines: usize) -> usize {
    let offset = if cursor_row < previous {
        cursor_row
    } else if cursor_row >= previous + visible {
        cursor_row + 1 - visible
    } else {
        previous
    };
    offset.min(num_lines.saturating_sub(visible))
}

pub fn render_palette(frame: &mut Frame, app: &App, grid: &GridSelector, area: Rect) {
    let [tiles_area, scrollbar_area] =
        Layout::horizontal([Constraint::Min(1), Constraint::Length(SCROLLBAR_WIDTH)]).areas(area);

    let visible = visible_rows(tiles_area.height);
    let cursor = grid.cursor();
    let first_row = scroll_offset(app.scroll_row(), cursor.row, visible, grid.num_lines());

    let margin = grid.options().margin;
    let tile_width = u16::try_from(grid.tile_width()).unwrap_or(u16::MAX);
    let box_width = tile_width.saturating_sub(margin.saturating_mul(2));
    let row_height = TILE_HEIGHT + ROW_SPACING;

    let rows = grid
        .items()
        .chunks(grid.items_per_line())
        .enumerate()
        .skip(first_row)
        .take(visible);

    for (row, tiles) in rows {
        let y = tiles_area.y + (row - first_row) as u16 * row_height;

        for (col, item) in tiles.iter().enumerate() {
            let x = tiles_area
                .x
                .saturating_add((col as u16).saturating_mul(tile_width))
                .saturating_add(margin);
            let tile = Rect::new(x, y, box_width, TILE_HEIGHT).intersection(tiles_area);
            if tile.is_empty() {
                continue;
            }

            let (style, set) = if cursor == Cursor::new(row, col) {
                (app.theme.active_tile, border::DOUBLE)
            } else {
                (app.theme.tile, border::PLAIN)
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_set(set)
                .style(style);
            let title = Paragraph::new(display_title(&item.title))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(title, tile);
        }
    }

    if grid.num_lines() > visible {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None);
        let mut scrollbar_state = ScrollbarState::new(grid.num_lines()).position(cursor.row);
        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}
