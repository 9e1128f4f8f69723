use std::borrow::Cow;

use ratatui::symbols::border;
use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use crate::error::{PaletteError, Result};
use crate::keymap::Action;
use crate::models::Item;

/// Shown by `render` until the host calls `mark_ready`
pub const LOADING_PLACEHOLDER: &str = "Loading items...";

/// Shown by hosts when there is nothing to build a grid from
pub const EMPTY_PLACEHOLDER: &str = "No items found";

/// Lines taken by one tile: top border, title, bottom border
pub const TILE_HEIGHT: u16 = 3;

/// Blank lines between two rows of tiles
pub const ROW_SPACING: u16 = 1;

/// Largest margin or padding a tile accepts; larger values are clamped
pub const MAX_TILE_SPACING: u16 = 32;

const BORDER_WIDTH: usize = 1;

/// How many tiles a line holds when the viewport is not an exact multiple
/// of the tile width.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineFit {
    /// `floor(width / tile_width)`
    #[default]
    RoundDown,
    /// One slot fewer than `RoundDown` unless the tiles fit exactly
    ReserveSlot,
}

impl LineFit {
    /// Tiles per line for the given widths, never less than one.
    pub fn items_per_line(self, width: usize, tile_width: usize) -> usize {
        let fit = width / tile_width;
        let fit = match self {
            LineFit::RoundDown => fit,
            LineFit::ReserveSlot if width % tile_width != 0 => fit.saturating_sub(1),
            LineFit::ReserveSlot => fit,
        };
        fit.max(1)
    }
}

/// Layout and decoration settings, fixed for the lifetime of a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridOptions {
    /// Line printed above the tiles by `render`
    pub heading: Option<String>,
    /// Blank cells left and right of each tile border
    pub margin: u16,
    /// Blank cells between the tile border and the title
    pub padding: u16,
    pub line_fit: LineFit,
    /// Append the viewport size to the text rendering
    pub show_diagnostics: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            heading: None,
            margin: 1,
            padding: 2,
            line_fit: LineFit::RoundDown,
            show_diagnostics: false,
        }
    }
}

impl GridOptions {
    /// Cells a tile adds around the widest title
    pub fn decoration_width(&self) -> usize {
        2 * (self.margin as usize + BORDER_WIDTH + self.padding as usize)
    }
}

/// Position of the highlighted tile. Row 0, column 0 is the upper left tile.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SelectorState {
    #[default]
    Initializing,
    Ready,
}

/// A matrix of titled tiles with a keyboard-driven cursor.
///
/// Items are laid out row-major, `items_per_line` to a row. The last row may
/// hold fewer tiles than the others; the cursor never points past it.
#[derive(Debug, Clone)]
pub struct GridSelector {
    items: Vec<Item>,
    options: GridOptions,
    width: u16,
    height: u16,
    title_width: usize,
    tile_width: usize,
    items_per_line: usize,
    num_lines: usize,
    cursor: Cursor,
    state: SelectorState,
}

impl GridSelector {
    /// Build a grid with the default options
    pub fn new(items: Vec<Item>, width: u16, height: u16) -> Result<Self> {
        Self::with_options(items, width, height, GridOptions::default())
    }

    pub fn with_options(
        items: Vec<Item>,
        width: u16,
        height: u16,
        mut options: GridOptions,
    ) -> Result<Self> {
        if items.is_empty() {
            return Err(PaletteError::EmptyInput);
        }
        validate_viewport(width, height)?;

        options.margin = options.margin.min(MAX_TILE_SPACING);
        options.padding = options.padding.min(MAX_TILE_SPACING);

        let title_width = items
            .iter()
            .map(|item| display_title(&item.title).width())
            .max()
            .unwrap_or(0);
        let tile_width = title_width + options.decoration_width();

        let mut grid = Self {
            items,
            options,
            width,
            height,
            title_width,
            tile_width,
            items_per_line: 1,
            num_lines: 1,
            cursor: Cursor::default(),
            state: SelectorState::Initializing,
        };
        grid.relayout();

        tracing::debug!(
            items = grid.items.len(),
            tile_width = grid.tile_width,
            items_per_line = grid.items_per_line,
            num_lines = grid.num_lines,
            "grid created"
        );
        Ok(grid)
    }

    /// Change the viewport and re-clamp the cursor to the new layout
    pub fn set_size(&mut self, width: u16, height: u16) -> Result<()> {
        validate_viewport(width, height)?;
        self.width = width;
        self.height = height;
        self.relayout();

        tracing::debug!(
            width,
            height,
            items_per_line = self.items_per_line,
            num_lines = self.num_lines,
            cursor = ?self.cursor,
            "grid resized"
        );
        Ok(())
    }

    pub fn mark_ready(&mut self) {
        self.state = SelectorState::Ready;
    }

    pub fn state(&self) -> SelectorState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == SelectorState::Ready
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn viewport(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn tile_width(&self) -> usize {
        self.tile_width
    }

    pub fn items_per_line(&self) -> usize {
        self.items_per_line
    }

    pub fn num_lines(&self) -> usize {
        self.num_lines
    }

    /// Number of tiles in `row`; zero for rows past the end
    pub fn items_in_row(&self, row: usize) -> usize {
        if row >= self.num_lines {
            0
        } else if row + 1 < self.num_lines {
            self.items_per_line
        } else {
            self.items.len() - self.items_per_line * (self.num_lines - 1)
        }
    }

    /// Index into `items` of the tile under the cursor
    pub fn selected_index(&self) -> usize {
        self.cursor.row * self.items_per_line + self.cursor.col
    }

    pub fn selected_item(&self) -> &Item {
        &self.items[self.selected_index()]
    }

    /// Move the cursor one tile left. Returns whether it moved.
    pub fn cursor_left(&mut self) -> bool {
        if self.cursor.col == 0 {
            return false;
        }
        self.cursor.col -= 1;
        true
    }

    /// Move the cursor one row up. Returns whether it moved.
    pub fn cursor_up(&mut self) -> bool {
        if self.cursor.row == 0 {
            return false;
        }
        self.cursor.row -= 1;
        true
    }

    /// Move the cursor one tile right, stopping at the end of a short row.
    pub fn cursor_right(&mut self) -> bool {
        if self.cursor.col + 1 >= self.items_in_row(self.cursor.row) {
            return false;
        }
        self.cursor.col += 1;
        true
    }

    /// Move the cursor one row down. Landing on the short last row pulls the
    /// column back onto its last tile.
    pub fn cursor_down(&mut self) -> bool {
        if self.cursor.row + 1 >= self.num_lines {
            return false;
        }
        self.cursor.row += 1;
        self.cursor.col = self.cursor.col.min(self.items_in_row(self.cursor.row) - 1);
        true
    }

    /// Apply a translated key action. Returns whether the grid changed;
    /// `ForceQuit` is left to the host and never changes the grid.
    pub fn handle(&mut self, action: Action) -> bool {
        match action {
            Action::CursorLeft => self.cursor_left(),
            Action::CursorUp => self.cursor_up(),
            Action::CursorRight => self.cursor_right(),
            Action::CursorDown => self.cursor_down(),
            Action::ForceQuit => false,
        }
    }

    /// Render the grid as a monospace text block
    pub fn render(&self) -> String {
        if self.state == SelectorState::Initializing {
            return LOADING_PLACEHOLDER.to_string();
        }

        let mut output = String::new();

        if let Some(ref heading) = self.options.heading {
            output.push_str(heading);
            output.push_str("\n\n");
        }

        for (row, tiles) in self.items.chunks(self.items_per_line).enumerate() {
            if row > 0 {
                for _ in 0..ROW_SPACING {
                    output.push('\n');
                }
            }

            let mut lines = [String::new(), String::new(), String::new()];
            for (col, item) in tiles.iter().enumerate() {
                let active = self.cursor == Cursor::new(row, col);
                for (line, part) in lines.iter_mut().zip(self.tile_lines(item, active)) {
                    line.push_str(&part);
                }
            }
            for line in &lines {
                output.push_str(line.trim_end());
                output.push('\n');
            }
        }

        if self.options.show_diagnostics {
            output.push_str(&format!("\nviewport: {}x{}\n", self.width, self.height));
        }

        output
    }

    fn tile_lines(&self, item: &Item, active: bool) -> [String; TILE_HEIGHT as usize] {
        let set = if active { border::DOUBLE } else { border::PLAIN };
        let margin = " ".repeat(self.options.margin as usize);
        let padding = " ".repeat(self.options.padding as usize);
        let inner = self.title_width + 2 * self.options.padding as usize;
        let title = center(&display_title(&item.title), self.title_width);

        [
            format!(
                "{margin}{}{}{}{margin}",
                set.top_left,
                set.horizontal_top.repeat(inner),
                set.top_right
            ),
            format!(
                "{margin}{}{padding}{title}{padding}{}{margin}",
                set.vertical_left, set.vertical_right
            ),
            format!(
                "{margin}{}{}{}{margin}",
                set.bottom_left,
                set.horizontal_bottom.repeat(inner),
                set.bottom_right
            ),
        ]
    }

    fn relayout(&mut self) {
        self.items_per_line = self
            .options
            .line_fit
            .items_per_line(self.width as usize, self.tile_width);
        self.num_lines = self.items.len().div_ceil(self.items_per_line);

        self.cursor.row = self.cursor.row.min(self.num_lines - 1);
        self.cursor.col = self.cursor.col.min(self.items_in_row(self.cursor.row) - 1);
    }
}

fn validate_viewport(width: u16, height: u16) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(PaletteError::InvalidViewport { width, height });
    }
    Ok(())
}

/// Title as drawn in a tile: control characters become spaces so every
/// tile stays one line tall and as wide as measured.
pub fn display_title(title: &str) -> Cow<'_, str> {
    if title.chars().any(char::is_control) {
        Cow::Owned(
            title
                .chars()
                .map(|c| if c.is_control() { ' ' } else { c })
                .collect(),
        )
    } else {
        Cow::Borrowed(title)
    }
}

/// Pad `text` with spaces on both sides to `width` display cells
fn center(text: &str, width: usize) -> String {
    let gap = width.saturating_sub(text.width());
    let left = gap / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(gap - left))
}
