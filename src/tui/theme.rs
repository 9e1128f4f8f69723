use ratatui::style::{Color, Modifier, Style};

use crate::config::{Rgb, ThemeColors};

/// TUI theme with ratatui styles
#[derive(Debug, Clone)]
pub struct TuiTheme {
    pub tile: Style,
    pub active_tile: Style,
    pub muted: Style,
    pub border: Style,
    pub title: Style,
    pub error: Style,
}

fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

impl From<&ThemeColors> for TuiTheme {
    fn from(colors: &ThemeColors) -> Self {
        Self {
            tile: Style::default()
                .fg(rgb(colors.tile_fg))
                .bg(rgb(colors.tile_bg))
                .add_modifier(Modifier::BOLD),
            active_tile: Style::default()
                .fg(rgb(colors.active_fg))
                .bg(rgb(colors.active_bg))
                .add_modifier(Modifier::BOLD),
            muted: Style::default().fg(rgb(colors.muted)),
            border: Style::default().fg(rgb(colors.border)),
            title: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            error: Style::default().fg(rgb(colors.error)),
        }
    }
}
