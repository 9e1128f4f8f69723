use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::grid::display_title;
use crate::keymap::{Action, KeyMap};
use crate::tui::app::App;

pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    // Body of the selected item
    if let Some(grid) = app.grid() {
        let item = grid.selected_item();
        let line = Line::from(vec![
            Span::raw("  "),
            Span::styled(display_title(&item.title), app.theme.title),
            Span::raw("  "),
            Span::styled(item.body.as_str(), app.theme.muted),
        ]);
        frame.render_widget(Paragraph::new(line), chunks[0]);
    }

    let mut spans: Vec<Span> = vec![Span::raw("  ")];
    for (i, (keys, desc)) in key_hints(&app.keymap).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", app.theme.muted));
        }
        spans.push(Span::styled(
            format!("[{}]", keys),
            app.theme.muted.add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {}", desc), app.theme.muted));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[1]);
}

/// One `(keys, description)` pair per action, quit last
fn key_hints(keymap: &KeyMap) -> Vec<(String, &'static str)> {
    let (quit, movement): (Vec<_>, Vec<_>) = keymap
        .bindings()
        .into_iter()
        .partition(|(action, _)| *action == Action::ForceQuit);

    movement
        .into_iter()
        .chain(quit)
        .filter(|(_, bindings)| !bindings.is_empty())
        .map(|(action, bindings)| {
            let keys: Vec<String> = bindings.iter().map(|b| b.to_string()).collect();
            (keys.join("/"), action.description())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_hints() {
        let hints = key_hints(&KeyMap::default());
        assert_eq!(
            hints,
            vec![
                ("←/h".to_string(), "Left"),
                ("↑/k".to_string(), "Up"),
                ("→/l".to_string(), "Right"),
                ("↓/j".to_string(), "Down"),
                ("ctrl+c".to_string(), "Quit"),
            ]
        );
    }
}
