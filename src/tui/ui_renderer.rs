use super::app_logic::TuiApp;
use super::app_state::StatusKind;
use crate::content::Content;
use crate::dir_reader::DirectorySource;
use crate::paths;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

const HELP_TEXT: &str = "j/k/Arrows: Move | l/Enter/Right: Open | h/Backspace/Left: Up | q/Esc: Quit";

fn draw_header_block<S: DirectorySource>(f: &mut Frame, app: &TuiApp<S>, area: Rect) {
    let path = app.engine.current_path().display().to_string();
    let header = Paragraph::new(Line::from(Span::styled(
        path,
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Terminal File Explorer"),
    );
    f.render_widget(header, area);
}

/// Render one pane. `focused` marks the pane the selection keys act on.
fn draw_content_pane(f: &mut Frame, content: &Content, title: &str, focused: bool, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(title.to_string());

    match content {
        Content::Empty => f.render_widget(block, area),
        Content::Text(message) => {
            let paragraph = Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::DarkGray))
                .block(block)
                .wrap(Wrap { trim: true });
            f.render_widget(paragraph, area);
        }
        Content::Directory(dir) if dir.is_empty() => {
            let paragraph = Paragraph::new("empty")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            f.render_widget(paragraph, area);
        }
        Content::Directory(dir) => {
            let list_items: Vec<ListItem> = dir
                .entries()
                .iter()
                .map(|entry| ListItem::new(entry.display_name().into_owned()))
                .collect();

            let highlight_style = if focused {
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .bg(Color::DarkGray)
            } else {
                Style::default().fg(Color::Magenta)
            };

            let list_widget = List::new(list_items)
                .block(block)
                .highlight_style(highlight_style)
                .highlight_symbol(if focused { "❯ " } else { "  " });

            let mut list_state = ListState::default();
            list_state.select(dir.selected());
            f.render_stateful_widget(list_widget, area, &mut list_state);
        }
    }
}

fn draw_status_line<S: DirectorySource>(f: &mut Frame, app: &TuiApp<S>, area: Rect) {
    let line = match &app.status {
        Some(status) => {
            let color = match status.kind {
                StatusKind::Error => Color::Yellow,
                StatusKind::Diagnostic => Color::Red,
            };
            Line::from(Span::styled(status.text.clone(), Style::default().fg(color)))
        }
        None => Line::from(Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray))),
    };
    f.render_widget(Paragraph::new(line), area);
}

pub(super) fn ui_frame<S: DirectorySource>(frame: &mut Frame, app: &TuiApp<S>) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Current path
            Constraint::Min(0),    // Panes
            Constraint::Length(1), // Status / help
        ])
        .split(frame.area());

    let pane_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(2, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(main_chunks[1]);

    let state = app.engine.state();
    let parent_title = match paths::parent(&state.current_path) {
        Some(parent) => parent.display().to_string(),
        None => "/".to_string(),
    };

    draw_header_block(frame, app, main_chunks[0]);
    draw_content_pane(frame, &state.previous, &parent_title, false, pane_chunks[0]);
    draw_content_pane(frame, &state.current, "Current", true, pane_chunks[1]);
    draw_content_pane(frame, &state.next, "Next", false, pane_chunks[2]);
    draw_status_line(frame, app, main_chunks[2]);
}
