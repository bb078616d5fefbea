use super::app_logic::TuiApp;
use super::app_state::NavCommand;
use crate::dir_reader::DirectorySource;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

pub(super) fn handle_events<S: DirectorySource>(app: &mut TuiApp<S>) -> Result<()> {
    if event::poll(Duration::from_millis(50))? {
        if let Event::Key(key_event) = event::read()? {
            if key_event.kind == KeyEventKind::Press {
                if let Some(command) = map_key(key_event) {
                    app.apply(command);
                }
            }
        }
    }
    Ok(())
}

pub(super) fn map_key(key_event: KeyEvent) -> Option<NavCommand> {
    match key_event.code {
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(NavCommand::Quit)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(NavCommand::Quit),
        KeyCode::Down | KeyCode::Char('j') => Some(NavCommand::MoveDown),
        KeyCode::Up | KeyCode::Char('k') => Some(NavCommand::MoveUp),
        KeyCode::Right | KeyCode::Enter | KeyCode::Char('l') => Some(NavCommand::Enter),
        KeyCode::Left | KeyCode::Backspace | KeyCode::Char('h') => Some(NavCommand::Parent),
        _ => None,
    }
}
