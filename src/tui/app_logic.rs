use super::app_state::{NavCommand, StatusKind, StatusMessage};
use crate::dir_reader::{DirectorySource, FsDirectorySource};
use crate::engine::NavigationEngine;
use crate::error::NavigationError;
use tracing::debug;

pub struct TuiApp<S: DirectorySource = FsDirectorySource> {
    pub(super) engine: NavigationEngine<S>,
    pub(super) status: Option<StatusMessage>,
    pub(super) quit: bool,
}

impl<S: DirectorySource> TuiApp<S> {
    pub fn new(engine: NavigationEngine<S>) -> Self {
        TuiApp {
            engine,
            status: None,
            quit: false,
        }
    }

    pub(super) fn apply(&mut self, command: NavCommand) {
        debug!(?command, "applying navigation command");
        if command == NavCommand::Enter {
            if let Some(entry) = self.engine.selected_entry() {
                debug!(entry = %entry.display_name(), "entering selection");
            }
        }
        let result = match command {
            NavCommand::MoveUp => self.engine.move_selection_up(),
            NavCommand::MoveDown => self.engine.move_selection_down(),
            NavCommand::Enter => self.engine.enter(),
            NavCommand::Parent => self.engine.go_to_parent_directory(),
            NavCommand::Quit => {
                self.quit = true;
                Ok(())
            }
        };

        self.status = match result {
            Ok(()) => None,
            Err(err) => Some(status_for(&err)),
        };
    }
}

fn status_for(err: &NavigationError) -> StatusMessage {
    if err.is_inconsistent() {
        StatusMessage {
            kind: StatusKind::Diagnostic,
            text: format!("{err} (press h to retry or q to quit)"),
        }
    } else {
        StatusMessage {
            kind: StatusKind::Error,
            text: err.to_string(),
        }
    }
}
