mod app_logic;
mod app_state;
mod event_handler;
mod ui_renderer;

pub use self::run_tui::run_tui;

// Main loop plus terminal setup/teardown
mod run_tui {
    use super::app_logic::TuiApp;
    use super::event_handler::handle_events;
    use super::ui_renderer::ui_frame;
    use crate::engine::NavigationEngine;
    use anyhow::Result;
    use crossterm::{
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    };
    use ratatui::prelude::{CrosstermBackend, Terminal};
    use std::io::{self, Stdout};
    use tracing::info;

    pub fn run_tui(engine: NavigationEngine) -> Result<()> {
        let mut app = TuiApp::new(engine);
        let mut terminal = init_terminal()?;

        let loop_result = event_loop(&mut terminal, &mut app);
        // Always hand the terminal back, even when drawing failed.
        restore_terminal(terminal)?;
        loop_result?;

        info!(path = %app.engine.current_path().display(), "explorer closed");
        Ok(())
    }

    fn event_loop(
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        app: &mut TuiApp,
    ) -> Result<()> {
        while !app.quit {
            terminal.draw(|frame| ui_frame(frame, &*app))?;
            handle_events(app)?;
        }
        Ok(())
    }

    fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        // Leave the shell usable even though the explorer cannot start.
        rollback_on_error(enter_alternate_screen(), || {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
        })
    }

    fn rollback_on_error<T>(result: Result<T>, rollback: impl FnOnce()) -> Result<T> {
        if result.is_err() {
            rollback();
        }
        result
    }

    fn enter_alternate_screen() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor().map_err(Into::into)
    }

}
