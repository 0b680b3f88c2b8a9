use crate::board::seed_board;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::state::{BoardEvent, State};
use crate::ui::Theme;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, stdout};
use tui_logger::{init_logger, set_default_level};

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: State,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub fn start(config: Config) -> AppResult<()> {
        init_logger(LevelFilter::Trace).map_err(|e| AppError::Logger(format!("{:?}", e)))?;
        set_default_level(LevelFilter::Debug);

        info!("Starting application...");
        let theme = Theme::from_name(&config.theme_name).unwrap_or_else(|| {
            warn!(
                "Unknown theme '{}', falling back to '{}' (available: {})",
                config.theme_name,
                Theme::default().name,
                Theme::available_themes().join(", ")
            );
            Theme::default()
        });
        let board = seed_board(&config.columns, config.placeholder, config.seed)?;
        info!(
            "Seeded {} columns with {} items",
            board.containers().len(),
            board.item_count()
        );

        let mut app = App {
            state: State::new(board, config.hotkeys, theme),
        };
        app.start_ui()?;

        info!("Exiting application...");
        Ok(())
    }

    /// Prepare the terminal, run the render loop on the main thread and
    /// restore the terminal afterwards, even if the loop failed.
    ///
    fn start_ui(&mut self) -> AppResult<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let result = self.run(&mut terminal);

        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
        terminal.show_cursor()?;

        result
    }

    /// Begin the terminal event poll on a separate thread before drawing
    /// frames until an exit request or unrecoverable error.
    ///
    fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> AppResult<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        let mut columns_ready = false;
        loop {
            tui_logger::move_events();
            terminal.draw(|frame| crate::ui::render(frame, &mut self.state))?;

            // Column handles exist once the first frame is drawn.
            if !columns_ready {
                self.state.dispatch(BoardEvent::ColumnsReady);
                columns_ready = true;
            }

            if !terminal_event_handler.handle_next(&mut self.state)? {
                debug!("Received application exit request.");
                break;
            }
        }
        Ok(())
    }
}
