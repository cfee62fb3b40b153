//! Interactive terminal session

use std::io;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pocket_calc::tui::{keypad_area, render, CalculatorApp, InputHandler, KeyAction};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::error::CliResult;

/// Runs the calculator until the user quits
///
/// The terminal is restored even when the event loop fails.
pub fn run_tui(config: &CliConfig) -> CliResult<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = CalculatorApp::with_config(&config.calculator);
    info!(theme = %app.theme(), "terminal session started");
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    info!(history = app.calculator().history().len(), "terminal session ended");

    result
}

/// Event loop, separated from terminal setup so it runs on any backend
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut CalculatorApp) -> CliResult<()> {
    let input = InputHandler::new();

    while !app.should_quit() {
        let mut frame_area = Rect::default();
        terminal.draw(|frame| {
            frame_area = frame.area();
            render(app, frame);
        })?;

        let action = match event::read()? {
            Event::Key(key) if key.kind == event::KeyEventKind::Press => input.handle_key(key),
            Event::Mouse(mouse) => input.handle_mouse(mouse, app.keypad(), keypad_area(frame_area)),
            _ => KeyAction::None,
        };
        if action != KeyAction::None {
            debug!(?action, "input");
        }
        app.handle(action);
    }
    Ok(())
}
