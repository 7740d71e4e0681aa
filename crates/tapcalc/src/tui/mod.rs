//! Terminal frontend for the calculator

mod app;
mod input;
mod keypad;
mod layout;
mod terminal;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction, HELP_LINE};
pub use keypad::{Keypad, KeypadButton, KeypadWidget, KEYPAD_COLS, KEYPAD_ROWS};
pub use layout::{
    ButtonSize, ScreenLayout, ScreenMetrics, DEFAULT_MAX_WIDTH, DISPLAY_HEIGHT, MIN_KEYPAD_WIDTH,
};
pub use terminal::TerminalSession;
pub use ui::{fit_display, render, CalculatorUI, ELLIPSIS};

use crossterm::event::{self, Event as TermEvent, KeyEventKind, MouseButton, MouseEventKind};
use tracing::info;

use crate::config::AppConfig;
use crate::error::AppResult;

/// Runs the calculator until the user quits
pub fn run(config: &AppConfig) -> AppResult<()> {
    let mut session = TerminalSession::start()?;
    let (width, height) = session.size()?;
    let mut app = CalculatorApp::new(ScreenMetrics::from_size(width, height, config.max_width));
    let input = InputHandler::new();
    info!(width, height, max_width = config.max_width, "calculator started");

    while !app.should_quit() {
        session.draw(|frame| render(&app, frame))?;

        match event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                app.handle_action(input.handle_key(key));
            }
            TermEvent::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                app.click(mouse.column, mouse.row);
            }
            TermEvent::Resize(width, height) => app.resize(width, height),
            _ => {}
        }
    }

    info!(display = app.display(), "calculator stopped");
    Ok(())
}
