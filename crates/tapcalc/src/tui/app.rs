//! TUI application state
//!
//! Owns the single calculator state for the lifetime of the screen and routes
//! every input (key, click, resize) through one dispatch path.

use tracing::{debug, warn};

use super::input::KeyAction;
use super::keypad::Keypad;
use super::layout::ScreenMetrics;
use crate::engine::{CalculatorState, Event};

/// Calculator application state
#[derive(Debug, Default)]
pub struct CalculatorApp {
    state: CalculatorState,
    keypad: Keypad,
    metrics: ScreenMetrics,
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates an app for a screen described by `metrics`
    #[must_use]
    pub fn new(metrics: ScreenMetrics) -> Self {
        Self {
            state: CalculatorState::new(),
            keypad: Keypad::new(),
            metrics,
            should_quit: false,
        }
    }

    /// Returns the calculator state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the text on the display
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the current screen metrics
    #[must_use]
    pub fn metrics(&self) -> &ScreenMetrics {
        &self.metrics
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Runs one state transition and marks the matching button as pressed
    pub fn dispatch(&mut self, event: Event) {
        let next = self.state.apply(event);
        if next.is_error() && !self.state.is_error() {
            warn!(?event, "arithmetic result is not finite");
        }
        debug!(?event, display = next.display(), "dispatch");
        self.state = next;
        self.keypad.highlight_event(event);
    }

    /// Handles a mapped keyboard action
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Press(event) => self.dispatch(event),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Handles a click at screen position (x, y).
    ///
    /// Returns the dispatched event, or `None` if no button was hit.
    pub fn click(&mut self, x: u16, y: u16) -> Option<Event> {
        let layout = self.metrics.layout()?;
        let index = self.keypad.hit_test(layout.keypad, x, y)?;
        let event = self.keypad.get_button(index)?.event;
        self.dispatch(event);
        Some(event)
    }

    /// Handles a screen resize; calculator state is untouched
    pub fn resize(&mut self, width: u16, height: u16) {
        self.metrics.resize(width, height);
        debug!(width, height, "resize");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Operator;

    fn center_of(app: &CalculatorApp, event: Event) -> (u16, u16) {
        let layout = app.metrics().layout().unwrap();
        let index = app.keypad().find_button_by_event(event).unwrap();
        let cell = app.keypad().cell_rect(layout.keypad, index).unwrap();
        (cell.x + cell.width / 2, cell.y + cell.height / 2)
    }

    #[test]
    fn test_app_new() {
        let app = CalculatorApp::default();
        assert_eq!(app.display(), "0");
        assert_eq!(app.state(), &CalculatorState::new());
        assert!(!app.should_quit());
        assert!(app.keypad().buttons().all(|b| !b.pressed));
    }

    #[test]
    fn test_dispatch_updates_state_and_highlight() {
        let mut app = CalculatorApp::default();
        app.dispatch(Event::Digit(7));
        assert_eq!(app.display(), "7");
        let pressed: Vec<_> = app.keypad().buttons().filter(|b| b.pressed).collect();
        assert_eq!(pressed.len(), 1);
        assert_eq!(pressed[0].label, "7");
    }

    #[test]
    fn test_handle_action() {
        let mut app = CalculatorApp::default();
        app.handle_action(KeyAction::Press(Event::Digit(4)));
        app.handle_action(KeyAction::None);
        assert_eq!(app.display(), "4");
        app.handle_action(KeyAction::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_click_dispatches_button() {
        let mut app = CalculatorApp::default();
        for event in [
            Event::Digit(7),
            Event::Operator(Operator::Subtract),
            Event::Digit(2),
            Event::Equals,
        ] {
            let (x, y) = center_of(&app, event);
            assert_eq!(app.click(x, y), Some(event));
        }
        assert_eq!(app.display(), "5");
    }

    #[test]
    fn test_click_outside_keypad() {
        let mut app = CalculatorApp::default();
        assert_eq!(app.click(0, 0), None);
        assert_eq!(app.state(), &CalculatorState::new());
    }

    #[test]
    fn test_click_when_too_small() {
        let mut app = CalculatorApp::new(ScreenMetrics::from_size(10, 5, 44));
        assert_eq!(app.click(5, 4), None);
    }

    #[test]
    fn test_resize_keeps_state() {
        let mut app = CalculatorApp::default();
        app.dispatch(Event::Digit(3));
        app.dispatch(Event::Operator(Operator::Add));
        let before = app.state().clone();
        app.resize(40, 12);
        assert_eq!(app.state(), &before);
        assert_eq!(app.metrics().width(), 40);
        // Clicks follow the new geometry
        let (x, y) = center_of(&app, Event::Digit(9));
        assert_eq!(app.click(x, y), Some(Event::Digit(9)));
        assert_eq!(app.display(), "9");
    }
}
