//! Keyboard input handling
//!
//! Maps terminal key events onto calculator events; anything unmapped is
//! ignored rather than rejected.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::engine::{Event, Operator};

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a calculator button
    Press(Event),
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        let calc_event = match code {
            KeyCode::Char(c) => match c {
                '.' | ',' => Some(Event::Decimal),
                '=' => Some(Event::Equals),
                '%' => Some(Event::Percent),
                'n' | '_' => Some(Event::ToggleSign),
                'c' | 'C' => Some(Event::Clear),
                'q' => return KeyAction::Quit,
                _ => c
                    .to_digit(10)
                    .map(|d| Event::Digit(d as u8))
                    .or_else(|| Operator::from_char(c).map(Event::Operator)),
            },
            KeyCode::Enter => Some(Event::Equals),
            KeyCode::Esc | KeyCode::Delete => Some(Event::Clear),
            _ => None,
        };
        calc_event.map_or(KeyAction::None, KeyAction::Press)
    }
}

/// Key hints shown under the keypad
pub const HELP_LINE: &str = "Enter = · Esc clear · n ± · q quit";

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyAction {
        InputHandler::new().handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(code: KeyCode) -> KeyAction {
        InputHandler::new().handle_key(KeyEvent::new(code, KeyModifiers::CONTROL))
    }

    #[test]
    fn test_input_handler_debug() {
        let handler = InputHandler;
        assert!(format!("{handler:?}").contains("InputHandler"));
    }

    #[test]
    fn test_digit_keys() {
        for d in 0..=9u8 {
            let c = char::from(b'0' + d);
            assert_eq!(key(KeyCode::Char(c)), KeyAction::Press(Event::Digit(d)));
        }
    }

    #[test]
    fn test_operator_keys() {
        for op in Operator::ALL {
            assert_eq!(
                key(KeyCode::Char(op.ascii())),
                KeyAction::Press(Event::Operator(op))
            );
        }
        assert_eq!(
            key(KeyCode::Char('x')),
            KeyAction::Press(Event::Operator(Operator::Multiply))
        );
    }

    #[test]
    fn test_shifted_operator_still_maps() {
        let handler = InputHandler::new();
        let event = KeyEvent::new(KeyCode::Char('*'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key(event),
            KeyAction::Press(Event::Operator(Operator::Multiply))
        );
    }

    #[test]
    fn test_function_keys() {
        assert_eq!(key(KeyCode::Char('.')), KeyAction::Press(Event::Decimal));
        assert_eq!(key(KeyCode::Char(',')), KeyAction::Press(Event::Decimal));
        assert_eq!(key(KeyCode::Char('=')), KeyAction::Press(Event::Equals));
        assert_eq!(key(KeyCode::Enter), KeyAction::Press(Event::Equals));
        assert_eq!(key(KeyCode::Char('%')), KeyAction::Press(Event::Percent));
        assert_eq!(key(KeyCode::Char('n')), KeyAction::Press(Event::ToggleSign));
        assert_eq!(key(KeyCode::Esc), KeyAction::Press(Event::Clear));
        assert_eq!(key(KeyCode::Char('c')), KeyAction::Press(Event::Clear));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(key(KeyCode::Char('q')), KeyAction::Quit);
        assert_eq!(ctrl(KeyCode::Char('c')), KeyAction::Quit);
        assert_eq!(ctrl(KeyCode::Char('q')), KeyAction::Quit);
    }

    #[test]
    fn test_ignored_keys() {
        assert_eq!(key(KeyCode::Char('a')), KeyAction::None);
        assert_eq!(key(KeyCode::Tab), KeyAction::None);
        assert_eq!(key(KeyCode::Left), KeyAction::None);
        assert_eq!(ctrl(KeyCode::Char('l')), KeyAction::None);
    }
}
