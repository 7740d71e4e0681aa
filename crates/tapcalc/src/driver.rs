//! Calculator drivers
//!
//! A scenario written against [`CalculatorDriver`] runs unchanged against the
//! bare engine and against the full terminal app, where every press is a
//! mouse click on the rendered keypad.

use crate::engine::{CalculatorState, Event, Operator};

/// Something that accepts button presses and shows a display
pub trait CalculatorDriver {
    /// Presses the button for `event`
    fn press(&mut self, event: Event);

    /// Text currently on the display
    fn display(&self) -> String;

    /// Operator currently highlighted
    fn active_operator(&self) -> Option<Operator>;

    /// Presses every event in order
    fn press_all(&mut self, events: &[Event]) {
        for &event in events {
            self.press(event);
        }
    }

    /// Presses one button per character of `keys`.
    ///
    /// Characters are resolved with [`Event::from_char`]; whitespace and
    /// anything without a button are skipped.
    fn enter(&mut self, keys: &str) {
        for event in keys.chars().filter_map(Event::from_char) {
            self.press(event);
        }
    }

    /// Presses Clear
    fn clear(&mut self) {
        self.press(Event::Clear);
    }
}

/// Drives the reducer directly
#[derive(Debug, Default, Clone)]
pub struct EngineDriver {
    state: CalculatorState,
}

impl EngineDriver {
    /// Creates a driver in the identity state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }
}

impl CalculatorDriver for EngineDriver {
    fn press(&mut self, event: Event) {
        self.state = self.state.apply(event);
    }

    fn display(&self) -> String {
        self.state.display().to_string()
    }

    fn active_operator(&self) -> Option<Operator> {
        self.state.active_operator()
    }
}

#[cfg(feature = "tui")]
mod tui_driver {
    use super::{CalculatorDriver, Event, Operator};
    use crate::tui::{CalculatorApp, ScreenMetrics};

    /// Drives the terminal app by clicking the centre of each button
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a driver on a default-sized screen
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a driver on a screen of `width` x `height`
        #[must_use]
        pub fn with_size(width: u16, height: u16) -> Self {
            let metrics = ScreenMetrics::from_size(width, height, crate::config::DEFAULT_MAX_WIDTH);
            Self {
                app: CalculatorApp::new(metrics),
            }
        }

        /// Returns the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns the underlying app mutably
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }

        fn button_center(&self, event: Event) -> Option<(u16, u16)> {
            let layout = self.app.metrics().layout()?;
            let keypad = self.app.keypad();
            let index = keypad.find_button_by_event(event)?;
            let cell = keypad.cell_rect(layout.keypad, index)?;
            Some((cell.x + cell.width / 2, cell.y + cell.height / 2))
        }
    }

    impl CalculatorDriver for TuiDriver {
        /// Clicks the button; falls back to dispatching when the keypad is
        /// not on screen or has no such button
        fn press(&mut self, event: Event) {
            let clicked = self
                .button_center(event)
                .and_then(|(x, y)| self.app.click(x, y));
            if clicked.is_none() {
                self.app.dispatch(event);
            }
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn active_operator(&self) -> Option<Operator> {
            self.app.state().active_operator()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;
