//! Calculator engine: a pure reducer from button presses to display state
//!
//! [`CalculatorState::apply`] is total. Every event produces a new state,
//! and arithmetic failures never escape the engine; they turn the display
//! into the [`ERROR_DISPLAY`] sentinel instead.

mod format;
mod operations;

pub use format::{format_number, parse_number};
pub use operations::{check_finite, Operator};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for engine arithmetic
pub type CalcResult<T> = Result<T, CalcError>;

/// Text shown after a non-finite result
pub const ERROR_DISPLAY: &str = "Error";

/// Engine-internal failures; converted into state before leaving the reducer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Arithmetic produced infinity or NaN
    #[error("non-finite result: {value}")]
    NonFinite {
        /// The offending value
        value: f64,
    },
    /// Display text could not be read as a number
    #[error("not a number: {text:?}")]
    InvalidNumber {
        /// The text that failed to parse
        text: String,
    },
}

/// A single button press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    /// A digit key, `0..=9`
    Digit(u8),
    /// The decimal point
    Decimal,
    /// One of the four binary operators
    Operator(Operator),
    /// Resolve the pending operation
    Equals,
    /// Reset to the identity state
    Clear,
    /// Negate the displayed number
    ToggleSign,
    /// Divide the displayed number by 100
    Percent,
}

impl Event {
    /// Maps an input character to an event.
    ///
    /// Covers digits, `.`, the operator symbols (ASCII and display forms),
    /// `=`, `%`, `C` and `±`.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if let Some(d) = c.to_digit(10) {
            return Some(Self::Digit(d as u8));
        }
        match c {
            '.' => Some(Self::Decimal),
            '=' => Some(Self::Equals),
            '%' => Some(Self::Percent),
            'C' => Some(Self::Clear),
            '±' => Some(Self::ToggleSign),
            _ => Operator::from_char(c).map(Self::Operator),
        }
    }
}

/// The whole calculator state
///
/// Created as [`CalculatorState::new`] (the identity state) and advanced only
/// through [`CalculatorState::apply`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    display: String,
    operator: Option<Operator>,
    first_operand: Option<f64>,
    waiting_for_second_operand: bool,
    active_operator: Option<Operator>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Returns the identity state: display `"0"`, nothing pending
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            operator: None,
            first_operand: None,
            waiting_for_second_operand: false,
            active_operator: None,
        }
    }

    fn error() -> Self {
        Self {
            display: ERROR_DISPLAY.to_string(),
            ..Self::new()
        }
    }

    /// The text currently on the display
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The pending binary operator
    #[must_use]
    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// The left-hand operand of the pending operation
    #[must_use]
    pub fn first_operand(&self) -> Option<f64> {
        self.first_operand
    }

    /// True right after an operator, until a new operand is started
    #[must_use]
    pub fn is_waiting_for_second_operand(&self) -> bool {
        self.waiting_for_second_operand
    }

    /// The operator that should render highlighted
    #[must_use]
    pub fn active_operator(&self) -> Option<Operator> {
        self.active_operator
    }

    /// True when the display shows the error sentinel
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }

    /// Checks the structural invariants of the state.
    ///
    /// Holds for every state reachable from [`CalculatorState::new`].
    #[must_use]
    pub fn invariants_hold(&self) -> bool {
        let display_ok = !self.display.is_empty()
            && (self.is_error() || parse_number(&self.display).is_ok());
        let waiting_ok = !self.waiting_for_second_operand
            || (self.operator.is_some() && self.first_operand.is_some());
        let active_ok = self.active_operator.is_none() || self.active_operator == self.operator;
        let error_ok = !self.is_error()
            || (self.operator.is_none()
                && self.first_operand.is_none()
                && !self.waiting_for_second_operand);
        display_ok && waiting_ok && active_ok && error_ok
    }

    /// Computes the state that follows `event`
    #[must_use]
    pub fn apply(&self, event: Event) -> Self {
        match event {
            Event::Digit(d) => self.input_digit(d),
            Event::Decimal => self.input_decimal(),
            Event::Operator(op) => self.choose_operator(op),
            Event::Equals => self.equals(),
            Event::Clear => Self::new(),
            Event::ToggleSign => self.map_display(|v| -v),
            Event::Percent => self.map_display(|v| v / 100.0),
        }
    }

    /// Applies events in order, returning the final state
    #[must_use]
    pub fn apply_all<I>(&self, events: I) -> Self
    where
        I: IntoIterator<Item = Event>,
    {
        events
            .into_iter()
            .fold(self.clone(), |state, event| state.apply(event))
    }

    fn starts_fresh_operand(&self) -> bool {
        self.waiting_for_second_operand || self.is_error()
    }

    fn input_digit(&self, d: u8) -> Self {
        let Some(ch) = char::from_digit(u32::from(d), 10) else {
            return self.clone();
        };
        let display = if self.starts_fresh_operand() || self.display == "0" {
            ch.to_string()
        } else {
            let mut text = self.display.clone();
            text.push(ch);
            text
        };
        Self {
            display,
            waiting_for_second_operand: false,
            active_operator: None,
            ..self.clone()
        }
    }

    fn input_decimal(&self) -> Self {
        if self.starts_fresh_operand() {
            return Self {
                display: "0.".to_string(),
                waiting_for_second_operand: false,
                active_operator: None,
                ..self.clone()
            };
        }
        if self.display.contains('.') {
            return self.clone();
        }
        let mut next = self.clone();
        next.display.push('.');
        next
    }

    fn choose_operator(&self, op: Operator) -> Self {
        if self.waiting_for_second_operand && self.active_operator == Some(op) {
            return self.clone();
        }
        self.try_choose_operator(op)
            .unwrap_or_else(|err| self.recover(&err))
    }

    fn try_choose_operator(&self, op: Operator) -> CalcResult<Self> {
        let input = parse_number(&self.display)?;
        let (display, first) = match (self.first_operand, self.operator) {
            (Some(first), Some(pending)) => {
                let result = pending.evaluate(first, input)?;
                (format_number(result), result)
            }
            _ => (self.display.clone(), input),
        };
        Ok(Self {
            display,
            operator: Some(op),
            first_operand: Some(first),
            waiting_for_second_operand: true,
            active_operator: Some(op),
        })
    }

    fn equals(&self) -> Self {
        let (Some(first), Some(pending)) = (self.first_operand, self.operator) else {
            return Self {
                active_operator: None,
                ..self.clone()
            };
        };
        parse_number(&self.display)
            .and_then(|second| pending.evaluate(first, second))
            .map(|result| Self {
                display: format_number(result),
                ..Self::new()
            })
            .unwrap_or_else(|err| self.recover(&err))
    }

    fn map_display(&self, f: impl FnOnce(f64) -> f64) -> Self {
        parse_number(&self.display)
            .and_then(|v| check_finite(f(v)))
            .map(|v| Self {
                display: format_number(v),
                ..self.clone()
            })
            .unwrap_or_else(|_| self.clone())
    }

    fn recover(&self, err: &CalcError) -> Self {
        match err {
            CalcError::NonFinite { .. } => Self::error(),
            CalcError::InvalidNumber { .. } => self.clone(),
        }
    }
}
