//! tapcalc: a four-function tap calculator
//!
//! The core is a pure reducer: every button press is an [`engine::Event`]
//! and [`engine::CalculatorState::apply`] returns the next state. Chained
//! operators evaluate eagerly, left to right, with no precedence. Division by
//! zero and overflow show `"Error"` until the next number or Clear.
//!
//! The `tui` feature (on by default) adds a terminal frontend with a
//! clickable 4-column keypad that resizes with the screen.
//!
//! # Example
//!
//! ```rust
//! use tapcalc::prelude::*;
//!
//! let state = CalculatorState::new().apply_all([
//!     Event::Digit(2),
//!     Event::Operator(Operator::Add),
//!     Event::Digit(3),
//!     Event::Operator(Operator::Multiply),
//!     Event::Digit(4),
//!     Event::Equals,
//! ]);
//! assert_eq!(state.display(), "20");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod cli;
pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod logging;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{AppConfig, Verbosity};
    pub use crate::driver::{CalculatorDriver, EngineDriver};
    pub use crate::engine::{CalcError, CalcResult, CalculatorState, Event, Operator};
    pub use crate::error::{AppError, AppResult};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
    #[cfg(feature = "tui")]
    pub use crate::tui::{CalculatorApp, ScreenMetrics};
}
