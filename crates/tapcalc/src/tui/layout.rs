//! Responsive screen metrics
//!
//! Button size follows the screen: four buttons per row within a fixed
//! maximum width, recomputed on every resize notification.

use ratatui::layout::Rect;

use super::keypad::{KEYPAD_COLS, KEYPAD_ROWS};
pub use crate::config::DEFAULT_MAX_WIDTH;

/// Height of the display panel, borders included
pub const DISPLAY_HEIGHT: u16 = 3;
/// Narrowest usable button
pub const MIN_BUTTON_WIDTH: u16 = 5;
/// Buttons stop growing vertically past this height
pub const MAX_BUTTON_HEIGHT: u16 = 3;
/// Narrowest keypad (and smallest accepted maximum width)
pub const MIN_KEYPAD_WIDTH: u16 = KEYPAD_COLS * MIN_BUTTON_WIDTH + 2;

/// Size of one keypad cell in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonSize {
    /// Columns per button
    pub width: u16,
    /// Rows per button
    pub height: u16,
}

/// Where each part of the screen goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// The display panel
    pub display: Rect,
    /// The keypad, borders included
    pub keypad: Rect,
    /// One line of key hints, when there is room for it
    pub hint: Option<Rect>,
}

/// Current screen dimensions plus the width cap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenMetrics {
    width: u16,
    height: u16,
    max_width: u16,
}

impl Default for ScreenMetrics {
    fn default() -> Self {
        Self::from_size(80, 24, DEFAULT_MAX_WIDTH)
    }
}

impl ScreenMetrics {
    /// Creates metrics for a screen of `width` x `height`
    #[must_use]
    pub fn from_size(width: u16, height: u16, max_width: u16) -> Self {
        Self {
            width,
            height,
            max_width,
        }
    }

    /// Updates the screen size after a resize notification
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Screen width
    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Screen height
    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Width available to the calculator
    #[must_use]
    pub fn content_width(&self) -> u16 {
        self.width.min(self.max_width)
    }

    /// Size of one button, or `None` if the grid does not fit
    #[must_use]
    pub fn button_size(&self) -> Option<ButtonSize> {
        let width = self.content_width().saturating_sub(2) / KEYPAD_COLS;
        let height = (self.height.saturating_sub(DISPLAY_HEIGHT + 2) / KEYPAD_ROWS)
            .min(MAX_BUTTON_HEIGHT);
        (width >= MIN_BUTTON_WIDTH && height >= 1).then_some(ButtonSize { width, height })
    }

    /// Lays out display and keypad, horizontally centred
    #[must_use]
    pub fn layout(&self) -> Option<ScreenLayout> {
        let size = self.button_size()?;
        let keypad_width = size.width * KEYPAD_COLS + 2;
        let keypad_height = size.height * KEYPAD_ROWS + 2;
        let x = (self.width - keypad_width) / 2;

        let display = Rect::new(x, 0, keypad_width, DISPLAY_HEIGHT);
        let keypad = Rect::new(x, DISPLAY_HEIGHT, keypad_width, keypad_height);
        let hint_y = DISPLAY_HEIGHT + keypad_height;
        let hint = (hint_y < self.height).then(|| Rect::new(x, hint_y, keypad_width, 1));
        Some(ScreenLayout {
            display,
            keypad,
            hint,
        })
    }
}
