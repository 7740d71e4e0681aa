//! Calculator keypad: button grid, geometry and hit-testing
//!
//! The same geometry drives rendering and click handling, so a button is
//! always hit exactly where it is drawn.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::engine::{Event, Operator};

/// Number of grid columns
pub const KEYPAD_COLS: u16 = 4;
/// Number of grid rows
pub const KEYPAD_ROWS: u16 = 5;

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Text on the button
    pub label: &'static str,
    /// Event dispatched when the button is pressed
    pub event: Event,
    /// Grid row (0-indexed)
    pub row: u16,
    /// First grid column (0-indexed)
    pub col: u16,
    /// Number of columns the button covers
    pub span: u16,
    /// Whether the button was the most recent input
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates a one-column button
    #[must_use]
    pub fn new(label: &'static str, event: Event, row: u16, col: u16) -> Self {
        Self {
            label,
            event,
            row,
            col,
            span: 1,
            pressed: false,
        }
    }

    /// Creates a digit button
    #[must_use]
    pub fn digit(d: u8, row: u16, col: u16) -> Self {
        let label = DIGIT_LABELS.get(usize::from(d)).copied().unwrap_or("?");
        Self::new(label, Event::Digit(d), row, col)
    }

    /// Creates an operator button
    #[must_use]
    pub fn operator(op: Operator, row: u16, col: u16) -> Self {
        Self::new(op.symbol(), Event::Operator(op), row, col)
    }

    /// Widens the button to cover `span` columns
    #[must_use]
    pub fn spanning(mut self, span: u16) -> Self {
        self.span = span.max(1);
        self
    }

    /// Returns true if the button covers grid cell (row, col)
    #[must_use]
    pub fn covers(&self, row: u16, col: u16) -> bool {
        row == self.row && col >= self.col && col < self.col + self.span
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The keypad layout, a 5x4 grid
/// ```text
/// [ C ] [ ± ] [ % ] [ ÷ ]
/// [ 7 ] [ 8 ] [ 9 ] [ × ]
/// [ 4 ] [ 5 ] [ 6 ] [ − ]
/// [ 1 ] [ 2 ] [ 3 ] [ + ]
/// [    0    ] [ . ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            KeypadButton::new("C", Event::Clear, 0, 0),
            KeypadButton::new("±", Event::ToggleSign, 0, 1),
            KeypadButton::new("%", Event::Percent, 0, 2),
            KeypadButton::operator(Operator::Divide, 0, 3),
            KeypadButton::digit(7, 1, 0),
            KeypadButton::digit(8, 1, 1),
            KeypadButton::digit(9, 1, 2),
            KeypadButton::operator(Operator::Multiply, 1, 3),
            KeypadButton::digit(4, 2, 0),
            KeypadButton::digit(5, 2, 1),
            KeypadButton::digit(6, 2, 2),
            KeypadButton::operator(Operator::Subtract, 2, 3),
            KeypadButton::digit(1, 3, 0),
            KeypadButton::digit(2, 3, 1),
            KeypadButton::digit(3, 3, 2),
            KeypadButton::operator(Operator::Add, 3, 3),
            KeypadButton::digit(0, 4, 0).spanning(2),
            KeypadButton::new(".", Event::Decimal, 4, 2),
            KeypadButton::new("=", Event::Equals, 4, 3),
        ];
        Self { buttons }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (u16, u16) {
        (KEYPAD_ROWS, KEYPAD_COLS)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Returns the index of the button covering grid cell (row, col)
    #[must_use]
    pub fn index_at(&self, row: u16, col: u16) -> Option<usize> {
        self.buttons.iter().position(|b| b.covers(row, col))
    }

    /// Gets the button covering grid cell (row, col)
    #[must_use]
    pub fn get_button_at(&self, row: u16, col: u16) -> Option<&KeypadButton> {
        self.index_at(row, col).and_then(|i| self.buttons.get(i))
    }

    /// Finds a button by its label
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<usize> {
        self.buttons.iter().position(|b| b.label == label)
    }

    /// Finds the button that dispatches `event`
    #[must_use]
    pub fn find_button_by_event(&self, event: Event) -> Option<usize> {
        self.buttons.iter().position(|b| b.event == event)
    }

    /// Marks a button as pressed
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Marks only the button for `event` as pressed
    pub fn highlight_event(&mut self, event: Event) {
        self.release_all();
        if let Some(idx) = self.find_button_by_event(event) {
            self.press_button(idx);
        }
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Splits `area` into the bordered inner rect and one cell's size
    fn grid(area: Rect) -> Option<(Rect, u16, u16)> {
        let inner = Rect {
            x: area.x.saturating_add(1),
            y: area.y.saturating_add(1),
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };
        let cell_w = inner.width / KEYPAD_COLS;
        let cell_h = inner.height / KEYPAD_ROWS;
        (cell_w > 0 && cell_h > 0).then_some((inner, cell_w, cell_h))
    }

    /// Returns the screen rect a button occupies inside `area`
    #[must_use]
    pub fn cell_rect(&self, area: Rect, index: usize) -> Option<Rect> {
        let (inner, cell_w, cell_h) = Self::grid(area)?;
        let btn = self.buttons.get(index)?;
        Some(Rect {
            x: inner.x + btn.col * cell_w,
            y: inner.y + btn.row * cell_h,
            width: btn.span * cell_w,
            height: cell_h,
        })
    }

    /// Converts a click position to a button index
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        let (inner, cell_w, cell_h) = Self::grid(area)?;
        if x < inner.x || y < inner.y {
            return None;
        }
        let col = (x - inner.x) / cell_w;
        let row = (y - inner.y) / cell_h;
        if row >= KEYPAD_ROWS || col >= KEYPAD_COLS {
            return None;
        }
        self.index_at(row, col)
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    active: Option<Operator>,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self {
            keypad,
            active: None,
        }
    }

    /// Highlights the button of the active operator
    #[must_use]
    pub fn active(mut self, active: Option<Operator>) -> Self {
        self.active = active;
        self
    }

    fn style_for(&self, btn: &KeypadButton) -> Style {
        let base = match btn.event {
            Event::Operator(op) if self.active == Some(op) => Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            Event::Operator(_) => Style::default().fg(Color::Yellow),
            Event::Equals => Style::default().fg(Color::Green),
            Event::Clear => Style::default().fg(Color::Red),
            Event::ToggleSign | Event::Percent => Style::default().fg(Color::Cyan),
            Event::Digit(_) | Event::Decimal => Style::default().fg(Color::White),
        };
        if btn.pressed {
            base.add_modifier(Modifier::REVERSED)
        } else {
            base
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .render(area, buf);

        for (index, btn) in self.keypad.buttons().enumerate() {
            let Some(cell) = self.keypad.cell_rect(area, index) else {
                return; // Too small to render
            };
            let style = self.style_for(btn);
            let label_width = btn.label.chars().count() as u16;

            // Boxed buttons once there is room for a border
            let (text, text_width, text_area) = if cell.height >= 3 && cell.width >= 3 {
                let block = Block::default().borders(Borders::ALL).border_style(style);
                let inner = block.inner(cell);
                block.render(cell, buf);
                (btn.label.to_string(), label_width, inner)
            } else {
                (format!("[{}]", btn.label), label_width + 2, cell)
            };

            let x = text_area.x + text_area.width.saturating_sub(text_width) / 2;
            let y = text_area.y + text_area.height / 2;
            buf.set_string(x, y, text, style);
        }
    }
}
