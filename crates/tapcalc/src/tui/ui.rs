//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
    Frame,
};

use super::app::CalculatorApp;
use super::input::HELP_LINE;
use super::keypad::KeypadWidget;

/// Title on the display panel
pub const TITLE: &str = " tapcalc ";

/// Shown instead of the keypad when the grid does not fit
pub const TOO_SMALL: &str = "Terminal too small";

/// Marks display text cut off on the left
pub const ELLIPSIS: char = '…';

/// Fits `text` into `width` columns.
///
/// Overlong text keeps its trailing characters behind a leading [`ELLIPSIS`],
/// so the digit being typed stays visible.
#[must_use]
pub fn fit_display(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let tail: String = text.chars().skip(len - (width - 1)).collect();
    format!("{ELLIPSIS}{tail}")
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let state = self.app.state();
        let style = if state.is_error() {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        };

        let shown = fit_display(state.display(), usize::from(area.width.saturating_sub(2)));
        Paragraph::new(Span::styled(shown, style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(TITLE)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(area, buf);
    }

    fn render_too_small(area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(TOO_SMALL, Style::default().fg(Color::Red)))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Metrics may lag the real frame by one resize; never draw outside it
        let layout = self
            .app
            .metrics()
            .layout()
            .filter(|l| area.intersection(l.keypad) == l.keypad);

        let Some(layout) = layout else {
            Self::render_too_small(area, buf);
            return;
        };

        self.render_display(layout.display, buf);
        KeypadWidget::new(self.app.keypad())
            .active(self.app.state().active_operator())
            .render(layout.keypad, buf);

        if let Some(hint) = layout.hint {
            Paragraph::new(Span::styled(HELP_LINE, Style::default().fg(Color::DarkGray)))
                .alignment(Alignment::Center)
                .render(hint.intersection(area), buf);
        }
    }
}
