//! # Header Component
//!
//! Top line: the configured title, then either the last lookup error or the
//! current status message.
//!
//! Purely presentational. It receives all data as props and has no internal
//! state:
//!
//! ```rust,ignore
//! let mut header = Header::new(&app.title, &app.status_message, app.error.as_deref());
//! header.render(frame, area);
//! ```
//!
//! The error takes priority over the status message, so a failed lookup
//! stays visible until the user types or submits again.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct Header<'a> {
    pub title: &'a str,
    pub status_message: &'a str,
    pub error: Option<&'a str>,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, status_message: &'a str, error: Option<&'a str>) -> Self {
        Self {
            title,
            status_message,
            error,
        }
    }

    fn line(&self) -> Line<'a> {
        let mut spans = vec![Span::styled(
            self.title,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )];

        if let Some(error) = self.error {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                format!("✗ {error}"),
                Style::default().fg(Color::Red),
            ));
        } else if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                self.status_message,
                Style::default().fg(Color::DarkGray),
            ));
        }

        Line::from(spans)
    }
}

impl<'a> Component for Header<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.line(), area);
    }
}
