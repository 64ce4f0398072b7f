//! # SearchBox Component
//!
//! The username field and its "Add card" button.
//!
//! ## Responsibilities
//!
//! - Capture and edit single-line text input (chars, paste, backspace,
//!   delete, cursor movement)
//! - Emit `Changed(text)` with the full new text after every edit
//! - Emit `Submit` on Enter or a click on the button
//! - Show the form as disabled, with a spinner, while a lookup is in flight
//!
//! ## State Management
//!
//! The authoritative input string lives in `core::search::SearchForm`. The
//! buffer here is an editing copy; the event loop re-syncs it with
//! [`SearchBox::sync`] whenever the core value changes (e.g. cleared after a
//! successful lookup). `disabled`, `spinner_frame` and `pending` are props.

mod cursor;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::{CursorState, next_char_boundary, prev_char_boundary};

pub const PLACEHOLDER: &str = "Github username";
pub const BUTTON_LABEL: &str = "Add card";
/// Rows the search box needs: one text row plus top and bottom border.
pub const SEARCH_BOX_HEIGHT: u16 = 3;

const BUTTON_WIDTH: u16 = 14;
const BORDER_OFFSET: u16 = 1;
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// The field now holds this text
    Changed(String),
    /// User submitted the form (Enter or button click)
    Submit,
}

pub struct SearchBox {
    /// Editing copy of the input (Internal State)
    pub buffer: String,
    /// Lookup in flight; editing is blocked (Prop)
    pub disabled: bool,
    /// Spinner animation frame (Prop)
    pub spinner_frame: usize,
    cursor: CursorState,
    /// Where the button was last drawn, for mouse hit testing
    button_area: Rect,
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            disabled: false,
            spinner_frame: 0,
            cursor: CursorState::new(),
            button_area: Rect::default(),
        }
    }

    /// Adopt `text` as the buffer if it differs, moving the cursor to the end.
    pub fn sync(&mut self, text: &str) {
        if self.buffer != text {
            self.buffer = text.to_string();
            self.cursor.move_to_end(&self.buffer);
        }
    }

    /// Whether a screen position falls on the "Add card" button.
    pub fn is_button_hit(&self, column: u16, row: u16) -> bool {
        self.button_area.contains(Position { x: column, y: row })
    }

    fn changed(&self) -> Option<SearchEvent> {
        Some(SearchEvent::Changed(self.buffer.clone()))
    }

    fn render_input(&mut self, frame: &mut Frame, area: Rect) {
        let inner = area.width.saturating_sub(2 * BORDER_OFFSET);
        self.cursor.update_scroll_offset(&self.buffer, inner);

        let border_style = if self.disabled {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Green)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title("Username");

        let text = if self.buffer.is_empty() && !self.disabled {
            Line::from(Span::styled(
                PLACEHOLDER,
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ))
        } else {
            Line::from(Span::styled(
                self.cursor.visible(&self.buffer).to_string(),
                border_style,
            ))
        };
        frame.render_widget(Paragraph::new(text).block(block), area);

        if !self.disabled {
            let col = self
                .cursor
                .column(&self.buffer)
                .saturating_sub(self.cursor.scroll_offset);
            frame.set_cursor_position((
                area.x + BORDER_OFFSET + col.min(inner.saturating_sub(1)),
                area.y + BORDER_OFFSET,
            ));
        }
    }

    fn render_button(&mut self, frame: &mut Frame, area: Rect) {
        self.button_area = area;

        let (label, style) = if self.disabled {
            let spin = SPINNER[self.spinner_frame % SPINNER.len()];
            (format!("{spin} Adding"), Style::default().fg(Color::DarkGray))
        } else if self.buffer.is_empty() {
            (BUTTON_LABEL.to_string(), Style::default().fg(Color::DarkGray))
        } else {
            (
                BUTTON_LABEL.to_string(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )
        };

        let button = Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::bordered().border_style(style));
        frame.render_widget(button, area);
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [input_area, button_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(BUTTON_WIDTH)]).areas(area);
        self.render_input(frame, input_area);
        self.render_button(frame, button_area);
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if self.disabled {
            return None;
        }
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor.pos, *c);
                self.cursor.pos += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Single-line field: line breaks are dropped
                let text: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
                if text.is_empty() {
                    return None;
                }
                self.buffer.insert_str(self.cursor.pos, &text);
                self.cursor.pos += text.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor.pos == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(prev..self.cursor.pos);
                self.cursor.pos = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor.pos >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor.pos);
                self.buffer.drain(self.cursor.pos..next);
                self.changed()
            }
            // Cursor movement changes nothing the core cares about
            TuiEvent::CursorLeft => {
                self.cursor.pos = prev_char_boundary(&self.buffer, self.cursor.pos);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor.pos = next_char_boundary(&self.buffer, self.cursor.pos);
                None
            }
            TuiEvent::CursorHome => {
                self.cursor.pos = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor.pos = self.buffer.len();
                None
            }
            TuiEvent::Submit => Some(SearchEvent::Submit),
            TuiEvent::MouseClick(col, row) if self.is_button_hit(*col, *row) => {
                Some(SearchEvent::Submit)
            }
            _ => None,
        }
    }
}
