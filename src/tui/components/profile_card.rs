use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};

use crate::core::profile::ProfileRecord;

/// Rows a card occupies: avatar, name, company, plus top and bottom border.
pub const CARD_HEIGHT: u16 = 5;

const LABEL_STYLE: Style = Style::new().fg(Color::DarkGray);

/// A stateless component that renders one profile as a bordered card.
///
/// `ProfileCard` is a **transient component**: `ProfileList` creates one per
/// record each frame. A terminal can't draw the avatar image, so the card
/// shows its URL in the avatar row. Empty fields render as empty rows.
#[derive(Clone, Copy)]
pub struct ProfileCard<'a> {
    pub profile: &'a ProfileRecord,
}

impl<'a> ProfileCard<'a> {
    pub fn new(profile: &'a ProfileRecord) -> Self {
        Self { profile }
    }

    /// The card's lines, in display order: avatar, name, company.
    fn lines(&self) -> Vec<Line<'a>> {
        vec![
            Line::from(vec![
                Span::styled("avatar  ", LABEL_STYLE),
                Span::styled(
                    self.profile.avatar_url.as_str(),
                    Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
                ),
            ]),
            Line::from(Span::styled(
                self.profile.name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.profile.company.as_str(),
                Style::default().fg(Color::Gray),
            )),
        ]
    }
}

impl<'a> Widget for ProfileCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::DIM))
            .title(Span::styled(
                self.profile.login.as_str(),
                Style::default().fg(Color::Cyan),
            ))
            .padding(Padding::horizontal(1));

        Paragraph::new(self.lines()).block(block).render(area, buf);
    }
}
