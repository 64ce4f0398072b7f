//! # ProfileList Component
//!
//! Scrollable column of profile cards.
//!
//! ## Responsibilities
//!
//! - Produce one `ProfileCard` per record, in collection order, keyed by `id`
//! - Manage scrolling, sticking to the bottom so new cards come into view
//! - Show an empty-state hint when there are no cards
//!
//! ## Architecture
//!
//! `ProfileList` is a transient component (created each frame) that wraps
//! `&'a mut ProfileListState` (persistent state) and the records (props).
//! Every card has the same height, so layout is a multiplication rather
//! than a measured cache.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::profile::ProfileRecord;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::profile_card::{CARD_HEIGHT, ProfileCard};
use crate::tui::event::TuiEvent;

pub const EMPTY_HINT: &str = "No cards yet. Search for a Github user above.";

/// Scroll state for the card list.
/// Must be persisted in the parent TuiState.
pub struct ProfileListState {
    pub scroll_state: ScrollViewState,
    /// When true, auto-scroll to bottom on new cards
    pub stick_to_bottom: bool,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
    /// Last known content height
    pub content_height: u16,
}

impl Default for ProfileListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            stick_to_bottom: true,
            viewport_height: 0,
            content_height: 0,
        }
    }

    fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.max_offset();
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position { x: current.x, y: max_y });
        }
    }

    /// Re-engage auto-scroll if the user has scrolled to the bottom.
    pub fn repin_if_at_bottom(&mut self) {
        let max_y = self.max_offset();
        let current = self.scroll_state.offset();
        if current.y >= max_y {
            self.stick_to_bottom = true;
            self.scroll_state.set_offset(Position { x: current.x, y: max_y });
        }
    }
}

impl EventHandler for ProfileListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.repin_if_at_bottom();
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.repin_if_at_bottom();
            }
            TuiEvent::ScrollToBottom => {
                self.stick_to_bottom = true;
                self.scroll_state.scroll_to_bottom();
            }
            _ => {}
        }
        None
    }
}

/// Scrollable card list component.
/// Created fresh each frame with references to state and data.
pub struct ProfileList<'a> {
    pub state: &'a mut ProfileListState,
    pub profiles: &'a [ProfileRecord],
}

impl<'a> ProfileList<'a> {
    pub fn new(state: &'a mut ProfileListState, profiles: &'a [ProfileRecord]) -> Self {
        Self { state, profiles }
    }

    /// One card per record, in order, each paired with its key.
    pub fn cards(&self) -> Vec<(u64, ProfileCard<'a>)> {
        let profiles: &'a [ProfileRecord] = self.profiles;
        profiles
            .iter()
            .map(|profile| (profile.id, ProfileCard::new(profile)))
            .collect()
    }
}

impl<'a> Component for ProfileList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let cards = self.cards();
        if cards.is_empty() {
            self.state.content_height = 0;
            let hint = Paragraph::new(EMPTY_HINT)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(hint, area);
            return;
        }

        let content_width = area.width.saturating_sub(1); // -1 for scrollbar
        let total_height = u16::try_from(cards.len())
            .unwrap_or(u16::MAX)
            .saturating_mul(CARD_HEIGHT);

        self.state.viewport_height = area.height;
        self.state.content_height = total_height;
        if !self.state.stick_to_bottom {
            self.state.clamp_scroll();
        }

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (_key, card) in cards {
            if y_offset >= total_height {
                break;
            }
            scroll_view.render_widget(card, Rect::new(0, y_offset, content_width, CARD_HEIGHT));
            y_offset = y_offset.saturating_add(CARD_HEIGHT);
        }

        if self.state.stick_to_bottom {
            self.state.scroll_state.scroll_to_bottom();
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
