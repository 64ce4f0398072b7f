use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::search_box::SEARCH_BOX_HEIGHT;
use crate::tui::components::{Header, ProfileList};

/// Splits the screen into header, search box, and card list.
pub fn screen_layout(area: Rect) -> [Rect; 3] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Length(SEARCH_BOX_HEIGHT), Min(0)]).areas(area)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let [header_area, search_area, list_area] = screen_layout(frame.area());

    Header::new(&app.title, &app.status_message, app.error.as_deref()).render(frame, header_area);

    tui.search_box.disabled = app.form().is_submitting();
    tui.search_box.spinner_frame = spinner_frame;
    tui.search_box.render(frame, search_area);

    ProfileList::new(&mut tui.profile_list, app.profiles().as_slice()).render(frame, list_area);
}
