//! UI module for rendering the TUI

mod form_view;
mod layout;
mod lists;

pub use layout::SIDEBAR_ITEMS;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (sidebar_area, main_area) = layout::create_layout(area);
    layout::draw_sidebar(frame, sidebar_area, app);

    match app.state.current_view {
        View::Dashboard => lists::draw_dashboard(frame, main_area, app),
        View::Articles => lists::draw_articles(frame, main_area, app),
        View::Events => lists::draw_events(frame, main_area, app),
        View::Testimonials => lists::draw_testimonials(frame, main_area, app),
        View::Contacts => lists::draw_contacts(frame, main_area, app),
        View::ArticleCreate
        | View::ArticleEdit
        | View::EventCreate
        | View::EventEdit
        | View::TestimonialCreate
        | View::TestimonialEdit
        | View::ContactForm => form_view::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);

    if app.state.pending_action.is_some() {
        layout::draw_confirm_dialog(frame, area);
    }
}
