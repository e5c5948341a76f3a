//! Layout components (sidebar, status bar, confirm dialog)

use crate::app::App;
use crate::state::View;
use crate::submit::SubmissionStatus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Sidebar entries as (label, target view)
pub const SIDEBAR_ITEMS: &[(&str, View)] = &[
    ("Dashboard", View::Dashboard),
    ("Articles", View::Articles),
    ("Events", View::Events),
    ("Testimonials", View::Testimonials),
    ("Contacts", View::Contacts),
    ("Contact Us", View::ContactForm),
];

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20), // Sidebar
            Constraint::Min(0),     // Main content
        ])
        .split(area);

    // Reserve bottom line for status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(chunks[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(chunks[0]);

    (sidebar_chunks[0], main_chunks[0])
}

/// Draw the sidebar navigation
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let is_admin = app.auth.is_admin();

    let items: Vec<ListItem> = SIDEBAR_ITEMS
        .iter()
        .enumerate()
        .map(|(idx, (label, view))| {
            let enabled = is_admin || !view.requires_admin();
            let is_current = section_for(app.state.current_view) == *view;
            let is_cursor = idx == app.state.sidebar_index;

            let style = if !enabled {
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
            } else if is_current {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };

            let prefix = if is_cursor { "▸ " } else { "  " };
            ListItem::new(Line::from(Span::styled(format!("{prefix}{label}"), style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" SaaviGen ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(list, area);
}

/// Sidebar section a view belongs to
fn section_for(view: View) -> View {
    match view {
        View::Articles | View::ArticleCreate | View::ArticleEdit => View::Articles,
        View::Events | View::EventCreate | View::EventEdit => View::Events,
        View::Testimonials | View::TestimonialCreate | View::TestimonialEdit => View::Testimonials,
        View::Contacts => View::Contacts,
        View::ContactForm => View::ContactForm,
        View::Dashboard => View::Dashboard,
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Connection status
    let conn_status = if app.state.api_connected {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    };
    spans.push(conn_status);

    // Submission status takes priority over hints while visible
    match app.submitter.status() {
        SubmissionStatus::Submitting => {
            spans.push(Span::styled(
                "Submitting...",
                Style::default().fg(Color::Yellow),
            ));
        }
        SubmissionStatus::Success => {
            spans.push(Span::styled("✓ Saved", Style::default().fg(Color::Green)));
        }
        SubmissionStatus::Error => {
            let message = app.submitter.last_error().unwrap_or("Submission failed");
            spans.push(Span::styled(
                message.to_string(),
                Style::default().fg(Color::Red),
            ));
        }
        SubmissionStatus::Idle => {
            let hints = get_view_hints(app.state.current_view);
            spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));
        }
    }

    // Oldest error banner, dismissible with x
    if let Some(banner) = app.state.error_banners.first() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            banner.message.clone(),
            Style::default().fg(Color::Red),
        ));
        spans.push(Span::styled(
            " [x:dismiss]",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let quit_hint = " q:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View) -> String {
    match view {
        View::Dashboard => "Tab:section  Enter:open  r:refresh".to_string(),
        View::Articles | View::Events | View::Testimonials => {
            "j/k:nav  n:new  Enter:edit  f:featured  d:delete  r:refresh  Esc:back".to_string()
        }
        View::Contacts => "j/k:nav  d:delete  r:refresh  Esc:back".to_string(),
        View::ArticleCreate | View::ArticleEdit | View::EventCreate | View::EventEdit => {
            "Tab:next  Space:cycle/toggle  ^O:image  ^S:save  Esc:cancel".to_string()
        }
        View::TestimonialCreate | View::TestimonialEdit | View::ContactForm => {
            "Tab:next  Space:cycle/toggle  ^S:submit  Esc:cancel".to_string()
        }
    }
}

/// Draw the delete confirmation dialog over the current view
pub fn draw_confirm_dialog(frame: &mut Frame, area: Rect) {
    let width = 40u16.min(area.width);
    let height = 5u16.min(area.height);
    let dialog_area = Rect {
        x: area.width.saturating_sub(width) / 2,
        y: area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, dialog_area);
    let dialog = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Delete this item? (y/n)",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
    ])
    .centered()
    .block(
        Block::default()
            .title(" Confirm ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(dialog, dialog_area);
}
