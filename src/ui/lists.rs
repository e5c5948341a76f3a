//! Dashboard and resource list views

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

fn list_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

fn row_style(is_selected: bool) -> Style {
    if is_selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn draw_empty(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let content = Paragraph::new(message)
        .style(Style::default().fg(Color::DarkGray))
        .block(list_block(title));
    frame.render_widget(content, area);
}

/// Dashboard with per-resource counts
pub fn draw_dashboard(frame: &mut Frame, area: Rect, app: &App) {
    let role = if app.auth.is_admin() { "admin" } else { "viewer" };
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  SaaviGen.AI content console",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("  Articles      {}", app.state.articles.len())),
        Line::from(format!("  Events        {}", app.state.events.len())),
        Line::from(format!("  Testimonials  {}", app.state.testimonials.len())),
        Line::from(format!("  Contacts      {}", app.state.contacts.len())),
        Line::from(""),
        Line::from(Span::styled(
            format!("  Role: {role}"),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let content = Paragraph::new(lines).block(list_block("Dashboard"));
    frame.render_widget(content, area);
}

pub fn draw_articles(frame: &mut Frame, area: Rect, app: &App) {
    if app.state.articles.is_empty() {
        draw_empty(
            frame,
            area,
            "Articles",
            "No articles loaded.\nPress 'r' to refresh or 'n' to create one.",
        );
        return;
    }

    let items: Vec<ListItem> = app
        .state
        .articles
        .iter()
        .enumerate()
        .map(|(idx, article)| {
            let is_selected = idx == app.state.selected_index;
            let prefix = if is_selected { "▸" } else { " " };
            let featured = if article.featured { "★" } else { " " };
            let published = if article.published { "[pub]" } else { "[draft]" };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{prefix} {featured} "), row_style(is_selected)),
                Span::styled(
                    published.to_string(),
                    Style::default().fg(if article.published {
                        Color::Green
                    } else {
                        Color::Yellow
                    }),
                ),
                Span::styled(format!(" {}", article.title), row_style(is_selected)),
                Span::styled(
                    format!("  ({})", article.category),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(list_block("Articles"));
    frame.render_widget(list, area);
}

pub fn draw_events(frame: &mut Frame, area: Rect, app: &App) {
    if app.state.events.is_empty() {
        draw_empty(
            frame,
            area,
            "Events",
            "No events loaded.\nPress 'r' to refresh or 'n' to create one.",
        );
        return;
    }

    let items: Vec<ListItem> = app
        .state
        .events
        .iter()
        .enumerate()
        .map(|(idx, event)| {
            let is_selected = idx == app.state.selected_index;
            let prefix = if is_selected { "▸" } else { " " };
            let featured = if event.featured { "★" } else { " " };

            let status_color = match event.status.as_str() {
                "scheduled" => Color::Green,
                "completed" => Color::Blue,
                "cancelled" => Color::Red,
                _ => Color::Gray,
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{prefix} {featured} "), row_style(is_selected)),
                Span::styled(format!("[{}]", event.status), Style::default().fg(status_color)),
                Span::styled(format!(" {}", event.title), row_style(is_selected)),
                Span::styled(
                    format!("  {} · {}", event.start_date, event.mode),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(list_block("Events"));
    frame.render_widget(list, area);
}

pub fn draw_testimonials(frame: &mut Frame, area: Rect, app: &App) {
    if app.state.testimonials.is_empty() {
        draw_empty(
            frame,
            area,
            "Testimonials",
            "No testimonials loaded.\nPress 'r' to refresh or 'n' to create one.",
        );
        return;
    }

    let items: Vec<ListItem> = app
        .state
        .testimonials
        .iter()
        .enumerate()
        .map(|(idx, testimonial)| {
            let is_selected = idx == app.state.selected_index;
            let prefix = if is_selected { "▸" } else { " " };
            let featured = if testimonial.featured { "★" } else { " " };
            let stars = "★".repeat(testimonial.rating.min(5) as usize);

            ListItem::new(Line::from(vec![
                Span::styled(format!("{prefix} {featured} "), row_style(is_selected)),
                Span::styled(stars, Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!(" {} ({})", testimonial.name, testimonial.company),
                    row_style(is_selected),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(list_block("Testimonials"));
    frame.render_widget(list, area);
}

pub fn draw_contacts(frame: &mut Frame, area: Rect, app: &App) {
    if app.state.contacts.is_empty() {
        draw_empty(frame, area, "Contact Messages", "No messages.\nPress 'r' to refresh.");
        return;
    }

    let items: Vec<ListItem> = app
        .state
        .contacts
        .iter()
        .enumerate()
        .map(|(idx, contact)| {
            let is_selected = idx == app.state.selected_index;
            let prefix = if is_selected { "▸" } else { " " };

            let preview: String = contact.message.chars().take(60).collect();
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{prefix} {} <{}>", contact.name, contact.email),
                    row_style(is_selected),
                ),
                Span::styled(format!("  {preview}"), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(items).block(list_block("Contact Messages"));
    frame.render_widget(list, area);
}
