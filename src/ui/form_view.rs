//! Shared form renderer
//!
//! Renders whichever `FormState` is mounted: bordered input per field with
//! the cursor on the active one, the field's validation error in red
//! directly beneath its input, and the attachment line for forms that
//! take an image.

use crate::app::App;
use crate::state::forms::{FormField, FormState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const FIELD_HEIGHT: u16 = 3;
const MULTILINE_HEIGHT: u16 = 5;
const ERROR_HEIGHT: u16 = 1;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(form) = app.state.form.as_ref() else {
        return;
    };

    let block = Block::default()
        .title(format!(" {} ", form.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Window of fields that fits, always containing the active one.
    let heights: Vec<u16> = (0..form.field_count())
        .map(|i| field_height(form, i))
        .collect();
    let start = first_visible(&heights, form.active_field(), inner.height);

    let mut constraints: Vec<Constraint> = Vec::new();
    let mut shown = 0usize;
    let mut used = 0u16;
    for &h in heights.iter().skip(start) {
        if used + h > inner.height {
            break;
        }
        constraints.push(Constraint::Length(h));
        used += h;
        shown += 1;
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for offset in 0..shown {
        let index = start + offset;
        let Some(field) = form.get_field(index) else {
            continue;
        };
        let error = form.error(&field.name);
        draw_field(
            frame,
            chunks[offset],
            field,
            index == form.active_field(),
            error,
        );
    }

    draw_attachment_line(frame, inner, form);
}

/// Rendered height of a field including its error line
fn field_height(form: &FormState, index: usize) -> u16 {
    let Some(field) = form.get_field(index) else {
        return 0;
    };
    let base = if field.is_multiline {
        MULTILINE_HEIGHT
    } else {
        FIELD_HEIGHT
    };
    if form.error(&field.name).is_some() {
        base + ERROR_HEIGHT
    } else {
        base
    }
}

/// First field index so that the active field fits inside the viewport
fn first_visible(heights: &[u16], active: usize, viewport: u16) -> usize {
    let mut start = 0usize;
    loop {
        let mut used = 0u16;
        let mut visible = false;
        for (i, &h) in heights.iter().enumerate().skip(start) {
            if used + h > viewport {
                break;
            }
            used += h;
            if i == active {
                visible = true;
            }
        }
        if visible || start >= active || start + 1 >= heights.len() {
            return start;
        }
        start += 1;
    }
}

fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
) {
    let (input_area, error_area) = if error.is_some() {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(ERROR_HEIGHT)])
            .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else {
        style
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_str
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), input_area);

    if let (Some(error_area), Some(error)) = (error_area, error) {
        let notice = Paragraph::new(Line::from(Span::styled(
            format!("  {error}"),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(notice, error_area);
    }
}

/// One-line attachment summary at the bottom of image-carrying forms
fn draw_attachment_line(frame: &mut Frame, area: Rect, form: &FormState) {
    if form.field("imagePath").is_none() || area.height == 0 {
        return;
    }
    let line_area = Rect {
        x: area.x,
        y: area.y + area.height - 1,
        width: area.width,
        height: 1,
    };
    let text = match form.attachment() {
        Some(attachment) => format!(
            "Attached: {} ({} bytes), ^O reloads from the path above",
            attachment.filename, attachment.size
        ),
        None => "No image attached. Enter a path and press ^O".to_string(),
    };
    let line = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(line, line_area);
}
