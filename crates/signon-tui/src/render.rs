//! Top-level rendering and shared card helpers.
//!
//! The credential form is always drawn; the code form, when present, is
//! drawn as a centered card over it with the background dimmed.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::features::{code, login};
use crate::state::AppState;

pub(crate) const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Renders the whole frame from state.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();

    let title = Paragraph::new(Line::from(Span::styled(
        "signon",
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    if area.height > 0 {
        frame.render_widget(title, Rect::new(area.x, area.y, area.width, 1));
    }

    login::render_login(frame, area, &app.login, &app.tui, app.code.is_some());

    if let Some(code_form) = &app.code {
        code::render_code(frame, area, code_form, &app.tui);
    }

    if let Some(notice) = &app.tui.notice
        && area.height > 1
    {
        let notice_area = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
        let line = Paragraph::new(Line::from(Span::styled(
            notice.text.as_str(),
            Style::default().fg(Color::Green),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(line, notice_area);
    }
}

/// Returns a rectangle of the given size centered in `area`, clamped to fit.
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Clears the background and draws a titled, bordered card. Returns the
/// inner area.
pub(crate) fn render_card(frame: &mut Frame, area: Rect, title: &str, border_color: Color) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {title} "))
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(block, area);

    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

/// Keyboard hint for the card footer.
pub(crate) struct Hint<'a> {
    pub key: &'a str,
    pub action: &'a str,
}

/// Renders hints on the last line of `inner`.
pub(crate) fn render_hints(frame: &mut Frame, inner: Rect, hints: &[Hint<'_>]) {
    if inner.height == 0 {
        return;
    }
    let hints_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);

    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            format!(" {}", hint.action),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let para = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(para, hints_area);
}

/// Renders a one-line status while a request is in flight.
pub(crate) fn render_spinner_line(frame: &mut Frame, area: Rect, spinner_frame: usize, label: &str) {
    let glyph = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
    let line = Line::from(vec![
        Span::styled(glyph, Style::default().fg(Color::Cyan)),
        Span::raw(" "),
        Span::styled(label, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
