use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::format_mmss;
use crate::features::code::CodeFormState;
use crate::render::{Hint, centered_rect, render_card, render_hints, render_spinner_line};
use crate::state::TuiState;

const CARD_WIDTH: u16 = 46;
const CARD_HEIGHT: u16 = 10;

/// Renders the code-entry card over the credential form.
pub fn render_code(frame: &mut Frame, area: Rect, code: &CodeFormState, tui: &TuiState) {
    let card = centered_rect(area, CARD_WIDTH, CARD_HEIGHT);
    let inner = render_card(frame, card, "Verification", Color::Cyan);
    if inner.height < 6 {
        return;
    }

    let prompt = Paragraph::new(Line::from(Span::styled(
        "Enter the 6-digit code",
        Style::default().fg(Color::White),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(prompt, Rect::new(inner.x, inner.y, inner.width, 1));

    render_slots(frame, Rect::new(inner.x, inner.y + 2, inner.width, 1), code);

    let status_area = Rect::new(inner.x, inner.y + 4, inner.width, 1);
    if tui.verify_request.is_some() {
        render_spinner_line(frame, status_area, tui.spinner_frame, "Verifying...");
    } else if let Some(error) = &code.error {
        let line = Paragraph::new(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(line, status_area);
    }

    let countdown_area = Rect::new(inner.x, inner.y + 5, inner.width, 1);
    let countdown_line = if code.countdown.active {
        Line::from(Span::styled(
            format!("Get new code in {}", format_mmss(code.countdown.seconds_left)),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(
            "Press enter to get a new code",
            Style::default().fg(Color::Cyan),
        ))
    };
    frame.render_widget(
        Paragraph::new(countdown_line).alignment(Alignment::Center),
        countdown_area,
    );

    render_hints(
        frame,
        inner,
        &[
            Hint {
                key: "esc",
                action: "back",
            },
            Hint {
                key: "backspace",
                action: "erase",
            },
        ],
    );
}

/// Renders the six slot boxes with the focused one highlighted.
fn render_slots(frame: &mut Frame, area: Rect, code: &CodeFormState) {
    let mut spans = Vec::new();
    for (i, slot) in code.slots.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let c = slot.unwrap_or('_');
        let style = if i == code.focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!("[{c}]"), style));
    }
    let para = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(para, area);
}
