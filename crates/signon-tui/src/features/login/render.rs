use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::features::login::{LoginField, LoginFormState};
use crate::render::{Hint, centered_rect, render_card, render_hints, render_spinner_line};
use crate::state::TuiState;

const CARD_WIDTH: u16 = 48;
const CARD_HEIGHT: u16 = 10;

/// Renders the credential form card.
pub fn render_login(
    frame: &mut Frame,
    area: Rect,
    login: &LoginFormState,
    tui: &TuiState,
    dimmed: bool,
) {
    let border_color = if dimmed { Color::DarkGray } else { Color::Cyan };
    let card = centered_rect(area, CARD_WIDTH, CARD_HEIGHT);
    let inner = render_card(frame, card, "Sign in", border_color);
    if inner.height < 6 {
        return;
    }

    let focus = |field| !dimmed && login.focus == field;
    render_field(
        frame,
        Rect::new(inner.x, inner.y, inner.width, 1),
        "Email",
        &login.email,
        focus(LoginField::Email),
    );
    let masked: String = "*".repeat(login.password.chars().count());
    render_field(
        frame,
        Rect::new(inner.x, inner.y + 2, inner.width, 1),
        "Password",
        &masked,
        focus(LoginField::Password),
    );

    let status_area = Rect::new(inner.x, inner.y + 4, inner.width, 1);
    if tui.login_request.is_some() {
        render_spinner_line(frame, status_area, tui.spinner_frame, "Signing in...");
    } else if let Some(error) = &login.error {
        let line = Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(line), status_area);
    }

    if !dimmed {
        render_hints(
            frame,
            inner,
            &[
                Hint {
                    key: "tab",
                    action: "switch field",
                },
                Hint {
                    key: "enter",
                    action: "sign in",
                },
                Hint {
                    key: "ctrl+c",
                    action: "quit",
                },
            ],
        );
    }
}

/// Renders one labeled single-line field with a trailing block cursor when
/// focused.
fn render_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let label_color = if focused { Color::Cyan } else { Color::DarkGray };
    // Keep the tail of long values visible.
    let budget = area.width.saturating_sub(label.len() as u16 + 3) as usize;
    let shown: String = if value.chars().count() > budget {
        value
            .chars()
            .skip(value.chars().count() - budget)
            .collect()
    } else {
        value.to_string()
    };

    let mut spans = vec![
        Span::styled(format!("{label}: "), Style::default().fg(label_color)),
        Span::styled(shown, Style::default().fg(Color::White)),
    ];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
