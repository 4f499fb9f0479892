//! TUI reducer.
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects; it never mutates state itself.

use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::code::{self, CodeKeyOutcome};
use crate::features::login;
use crate::state::AppState;

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            let now = Instant::now();
            app.tui.expire_notice(now);
            if let Some(code) = &mut app.code {
                code.countdown.tick(now);
            }
            vec![]
        }
        UiEvent::Terminal(Event::Key(key)) if key.kind == KeyEventKind::Press => {
            handle_key(app, key)
        }
        UiEvent::Terminal(_) => vec![],
        UiEvent::LoginResult { req, result } => {
            if let Some(code) = login::handle_login_result(&mut app.login, &mut app.tui, req, result)
            {
                app.code = Some(code);
            }
            vec![]
        }
        UiEvent::VerifyResult { req, result } => match &mut app.code {
            Some(code) => code::handle_verify_result(code, &mut app.tui, req, result),
            // Form already closed; the request was invalidated on Esc.
            None => vec![],
        },
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }

    match &mut app.code {
        Some(code) => {
            let (effects, outcome) = code::handle_key(code, &mut app.tui, key);
            if outcome == CodeKeyOutcome::Close {
                app.code = None;
            }
            effects
        }
        None => login::handle_key(&mut app.login, &mut app.tui, key),
    }
}

#[cfg(test)]
mod tests {
    use signon_core::auth::{LoginResponse, VerifyResponse};
    use signon_core::config::Config;

    use super::*;

    fn app() -> AppState {
        AppState::new(Config::default(), Some("test@email.com".to_string()))
    }

    fn press(app: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn login_and_enter_code_view(app: &mut AppState) {
        for c in "password123".chars() {
            press(app, KeyCode::Char(c));
        }
        let effects = press(app, KeyCode::Enter);
        let UiEffect::SubmitLogin { req, .. } = &effects[0] else {
            panic!("expected SubmitLogin");
        };
        let response = LoginResponse {
            success: true,
            message: "Correct credentials".to_string(),
            token: Some("fake-token".to_string()),
        };
        update(
            app,
            UiEvent::LoginResult {
                req: *req,
                result: Ok(response),
            },
        );
        assert!(app.code.is_some());
    }

    #[test]
    fn test_ctrl_c_quits_from_either_view() {
        let mut app = app();
        let effects = update(
            &mut app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert!(matches!(effects[0], UiEffect::Quit));
    }

    #[test]
    fn test_full_flow_reaches_session_completion() {
        let mut app = app();
        login_and_enter_code_view(&mut app);

        let mut submit = Vec::new();
        for c in "123456".chars() {
            submit.extend(press(&mut app, KeyCode::Char(c)));
        }
        assert_eq!(submit.len(), 1);
        let UiEffect::SubmitVerify { req, code } = &submit[0] else {
            panic!("expected SubmitVerify");
        };
        assert_eq!(code, "123456");

        let effects = update(
            &mut app,
            UiEvent::VerifyResult {
                req: *req,
                result: Ok(VerifyResponse {
                    success: true,
                    message: "2FA verified".to_string(),
                }),
            },
        );
        let UiEffect::CompleteSession { session } = &effects[0] else {
            panic!("expected CompleteSession");
        };
        assert_eq!(session.token.as_deref(), Some("fake-token"));
    }

    #[test]
    fn test_esc_returns_to_credentials_with_fields_retained() {
        let mut app = app();
        login_and_enter_code_view(&mut app);

        press(&mut app, KeyCode::Esc);

        assert!(app.code.is_none());
        assert_eq!(app.login.email, "test@email.com");
        assert_eq!(app.login.password, "password123");
    }

    #[test]
    fn test_verify_result_after_close_is_ignored() {
        let mut app = app();
        login_and_enter_code_view(&mut app);
        let req = app.tui.request_seq.next_id();
        app.tui.verify_request = Some(req);

        press(&mut app, KeyCode::Esc);
        let effects = update(
            &mut app,
            UiEvent::VerifyResult {
                req,
                result: Ok(VerifyResponse {
                    success: true,
                    message: "2FA verified".to_string(),
                }),
            },
        );

        assert!(effects.is_empty());
        assert!(app.tui.session.is_none());
    }
}
