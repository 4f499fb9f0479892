//! Key handling and result handling for the code-entry form.
//!
//! Slot transitions:
//! - Digit in an empty slot: store it, advance focus if not last; submit
//!   once when that digit fills the final empty slot.
//! - Backspace on a non-empty slot: clear it, move left if not first.
//! - Backspace on an empty slot (not first): move left and clear that slot.
//! - Left arrow: move left, never edits.
//! - Any other key while the slot is non-empty and not last: move forward.
//! - Non-digit characters never enter a slot.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use signon_core::auth::{AuthError, VerifyResponse};
use signon_core::validate::CODE_LENGTH;
use tracing::info;

use crate::common::RequestId;
use crate::effects::UiEffect;
use crate::features::code::CodeFormState;
use crate::state::{Session, TuiState};

const RESEND_NOTICE: &str = "New code generated (mocked)";

/// What the top-level reducer should do with the form after a key press.
#[derive(Debug, PartialEq, Eq)]
pub enum CodeKeyOutcome {
    Stay,
    /// Esc: return to the credential form.
    Close,
}

/// Handles a key press while the code form is open.
pub fn handle_key(
    code: &mut CodeFormState,
    tui: &mut TuiState,
    key: KeyEvent,
) -> (Vec<UiEffect>, CodeKeyOutcome) {
    match key.code {
        KeyCode::Esc => {
            // Any in-flight verification becomes stale.
            tui.verify_request = None;
            return (vec![], CodeKeyOutcome::Close);
        }
        KeyCode::Enter if !code.countdown.active => {
            resend(code, tui);
            return (vec![], CodeKeyOutcome::Stay);
        }
        KeyCode::Char(c) if c.is_ascii_digit() && code.slots[code.focused].is_none() => {
            code.slots[code.focused] = Some(c);
            if code.focused < CODE_LENGTH - 1 {
                code.focused += 1;
            }
            return (submit_if_full(code, tui), CodeKeyOutcome::Stay);
        }
        KeyCode::Backspace => {
            if code.slots[code.focused].is_some() {
                code.slots[code.focused] = None;
                if code.focused > 0 {
                    code.focused -= 1;
                }
            } else if code.focused > 0 {
                code.focused -= 1;
                code.slots[code.focused] = None;
            }
            return (vec![], CodeKeyOutcome::Stay);
        }
        KeyCode::Left => {
            if code.focused > 0 {
                code.focused -= 1;
            }
            return (vec![], CodeKeyOutcome::Stay);
        }
        _ => {}
    }

    // Fallthrough: any other key skips forward over a filled slot.
    if code.slots[code.focused].is_some() && code.focused < CODE_LENGTH - 1 {
        code.focused += 1;
    }
    (vec![], CodeKeyOutcome::Stay)
}

/// Issues the verification request if every slot is filled.
///
/// Called only from the digit-entry transition, so filling the final slot
/// triggers exactly one submission.
fn submit_if_full(code: &mut CodeFormState, tui: &mut TuiState) -> Vec<UiEffect> {
    if tui.verify_request.is_some() {
        return vec![];
    }
    let Some(assembled) = code.code() else {
        return vec![];
    };

    code.error = None;
    let req = tui.request_seq.next_id();
    tui.verify_request = Some(req);
    vec![UiEffect::SubmitVerify {
        req,
        code: assembled,
    }]
}

/// Resets the form for a fresh code. No network request is made; code
/// delivery is out of band.
fn resend(code: &mut CodeFormState, tui: &mut TuiState) {
    code.reset_slots();
    code.error = None;
    code.countdown
        .reset(tui.config.resend_delay_secs, Instant::now());
    tui.post_notice(RESEND_NOTICE);
    info!("new code requested, countdown restarted");
}

/// Applies a finished verification request.
///
/// Returns the `CompleteSession` effect on success. Stale results are
/// dropped without touching state.
pub fn handle_verify_result(
    code: &mut CodeFormState,
    tui: &mut TuiState,
    req: RequestId,
    result: Result<VerifyResponse, AuthError>,
) -> Vec<UiEffect> {
    if tui.verify_request != Some(req) {
        return vec![];
    }
    tui.verify_request = None;

    match result {
        Ok(response) => {
            info!("code verified, completing session");
            vec![UiEffect::CompleteSession {
                session: Session {
                    token: tui.login_token.take(),
                    message: response.message,
                },
            }]
        }
        Err(e) => {
            code.error = Some(e.message);
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use signon_core::auth::AuthErrorKind;
    use signon_core::config::Config;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn form() -> CodeFormState {
        CodeFormState::new(60, Instant::now())
    }

    fn tui() -> TuiState {
        TuiState::new(Config::default())
    }

    fn type_digits(code: &mut CodeFormState, tui: &mut TuiState, digits: &str) -> Vec<UiEffect> {
        let mut effects = Vec::new();
        for c in digits.chars() {
            let (e, _) = handle_key(code, tui, key(KeyCode::Char(c)));
            effects.extend(e);
        }
        effects
    }

    #[test]
    fn test_filling_all_slots_submits_exactly_once() {
        let mut code = form();
        let mut tui = tui();

        let effects = type_digits(&mut code, &mut tui, "123456");

        assert_eq!(effects.len(), 1);
        let UiEffect::SubmitVerify { code: sent, .. } = &effects[0] else {
            panic!("expected SubmitVerify");
        };
        assert_eq!(sent, "123456");

        // Further keys on the full form never resubmit.
        let (more, _) = handle_key(&mut code, &mut tui, key(KeyCode::Char('7')));
        assert!(more.is_empty());
    }

    #[test]
    fn test_partial_code_never_submits() {
        let mut code = form();
        let mut tui = tui();

        let effects = type_digits(&mut code, &mut tui, "12345");

        assert!(effects.is_empty());
        assert!(tui.verify_request.is_none());
    }

    #[test]
    fn test_non_digit_never_enters_a_slot() {
        let mut code = form();
        let mut tui = tui();

        let effects = type_digits(&mut code, &mut tui, "12a456");

        assert!(effects.is_empty());
        assert_eq!(code.slots[2], None);
    }

    #[test]
    fn test_backspace_on_non_empty_slot_clears_and_moves_left() {
        let mut code = form();
        let mut tui = tui();
        type_digits(&mut code, &mut tui, "123");
        code.focused = 2;
        code.slots[2] = Some('3');

        handle_key(&mut code, &mut tui, key(KeyCode::Backspace));

        assert_eq!(code.slots[2], None);
        assert_eq!(code.focused, 1);
    }

    #[test]
    fn test_backspace_on_empty_slot_clears_previous() {
        let mut code = form();
        let mut tui = tui();
        type_digits(&mut code, &mut tui, "12");
        assert_eq!(code.focused, 2);
        assert_eq!(code.slots[2], None);

        handle_key(&mut code, &mut tui, key(KeyCode::Backspace));

        assert_eq!(code.focused, 1);
        assert_eq!(code.slots[1], None);
        assert_eq!(code.slots[0], Some('1'));
    }

    #[test]
    fn test_left_arrow_moves_without_editing() {
        let mut code = form();
        let mut tui = tui();
        type_digits(&mut code, &mut tui, "12");

        handle_key(&mut code, &mut tui, key(KeyCode::Left));

        assert_eq!(code.focused, 1);
        assert_eq!(code.slots, [Some('1'), Some('2'), None, None, None, None]);
    }

    #[test]
    fn test_other_key_skips_over_filled_slot() {
        let mut code = form();
        let mut tui = tui();
        code.slots[0] = Some('9');
        code.focused = 0;

        handle_key(&mut code, &mut tui, key(KeyCode::Right));
        assert_eq!(code.focused, 1);
        assert_eq!(code.slots[0], Some('9'));

        // Digit on a filled slot also skips forward without editing.
        code.slots[1] = Some('8');
        handle_key(&mut code, &mut tui, key(KeyCode::Char('5')));
        assert_eq!(code.focused, 2);
        assert_eq!(code.slots[1], Some('8'));
    }

    #[test]
    fn test_resend_resets_slots_and_countdown() {
        let mut code = form();
        let mut tui = tui();
        type_digits(&mut code, &mut tui, "12345");
        code.countdown.active = false;
        code.error = Some("Invalid 2FA code".to_string());

        let (effects, outcome) = handle_key(&mut code, &mut tui, key(KeyCode::Enter));

        assert!(effects.is_empty());
        assert_eq!(outcome, CodeKeyOutcome::Stay);
        assert_eq!(code.slots, [None; 6]);
        assert_eq!(code.focused, 0);
        assert!(code.error.is_none());
        assert!(code.countdown.active);
        assert_eq!(code.countdown.seconds_left, 60);
        assert!(tui.notice.is_some());
    }

    #[test]
    fn test_esc_closes_and_invalidates_request() {
        let mut code = form();
        let mut tui = tui();
        tui.verify_request = Some(tui.request_seq.next_id());

        let (_, outcome) = handle_key(&mut code, &mut tui, key(KeyCode::Esc));

        assert_eq!(outcome, CodeKeyOutcome::Close);
        assert!(tui.verify_request.is_none());
    }

    #[test]
    fn test_verify_success_completes_session() {
        let mut code = form();
        let mut tui = tui();
        tui.login_token = Some("fake-token".to_string());
        let req = tui.request_seq.next_id();
        tui.verify_request = Some(req);

        let response = VerifyResponse {
            success: true,
            message: "2FA verified".to_string(),
        };
        let effects = handle_verify_result(&mut code, &mut tui, req, Ok(response));

        assert_eq!(effects.len(), 1);
        let UiEffect::CompleteSession { session } = &effects[0] else {
            panic!("expected CompleteSession");
        };
        assert_eq!(session.token.as_deref(), Some("fake-token"));
        assert_eq!(session.message, "2FA verified");
    }

    #[test]
    fn test_verify_failure_shows_wording() {
        let mut code = form();
        let mut tui = tui();
        let req = tui.request_seq.next_id();
        tui.verify_request = Some(req);

        let err = AuthError::new(AuthErrorKind::CodeExpired, "Code expired");
        let effects = handle_verify_result(&mut code, &mut tui, req, Err(err));

        assert!(effects.is_empty());
        assert_eq!(code.error.as_deref(), Some("Code expired"));
        assert!(tui.verify_request.is_none());
    }

    #[test]
    fn test_stale_verify_result_is_dropped() {
        let mut code = form();
        let mut tui = tui();
        let stale = tui.request_seq.next_id();
        tui.verify_request = None;

        let err = AuthError::new(AuthErrorKind::InvalidCode, "Invalid 2FA code");
        let effects = handle_verify_result(&mut code, &mut tui, stale, Err(err));

        assert!(effects.is_empty());
        assert!(code.error.is_none());
    }
}
