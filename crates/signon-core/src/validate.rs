//! Client-side credential and code validation.
//!
//! Validation failures never leave the form that produced them; the TUI maps
//! them to a generic inline banner.

use std::sync::OnceLock;

use regex::Regex;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Number of digits in a verification code.
pub const CODE_LENGTH: usize = 6;

/// Client-side validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyEmail,
    EmptyPassword,
    InvalidEmail,
    PasswordTooShort,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyEmail => write!(f, "Email is required"),
            ValidationError::EmptyPassword => write!(f, "Password is required"),
            ValidationError::InvalidEmail => write!(f, "Invalid email"),
            ValidationError::PasswordTooShort => {
                write!(f, "Password must be at least {MIN_PASSWORD_LEN} characters")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap_or_else(|_| unreachable!())
    })
}

/// Returns true if `email` is a syntactically plausible address.
pub fn email_is_valid(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Validates a credential pair before submission.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(ValidationError::EmptyEmail);
    }
    if password.is_empty() {
        return Err(ValidationError::EmptyPassword);
    }
    if !email_is_valid(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Returns true if `code` is exactly six ASCII digits.
///
/// Codes failing this check must never be submitted.
pub fn code_is_valid(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| b.is_ascii_digit())
}
