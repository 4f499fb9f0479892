use std::fmt;

use serde_json::Value;

/// Which request produced an error.
///
/// The two endpoints share a classification scheme but use different
/// user-facing wording for the same status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOperation {
    Login,
    Verify,
}

/// Categories of authentication errors for consistent error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
    /// Credentials rejected (login 401).
    InvalidCredentials,
    /// Code rejected (verify 401).
    InvalidCode,
    /// Code no longer valid (verify 403).
    CodeExpired,
    /// Server-side failure (500).
    Server,
    /// Any other HTTP error status.
    Rejected,
    /// No response received (connect failure or timeout).
    Network,
    /// Anything uncategorized.
    Unexpected,
}

/// Structured error from the authentication service with kind and details.
#[derive(Debug, Clone)]
pub struct AuthError {
    /// Error category.
    pub kind: AuthErrorKind,
    /// One-line summary suitable for display.
    pub message: String,
    /// Optional additional details (e.g., raw error body).
    pub details: Option<String>,
}

impl AuthError {
    /// Creates a new auth error.
    pub fn new(kind: AuthErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
        }
    }

    /// Classifies a non-2xx HTTP response.
    ///
    /// Known statuses map to fixed wording per operation; anything else
    /// surfaces the server's `{error}` field when present, or a generic
    /// fallback.
    pub fn from_status(op: AuthOperation, status: u16, body: &str) -> Self {
        let details = (!body.is_empty()).then(|| body.to_string());
        match (op, status) {
            (AuthOperation::Login, 401) => Self {
                kind: AuthErrorKind::InvalidCredentials,
                message: "Invalid credentials".to_string(),
                details,
            },
            (AuthOperation::Login, 500) => Self {
                kind: AuthErrorKind::Server,
                message: "Server error, please try again later".to_string(),
                details,
            },
            (AuthOperation::Verify, 401) => Self {
                kind: AuthErrorKind::InvalidCode,
                message: "Invalid 2FA code".to_string(),
                details,
            },
            (AuthOperation::Verify, 403) => Self {
                kind: AuthErrorKind::CodeExpired,
                message: "Code expired".to_string(),
                details,
            },
            (AuthOperation::Verify, 500) => Self {
                kind: AuthErrorKind::Server,
                message: "Server error".to_string(),
                details,
            },
            _ => Self {
                kind: AuthErrorKind::Rejected,
                message: server_error_message(body)
                    .unwrap_or_else(|| "An error occurred".to_string()),
                details,
            },
        }
    }

    /// Classifies a transport-level `reqwest` error.
    ///
    /// Connect failures and timeouts count as "no response received";
    /// everything else is uncategorized.
    pub fn from_transport(op: AuthOperation, e: &reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            let message = match op {
                AuthOperation::Login => "Network error: No response from server",
                AuthOperation::Verify => "Network error",
            };
            Self {
                kind: AuthErrorKind::Network,
                message: message.to_string(),
                details: Some(e.to_string()),
            }
        } else {
            Self {
                kind: AuthErrorKind::Unexpected,
                message: "Unexpected error".to_string(),
                details: Some(e.to_string()),
            }
        }
    }
}

/// Extracts the `{error}` field from a JSON error body.
fn server_error_message(body: &str) -> Option<String> {
    let json = serde_json::from_str::<Value>(body).ok()?;
    json.get("error")
        .and_then(Value::as_str)
        .map(str::to_string)
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AuthError {}
