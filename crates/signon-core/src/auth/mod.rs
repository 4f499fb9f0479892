//! HTTP client for the authentication service.
//!
//! Two operations: credential login and one-time-code verification. Each is
//! a single POST; failures are classified into [`AuthError`] at this
//! boundary so callers only ever see the structured form.

mod error;

pub use error::{AuthError, AuthErrorKind, AuthOperation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;

/// Credential pair submitted to the login endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful login response body.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub token: Option<String>,
}

/// Successful verification response body.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
struct VerifyRequest<'a> {
    code: &'a str,
}

/// Authentication service client.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl AuthClient {
    /// Creates a client from configuration.
    pub fn from_config(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .unwrap_or_default();
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Submits credentials to the login endpoint.
    ///
    /// Resolves with the parsed body on any 2xx response; all failures are
    /// classified per [`AuthError::from_status`] / [`AuthError::from_transport`].
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AuthError> {
        let url = format!("{}/api/login", self.base_url);
        debug!(email = %credentials.email, "submitting login request");

        let response = self
            .http
            .post(&url)
            .json(credentials)
            .send()
            .await
            .map_err(|e| AuthError::from_transport(AuthOperation::Login, &e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "login rejected");
            return Err(AuthError::from_status(
                AuthOperation::Login,
                status.as_u16(),
                &body,
            ));
        }

        response.json::<LoginResponse>().await.map_err(|e| {
            AuthError::new(
                AuthErrorKind::Unexpected,
                format!("Malformed login response: {e}"),
            )
        })
    }

    /// Submits a six-digit code to the verification endpoint.
    pub async fn verify(&self, code: &str) -> Result<VerifyResponse, AuthError> {
        let url = format!("{}/api/verify-2fa", self.base_url);
        debug!("submitting verification request");

        let response = self
            .http
            .post(&url)
            .json(&VerifyRequest { code })
            .send()
            .await
            .map_err(|e| AuthError::from_transport(AuthOperation::Verify, &e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(status = status.as_u16(), "verification rejected");
            return Err(AuthError::from_status(
                AuthOperation::Verify,
                status.as_u16(),
                &body,
            ));
        }

        response.json::<VerifyResponse>().await.map_err(|e| {
            AuthError::new(
                AuthErrorKind::Unexpected,
                format!("Malformed verification response: {e}"),
            )
        })
    }
}
