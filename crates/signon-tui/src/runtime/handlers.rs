//! Effect handler implementations.
//!
//! Handlers are pure async functions that perform one network call and
//! return the result event. The runtime spawns them and routes the returned
//! event into the inbox.

use signon_core::auth::{AuthClient, Credentials};

use crate::common::RequestId;
use crate::events::UiEvent;

pub async fn submit_login(client: AuthClient, req: RequestId, credentials: Credentials) -> UiEvent {
    let result = client.login(&credentials).await;
    UiEvent::LoginResult { req, result }
}

pub async fn submit_verify(client: AuthClient, req: RequestId, code: String) -> UiEvent {
    let result = client.verify(&code).await;
    UiEvent::VerifyResult { req, result }
}

#[cfg(test)]
mod tests {
    use signon_core::config::Config;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn test_login_handler_carries_request_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "message": "Correct credentials",
                "token": "fake-token",
            })))
            .mount(&server)
            .await;

        let config = Config {
            base_url: server.uri(),
            ..Config::default()
        };
        let client = AuthClient::from_config(&config);
        let credentials = Credentials {
            email: "test@email.com".to_string(),
            password: "password123".to_string(),
        };

        let event = submit_login(client, RequestId(7), credentials).await;
        let UiEvent::LoginResult { req, result } = event else {
            panic!("expected LoginResult");
        };
        assert_eq!(req, RequestId(7));
        assert!(result.is_ok());
    }
}
