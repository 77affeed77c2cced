use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config;
use crate::state::session::SessionStore;

use super::types::{ApiError, Session};

/// HTTP core shared by every endpoint group. Holds the reqwest client, an
/// optional base-url override used by tests, and the session repository the
/// authenticated endpoints read their headers from.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    sessions: SessionStore,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_sessions(SessionStore::browser())
    }

    pub fn with_sessions(sessions: SessionStore) -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            sessions,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>, sessions: SessionStore) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            sessions,
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    /// Credential headers replayed on authenticated endpoints. Fails with an
    /// unauthenticated error when no usable session is stored.
    pub(super) fn session_headers(&self) -> Result<HeaderMap, ApiError> {
        let session = self
            .sessions
            .load()
            .ok_or_else(|| ApiError::unauthenticated("No active session"))?;
        let mut headers = HeaderMap::new();
        insert_header(&mut headers, "access-token", &session.access_token)?;
        insert_header(&mut headers, "client", &session.client)?;
        insert_header(&mut headers, "uid", &session.uid)?;
        Ok(headers)
    }
}

fn insert_header(
    headers: &mut HeaderMap,
    name: &'static str,
    value: &str,
) -> Result<(), ApiError> {
    let value = HeaderValue::from_str(value)
        .map_err(|_| ApiError::unauthenticated("Stored session tokens are not sendable"))?;
    headers.insert(name, value);
    Ok(())
}

/// Reads the token triple the backend returns as response headers on
/// sign-in. Absent or empty headers mean no session was issued.
pub(super) fn session_from_headers(headers: &HeaderMap) -> Option<Session> {
    Some(Session::new(
        header_string(headers, "access-token")?,
        header_string(headers, "client")?,
        header_string(headers, "uid")?,
    ))
}

fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

pub(super) fn request_error(err: reqwest::Error) -> ApiError {
    ApiError::request_failed(format!("Request failed: {}", err))
}

pub(super) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json()
        .await
        .map_err(|err| ApiError::unknown(format!("Failed to parse response: {}", err)))
}

/// Converts a non-success response into the error currency, keeping the
/// backend's message and code when the body carries them.
pub(super) async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    match response.json::<ApiError>().await {
        Ok(mut error) => {
            if error.code.is_empty() {
                error.code = code_for_status(status);
            }
            error
        }
        Err(_) => ApiError {
            error: format!("Request failed with status {}", status.as_u16()),
            code: code_for_status(status),
            details: None,
        },
    }
}

fn code_for_status(status: StatusCode) -> String {
    if status == StatusCode::UNAUTHORIZED {
        "UNAUTHORIZED".to_string()
    } else {
        "UNKNOWN".to_string()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Session;
    use crate::state::session::SessionStore;

    fn headers_with(entries: &[(&'static str, &str)]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (name, value) in entries {
            headers.insert(*name, HeaderValue::from_str(value).unwrap());
        }
        headers
    }

    #[test]
    fn session_from_headers_requires_all_three_tokens() {
        let full = headers_with(&[
            ("access-token", "tok"),
            ("client", "cli"),
            ("uid", "user@example.com"),
        ]);
        let session = session_from_headers(&full).unwrap();
        assert_eq!(session.access_token, "tok");
        assert_eq!(session.client, "cli");
        assert_eq!(session.uid, "user@example.com");

        let partial = headers_with(&[("access-token", "tok"), ("client", "cli")]);
        assert!(session_from_headers(&partial).is_none());

        let empty_value = headers_with(&[
            ("access-token", ""),
            ("client", "cli"),
            ("uid", "user@example.com"),
        ]);
        assert!(session_from_headers(&empty_value).is_none());
    }

    #[test]
    fn session_headers_replay_the_stored_tokens() {
        let sessions = SessionStore::in_memory();
        sessions
            .save(&Session::new("tok", "cli", "user@example.com"))
            .unwrap();
        let client = ApiClient::with_sessions(sessions);

        let headers = client.session_headers().unwrap();
        assert_eq!(headers.get("access-token").unwrap(), "tok");
        assert_eq!(headers.get("client").unwrap(), "cli");
        assert_eq!(headers.get("uid").unwrap(), "user@example.com");
    }

    #[test]
    fn session_headers_fail_without_a_session() {
        let client = ApiClient::with_sessions(SessionStore::in_memory());
        let err = client.session_headers().unwrap_err();
        assert_eq!(err.code, "UNAUTHORIZED");
    }

    #[test]
    fn status_codes_map_unauthorized_separately() {
        assert_eq!(code_for_status(StatusCode::UNAUTHORIZED), "UNAUTHORIZED");
        assert_eq!(code_for_status(StatusCode::UNPROCESSABLE_ENTITY), "UNKNOWN");
        assert_eq!(code_for_status(StatusCode::INTERNAL_SERVER_ERROR), "UNKNOWN");
    }
}
