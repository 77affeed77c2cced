use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Token bundle issued by the backend on sign-in. The serialized field names
/// match the backend's header names; the same record is persisted verbatim
/// and replayed as request headers on authenticated calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "access-token")]
    pub access_token: String,
    pub client: String,
    pub uid: String,
}

impl Session {
    pub fn new(
        access_token: impl Into<String>,
        client: impl Into<String>,
        uid: impl Into<String>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            client: client.into(),
            uid: uid.into(),
        }
    }

    /// Parses a stored record. Anything short of three non-empty tokens is
    /// treated as no session at all.
    pub fn parse(raw: &str) -> Option<Self> {
        serde_json::from_str::<Session>(raw)
            .ok()
            .filter(Session::is_complete)
    }

    fn is_complete(&self) -> bool {
        !self.access_token.is_empty() && !self.client.is_empty() && !self.uid.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration payload. `referral_code` serializes as `null` for organic
/// signups; the backend treats both the same.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub referral_code: Option<String>,
}

impl SignupRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        let password = password.into();
        Self {
            email: email.into(),
            password_confirmation: password.clone(),
            password,
            referral_code: None,
        }
    }

    pub fn with_referral_code(mut self, code: Option<String>) -> Self {
        self.referral_code = code;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferralStatistics {
    #[serde(default)]
    pub rewards_point: f64,
    #[serde(default)]
    pub referral_count: u32,
    #[serde(default)]
    pub referred_user_emails: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateCodeResponse {
    pub referral_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendReferralEmailRequest {
    pub email: String,
    pub referral_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unauthenticated(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNAUTHORIZED".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }
}

/// Pulls a printable message out of a registration error body. The backend
/// reports signup problems as `errors`: either a plain string, a list of
/// strings, or an object carrying `full_messages`.
pub fn signup_error_message(body: &Value) -> Option<String> {
    match body.get("errors")? {
        Value::String(message) => Some(message.clone()),
        Value::Array(items) => join_messages(items),
        Value::Object(map) => match map.get("full_messages") {
            Some(Value::Array(items)) => join_messages(items),
            _ => None,
        },
        _ => None,
    }
}

fn join_messages(items: &[Value]) -> Option<String> {
    let messages: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
    if messages.is_empty() {
        None
    } else {
        Some(messages.join(", "))
    }
}
