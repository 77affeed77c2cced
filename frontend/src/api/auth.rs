use serde_json::Value;

use super::client::{error_from_response, request_error, session_from_headers, ApiClient};
use super::types::{signup_error_message, ApiError, LoginRequest, Session, SignupRequest};

impl ApiClient {
    /// Registers a new account. A referral code travels in the payload when
    /// the signup came through a referral link; signing up never creates a
    /// session.
    pub async fn sign_up(&self, request: SignupRequest) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/auth", base_url))
            .json(&request)
            .send()
            .await
            .map_err(request_error)?;

        if response.status().is_success() {
            return Ok(());
        }
        let message = response
            .json::<Value>()
            .await
            .ok()
            .as_ref()
            .and_then(signup_error_message);
        match message {
            Some(message) => Err(ApiError::validation(message)),
            None => Err(ApiError::unknown("Signup failed!")),
        }
    }

    /// Exchanges credentials for a session. The backend issues the token
    /// triple as response headers; it is persisted before returning.
    pub async fn sign_in(&self, request: LoginRequest) -> Result<Session, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/auth/sign_in", base_url))
            .json(&request)
            .send()
            .await
            .map_err(request_error)?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        let session = session_from_headers(response.headers())
            .ok_or_else(|| ApiError::unknown("Sign-in response carried no session tokens"))?;
        self.sessions().save(&session).map_err(ApiError::unknown)?;
        Ok(session)
    }

    /// Revokes the session on the backend. Callers treat this as best-effort;
    /// the local session is cleared by them regardless of the outcome here.
    pub async fn sign_out(&self) -> Result<(), ApiError> {
        let headers = self.session_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .delete(format!("{}/auth/sign_out", base_url))
            .headers(headers)
            .send()
            .await
            .map_err(request_error)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(error_from_response(response).await)
        }
    }
}
