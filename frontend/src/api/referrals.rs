use super::client::{error_from_response, parse_json, request_error, ApiClient};
use super::types::{
    ApiError, GenerateCodeResponse, ReferralStatistics, SendReferralEmailRequest,
};

impl ApiClient {
    pub async fn referral_statistics(&self) -> Result<ReferralStatistics, ApiError> {
        let headers = self.session_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/referrals/statistics", base_url))
            .headers(headers)
            .send()
            .await
            .map_err(request_error)?;

        if response.status().is_success() {
            parse_json(response).await
        } else {
            Err(error_from_response(response).await)
        }
    }

    /// Requests a fresh single-use referral code. The caller composes the
    /// shareable link from it.
    pub async fn generate_referral_code(&self) -> Result<GenerateCodeResponse, ApiError> {
        let headers = self.session_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/referrals/generate_code", base_url))
            .headers(headers)
            .send()
            .await
            .map_err(request_error)?;

        if response.status().is_success() {
            parse_json(response).await
        } else {
            Err(error_from_response(response).await)
        }
    }

    pub async fn send_referral_email(
        &self,
        request: SendReferralEmailRequest,
    ) -> Result<(), ApiError> {
        let headers = self.session_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/send_referral_email", base_url))
            .headers(headers)
            .json(&request)
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
