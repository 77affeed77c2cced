use crate::api::{
    ApiClient, ApiError, GenerateCodeResponse, ReferralStatistics, SendReferralEmailRequest,
};
use crate::state::session::SessionStore;
use std::rc::Rc;

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub fn sessions(&self) -> &SessionStore {
        self.client.sessions()
    }

    pub async fn fetch_statistics(&self) -> Result<ReferralStatistics, ApiError> {
        self.client.referral_statistics().await
    }

    pub async fn generate_code(&self) -> Result<GenerateCodeResponse, ApiError> {
        self.client.generate_referral_code().await
    }

    pub async fn send_email(&self, request: SendReferralEmailRequest) -> Result<(), ApiError> {
        self.client.send_referral_email(request).await
    }

    pub async fn sign_out(&self) -> Result<(), ApiError> {
        self.client.sign_out().await
    }
}
