use crate::api::{ApiClient, ApiError, SignupRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct SignupRepository {
    client: Rc<ApiClient>,
}

impl SignupRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn sign_up(&self, request: SignupRequest) -> Result<(), ApiError> {
        self.client.sign_up(request).await
    }
}
