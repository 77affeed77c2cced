use crate::api::{ApiClient, ApiError, LoginRequest, Session};
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl LoginRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Signs in and persists the returned session in the client's store.
    pub async fn sign_in(&self, request: LoginRequest) -> Result<Session, ApiError> {
        self.client.sign_in(request).await
    }
}
