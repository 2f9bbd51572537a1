use async_trait::async_trait;

use crate::api::{ApiClient, LoginRequest, LoginResponse};
use crate::repository::{into_resource, AuthRepository, LOGIN_FALLBACK_ERROR};
use crate::resource::Resource;

pub struct RemoteAuthRepository {
    api: ApiClient,
}

impl RemoteAuthRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AuthRepository for RemoteAuthRepository {
    async fn login(&self, email: &str, password: &str) -> Resource<LoginResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        into_resource(self.api.login(&request).await, LOGIN_FALLBACK_ERROR)
    }
}
