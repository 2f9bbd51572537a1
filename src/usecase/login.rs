use std::sync::Arc;

use crate::api::LoginResponse;
use crate::repository::AuthRepository;
use crate::resource::Resource;

pub const EMPTY_CREDENTIALS_ERROR: &str = "Email and password cannot be empty";

/// Validates credentials, then logs in through the repository.
#[derive(Clone)]
pub struct LoginUseCase {
    repository: Arc<dyn AuthRepository>,
}

impl LoginUseCase {
    pub fn new(repository: Arc<dyn AuthRepository>) -> Self {
        Self { repository }
    }

    /// Blank email or password short-circuits without touching the network.
    pub async fn execute(&self, email: &str, password: &str) -> Resource<LoginResponse> {
        if email.trim().is_empty() || password.trim().is_empty() {
            tracing::debug!("login rejected: blank credentials");
            return Resource::error(EMPTY_CREDENTIALS_ERROR);
        }
        self.repository.login(email, password).await
    }
}
