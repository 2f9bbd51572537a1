use std::sync::Arc;

use crate::api::ProfileResponse;
use crate::repository::ProfileRepository;
use crate::resource::Resource;

pub const MISSING_TOKEN_ERROR: &str = "Session token is missing";

#[derive(Clone)]
pub struct GetProfileUseCase {
    repository: Arc<dyn ProfileRepository>,
}

impl GetProfileUseCase {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, token: &str) -> Resource<ProfileResponse> {
        if token.trim().is_empty() {
            return Resource::error(MISSING_TOKEN_ERROR);
        }
        self.repository.get_profile(token).await
    }
}

#[derive(Clone)]
pub struct UpdateProfileUseCase {
    repository: Arc<dyn ProfileRepository>,
}

impl UpdateProfileUseCase {
    pub fn new(repository: Arc<dyn ProfileRepository>) -> Self {
        Self { repository }
    }

    /// `name: None` sends the update without a name field.
    pub async fn execute(&self, token: &str, name: Option<&str>) -> Resource<ProfileResponse> {
        if token.trim().is_empty() {
            return Resource::error(MISSING_TOKEN_ERROR);
        }
        self.repository.update_profile(token, name).await
    }
}
