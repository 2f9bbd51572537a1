use async_trait::async_trait;

use crate::api::{ApiClient, ProfileRequest, ProfileResponse, UpdateProfileRequest};
use crate::repository::{into_resource, ProfileRepository, PROFILE_FALLBACK_ERROR};
use crate::resource::Resource;

pub struct RemoteProfileRepository {
    api: ApiClient,
}

impl RemoteProfileRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ProfileRepository for RemoteProfileRepository {
    async fn get_profile(&self, token: &str) -> Resource<ProfileResponse> {
        let request = ProfileRequest {
            token: token.to_string(),
        };
        into_resource(self.api.get_profile(&request).await, PROFILE_FALLBACK_ERROR)
    }

    async fn update_profile(&self, token: &str, name: Option<&str>) -> Resource<ProfileResponse> {
        let request = UpdateProfileRequest {
            token: token.to_string(),
            name: name.map(str::to_string),
        };
        into_resource(self.api.update_profile(&request).await, PROFILE_FALLBACK_ERROR)
    }
}
