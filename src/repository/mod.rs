//! Repositories turn raw API outcomes into [`Resource`] values.
//!
//! The traits are the seam between use cases and the network; tests swap in
//! fakes, production wires the `Remote*` implementations around an
//! explicitly constructed [`ApiClient`](crate::api::ApiClient).

mod auth;
mod profile;

use async_trait::async_trait;

use crate::api::{ApiError, ApiResponse, LoginResponse, ProfileResponse};
use crate::resource::{Resource, CONNECTIVITY_ERROR};

pub use auth::RemoteAuthRepository;
pub use profile::RemoteProfileRepository;

/// Fallback when a login attempt fails without a server message.
pub const LOGIN_FALLBACK_ERROR: &str = "An unknown error occurred";

/// Fallback when a profile call fails without a server message.
pub const PROFILE_FALLBACK_ERROR: &str = "Unknown error";

#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Resource<LoginResponse>;
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn get_profile(&self, token: &str) -> Resource<ProfileResponse>;

    async fn update_profile(&self, token: &str, name: Option<&str>) -> Resource<ProfileResponse>;
}

/// Map a finished API call into a [`Resource`].
///
/// - success status with a body: `Success(body)`, body untouched
/// - non-success status or missing body: `Error(server message or fallback)`
/// - transport failure of any kind: `Error(CONNECTIVITY_ERROR)`
pub fn into_resource<T>(result: Result<ApiResponse<T>, ApiError>, fallback: &str) -> Resource<T> {
    match result {
        Ok(response) => {
            let success = response.is_success();
            match (success, response.body) {
                (true, Some(body)) => Resource::success(body),
                _ => {
                    let message = response
                        .message
                        .filter(|m| !m.trim().is_empty())
                        .unwrap_or_else(|| fallback.to_string());
                    Resource::error(message)
                }
            }
        }
        Err(_) => Resource::Error(CONNECTIVITY_ERROR.to_string()),
    }
}
