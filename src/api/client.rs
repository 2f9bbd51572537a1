use std::fmt;
use std::time::Instant;

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::models::{
    ErrorBody, LoginRequest, LoginResponse, ProfileRequest, ProfileResponse, UpdateProfileRequest,
};
use crate::config::ApiConfig;

/// The three remote operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Profile,
    UpdateProfile,
}

impl Endpoint {
    /// Path relative to the base URL.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Login => "login",
            Endpoint::Profile => "profile",
            Endpoint::UpdateProfile => "update-profile",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A completed HTTP exchange.
///
/// `body` is only ever populated for success statuses, and is `None` when
/// the server answered with an empty body or JSON `null`. `message` carries
/// the server's explanation for non-success statuses: the `error` field of
/// the body when present, otherwise the HTTP reason phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
    pub status: StatusCode,
    pub body: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// HTTP client bound to one base URL.
///
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = normalize_base_url(&config.base_url)?;

        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(ApiError::ClientBuild)?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.base_url, endpoint.path())
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<ApiResponse<LoginResponse>, ApiError> {
        self.post(Endpoint::Login, request).await
    }

    pub async fn get_profile(
        &self,
        request: &ProfileRequest,
    ) -> Result<ApiResponse<ProfileResponse>, ApiError> {
        self.post(Endpoint::Profile, request).await
    }

    pub async fn update_profile(
        &self,
        request: &UpdateProfileRequest,
    ) -> Result<ApiResponse<ProfileResponse>, ApiError> {
        self.post(Endpoint::UpdateProfile, request).await
    }

    async fn post<B, R>(&self, endpoint: Endpoint, body: &B) -> Result<ApiResponse<R>, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request_id = Uuid::new_v4();
        let started = Instant::now();

        let result = self.do_post(endpoint, body).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(response) => tracing::info!(
                %request_id,
                %endpoint,
                status = response.status.as_u16(),
                elapsed_ms,
                "api call completed"
            ),
            Err(e) => tracing::warn!(
                %request_id,
                %endpoint,
                kind = e.kind(),
                elapsed_ms,
                error = %e,
                "api call failed"
            ),
        }

        result
    }

    async fn do_post<B, R>(&self, endpoint: Endpoint, body: &B) -> Result<ApiResponse<R>, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.url(endpoint))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(endpoint, e))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::from_reqwest(endpoint, e))?;

        if !status.is_success() {
            return Ok(ApiResponse {
                status,
                body: None,
                message: failure_message(status, &bytes),
            });
        }

        let body = if bytes.iter().all(u8::is_ascii_whitespace) {
            None
        } else {
            serde_json::from_slice::<Option<R>>(&bytes)
                .map_err(|source| ApiError::Decode { endpoint, source })?
        };

        Ok(ApiResponse {
            status,
            body,
            message: None,
        })
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ApiError> {
    let url = Url::parse(raw).map_err(|e| ApiError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    // Endpoint paths are appended as text, so nothing may follow the path.
    if url.query().is_some() || url.fragment().is_some() {
        return Err(ApiError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: "query strings and fragments are not allowed".to_string(),
        });
    }

    Ok(raw.trim_end_matches('/').to_string())
}

fn failure_message(status: StatusCode, bytes: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(bytes)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty())
        .or_else(|| status.canonical_reason().map(str::to_string))
}
