//! Typed HTTP client for the account API.
//!
//! Three JSON endpoints, all `POST`, with the session token carried in the
//! request body rather than a header.

mod client;
mod error;
mod models;

pub use client::{ApiClient, ApiResponse, Endpoint};
pub use error::ApiError;
pub use models::{
    LoginRequest, LoginResponse, ProfileData, ProfileRequest, ProfileResponse,
    UpdateProfileRequest,
};
