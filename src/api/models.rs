use serde::{Deserialize, Serialize};

/// Body of `POST /login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Reply of `POST /login`. Either field may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Body of `POST /profile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRequest {
    pub token: String,
}

/// Body of `POST /update-profile`. A missing name leaves it unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Reply of both profile endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfileResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ProfileData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileData {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub coins: i64,
}

/// Shape of the `{"error": "..."}` bodies the server sends with 4xx/5xx.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_request_omits_missing_name() {
        let body = serde_json::to_value(UpdateProfileRequest {
            token: "T".to_string(),
            name: None,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "token": "T" }));
    }

    #[test]
    fn profile_data_defaults_coins_to_zero() {
        let data: ProfileData =
            serde_json::from_str(r#"{"name": "Ann", "email": "ann@example.com"}"#).unwrap();
        assert_eq!(data.coins, 0);
    }

    #[test]
    fn login_response_accepts_error_only_body() {
        let resp: LoginResponse = serde_json::from_str(r#"{"error": "Invalid credentials"}"#).unwrap();
        assert_eq!(resp.token, None);
        assert_eq!(resp.error.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn profile_response_ignores_unknown_fields() {
        let resp: ProfileResponse = serde_json::from_str(
            r#"{"data": {"name": "Ann", "email": "a@b.com", "coins": 12, "level": 3}}"#,
        )
        .unwrap();
        assert_eq!(resp.data.map(|d| d.coins), Some(12));
    }
}
