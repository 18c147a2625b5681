use contracts::system::auth::{parse_sign_in_response, SignInRequest, UserProfile};

use crate::shared::api_utils::{get_json, post_json_public_text, ApiError};

/// Trade the identity provider's token for the backend credential (`POST /auth`).
pub async fn exchange_credential(provider_token: &str) -> Result<String, ApiError> {
    let request = SignInRequest {
        token: provider_token.to_string(),
    };
    let body = post_json_public_text("/auth", &request).await?;
    parse_sign_in_response(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Profile of the signed-in employee (`GET /user/`).
pub async fn fetch_profile() -> Result<UserProfile, ApiError> {
    get_json("/user/").await
}
