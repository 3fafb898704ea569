use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenPair {
    #[serde(alias = "accessToken")]
    pub access_token: String,

    #[serde(default, alias = "refreshToken")]
    pub refresh_token: Option<String>,
}

/// What the dashboard UI gets back after a session cookie change.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResult {
    pub redirect_to: String,
}
