use crate::domain::response::id::deserialize_id;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An account as the remote API reports it. `/accounts/me` returns the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,

    #[serde(default)]
    pub role: String,

    #[serde(default, alias = "first_name")]
    pub first_name: String,

    #[serde(default, alias = "last_name")]
    pub last_name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default, alias = "phone_number")]
    pub phone_number: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    #[serde(default, alias = "is_active", skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    #[serde(default, alias = "created_at")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, alias = "updated_at")]
    pub updated_at: Option<DateTime<Utc>>,
}
