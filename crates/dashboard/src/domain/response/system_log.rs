use crate::domain::response::id::deserialize_id;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SystemLog {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,

    #[serde(default)]
    pub level: String,

    #[serde(default)]
    pub action: String,

    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub actor: Option<String>,

    #[serde(default, alias = "ip_address")]
    pub ip_address: Option<String>,

    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<serde_json::Value>,

    #[serde(default, alias = "created_at")]
    pub created_at: Option<DateTime<Utc>>,
}
