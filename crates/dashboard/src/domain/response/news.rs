use crate::domain::response::id::deserialize_id;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct News {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub slug: String,

    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default, alias = "published_at")]
    pub published_at: Option<DateTime<Utc>>,

    #[serde(default, alias = "created_at")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, alias = "updated_at")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SlugResponse {
    pub slug: String,
}
