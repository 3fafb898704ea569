use crate::domain::{requests::GeoPoint, response::id::deserialize_id};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrayerRoom {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub city: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub facilities: Vec<String>,

    #[serde(default)]
    pub location: Option<GeoPoint>,

    #[serde(default, alias = "opening_hours")]
    #[schema(value_type = Option<Object>)]
    pub opening_hours: Option<serde_json::Value>,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default, alias = "created_at")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, alias = "updated_at")]
    pub updated_at: Option<DateTime<Utc>>,
}
