use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct GeoPoint {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreatePrayerRoomRequest {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(length(min = 1))]
    pub address: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(
        default,
        deserialize_with = "super::form::json_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub facilities: Option<Vec<String>>,

    #[serde(
        default,
        deserialize_with = "super::form::json_text",
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(nested)]
    pub location: Option<GeoPoint>,

    #[serde(
        default,
        deserialize_with = "super::form::json_text",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<Object>)]
    pub opening_hours: Option<serde_json::Value>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePrayerRoomRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(
        default,
        deserialize_with = "super::form::json_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub facilities: Option<Vec<String>>,

    #[serde(
        default,
        deserialize_with = "super::form::json_text",
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(nested)]
    pub location: Option<GeoPoint>,

    #[serde(
        default,
        deserialize_with = "super::form::json_text",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<Object>)]
    pub opening_hours: Option<serde_json::Value>,
}
