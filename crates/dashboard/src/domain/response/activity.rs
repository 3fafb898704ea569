use crate::domain::{requests::ContactPerson, response::id::deserialize_id};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, alias = "start_date")]
    pub start_date: Option<DateTime<Utc>>,

    #[serde(default, alias = "end_date")]
    pub end_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub contact: Option<ContactPerson>,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default, alias = "created_at")]
    pub created_at: Option<DateTime<Utc>>,
}
