use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(default, alias = "total_users")]
    pub total_users: u64,

    #[serde(default, alias = "total_news")]
    pub total_news: u64,

    #[serde(default, alias = "total_prayer_rooms")]
    pub total_prayer_rooms: u64,

    #[serde(default, alias = "total_activities")]
    pub total_activities: u64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChartDataset {
    pub label: String,
    #[serde(default)]
    pub data: Vec<f64>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChartSeries {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<ChartDataset>,
}
