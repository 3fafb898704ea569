use crate::{
    domain::{
        requests::ChartQuery,
        response::{ChartSeries, DashboardSummary},
    },
    session::AccessToken,
};
use async_trait::async_trait;
use shared::errors::ClientError;
use std::sync::Arc;

pub type DynDashboardService = Arc<dyn DashboardServiceTrait + Send + Sync>;

#[async_trait]
pub trait DashboardServiceTrait {
    async fn summary(&self, token: &AccessToken) -> Result<DashboardSummary, ClientError>;
    async fn charts(
        &self,
        token: &AccessToken,
        query: &ChartQuery,
    ) -> Result<ChartSeries, ClientError>;
}
