use crate::{
    abstract_trait::DashboardServiceTrait,
    domain::{
        requests::ChartQuery,
        response::{ChartSeries, DashboardSummary},
    },
    service::{client::ApiClient, envelope::DASHBOARD},
    session::AccessToken,
};
use async_trait::async_trait;
use shared::errors::ClientError;

pub struct DashboardService {
    client: ApiClient,
}

impl DashboardService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DashboardServiceTrait for DashboardService {
    async fn summary(&self, token: &AccessToken) -> Result<DashboardSummary, ClientError> {
        self.client
            .get(Some(token), "/dashboard/summary", &[], DASHBOARD.item)
            .await
    }

    async fn charts(
        &self,
        token: &AccessToken,
        query: &ChartQuery,
    ) -> Result<ChartSeries, ClientError> {
        self.client
            .get(Some(token), "/dashboard/charts", &query.to_pairs(), DASHBOARD.item)
            .await
    }
}
