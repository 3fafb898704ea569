use crate::{
    abstract_trait::SystemLogServiceTrait,
    domain::{
        requests::SystemLogQuery,
        response::{Paginated, SystemLog},
    },
    service::{client::ApiClient, envelope::SYSTEM_LOGS},
    session::AccessToken,
};
use async_trait::async_trait;
use shared::errors::ClientError;

/// Read-only view over the remote audit trail.
pub struct SystemLogService {
    client: ApiClient,
}

impl SystemLogService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SystemLogServiceTrait for SystemLogService {
    async fn find_all(
        &self,
        token: &AccessToken,
        query: &SystemLogQuery,
    ) -> Result<Paginated<SystemLog>, ClientError> {
        self.client
            .get_page(Some(token), "/system-logs", &query.to_pairs(), SYSTEM_LOGS.list)
            .await
    }

    async fn find_by_id(&self, token: &AccessToken, id: &str) -> Result<SystemLog, ClientError> {
        self.client
            .get(Some(token), &format!("/system-logs/{id}"), &[], SYSTEM_LOGS.item)
            .await
    }
}
