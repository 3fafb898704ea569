use crate::{
    domain::{
        requests::SystemLogQuery,
        response::{Paginated, SystemLog},
    },
    session::AccessToken,
};
use async_trait::async_trait;
use shared::errors::ClientError;
use std::sync::Arc;

pub type DynSystemLogService = Arc<dyn SystemLogServiceTrait + Send + Sync>;

#[async_trait]
pub trait SystemLogServiceTrait {
    async fn find_all(
        &self,
        token: &AccessToken,
        query: &SystemLogQuery,
    ) -> Result<Paginated<SystemLog>, ClientError>;
    async fn find_by_id(&self, token: &AccessToken, id: &str) -> Result<SystemLog, ClientError>;
}
