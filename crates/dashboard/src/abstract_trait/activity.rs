use crate::{
    domain::{
        requests::{CreateActivityRequest, ListQuery, MultipartRequest, UpdateActivityRequest},
        response::{Activity, Paginated},
    },
    session::AccessToken,
};
use async_trait::async_trait;
use shared::errors::ClientError;
use std::sync::Arc;

pub type DynActivityService = Arc<dyn ActivityServiceTrait + Send + Sync>;

#[async_trait]
pub trait ActivityServiceTrait {
    async fn find_all(
        &self,
        token: &AccessToken,
        query: &ListQuery,
    ) -> Result<Paginated<Activity>, ClientError>;
    async fn find_by_id(&self, token: &AccessToken, id: &str) -> Result<Activity, ClientError>;
    async fn create(
        &self,
        token: &AccessToken,
        req: MultipartRequest<CreateActivityRequest>,
    ) -> Result<Activity, ClientError>;
    async fn update(
        &self,
        token: &AccessToken,
        id: &str,
        req: MultipartRequest<UpdateActivityRequest>,
    ) -> Result<Activity, ClientError>;
    async fn delete(&self, token: &AccessToken, id: &str) -> Result<(), ClientError>;
}
