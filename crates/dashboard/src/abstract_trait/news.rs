use crate::{
    domain::{
        requests::{CreateNewsRequest, ListQuery, MultipartRequest, UpdateNewsRequest},
        response::{News, Paginated},
    },
    session::AccessToken,
};
use async_trait::async_trait;
use shared::errors::ClientError;
use std::sync::Arc;

pub type DynNewsService = Arc<dyn NewsServiceTrait + Send + Sync>;

#[async_trait]
pub trait NewsServiceTrait {
    async fn find_all(
        &self,
        token: &AccessToken,
        query: &ListQuery,
    ) -> Result<Paginated<News>, ClientError>;
    async fn find_by_id(&self, token: &AccessToken, id: &str) -> Result<News, ClientError>;
    async fn create(
        &self,
        token: &AccessToken,
        req: MultipartRequest<CreateNewsRequest>,
    ) -> Result<News, ClientError>;
    async fn update(
        &self,
        token: &AccessToken,
        id: &str,
        req: MultipartRequest<UpdateNewsRequest>,
    ) -> Result<News, ClientError>;
    async fn delete(&self, token: &AccessToken, id: &str) -> Result<(), ClientError>;
}
