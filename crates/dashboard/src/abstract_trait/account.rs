use crate::{
    domain::{
        requests::{CreateAccountRequest, ListQuery, UpdateAccountRequest, UpdateRoleRequest},
        response::{Paginated, UserProfile},
    },
    session::AccessToken,
};
use async_trait::async_trait;
use shared::errors::ClientError;
use std::sync::Arc;

pub type DynAccountService = Arc<dyn AccountServiceTrait + Send + Sync>;

#[async_trait]
pub trait AccountServiceTrait {
    async fn me(&self, token: &AccessToken) -> Result<UserProfile, ClientError>;
    async fn find_all(
        &self,
        token: &AccessToken,
        query: &ListQuery,
    ) -> Result<Paginated<UserProfile>, ClientError>;
    async fn find_by_id(&self, token: &AccessToken, id: &str) -> Result<UserProfile, ClientError>;
    async fn create(
        &self,
        token: &AccessToken,
        req: &CreateAccountRequest,
    ) -> Result<UserProfile, ClientError>;
    async fn update(
        &self,
        token: &AccessToken,
        id: &str,
        req: &UpdateAccountRequest,
    ) -> Result<UserProfile, ClientError>;
    async fn update_role(
        &self,
        token: &AccessToken,
        id: &str,
        req: &UpdateRoleRequest,
    ) -> Result<UserProfile, ClientError>;
    async fn delete(&self, token: &AccessToken, id: &str) -> Result<(), ClientError>;
}
