use crate::{
    domain::{requests::LoginRequest, response::TokenPair},
    session::AccessToken,
};
use async_trait::async_trait;
use shared::errors::ClientError;
use std::sync::Arc;

pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;

#[async_trait]
pub trait AuthServiceTrait {
    async fn login(&self, req: &LoginRequest) -> Result<TokenPair, ClientError>;
    async fn logout(&self, token: &AccessToken) -> Result<(), ClientError>;
    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, ClientError>;
}
