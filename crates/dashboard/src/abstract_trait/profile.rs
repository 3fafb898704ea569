use crate::session::{AccessToken, CurrentUser, SessionIdentity};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProfileFetcher = Arc<dyn ProfileFetcherTrait + Send + Sync>;

#[async_trait]
pub trait ProfileFetcherTrait {
    /// Never fails: on any error the placeholder identity is handed back.
    async fn fetch(&self, token: &AccessToken, identity: SessionIdentity) -> CurrentUser;
}
