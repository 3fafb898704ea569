use crate::{
    abstract_trait::{DynAccountService, ProfileFetcherTrait},
    session::{AccessToken, CurrentUser, SessionIdentity},
};
use async_trait::async_trait;
use tracing::warn;

/// Upgrades a cookie-derived placeholder to the profile the remote API holds.
pub struct ProfileFetcher {
    accounts: DynAccountService,
}

impl ProfileFetcher {
    pub fn new(accounts: DynAccountService) -> Self {
        Self { accounts }
    }
}

#[async_trait]
impl ProfileFetcherTrait for ProfileFetcher {
    async fn fetch(&self, token: &AccessToken, identity: SessionIdentity) -> CurrentUser {
        match self.accounts.me(token).await {
            Ok(profile) => CurrentUser::Profile(profile),
            Err(err) => {
                warn!(
                    user_id = %identity.id,
                    "failed to fetch profile, keeping session placeholder: {err}"
                );
                CurrentUser::Placeholder(identity)
            }
        }
    }
}
