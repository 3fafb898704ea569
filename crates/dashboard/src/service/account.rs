use crate::{
    abstract_trait::AccountServiceTrait,
    domain::{
        requests::{CreateAccountRequest, ListQuery, UpdateAccountRequest, UpdateRoleRequest},
        response::{Paginated, UserProfile},
    },
    service::{client::ApiClient, envelope::ACCOUNTS},
    session::AccessToken,
};
use async_trait::async_trait;
use reqwest::Method;
use shared::errors::ClientError;

pub struct AccountService {
    client: ApiClient,
}

impl AccountService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AccountServiceTrait for AccountService {
    async fn me(&self, token: &AccessToken) -> Result<UserProfile, ClientError> {
        self.client
            .get(Some(token), "/accounts/me", &[], ACCOUNTS.item)
            .await
    }

    async fn find_all(
        &self,
        token: &AccessToken,
        query: &ListQuery,
    ) -> Result<Paginated<UserProfile>, ClientError> {
        self.client
            .get_page(Some(token), "/accounts", &query.to_pairs(), ACCOUNTS.list)
            .await
    }

    async fn find_by_id(&self, token: &AccessToken, id: &str) -> Result<UserProfile, ClientError> {
        self.client
            .get(Some(token), &format!("/accounts/{id}"), &[], ACCOUNTS.item)
            .await
    }

    async fn create(
        &self,
        token: &AccessToken,
        req: &CreateAccountRequest,
    ) -> Result<UserProfile, ClientError> {
        self.client
            .send_json(Method::POST, Some(token), "/accounts", req, ACCOUNTS.mutation)
            .await
    }

    async fn update(
        &self,
        token: &AccessToken,
        id: &str,
        req: &UpdateAccountRequest,
    ) -> Result<UserProfile, ClientError> {
        self.client
            .send_json(
                Method::PUT,
                Some(token),
                &format!("/accounts/{id}"),
                req,
                ACCOUNTS.mutation,
            )
            .await
    }

    async fn update_role(
        &self,
        token: &AccessToken,
        id: &str,
        req: &UpdateRoleRequest,
    ) -> Result<UserProfile, ClientError> {
        self.client
            .send_json(
                Method::PUT,
                Some(token),
                &format!("/accounts/{id}/role"),
                req,
                ACCOUNTS.mutation,
            )
            .await
    }

    async fn delete(&self, token: &AccessToken, id: &str) -> Result<(), ClientError> {
        self.client
            .send_empty(Method::DELETE, Some(token), &format!("/accounts/{id}"))
            .await
    }
}
