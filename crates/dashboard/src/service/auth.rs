use crate::{
    abstract_trait::AuthServiceTrait,
    domain::{requests::LoginRequest, response::TokenPair},
    service::{client::ApiClient, envelope::AUTH},
    session::AccessToken,
};
use async_trait::async_trait;
use reqwest::Method;
use serde_json::json;
use shared::errors::ClientError;

pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn login(&self, req: &LoginRequest) -> Result<TokenPair, ClientError> {
        self.client
            .send_json(Method::POST, None, "/auth/login", req, AUTH.mutation)
            .await
    }

    async fn logout(&self, token: &AccessToken) -> Result<(), ClientError> {
        self.client
            .send_empty(Method::POST, Some(token), "/auth/logout")
            .await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, ClientError> {
        self.client
            .send_json(
                Method::POST,
                None,
                "/auth/refresh",
                &json!({ "refresh_token": refresh_token }),
                AUTH.mutation,
            )
            .await
    }
}
