use crate::{
    abstract_trait::NewsServiceTrait,
    domain::{
        requests::{CreateNewsRequest, ListQuery, MultipartRequest, UpdateNewsRequest},
        response::{News, Paginated},
    },
    service::{client::ApiClient, envelope::NEWS, multipart::MultipartPayload},
    session::AccessToken,
};
use async_trait::async_trait;
use reqwest::Method;
use shared::errors::ClientError;

pub struct NewsService {
    client: ApiClient,
}

impl NewsService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NewsServiceTrait for NewsService {
    async fn find_all(
        &self,
        token: &AccessToken,
        query: &ListQuery,
    ) -> Result<Paginated<News>, ClientError> {
        self.client
            .get_page(Some(token), "/news", &query.to_pairs(), NEWS.list)
            .await
    }

    async fn find_by_id(&self, token: &AccessToken, id: &str) -> Result<News, ClientError> {
        self.client
            .get(Some(token), &format!("/news/{id}"), &[], NEWS.item)
            .await
    }

    async fn create(
        &self,
        token: &AccessToken,
        req: MultipartRequest<CreateNewsRequest>,
    ) -> Result<News, ClientError> {
        let form = MultipartPayload::from_request(req)?.into_form()?;
        self.client
            .send_multipart(Method::POST, Some(token), "/news", form, NEWS.mutation)
            .await
    }

    async fn update(
        &self,
        token: &AccessToken,
        id: &str,
        req: MultipartRequest<UpdateNewsRequest>,
    ) -> Result<News, ClientError> {
        let form = MultipartPayload::from_request(req)?.into_form()?;
        self.client
            .send_multipart(
                Method::PUT,
                Some(token),
                &format!("/news/{id}"),
                form,
                NEWS.mutation,
            )
            .await
    }

    async fn delete(&self, token: &AccessToken, id: &str) -> Result<(), ClientError> {
        self.client
            .send_empty(Method::DELETE, Some(token), &format!("/news/{id}"))
            .await
    }
}
