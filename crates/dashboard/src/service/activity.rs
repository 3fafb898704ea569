use crate::{
    abstract_trait::ActivityServiceTrait,
    domain::{
        requests::{CreateActivityRequest, ListQuery, MultipartRequest, UpdateActivityRequest},
        response::{Activity, Paginated},
    },
    service::{client::ApiClient, envelope::ACTIVITIES, multipart::MultipartPayload},
    session::AccessToken,
};
use async_trait::async_trait;
use reqwest::Method;
use shared::errors::ClientError;

pub struct ActivityService {
    client: ApiClient,
}

impl ActivityService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ActivityServiceTrait for ActivityService {
    async fn find_all(
        &self,
        token: &AccessToken,
        query: &ListQuery,
    ) -> Result<Paginated<Activity>, ClientError> {
        self.client
            .get_page(Some(token), "/activities", &query.to_pairs(), ACTIVITIES.list)
            .await
    }

    async fn find_by_id(&self, token: &AccessToken, id: &str) -> Result<Activity, ClientError> {
        self.client
            .get(Some(token), &format!("/activities/{id}"), &[], ACTIVITIES.item)
            .await
    }

    async fn create(
        &self,
        token: &AccessToken,
        req: MultipartRequest<CreateActivityRequest>,
    ) -> Result<Activity, ClientError> {
        let form = MultipartPayload::from_request(req)?.into_form()?;
        self.client
            .send_multipart(Method::POST, Some(token), "/activities", form, ACTIVITIES.mutation)
            .await
    }

    async fn update(
        &self,
        token: &AccessToken,
        id: &str,
        req: MultipartRequest<UpdateActivityRequest>,
    ) -> Result<Activity, ClientError> {
        let form = MultipartPayload::from_request(req)?.into_form()?;
        self.client
            .send_multipart(
                Method::PUT,
                Some(token),
                &format!("/activities/{id}"),
                form,
                ACTIVITIES.mutation,
            )
            .await
    }

    async fn delete(&self, token: &AccessToken, id: &str) -> Result<(), ClientError> {
        self.client
            .send_empty(Method::DELETE, Some(token), &format!("/activities/{id}"))
            .await
    }
}
