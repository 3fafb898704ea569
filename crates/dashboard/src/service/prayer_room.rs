use crate::{
    abstract_trait::PrayerRoomServiceTrait,
    domain::{
        requests::{CreatePrayerRoomRequest, ListQuery, MultipartRequest, UpdatePrayerRoomRequest},
        response::{PrayerRoom, Paginated},
    },
    service::{client::ApiClient, envelope::PRAYER_ROOMS, multipart::MultipartPayload},
    session::AccessToken,
};
use async_trait::async_trait;
use reqwest::Method;
use shared::errors::ClientError;

pub struct PrayerRoomService {
    client: ApiClient,
}

impl PrayerRoomService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PrayerRoomServiceTrait for PrayerRoomService {
    async fn find_all(
        &self,
        token: &AccessToken,
        query: &ListQuery,
    ) -> Result<Paginated<PrayerRoom>, ClientError> {
        self.client
            .get_page(Some(token), "/prayer-rooms", &query.to_pairs(), PRAYER_ROOMS.list)
            .await
    }

    async fn find_by_id(&self, token: &AccessToken, id: &str) -> Result<PrayerRoom, ClientError> {
        self.client
            .get(Some(token), &format!("/prayer-rooms/{id}"), &[], PRAYER_ROOMS.item)
            .await
    }

    async fn create(
        &self,
        token: &AccessToken,
        req: MultipartRequest<CreatePrayerRoomRequest>,
    ) -> Result<PrayerRoom, ClientError> {
        let form = MultipartPayload::from_request(req)?.into_form()?;
        self.client
            .send_multipart(Method::POST, Some(token), "/prayer-rooms", form, PRAYER_ROOMS.mutation)
            .await
    }

    async fn update(
        &self,
        token: &AccessToken,
        id: &str,
        req: MultipartRequest<UpdatePrayerRoomRequest>,
    ) -> Result<PrayerRoom, ClientError> {
        let form = MultipartPayload::from_request(req)?.into_form()?;
        self.client
            .send_multipart(
                Method::PUT,
                Some(token),
                &format!("/prayer-rooms/{id}"),
                form,
                PRAYER_ROOMS.mutation,
            )
            .await
    }

    async fn delete(&self, token: &AccessToken, id: &str) -> Result<(), ClientError> {
        self.client
            .send_empty(Method::DELETE, Some(token), &format!("/prayer-rooms/{id}"))
            .await
    }
}
