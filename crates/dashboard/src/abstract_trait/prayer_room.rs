use crate::{
    domain::{
        requests::{CreatePrayerRoomRequest, ListQuery, MultipartRequest, UpdatePrayerRoomRequest},
        response::{PrayerRoom, Paginated},
    },
    session::AccessToken,
};
use async_trait::async_trait;
use shared::errors::ClientError;
use std::sync::Arc;

pub type DynPrayerRoomService = Arc<dyn PrayerRoomServiceTrait + Send + Sync>;

#[async_trait]
pub trait PrayerRoomServiceTrait {
    async fn find_all(
        &self,
        token: &AccessToken,
        query: &ListQuery,
    ) -> Result<Paginated<PrayerRoom>, ClientError>;
    async fn find_by_id(&self, token: &AccessToken, id: &str) -> Result<PrayerRoom, ClientError>;
    async fn create(
        &self,
        token: &AccessToken,
        req: MultipartRequest<CreatePrayerRoomRequest>,
    ) -> Result<PrayerRoom, ClientError>;
    async fn update(
        &self,
        token: &AccessToken,
        id: &str,
        req: MultipartRequest<UpdatePrayerRoomRequest>,
    ) -> Result<PrayerRoom, ClientError>;
    async fn delete(&self, token: &AccessToken, id: &str) -> Result<(), ClientError>;
}
