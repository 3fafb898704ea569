use async_trait::async_trait;
use shared::errors::HttpError;
use std::sync::Arc;

pub type DynSlugService = Arc<dyn SlugServiceTrait + Send + Sync>;

#[async_trait]
pub trait SlugServiceTrait {
    async fn generate(&self, title: &str) -> Result<String, HttpError>;
}
