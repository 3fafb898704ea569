use crate::abstract_trait::SlugServiceTrait;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::errors::HttpError;
use tracing::{error, info};

pub const SLUG_FAILURE_MESSAGE: &str =
    "Failed to generate slug from title, please fill it in manually";

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateResponse {
    translated_text: String,
}

/// Lowercase ASCII slug; every run of other characters becomes one `-`.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Turns a news title into a slug, translating it to English first when a
/// translation endpoint is configured.
pub struct SlugService {
    http: Client,
    translate_url: Option<String>,
}

impl SlugService {
    pub fn new(http: Client, translate_url: Option<String>) -> Self {
        Self {
            http,
            translate_url,
        }
    }

    async fn translate(&self, url: &str, title: &str) -> Result<String, reqwest::Error> {
        let body = TranslateRequest {
            q: title,
            source: "auto",
            target: "en",
            format: "text",
        };

        let response: TranslateResponse = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.translated_text)
    }
}

#[async_trait]
impl SlugServiceTrait for SlugService {
    async fn generate(&self, title: &str) -> Result<String, HttpError> {
        let source = match self.translate_url.as_deref() {
            Some(url) => self.translate(url, title).await.map_err(|e| {
                error!("slug translation failed: {e}");
                HttpError::BadRequest(SLUG_FAILURE_MESSAGE.into())
            })?,
            None => title.to_string(),
        };

        let slug = slugify(&source);
        if slug.is_empty() {
            return Err(HttpError::BadRequest(SLUG_FAILURE_MESSAGE.into()));
        }

        info!("generated slug {slug}");
        Ok(slug)
    }
}
