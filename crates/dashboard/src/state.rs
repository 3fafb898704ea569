use crate::{config::Config, di::DependenciesInject, service::ApiClient, session::CookieSettings};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use reqwest::Client;
use shared::utils::Metrics;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
    pub metrics: Metrics,
    pub cookies: CookieSettings,
    pub static_dir: String,
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.api_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        let registry = Arc::new(Mutex::new(Registry::default()));
        let metrics = Metrics::new();
        metrics.register(&mut *registry.lock().await);

        info!("Remote API at {}", config.api_base_url);
        if config.translate_url.is_none() {
            info!("No TRANSLATE_URL configured, slugs are built from titles as typed");
        }

        let client = ApiClient::new(http.clone(), config.api_base_url.clone(), metrics.clone());
        let di_container = DependenciesInject::new(client, http, config.translate_url.clone());

        Ok(Self {
            di_container,
            registry,
            metrics,
            cookies: CookieSettings::new(config.cookie_secure),
            static_dir: config.static_dir.clone(),
        })
    }
}
