use anyhow::{Context, Result, anyhow};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub api_base_url: String,
    pub translate_url: Option<String>,
    pub static_dir: String,
    pub otel_endpoint: Option<String>,
    pub is_dev: bool,
    pub enable_file_log: bool,
    pub cookie_secure: bool,
    pub api_timeout: Duration,
}

impl Config {
    pub fn init() -> Result<Self> {
        let port = std::env::var("PORT")
            .context("Missing environment variable: PORT")?
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let api_base_url = std::env::var("API_BASE_URL")
            .context("Missing environment variable: API_BASE_URL")?
            .trim_end_matches('/')
            .to_string();

        if api_base_url.is_empty() {
            return Err(anyhow!("API_BASE_URL must not be empty"));
        }

        let translate_url = optional_var("TRANSLATE_URL");
        let otel_endpoint = optional_var("OTEL_ENDPOINT");
        let static_dir = optional_var("STATIC_DIR").unwrap_or_else(|| "./public".to_string());

        let is_dev = flag("DEV_MODE", false)?;
        let enable_file_log = flag("ENABLE_FILE_LOG", false)?;
        let cookie_secure = flag("COOKIE_SECURE", false)?;

        let api_timeout = match optional_var("API_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(
                raw.parse::<u64>()
                    .context("API_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            None => Duration::from_secs(30),
        };

        Ok(Self {
            port,
            api_base_url,
            translate_url,
            static_dir,
            otel_endpoint,
            is_dev,
            enable_file_log,
            cookie_secure,
            api_timeout,
        })
    }
}

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn flag(name: &str, default: bool) -> Result<bool> {
    match optional_var(name).as_deref() {
        None => Ok(default),
        Some("true") | Some("1") => Ok(true),
        Some("false") | Some("0") => Ok(false),
        Some(other) => Err(anyhow!("{name} must be 'true' or 'false', got '{other}'")),
    }
}
