use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default API base URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Client configuration wrapper.
///
/// The only externally supplied setting is the API base URL, taken from
/// `CLIENT_API_URL`. The token deliberately does not live here; it has its
/// own durable slot in [`crate::egui_app::token_store::TokenStore`].
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        let server_url =
            std::env::var("CLIENT_API_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        let app = AppConfig::builder()
            .api_base_url(server_url)
            .build()
            .unwrap_or_else(|_| AppConfig {
                api_base_url: Some(DEFAULT_SERVER_URL.to_string()),
            });
        Self { app }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        Ok(Self {
            app: builder.build()?,
        })
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        self.app.api_base_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }
}
