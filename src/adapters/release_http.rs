//! Release metadata over HTTP using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::domain::release::{DEFAULT_RELEASE_BASE_URL, VERSION_CONFIG_PATH};
use crate::domain::{AppError, ReleaseChannel};
use crate::ports::ReleaseSource;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Reads `{base}/{branch}/config/dev.php` for each channel.
///
/// The body is returned whatever the HTTP status; a missing file simply
/// yields no version match.
#[derive(Debug, Clone)]
pub struct HttpReleaseSource {
    base_url: Url,
    client: Client,
}

impl HttpReleaseSource {
    pub fn new(base_url: Url) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(concat!("m3u-compose/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { base_url, client })
    }

    /// Parse a base URL given on the command line or in the environment.
    pub fn parse_base_url(raw: &str) -> Result<Url, AppError> {
        Url::parse(raw.trim_end_matches('/'))
            .map_err(|e| AppError::config_error(format!("Invalid release base URL '{}': {}", raw, e)))
    }

    pub fn default_base_url() -> Result<Url, AppError> {
        Self::parse_base_url(DEFAULT_RELEASE_BASE_URL)
    }

    pub fn config_url(&self, channel: ReleaseChannel) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            channel.branch(),
            VERSION_CONFIG_PATH
        )
    }
}

impl ReleaseSource for HttpReleaseSource {
    fn fetch_version_config(&self, channel: ReleaseChannel) -> Result<String, AppError> {
        let url = self.config_url(channel);
        let fetch_error =
            |message: String| AppError::ReleaseFetch { channel: channel.name().to_string(), message };

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| fetch_error(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        tracing::debug!(%url, status = status.as_u16(), "fetched release config");
        response.text().map_err(|e| fetch_error(format!("Failed to read response body: {}", e)))
    }
}
