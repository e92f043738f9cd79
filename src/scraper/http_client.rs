use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::config::GithubConfig;
use crate::error::{Error, Result};

/// One-shot GET client. No retries, no delays.
pub struct HttpClient {
    inner: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: &GithubConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .build()?;

        Ok(Self { inner })
    }

    /// Fetch a URL as text. Any non-2xx status is an error.
    pub async fn get_text(&self, url: &Url) -> Result<String> {
        debug!("GET {}", url);

        let resp = self.inner.get(url.as_str()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status {
                status,
                url: url.to_string(),
            });
        }

        let text = resp.text().await?;
        debug!("{} bytes from {}", text.len(), url);
        Ok(text)
    }
}
