pub mod cleaner;
pub mod http_client;
pub mod parsers;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::config::GithubConfig;
use crate::error::Result;
use crate::models::{Developer, Repository};
use crate::options::TrendingOptions;

use self::http_client::HttpClient;
use self::parsers::{parse_developers, parse_repositories};

// ── Source trait ──────────────────────────────────────────────────────────────

/// Swappable trending source.
#[async_trait]
pub trait TrendingSource: Send + Sync {
    async fn fetch_repositories(&self) -> Result<Vec<Repository>>;
    async fn fetch_developers(&self) -> Result<Vec<Developer>>;
}

// ── GitHub scraper ────────────────────────────────────────────────────────────

pub struct GithubTrending {
    client: HttpClient,
    options: TrendingOptions,
}

impl GithubTrending {
    pub fn new(options: TrendingOptions, config: &GithubConfig) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new(config)?,
            options,
        })
    }

    /// Default HTTP settings; only `options` decide what is fetched.
    pub fn with_options(options: TrendingOptions) -> Result<Self> {
        Self::new(options, &GithubConfig::default())
    }

    pub fn options(&self) -> &TrendingOptions {
        &self.options
    }
}

#[async_trait]
impl TrendingSource for GithubTrending {
    async fn fetch_repositories(&self) -> Result<Vec<Repository>> {
        let url = self.options.repositories_url()?;
        info!("Fetching trending repositories ({})", url);

        let html = self.client.get_text(&url).await?;
        let repos = parse_repositories(&html, self.options.base_url())?;

        if repos.is_empty() {
            warn!("No repository rows found at {}", url);
        }
        Ok(repos)
    }

    async fn fetch_developers(&self) -> Result<Vec<Developer>> {
        let url = self.options.developers_url()?;
        info!("Fetching trending developers ({})", url);

        let html = self.client.get_text(&url).await?;
        let developers = parse_developers(&html)?;

        if developers.is_empty() {
            warn!("No developer rows found at {}", url);
        }
        Ok(developers)
    }
}

// ── Shortcuts ─────────────────────────────────────────────────────────────────

/// Fetch trending repositories in one call.
pub async fn trending_repositories(options: TrendingOptions) -> Result<Vec<Repository>> {
    GithubTrending::with_options(options)?.fetch_repositories().await
}

/// Fetch trending developers in one call.
pub async fn trending_developers(options: TrendingOptions) -> Result<Vec<Developer>> {
    GithubTrending::with_options(options)?.fetch_developers().await
}
