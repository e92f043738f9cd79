use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// HTTP side of the fetcher
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GithubConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Filters the CLI applies when no flag overrides them
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub since: Option<String>,

    /// Full English name, e.g. "english"
    #[serde(default)]
    pub spoken_language: Option<String>,

    #[serde(default)]
    pub language: Option<String>,
}

// ── Defaults ─────────────────────────────────────────────────────────────────

pub const DEFAULT_BASE_URL: &str = "https://github.com";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_user_agent() -> String {
    concat!("gh-trending/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

// ── Loader ───────────────────────────────────────────────────────────────────

impl AppConfig {
    /// Load configuration from file + environment overrides
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        let cfg = config::Config::builder()
            .add_source(
                config::File::with_name("config/default")
                    .required(false)
                    .format(config::FileFormat::Toml),
            )
            .add_source(
                config::File::with_name("config/local")
                    .required(false)
                    .format(config::FileFormat::Toml),
            )
            .add_source(config::Environment::with_prefix("GHTRENDING").separator("__"))
            .build()?;

        let app_cfg = cfg.try_deserialize().unwrap_or_else(|e| {
            warn!("Ignoring malformed configuration: {}", e);
            AppConfig::default()
        });
        Ok(app_cfg)
    }
}
