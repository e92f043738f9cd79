//! Request options for the trending pages and the URLs built from them.

pub mod spoken;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;
use url::Url;

use crate::config::DEFAULT_BASE_URL;
use crate::error::{Error, Result};

pub use self::spoken::{spoken_language_code_for, SPOKEN_LANGUAGES};

// ── Date range ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    Daily,
    Weekly,
    Monthly,
}

impl DateRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateRange::Daily => "daily",
            DateRange::Weekly => "weekly",
            DateRange::Monthly => "monthly",
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateRange {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "today" => Ok(DateRange::Daily),
            "weekly" | "week" => Ok(DateRange::Weekly),
            "monthly" | "month" => Ok(DateRange::Monthly),
            other => Err(format!("unknown date range: {other}")),
        }
    }
}

// ── Options ───────────────────────────────────────────────────────────────────

/// Filters for one trending request. Empty strings mean "no filter".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendingOptions {
    base_url: String,
    spoken_language: String,
    language: String,
    since: String,
}

impl Default for TrendingOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            spoken_language: String::new(),
            language: String::new(),
            since: String::new(),
        }
    }
}

impl TrendingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn daily(self) -> Self {
        self.since(DateRange::Daily)
    }

    pub fn weekly(self) -> Self {
        self.since(DateRange::Weekly)
    }

    pub fn monthly(self) -> Self {
        self.since(DateRange::Monthly)
    }

    pub fn since(self, range: DateRange) -> Self {
        self.date_range(range.as_str())
    }

    /// Free-form `since` value, passed through untouched.
    pub fn date_range(mut self, range: impl Into<String>) -> Self {
        self.since = range.into();
        self
    }

    /// Programming language, e.g. `rust` or `c++`.
    pub fn language(mut self, lang: impl Into<String>) -> Self {
        self.language = lang.into();
        self
    }

    pub fn spoken_language_code(mut self, code: impl Into<String>) -> Self {
        self.spoken_language = code.into();
        self
    }

    /// Resolve a full language name (e.g. "chinese") through the ISO-639-1
    /// table. Unknown names clear the filter.
    pub fn spoken_language(mut self, name: &str) -> Self {
        self.spoken_language = match spoken_language_code_for(name) {
            Some(code) => code.to_string(),
            None => {
                warn!("Unknown spoken language {:?}, not filtering by it", name);
                String::new()
            }
        };
        self
    }

    pub fn url(mut self, base: impl Into<String>) -> Self {
        let base: String = base.into();
        self.base_url = base.trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn spoken_language_value(&self) -> &str {
        &self.spoken_language
    }

    pub fn language_value(&self) -> &str {
        &self.language
    }

    pub fn since_value(&self) -> &str {
        &self.since
    }

    // ── URLs ──────────────────────────────────────────────────────────────────

    /// `{base}/trending[/{language}]?spoken_language_code=..&since=..`
    pub fn repositories_url(&self) -> Result<Url> {
        let mut url = self.trending_url(&[])?;
        url.query_pairs_mut()
            .append_pair("spoken_language_code", &self.spoken_language)
            .append_pair("since", &self.since);
        Ok(url)
    }

    /// `{base}/trending/developers[/{language}]?since=..`
    pub fn developers_url(&self) -> Result<Url> {
        let mut url = self.trending_url(&["developers"])?;
        url.query_pairs_mut().append_pair("since", &self.since);
        Ok(url)
    }

    fn trending_url(&self, extra: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| Error::BaseUrl(self.base_url.clone()))?;
            segments.pop_if_empty().push("trending").extend(extra);
            if !self.language.is_empty() {
                segments.push(&self.language);
            }
        }
        Ok(url)
    }
}
