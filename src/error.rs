use reqwest::StatusCode;

/// Errors surfaced by the fetcher. Field-level parse failures never end up
/// here; they fall back to zero values inside the parsers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status { status: StatusCode, url: String },

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("url cannot be used as a base: {0}")]
    BaseUrl(String),

    #[error("invalid selector {0}")]
    Selector(String),
}

pub type Result<T> = std::result::Result<T, Error>;
