//! Fetch the GitHub trending pages and parse them into typed records.
//!
//! ```no_run
//! use gh_trending::{trending_repositories, TrendingOptions};
//!
//! # async fn run() -> gh_trending::Result<()> {
//! let repos = trending_repositories(TrendingOptions::new().language("rust").weekly()).await?;
//! for repo in repos {
//!     println!("{} ({} stars)", repo.full_name(), repo.stars);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod options;
pub mod output;
pub mod scraper;
pub mod utils;

pub use crate::error::{Error, Result};
pub use crate::models::{Developer, Repository};
pub use crate::options::{spoken_language_code_for, DateRange, TrendingOptions};
pub use crate::scraper::{trending_developers, trending_repositories, GithubTrending, TrendingSource};
