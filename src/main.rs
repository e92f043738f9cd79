use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gh_trending::config::{AppConfig, DefaultsConfig};
use gh_trending::options::SPOKEN_LANGUAGES;
use gh_trending::output::{self, OutputFormat};
use gh_trending::utils::Timer;
use gh_trending::{DateRange, GithubTrending, TrendingOptions, TrendingSource};

#[derive(Parser)]
#[command(name = "gh-trending", about = "GitHub trending repositories and developers", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Command {
    /// List trending repositories
    Repos {
        #[command(flatten)]
        filter: Filter,

        /// Spoken language by full name, e.g. "chinese"
        #[arg(long, conflicts_with = "spoken_language_code")]
        spoken_language: Option<String>,

        /// Spoken language by ISO-639-1 code, e.g. "zh"
        #[arg(long)]
        spoken_language_code: Option<String>,
    },

    /// List trending developers
    Developers {
        #[command(flatten)]
        filter: Filter,
    },

    /// Print the spoken-language name → code table
    Languages,
}

#[derive(Args)]
struct Filter {
    /// Programming language, e.g. "rust"
    #[arg(short, long)]
    language: Option<String>,

    /// daily, weekly, monthly (other values are passed through)
    #[arg(short, long)]
    since: Option<String>,

    /// Site root (default from config: https://github.com)
    #[arg(long, env = "GHTRENDING_URL")]
    url: Option<String>,
}

impl Filter {
    /// Flags first, then configured defaults.
    fn to_options(&self, base_url: &str, defaults: &DefaultsConfig) -> TrendingOptions {
        let mut opts = TrendingOptions::new().url(self.url.as_deref().unwrap_or(base_url));

        if let Some(lang) = self.language.as_ref().or(defaults.language.as_ref()) {
            opts = opts.language(lang.as_str());
        }
        if let Some(since) = self.since.as_ref().or(defaults.since.as_ref()) {
            opts = match since.parse::<DateRange>() {
                Ok(range) => opts.since(range),
                Err(_) => opts.date_range(since.as_str()),
            };
        }
        opts
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "gh_trending=info,warn",
        1 => "gh_trending=debug,info",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false).with_writer(io::stderr))
        .with(EnvFilter::new(filter))
        .init();

    let config = AppConfig::load()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Repos {
            filter,
            spoken_language,
            spoken_language_code,
        } => {
            let _t = Timer::start("Trending repositories");
            let mut opts = filter.to_options(&config.github.base_url, &config.defaults);
            if let Some(code) = spoken_language_code {
                opts = opts.spoken_language_code(code);
            } else if let Some(name) = spoken_language.or(config.defaults.spoken_language.clone()) {
                opts = opts.spoken_language(&name);
            }

            let fetcher = GithubTrending::new(opts, &config.github)
                .context("Failed to build fetcher")?;
            let repos = fetcher
                .fetch_repositories()
                .await
                .context("Failed to fetch trending repositories")?;

            info!("{} repositories", repos.len());
            output::write_repositories(&mut out, cli.format, &repos)?;
        }

        Command::Developers { filter } => {
            let _t = Timer::start("Trending developers");
            let opts = filter.to_options(&config.github.base_url, &config.defaults);

            let fetcher = GithubTrending::new(opts, &config.github)
                .context("Failed to build fetcher")?;
            let developers = fetcher
                .fetch_developers()
                .await
                .context("Failed to fetch trending developers")?;

            info!("{} developers", developers.len());
            output::write_developers(&mut out, cli.format, &developers)?;
        }

        Command::Languages => {
            output::write_languages(&mut out, cli.format, SPOKEN_LANGUAGES)?;
        }
    }

    out.flush()?;
    Ok(())
}
