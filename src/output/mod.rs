//! Rendering of fetched listings for the CLI.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;

use crate::models::{Developer, Repository};
use crate::scraper::cleaner::collapse_whitespace;
use crate::utils::{fmt_number, truncate};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

const DESC_WIDTH: usize = 60;

// ── Repositories ──────────────────────────────────────────────────────────────

pub fn write_repositories(w: &mut dyn Write, format: OutputFormat, repos: &[Repository]) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *w, repos)?;
            writeln!(w)?;
        }
        OutputFormat::Csv => {
            let mut out = csv::Writer::from_writer(w);
            out.write_record([
                "author", "name", "link", "description", "language", "stars", "forks",
                "stars_added", "built_by",
            ])?;
            for r in repos {
                let stars = r.stars.to_string();
                let forks = r.forks.to_string();
                let added = r.stars_added.to_string();
                let built_by = r.built_by.join(" ");
                out.write_record([
                    r.author.as_str(),
                    r.name.as_str(),
                    r.link.as_str(),
                    r.description.as_str(),
                    r.language.as_deref().unwrap_or(""),
                    stars.as_str(),
                    forks.as_str(),
                    added.as_str(),
                    built_by.as_str(),
                ])?;
            }
            out.flush()?;
        }
        OutputFormat::Table => {
            if repos.is_empty() {
                writeln!(w, "No trending repositories.")?;
                return Ok(());
            }
            writeln!(
                w,
                "{:>3}  {:<40} {:<12} {:>9} {:>8} {:>7}  {}",
                "#", "REPOSITORY", "LANGUAGE", "STARS", "FORKS", "ADDED", "DESCRIPTION"
            )?;
            for (i, r) in repos.iter().enumerate() {
                writeln!(
                    w,
                    "{:>3}  {:<40} {:<12} {:>9} {:>8} {:>7}  {}",
                    i + 1,
                    truncate(&r.full_name(), 40),
                    truncate(r.language.as_deref().unwrap_or("unknown"), 12),
                    fmt_number(r.stars),
                    fmt_number(r.forks),
                    format!("+{}", fmt_number(r.stars_added)),
                    truncate(&collapse_whitespace(&r.description), DESC_WIDTH),
                )?;
            }
        }
    }
    Ok(())
}

// ── Developers ────────────────────────────────────────────────────────────────

pub fn write_developers(w: &mut dyn Write, format: OutputFormat, developers: &[Developer]) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *w, developers)?;
            writeln!(w)?;
        }
        OutputFormat::Csv => {
            let mut out = csv::Writer::from_writer(w);
            for d in developers {
                out.serialize(d)?;
            }
            out.flush()?;
        }
        OutputFormat::Table => {
            if developers.is_empty() {
                writeln!(w, "No trending developers.")?;
                return Ok(());
            }
            writeln!(
                w,
                "{:>3}  {:<28} {:<20} {:<28} {}",
                "#", "NAME", "USERNAME", "POPULAR REPO", "DESCRIPTION"
            )?;
            for (i, d) in developers.iter().enumerate() {
                writeln!(
                    w,
                    "{:>3}  {:<28} {:<20} {:<28} {}",
                    i + 1,
                    truncate(&d.name, 28),
                    truncate(&d.username, 20),
                    truncate(&d.popular_repo, 28),
                    truncate(&collapse_whitespace(&d.description), DESC_WIDTH),
                )?;
            }
        }
    }
    Ok(())
}

// ── Spoken languages ──────────────────────────────────────────────────────────

pub fn write_languages(w: &mut dyn Write, format: OutputFormat, table: &[(&str, &str)]) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let map: serde_json::Map<String, serde_json::Value> = table
                .iter()
                .map(|(name, code)| (name.to_string(), serde_json::Value::from(*code)))
                .collect();
            serde_json::to_writer_pretty(&mut *w, &map)?;
            writeln!(w)?;
        }
        OutputFormat::Csv => {
            let mut out = csv::Writer::from_writer(w);
            out.write_record(["name", "code"])?;
            for (name, code) in table {
                out.write_record([name, code])?;
            }
            out.flush()?;
        }
        OutputFormat::Table => {
            for (name, code) in table {
                writeln!(w, "{:<4}{}", code, name)?;
            }
        }
    }
    Ok(())
}
