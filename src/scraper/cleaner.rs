//! String coercion for scraped fields. Everything here is total: bad input
//! yields the zero value rather than an error.

// ── Parsers ───────────────────────────────────────────────────────────────────

/// Parse a count shown with thousands separators.
/// "12,345" → 12345 | " 87 " → 87 | "n/a" → 0
pub fn parse_count(s: &str) -> u64 {
    s.trim().replace(',', "").parse().unwrap_or(0)
}

/// Parse the "stars gained" caption by its leading number.
/// "1,024 stars today" → 1024 | "" → 0
pub fn parse_added(s: &str) -> u64 {
    s.split_whitespace().next().map(parse_count).unwrap_or(0)
}

/// The owner span renders as "owner /" with surrounding newlines.
pub fn trim_author(s: &str) -> String {
    s.trim_matches(|c| c == '/' || c == '\n' || c == ' ').to_string()
}

/// Squash runs of whitespace (including newlines) into single spaces.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
