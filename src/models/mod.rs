use serde::{Deserialize, Serialize};

// ── Repository ────────────────────────────────────────────────────────────────

/// One row of the trending repositories listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Repository {
    pub author: String,
    pub name: String,
    /// Absolute URL, empty when the row carried no href.
    pub link: String,
    pub description: String,
    /// `None` when the row has no language badge.
    pub language: Option<String>,
    pub stars: u64,
    pub forks: u64,
    /// Stars gained over the requested date range.
    pub stars_added: u64,
    /// Avatar URLs of the top contributors.
    pub built_by: Vec<String>,
}

impl Repository {
    /// `author/name`, the way the listing shows it.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.author, self.name)
    }
}

// ── Developer ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Developer {
    pub name: String,
    pub username: String,
    pub popular_repo: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_serializes_missing_language_as_null() {
        let repo = Repository {
            author: "rust-lang".into(),
            name: "rust".into(),
            stars: 10,
            ..Default::default()
        };
        let value = serde_json::to_value(&repo).unwrap();
        assert_eq!(value["language"], serde_json::Value::Null);
        assert_eq!(value["stars"], 10);
        assert_eq!(value["built_by"], serde_json::json!([]));
        assert_eq!(repo.full_name(), "rust-lang/rust");
    }
}
