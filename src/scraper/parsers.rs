use ::scraper::{ElementRef, Html, Node, Selector};
use tracing::debug;

use super::cleaner::{parse_added, parse_count, trim_author};
use crate::error::{Error, Result};
use crate::models::{Developer, Repository};

// ── Selectors ─────────────────────────────────────────────────────────────────

const ROW: &str = ".Box .Box-row";

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Selector(format!("{css:?}: {e:?}")))
}

/// Concatenated text of every element `sel` matches under `scope`.
fn joined_text(scope: ElementRef<'_>, sel: &Selector) -> String {
    scope.select(sel).flat_map(|el| el.text()).collect()
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Text of the last child node, whether it is a bare text node or an element.
fn last_child_text(el: ElementRef<'_>) -> String {
    let Some(node) = el.children().last() else {
        return String::new();
    };
    match node.value() {
        Node::Text(text) => String::from(&**text),
        _ => ElementRef::wrap(node).map(element_text).unwrap_or_default(),
    }
}

// ── Repositories ──────────────────────────────────────────────────────────────

struct RepoSelectors {
    row: Selector,
    title: Selector,
    span: Selector,
    paragraph: Selector,
    meta_span: Selector,
    avatar: Selector,
    meta_link: Selector,
}

impl RepoSelectors {
    fn new() -> Result<Self> {
        Ok(Self {
            row: selector(ROW)?,
            // older markup used h1, current markup uses h2
            title: selector("h1 a, h2 a")?,
            span: selector("span")?,
            paragraph: selector("p")?,
            meta_span: selector("div > span")?,
            avatar: selector("a > img")?,
            meta_link: selector("div > a")?,
        })
    }
}

/// Parse the trending repositories page. `base_url` prefixes relative links.
pub fn parse_repositories(html: &str, base_url: &str) -> Result<Vec<Repository>> {
    let doc = Html::parse_document(html);
    let sels = RepoSelectors::new()?;

    let repos: Vec<Repository> = doc
        .select(&sels.row)
        .map(|row| parse_repository_row(row, &sels, base_url))
        .collect();

    debug!("Parsed {} repository rows", repos.len());
    Ok(repos)
}

fn parse_repository_row(row: ElementRef<'_>, sels: &RepoSelectors, base_url: &str) -> Repository {
    let mut repo = Repository::default();

    if let Some(title) = row.select(&sels.title).next() {
        repo.author = trim_author(&joined_text(title, &sels.span));
        repo.name = last_child_text(title).trim().to_string();
        if let Some(href) = title.value().attr("href").filter(|h| !h.is_empty()) {
            repo.link = format!("{}{}", base_url, href);
        }
    }

    repo.description = joined_text(row, &sels.paragraph).trim().to_string();

    // Two spans means the language badge is absent:
    //   [built-by, added]  vs  [language, built-by, added]
    let spans: Vec<ElementRef<'_>> = row.select(&sels.meta_span).collect();
    let (lang_idx, built_by_idx, added_idx) = if spans.len() == 2 {
        (None, 0, 1)
    } else {
        (Some(0), 1, 2)
    };

    repo.language = lang_idx
        .and_then(|i| spans.get(i))
        .map(|span| element_text(*span).trim().to_string())
        .filter(|lang| !lang.is_empty());

    repo.stars_added = spans
        .get(added_idx)
        .map(|span| parse_added(&element_text(*span)))
        .unwrap_or(0);

    if let Some(span) = spans.get(built_by_idx) {
        repo.built_by = span
            .select(&sels.avatar)
            .filter_map(|img| img.value().attr("src"))
            .map(str::to_string)
            .collect();
    }

    // Stars then forks are the last two links of the meta line.
    let links: Vec<ElementRef<'_>> = row.select(&sels.meta_link).collect();
    let count_at = |idx: Option<usize>| {
        idx.and_then(|i| links.get(i))
            .map(|a| parse_count(&element_text(*a)))
            .unwrap_or(0)
    };
    repo.stars = count_at(links.len().checked_sub(2));
    repo.forks = count_at(links.len().checked_sub(1));

    repo
}

// ── Developers ────────────────────────────────────────────────────────────────

struct DeveloperSelectors {
    row: Selector,
    name: Selector,
    username: Selector,
    popular_repo: Selector,
    article: Selector,
}

impl DeveloperSelectors {
    fn new() -> Result<Self> {
        Ok(Self {
            row: selector(ROW)?,
            name: selector("div > div > h1 > a")?,
            username: selector("div > div > p > a")?,
            popular_repo: selector("div > div > article > h1 > a")?,
            article: selector("div > div > article")?,
        })
    }
}

/// Parse the trending developers page.
pub fn parse_developers(html: &str) -> Result<Vec<Developer>> {
    let doc = Html::parse_document(html);
    let sels = DeveloperSelectors::new()?;

    let developers: Vec<Developer> = doc
        .select(&sels.row)
        .map(|row| parse_developer_row(row, &sels))
        .collect();

    debug!("Parsed {} developer rows", developers.len());
    Ok(developers)
}

fn parse_developer_row(row: ElementRef<'_>, sels: &DeveloperSelectors) -> Developer {
    // The repo description is whatever closes the popular-repo article.
    let description = row
        .select(&sels.article)
        .flat_map(|article| article.children().filter_map(ElementRef::wrap))
        .last()
        .map(element_text)
        .unwrap_or_default();

    Developer {
        name: joined_text(row, &sels.name).trim().to_string(),
        username: joined_text(row, &sels.username).trim().to_string(),
        popular_repo: joined_text(row, &sels.popular_repo).trim().to_string(),
        description: description.trim().to_string(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://github.com";

    fn repo_row(title: &str, desc: &str, meta: &str) -> String {
        format!(
            r#"<article class="Box-row">
  <h1 class="h3 lh-condensed">{title}</h1>
  <p class="col-9 color-fg-muted my-1 pr-4">{desc}</p>
  <div class="f6 color-fg-muted mt-2">{meta}</div>
</article>"#
        )
    }

    fn page(rows: &[String]) -> String {
        format!(
            r#"<html><body><div class="Box"><div class="Box-header"></div>{}</div></body></html>"#,
            rows.concat()
        )
    }

    const TITLE: &str = r#"<a href="/rust-lang/rust">
      <svg class="octicon octicon-repo"></svg>
      <span class="text-normal">rust-lang /</span>
      rust
    </a>"#;

    const LANG: &str = r#"<span class="d-inline-block ml-0 mr-3">
        <span class="repo-language-color" style="background-color: #dea584"></span>
        <span itemprop="programmingLanguage">Rust</span>
      </span>"#;

    const STARS_FORKS: &str = r#"<a class="Link" href="/rust-lang/rust/stargazers">
        <svg class="octicon octicon-star"></svg>
        98,765
      </a>
      <a class="Link" href="/rust-lang/rust/forks">
        <svg class="octicon octicon-repo-forked"></svg>
        12,345
      </a>"#;

    const BUILT_BY: &str = r#"<span class="d-inline-block mr-3">
        Built by
        <a class="d-inline-block" href="/alice"><img class="avatar mb-1" src="https://avatars.example/alice.png" alt="@alice"></a>
        <a class="d-inline-block" href="/bob"><img class="avatar mb-1" src="https://avatars.example/bob.png" alt="@bob"></a>
      </span>"#;

    const ADDED: &str = r#"<span class="d-inline-block float-sm-right">
        <svg class="octicon octicon-star"></svg>
        1,024 stars today
      </span>"#;

    #[test]
    fn parses_full_repository_row() {
        let meta = format!("{LANG}{STARS_FORKS}{BUILT_BY}{ADDED}");
        let html = page(&[repo_row(TITLE, "\n  Empowering everyone.\n ", &meta)]);

        let repos = parse_repositories(&html, BASE).unwrap();
        assert_eq!(repos.len(), 1);

        let repo = &repos[0];
        assert_eq!(repo.author, "rust-lang");
        assert_eq!(repo.name, "rust");
        assert_eq!(repo.link, "https://github.com/rust-lang/rust");
        assert_eq!(repo.description, "Empowering everyone.");
        assert_eq!(repo.language.as_deref(), Some("Rust"));
        assert_eq!(repo.stars, 98_765);
        assert_eq!(repo.forks, 12_345);
        assert_eq!(repo.stars_added, 1024);
        assert_eq!(
            repo.built_by,
            vec![
                "https://avatars.example/alice.png".to_string(),
                "https://avatars.example/bob.png".to_string(),
            ]
        );
    }

    #[test]
    fn missing_language_shifts_span_positions() {
        let meta = format!("{STARS_FORKS}{BUILT_BY}{ADDED}");
        let html = page(&[repo_row(TITLE, "", &meta)]);

        let repo = &parse_repositories(&html, BASE).unwrap()[0];
        assert_eq!(repo.language, None);
        assert_eq!(repo.built_by.len(), 2);
        assert_eq!(repo.stars_added, 1024);
        assert_eq!(repo.description, "");
    }

    #[test]
    fn empty_meta_line_yields_zero_values() {
        let html = page(&[repo_row(TITLE, "desc", "")]);

        let repo = &parse_repositories(&html, BASE).unwrap()[0];
        assert_eq!(repo.name, "rust");
        assert_eq!(repo.language, None);
        assert_eq!(repo.stars, 0);
        assert_eq!(repo.forks, 0);
        assert_eq!(repo.stars_added, 0);
        assert!(repo.built_by.is_empty());
    }

    #[test]
    fn single_meta_link_counts_as_forks_only() {
        let meta = r#"<a href="/x/y/forks">7</a>"#;
        let html = page(&[repo_row(TITLE, "", meta)]);

        let repo = &parse_repositories(&html, BASE).unwrap()[0];
        assert_eq!(repo.stars, 0);
        assert_eq!(repo.forks, 7);
    }

    #[test]
    fn row_without_title_keeps_other_fields() {
        let meta = format!("{LANG}{STARS_FORKS}");
        let html = page(&[repo_row("", "orphan", &meta)]);

        let repo = &parse_repositories(&html, BASE).unwrap()[0];
        assert_eq!(repo.author, "");
        assert_eq!(repo.name, "");
        assert_eq!(repo.link, "");
        assert_eq!(repo.description, "orphan");
        assert_eq!(repo.stars, 98_765);
    }

    #[test]
    fn current_markup_uses_h2_titles() {
        let row = format!(
            r#"<article class="Box-row"><h2 class="h3">{TITLE}</h2><div>{STARS_FORKS}</div></article>"#
        );
        let html = page(&[row]);

        let repo = &parse_repositories(&html, "http://localhost:1234").unwrap()[0];
        assert_eq!(repo.author, "rust-lang");
        assert_eq!(repo.link, "http://localhost:1234/rust-lang/rust");
    }

    #[test]
    fn rows_are_returned_in_document_order() {
        let first = r#"<a href="/a/one"><span>a /</span> one</a>"#;
        let second = r#"<a href="/b/two"><span>b /</span> two</a>"#;
        let html = page(&[repo_row(first, "", ""), repo_row(second, "", "")]);

        let names: Vec<_> = parse_repositories(&html, BASE)
            .unwrap()
            .into_iter()
            .map(|r| r.full_name())
            .collect();
        assert_eq!(names, vec!["a/one", "b/two"]);
    }

    #[test]
    fn rows_outside_a_box_are_ignored() {
        let html = format!(
            "<html><body>{}</body></html>",
            repo_row(TITLE, "", "")
        );
        assert!(parse_repositories(&html, BASE).unwrap().is_empty());
        assert!(parse_repositories("", BASE).unwrap().is_empty());
    }

    const DEVELOPER_ROW: &str = r#"<article class="Box-row d-flex" id="pa-alice">
  <div class="d-sm-flex flex-auto">
    <div class="col-sm-8 d-md-flex">
      <div class="col-md-6">
        <h1 class="h3 lh-condensed"><a href="/alice">
          Alice Liddell
        </a></h1>
        <p class="f4 text-normal mb-1"><a class="Link--secondary" href="/alice">
          alice
        </a></p>
      </div>
      <div class="col-md-6">
        <div class="mt-2 mb-3 my-md-0">
          <article>
            <div class="f6 color-fg-muted text-uppercase mb-1">Popular repo</div>
            <h1 class="h4 lh-condensed"><a href="/alice/wonderland">
              wonderland
            </a></h1>
            <div class="f6 color-fg-muted mt-1">
              Down the rabbit hole.
            </div>
          </article>
        </div>
      </div>
    </div>
  </div>
</article>"#;

    #[test]
    fn parses_developer_row() {
        let html = page(&[DEVELOPER_ROW.to_string()]);

        let developers = parse_developers(&html).unwrap();
        assert_eq!(developers.len(), 1);
        assert_eq!(
            developers[0],
            Developer {
                name: "Alice Liddell".into(),
                username: "alice".into(),
                popular_repo: "wonderland".into(),
                description: "Down the rabbit hole.".into(),
            }
        );
    }

    #[test]
    fn developer_without_popular_repo() {
        let row = r#"<article class="Box-row"><div><div>
            <h1><a href="/bob">Bob</a></h1>
            <p><a href="/bob">bob</a></p>
        </div></div></article>"#;
        let html = page(&[row.to_string()]);

        let dev = &parse_developers(&html).unwrap()[0];
        assert_eq!(dev.name, "Bob");
        assert_eq!(dev.username, "bob");
        assert_eq!(dev.popular_repo, "");
        assert_eq!(dev.description, "");
    }
}
