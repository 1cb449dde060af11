//! In-memory content store.

use std::fmt;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::category::CategoryFilter;
use crate::model::{BlogPost, Contact, ContentDocument, Experience, PortfolioItem};
use crate::source::{ContentSource, Freshness, SourceError};

/// Relative paths of the three content documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPaths {
    pub content: String,
    pub portfolio: String,
    pub blogs: String,
}

impl Default for ContentPaths {
    fn default() -> Self {
        Self {
            content: "assets/json/content.json".to_owned(),
            portfolio: "assets/json/portfolio.json".to_owned(),
            blogs: "assets/json/blogs.json".to_owned(),
        }
    }
}

/// Which of the three documents an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Content,
    Portfolio,
    Blogs,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Content => "Content",
            Self::Portfolio => "Portfolio",
            Self::Blogs => "Blogs",
        })
    }
}

/// Error loading the content documents.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Document could not be fetched.
    #[error("{document} JSON failed: {source}")]
    Fetch {
        document: DocumentKind,
        #[source]
        source: SourceError,
    },
    /// Document is not valid JSON of the expected shape.
    #[error("{document} JSON is invalid: {source}")]
    Parse {
        document: DocumentKind,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// The document that failed.
    #[must_use]
    pub fn document(&self) -> DocumentKind {
        match self {
            Self::Fetch { document, .. } | Self::Parse { document, .. } => *document,
        }
    }
}

/// Loaded content for one session.
///
/// Immutable once loaded; a reload replaces the whole store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentStore {
    content: ContentDocument,
    portfolio: Vec<PortfolioItem>,
    blogs: Vec<BlogPost>,
}

impl ContentStore {
    /// Create a store from already parsed documents.
    #[must_use]
    pub fn new(content: ContentDocument, portfolio: Vec<PortfolioItem>, blogs: Vec<BlogPost>) -> Self {
        Self {
            content,
            portfolio,
            blogs,
        }
    }

    /// Fetch and parse all three documents concurrently.
    ///
    /// Any failure aborts the whole load; failures are reported in document
    /// order (content, portfolio, blogs).
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] naming the first document that failed.
    pub fn load(source: &dyn ContentSource, paths: &ContentPaths) -> Result<Self, LoadError> {
        info!("Loading content documents");

        let (content, (portfolio, blogs)) = rayon::join(
            || fetch_json::<ContentDocument>(source, &paths.content, DocumentKind::Content),
            || {
                rayon::join(
                    || {
                        fetch_json::<Vec<PortfolioItem>>(
                            source,
                            &paths.portfolio,
                            DocumentKind::Portfolio,
                        )
                    },
                    || fetch_json::<Vec<BlogPost>>(source, &paths.blogs, DocumentKind::Blogs),
                )
            },
        );

        let store = Self::new(content?, portfolio?, blogs?);
        info!(
            portfolio = store.portfolio.len(),
            blogs = store.blogs.len(),
            "Content loaded"
        );
        Ok(store)
    }

    /// Fetch the markdown body of a post, bypassing caches.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the body cannot be fetched.
    pub fn load_post_body(
        &self,
        source: &dyn ContentSource,
        post: &BlogPost,
    ) -> Result<String, SourceError> {
        debug!(path = %post.markdown, "Loading markdown");
        let body = source.fetch(&post.markdown, Freshness::NoCache)?;
        debug!(length = body.len(), "Markdown loaded");
        Ok(body)
    }

    /// Profile document.
    #[must_use]
    pub fn content(&self) -> &ContentDocument {
        &self.content
    }

    /// All portfolio items in source order.
    #[must_use]
    pub fn portfolio(&self) -> &[PortfolioItem] {
        &self.portfolio
    }

    /// All blog posts in source order.
    #[must_use]
    pub fn blogs(&self) -> &[BlogPost] {
        &self.blogs
    }

    /// Look up a blog post by id.
    #[must_use]
    pub fn blog(&self, id: u64) -> Option<&BlogPost> {
        self.blogs.iter().find(|b| b.id == id)
    }

    /// Look up a portfolio item by id.
    #[must_use]
    pub fn portfolio_item(&self, id: u64) -> Option<&PortfolioItem> {
        self.portfolio.iter().find(|p| p.id == id)
    }

    /// Look up an experience entry by its position in the resume.
    #[must_use]
    pub fn experience(&self, index: usize) -> Option<&Experience> {
        self.content
            .resume
            .as_ref()?
            .experience
            .as_ref()?
            .get(index)
    }

    /// Posts other than `id`, at most two, in source order.
    #[must_use]
    pub fn related_posts(&self, id: u64) -> Vec<&BlogPost> {
        self.blogs.iter().filter(|b| b.id != id).take(2).collect()
    }

    /// Portfolio items shown under a filter, in source order.
    #[must_use]
    pub fn filtered_portfolio(&self, filter: CategoryFilter) -> Vec<&PortfolioItem> {
        self.portfolio.iter().filter(|p| filter.matches(p)).collect()
    }

    /// The first sidebar contact of type `email`.
    #[must_use]
    pub fn email_contact(&self) -> Option<&Contact> {
        self.content
            .sidebar
            .as_ref()?
            .contacts
            .as_ref()?
            .iter()
            .find(|c| c.kind == "email")
    }
}

fn fetch_json<T: DeserializeOwned>(
    source: &dyn ContentSource,
    path: &str,
    document: DocumentKind,
) -> Result<T, LoadError> {
    let text = source
        .fetch(path, Freshness::Cached)
        .map_err(|source| LoadError::Fetch { document, source })?;
    serde_json::from_str(&text).map_err(|source| LoadError::Parse { document, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::FsSource;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::Path;

    fn write_site(root: &Path, portfolio: Option<&str>) {
        let json = root.join("assets/json");
        fs::create_dir_all(&json).unwrap();
        fs::write(
            json.join("content.json"),
            r#"{
                "sidebar": {"name": "Ada", "contacts": [
                    {"type": "phone", "link": "tel:1"},
                    {"type": "email", "link": "mailto:ada@example.com"}
                ]},
                "resume": {"experience": [{"position": "Engineer at Acme"}]}
            }"#,
        )
        .unwrap();
        if let Some(portfolio) = portfolio {
            fs::write(json.join("portfolio.json"), portfolio).unwrap();
        }
        fs::write(
            json.join("blogs.json"),
            r#"[
                {"id": 1, "title": "One", "markdown": "./assets/blogs/one.md"},
                {"id": 2, "title": "Two"},
                {"id": 3, "title": "Three"},
                {"id": 4, "title": "Four"}
            ]"#,
        )
        .unwrap();
    }

    const PORTFOLIO: &str = r#"[
        {"id": 10, "title": "Clip", "category": "GameVideos", "type": "video"},
        {"id": 11, "title": "Blocks", "category": "Mobile Puzzle", "type": "image"},
        {"id": 12, "title": "Runner", "category": "Mobile Casual", "type": "image"}
    ]"#;

    #[test]
    fn test_load_and_lookups() {
        let dir = tempfile::tempdir().unwrap();
        write_site(dir.path(), Some(PORTFOLIO));
        let source = FsSource::new(dir.path());

        let store = ContentStore::load(&source, &ContentPaths::default()).unwrap();

        assert_eq!(store.portfolio().len(), 3);
        assert_eq!(store.blog(3).unwrap().title, "Three");
        assert!(store.blog(99).is_none());
        assert_eq!(store.portfolio_item(11).unwrap().title, "Blocks");
        assert_eq!(store.experience(0).unwrap().position, "Engineer at Acme");
        assert!(store.experience(1).is_none());
        assert_eq!(
            store.email_contact().unwrap().link,
            "mailto:ada@example.com"
        );
    }

    #[test]
    fn test_related_posts() {
        let dir = tempfile::tempdir().unwrap();
        write_site(dir.path(), Some(PORTFOLIO));
        let store =
            ContentStore::load(&FsSource::new(dir.path()), &ContentPaths::default()).unwrap();

        let ids: Vec<u64> = store.related_posts(2).iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 3]);
        let ids: Vec<u64> = store.related_posts(1).iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_filtered_portfolio() {
        let dir = tempfile::tempdir().unwrap();
        write_site(dir.path(), Some(PORTFOLIO));
        let store =
            ContentStore::load(&FsSource::new(dir.path()), &ContentPaths::default()).unwrap();

        let titles = |filter| {
            store
                .filtered_portfolio(filter)
                .iter()
                .map(|p| p.title.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(titles(CategoryFilter::All).len(), 3);
        assert_eq!(titles(CategoryFilter::Videos), vec!["Clip".to_owned()]);
        assert_eq!(titles(CategoryFilter::Puzzle), vec!["Blocks".to_owned()]);
        assert_eq!(titles(CategoryFilter::Casual), vec!["Runner".to_owned()]);
    }

    #[test]
    fn test_missing_document_aborts_load() {
        let dir = tempfile::tempdir().unwrap();
        write_site(dir.path(), None);

        let err = ContentStore::load(&FsSource::new(dir.path()), &ContentPaths::default())
            .unwrap_err();
        assert_eq!(err.document(), DocumentKind::Portfolio);
        assert!(err.to_string().starts_with("Portfolio JSON failed: [Fs] Not found"));
    }

    #[test]
    fn test_invalid_json_aborts_load() {
        let dir = tempfile::tempdir().unwrap();
        write_site(dir.path(), Some("{not json"));

        let err = ContentStore::load(&FsSource::new(dir.path()), &ContentPaths::default())
            .unwrap_err();
        assert!(matches!(
            err,
            LoadError::Parse {
                document: DocumentKind::Portfolio,
                ..
            }
        ));
    }

    #[test]
    fn test_load_post_body() {
        let dir = tempfile::tempdir().unwrap();
        write_site(dir.path(), Some(PORTFOLIO));
        fs::create_dir_all(dir.path().join("assets/blogs")).unwrap();
        fs::write(dir.path().join("assets/blogs/one.md"), "# One").unwrap();
        let source = FsSource::new(dir.path());
        let store = ContentStore::load(&source, &ContentPaths::default()).unwrap();

        let post = store.blog(1).unwrap();
        assert_eq!(store.load_post_body(&source, post).unwrap(), "# One");

        let missing = store.blog(2).unwrap();
        assert!(store.load_post_body(&source, missing).is_err());
    }
}
