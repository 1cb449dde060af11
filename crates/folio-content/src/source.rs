//! Content source trait, error type and the filesystem and HTTP backends.
//!
//! All `path` arguments are paths relative to the content base, as they
//! appear in the JSON documents (e.g., `assets/json/blogs.json`,
//! `./assets/blogs/first.md`). Absolute `http(s)://` URLs are fetched as is
//! by the HTTP backend.

use std::path::{Component, Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tracing::debug;
use ureq::Agent;

/// Whether intermediaries may serve a cached copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Freshness {
    /// Normal request.
    #[default]
    Cached,
    /// Defeat every cache layer: a unique query parameter plus no-cache
    /// request headers.
    NoCache,
}

/// Semantic error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SourceErrorKind {
    /// Resource does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Path escapes the content base or is malformed.
    InvalidPath,
    /// Backend is unreachable or returned a server error.
    Unavailable,
    /// Too many requests.
    RateLimited,
    /// Operation timed out.
    Timeout,
    /// Other/unknown error category.
    Other,
}

/// Source error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct SourceError {
    /// Semantic error category.
    pub kind: SourceErrorKind,
    /// Requested path (if applicable).
    pub path: Option<String>,
    /// Backend identifier (e.g., "Fs", "Http", "Mock").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

/// Non-success HTTP status.
#[derive(Debug, thiserror::Error)]
#[error("HTTP {0}")]
pub struct HttpStatus(pub u16);

impl SourceError {
    /// Create a new source error.
    #[must_use]
    pub fn new(kind: SourceErrorKind) -> Self {
        Self {
            kind,
            path: None,
            backend: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Downcast the source error to a concrete type.
    #[must_use]
    pub fn downcast_source<E: std::error::Error + 'static>(&self) -> Option<&E> {
        self.source.as_ref()?.downcast_ref()
    }

    /// Create a not found error with path.
    #[must_use]
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::new(SourceErrorKind::NotFound).with_path(path)
    }

    /// Create a source error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: impl Into<String>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => SourceErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => SourceErrorKind::PermissionDenied,
            std::io::ErrorKind::TimedOut => SourceErrorKind::Timeout,
            _ => SourceErrorKind::Other,
        };
        Self::new(kind).with_source(err).with_path(path)
    }

    /// Create a source error from a non-success HTTP status.
    #[must_use]
    pub fn http_status(status: u16, path: impl Into<String>) -> Self {
        let kind = match status {
            404 | 410 => SourceErrorKind::NotFound,
            401 | 403 => SourceErrorKind::PermissionDenied,
            408 => SourceErrorKind::Timeout,
            429 => SourceErrorKind::RateLimited,
            500..=599 => SourceErrorKind::Unavailable,
            _ => SourceErrorKind::Other,
        };
        Self::new(kind)
            .with_source(HttpStatus(status))
            .with_path(path)
    }

    /// Create a source error from a transport failure.
    #[must_use]
    pub fn transport(err: ureq::Error, path: impl Into<String>) -> Self {
        let kind = match &err {
            ureq::Error::Timeout(_) => SourceErrorKind::Timeout,
            ureq::Error::HostNotFound | ureq::Error::ConnectionFailed => {
                SourceErrorKind::Unavailable
            }
            ureq::Error::BadUri(_) => SourceErrorKind::InvalidPath,
            _ => SourceErrorKind::Other,
        };
        Self::new(kind).with_source(err).with_path(path)
    }
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (path: assets/json/content.json)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            SourceErrorKind::NotFound => "Not found",
            SourceErrorKind::PermissionDenied => "Permission denied",
            SourceErrorKind::InvalidPath => "Invalid path",
            SourceErrorKind::Unavailable => "Unavailable",
            SourceErrorKind::RateLimited => "Rate limited",
            SourceErrorKind::Timeout => "Timeout",
            SourceErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {path})")?;
        }

        Ok(())
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Abstraction over where content documents come from.
pub trait ContentSource: Send + Sync {
    /// Fetch a document as text.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the document doesn't exist or can't be read.
    fn fetch(&self, path: &str, freshness: Freshness) -> Result<String, SourceError>;
}

/// Strip the `./` and `/` prefixes JSON documents use for relative paths.
fn normalize(path: &str) -> &str {
    path.trim_start_matches("./").trim_start_matches('/')
}

/// Filesystem content source rooted at a directory.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    /// Create a source reading below `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a relative path, rejecting anything that escapes the root.
    fn resolve(&self, path: &str) -> Result<PathBuf, SourceError> {
        let relative = Path::new(normalize(path));
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if path.is_empty() || escapes {
            return Err(SourceError::new(SourceErrorKind::InvalidPath)
                .with_path(path)
                .with_backend("Fs"));
        }
        Ok(self.root.join(relative))
    }
}

impl ContentSource for FsSource {
    fn fetch(&self, path: &str, _freshness: Freshness) -> Result<String, SourceError> {
        let file = self.resolve(path)?;
        debug!(path = %file.display(), "Reading content file");
        std::fs::read_to_string(&file).map_err(|e| SourceError::io(e, path).with_backend("Fs"))
    }
}

/// HTTP content source rooted at a base URL.
pub struct HttpSource {
    agent: Agent,
    base_url: String,
}

impl HttpSource {
    /// Create a source fetching below `base_url` with the given timeout.
    #[must_use]
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Build the request URL for a path.
    fn url(&self, path: &str, freshness: Freshness) -> String {
        let mut url = if path.starts_with("http://") || path.starts_with("https://") {
            path.to_owned()
        } else {
            format!("{}/{}", self.base_url, normalize(path))
        };
        if freshness == Freshness::NoCache {
            let millis = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(0, |d| d.as_millis());
            let separator = if url.contains('?') { '&' } else { '?' };
            url = format!("{url}{separator}v={millis}");
        }
        url
    }
}

impl ContentSource for HttpSource {
    fn fetch(&self, path: &str, freshness: Freshness) -> Result<String, SourceError> {
        let url = self.url(path, freshness);
        debug!(url = %url, "Fetching content");

        let mut request = self.agent.get(&url);
        if freshness == Freshness::NoCache {
            request = request
                .header("Cache-Control", "no-cache, no-store, must-revalidate")
                .header("Pragma", "no-cache")
                .header("Expires", "0");
        }

        let response = request
            .call()
            .map_err(|e| SourceError::transport(e, path).with_backend("Http"))?;

        let status = response.status().as_u16();
        if status >= 400 {
            return Err(SourceError::http_status(status, path).with_backend("Http"));
        }

        response
            .into_body()
            .read_to_string()
            .map_err(|e| SourceError::transport(e, path).with_backend("Http"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn test_fs_fetch() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("assets/json")).unwrap();
        fs::write(dir.path().join("assets/json/blogs.json"), "[]").unwrap();

        let source = FsSource::new(dir.path());
        assert_eq!(
            source.fetch("assets/json/blogs.json", Freshness::Cached).unwrap(),
            "[]"
        );
        assert_eq!(
            source.fetch("./assets/json/blogs.json", Freshness::NoCache).unwrap(),
            "[]"
        );
    }

    #[test]
    fn test_fs_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = FsSource::new(dir.path());
        let err = source.fetch("missing.json", Freshness::Cached).unwrap_err();
        assert_eq!(err.kind, SourceErrorKind::NotFound);
        assert_eq!(err.path.as_deref(), Some("missing.json"));
        assert!(err.to_string().starts_with("[Fs] Not found"));
    }

    #[test]
    fn test_fs_rejects_parent_dir() {
        let source = FsSource::new("/srv/site");
        let err = source.fetch("../secret.json", Freshness::Cached).unwrap_err();
        assert_eq!(err.kind, SourceErrorKind::InvalidPath);
        let err = source.fetch("", Freshness::Cached).unwrap_err();
        assert_eq!(err.kind, SourceErrorKind::InvalidPath);
    }

    #[test]
    fn test_http_url_building() {
        let source = HttpSource::new("https://example.com/site/", Duration::from_secs(5));
        assert_eq!(
            source.url("./assets/json/content.json", Freshness::Cached),
            "https://example.com/site/assets/json/content.json"
        );
        assert_eq!(
            source.url("https://cdn.example.com/post.md", Freshness::Cached),
            "https://cdn.example.com/post.md"
        );
    }

    #[test]
    fn test_http_url_cache_busting() {
        let source = HttpSource::new("https://example.com", Duration::from_secs(5));
        let url = source.url("assets/blogs/a.md", Freshness::NoCache);
        assert!(url.starts_with("https://example.com/assets/blogs/a.md?v="));
        let url = source.url("assets/blogs/a.md?lang=en", Freshness::NoCache);
        assert!(url.contains("?lang=en&v="));
    }

    #[test]
    fn test_http_status_kinds() {
        assert_eq!(
            SourceError::http_status(404, "x").kind,
            SourceErrorKind::NotFound
        );
        assert_eq!(
            SourceError::http_status(503, "x").kind,
            SourceErrorKind::Unavailable
        );
        assert_eq!(
            SourceError::http_status(429, "x").kind,
            SourceErrorKind::RateLimited
        );
        let err = SourceError::http_status(404, "assets/json/portfolio.json").with_backend("Http");
        assert_eq!(
            err.to_string(),
            "[Http] Not found: HTTP 404 (path: assets/json/portfolio.json)"
        );
        assert_eq!(err.downcast_source::<HttpStatus>().map(|s| s.0), Some(404));
    }
}
