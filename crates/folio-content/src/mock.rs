//! Mock content source for testing.
//!
//! Provides [`MockSource`] for unit testing without filesystem or network access.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::source::{ContentSource, Freshness, SourceError, SourceErrorKind};

/// Mock source for testing.
///
/// Stores documents in memory and records every request. Use the builder
/// methods to configure the mock with test data.
///
/// # Example
///
/// ```ignore
/// use folio_content::{ContentSource, Freshness, MockSource};
///
/// let source = MockSource::new()
///     .with_file("assets/json/blogs.json", "[]")
///     .with_failure("assets/json/portfolio.json", SourceErrorKind::Unavailable);
///
/// let blogs = source.fetch("assets/json/blogs.json", Freshness::Cached).unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockSource {
    files: RwLock<HashMap<String, String>>,
    failures: RwLock<HashMap<String, SourceErrorKind>>,
    requests: RwLock<Vec<(String, Freshness)>>,
}

impl MockSource {
    /// Create a new empty mock source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document for a path.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_file(self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files
            .write()
            .unwrap()
            .insert(path.into(), content.into());
        self
    }

    /// Make fetching a path fail with the given kind.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_failure(self, path: impl Into<String>, kind: SourceErrorKind) -> Self {
        self.failures.write().unwrap().insert(path.into(), kind);
        self
    }

    /// Replace a document after construction.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn set_file(&self, path: impl Into<String>, content: impl Into<String>) {
        let path = path.into();
        self.failures.write().unwrap().remove(&path);
        self.files.write().unwrap().insert(path, content.into());
    }

    /// All requests made so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn requests(&self) -> Vec<(String, Freshness)> {
        self.requests.read().unwrap().clone()
    }
}

impl ContentSource for MockSource {
    fn fetch(&self, path: &str, freshness: Freshness) -> Result<String, SourceError> {
        let key = path.trim_start_matches("./");
        self.requests
            .write()
            .unwrap()
            .push((key.to_owned(), freshness));

        if let Some(kind) = self.failures.read().unwrap().get(key) {
            return Err(SourceError::new(*kind)
                .with_path(key)
                .with_backend("Mock"));
        }

        self.files
            .read()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or_else(|| SourceError::not_found(key).with_backend("Mock"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_and_record() {
        let source = MockSource::new().with_file("a.json", "{}");
        assert_eq!(source.fetch("./a.json", Freshness::NoCache).unwrap(), "{}");
        assert_eq!(
            source.requests(),
            vec![("a.json".to_owned(), Freshness::NoCache)]
        );
    }

    #[test]
    fn test_missing_and_failure() {
        let source = MockSource::new().with_failure("b.json", SourceErrorKind::Timeout);
        assert_eq!(
            source.fetch("b.json", Freshness::Cached).unwrap_err().kind,
            SourceErrorKind::Timeout
        );
        assert_eq!(
            source.fetch("c.json", Freshness::Cached).unwrap_err().kind,
            SourceErrorKind::NotFound
        );

        source.set_file("b.json", "[]");
        assert_eq!(source.fetch("b.json", Freshness::Cached).unwrap(), "[]");
    }
}
