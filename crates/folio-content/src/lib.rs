//! Content store for the Folio portfolio.
//!
//! Three JSON documents drive every rendered section: the profile document
//! (sidebar, about, resume), the portfolio items and the blog index. They are
//! fetched concurrently through a [`ContentSource`] and held in a
//! [`ContentStore`] for the session. Blog bodies are fetched lazily per post.
//!
//! # Architecture
//!
//! - [`ContentSource`] trait with a single `fetch()` method
//! - [`FsSource`] reads from a local directory
//! - [`HttpSource`] fetches from a base URL with `ureq`
//! - [`MockSource`] for testing (behind `mock` feature flag)
//!
//! No schema is enforced: absent fields deserialize to `None` or empty values
//! and consumers decide whether to render a section.

mod category;
#[cfg(feature = "mock")]
mod mock;
mod model;
mod source;
mod store;

pub use category::CategoryFilter;
#[cfg(feature = "mock")]
pub use mock::MockSource;
pub use model::{
    About, BlogPost, Client, Contact, ContentDocument, Education, Experience, MediaKind,
    PortfolioItem, Resume, Service, Sidebar, Skill, SocialLink, Testimonial, Tool,
};
pub use source::{ContentSource, Freshness, FsSource, HttpSource, SourceError, SourceErrorKind};
pub use store::{ContentPaths, ContentStore, DocumentKind, LoadError};
