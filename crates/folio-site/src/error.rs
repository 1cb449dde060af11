//! Error types for the site controller.

use folio_content::LoadError;

use crate::html::SurfaceError;

/// Error driving the site.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Content documents could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Writing fragments failed.
    #[error(transparent)]
    Surface(#[from] SurfaceError),

    /// Rendering the main sections failed again after the retry.
    #[error("rendering failed after retry: {0}")]
    Render(#[source] SurfaceError),

    #[error("blog post not found: {0}")]
    BlogNotFound(u64),

    #[error("project not found: {0}")]
    ProjectNotFound(u64),

    #[error("experience not found at index {0}")]
    ExperienceNotFound(usize),
}
