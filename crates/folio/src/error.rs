//! CLI error types.

use folio_config::ConfigError;
use folio_contact::ContactError;
use folio_site::{SiteError, SurfaceError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Site(#[from] SiteError),

    #[error("{0}")]
    Surface(#[from] SurfaceError),

    #[error("{0}")]
    Contact(#[from] ContactError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
