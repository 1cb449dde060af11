//! Surface that writes each fragment to its own file.

use std::fs;
use std::path::{Path, PathBuf};

use folio_site::{Surface, SurfaceError};
use tracing::debug;

/// Writes `<dir>/<anchor>.html` for every replaced anchor.
///
/// Every anchor is considered present.
pub(crate) struct DirSurface {
    dir: PathBuf,
    written: usize,
}

impl DirSurface {
    pub(crate) fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: 0,
        }
    }

    pub(crate) fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of fragments written so far.
    pub(crate) fn written(&self) -> usize {
        self.written
    }
}

impl Surface for DirSurface {
    fn has_anchor(&self, _anchor: &str) -> bool {
        true
    }

    fn replace(&mut self, anchor: &str, html: &str) -> Result<(), SurfaceError> {
        let path = self.dir.join(format!("{anchor}.html"));
        let write = || -> std::io::Result<()> {
            fs::create_dir_all(&self.dir)?;
            fs::write(&path, html)
        };
        write().map_err(|err| SurfaceError {
            anchor: anchor.to_owned(),
            message: err.to_string(),
        })?;
        debug!(path = %path.display(), "Fragment written");
        self.written += 1;
        Ok(())
    }
}
