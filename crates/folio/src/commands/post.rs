//! `folio post` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use folio_config::{CliSettings, Config, EngineChoice};
use folio_site::{PostBody, Site};

use crate::error::CliError;
use crate::output::Output;
use crate::settings::{content_paths, content_source, site_settings};
use crate::surface::DirSurface;

/// Arguments for the post command.
#[derive(Args)]
pub(crate) struct PostArgs {
    /// Blog post id.
    id: u64,

    /// Content base directory or URL (overrides config).
    #[arg(short, long)]
    base: Option<String>,

    /// Output directory (default: dist/).
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Markdown engine: primary or fallback (overrides config).
    #[arg(long)]
    engine: Option<EngineChoice>,
}

impl PostArgs {
    /// Execute the post command.
    ///
    /// # Errors
    ///
    /// Returns an error if the content fails to load, the post does not exist
    /// or a fragment cannot be written. A missing markdown body is reported as
    /// a warning and rendered inline.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            base: self.base,
            output_dir: self.out,
            engine: self.engine,
        };
        let config = Config::load(config_path, Some(&cli_settings))?;
        let source = content_source(&config);

        let mut site = Site::load(source.as_ref(), &content_paths(&config), site_settings(&config))?;
        let dir = config
            .output_dir
            .join("blog-post")
            .join(self.id.to_string());
        let mut surface = DirSurface::new(dir);
        let view = site.open_blog(self.id, source.as_ref(), &mut surface)?;

        if let PostBody::Error(message) = &view.body {
            output.warning(&format!("Markdown failed to load: {message}"));
        }
        output.success(&format!(
            "Rendered \"{}\" ({} fragments) to {}",
            view.title,
            surface.written(),
            surface.dir().display()
        ));
        Ok(())
    }
}
