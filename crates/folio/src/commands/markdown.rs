//! `folio markdown` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use folio_config::{CliSettings, Config, EngineChoice};
use tracing::info;

use crate::error::CliError;
use crate::output::Output;
use crate::settings::markdown_engine;

/// Arguments for the markdown command.
#[derive(Args)]
pub(crate) struct MarkdownArgs {
    /// Markdown file to render.
    file: PathBuf,

    /// Markdown engine: primary or fallback (overrides config).
    #[arg(long)]
    engine: Option<EngineChoice>,
}

impl MarkdownArgs {
    /// Execute the markdown command, writing HTML to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the file cannot be read.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            engine: self.engine,
            ..CliSettings::default()
        };
        let config = Config::load(config_path, Some(&cli_settings))?;
        let engine = markdown_engine(config.markdown.engine);

        let markdown = std::fs::read_to_string(&self.file)?;
        info!(file = %self.file.display(), ?engine, "Rendering markdown");
        output.document(&engine.render(&markdown))?;
        Ok(())
    }
}
