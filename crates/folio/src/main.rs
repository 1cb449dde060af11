//! Folio CLI - portfolio site generator.
//!
//! Provides commands for:
//! - `build`: Render every section and detail page into HTML fragments
//! - `markdown`: Render a markdown file with the blog styling
//! - `post`: Render a single blog post page
//! - `contact`: Submit the contact form to the form relay

mod commands;
mod error;
mod output;
mod settings;
mod surface;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, ContactArgs, MarkdownArgs, PostArgs};
use output::Output;

/// Folio - portfolio site generator.
#[derive(Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the site into HTML fragments.
    Build(BuildArgs),
    /// Render a markdown file to HTML.
    Markdown(MarkdownArgs),
    /// Render a blog post page.
    Post(PostArgs),
    /// Submit the contact form.
    Contact(ContactArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Build(args) => args.execute(config),
        Commands::Markdown(args) => args.execute(config),
        Commands::Post(args) => args.execute(config),
        Commands::Contact(args) => args.execute(config),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
