//! `folio build` command implementation.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use folio_config::{CliSettings, Config, EngineChoice};
use folio_content::ContentSource;
use folio_site::html::{apply, error_banner};
use folio_site::{PostBody, Site};

use crate::error::CliError;
use crate::output::Output;
use crate::settings::{content_paths, content_source, site_settings};
use crate::surface::DirSurface;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Content base directory or URL (overrides config).
    #[arg(short, long)]
    base: Option<String>,

    /// Output directory for the fragments (default: dist/).
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Markdown engine for blog bodies: primary or fallback (overrides config).
    #[arg(long)]
    engine: Option<EngineChoice>,
}

/// Counts of what a build wrote.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct BuildSummary {
    pub fragments: usize,
    pub projects: usize,
    pub experiences: usize,
    pub posts: usize,
    /// Posts whose body failed to load and show an inline error instead.
    pub broken_posts: Vec<u64>,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or content loading fails, or a
    /// fragment cannot be written.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            base: self.base,
            output_dir: self.out,
            engine: self.engine,
        };
        let config = Config::load(config_path, Some(&cli_settings))?;
        output.info(&format!("Output: {}", config.output_dir.display()));

        let source = content_source(&config);
        let summary = build_site(&config, source.as_ref())?;

        for id in &summary.broken_posts {
            output.warning(&format!("Blog post {id}: markdown failed to load"));
        }
        output.success(&format!(
            "Built {} fragments ({} projects, {} experiences, {} posts) to {}",
            summary.fragments,
            summary.projects,
            summary.experiences,
            summary.posts,
            config.output_dir.display()
        ));
        Ok(())
    }
}

/// Render every section and detail page under `config.output_dir`.
///
/// When the content fails to load only the error banner is written.
pub(crate) fn build_site(
    config: &Config,
    source: &dyn ContentSource,
) -> Result<BuildSummary, CliError> {
    let out = &config.output_dir;
    let mut surface = DirSurface::new(out);

    let mut site = match Site::load(source, &content_paths(config), site_settings(config)) {
        Ok(site) => site,
        Err(err) => {
            apply(&mut surface, &error_banner(&err.to_string()), None)?;
            return Err(err.into());
        }
    };

    site.start(&mut surface)?;
    fs::create_dir_all(out)?;
    fs::write(
        out.join("view.json"),
        serde_json::to_string_pretty(&site.view())?,
    )?;

    let mut summary = BuildSummary {
        fragments: surface.written(),
        ..BuildSummary::default()
    };

    let projects: Vec<u64> = site.store().portfolio().iter().map(|p| p.id).collect();
    for id in projects {
        let mut page = DirSurface::new(out.join("project").join(id.to_string()));
        site.open_project(id, &mut page)?;
        summary.fragments += page.written();
        summary.projects += 1;
    }

    let experiences = site
        .store()
        .content()
        .resume
        .as_ref()
        .and_then(|r| r.experience.as_ref())
        .map_or(0, Vec::len);
    for index in 0..experiences {
        let mut page = DirSurface::new(out.join("experience").join(index.to_string()));
        site.open_experience(index, &mut page)?;
        summary.fragments += page.written();
        summary.experiences += 1;
    }

    let posts: Vec<u64> = site.store().blogs().iter().map(|b| b.id).collect();
    for id in posts {
        let mut page = DirSurface::new(out.join("blog-post").join(id.to_string()));
        let view = site.open_blog(id, source, &mut page)?;
        if matches!(view.body, PostBody::Error(_)) {
            summary.broken_posts.push(id);
        }
        summary.fragments += page.written();
        summary.posts += 1;
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_site::SiteError;
    use pretty_assertions::assert_eq;

    fn write_site(root: &Path, portfolio: Option<&str>) {
        let json = root.join("assets/json");
        fs::create_dir_all(&json).unwrap();
        fs::write(root.join("folio.toml"), "[output]\ndir = \"dist\"\n").unwrap();
        fs::write(
            json.join("content.json"),
            r#"{
                "sidebar": {"name": "Ada", "title": "Engineer"},
                "resume": {"experience": [
                    {"position": "Engineer at Acme", "period": "2020 - 2023"}
                ]}
            }"#,
        )
        .unwrap();
        if let Some(portfolio) = portfolio {
            fs::write(json.join("portfolio.json"), portfolio).unwrap();
        }
        fs::write(
            json.join("blogs.json"),
            r#"[
                {"id": 1, "title": "Hello", "date": "2024-03-05", "markdown": "assets/blogs/hello.md"},
                {"id": 2, "title": "Missing", "markdown": "assets/blogs/missing.md"}
            ]"#,
        )
        .unwrap();
        fs::create_dir_all(root.join("assets/blogs")).unwrap();
        fs::write(root.join("assets/blogs/hello.md"), "# Hello\n\nWorld").unwrap();
    }

    #[test]
    fn test_build_writes_sections_and_pages() {
        let dir = tempfile::tempdir().unwrap();
        write_site(
            dir.path(),
            Some(r#"[{"id": 7, "title": "Blocks", "category": "Mobile Puzzle"}]"#),
        );
        let config_path = dir.path().join("folio.toml");
        let config = Config::load(Some(config_path.as_path()), None).unwrap();
        let source = content_source(&config);

        let summary = build_site(&config, source.as_ref()).unwrap();

        assert_eq!(summary.projects, 1);
        assert_eq!(summary.experiences, 1);
        assert_eq!(summary.posts, 2);
        assert_eq!(summary.broken_posts, vec![2]);

        let dist = dir.path().join("dist");
        assert_eq!(
            fs::read_to_string(dist.join("sidebar-name.html")).unwrap(),
            "Ada"
        );
        assert!(dist.join("view.json").exists());
        assert!(dist.join("project/7/project-title.html").exists());
        assert!(dist.join("experience/0").is_dir());
        let body = fs::read_to_string(dist.join("blog-post/1/blog-post-content.html")).unwrap();
        assert!(body.contains("Hello"));
        assert!(!dist.join("error-banner.html").exists());
    }

    #[test]
    fn test_build_writes_banner_on_load_failure() {
        let dir = tempfile::tempdir().unwrap();
        write_site(dir.path(), None);
        let config_path = dir.path().join("folio.toml");
        let config = Config::load(Some(config_path.as_path()), None).unwrap();
        let source = content_source(&config);

        let err = build_site(&config, source.as_ref()).unwrap_err();

        assert!(matches!(err, CliError::Site(SiteError::Load(_))));
        let dist = dir.path().join("dist");
        let banner = fs::read_to_string(dist.join("error-banner.html")).unwrap();
        assert!(banner.contains("Error loading data: Portfolio JSON failed"));
        assert!(!dist.join("sidebar-name.html").exists());
    }
}
