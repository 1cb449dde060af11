//! Translation of `folio.toml` into library settings.

use folio_config::{Config, ContentBase, EngineChoice};
use folio_content::{ContentPaths, ContentSource, FsSource, HttpSource};
use folio_renderer::MarkdownEngine;
use folio_site::{SiteSettings, ThemePreference};

/// Markdown engine for a configured choice.
pub(crate) fn markdown_engine(choice: EngineChoice) -> MarkdownEngine {
    match choice {
        EngineChoice::Primary => MarkdownEngine::Primary,
        EngineChoice::Fallback => MarkdownEngine::Fallback,
    }
}

fn theme_preference(preference: folio_config::ThemePreference) -> ThemePreference {
    match preference {
        folio_config::ThemePreference::Dark => ThemePreference::Dark,
        folio_config::ThemePreference::Light => ThemePreference::Light,
        folio_config::ThemePreference::System => ThemePreference::System,
    }
}

/// Controller settings from configuration.
pub(crate) fn site_settings(config: &Config) -> SiteSettings {
    let sliders = &config.sliders;
    SiteSettings {
        engine: markdown_engine(config.markdown.engine),
        theme: theme_preference(config.theme.preference),
        clients_autoplay: sliders.clients_autoplay(),
        clients_dwell: sliders.clients_dwell(),
        tools_dwell: sliders.tools_dwell(),
        scroll_step: sliders.scroll_step_px,
        screenshots_per_view: sliders.screenshots_per_view,
        screenshot_gap: sliders.screenshot_gap_px,
        ..SiteSettings::default()
    }
}

/// Relative document paths from configuration.
pub(crate) fn content_paths(config: &Config) -> ContentPaths {
    let content = &config.content_resolved;
    ContentPaths {
        content: content.content.clone(),
        portfolio: content.portfolio.clone(),
        blogs: content.blogs.clone(),
    }
}

/// Content source for the configured base.
pub(crate) fn content_source(config: &Config) -> Box<dyn ContentSource> {
    let content = &config.content_resolved;
    match &content.base {
        ContentBase::Dir(dir) => Box::new(FsSource::new(dir.clone())),
        ContentBase::Url(url) => Box::new(HttpSource::new(url, content.timeout)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    #[test]
    fn test_site_settings_from_defaults() {
        let config = Config::default();
        let settings = site_settings(&config);

        assert_eq!(settings.engine, MarkdownEngine::Primary);
        assert_eq!(settings.theme, ThemePreference::System);
        assert_eq!(settings.clients_autoplay, Duration::from_millis(3000));
        assert_eq!(settings.tools_dwell, Duration::from_millis(2000));
        assert_eq!(settings.screenshots_per_view, 3);
        assert_eq!(settings.viewport_width, SiteSettings::default().viewport_width);
    }

    #[test]
    fn test_engine_override() {
        let mut config = Config::default();
        config.markdown.engine = EngineChoice::Fallback;
        config.theme.preference = folio_config::ThemePreference::Light;

        let settings = site_settings(&config);
        assert_eq!(settings.engine, MarkdownEngine::Fallback);
        assert_eq!(settings.theme, ThemePreference::Light);
    }

    #[test]
    fn test_content_paths() {
        let paths = content_paths(&Config::default());
        assert_eq!(paths, ContentPaths::default());
    }
}
