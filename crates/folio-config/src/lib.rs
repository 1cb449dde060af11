//! Configuration management for Folio.
//!
//! Parses `folio.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `content.base`
//! - `contact.endpoint`
//! - `contact.access_key`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override content base (directory or URL).
    pub base: Option<String>,
    /// Override output directory.
    pub output_dir: Option<PathBuf>,
    /// Override markdown engine.
    pub engine: Option<EngineChoice>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "folio.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Content location configuration (paths are relative strings from TOML).
    content: ContentConfigRaw,
    /// Markdown rendering configuration.
    pub markdown: MarkdownConfig,
    /// Contact form relay configuration.
    pub contact: ContactConfig,
    /// Carousel and ribbon timing configuration.
    pub sliders: SliderConfig,
    /// Theme configuration.
    pub theme: ThemeConfig,
    /// Output configuration.
    output: OutputConfigRaw,

    /// Resolved content configuration (set after loading).
    #[serde(skip)]
    pub content_resolved: ContentConfig,
    /// Resolved output directory (set after loading).
    #[serde(skip)]
    pub output_dir: PathBuf,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw content configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ContentConfigRaw {
    base: Option<String>,
    content: Option<String>,
    portfolio: Option<String>,
    blogs: Option<String>,
    timeout_secs: Option<u64>,
}

/// Where the JSON documents and markdown bodies are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBase {
    /// Local directory.
    Dir(PathBuf),
    /// Remote base URL (`http://` or `https://`).
    Url(String),
}

impl Default for ContentBase {
    fn default() -> Self {
        Self::Dir(PathBuf::from("."))
    }
}

/// Resolved content configuration.
#[derive(Debug, Clone)]
pub struct ContentConfig {
    /// Base location of all content paths.
    pub base: ContentBase,
    /// Relative path of the profile/content document.
    pub content: String,
    /// Relative path of the portfolio document.
    pub portfolio: String,
    /// Relative path of the blog index document.
    pub blogs: String,
    /// Request timeout for remote sources.
    pub timeout: Duration,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            base: ContentBase::default(),
            content: "assets/json/content.json".to_owned(),
            portfolio: "assets/json/portfolio.json".to_owned(),
            blogs: "assets/json/blogs.json".to_owned(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Markdown engine selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineChoice {
    /// Full parser with styled output.
    #[default]
    Primary,
    /// Regex-driven minimal conversion.
    Fallback,
}

impl std::str::FromStr for EngineChoice {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(Self::Primary),
            "fallback" => Ok(Self::Fallback),
            other => Err(ConfigError::Validation(format!(
                "unknown markdown engine '{other}' (expected primary or fallback)"
            ))),
        }
    }
}

/// Markdown configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Which strategy renders blog bodies.
    pub engine: EngineChoice,
}

/// Contact form relay configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Form relay endpoint accepting POSTed form bodies.
    pub endpoint: String,
    /// Access key appended to every submission when the form lacks one.
    pub access_key: Option<String>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.web3forms.com/submit".to_owned(),
            access_key: None,
        }
    }
}

impl ContactConfig {
    /// Validate that the relay can be reached with a key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the endpoint or key is unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.endpoint, "contact.endpoint")?;
        require_http_url(&self.endpoint, "contact.endpoint")?;
        match &self.access_key {
            Some(key) => require_non_empty(key, "contact.access_key"),
            None => Err(ConfigError::Validation(
                "contact.access_key is required to submit the contact form".to_owned(),
            )),
        }
    }
}

/// Carousel and ribbon timing configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Interval between client logo autoplay steps.
    pub clients_autoplay_ms: u64,
    /// Dwell time at either end of the clients ribbon.
    pub clients_dwell_ms: u64,
    /// Dwell time at either end of the tools ribbon.
    pub tools_dwell_ms: u64,
    /// Pixels moved per animation frame by the ribbons.
    pub scroll_step_px: f64,
    /// Screenshots visible at once on the project page.
    pub screenshots_per_view: usize,
    /// Gap between screenshots in pixels.
    pub screenshot_gap_px: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            clients_autoplay_ms: 3000,
            clients_dwell_ms: 3000,
            tools_dwell_ms: 2000,
            scroll_step_px: 1.0,
            screenshots_per_view: 3,
            screenshot_gap_px: 16.0,
        }
    }
}

impl SliderConfig {
    /// Clients autoplay interval.
    #[must_use]
    pub fn clients_autoplay(&self) -> Duration {
        Duration::from_millis(self.clients_autoplay_ms)
    }

    /// Clients ribbon dwell time.
    #[must_use]
    pub fn clients_dwell(&self) -> Duration {
        Duration::from_millis(self.clients_dwell_ms)
    }

    /// Tools ribbon dwell time.
    #[must_use]
    pub fn tools_dwell(&self) -> Duration {
        Duration::from_millis(self.tools_dwell_ms)
    }
}

/// Stored theme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Dark,
    Light,
    /// Follow the system color scheme.
    #[default]
    System,
}

/// Theme configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Stored preference.
    pub preference: ThemePreference,
}

/// Raw output configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    dir: Option<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`contact.access_key`").
        field: String,
        /// Error message (e.g., "${`FOLIO_ACCESS_KEY`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !is_http_url(url) {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Turn a configured base string into a [`ContentBase`], resolving
/// directories against `config_dir`.
fn resolve_base(base: &str, config_dir: &Path) -> ContentBase {
    if is_http_url(base) {
        ContentBase::Url(base.trim_end_matches('/').to_owned())
    } else {
        ContentBase::Dir(config_dir.join(base))
    }
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `folio.toml` in current directory and parents.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(base) = &settings.base {
            let cwd = std::env::current_dir().unwrap_or_default();
            self.content_resolved.base = resolve_base(base, &cwd);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.output_dir.clone_from(output_dir);
        }
        if let Some(engine) = settings.engine {
            self.markdown.engine = engine;
        }
    }

    /// Get validated contact configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the endpoint or key is invalid.
    pub fn require_contact(&self) -> Result<&ContactConfig, ConfigError> {
        self.contact.validate()?;
        Ok(&self.contact)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            content: ContentConfigRaw::default(),
            markdown: MarkdownConfig::default(),
            contact: ContactConfig::default(),
            sliders: SliderConfig::default(),
            theme: ThemeConfig::default(),
            output: OutputConfigRaw::default(),
            content_resolved: ContentConfig {
                base: ContentBase::Dir(base.to_path_buf()),
                ..ContentConfig::default()
            },
            output_dir: base.join("dist"),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// The contact section is validated lazily by [`Config::require_contact`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_content()?;
        self.validate_sliders()?;
        Ok(())
    }

    fn validate_content(&self) -> Result<(), ConfigError> {
        let content = &self.content_resolved;
        require_non_empty(&content.content, "content.content")?;
        require_non_empty(&content.portfolio, "content.portfolio")?;
        require_non_empty(&content.blogs, "content.blogs")?;
        if content.timeout.is_zero() {
            return Err(ConfigError::Validation(
                "content.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_sliders(&self) -> Result<(), ConfigError> {
        let sliders = &self.sliders;
        if sliders.clients_autoplay_ms == 0 {
            return Err(ConfigError::Validation(
                "sliders.clients_autoplay_ms must be greater than 0".to_owned(),
            ));
        }
        if sliders.screenshots_per_view == 0 {
            return Err(ConfigError::Validation(
                "sliders.screenshots_per_view must be greater than 0".to_owned(),
            ));
        }
        if sliders.scroll_step_px.is_nan() || sliders.scroll_step_px <= 0.0 {
            return Err(ConfigError::Validation(
                "sliders.scroll_step_px must be positive".to_owned(),
            ));
        }
        if sliders.screenshot_gap_px < 0.0 {
            return Err(ConfigError::Validation(
                "sliders.screenshot_gap_px cannot be negative".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref base) = self.content.base {
            self.content.base = Some(expand::expand_env(base, "content.base")?);
        }

        self.contact.endpoint = expand::expand_env(&self.contact.endpoint, "contact.endpoint")?;
        if let Some(ref key) = self.contact.access_key {
            self.contact.access_key = Some(expand::expand_env(key, "contact.access_key")?);
        }

        Ok(())
    }

    /// Resolve relative paths against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let defaults = ContentConfig::default();
        let raw = &self.content;

        self.content_resolved = ContentConfig {
            base: resolve_base(raw.base.as_deref().unwrap_or("."), config_dir),
            content: raw.content.clone().unwrap_or(defaults.content),
            portfolio: raw.portfolio.clone().unwrap_or(defaults.portfolio),
            blogs: raw.blogs.clone().unwrap_or(defaults.blogs),
            timeout: raw
                .timeout_secs
                .map_or(defaults.timeout, Duration::from_secs),
        };

        self.output_dir = config_dir.join(self.output.dir.as_deref().unwrap_or("dist"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/site"));
        assert_eq!(
            config.content_resolved.base,
            ContentBase::Dir(PathBuf::from("/site"))
        );
        assert_eq!(config.content_resolved.content, "assets/json/content.json");
        assert_eq!(config.content_resolved.portfolio, "assets/json/portfolio.json");
        assert_eq!(config.content_resolved.blogs, "assets/json/blogs.json");
        assert_eq!(config.output_dir, PathBuf::from("/site/dist"));
        assert_eq!(config.markdown.engine, EngineChoice::Primary);
        assert_eq!(config.sliders.clients_autoplay(), Duration::from_secs(3));
        assert_eq!(config.sliders.tools_dwell(), Duration::from_secs(2));
        assert_eq!(config.sliders.screenshots_per_view, 3);
        assert_eq!(config.theme.preference, ThemePreference::System);
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.contact.endpoint, "https://api.web3forms.com/submit");
        assert!(config.contact.access_key.is_none());
    }

    #[test]
    fn test_parse_sections() {
        let toml = r#"
[markdown]
engine = "fallback"

[sliders]
clients_autoplay_ms = 1500
screenshots_per_view = 4

[theme]
preference = "light"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.markdown.engine, EngineChoice::Fallback);
        assert_eq!(config.sliders.clients_autoplay_ms, 1500);
        assert_eq!(config.sliders.screenshots_per_view, 4);
        assert_eq!(config.sliders.clients_dwell_ms, 3000);
        assert_eq!(config.theme.preference, ThemePreference::Light);
    }

    #[test]
    fn test_resolve_paths_directory_base() {
        let toml = r#"
[content]
base = "public"
portfolio = "data/work.json"

[output]
dir = "out"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.content_resolved.base,
            ContentBase::Dir(PathBuf::from("/project/public"))
        );
        assert_eq!(config.content_resolved.portfolio, "data/work.json");
        assert_eq!(config.content_resolved.content, "assets/json/content.json");
        assert_eq!(config.output_dir, PathBuf::from("/project/out"));
    }

    #[test]
    fn test_resolve_paths_url_base() {
        let toml = r#"
[content]
base = "https://example.com/portfolio/"
timeout_secs = 5
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.content_resolved.base,
            ContentBase::Url("https://example.com/portfolio".to_owned())
        );
        assert_eq!(config.content_resolved.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            base: Some("https://cdn.example.com".to_owned()),
            output_dir: Some(PathBuf::from("/tmp/out")),
            engine: Some(EngineChoice::Fallback),
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(
            config.content_resolved.base,
            ContentBase::Url("https://cdn.example.com".to_owned())
        );
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.markdown.engine, EngineChoice::Fallback);
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.apply_cli_settings(&CliSettings::default());
        assert_eq!(config.output_dir, PathBuf::from("/test/dist"));
        assert_eq!(config.markdown.engine, EngineChoice::Primary);
    }

    #[test]
    fn test_engine_from_str() {
        assert_eq!("primary".parse::<EngineChoice>().unwrap(), EngineChoice::Primary);
        assert_eq!("fallback".parse::<EngineChoice>().unwrap(), EngineChoice::Fallback);
        let err = "marked".parse::<EngineChoice>().unwrap_err();
        assert!(err.to_string().contains("marked"));
    }

    #[test]
    fn test_expand_env_vars_contact() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("FOLIO_TEST_ACCESS_KEY", "key-123");
        }

        let toml = r#"
[contact]
access_key = "${FOLIO_TEST_ACCESS_KEY}"
endpoint = "${FOLIO_TEST_ENDPOINT:-https://relay.example.com/submit}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(config.contact.access_key.as_deref(), Some("key-123"));
        assert_eq!(config.contact.endpoint, "https://relay.example.com/submit");

        unsafe {
            std::env::remove_var("FOLIO_TEST_ACCESS_KEY");
        }
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            r#"
[content]
base = "site"

[sliders]
tools_dwell_ms = 2500
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(
            config.content_resolved.base,
            ContentBase::Dir(dir.path().join("site"))
        );
        assert_eq!(config.sliders.tools_dwell(), Duration::from_millis(2500));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let err = Config::load(Some(Path::new("/nonexistent/folio.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    /// Assert that validation fails with expected substrings in the error message.
    fn assert_validation_error(config: &Config, expected_substrings: &[&str]) {
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(msg.contains(s), "Expected error to contain '{s}', got: {msg}");
        }
    }

    #[test]
    fn test_validate_default_config_passes() {
        let config = Config::default_with_base(Path::new("/test"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.content_resolved.timeout = Duration::ZERO;
        assert_validation_error(&config, &["timeout_secs"]);
    }

    #[test]
    fn test_validate_zero_autoplay() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.sliders.clients_autoplay_ms = 0;
        assert_validation_error(&config, &["clients_autoplay_ms"]);
    }

    #[test]
    fn test_validate_zero_per_view() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.sliders.screenshots_per_view = 0;
        assert_validation_error(&config, &["screenshots_per_view"]);
    }

    #[test]
    fn test_validate_step_not_positive() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.sliders.scroll_step_px = 0.0;
        assert_validation_error(&config, &["scroll_step_px"]);
    }

    #[test]
    fn test_require_contact_missing_key() {
        let config = Config::default_with_base(Path::new("/test"));
        let err = config.require_contact().unwrap_err();
        assert!(err.to_string().contains("access_key"));
    }

    #[test]
    fn test_require_contact_invalid_scheme() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.contact.endpoint = "ftp://relay".to_owned();
        config.contact.access_key = Some("k".to_owned());
        let err = config.require_contact().unwrap_err();
        assert!(err.to_string().contains("http"));
    }

    #[test]
    fn test_require_contact_valid() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.contact.access_key = Some("k".to_owned());
        assert!(config.require_contact().is_ok());
    }
}
