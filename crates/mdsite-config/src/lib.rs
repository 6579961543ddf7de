//! Configuration management for mdsite.
//!
//! Parses `mdsite.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! `site.base_path` may reference environment variables as `${VAR}` or
//! `${VAR:-/fallback/}`, so one config file can serve both a local preview
//! at `/` and a deployment under a sub-path.

use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override markdown content directory.
    pub content_dir: Option<PathBuf>,
    /// Override static asset directory.
    pub static_dir: Option<PathBuf>,
    /// Override HTML template path.
    pub template: Option<PathBuf>,
    /// Override output directory.
    pub output_dir: Option<PathBuf>,
    /// Override URL base path.
    pub base_path: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "mdsite.toml";

/// Application configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Site configuration (paths are relative strings from TOML).
    site: SiteConfigRaw,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Raw site configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    content_dir: Option<String>,
    static_dir: Option<String>,
    template: Option<String>,
    output_dir: Option<String>,
    base_path: Option<String>,
}

/// Resolved site configuration with absolute paths.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Directory of markdown sources.
    pub content_dir: PathBuf,
    /// Directory copied verbatim into the output.
    pub static_dir: PathBuf,
    /// HTML template containing `{{ Title }}` and `{{ Content }}`.
    pub template: PathBuf,
    /// Directory the site is written to.
    pub output_dir: PathBuf,
    /// URL prefix substituted for root-relative `href` and `src` values.
    pub base_path: String,
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
    /// `site.base_path` references an unset environment variable.
    #[error(
        "site.base_path references ${{{var}}}, which is not set; \
         export it or give a fallback URL prefix with ${{{var}:-/}}"
    )]
    BasePathVar {
        /// Name of the unset variable.
        var: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `mdsite.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
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
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        let site = &mut self.site_resolved;
        if let Some(content_dir) = &settings.content_dir {
            site.content_dir.clone_from(content_dir);
        }
        if let Some(static_dir) = &settings.static_dir {
            site.static_dir.clone_from(static_dir);
        }
        if let Some(template) = &settings.template {
            site.template.clone_from(template);
        }
        if let Some(output_dir) = &settings.output_dir {
            site.output_dir.clone_from(output_dir);
        }
        if let Some(base_path) = &settings.base_path {
            site.base_path.clone_from(base_path);
        }
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
        let mut config = Self::default();
        config.resolve_paths(base);
        config
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if `site.base_path` is empty or is
    /// not wrapped in `/`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_path = &self.site_resolved.base_path;
        if base_path.is_empty() {
            return Err(ConfigError::Validation(
                "site.base_path cannot be empty".to_owned(),
            ));
        }
        if !base_path.starts_with('/') || !base_path.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "site.base_path must start and end with '/', got {base_path:?}"
            )));
        }
        Ok(())
    }

    /// Expand `${VAR}` references in the raw `site.base_path`.
    ///
    /// Bare `$VAR` is left alone unless the value also contains a braced
    /// reference.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        let Some(raw) = self.site.base_path.as_deref() else {
            return Ok(());
        };
        if !raw.contains("${") {
            return Ok(());
        }

        let expanded = shellexpand::env_with_context(raw, |name| std::env::var(name).map(Some))
            .map(Cow::into_owned)
            .map_err(|err| ConfigError::BasePathVar { var: err.var_name })?;
        self.site.base_path = Some(expanded);
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.site_resolved = SiteConfig {
            content_dir: resolve(self.site.content_dir.as_deref(), "content"),
            static_dir: resolve(self.site.static_dir.as_deref(), "static"),
            template: resolve(self.site.template.as_deref(), "template.html"),
            output_dir: resolve(self.site.output_dir.as_deref(), "docs"),
            base_path: self.site.base_path.clone().unwrap_or_else(|| "/".to_owned()),
        };
    }
}
