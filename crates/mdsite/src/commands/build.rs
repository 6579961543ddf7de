//! `mdsite build` command implementation.

use std::path::PathBuf;

use clap::Args;
use mdsite_config::{CliSettings, Config};
use mdsite_site::{BuildConfig, SiteBuilder};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// URL base path the site is served from (overrides config, e.g. `/repo/`).
    base_path: Option<String>,

    /// Markdown content directory (overrides config).
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Static asset directory (overrides config).
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// HTML template file (overrides config).
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Output directory for the generated site (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover mdsite.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log the resolved configuration and every generated page.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            content_dir: self.content_dir,
            static_dir: self.static_dir,
            template: self.template,
            output_dir: self.output_dir,
            base_path: self.base_path,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let site = config.site_resolved;

        tracing::info!(
            config = ?config.config_path,
            content = %site.content_dir.display(),
            static_dir = %site.static_dir.display(),
            template = %site.template.display(),
            output = %site.output_dir.display(),
            base_path = %site.base_path,
            "Resolved configuration"
        );

        let output_dir = site.output_dir.clone();
        let report = SiteBuilder::new(BuildConfig {
            content_dir: site.content_dir,
            static_dir: site.static_dir,
            template: site.template,
            output_dir: site.output_dir,
            base_path: site.base_path,
        })
        .build()?;

        output.summary(&report, &output_dir);
        Ok(())
    }
}
