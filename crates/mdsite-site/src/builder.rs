//! Static site builder.

use std::path::PathBuf;

use crate::BuildError;
use crate::assets::copy_static;
use crate::page::generate_pages;

/// Configuration for static site building.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory of markdown sources.
    pub content_dir: PathBuf,
    /// Directory copied verbatim into the output.
    pub static_dir: PathBuf,
    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders.
    pub template: PathBuf,
    /// Output directory; replaced on every build.
    pub output_dir: PathBuf,
    /// URL prefix for root-relative links.
    pub base_path: String,
}

/// Summary of a completed build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildReport {
    /// Static files copied.
    pub assets: usize,
    /// HTML pages generated.
    pub pages: usize,
}

/// Builds a static site from markdown sources and a template.
pub struct SiteBuilder {
    config: BuildConfig,
}

impl SiteBuilder {
    /// Create a new builder.
    #[must_use]
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Copy static assets, then generate every page.
    ///
    /// The output directory is cleared first. Any error aborts the build.
    pub fn build(&self) -> Result<BuildReport, BuildError> {
        let config = &self.config;

        let assets = copy_static(&config.static_dir, &config.output_dir)?;
        let pages = generate_pages(
            &config.content_dir,
            &config.template,
            &config.output_dir,
            &config.base_path,
        )?;

        tracing::info!(assets, pages, output = %config.output_dir.display(), "Site built");
        Ok(BuildReport { assets, pages })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_build_site() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("static/images")).unwrap();
        fs::write(root.join("static/index.css"), "body {}").unwrap();
        fs::write(root.join("static/images/a.png"), "png").unwrap();
        fs::create_dir_all(root.join("content/contact")).unwrap();
        fs::write(root.join("content/index.md"), "# Home\n\n![pic](/images/a.png)").unwrap();
        fs::write(root.join("content/contact/index.md"), "# Contact").unwrap();
        fs::write(
            root.join("template.html"),
            r#"<link href="/index.css"><h1>{{ Title }}</h1>{{ Content }}"#,
        )
        .unwrap();

        let builder = SiteBuilder::new(BuildConfig {
            content_dir: root.join("content"),
            static_dir: root.join("static"),
            template: root.join("template.html"),
            output_dir: root.join("docs"),
            base_path: "/site/".to_owned(),
        });
        let report = builder.build().unwrap();

        assert_eq!(report, BuildReport { assets: 2, pages: 2 });
        assert!(root.join("docs/images/a.png").exists());
        assert!(root.join("docs/contact/index.html").exists());
        let index = fs::read_to_string(root.join("docs/index.html")).unwrap();
        assert!(index.contains(r#"<link href="/site/index.css">"#));
        assert!(index.contains(r#"<img src="/site/images/a.png" alt="pic"></img>"#));
    }

    #[test]
    fn test_build_fails_without_content() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("static")).unwrap();

        let builder = SiteBuilder::new(BuildConfig {
            content_dir: root.join("content"),
            static_dir: root.join("static"),
            template: root.join("template.html"),
            output_dir: root.join("docs"),
            base_path: "/".to_owned(),
        });

        assert!(matches!(builder.build(), Err(BuildError::Io { .. })));
    }
}
