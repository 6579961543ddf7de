//! Site build errors.

use std::path::PathBuf;

use mdsite_html::HtmlError;

/// Error returned by the static site builder.
///
/// Every variant names the file being processed so a failing build points
/// at its source.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to convert {}: {source}", path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: HtmlError,
    },
}

impl BuildError {
    /// Build a closure that wraps an I/O error with `path`.
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }

    /// Build a closure that wraps a conversion error with `path`.
    pub(crate) fn render(path: impl Into<PathBuf>) -> impl FnOnce(HtmlError) -> Self {
        let path = path.into();
        move |source| Self::Render { path, source }
    }
}
