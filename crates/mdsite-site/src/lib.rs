//! Static site generation for mdsite.
//!
//! Copies a static asset directory into the output, then converts every
//! markdown file under the content directory into an HTML page using a
//! template with `{{ Title }}` and `{{ Content }}` placeholders.

mod assets;
mod builder;
mod error;
mod page;
mod template;

pub use assets::copy_static;
pub use builder::{BuildConfig, BuildReport, SiteBuilder};
pub use error::BuildError;
pub use page::{generate_page, generate_pages};
pub use template::{CONTENT_PLACEHOLDER, TITLE_PLACEHOLDER, render_template};
