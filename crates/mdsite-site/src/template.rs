//! HTML page template filling.

/// Placeholder replaced with the page title.
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
/// Placeholder replaced with the rendered page body.
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Fill a page template and rebase root-relative URLs.
///
/// After substitution, every `href="/` and `src="/` is rewritten to start
/// with `base_path`, so a site can be served from a sub-path. This applies to
/// URLs in the template and in the content alike.
pub fn render_template(template: &str, title: &str, content: &str, base_path: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
        .replace(r#"href="/"#, &format!(r#"href="{base_path}"#))
        .replace(r#"src="/"#, &format!(r#"src="{base_path}"#))
}
