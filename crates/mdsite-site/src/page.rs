//! Page generation from markdown sources.

use std::fs;
use std::path::{Path, PathBuf};

use mdsite_html::{extract_title, markdown_to_html};

use crate::BuildError;
use crate::template::render_template;

/// Convert one markdown file into an HTML page.
///
/// The page body and title come from the markdown; the surrounding markup
/// comes from `template`. Parent directories of `dest` are created.
pub fn generate_page(
    from: &Path,
    template_path: &Path,
    dest: &Path,
    base_path: &str,
) -> Result<(), BuildError> {
    tracing::info!(
        from = %from.display(),
        to = %dest.display(),
        template = %template_path.display(),
        "Generating page"
    );

    let markdown = fs::read_to_string(from).map_err(BuildError::io(from))?;
    let template = fs::read_to_string(template_path).map_err(BuildError::io(template_path))?;

    let content = markdown_to_html(&markdown).map_err(BuildError::render(from))?;
    let title = extract_title(&markdown).map_err(BuildError::render(from))?;
    let page = render_template(&template, &title, &content, base_path);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(BuildError::io(parent))?;
    }
    fs::write(dest, page).map_err(BuildError::io(dest))
}

/// Generate a page for every file under `content_dir`.
///
/// The directory layout is mirrored into `dest_dir` with `.md` replaced by
/// `.html`. Entries are visited in file-name order and the first failure
/// stops the walk. Returns the number of pages written.
pub fn generate_pages(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    base_path: &str,
) -> Result<usize, BuildError> {
    let mut entries: Vec<PathBuf> = fs::read_dir(content_dir)
        .map_err(BuildError::io(content_dir))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<_, _>>()
        .map_err(BuildError::io(content_dir))?;
    entries.sort();

    let mut pages = 0;
    for src in entries {
        let Some(name) = src.file_name() else {
            continue;
        };
        let dest = dest_dir.join(name);
        if src.is_file() {
            generate_page(&src, template_path, &html_path(&dest), base_path)?;
            pages += 1;
        } else {
            pages += generate_pages(&src, template_path, &dest, base_path)?;
        }
    }
    Ok(pages)
}

/// Swap a trailing `.md` for `.html`; other names are kept as they are.
fn html_path(dest: &Path) -> PathBuf {
    if dest.extension().is_some_and(|ext| ext == "md") {
        dest.with_extension("html")
    } else {
        dest.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdsite_html::HtmlError;
    use pretty_assertions::assert_eq;

    const TEMPLATE: &str = "<title>{{ Title }}</title><main>{{ Content }}</main>";

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_html_path() {
        assert_eq!(html_path(Path::new("a/b.md")), PathBuf::from("a/b.html"));
        assert_eq!(html_path(Path::new("a/notes")), PathBuf::from("a/notes"));
    }

    #[test]
    fn test_generate_page() {
        let temp = tempfile::tempdir().unwrap();
        let src = temp.path().join("index.md");
        let template = temp.path().join("template.html");
        write(&src, "# Hello\n\nSee [home](/about).");
        write(&template, TEMPLATE);

        let dest = temp.path().join("out/nested/index.html");
        generate_page(&src, &template, &dest, "/base/").unwrap();

        assert_eq!(
            fs::read_to_string(dest).unwrap(),
            r#"<title>Hello</title><main><div><h1>Hello</h1><p>See <a href="/base/about">home</a>.</p></div></main>"#
        );
    }

    #[test]
    fn test_generate_page_without_title_fails() {
        let temp = tempfile::tempdir().unwrap();
        let src = temp.path().join("page.md");
        let template = temp.path().join("template.html");
        write(&src, "no title here");
        write(&template, TEMPLATE);

        let err = generate_page(&src, &template, &temp.path().join("page.html"), "/").unwrap_err();

        assert!(matches!(
            err,
            BuildError::Render {
                source: HtmlError::NoTitle,
                ..
            }
        ));
        assert!(err.to_string().contains("page.md"));
    }

    #[test]
    fn test_generate_page_missing_template() {
        let temp = tempfile::tempdir().unwrap();
        let src = temp.path().join("page.md");
        write(&src, "# T");

        let err = generate_page(
            &src,
            &temp.path().join("missing.html"),
            &temp.path().join("page.html"),
            "/",
        )
        .unwrap_err();
        assert!(matches!(err, BuildError::Io { ref path, .. } if path.ends_with("missing.html")));
    }

    #[test]
    fn test_generate_pages_mirrors_tree() {
        let temp = tempfile::tempdir().unwrap();
        let content = temp.path().join("content");
        let template = temp.path().join("template.html");
        write(&content.join("index.md"), "# Home");
        write(&content.join("blog/first/index.md"), "# First post");
        write(&content.join("blog/second.md"), "# Second post");
        write(&template, TEMPLATE);

        let out = temp.path().join("docs");
        let pages = generate_pages(&content, &template, &out, "/").unwrap();

        assert_eq!(pages, 3);
        assert!(out.join("index.html").exists());
        assert!(out.join("blog/second.html").exists());
        assert_eq!(
            fs::read_to_string(out.join("blog/first/index.html")).unwrap(),
            "<title>First post</title><main><div><h1>First post</h1></div></main>"
        );
    }

    #[test]
    fn test_generate_pages_stops_at_first_error() {
        let temp = tempfile::tempdir().unwrap();
        let content = temp.path().join("content");
        let template = temp.path().join("template.html");
        write(&content.join("a.md"), "# A\n\n**broken");
        write(&content.join("b.md"), "# B");
        write(&template, TEMPLATE);

        let out = temp.path().join("docs");
        let err = generate_pages(&content, &template, &out, "/").unwrap_err();

        assert!(matches!(
            err,
            BuildError::Render {
                source: HtmlError::UnbalancedDelimiter { .. },
                ..
            }
        ));
        assert!(!out.join("b.html").exists());
    }
}
