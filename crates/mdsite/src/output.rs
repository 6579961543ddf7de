//! Build messages on the terminal.

use std::fmt::Display;
use std::path::Path;

use console::{Style, Term};
use mdsite_site::BuildReport;

/// Writes build results to stderr.
pub(crate) struct Output {
    term: Term,
}

impl Output {
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    /// Report a finished build. An empty content tree is flagged in yellow.
    pub(crate) fn summary(&self, report: &BuildReport, output_dir: &Path) {
        if report.pages == 0 {
            self.line(&Style::new().yellow(), "No markdown pages found");
        }
        self.line(
            &Style::new().green(),
            &format!(
                "Built {} {} and copied {} static {} to {}",
                report.pages,
                plural(report.pages, "page"),
                report.assets,
                plural(report.assets, "file"),
                output_dir.display()
            ),
        );
    }

    /// Report a failed command.
    pub(crate) fn failure(&self, err: &dyn Display) {
        self.line(&Style::new().red().bold(), &format!("Error: {err}"));
    }

    fn line(&self, style: &Style, msg: &str) {
        let _ = self.term.write_line(&style.apply_to(msg).to_string());
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        noun.to_owned()
    } else {
        format!("{noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "page"), "page");
        assert_eq!(plural(0, "page"), "pages");
        assert_eq!(plural(3, "file"), "files");
    }
}
