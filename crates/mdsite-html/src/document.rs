//! Document assembly.
//!
//! Drives block classification and inline tokenization to turn a whole
//! markdown document into a single `div` [`Node`].

use crate::HtmlError;
use crate::block::{BlockKind, classify, segment, strip_markers};
use crate::inline::tokenize;
use crate::node::Node;

/// Convert a markdown document into a tree rooted at a `div`.
///
/// # Errors
///
/// Returns [`HtmlError::UnbalancedDelimiter`] if any block has an unclosed
/// inline delimiter.
pub fn assemble(markdown: &str) -> Result<Node, HtmlError> {
    let blocks = segment(markdown);
    let mut children = Vec::with_capacity(blocks.len());

    for block in blocks {
        let kind = classify(block);
        tracing::trace!(?kind, len = block.len(), "Classified block");
        let text = strip_markers(block, kind);

        let node = match kind {
            BlockKind::Paragraph => Node::parent("p", inline_children(&text)?),
            BlockKind::Quote => Node::parent("blockquote", inline_children(&text)?),
            BlockKind::Code => Node::parent("pre", vec![Node::leaf("code", text)]),
            BlockKind::Heading(level) => {
                Node::parent(format!("h{level}"), inline_children(&text)?)
            }
            BlockKind::UnorderedList => Node::parent("ul", list_items(&text)?),
            BlockKind::OrderedList => Node::parent("ol", list_items(&text)?),
        };
        children.push(node);
    }

    tracing::debug!(blocks = children.len(), "Assembled document");
    Ok(Node::parent("div", children))
}

/// Convert a markdown document straight to an HTML fragment.
///
/// # Errors
///
/// Returns any error from [`assemble`] or from rendering the tree. A
/// document without blocks fails with [`HtmlError::MissingChildren`].
pub fn markdown_to_html(markdown: &str) -> Result<String, HtmlError> {
    assemble(markdown)?.render()
}

/// Return the text of the first `# ` line.
///
/// # Errors
///
/// Returns [`HtmlError::NoTitle`] if no line starts with `# ` followed by
/// some text.
pub fn extract_title(markdown: &str) -> Result<String, HtmlError> {
    markdown
        .split('\n')
        .filter_map(|line| line.strip_prefix("# "))
        .find(|title| !title.is_empty())
        .map(str::to_owned)
        .ok_or(HtmlError::NoTitle)
}

fn inline_children(text: &str) -> Result<Vec<Node>, HtmlError> {
    Ok(tokenize(text)?.iter().map(|span| span.to_node()).collect())
}

/// One `li` per line, each holding that line's inline nodes.
///
/// Lines with no text after their marker produce no item.
fn list_items(text: &str) -> Result<Vec<Node>, HtmlError> {
    let mut items = Vec::new();
    for line in text.split('\n') {
        let children = inline_children(line)?;
        if !children.is_empty() {
            items.push(Node::parent("li", children));
        }
    }
    Ok(items)
}
