//! Markdown subset to HTML conversion for mdsite.
//!
//! The pipeline runs in one direction:
//!
//! 1. [`segment`] splits the document into blocks on blank lines
//! 2. [`classify`] assigns each block a [`BlockKind`] and [`strip_markers`]
//!    reduces it to inline content
//! 3. [`tokenize`] turns inline content into [`TextSpan`]s
//! 4. [`assemble`] builds the [`Node`] tree, which [`Node::render`]
//!    serializes
//!
//! Supported syntax is deliberately small: `#` headings, fenced code,
//! `>` quotes, `-` and `1.` lists, paragraphs, and `**bold**`, `_italic_`,
//! `` `code` ``, `[links](url)` and `![images](url)` inline. Inline
//! formatting does not nest and text is not HTML-escaped.
//!
//! # Example
//!
//! ```
//! use mdsite_html::{extract_title, markdown_to_html};
//!
//! let markdown = "# Hello\n\nSome **bold** text";
//! assert_eq!(extract_title(markdown).unwrap(), "Hello");
//! assert_eq!(
//!     markdown_to_html(markdown).unwrap(),
//!     "<div><h1>Hello</h1><p>Some <b>bold</b> text</p></div>"
//! );
//! ```

mod block;
mod document;
mod error;
mod inline;
mod node;

pub use block::{BlockKind, classify, segment, strip_markers};
pub use document::{assemble, extract_title, markdown_to_html};
pub use error::HtmlError;
pub use inline::{
    SpanKind, TextSpan, extract_images, extract_links, split_delimiter, split_images, split_links,
    tokenize,
};
pub use node::{Attributes, Node, render_attrs, render_leaf, render_parent};
