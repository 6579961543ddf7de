//! Error type for markdown conversion and HTML serialization.

/// Error returned when a document cannot be converted to HTML.
///
/// Every variant is a hard failure: conversion of the whole document stops
/// and no partial output is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HtmlError {
    /// A bold, italic or code delimiter occurs an odd number of times in a span.
    #[error("Invalid markdown: unbalanced `{delimiter}` delimiter in {text:?}")]
    UnbalancedDelimiter {
        /// The delimiter that was not closed (`**`, `_` or `` ` ``).
        delimiter: &'static str,
        /// Text of the span that contained the odd count.
        text: String,
    },

    /// A leaf element was rendered without a value.
    #[error("Leaf node has no value")]
    MissingValue,

    /// A parent element was rendered without a tag.
    #[error("Parent node has no tag")]
    MissingTag,

    /// A parent element was rendered without children.
    #[error("Parent node <{tag}> has no children")]
    MissingChildren {
        /// Tag of the childless parent.
        tag: String,
    },

    /// The document contains no `# ` title line.
    #[error("Markdown has no title: expected a line starting with \"# \"")]
    NoTitle,

    /// A text span of an unknown kind reached tree conversion.
    ///
    /// Span kinds form a closed enum, so this is never produced by this crate.
    /// It is kept so callers matching on the error taxonomy stay exhaustive.
    #[error("Text span has an invalid kind: {0}")]
    InvalidTextKind(String),
}
