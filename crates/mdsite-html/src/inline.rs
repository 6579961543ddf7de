//! Inline span tokenization.
//!
//! Block text is split into [`TextSpan`]s by five passes applied in a fixed
//! order: bold (`**`), italic (`_`), code (`` ` ``), images, links. Each pass
//! only rewrites spans that are still [`SpanKind::Plain`]; styled spans pass
//! through untouched, so formatting never nests.

use std::sync::LazyLock;

use regex::Regex;

use crate::HtmlError;
use crate::node::{Attributes, Node};

/// `![alt](url)` with non-empty alt and url.
static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// `[text](url)`; text and url may be empty. Matches preceded by `!` are
/// skipped by [`extract_links`].
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^()]*)\)").unwrap());

/// Formatting kind of an inline span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link { url: String },
    Image { url: String },
}

/// A contiguous run of inline text with its formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub content: String,
    pub kind: SpanKind,
}

impl TextSpan {
    /// Create a span.
    #[must_use]
    pub fn new(content: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            content: content.into(),
            kind,
        }
    }

    /// Create an unformatted span.
    #[must_use]
    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Plain)
    }

    /// Create a link span.
    #[must_use]
    pub fn link(content: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Link { url: url.into() })
    }

    /// Create an image span; `content` is the alt text.
    #[must_use]
    pub fn image(content: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Image { url: url.into() })
    }

    /// URL of a link or image span.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        match &self.kind {
            SpanKind::Link { url } | SpanKind::Image { url } => Some(url),
            _ => None,
        }
    }

    fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }

    /// Convert the span into its HTML node.
    #[must_use]
    pub fn to_node(&self) -> Node {
        let content = self.content.as_str();
        match &self.kind {
            SpanKind::Plain => Node::text(content),
            SpanKind::Bold => Node::leaf("b", content),
            SpanKind::Italic => Node::leaf("i", content),
            SpanKind::Code => Node::leaf("code", content),
            SpanKind::Link { url } => {
                Node::leaf_with_attrs("a", content, Attributes::new().with("href", url))
            }
            SpanKind::Image { url } => Node::leaf_with_attrs(
                "img",
                "",
                Attributes::new().with("src", url).with("alt", content),
            ),
        }
    }
}

/// Tokenize inline markdown into spans.
///
/// # Errors
///
/// Returns [`HtmlError::UnbalancedDelimiter`] if any bold, italic or code
/// delimiter is left unclosed. No partial token list is returned.
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>, HtmlError> {
    let spans = vec![TextSpan::plain(text)];
    let spans = split_delimiter(spans, "**", &SpanKind::Bold)?;
    let spans = split_delimiter(spans, "_", &SpanKind::Italic)?;
    let spans = split_delimiter(spans, "`", &SpanKind::Code)?;
    let spans = split_images(spans);
    Ok(split_links(spans))
}

/// Split plain spans on `delimiter`, styling every other piece as `kind`.
///
/// Pieces alternate outside/inside starting outside. Empty pieces are
/// dropped.
///
/// # Errors
///
/// Returns [`HtmlError::UnbalancedDelimiter`] if a plain span contains an
/// odd number of delimiters.
pub fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &'static str,
    kind: &SpanKind,
) -> Result<Vec<TextSpan>, HtmlError> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }
        if span.content.matches(delimiter).count() % 2 != 0 {
            return Err(HtmlError::UnbalancedDelimiter {
                delimiter,
                text: span.content,
            });
        }
        for (i, piece) in span.content.split(delimiter).enumerate() {
            if piece.is_empty() {
                continue;
            }
            let piece_kind = if i % 2 == 0 {
                SpanKind::Plain
            } else {
                kind.clone()
            };
            out.push(TextSpan::new(piece, piece_kind));
        }
    }
    Ok(out)
}

/// Find `![alt](url)` occurrences, returning `(alt, url)` pairs.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    IMAGE_RE
        .captures_iter(text)
        .map(|caps| (caps[1].to_owned(), caps[2].to_owned()))
        .collect()
}

/// Find `[text](url)` occurrences not preceded by `!`, returning
/// `(text, url)` pairs.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    let mut links = Vec::new();
    let mut pos = 0;
    while let Some(caps) = LINK_RE.captures_at(text, pos) {
        let Some(whole) = caps.get(0) else {
            break;
        };
        if text[..whole.start()].ends_with('!') {
            pos = whole.start() + 1;
            continue;
        }
        links.push((caps[1].to_owned(), caps[2].to_owned()));
        pos = whole.end();
    }
    links
}

/// Extract images from plain spans.
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_markup(spans, extract_images, |alt, url| {
        (format!("![{alt}]({url})"), TextSpan::image(alt, url))
    })
}

/// Extract links from plain spans.
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_markup(spans, extract_links, |text, url| {
        (format!("[{text}]({url})"), TextSpan::link(text, url))
    })
}

/// Shared image/link extraction.
///
/// Each match splits the unconsumed text on the first literal occurrence of
/// its markup. Leading text that is only whitespace is dropped, while the
/// final remainder is kept whenever it is non-empty.
fn split_markup(
    spans: Vec<TextSpan>,
    extract: fn(&str) -> Vec<(String, String)>,
    build: impl Fn(String, String) -> (String, TextSpan),
) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }
        let mut rest = span.content.as_str();
        for (text, url) in extract(rest) {
            let (markup, styled) = build(text, url);
            let Some((before, after)) = rest.split_once(markup.as_str()) else {
                break;
            };
            if !before.trim().is_empty() {
                out.push(TextSpan::plain(before));
            }
            out.push(styled);
            rest = after;
        }
        if !rest.is_empty() {
            out.push(TextSpan::plain(rest));
        }
    }
    out
}
