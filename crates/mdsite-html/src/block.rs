//! Block segmentation and classification.
//!
//! A document is split into blocks on blank lines. Each block is classified
//! into exactly one [`BlockKind`] and then stripped of its structural markers
//! so only inline content remains.

use std::sync::LazyLock;

use regex::Regex;

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,6}) ").unwrap());
static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)^```.*?```").unwrap());
static ORDERED_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)\. ").unwrap());

const CODE_FENCE: &str = "```";

/// Structural kind of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `#` to `######` heading; carries the level (1-6).
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
    Paragraph,
}

/// Split a document into trimmed, non-empty blocks.
///
/// Blocks are separated by blank lines. Longer runs of newlines leave only
/// whitespace between separators, which is dropped.
pub fn segment(markdown: &str) -> Vec<&str> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a block.
///
/// Rules are checked in order and the first match wins: heading, code fence,
/// quote, unordered list, ordered list, paragraph.
#[allow(clippy::cast_possible_truncation)]
pub fn classify(block: &str) -> BlockKind {
    if let Some(caps) = HEADING_RE.captures(block) {
        return BlockKind::Heading(caps[1].len() as u8);
    }
    if CODE_RE.is_match(block) {
        return BlockKind::Code;
    }
    if block.starts_with('>') {
        return BlockKind::Quote;
    }
    if block.starts_with("- ") {
        return BlockKind::UnorderedList;
    }
    if is_ordered_list(block) {
        return BlockKind::OrderedList;
    }
    BlockKind::Paragraph
}

/// Every line is `<n>. ` and the numbers count up by exactly one.
fn is_ordered_list(block: &str) -> bool {
    let numbers: Option<Vec<u64>> = block
        .lines()
        .map(|line| {
            ORDERED_ITEM_RE
                .captures(line)
                .and_then(|caps| caps[1].parse().ok())
        })
        .collect();

    match numbers {
        Some(numbers) if !numbers.is_empty() => numbers
            .windows(2)
            .all(|pair| pair[0].checked_add(1) == Some(pair[1])),
        _ => false,
    }
}

/// Remove the structural markers of `kind` from a block.
///
/// Quote and list blocks keep one line per non-empty source line. Code
/// blocks lose their fence lines. Paragraphs are unwrapped onto one line.
pub fn strip_markers(block: &str, kind: BlockKind) -> String {
    match kind {
        BlockKind::Heading(_) => strip_heading(block).to_owned(),
        BlockKind::Paragraph => block.replace('\n', " "),
        BlockKind::Quote => map_lines(block, |line| {
            let line = line.strip_prefix('>').unwrap_or(line);
            line.strip_prefix(' ').unwrap_or(line)
        }),
        BlockKind::UnorderedList => {
            map_lines(block, |line| line.strip_prefix("- ").unwrap_or(line))
        }
        BlockKind::OrderedList => map_lines(block, |line| match ORDERED_ITEM_RE.find(line) {
            Some(marker) => &line[marker.end()..],
            None => line,
        }),
        BlockKind::Code => {
            let mut lines = non_empty_lines(block);
            if lines.len() > 2 {
                if lines.first() == Some(&CODE_FENCE) {
                    lines.remove(0);
                }
                if lines.last() == Some(&CODE_FENCE) {
                    lines.pop();
                }
            }
            lines.join("\n")
        }
    }
}

/// Drop the leading `#` run and the single character after it.
fn strip_heading(block: &str) -> &str {
    let rest = block.trim_start_matches('#');
    let mut chars = rest.chars();
    chars.next();
    chars.as_str()
}

fn non_empty_lines(block: &str) -> Vec<&str> {
    block.split('\n').filter(|line| !line.is_empty()).collect()
}

fn map_lines<'a>(block: &'a str, strip: impl Fn(&'a str) -> &'a str) -> String {
    non_empty_lines(block)
        .into_iter()
        .map(strip)
        .collect::<Vec<_>>()
        .join("\n")
}
