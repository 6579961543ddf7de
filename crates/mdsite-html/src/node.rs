//! HTML node tree and serialization.
//!
//! A document is converted into a small tree of [`Node`]s before being
//! serialized. Leaves carry literal text; parents carry only children.
//! Serialization does no escaping and no whitespace normalization.

use std::fmt::Write;

use crate::HtmlError;

/// Ordered HTML attributes.
///
/// Attributes render in insertion order as ` key="value"` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    /// Create an empty attribute list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an attribute, returning the extended list.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.push((name.into(), value.into()));
        self
    }

    /// Whether no attributes are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A node of the HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal text, optionally wrapped in an element.
    Leaf {
        tag: Option<String>,
        value: String,
        attrs: Attributes,
    },
    /// Element whose content is the rendering of its children.
    Parent {
        tag: String,
        children: Vec<Node>,
        attrs: Attributes,
    },
}

impl Node {
    /// Untagged leaf, rendered as its raw value.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Leaf {
            tag: None,
            value: value.into(),
            attrs: Attributes::new(),
        }
    }

    /// Tagged leaf without attributes.
    #[must_use]
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::leaf_with_attrs(tag, value, Attributes::new())
    }

    /// Tagged leaf with attributes.
    #[must_use]
    pub fn leaf_with_attrs(
        tag: impl Into<String>,
        value: impl Into<String>,
        attrs: Attributes,
    ) -> Self {
        Self::Leaf {
            tag: Some(tag.into()),
            value: value.into(),
            attrs,
        }
    }

    /// Parent element without attributes.
    #[must_use]
    pub fn parent(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Self::Parent {
            tag: tag.into(),
            children,
            attrs: Attributes::new(),
        }
    }

    /// Element tag, if any.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Leaf { tag, .. } => tag.as_deref(),
            Self::Parent { tag, .. } => Some(tag),
        }
    }

    /// Children of a parent; leaves have none.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Leaf { .. } => &[],
            Self::Parent { children, .. } => children,
        }
    }

    /// Serialize this node and its descendants to an HTML string.
    ///
    /// # Errors
    ///
    /// Returns [`HtmlError::MissingTag`] or [`HtmlError::MissingChildren`]
    /// if any parent in the tree is malformed.
    pub fn render(&self) -> Result<String, HtmlError> {
        match self {
            Self::Leaf { tag, value, attrs } => render_leaf(tag.as_deref(), Some(value), attrs),
            Self::Parent {
                tag,
                children,
                attrs,
            } => render_parent(tag, children, attrs),
        }
    }
}

/// Render a leaf element.
///
/// Without a tag the value is returned unchanged.
///
/// # Errors
///
/// Returns [`HtmlError::MissingValue`] if `value` is `None`. An empty value
/// is valid.
pub fn render_leaf(
    tag: Option<&str>,
    value: Option<&str>,
    attrs: &Attributes,
) -> Result<String, HtmlError> {
    let value = value.ok_or(HtmlError::MissingValue)?;
    match tag {
        None => Ok(value.to_owned()),
        Some(tag) => Ok(format!("<{tag}{}>{value}</{tag}>", render_attrs(attrs))),
    }
}

/// Render a parent element by concatenating its children's renderings.
///
/// # Errors
///
/// Returns [`HtmlError::MissingTag`] for an empty tag and
/// [`HtmlError::MissingChildren`] for an empty child list. Errors from
/// children propagate unchanged.
pub fn render_parent(
    tag: &str,
    children: &[Node],
    attrs: &Attributes,
) -> Result<String, HtmlError> {
    if tag.is_empty() {
        return Err(HtmlError::MissingTag);
    }
    if children.is_empty() {
        return Err(HtmlError::MissingChildren {
            tag: tag.to_owned(),
        });
    }

    let mut out = format!("<{tag}{}>", render_attrs(attrs));
    for child in children {
        out.push_str(&child.render()?);
    }
    write!(out, "</{tag}>").unwrap();
    Ok(out)
}

/// Render attributes as ` key="value"` pairs in insertion order.
pub fn render_attrs(attrs: &Attributes) -> String {
    if attrs.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    for (name, value) in attrs.iter() {
        write!(out, r#" {name}="{value}""#).unwrap();
    }
    out
}
