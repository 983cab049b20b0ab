//! Generic HTML tree nodes and string rendering.
//!
//! A node is either a [`LeafNode`] (tag plus text value, no children) or a
//! [`ParentNode`] (tag plus ordered children). Both carry an optional
//! attribute list rendered in insertion order. Rendering is a pure
//! tree-to-string transformation with no escaping: attribute values and text
//! are emitted exactly as stored.

use crate::error::ConvertError;

/// HTML tags that are self-closing: no children, no closing tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Attribute pairs in insertion order.
pub type Attrs = Vec<(String, String)>;

#[inline]
fn is_void(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

/// Render an attribute list as ` key="value"` pairs with a leading space,
/// or an empty string when there are no attributes.
fn attrs_to_string(attrs: Option<&[(String, String)]>) -> String {
    let attrs = match attrs {
        Some(attrs) if !attrs.is_empty() => attrs,
        _ => return String::new(),
    };
    let mut out = String::new();
    for (key, value) in attrs {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    out
}

/// An HTML tree node: exactly two shapes sharing the render contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Text-bearing node with no children.
    Leaf(LeafNode),
    /// Element containing an ordered sequence of child nodes.
    Parent(ParentNode),
}

impl HtmlNode {
    /// Render this node and its subtree to an HTML string.
    pub fn render(&self) -> Result<String, ConvertError> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.render(),
            HtmlNode::Parent(parent) => parent.render(),
        }
    }

    /// Render this node's attributes (see [`LeafNode::attrs_to_string`]).
    pub fn attrs_to_string(&self) -> String {
        match self {
            HtmlNode::Leaf(leaf) => leaf.attrs_to_string(),
            HtmlNode::Parent(parent) => parent.attrs_to_string(),
        }
    }
}

/// A leaf node: an optional tag and a text value.
///
/// The fields stay public and optional so that structurally invalid nodes are
/// representable; [`LeafNode::render`] enforces the invariants. A missing
/// value is an error, while `Some("")` is valid and renders an empty element
/// body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeafNode {
    /// Element tag; `None` means raw text passthrough.
    pub tag: Option<String>,
    /// Text content. Required at render time.
    pub value: Option<String>,
    /// Attribute pairs in insertion order.
    pub attrs: Option<Attrs>,
}

impl LeafNode {
    /// Create a leaf with no attributes.
    pub fn new(tag: Option<&str>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.map(str::to_string),
            value: Some(value.into()),
            attrs: None,
        }
    }

    /// Create a tagged leaf with attributes.
    pub fn with_attrs(tag: &str, value: impl Into<String>, attrs: Attrs) -> Self {
        Self {
            tag: Some(tag.to_string()),
            value: Some(value.into()),
            attrs: Some(attrs),
        }
    }

    /// Render this leaf to an HTML string.
    ///
    /// A tagless leaf renders its raw value. A void tag renders `<tag attrs>`
    /// alone; any other tag wraps the value in an open/close pair.
    pub fn render(&self) -> Result<String, ConvertError> {
        let value = self.value.as_deref().ok_or(ConvertError::MissingValue)?;
        let tag = match self.tag.as_deref() {
            Some(tag) => tag,
            None => return Ok(value.to_string()),
        };
        let attrs = self.attrs_to_string();
        if is_void(tag) {
            Ok(format!("<{}{}>", tag, attrs))
        } else {
            Ok(format!("<{}{}>{}</{}>", tag, attrs, value, tag))
        }
    }

    /// Render the attribute list, empty string when unset or empty.
    pub fn attrs_to_string(&self) -> String {
        attrs_to_string(self.attrs.as_deref())
    }
}

/// A parent node: a tag and an ordered sequence of children.
///
/// An empty children vec is valid and renders as an empty element; an unset
/// children collection is a render error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParentNode {
    /// Element tag. Required at render time.
    pub tag: Option<String>,
    /// Child nodes in document order. Required at render time.
    pub children: Option<Vec<HtmlNode>>,
    /// Attribute pairs in insertion order.
    pub attrs: Option<Attrs>,
}

impl ParentNode {
    /// Create a parent with no attributes.
    pub fn new(tag: &str, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: Some(tag.to_string()),
            children: Some(children),
            attrs: None,
        }
    }

    /// Create a parent with attributes.
    pub fn with_attrs(tag: &str, children: Vec<HtmlNode>, attrs: Attrs) -> Self {
        Self {
            tag: Some(tag.to_string()),
            children: Some(children),
            attrs: Some(attrs),
        }
    }

    /// Render this parent and its subtree to an HTML string.
    ///
    /// Children render in order; the first failing child aborts the render.
    pub fn render(&self) -> Result<String, ConvertError> {
        let tag = self.tag.as_deref().ok_or(ConvertError::MissingTag)?;
        let children = self
            .children
            .as_deref()
            .ok_or(ConvertError::MissingChildren)?;
        let mut inner = String::new();
        for child in children {
            inner.push_str(&child.render()?);
        }
        Ok(format!(
            "<{}{}>{}</{}>",
            tag,
            self.attrs_to_string(),
            inner,
            tag
        ))
    }

    /// Render the attribute list, empty string when unset or empty.
    pub fn attrs_to_string(&self) -> String {
        attrs_to_string(self.attrs.as_deref())
    }
}
