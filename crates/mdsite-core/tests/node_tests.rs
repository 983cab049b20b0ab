//! Integration tests for HTML node construction and rendering

use mdsite_core::{span_to_node, ConvertError, HtmlNode, LeafNode, ParentNode, TextSpan};

// ============================================================================
// Leaf Rendering Tests
// ============================================================================

#[test]
fn test_leaf_raw_text() {
    let node = LeafNode::new(None, "just text");
    assert_eq!(node.render().unwrap(), "just text");
}

#[test]
fn test_leaf_with_tag() {
    let node = LeafNode::new(Some("p"), "Hello, world!");
    assert_eq!(node.render().unwrap(), "<p>Hello, world!</p>");
}

#[test]
fn test_leaf_empty_value() {
    // An empty value is valid and renders an empty element body.
    let node = LeafNode::new(Some("span"), "");
    assert_eq!(node.render().unwrap(), "<span></span>");
}

#[test]
fn test_leaf_with_attrs() {
    let node = LeafNode::with_attrs(
        "a",
        "Click here",
        vec![("href".to_string(), "https://example.com".to_string())],
    );
    assert_eq!(
        node.render().unwrap(),
        "<a href=\"https://example.com\">Click here</a>"
    );
}

#[test]
fn test_leaf_void_tag() {
    let node = LeafNode::with_attrs(
        "img",
        "",
        vec![
            ("src".to_string(), "/img.png".to_string()),
            ("alt".to_string(), "A picture".to_string()),
        ],
    );
    // Void elements render without a body or closing tag.
    assert_eq!(node.render().unwrap(), "<img src=\"/img.png\" alt=\"A picture\">");
}

#[test]
fn test_leaf_void_tag_br() {
    let node = LeafNode::new(Some("br"), "");
    assert_eq!(node.render().unwrap(), "<br>");
}

#[test]
fn test_leaf_missing_value() {
    let node = LeafNode {
        tag: Some("p".to_string()),
        value: None,
        attrs: None,
    };
    assert_eq!(node.render(), Err(ConvertError::MissingValue));
}

// ============================================================================
// Attribute Formatting Tests
// ============================================================================

#[test]
fn test_attrs_insertion_order() {
    let node = LeafNode::with_attrs(
        "a",
        "x",
        vec![
            ("href".to_string(), "https://example.com".to_string()),
            ("target".to_string(), "_blank".to_string()),
        ],
    );
    assert_eq!(
        node.attrs_to_string(),
        " href=\"https://example.com\" target=\"_blank\""
    );
}

#[test]
fn test_attrs_none() {
    let node = LeafNode::new(Some("p"), "x");
    assert_eq!(node.attrs_to_string(), "");
}

#[test]
fn test_attrs_empty_list() {
    let node = LeafNode::with_attrs("p", "x", vec![]);
    assert_eq!(node.attrs_to_string(), "");
}

#[test]
fn test_attrs_on_parent() {
    let child = HtmlNode::Leaf(LeafNode::new(None, "body"));
    let node = ParentNode::with_attrs(
        "div",
        vec![child],
        vec![("class".to_string(), "content".to_string())],
    );
    assert_eq!(node.render().unwrap(), "<div class=\"content\">body</div>");
}

// ============================================================================
// Parent Rendering Tests
// ============================================================================

#[test]
fn test_parent_with_children() {
    let children = vec![
        HtmlNode::Leaf(LeafNode::new(Some("b"), "Bold text")),
        HtmlNode::Leaf(LeafNode::new(None, "Normal text")),
        HtmlNode::Leaf(LeafNode::new(Some("i"), "italic text")),
        HtmlNode::Leaf(LeafNode::new(None, "Normal text")),
    ];
    let node = ParentNode::new("p", children);
    assert_eq!(
        node.render().unwrap(),
        "<p><b>Bold text</b>Normal text<i>italic text</i>Normal text</p>"
    );
}

#[test]
fn test_parent_nested() {
    let grandchild = HtmlNode::Leaf(LeafNode::new(Some("b"), "grandchild"));
    let child = HtmlNode::Parent(ParentNode::new("span", vec![grandchild]));
    let node = ParentNode::new("div", vec![child]);
    assert_eq!(
        node.render().unwrap(),
        "<div><span><b>grandchild</b></span></div>"
    );
}

#[test]
fn test_parent_empty_children() {
    // An empty children vec is valid and renders an empty element.
    let node = ParentNode::new("div", vec![]);
    assert_eq!(node.render().unwrap(), "<div></div>");
}

#[test]
fn test_parent_missing_tag() {
    let node = ParentNode {
        tag: None,
        children: Some(vec![]),
        attrs: None,
    };
    assert_eq!(node.render(), Err(ConvertError::MissingTag));
}

#[test]
fn test_parent_missing_children() {
    let node = ParentNode {
        tag: Some("div".to_string()),
        children: None,
        attrs: None,
    };
    assert_eq!(node.render(), Err(ConvertError::MissingChildren));
}

#[test]
fn test_parent_child_error_propagates() {
    let bad_child = HtmlNode::Leaf(LeafNode {
        tag: Some("p".to_string()),
        value: None,
        attrs: None,
    });
    let node = ParentNode::new("div", vec![bad_child]);
    assert_eq!(node.render(), Err(ConvertError::MissingValue));
}

// ============================================================================
// Span-to-Node Mapping Tests
// ============================================================================

#[test]
fn test_span_plain() {
    let node = span_to_node(&TextSpan::Plain("This is a text node"));
    assert_eq!(node.render().unwrap(), "This is a text node");
}

#[test]
fn test_span_bold() {
    let node = span_to_node(&TextSpan::Bold("Bold text"));
    assert_eq!(node.render().unwrap(), "<b>Bold text</b>");
}

#[test]
fn test_span_italic() {
    let node = span_to_node(&TextSpan::Italic("Italic text"));
    assert_eq!(node.render().unwrap(), "<i>Italic text</i>");
}

#[test]
fn test_span_code() {
    let node = span_to_node(&TextSpan::Code("code snippet"));
    assert_eq!(node.render().unwrap(), "<code>code snippet</code>");
}

#[test]
fn test_span_link() {
    let node = span_to_node(&TextSpan::Link {
        text: "Click here",
        url: Some("https://example.com"),
    });
    assert_eq!(
        node.render().unwrap(),
        "<a href=\"https://example.com\">Click here</a>"
    );
}

#[test]
fn test_span_link_no_url() {
    let node = span_to_node(&TextSpan::Link {
        text: "dangling",
        url: None,
    });
    assert_eq!(node.render().unwrap(), "<a href=\"\">dangling</a>");
}

#[test]
fn test_span_image() {
    let node = span_to_node(&TextSpan::Image {
        alt: "Alt text",
        url: Some("https://example.com/img.png"),
    });
    assert_eq!(
        node.render().unwrap(),
        "<img src=\"https://example.com/img.png\" alt=\"Alt text\">"
    );
}

// ============================================================================
// Span Equality Tests
// ============================================================================

#[test]
fn test_span_equality() {
    assert_eq!(TextSpan::Bold("same"), TextSpan::Bold("same"));
    assert_ne!(TextSpan::Bold("same"), TextSpan::Italic("same"));
    assert_ne!(TextSpan::Plain("a"), TextSpan::Plain("b"));
}

#[test]
fn test_span_equality_url() {
    let a = TextSpan::Link {
        text: "Link",
        url: Some("https://a.com"),
    };
    let b = TextSpan::Link {
        text: "Link",
        url: Some("https://b.com"),
    };
    assert_ne!(a, b);

    // An absent url is distinct from an empty one.
    let absent = TextSpan::Link {
        text: "Link",
        url: None,
    };
    let empty = TextSpan::Link {
        text: "Link",
        url: Some(""),
    };
    assert_ne!(absent, empty);
}
