//! Block-level parsing: segmentation, classification, and tree building.
//!
//! A document is split into blocks on blank-line boundaries, each block is
//! classified by its raw lines, and each classified block becomes one HTML
//! node. The whole document renders into a single root `<div>`.

use crate::ast::{BlockKind, TextSpan};
use crate::error::ConvertError;
use crate::html::{HtmlNode, LeafNode, ParentNode};
use crate::inline::tokenize;

/// Split a document into trimmed, non-empty blocks.
///
/// Blocks are delimited by blank lines; runs of blank lines collapse into a
/// single boundary because the empty pieces between them trim away.
pub fn segment(document: &str) -> Vec<&str> {
    document
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a block by its raw lines. First match wins.
///
/// The empty block classifies as a paragraph, as does anything that fails a
/// stricter pattern (out-of-range heading level, broken list numbering,
/// unterminated fence).
pub fn classify(block: &str) -> BlockKind {
    if block.is_empty() {
        return BlockKind::Paragraph;
    }

    if let Some(level) = heading_level(block) {
        return BlockKind::Heading(level);
    }

    if block.starts_with("```\n") && block.ends_with("```") {
        return BlockKind::Code;
    }

    let lines: Vec<&str> = block.split('\n').collect();

    if lines.iter().all(|line| line.starts_with('>')) {
        return BlockKind::Quote;
    }

    if lines.iter().all(|line| line.starts_with("- ")) {
        return BlockKind::UnorderedList;
    }

    if is_ordered_list(&lines) {
        return BlockKind::OrderedList;
    }

    BlockKind::Paragraph
}

/// Heading marker: one to six `#` characters followed by a space.
fn heading_level(block: &str) -> Option<u8> {
    let bytes = block.as_bytes();
    let hashes = bytes.iter().take_while(|&&b| b == b'#').count();
    if (1..=6).contains(&hashes) && bytes.get(hashes) == Some(&b' ') {
        Some(hashes as u8)
    } else {
        None
    }
}

/// Ordered lists must number sequentially from 1 with no gaps.
fn is_ordered_list(lines: &[&str]) -> bool {
    lines
        .iter()
        .enumerate()
        .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)))
}

/// Convert one block into a single HTML node according to its classification.
pub fn build_block(block: &str) -> Result<HtmlNode, ConvertError> {
    match classify(block) {
        BlockKind::Paragraph => {
            let text = block.replace('\n', " ");
            Ok(parent("p", text_to_children(&text)?))
        }
        BlockKind::Heading(level) => {
            let text = &block[level as usize + 1..];
            Ok(parent(&format!("h{}", level), text_to_children(text)?))
        }
        BlockKind::Code => {
            // Exact bytes between the opening fence line and the closing
            // fence; no inline parsing inside code.
            let content = &block[4..block.len() - 3];
            let code = HtmlNode::Leaf(LeafNode::new(Some("code"), content));
            Ok(parent("pre", vec![code]))
        }
        BlockKind::Quote => {
            let text = block
                .split('\n')
                .map(|line| line.strip_prefix('>').unwrap_or(line).trim())
                .collect::<Vec<_>>()
                .join(" ");
            Ok(parent("blockquote", text_to_children(&text)?))
        }
        BlockKind::UnorderedList => {
            let mut items = Vec::new();
            for line in block.split('\n') {
                items.push(parent("li", text_to_children(&line[2..])?));
            }
            Ok(parent("ul", items))
        }
        BlockKind::OrderedList => {
            let mut items = Vec::new();
            for line in block.split('\n') {
                let text = line.splitn(2, ". ").nth(1).unwrap_or("");
                items.push(parent("li", text_to_children(text)?));
            }
            Ok(parent("ol", items))
        }
    }
}

/// Convert a full Markdown document into a single root `<div>` node with one
/// child per block, in document order.
pub fn build_document(markdown: &str) -> Result<HtmlNode, ConvertError> {
    let mut children = Vec::new();
    for block in segment(markdown) {
        children.push(build_block(block)?);
    }
    Ok(parent("div", children))
}

/// Convert a Markdown document straight to an HTML string.
pub fn markdown_to_html(markdown: &str) -> Result<String, ConvertError> {
    build_document(markdown)?.render()
}

/// Extract the document title: the trimmed text after the first line that
/// starts with `# `.
pub fn extract_title(markdown: &str) -> Result<&str, ConvertError> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(str::trim)
        .ok_or(ConvertError::NoHeadingFound)
}

/// Map one text span to its HTML leaf node.
pub fn span_to_node(span: &TextSpan<'_>) -> HtmlNode {
    let leaf = match *span {
        TextSpan::Plain(text) => LeafNode::new(None, text),
        TextSpan::Bold(text) => LeafNode::new(Some("b"), text),
        TextSpan::Italic(text) => LeafNode::new(Some("i"), text),
        TextSpan::Code(text) => LeafNode::new(Some("code"), text),
        TextSpan::Link { text, url } => LeafNode::with_attrs(
            "a",
            text,
            vec![("href".to_string(), url.unwrap_or("").to_string())],
        ),
        TextSpan::Image { alt, url } => LeafNode::with_attrs(
            "img",
            "",
            vec![
                ("src".to_string(), url.unwrap_or("").to_string()),
                ("alt".to_string(), alt.to_string()),
            ],
        ),
    };
    HtmlNode::Leaf(leaf)
}

/// Tokenize inline text and map each span to a child node.
fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, ConvertError> {
    Ok(tokenize(text)?.iter().map(span_to_node).collect())
}

fn parent(tag: &str, children: Vec<HtmlNode>) -> HtmlNode {
    HtmlNode::Parent(ParentNode::new(tag, children))
}
