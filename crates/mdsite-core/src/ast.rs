//! Span and block types produced by the Markdown parser.
//!
//! These are the closed vocabularies of the converter:
//!
//! - **Zero-copy**: spans borrow directly from the tokenized text
//! - **Structural equality**: two spans are equal when their variant, text,
//!   and url all match
//! - **Closed**: there is no open hierarchy; every consumer matches
//!   exhaustively

/// One classified unit of inline text.
///
/// Spans are immutable once created. The tokenizer guarantees that after
/// tokenization completes, no `Plain` span still contains unprocessed
/// delimiter syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSpan<'a> {
    /// Unstyled text, rendered without a wrapping tag.
    Plain(&'a str),
    /// Bold text (`**bold**`).
    Bold(&'a str),
    /// Italic text (`_italic_`).
    Italic(&'a str),
    /// Inline code (`` `code` ``).
    Code(&'a str),
    /// Hyperlink with display text and destination.
    ///
    /// An absent url is distinct from an empty one under equality.
    Link { text: &'a str, url: Option<&'a str> },
    /// Image with alt text and source.
    Image { alt: &'a str, url: Option<&'a str> },
}

impl<'a> TextSpan<'a> {
    /// The display text of this span (alt text for images).
    pub fn text(&self) -> &'a str {
        match *self {
            TextSpan::Plain(t) | TextSpan::Bold(t) | TextSpan::Italic(t) | TextSpan::Code(t) => t,
            TextSpan::Link { text, .. } => text,
            TextSpan::Image { alt, .. } => alt,
        }
    }

    /// The destination url, if this span carries one.
    pub fn url(&self) -> Option<&'a str> {
        match *self {
            TextSpan::Link { url, .. } | TextSpan::Image { url, .. } => url,
            _ => None,
        }
    }
}

/// The structural type of one document block.
///
/// Classification is pure and depends only on the block's raw lines; there
/// is no cross-block state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Section heading (levels 1-6).
    Heading(u8),
    /// Fenced code block.
    Code,
    /// Block quotation (every line starts with `>`).
    Quote,
    /// Bulleted list (every line starts with `- `).
    UnorderedList,
    /// Numbered list with strict sequential numbering from 1.
    OrderedList,
    /// Plain paragraph; also the fallback for anything else.
    Paragraph,
}
