//! Inline tokenizer: raw text to typed spans.
//!
//! Runs an ordered pipeline over a growing span list: image extraction, then
//! link extraction, then delimiter splitting for bold, italic, and code.
//! Spans borrow directly from the input text; `memchr` drives the scans.
//!
//! Styled spans never nest: once text has been classified, later passes leave
//! it untouched.

use memchr::{memchr, memchr2};

use crate::ast::TextSpan;
use crate::error::ConvertError;

/// Convert raw text into an ordered sequence of typed spans.
///
/// Empty input yields a single empty `Plain` span, never an empty sequence.
/// An odd number of occurrences of any styling delimiter fails with
/// [`ConvertError::UnclosedDelimiter`].
pub fn tokenize(text: &str) -> Result<Vec<TextSpan<'_>>, ConvertError> {
    let mut spans = vec![TextSpan::Plain(text)];
    spans = split_images(spans);
    spans = split_links(spans);
    spans = split_delimiter(spans, "**", TextSpan::Bold)?;
    spans = split_delimiter(spans, "_", TextSpan::Italic)?;
    spans = split_delimiter(spans, "`", TextSpan::Code)?;
    Ok(spans)
}

/// Split `Plain` spans on a literal styling delimiter.
///
/// A span with no occurrences passes through unchanged. Otherwise the parts
/// alternate plain/styled, starting and ending with plain, so a delimiter at
/// the very start or end of the text produces an empty `Plain` boundary span
/// which is preserved. An even part count means an odd number of delimiter
/// occurrences: an unclosed delimiter.
pub fn split_delimiter<'a>(
    spans: Vec<TextSpan<'a>>,
    delimiter: &str,
    style: fn(&'a str) -> TextSpan<'a>,
) -> Result<Vec<TextSpan<'a>>, ConvertError> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        let text = match span {
            TextSpan::Plain(text) => text,
            other => {
                out.push(other);
                continue;
            }
        };
        let parts: Vec<&str> = text.split(delimiter).collect();
        if parts.len() == 1 {
            out.push(span);
            continue;
        }
        if parts.len() % 2 == 0 {
            return Err(ConvertError::unclosed_delimiter(delimiter));
        }
        for (i, part) in parts.into_iter().enumerate() {
            if i % 2 == 0 {
                out.push(TextSpan::Plain(part));
            } else {
                out.push(style(part));
            }
        }
    }
    Ok(out)
}

/// Replace `![alt](url)` regions in `Plain` spans with `Image` spans.
///
/// Text between matches becomes new `Plain` spans; empty stretches before,
/// between, or after matches are not emitted. A span with no matches passes
/// through as the original span. Non-`Plain` spans are untouched.
pub fn split_images(spans: Vec<TextSpan<'_>>) -> Vec<TextSpan<'_>> {
    split_inline(spans, find_image, |m| TextSpan::Image {
        alt: m.label,
        url: Some(m.url),
    })
}

/// Replace `[text](url)` regions in `Plain` spans with `Link` spans.
///
/// A `[` immediately preceded by `!` never starts a link, so image syntax
/// left behind by an earlier pass is not re-captured. Same emission rules as
/// [`split_images`].
pub fn split_links(spans: Vec<TextSpan<'_>>) -> Vec<TextSpan<'_>> {
    split_inline(spans, find_link, |m| TextSpan::Link {
        text: m.label,
        url: Some(m.url),
    })
}

/// A single `[label](url)` region within a text span.
struct InlineMatch<'a> {
    /// Byte offset of the first marker character (`!` for images).
    start: usize,
    /// Byte offset one past the closing `)`.
    end: usize,
    label: &'a str,
    url: &'a str,
}

/// Shared splitting loop for image and link extraction.
fn split_inline<'a>(
    spans: Vec<TextSpan<'a>>,
    find: fn(&'a str, usize) -> Option<InlineMatch<'a>>,
    make: fn(&InlineMatch<'a>) -> TextSpan<'a>,
) -> Vec<TextSpan<'a>> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        let text = match span {
            TextSpan::Plain(text) => text,
            other => {
                out.push(other);
                continue;
            }
        };
        let mut last_end = 0;
        while let Some(m) = find(text, last_end) {
            if m.start > last_end {
                out.push(TextSpan::Plain(&text[last_end..m.start]));
            }
            out.push(make(&m));
            last_end = m.end;
        }
        if last_end < text.len() {
            out.push(TextSpan::Plain(&text[last_end..]));
        } else if last_end == 0 {
            // Zero matches: keep the original span, not a rebuilt copy.
            out.push(span);
        }
    }
    out
}

/// Find the next `![alt](url)` at or after `from`.
fn find_image(text: &str, from: usize) -> Option<InlineMatch<'_>> {
    let bytes = text.as_bytes();
    let mut pos = from;
    while pos < bytes.len() {
        let bang = pos + memchr(b'!', &bytes[pos..])?;
        if let Some(mut m) = match_bracket_pair(text, bang + 1) {
            m.start = bang;
            return Some(m);
        }
        pos = bang + 1;
    }
    None
}

/// Find the next `[text](url)` at or after `from`.
///
/// A `[` immediately preceded by `!` is skipped (negative lookbehind).
fn find_link(text: &str, from: usize) -> Option<InlineMatch<'_>> {
    let bytes = text.as_bytes();
    let mut pos = from;
    while pos < bytes.len() {
        let open = pos + memchr(b'[', &bytes[pos..])?;
        if open > 0 && bytes[open - 1] == b'!' {
            pos = open + 1;
            continue;
        }
        if let Some(m) = match_bracket_pair(text, open) {
            return Some(m);
        }
        pos = open + 1;
    }
    None
}

/// Match `[label](url)` with the opening bracket at `open`.
///
/// The label excludes square brackets and the url excludes parentheses, so
/// the first `]` after the opening bracket must close the label and the
/// first `)` after the opening paren must close the url.
fn match_bracket_pair(text: &str, open: usize) -> Option<InlineMatch<'_>> {
    let bytes = text.as_bytes();
    if bytes.get(open) != Some(&b'[') {
        return None;
    }

    let label_start = open + 1;
    let close = match memchr2(b'[', b']', &bytes[label_start..]) {
        Some(off) if bytes[label_start + off] == b']' => label_start + off,
        _ => return None,
    };

    if bytes.get(close + 1) != Some(&b'(') {
        return None;
    }

    let url_start = close + 2;
    let url_close = match memchr2(b'(', b')', &bytes[url_start..]) {
        Some(off) if bytes[url_start + off] == b')' => url_start + off,
        _ => return None,
    };

    Some(InlineMatch {
        start: open,
        end: url_close + 1,
        label: &text[label_start..close],
        url: &text[url_start..url_close],
    })
}
