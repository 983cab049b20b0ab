//! # mdsite Core
//!
//! A strict, single-pass Markdown-to-HTML converter for static site
//! generation.
//!
//! The converter runs in two stages: an inline tokenizer turns raw text into
//! typed spans (plain, bold, italic, code, link, image), and a block parser
//! splits the document on blank lines, classifies each block, and builds a
//! generic HTML node tree that renders to a string.
//!
//! ## Quick Start
//!
//! ```rust
//! use mdsite_core::markdown_to_html;
//!
//! let html = markdown_to_html("# Hello\n\nThis is a **paragraph**.").unwrap();
//! assert_eq!(html, "<div><h1>Hello</h1><p>This is a <b>paragraph</b>.</p></div>");
//! ```
//!
//! ## Errors
//!
//! Conversion is fail-fast: an unclosed styling delimiter anywhere in the
//! document aborts the whole conversion with
//! [`ConvertError::UnclosedDelimiter`]. There is no partial-document
//! recovery; the caller decides how to handle a failed document.
//!
//! ```rust
//! use mdsite_core::{markdown_to_html, ConvertError};
//!
//! let err = markdown_to_html("some **unclosed bold").unwrap_err();
//! assert!(matches!(err, ConvertError::UnclosedDelimiter(_)));
//! ```

pub mod ast;
pub mod error;
pub mod html;
pub mod inline;
pub mod parser;

pub use ast::{BlockKind, TextSpan};
pub use error::ConvertError;
pub use html::{Attrs, HtmlNode, LeafNode, ParentNode};
pub use inline::tokenize;
pub use parser::{
    build_block, build_document, classify, extract_title, markdown_to_html, segment, span_to_node,
};
