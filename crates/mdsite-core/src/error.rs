use std::fmt;

/// Errors raised while converting a document.
///
/// All conversion errors are synchronous and fail-fast: a malformed block is
/// never skipped, it aborts the whole document. Callers decide whether to
/// halt a batch or report and continue per document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// A styling delimiter occurred an odd number of times in a text span.
    UnclosedDelimiter(String),
    /// A leaf node was rendered without a value.
    MissingValue,
    /// A parent node was rendered without a tag.
    MissingTag,
    /// A parent node was rendered without a children collection.
    MissingChildren,
    /// Title extraction found no `# ` line in the document.
    NoHeadingFound,
}

impl ConvertError {
    /// Create an error for an unclosed styling delimiter.
    pub fn unclosed_delimiter(delimiter: &str) -> Self {
        Self::UnclosedDelimiter(delimiter.to_string())
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::UnclosedDelimiter(delimiter) => {
                write!(f, "invalid markdown: unclosed delimiter {:?}", delimiter)
            }
            ConvertError::MissingValue => write!(f, "leaf node must have a value"),
            ConvertError::MissingTag => write!(f, "parent node must have a tag"),
            ConvertError::MissingChildren => write!(f, "parent node must have children"),
            ConvertError::NoHeadingFound => write!(f, "no h1 heading found in document"),
        }
    }
}

impl std::error::Error for ConvertError {}
