use strum_macros::Display;
use thiserror::Error;

/// The two classes of structural problem the tree builder reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ParseErrorKind {
    /// A tag token from which no tag name could be extracted.
    MalformedTag,
    /// Open and close tags that do not pair up.
    UnbalancedTags,
}

/// A structural error found while building the tree.
///
/// These describe the input, not a bug: the tree built so far is always
/// returned alongside them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A tag token such as `<>` or `</ >` that has no name. The token is
    /// ignored.
    #[error("malformed tag {raw:?} at token {token_index}: no tag name")]
    MalformedTag {
        /// The raw tag text.
        raw: String,
        /// Index of the token in the token stream.
        token_index: usize,
    },

    /// An end tag that arrived when only the root was open. The token is
    /// ignored.
    #[error("unbalanced tags: end tag </{name}> at token {token_index} has no open element")]
    UnmatchedEndTag {
        /// Name written in the end tag.
        name: String,
        /// Index of the token in the token stream.
        token_index: usize,
    },

    /// Elements still open when the input ended.
    #[error(
        "unbalanced tags: {} element(s) still open at end of input: {}",
        .open.len(),
        .open.join(", ")
    )]
    UnclosedElements {
        /// Tag names of the open elements, outermost first.
        open: Vec<String>,
        /// Index of the end-of-file token.
        token_index: usize,
    },
}

impl ParseError {
    /// Which class of structural problem this is.
    #[must_use]
    pub const fn kind(&self) -> ParseErrorKind {
        match self {
            Self::MalformedTag { .. } => ParseErrorKind::MalformedTag,
            Self::UnmatchedEndTag { .. } | Self::UnclosedElements { .. } => {
                ParseErrorKind::UnbalancedTags
            }
        }
    }

    /// Index of the token that triggered the error.
    #[must_use]
    pub const fn token_index(&self) -> usize {
        match self {
            Self::MalformedTag { token_index, .. }
            | Self::UnmatchedEndTag { token_index, .. }
            | Self::UnclosedElements { token_index, .. } => *token_index,
        }
    }
}
