use core::fmt;

/// A name/value pair taken from the interior of a tag token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name, as written.
    pub name: String,
    /// Attribute value with the surrounding quotes removed.
    pub value: String,
}

impl Attribute {
    /// Create a new attribute with the given name and value.
    #[must_use]
    pub const fn new(name: String, value: String) -> Self {
        Self { name, value }
    }
}

/// The tokenizer emits tokens of these types to the tree builder.
///
/// Concatenating the source text of every token reproduces the input
/// exactly: spans never overlap and leave no gaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A span from `<` up to and including the next `>`.
    Tag {
        /// The raw tag text, delimiters included.
        raw: String,
    },

    /// A non-empty run of characters containing no `<`, or the tail of the
    /// input after a `<` that is never closed.
    Text {
        /// The literal text.
        data: String,
    },

    /// End-of-file token signals the end of input. It covers no text.
    EndOfFile,
}

impl Token {
    /// Create a tag token from its raw text.
    #[must_use]
    pub fn new_tag(raw: &str) -> Self {
        Self::Tag {
            raw: raw.to_string(),
        }
    }

    /// Create a text token from its literal text.
    #[must_use]
    pub fn new_text(data: &str) -> Self {
        Self::Text {
            data: data.to_string(),
        }
    }

    /// Returns true if this is an end-of-file token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::EndOfFile)
    }

    /// The slice of input this token was made from.
    #[must_use]
    pub fn source(&self) -> &str {
        match self {
            Self::Tag { raw } => raw,
            Self::Text { data } => data,
            Self::EndOfFile => "",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag { raw } => write!(f, "Tag({raw})"),
            Self::Text { data } => write!(f, "Text({data:?})"),
            Self::EndOfFile => write!(f, "EOF"),
        }
    }
}
