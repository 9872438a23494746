//! Markup tokenizer module.
//!
//! Splits raw text into tag and text tokens, and breaks tag tokens into a
//! kind, a name and their quoted attributes.

/// Quoted attribute extraction from a tag's interior.
pub mod attributes;
/// Character-class scanner producing the token stream.
pub mod scanner;
/// Start/end/self-closing classification of tag tokens.
pub mod tag;
/// Token types produced by the tokenizer.
pub mod token;

pub use attributes::parse_attributes;
pub use scanner::{MarkupTokenizer, TokenizerState};
pub use tag::{Tag, TagKind, classify_tag};
pub use token::{Attribute, Token};
