//! Loose markup tokenizer and tree builder for Twig.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tokenizer** - splits input into tag and text tokens with a
//!   two-state character scanner
//! - **Attribute parsing** - quoted `name="value"` / `name='value'` pairs
//! - **Tree builder** - an open-element stack that turns tokens into a
//!   [`DomTree`], reporting unbalanced and malformed tags
//! - **Tree dump** - an indented, human-readable rendering
//!
//! # Not Implemented
//!
//! Twig targets simple, HTML-like markup. It does not imply end tags, treat
//! void elements specially, decode character references, recognise
//! comments, CDATA or DOCTYPE, or check that an end tag's name matches the
//! element it closes. Text is accumulated per element, so the position of a
//! text run relative to sibling elements is not kept.
//!
//! # Example
//!
//! ```
//! let (tree, errors) = twig_markup::parse("<a><b>x</b><c/></a>");
//! assert!(errors.is_empty());
//!
//! let b = tree.first_by_tag_name("b").expect("one <b> in the input");
//! assert_eq!(tree.content(b), Some("x"));
//! let siblings = tree.siblings(b).expect("<b> has a parent");
//! assert_eq!(siblings.prev, None);
//! assert_eq!(siblings.next, tree.first_by_tag_name("c"));
//! ```

/// Tree construction and structural errors.
pub mod parser;
/// Human-readable tree dump.
pub mod render;
/// Markup tokenizer for converting input into tokens.
pub mod tokenizer;

pub use parser::{ParseError, ParseErrorKind, TreeBuilder};
pub use render::{TreeDump, print_tree, render_tree};
pub use tokenizer::{
    Attribute, MarkupTokenizer, Tag, TagKind, Token, TokenizerState, classify_tag, parse_attributes,
};

pub use twig_common::warning::WarningSet;
use twig_dom::DomTree;

/// Tokenize `input` into tag and text tokens followed by end-of-file.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokenizer = MarkupTokenizer::new(input.to_string());
    tokenizer.run();
    tokenizer.into_tokens()
}

/// Parse `input` into a tree plus any structural errors.
///
/// An empty error list means the input was well formed. The tree is
/// returned either way.
#[must_use]
pub fn parse(input: &str) -> (DomTree, Vec<ParseError>) {
    TreeBuilder::new(tokenize(input)).run_with_errors()
}

/// A reusable parser that owns the tree from its latest parse.
///
/// Each call to [`MarkupParser::parse`] drops the previous tree, errors and
/// printed warnings and replaces them, so a repeated problem is reported
/// again for every document. Taking `&mut self` means one instance cannot be
/// re-parsed while its tree is borrowed; use one instance per thread for
/// concurrent parsing.
#[derive(Debug, Clone, Default)]
pub struct MarkupParser {
    tree: DomTree,
    errors: Vec<ParseError>,
    warnings: WarningSet,
    strict_mode: bool,
    silent: bool,
}

impl MarkupParser {
    /// Create a parser holding an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop each parse at its first structural error.
    #[must_use]
    pub const fn with_strict_mode(mut self) -> Self {
        self.strict_mode = true;
        self
    }

    /// Do not print structural errors as warnings.
    #[must_use]
    pub const fn silent(mut self) -> Self {
        self.silent = true;
        self
    }

    /// Parse `input`, replacing the previous tree, and return the errors.
    pub fn parse(&mut self, input: &str) -> &[ParseError] {
        let mut builder = TreeBuilder::new(tokenize(input));
        if self.strict_mode {
            builder = builder.with_strict_mode();
        }
        if self.silent {
            builder = builder.silent();
        }
        (self.tree, self.errors, self.warnings) = builder.run_reporting();
        &self.errors
    }

    /// The tree from the latest parse (just the root before any parse).
    #[must_use]
    pub const fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Structural errors from the latest parse.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Warnings printed by the latest parse (empty when silent).
    #[must_use]
    pub const fn warnings(&self) -> &WarningSet {
        &self.warnings
    }

    /// Whether the latest parse was free of structural errors.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.errors.is_empty()
    }

    /// Take ownership of the tree from the latest parse.
    #[must_use]
    pub fn into_tree(self) -> DomTree {
        self.tree
    }
}
