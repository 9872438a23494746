use twig_common::warning::WarningSet;
use twig_dom::{AttributesMap, DomTree, ElementData, NodeId};

use super::error::ParseError;
use crate::tokenizer::{Attribute, Tag, TagKind, Token, classify_tag};

/// Builds a tree from a stream of tokens.
///
/// The builder is single-use: [`TreeBuilder::run`] consumes it, so the
/// stack of open elements only ever belongs to one parse.
pub struct TreeBuilder {
    /// The stack of open elements. The root sits at the bottom and is never
    /// popped; the current node is the top.
    stack_of_open_elements: Vec<NodeId>,

    /// Tree under construction. `NodeId::ROOT` (index 0) is the synthetic
    /// root.
    tree: DomTree,

    /// Input tokens from the tokenizer.
    tokens: Vec<Token>,

    /// Current position in token stream.
    token_index: usize,

    /// Whether we've stopped parsing.
    stopped: bool,

    /// Structural errors encountered so far.
    errors: Vec<ParseError>,

    /// If true, stop at the first structural error.
    strict_mode: bool,

    /// If true, print each error as a warning.
    report_warnings: bool,

    /// Warnings printed by this parse.
    warnings: WarningSet,
}

impl TreeBuilder {
    /// Create a new builder from a token stream.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            stack_of_open_elements: vec![NodeId::ROOT],
            tree: DomTree::new(),
            tokens,
            token_index: 0,
            stopped: false,
            errors: Vec::new(),
            strict_mode: false,
            report_warnings: true,
            warnings: WarningSet::new(),
        }
    }

    /// Enable strict mode: stop building at the first structural error.
    #[must_use]
    pub const fn with_strict_mode(mut self) -> Self {
        self.strict_mode = true;
        self
    }

    /// Do not print errors as warnings.
    #[must_use]
    pub const fn silent(mut self) -> Self {
        self.report_warnings = false;
        self
    }

    /// Get the structural errors encountered so far.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Run the builder and return the tree, discarding errors.
    #[must_use]
    pub fn run(self) -> DomTree {
        self.run_with_errors().0
    }

    /// Run the builder and return both the tree and any structural errors.
    ///
    /// The tree is returned even when errors occurred; it holds everything
    /// built up to the end of input (or up to the first error in strict
    /// mode).
    #[must_use]
    pub fn run_with_errors(self) -> (DomTree, Vec<ParseError>) {
        let (tree, errors, _) = self.run_reporting();
        (tree, errors)
    }

    /// Run the builder and also return the warnings it printed.
    pub(crate) fn run_reporting(mut self) -> (DomTree, Vec<ParseError>, WarningSet) {
        let tokens = std::mem::take(&mut self.tokens);
        for token in &tokens {
            if self.stopped {
                break;
            }
            self.process_token(token);
            self.token_index += 1;
        }
        // A stream built by hand may lack the end-of-file token.
        if !self.stopped {
            self.handle_end_of_file();
        }
        (self.tree, self.errors, self.warnings)
    }

    fn process_token(&mut self, token: &Token) {
        match token {
            Token::Tag { raw } => match classify_tag(raw) {
                Some(tag) => self.handle_tag(tag),
                None => self.parse_error(ParseError::MalformedTag {
                    raw: raw.clone(),
                    token_index: self.token_index,
                }),
            },
            Token::Text { data } => {
                let current = self.current_node();
                self.tree.append_content(current, data);
            }
            Token::EndOfFile => self.handle_end_of_file(),
        }
    }

    fn handle_tag(&mut self, tag: Tag) {
        match tag.kind {
            TagKind::Start => {
                if let Some(element) = self.insert_element(tag.name, &tag.attributes) {
                    self.stack_of_open_elements.push(element);
                }
            }
            TagKind::SelfClosing => {
                let _ = self.insert_element(tag.name, &tag.attributes);
            }
            // Close tags pop whatever is current; the names are not compared.
            TagKind::End => {
                if self.stack_of_open_elements.len() > 1 {
                    let _ = self.stack_of_open_elements.pop();
                } else {
                    self.parse_error(ParseError::UnmatchedEndTag {
                        name: tag.name,
                        token_index: self.token_index,
                    });
                }
            }
        }
    }

    /// Anything still open above the root is unbalanced.
    fn handle_end_of_file(&mut self) {
        if self.stack_of_open_elements.len() > 1 {
            let open = self.stack_of_open_elements[1..]
                .iter()
                .filter_map(|&id| self.tree.tag_name(id).map(str::to_string))
                .collect();
            self.parse_error(ParseError::UnclosedElements {
                open,
                token_index: self.token_index,
            });
        }
        self.stopped = true;
    }

    /// The current node is the topmost node in the stack of open elements.
    fn current_node(&self) -> NodeId {
        self.stack_of_open_elements
            .last()
            .copied()
            .unwrap_or(NodeId::ROOT)
    }

    /// Convert token attributes to the `AttributesMap` used by `ElementData`.
    /// Later duplicates overwrite earlier ones.
    fn attributes_to_map(attributes: &[Attribute]) -> AttributesMap {
        attributes
            .iter()
            .map(|attr| (attr.name.clone(), attr.value.clone()))
            .collect()
    }

    /// Create an element as the current node's last child.
    ///
    /// The current node always comes from this tree, so this only returns
    /// `None` if the stack were corrupted.
    fn insert_element(&mut self, tag_name: String, attributes: &[Attribute]) -> Option<NodeId> {
        let parent = self.current_node();
        self.tree.append_element(
            parent,
            ElementData {
                tag_name,
                attrs: Self::attributes_to_map(attributes),
            },
        )
    }

    /// Record a structural error, report it, and stop if strict.
    fn parse_error(&mut self, error: ParseError) {
        if self.report_warnings {
            let _ = self.warnings.warn_once("Markup", &error.to_string());
        }
        self.errors.push(error);
        if self.strict_mode {
            self.stopped = true;
        }
    }
}
