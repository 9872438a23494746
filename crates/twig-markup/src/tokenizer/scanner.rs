use strum_macros::Display;

use super::token::Token;

/// The tokenizer state machine.
///
/// Two states are enough for the loose markup Twig accepts: either we are
/// between tags collecting text, or we are inside a tag waiting for `>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TokenizerState {
    /// Outside any tag. `<` starts a tag; anything else is text.
    Data,
    /// After a `<`. `>` ends the tag; anything else (including another
    /// `<`) belongs to the tag.
    TagOpen,
}

/// Splits markup into tag and text tokens.
///
/// This struct maintains the state machine for tokenizing input into
/// tokens. Dispatch is a single character-class match per input character,
/// so cost is linear in the input with no backtracking.
pub struct MarkupTokenizer {
    state: TokenizerState,
    input: String,
    current_pos: usize,
    /// Byte offset where the token currently being scanned began.
    token_start: usize,
    token_stream: Vec<Token>,
}

impl MarkupTokenizer {
    /// Create a new tokenizer for the given input.
    ///
    /// The initial state is the data state.
    #[must_use]
    pub const fn new(input: String) -> Self {
        Self {
            state: TokenizerState::Data,
            input,
            current_pos: 0,
            token_start: 0,
            token_stream: Vec::new(),
        }
    }

    /// The state the tokenizer is currently in.
    #[must_use]
    pub const fn state(&self) -> TokenizerState {
        self.state
    }

    /// Consume the tokenizer and return the token stream.
    /// Call this after `run()` to get the tokens for the tree builder.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.token_stream
    }

    /// Tokenize the whole input, ending with an end-of-file token.
    pub fn run(&mut self) {
        while let Some(c) = self.consume() {
            match self.state {
                TokenizerState::Data => self.handle_data_state(c),
                TokenizerState::TagOpen => self.handle_tag_open_state(c),
            }
        }
        self.handle_eof();
    }

    /// Consume the next input character, advancing past it.
    fn consume(&mut self) -> Option<char> {
        let c = self.input[self.current_pos..].chars().next()?;
        self.current_pos += c.len_utf8();
        Some(c)
    }

    fn handle_data_state(&mut self, c: char) {
        if c == '<' {
            // The `<` itself starts the tag span.
            let tag_start = self.current_pos - 1;
            self.emit_text_until(tag_start);
            self.switch_to(TokenizerState::TagOpen);
        }
    }

    fn handle_tag_open_state(&mut self, c: char) {
        if c == '>' {
            self.emit_tag_until(self.current_pos);
            self.switch_to(TokenizerState::Data);
        }
    }

    /// Flush whatever is pending and emit end-of-file.
    ///
    /// A tag that was opened but never closed is emitted as text: the
    /// trailing span keeps every input character covered.
    fn handle_eof(&mut self) {
        if self.state == TokenizerState::TagOpen {
            self.switch_to(TokenizerState::Data);
        }
        self.emit_text_until(self.input.len());
        self.token_stream.push(Token::EndOfFile);
    }

    const fn switch_to(&mut self, new_state: TokenizerState) {
        self.state = new_state;
    }

    /// Emit `input[token_start..end]` as a text token if it is non-empty.
    fn emit_text_until(&mut self, end: usize) {
        if end > self.token_start {
            let token = Token::new_text(&self.input[self.token_start..end]);
            self.token_stream.push(token);
        }
        self.token_start = end;
    }

    /// Emit `input[token_start..end]` as a tag token.
    fn emit_tag_until(&mut self, end: usize) {
        let token = Token::new_tag(&self.input[self.token_start..end]);
        self.token_stream.push(token);
        self.token_start = end;
    }
}
