//! Integration tests for the markup tokenizer.

use twig_markup::{MarkupTokenizer, Token, TokenizerState, tokenize};

fn tag(raw: &str) -> Token {
    Token::new_tag(raw)
}

fn text(data: &str) -> Token {
    Token::new_text(data)
}

#[test]
fn test_empty_input() {
    assert_eq!(tokenize(""), vec![Token::EndOfFile]);
}

#[test]
fn test_plain_text() {
    assert_eq!(tokenize("Hello"), vec![text("Hello"), Token::EndOfFile]);
}

#[test]
fn test_start_and_end_tags() {
    assert_eq!(
        tokenize("<div>hi</div>"),
        vec![tag("<div>"), text("hi"), tag("</div>"), Token::EndOfFile]
    );
}

#[test]
fn test_adjacent_tags_have_no_text_between() {
    assert_eq!(
        tokenize("<a><b/></a>"),
        vec![tag("<a>"), tag("<b/>"), tag("</a>"), Token::EndOfFile]
    );
}

#[test]
fn test_whitespace_is_text() {
    assert_eq!(
        tokenize("<a>\n  <b></b>\n</a>"),
        vec![
            tag("<a>"),
            text("\n  "),
            tag("<b>"),
            tag("</b>"),
            text("\n"),
            tag("</a>"),
            Token::EndOfFile,
        ]
    );
}

#[test]
fn test_attributes_stay_inside_tag() {
    assert_eq!(
        tokenize(r#"<img src="a.png" alt='x'/>"#),
        vec![tag(r#"<img src="a.png" alt='x'/>"#), Token::EndOfFile]
    );
}

#[test]
fn test_empty_tag() {
    assert_eq!(tokenize("<>"), vec![tag("<>"), Token::EndOfFile]);
}

#[test]
fn test_less_than_inside_tag_does_not_restart_it() {
    assert_eq!(
        tokenize("<a <b>c"),
        vec![tag("<a <b>"), text("c"), Token::EndOfFile]
    );
}

#[test]
fn test_greater_than_in_text() {
    assert_eq!(
        tokenize("a > b<p>"),
        vec![text("a > b"), tag("<p>"), Token::EndOfFile]
    );
}

#[test]
fn test_unterminated_tag_becomes_trailing_text() {
    assert_eq!(
        tokenize("<p>x</p><br"),
        vec![
            tag("<p>"),
            text("x"),
            tag("</p>"),
            text("<br"),
            Token::EndOfFile,
        ]
    );
}

#[test]
fn test_lone_less_than() {
    assert_eq!(tokenize("<"), vec![text("<"), Token::EndOfFile]);
}

#[test]
fn test_multibyte_text() {
    assert_eq!(
        tokenize("<p>héllo → wörld</p>"),
        vec![
            tag("<p>"),
            text("héllo → wörld"),
            tag("</p>"),
            Token::EndOfFile
        ]
    );
}

#[test]
fn test_tokenizer_ends_in_data_state() {
    let mut tokenizer = MarkupTokenizer::new("<p".to_string());
    assert_eq!(tokenizer.state(), TokenizerState::Data);
    tokenizer.run();
    assert_eq!(tokenizer.state(), TokenizerState::Data);
    assert_eq!(tokenizer.into_tokens(), vec![text("<p"), Token::EndOfFile]);
}

#[test]
fn test_token_source_and_display() {
    let tokens = tokenize("<b>x</b>");
    let sources: Vec<&str> = tokens.iter().map(Token::source).collect();
    assert_eq!(sources, vec!["<b>", "x", "</b>", ""]);
    assert!(tokens[3].is_eof());
    assert_eq!(tokens[0].to_string(), "Tag(<b>)");
    assert_eq!(tokens[1].to_string(), "Text(\"x\")");
    assert_eq!(tokens[3].to_string(), "EOF");
}

#[test]
fn test_state_display() {
    assert_eq!(TokenizerState::Data.to_string(), "Data");
    assert_eq!(TokenizerState::TagOpen.to_string(), "TagOpen");
}
