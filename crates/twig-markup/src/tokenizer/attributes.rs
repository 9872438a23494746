//! Attribute extraction from the interior of a tag token.
//!
//! Only quoted values are recorded: `name="value"` and `name='value'`.
//! Unquoted values and value-less attributes are stepped over silently, and
//! an unterminated quoted value ends parsing for the tag.

use super::token::Attribute;

/// States of the attribute scanner, loosely modelled on the attribute states
/// of an HTML tokenizer but without character references or error recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AttributeState {
    BeforeAttributeName,
    AttributeName,
    AfterAttributeName,
    BeforeAttributeValue,
    AttributeValueQuoted(char),
    AttributeValueUnquoted,
}

const fn is_whitespace(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\x0C' | '\r' | ' ')
}

/// Characters that end an attribute name.
const fn ends_name(c: char) -> bool {
    is_whitespace(c) || matches!(c, '=' | '"' | '\'' | '/' | '<' | '>')
}

/// Extract the quoted attributes from `interior`, the part of a tag after
/// its name with the `<`, `>` and any self-closing `/` already removed.
///
/// Attributes are returned in source order, duplicates included; folding
/// them into a map lets the later occurrence win.
#[must_use]
pub fn parse_attributes(interior: &str) -> Vec<Attribute> {
    let mut attributes = Vec::new();
    let mut state = AttributeState::BeforeAttributeName;
    let mut name = String::new();
    let mut value = String::new();

    for c in interior.chars() {
        state = match state {
            AttributeState::BeforeAttributeName => {
                if ends_name(c) {
                    AttributeState::BeforeAttributeName
                } else {
                    name.clear();
                    name.push(c);
                    AttributeState::AttributeName
                }
            }
            AttributeState::AttributeName => match c {
                '=' => AttributeState::BeforeAttributeValue,
                c if is_whitespace(c) => AttributeState::AfterAttributeName,
                c if ends_name(c) => AttributeState::BeforeAttributeName,
                c => {
                    name.push(c);
                    AttributeState::AttributeName
                }
            },
            AttributeState::AfterAttributeName => match c {
                '=' => AttributeState::BeforeAttributeValue,
                c if is_whitespace(c) => AttributeState::AfterAttributeName,
                // The previous name had no value; this starts the next one.
                c if ends_name(c) => AttributeState::BeforeAttributeName,
                c => {
                    name.clear();
                    name.push(c);
                    AttributeState::AttributeName
                }
            },
            AttributeState::BeforeAttributeValue => match c {
                '"' | '\'' => {
                    value.clear();
                    AttributeState::AttributeValueQuoted(c)
                }
                c if is_whitespace(c) => AttributeState::BeforeAttributeValue,
                _ => AttributeState::AttributeValueUnquoted,
            },
            AttributeState::AttributeValueQuoted(quote) => {
                if c == quote {
                    attributes.push(Attribute::new(
                        std::mem::take(&mut name),
                        std::mem::take(&mut value),
                    ));
                    AttributeState::BeforeAttributeName
                } else {
                    value.push(c);
                    AttributeState::AttributeValueQuoted(quote)
                }
            }
            AttributeState::AttributeValueUnquoted => {
                if is_whitespace(c) {
                    AttributeState::BeforeAttributeName
                } else {
                    AttributeState::AttributeValueUnquoted
                }
            }
        };
    }

    attributes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(interior: &str) -> Vec<(String, String)> {
        parse_attributes(interior)
            .into_iter()
            .map(|a| (a.name, a.value))
            .collect()
    }

    fn pair(name: &str, value: &str) -> (String, String) {
        (name.to_string(), value.to_string())
    }

    #[test]
    fn test_empty_interior() {
        assert!(parse_attributes("").is_empty());
        assert!(parse_attributes("   ").is_empty());
    }

    #[test]
    fn test_double_and_single_quotes() {
        assert_eq!(
            pairs(r#" src="image.png" alt='Test Image'"#),
            vec![pair("src", "image.png"), pair("alt", "Test Image")]
        );
    }

    #[test]
    fn test_other_quote_kind_inside_value() {
        assert_eq!(
            pairs(r#" title="it's" data-q='say "hi"'"#),
            vec![pair("title", "it's"), pair("data-q", r#"say "hi""#)]
        );
    }

    #[test]
    fn test_whitespace_around_equals() {
        assert_eq!(pairs(r#" id = "main""#), vec![pair("id", "main")]);
    }

    #[test]
    fn test_unquoted_and_boolean_are_skipped() {
        assert_eq!(
            pairs(r#" disabled width=100 class="x" checked"#),
            vec![pair("class", "x")]
        );
    }

    #[test]
    fn test_duplicates_kept_in_order() {
        assert_eq!(
            pairs(r#" a="1" a="2""#),
            vec![pair("a", "1"), pair("a", "2")]
        );
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(pairs(r#" alt="""#), vec![pair("alt", "")]);
    }

    #[test]
    fn test_unterminated_value_is_dropped() {
        assert_eq!(pairs(r#" a="1" b="never closed"#), vec![pair("a", "1")]);
    }

    #[test]
    fn test_value_may_contain_angle_brackets_and_slashes() {
        assert_eq!(
            pairs(r#" href="/a/b?x=<1>""#),
            vec![pair("href", "/a/b?x=<1>")]
        );
    }

    #[test]
    fn test_adjacent_attributes_without_space() {
        assert_eq!(
            pairs(r#" a="1"b="2""#),
            vec![pair("a", "1"), pair("b", "2")]
        );
    }
}
