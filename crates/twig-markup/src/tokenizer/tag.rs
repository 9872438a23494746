//! Classification of raw tag tokens.

use strum_macros::Display;

use super::attributes::parse_attributes;
use super::token::Attribute;

/// What a tag token asks the tree builder to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TagKind {
    /// `<name ...>`: create an element and descend into it.
    Start,
    /// `<name .../>`: create an element without descending.
    SelfClosing,
    /// `</name>`: close the current element.
    End,
}

/// A tag token broken into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Start, self-closing or end.
    pub kind: TagKind,
    /// The tag name exactly as written.
    pub name: String,
    /// Quoted attributes in source order. Always empty for end tags.
    pub attributes: Vec<Attribute>,
}

/// Split a raw tag token (`<...>`) into kind, name and attributes.
///
/// The name runs from just after `<` (or `</`) to the first ASCII whitespace.
/// A trailing `/`, optionally followed by whitespace, marks a self-closing
/// tag and is not part of the name or attributes.
///
/// Returns `None` when no tag name can be extracted: `<>`, `</>`, `< a>`.
#[must_use]
pub fn classify_tag(raw: &str) -> Option<Tag> {
    let interior = raw.strip_prefix('<').unwrap_or(raw);
    let interior = interior.strip_suffix('>').unwrap_or(interior);

    if let Some(rest) = interior.strip_prefix('/') {
        let (name, _) = split_name(rest);
        return (!name.is_empty()).then(|| Tag {
            kind: TagKind::End,
            name: name.to_string(),
            attributes: Vec::new(),
        });
    }

    let trimmed = interior.trim_end_matches(|c: char| c.is_ascii_whitespace());
    let (kind, body) = match trimmed.strip_suffix('/') {
        Some(body) => (TagKind::SelfClosing, body),
        None => (TagKind::Start, interior),
    };

    let (name, rest) = split_name(body);
    if name.is_empty() {
        return None;
    }
    Some(Tag {
        kind,
        name: name.to_string(),
        attributes: parse_attributes(rest),
    })
}

/// Split at the first ASCII whitespace: `(name, remainder)`.
fn split_name(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| c.is_ascii_whitespace()).unwrap_or(s.len());
    s.split_at(end)
}
