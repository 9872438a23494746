//! Tests for the tree dump.

use twig_markup::{TreeBuilder, TreeDump, render_tree, tokenize};

fn dump(markup: &str) -> String {
    render_tree(&TreeBuilder::new(tokenize(markup)).silent().run())
}

#[test]
fn test_dump_nested() {
    assert_eq!(
        dump("<a><b>x</b><c/></a>"),
        "#root\n  <a>\n    <b>\n      \"x\"\n    <c>\n"
    );
}

#[test]
fn test_dump_empty() {
    assert_eq!(dump(""), "#root\n");
}

#[test]
fn test_dump_attributes_sorted() {
    assert_eq!(
        dump(r#"<img src="image.png" alt="Test Image"/>"#),
        "#root\n  <img alt=\"Test Image\" src=\"image.png\">\n"
    );
}

#[test]
fn test_dump_escapes_embedded_quotes() {
    assert_eq!(
        dump(r#"<q data-q='say "hi"'>a "b" c</q>"#),
        "#root\n  <q data-q=\"say \\\"hi\\\"\">\n    \"a \\\"b\\\" c\"\n"
    );
}

#[test]
fn test_dump_collapses_whitespace_and_skips_blank_content() {
    let markup = "<p>\n   Hello\n   <em>  world </em>\n</p>";
    assert_eq!(dump(markup), "#root\n  <p>\n    \"Hello\"\n    <em>\n      \"world\"\n");
}

#[test]
fn test_dump_root_content() {
    assert_eq!(dump("stray <a></a> text"), "#root\n  \"stray text\"\n  <a>\n");
}

#[test]
fn test_display_matches_render() {
    let tree = TreeBuilder::new(tokenize("<x><y/></x>")).silent().run();
    assert_eq!(TreeDump(&tree).to_string(), render_tree(&tree));
}
