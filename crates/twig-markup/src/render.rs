//! Human-readable dump of a built tree.

use core::fmt;

use twig_dom::{DomTree, NodeId, ROOT_TAG_NAME};

/// Displays a tree one node per line, indented two spaces per level.
///
/// Each element shows its tag name and attributes (sorted by name so the
/// output is stable), followed by a quoted line with its text content when
/// that content holds anything besides whitespace. Runs of whitespace in
/// content are collapsed to a single space. Attribute values and content
/// are written as escaped string literals, so embedded quotes stay
/// unambiguous.
pub struct TreeDump<'a>(pub &'a DomTree);

impl fmt::Display for TreeDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tree = self.0;
        writeln!(f, "{ROOT_TAG_NAME}")?;
        write_content(f, tree, NodeId::ROOT, 1)?;

        for (id, depth) in tree.depth_first() {
            let Some(element) = tree.as_element(id) else {
                continue;
            };
            let prefix = "  ".repeat(depth + 1);
            write!(f, "{prefix}<{}", element.tag_name)?;

            let mut attrs: Vec<_> = element.attrs.iter().collect();
            attrs.sort();
            for (name, value) in attrs {
                write!(f, " {name}={value:?}")?;
            }
            writeln!(f, ">")?;

            write_content(f, tree, id, depth + 2)?;
        }
        Ok(())
    }
}

fn write_content(
    f: &mut fmt::Formatter<'_>,
    tree: &DomTree,
    id: NodeId,
    indent: usize,
) -> fmt::Result {
    let content = tree.content(id).unwrap_or_default();
    let collapsed = content.split_ascii_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        return Ok(());
    }
    writeln!(f, "{}{collapsed:?}", "  ".repeat(indent))
}

/// Render a tree dump into a string.
#[must_use]
pub fn render_tree(tree: &DomTree) -> String {
    TreeDump(tree).to_string()
}

/// Print a tree dump to stdout for debugging.
pub fn print_tree(tree: &DomTree) {
    print!("{}", TreeDump(tree));
}
