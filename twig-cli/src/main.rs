//! Twig CLI
//!
//! Parses a markup document, prints its tree, and answers a few structural
//! queries about it.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use twig_dom::{DomTree, NodeId};
use twig_markup::{MarkupParser, ParseError, print_tree, tokenize};

/// Document used when no input is given.
const SAMPLE: &str = r#"
    <html>
        <head>
            <title>My Page</title>
        </head>
        <body>
            <h1>Welcome</h1>
            <p>This is a <strong>test</strong> paragraph.</p>
            <img src="image.png" alt="Test Image"/>
        </body>
    </html>
"#;

/// Twig: parse loose markup and inspect the resulting tree
#[derive(Parser, Debug)]
#[command(name = "twig")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Parse the built-in sample document
    twig

    # Parse a file and list the children of <ul>
    twig page.html --children ul

    # Parse inline markup and find every <li>
    twig --html '<ul><li>a</li><li>b</li></ul>' --find li

    # Fail on the first unbalanced or malformed tag
    twig --strict page.html
"#)]
struct Cli {
    /// Path to a markup file (the built-in sample is used if omitted)
    #[arg(value_name = "FILE", conflicts_with = "html")]
    path: Option<PathBuf>,

    /// Parse a markup string directly instead of a file
    #[arg(long, value_name = "MARKUP")]
    html: Option<String>,

    /// List the children of the first element with this tag
    #[arg(long, value_name = "TAG", default_value = "body")]
    children: String,

    /// Show the siblings of the first element with this tag
    #[arg(long, value_name = "TAG", default_value = "h1")]
    siblings: String,

    /// Print every element with this tag, in document order
    #[arg(long, value_name = "TAG")]
    find: Option<String>,

    /// Stop at the first structural error and exit with failure
    #[arg(long)]
    strict: bool,

    /// Print the token stream before the tree
    #[arg(long)]
    tokens: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let source = load_source(&cli)?;

    if cli.tokens {
        println!("=== Tokens ===");
        for (index, token) in tokenize(&source).iter().enumerate() {
            println!("{index:>4}  {token}");
        }
        println!();
    }

    let mut parser = MarkupParser::new().silent();
    if cli.strict {
        parser = parser.with_strict_mode();
    }
    let well_formed = parser.parse(&source).is_empty();
    let tree = parser.tree();

    println!("=== Tree ===");
    print_tree(tree);

    println!();
    print_children(tree, &cli.children);
    print_siblings(tree, &cli.siblings);
    if let Some(tag) = &cli.find {
        print_matches(tree, tag);
    }

    if !well_formed {
        print_errors(parser.errors());
        if cli.strict {
            bail!("input is not well formed");
        }
    }
    Ok(())
}

/// Read the markup from `--html`, a file, or fall back to the sample.
fn load_source(cli: &Cli) -> Result<String> {
    if let Some(html) = &cli.html {
        return Ok(html.clone());
    }
    match &cli.path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => Ok(SAMPLE.to_string()),
    }
}

/// `<tag>` plus its id, if it has one.
fn describe(tree: &DomTree, id: NodeId) -> String {
    let tag = tree.tag_name(id).unwrap_or_default();
    match tree.as_element(id).and_then(|e| e.id()) {
        Some(element_id) => format!("<{tag} id=\"{element_id}\">"),
        None => format!("<{tag}>"),
    }
}

fn print_children(tree: &DomTree, tag: &str) {
    let Some(parent) = tree.first_by_tag_name(tag) else {
        println!("{}", format!("No <{tag}> element found.").dimmed());
        return;
    };
    println!("Children of {}:", describe(tree, parent).bold());
    let children = tree.children(parent);
    if children.is_empty() {
        println!("  (none)");
    }
    for &child in children {
        println!("  {}", describe(tree, child));
    }
}

fn print_siblings(tree: &DomTree, tag: &str) {
    let Some(id) = tree.first_by_tag_name(tag) else {
        println!("{}", format!("No <{tag}> element found.").dimmed());
        return;
    };
    let name = describe(tree, id);
    // Elements always have a parent, so this only fails for the root.
    let Some(siblings) = tree.siblings(id) else {
        println!("{name} is the root and has no siblings.");
        return;
    };
    match siblings.prev {
        Some(prev) => println!("Previous sibling of {name}: {}", describe(tree, prev)),
        None => println!("{name} has no previous sibling."),
    }
    match siblings.next {
        Some(next) => println!("Next sibling of {name}: {}", describe(tree, next)),
        None => println!("{name} has no next sibling."),
    }
}

fn print_matches(tree: &DomTree, tag: &str) {
    let matches = tree.find_by_tag_name(tag);
    println!("Found {} <{tag}> element(s):", matches.len());
    for id in matches {
        let depth = tree.depth(id).unwrap_or_default();
        let content = tree.content(id).unwrap_or_default().trim();
        if content.is_empty() {
            println!("  depth {depth}: {}", describe(tree, id));
        } else {
            println!("  depth {depth}: {} {content:?}", describe(tree, id));
        }
    }
}

fn print_errors(errors: &[ParseError]) {
    println!();
    println!("{}", format!("=== {} structural error(s) ===", errors.len()).red());
    for error in errors {
        println!("  {}: {error}", error.kind().red());
    }
}
