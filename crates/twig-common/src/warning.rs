//! Parser warnings with colored terminal output.
//!
//! A [`WarningSet`] belongs to a single parse. It deduplicates so a
//! document with many identical structural problems does not flood stderr,
//! and it is dropped with the parse, so the next document reports its own
//! problems again and nothing accumulates for the life of the process.

use std::collections::HashSet;

use owo_colors::OwoColorize;

/// The warning line as printed, without colour.
#[must_use]
pub fn format_warning(component: &str, message: &str) -> String {
    format!("[Twig {component}] ⚠ {message}")
}

/// Warnings already printed by one parse.
///
/// # Example
/// ```
/// use twig_common::warning::WarningSet;
///
/// let mut warnings = WarningSet::new();
/// assert!(warnings.warn_once("Markup", "end tag </div> has no open element"));
/// assert!(!warnings.warn_once("Markup", "end tag </div> has no open element"));
/// assert_eq!(warnings.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WarningSet {
    printed: HashSet<String>,
}

impl WarningSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Print a warning to stderr unless this set already printed it.
    ///
    /// Returns whether the warning was printed.
    pub fn warn_once(&mut self, component: &str, message: &str) -> bool {
        let line = format_warning(component, message);
        if self.printed.contains(&line) {
            return false;
        }
        eprintln!("{}", line.yellow());
        let _ = self.printed.insert(line);
        true
    }

    /// Whether `message` has already been printed for `component`.
    #[must_use]
    pub fn contains(&self, component: &str, message: &str) -> bool {
        self.printed.contains(&format_warning(component, message))
    }

    /// Number of distinct warnings printed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.printed.len()
    }

    /// Whether nothing has been printed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.printed.is_empty()
    }
}
