//! Common utilities for the Twig markup parser.
//!
//! This crate provides shared infrastructure used by all Twig components:
//! - **Warning System** - per-parse deduplicated, colored terminal output for
//!   structural problems found in the input

pub mod warning;
