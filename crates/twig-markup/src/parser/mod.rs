//! Tree construction from the token stream.

/// The open-element-stack tree builder.
pub mod builder;
/// Structural errors reported by the builder.
pub mod error;

pub use builder::TreeBuilder;
pub use error::{ParseError, ParseErrorKind};
