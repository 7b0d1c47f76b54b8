pub mod assemble;
pub mod io;
pub mod keys;
pub mod models;
pub mod parsing;
pub mod snapshot;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use assemble::{Assembler, PageReport, convert};
pub use io::*;
pub use keys::{KeyGenerator, SequentialKeys, UuidKeys};
pub use models::*;
pub use parsing::inline::{HtmlTextParser, InlineNode, TextParser};
pub use parsing::shortcode::BlockKind;
