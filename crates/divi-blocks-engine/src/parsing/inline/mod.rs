//! # Inline Parsing
//!
//! Turns the HTML fragment inside a text module into a flat run list.
//!
//! ## Architecture
//!
//! The block assembler only depends on the [`TextParser`] trait. The
//! bundled [`HtmlTextParser`] is a cursor-based scanner:
//! - Mark tags (`<strong>`, `<em>`, ...) push and pop decoration marks
//! - Anchors set the link target for the text they enclose
//! - Block-level tags and blank lines become `Break` nodes
//! - Anything else (unknown tags, comments) is skipped
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` enum (Span, Break)
//! - **`kinds`**: tag knowledge (`HtmlTag`, `Mark`, `BlockBoundary`, `Link`)
//! - **`cursor`**: `Cursor` for byte-wise scanning
//! - **`parser`**: `TextParser`, `HtmlTextParser`, `parse_inline()`

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use kinds::Mark;
pub use parser::{HtmlTextParser, TextParser, parse_inline};
pub use types::InlineNode;
