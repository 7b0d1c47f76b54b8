//! # Inline Kinds
//!
//! HTML constructs recognized inside a text module, each owning its tag
//! names and delimiters.
//!
//! ## Types
//!
//! - **`HtmlTag`**: `OPEN = b'<'`, `CLOSE = b'>'`, comment delimiters
//! - **`Mark`**: decoration marks and the tag names that toggle them
//! - **`BlockBoundary`**: tag names that end a line of text
//! - **`Link`**: the anchor tag and its `href` attribute
//!
//! The parser never hardcodes tag names; it asks these types.

pub mod html_tag;
pub mod mark;

pub use html_tag::{BlockBoundary, HtmlTag, Link};
pub use mark::Mark;
