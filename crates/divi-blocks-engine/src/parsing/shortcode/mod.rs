//! # Shortcode Extraction
//!
//! Regex-driven isolation of Divi shortcode blocks.
//!
//! ## Modules
//!
//! - **`kinds`**: `BlockKind` and the delimiter pattern each kind owns
//! - **`extract`**: `Extractor` scan loop plus `extract` / `extract_with_offsets`
//!
//! ## Key Invariants
//!
//! - Each pass looks for one kind only; passes never see each other's matches
//! - Matches within a pass are non-overlapping and in increasing offset order
//! - Malformed or unterminated markup produces fewer matches, never an error

pub mod extract;
pub mod kinds;

pub use extract::{ButtonAttrKind, Extracted, Extractor, button_attr, extract, extract_with_offsets};
pub use kinds::BlockKind;
