//! # Snapshot Testing Support
//!
//! Utilities for testing conversion output independently of generated keys.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts a node tree into a key-free `Snap` tree that
//!   compares structurally and serializes for `insta`
//! - **`invariants`**: Runtime checks on a converted tree (no empty shells,
//!   no single-item rows, every node keyed)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
