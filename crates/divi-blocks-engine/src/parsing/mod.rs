//! # Parsing
//!
//! Two independent layers, both pure functions of their input string:
//!
//! - **`shortcode`**: isolates `et_pb_*` blocks of one kind at a time
//! - **`inline`**: turns a text module's HTML into inline runs

pub mod inline;
pub mod shortcode;
