use serde::Serialize;

use super::kinds::Mark;

/// One inline element of a text block.
///
/// Serialized with a `_type` discriminator so text blocks embed directly in
/// page-builder documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "_type", rename_all = "camelCase")]
pub enum InlineNode {
    /// A run of text sharing the same marks and link target.
    Span {
        text: String,
        marks: Vec<Mark>,
        #[serde(skip_serializing_if = "Option::is_none")]
        href: Option<String>,
    },
    /// A line or paragraph boundary between runs.
    Break,
}

impl InlineNode {
    /// A plain, unmarked span.
    pub fn plain(text: impl Into<String>) -> Self {
        InlineNode::Span {
            text: text.into(),
            marks: vec![],
            href: None,
        }
    }

    pub fn marked(text: impl Into<String>, marks: &[Mark]) -> Self {
        InlineNode::Span {
            text: text.into(),
            marks: marks.to_vec(),
            href: None,
        }
    }

    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        InlineNode::Span {
            text: text.into(),
            marks: vec![],
            href: Some(href.into()),
        }
    }
}
