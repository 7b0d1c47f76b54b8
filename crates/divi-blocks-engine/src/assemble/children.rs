use crate::{
    models::{Node, RowGroup},
    parsing::shortcode::{BlockKind, Extracted, extract_with_offsets},
};

use super::Assembler;

/// Kinds collected inside a column or row, each in its own extraction pass.
pub const CHILD_KINDS: [BlockKind; 4] = [
    BlockKind::Row,
    BlockKind::Image,
    BlockKind::Text,
    BlockKind::Button,
];

/// Merges independently extracted, offset-annotated results into document
/// order and drops absent results.
///
/// Passes are concatenated in the order given, then stably sorted by offset,
/// so equal offsets keep pass order.
pub fn merge_by_offset<T>(passes: impl IntoIterator<Item = Vec<(usize, Option<T>)>>) -> Vec<T> {
    let mut all: Vec<(usize, Option<T>)> = passes.into_iter().flatten().collect();
    all.sort_by_key(|(offset, _)| *offset);
    all.into_iter().filter_map(|(_, node)| node).collect()
}

impl Assembler<'_> {
    /// Converts every known child block inside `span`, in source order.
    pub fn build_children(&self, span: &str) -> Vec<Node> {
        let passes = CHILD_KINDS.map(|kind| {
            extract_with_offsets(span, kind)
                .into_iter()
                .map(|m| (m.offset, self.handle_child(m)))
                .collect::<Vec<_>>()
        });
        merge_by_offset(passes)
    }

    fn handle_child(&self, m: Extracted<'_>) -> Option<Node> {
        match m.kind {
            BlockKind::Row => self.handle_row(m.inner),
            BlockKind::Image => Some(self.handle_image(m.inner)),
            BlockKind::Text => self.handle_text(m.inner),
            BlockKind::Button => Some(self.handle_button(m.inner)),
            BlockKind::Section | BlockKind::Column => None,
        }
    }

    /// Empty rows vanish, single-item rows unwrap to their item, and only
    /// rows with two or more items become a [`RowGroup`].
    pub fn handle_row(&self, inner: &str) -> Option<Node> {
        let mut items = self.build_children(inner);
        match items.len() {
            0 => None,
            1 => items.pop(),
            _ => Some(Node::Row(RowGroup {
                key: self.keys.next_key(),
                items,
            })),
        }
    }
}
