use crate::models::Node;

/// Panics if the tree contains a shape the assembler must never build.
pub fn check(nodes: &[Node]) {
    for node in nodes {
        check_node(node);
    }
}

fn check_node(node: &Node) {
    assert!(!node.key().is_empty(), "node without key: {node:?}");
    match node {
        Node::Text(b) => {
            assert!(!b.text.is_empty(), "empty text block: {}", b.key);
        }
        Node::Image(_) | Node::Button(_) => {}
        Node::Row(b) => {
            assert!(
                b.items.len() >= 2,
                "row {} with {} item(s) should have been collapsed",
                b.key,
                b.items.len()
            );
            check(&b.items);
        }
        Node::Columns(b) => {
            assert!(!b.columns.is_empty(), "columns block {} without columns", b.key);
            for col in &b.columns {
                assert!(!col.key.is_empty(), "column without key in {}", b.key);
                assert!(!col.items.is_empty(), "empty column {} in {}", col.key, b.key);
                check(&col.items);
            }
        }
    }
}
