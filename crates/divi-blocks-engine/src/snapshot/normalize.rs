use serde::Serialize;

use crate::{models::Node, parsing::inline::InlineNode};

/// A key-free view of a [`Node`].
///
/// Two conversions of the same input normalize to equal `Snap` trees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum Snap {
    Text { inline: Vec<InlineNode> },
    Image { asset: String },
    Button { url: Option<String>, label: Option<String> },
    Row { items: Vec<Snap> },
    Columns { columns: Vec<Vec<Snap>> },
}

pub fn normalize(nodes: &[Node]) -> Vec<Snap> {
    nodes.iter().map(normalize_node).collect()
}

fn normalize_node(node: &Node) -> Snap {
    match node {
        Node::Text(b) => Snap::Text {
            inline: b.text.clone(),
        },
        Node::Image(b) => Snap::Image {
            asset: b.asset.clone(),
        },
        Node::Button(b) => Snap::Button {
            url: b.url.clone(),
            label: b.label.clone(),
        },
        Node::Row(b) => Snap::Row {
            items: normalize(&b.items),
        },
        Node::Columns(b) => Snap::Columns {
            columns: b.columns.iter().map(|c| normalize(&c.items)).collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ImageBlock, RowGroup, TextBlock};

    #[test]
    fn keys_do_not_affect_snapshots() {
        let make = |key: &str| {
            vec![Node::Row(RowGroup {
                key: format!("{key}-row"),
                items: vec![
                    Node::Image(ImageBlock {
                        key: format!("{key}-img"),
                        asset: "image@https://a.png".into(),
                    }),
                    Node::Text(TextBlock {
                        key: format!("{key}-txt"),
                        text: vec![InlineNode::plain("x")],
                    }),
                ],
            })]
        };
        assert_eq!(normalize(&make("a")), normalize(&make("b")));
    }
}
