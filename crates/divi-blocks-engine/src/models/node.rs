use serde::Serialize;

use crate::parsing::inline::InlineNode;

/// A page-builder block produced from shortcode markup.
///
/// Every variant serializes with a `_type` discriminator and a `_key`
/// identifier. Keys identify blocks for the renderer only; nothing in the
/// converter compares or orders by them.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Node {
    Text(TextBlock),
    Image(ImageBlock),
    Button(ButtonBlock),
    Row(RowGroup),
    Columns(ColumnsBlock),
}

impl Node {
    pub fn key(&self) -> &str {
        match self {
            Node::Text(b) => &b.key,
            Node::Image(b) => &b.key,
            Node::Button(b) => &b.key,
            Node::Row(b) => &b.key,
            Node::Columns(b) => &b.key,
        }
    }

    /// The `_type` value this node serializes with.
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Text(_) => TextBlock::TYPE,
            Node::Image(_) => ImageBlock::TYPE,
            Node::Button(_) => ButtonBlock::TYPE,
            Node::Row(_) => RowGroup::TYPE,
            Node::Columns(_) => ColumnsBlock::TYPE,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "_type", rename = "textBlock")]
pub struct TextBlock {
    #[serde(rename = "_key")]
    pub key: String,
    pub text: Vec<InlineNode>,
}

impl TextBlock {
    pub const TYPE: &'static str = "textBlock";
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "_type", rename = "image")]
pub struct ImageBlock {
    #[serde(rename = "_key")]
    pub key: String,
    /// Asset reference for the importer, e.g. `image@https://host/a.png`.
    #[serde(rename = "_sanityAsset")]
    pub asset: String,
}

impl ImageBlock {
    pub const TYPE: &'static str = "image";
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "_type", rename = "button")]
pub struct ButtonBlock {
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(rename = "buttonUrl", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "buttonText", skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ButtonBlock {
    pub const TYPE: &'static str = "button";
}

/// A row holding two or more items. Single-item rows are never wrapped.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "_type", rename = "row")]
pub struct RowGroup {
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(rename = "rowItems")]
    pub items: Vec<Node>,
}

impl RowGroup {
    pub const TYPE: &'static str = "row";
}

/// One non-empty column of a multi-column section.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "_type", rename = "column")]
pub struct ColumnGroup {
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(rename = "columnItems")]
    pub items: Vec<Node>,
}

impl ColumnGroup {
    pub const TYPE: &'static str = "column";
}

/// All non-empty columns of one multi-column section.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "_type", rename = "columns")]
pub struct ColumnsBlock {
    #[serde(rename = "_key")]
    pub key: String,
    pub columns: Vec<ColumnGroup>,
}

impl ColumnsBlock {
    pub const TYPE: &'static str = "columns";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn button_omits_absent_fields() {
        let node = Node::Button(ButtonBlock {
            key: "k1".into(),
            url: Some("/contact".into()),
            label: None,
        });
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({"_type": "button", "_key": "k1", "buttonUrl": "/contact"})
        );
    }

    #[test]
    fn image_uses_asset_field() {
        let node = Node::Image(ImageBlock {
            key: "k".into(),
            asset: "image@https://uploads/a.png".into(),
        });
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({"_type": "image", "_key": "k", "_sanityAsset": "image@https://uploads/a.png"})
        );
    }

    #[test]
    fn columns_nest_tagged_column_groups() {
        let node = Node::Columns(ColumnsBlock {
            key: "c".into(),
            columns: vec![ColumnGroup {
                key: "c1".into(),
                items: vec![Node::Text(TextBlock {
                    key: "t".into(),
                    text: vec![InlineNode::plain("Hi")],
                })],
            }],
        });
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({
                "_type": "columns",
                "_key": "c",
                "columns": [{
                    "_type": "column",
                    "_key": "c1",
                    "columnItems": [{
                        "_type": "textBlock",
                        "_key": "t",
                        "text": [{"_type": "span", "text": "Hi", "marks": []}]
                    }]
                }]
            })
        );
    }

    #[test]
    fn type_name_matches_serialized_tag() {
        let node = Node::Row(RowGroup {
            key: "r".into(),
            items: vec![],
        });
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["_type"], node.type_name());
        assert_eq!(node.key(), "r");
    }
}
