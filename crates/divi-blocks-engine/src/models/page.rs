use serde::Serialize;

use super::node::Node;

/// One converted page, in the record shape the page-builder import expects.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "_type", rename = "page")]
pub struct PageDocument {
    pub title: String,
    #[serde(rename = "pageBuilder")]
    pub page_builder: Vec<Node>,
}

impl PageDocument {
    pub fn new(title: impl Into<String>, page_builder: Vec<Node>) -> Self {
        Self {
            title: title.into(),
            page_builder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_as_page_record() {
        let page = PageDocument::new("About", vec![]);
        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            json!({"_type": "page", "title": "About", "pageBuilder": []})
        );
    }
}
