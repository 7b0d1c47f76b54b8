use crate::{
    models::{ButtonBlock, ImageBlock, Node, TextBlock},
    parsing::shortcode::{ButtonAttrKind, button_attr},
};

use super::Assembler;

/// Prefix understood by the importer as "fetch this URL as an image asset".
pub const ASSET_PREFIX: &str = "image@";
/// Replacement for the leading `/` of a root-relative image path.
pub const ROOT_RELATIVE_SCHEME: &str = "https://";

/// Builds the importer asset reference for an image `src` value.
///
/// Only a single leading `/` is rewritten; anything else is passed through.
pub fn asset_reference(src: &str) -> String {
    match src.strip_prefix('/') {
        Some(rest) => format!("{ASSET_PREFIX}{ROOT_RELATIVE_SCHEME}{rest}"),
        None => format!("{ASSET_PREFIX}{src}"),
    }
}

impl Assembler<'_> {
    /// `src` is the captured `src` attribute value. Always yields a block.
    pub fn handle_image(&self, src: &str) -> Node {
        Node::Image(ImageBlock {
            key: self.keys.next_key(),
            asset: asset_reference(src),
        })
    }

    /// `attrs` is the button's attribute list. Missing attributes stay `None`.
    pub fn handle_button(&self, attrs: &str) -> Node {
        let url = button_attr(attrs, ButtonAttrKind::Url).map(str::to_string);
        let label = button_attr(attrs, ButtonAttrKind::Text).map(str::to_string);
        Node::Button(ButtonBlock {
            key: self.keys.next_key(),
            url,
            label,
        })
    }

    /// Returns `None` when the text parser finds no inline content.
    pub fn handle_text(&self, inner: &str) -> Option<Node> {
        let text = self.text_parser.parse(inner);
        if text.is_empty() {
            return None;
        }
        Some(Node::Text(TextBlock {
            key: self.keys.next_key(),
            text,
        }))
    }
}
