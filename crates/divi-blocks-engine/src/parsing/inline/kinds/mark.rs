use serde::Serialize;

/// A decoration applied to a run of inline text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    Strong,
    Em,
    Underline,
    Code,
    Strike,
}

impl Mark {
    /// The mark toggled by an HTML tag name, if any.
    pub fn from_tag(name: &str) -> Option<Mark> {
        match name {
            "strong" | "b" => Some(Mark::Strong),
            "em" | "i" => Some(Mark::Em),
            "u" => Some(Mark::Underline),
            "code" => Some(Mark::Code),
            "s" | "del" | "strike" => Some(Mark::Strike),
            _ => None,
        }
    }
}
