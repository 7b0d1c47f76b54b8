use once_cell::sync::Lazy;
use regex::Regex;

/// The closed set of shortcode block kinds the converter understands.
///
/// Each kind owns exactly one delimiter pattern. Container kinds (section,
/// column, row, text) are paired `[tag ...]...[/tag]`; image and button are
/// self-closing attributed tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlockKind {
    Section,
    Column,
    Row,
    Text,
    Image,
    Button,
}

impl BlockKind {
    pub const ALL: [BlockKind; 6] = [
        BlockKind::Section,
        BlockKind::Column,
        BlockKind::Row,
        BlockKind::Text,
        BlockKind::Image,
        BlockKind::Button,
    ];

    /// The shortcode tag name, e.g. `et_pb_section`.
    pub fn tag_name(self) -> &'static str {
        match self {
            BlockKind::Section => "et_pb_section",
            BlockKind::Column => "et_pb_column",
            BlockKind::Row => "et_pb_row",
            BlockKind::Text => "et_pb_text",
            BlockKind::Image => "et_pb_image",
            BlockKind::Button => "et_pb_button",
        }
    }

    /// The compiled delimiter pattern. Capture group 1 is the inner content.
    pub fn pattern(self) -> &'static Regex {
        match self {
            BlockKind::Section => &SECTION,
            BlockKind::Column => &COLUMN,
            BlockKind::Row => &ROW,
            BlockKind::Text => &TEXT,
            BlockKind::Image => &IMAGE,
            BlockKind::Button => &BUTTON,
        }
    }

    /// The kind handling a raw `et_pb_*` tag name.
    ///
    /// Open tags are matched by prefix, so `et_pb_row_inner` is a row.
    pub fn for_tag(tag: &str) -> Option<BlockKind> {
        Self::ALL.into_iter().find(|k| tag.starts_with(k.tag_name()))
    }

    pub fn recognizes(tag: &str) -> bool {
        Self::for_tag(tag).is_some()
    }
}

/// Attribute patterns used inside a button's attribute list.
pub struct ButtonAttr;

impl ButtonAttr {
    pub fn url() -> &'static Regex {
        &BUTTON_URL
    }

    pub fn text() -> &'static Regex {
        &BUTTON_TEXT
    }
}

/// Matches any opening `[et_pb_*` tag, capturing its name.
pub fn any_open_tag() -> &'static Regex {
    &ANY_OPEN_TAG
}

fn paired(tag: &str) -> Regex {
    let pattern = format!(r"(?s)\[{tag}.*?\](.*?)\[/{tag}\]");
    Regex::new(&pattern).expect("Invalid shortcode block regex")
}

static SECTION: Lazy<Regex> = Lazy::new(|| paired("et_pb_section"));
static COLUMN: Lazy<Regex> = Lazy::new(|| paired("et_pb_column"));
static ROW: Lazy<Regex> = Lazy::new(|| paired("et_pb_row"));
static TEXT: Lazy<Regex> = Lazy::new(|| paired("et_pb_text"));
static IMAGE: Lazy<Regex> = Lazy::new(|| literal(r#"(?s)\[et_pb_image src="(.*?)""#));
static BUTTON: Lazy<Regex> = Lazy::new(|| literal(r"(?s)\[et_pb_button (.*?)\]"));
static BUTTON_URL: Lazy<Regex> = Lazy::new(|| literal(r#"(?s)button_url="(.*?)""#));
static BUTTON_TEXT: Lazy<Regex> = Lazy::new(|| literal(r#"(?s)button_text="(.*?)""#));
static ANY_OPEN_TAG: Lazy<Regex> = Lazy::new(|| literal(r"\[(et_pb_[A-Za-z0-9_]+)"));

fn literal(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Invalid shortcode attribute regex")
}
