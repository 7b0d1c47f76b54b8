use once_cell::sync::Lazy;
use regex::Regex;

/// Delimiters shared by every HTML tag.
pub struct HtmlTag;

impl HtmlTag {
    pub const OPEN: u8 = b'<';
    pub const CLOSE: u8 = b'>';
    pub const END_MARKER: u8 = b'/';
    pub const COMMENT_OPEN: &'static [u8; 4] = b"<!--";
    pub const COMMENT_CLOSE: &'static str = "-->";

    /// Splits a tag body (text between `<` and `>`) into
    /// `(is_closing, lowercase name)`.
    ///
    /// Returns `None` when the body does not start like a tag name, so
    /// `a < b` stays literal text.
    pub fn name(body: &str) -> Option<(bool, String)> {
        let (closing, rest) = match body.strip_prefix(Self::END_MARKER as char) {
            Some(rest) => (true, rest),
            None => (false, body),
        };
        if !rest.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return None;
        }
        let name: String = rest
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Some((closing, name))
    }
}

/// Tags that end the current line of text.
pub struct BlockBoundary;

impl BlockBoundary {
    pub const TAGS: &'static [&'static str] = &[
        "br", "p", "div", "h1", "h2", "h3", "h4", "h5", "h6", "li", "ul", "ol", "blockquote",
    ];

    pub fn is_boundary(name: &str) -> bool {
        Self::TAGS.contains(&name)
    }
}

/// The anchor tag.
pub struct Link;

impl Link {
    pub const TAG: &'static str = "a";

    /// The `href` value of an anchor tag body, if any.
    pub fn href(body: &str) -> Option<&str> {
        HREF.captures(body)
            .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
            .map(|m| m.as_str())
    }
}

static HREF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\bhref\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("Invalid href regex")
});
