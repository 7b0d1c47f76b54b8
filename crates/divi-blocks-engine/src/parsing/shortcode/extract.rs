use regex::Regex;

use super::kinds::{BlockKind, ButtonAttr};

/// One block found by extraction: its kind, inner content and the byte
/// offset of the match start in the scanned string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extracted<'a> {
    pub kind: BlockKind,
    pub inner: &'a str,
    pub offset: usize,
}

/// Left-to-right, non-overlapping scanner over a single pattern.
///
/// After each match the scan resumes at the match end. A zero-width match
/// forces the position forward by one character so the scan always
/// terminates. Nesting is never validated: an unterminated block simply
/// produces no match.
pub struct Extractor<'r> {
    pattern: &'r Regex,
}

impl<'r> Extractor<'r> {
    pub fn new(pattern: &'r Regex) -> Self {
        Self { pattern }
    }

    /// Returns `(offset, group 1)` for every match. A match without a
    /// participating group 1 yields an empty inner string.
    pub fn scan<'s>(&self, source: &'s str) -> Vec<(usize, &'s str)> {
        let mut out = vec![];
        let mut pos = 0;

        while pos <= source.len() {
            let Some(caps) = self.pattern.captures_at(source, pos) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };
            let inner = caps.get(1).map_or("", |m| m.as_str());
            out.push((whole.start(), inner));

            pos = if whole.end() == whole.start() {
                next_char_boundary(source, whole.end())
            } else {
                whole.end()
            };
        }

        out
    }
}

fn next_char_boundary(s: &str, from: usize) -> usize {
    s[from..]
        .chars()
        .next()
        .map_or(from + 1, |c| from + c.len_utf8())
}

/// Inner contents of every `kind` block in `source`, in source order.
pub fn extract(source: &str, kind: BlockKind) -> Vec<&str> {
    Extractor::new(kind.pattern())
        .scan(source)
        .into_iter()
        .map(|(_, inner)| inner)
        .collect()
}

/// Like [`extract`], but each result carries its offset and kind.
pub fn extract_with_offsets(source: &str, kind: BlockKind) -> Vec<Extracted<'_>> {
    Extractor::new(kind.pattern())
        .scan(source)
        .into_iter()
        .map(|(offset, inner)| Extracted {
            kind,
            inner,
            offset,
        })
        .collect()
}

/// First `button_url` / `button_text` value in a button's attribute list.
pub fn button_attr(attrs: &str, attr: ButtonAttrKind) -> Option<&str> {
    let pattern = match attr {
        ButtonAttrKind::Url => ButtonAttr::url(),
        ButtonAttrKind::Text => ButtonAttr::text(),
    };
    Extractor::new(pattern)
        .scan(attrs)
        .into_iter()
        .next()
        .map(|(_, value)| value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAttrKind {
    Url,
    Text,
}
