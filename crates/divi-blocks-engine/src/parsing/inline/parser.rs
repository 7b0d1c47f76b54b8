use once_cell::sync::Lazy;
use regex::Regex;

use super::{
    cursor::Cursor,
    kinds::{BlockBoundary, HtmlTag, Link, Mark},
    types::InlineNode,
};

/// Converts the raw content of a text module into inline nodes.
///
/// An empty result means the text module carries no content and will not
/// produce a block.
pub trait TextParser: Send + Sync {
    fn parse(&self, raw: &str) -> Vec<InlineNode>;
}

/// Default [`TextParser`] for the HTML fragments Divi stores in text modules.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTextParser;

impl TextParser for HtmlTextParser {
    fn parse(&self, raw: &str) -> Vec<InlineNode> {
        parse_inline(raw)
    }
}

impl<F> TextParser for F
where
    F: Fn(&str) -> Vec<InlineNode> + Send + Sync,
{
    fn parse(&self, raw: &str) -> Vec<InlineNode> {
        self(raw)
    }
}

/// Parses an HTML fragment into a sequence of [`InlineNode`]s.
///
/// Whitespace is collapsed, entities decoded, and consecutive runs with the
/// same marks and link are merged. `Break` never appears first, last or twice
/// in a row.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s);
    let mut runs = Runs::default();
    let mut text_start = cur.pos();

    while !cur.eof() {
        if cur.peek() != Some(HtmlTag::OPEN) {
            cur.bump();
            continue;
        }

        let tag_start = cur.pos();
        if let Some(end) = try_skip_comment(&cur) {
            runs.push_text(cur.slice(text_start, tag_start));
            cur.bump_n(end - tag_start);
            text_start = cur.pos();
            continue;
        }
        if let Some((end, body)) = try_read_tag(&cur) {
            runs.push_text(cur.slice(text_start, tag_start));
            runs.apply_tag(body);
            cur.bump_n(end - tag_start);
            text_start = cur.pos();
            continue;
        }
        // Not a tag: `<` is literal text.
        cur.bump();
    }

    runs.push_text(cur.slice(text_start, cur.pos().min(s.len())));
    runs.finish()
}

/// Returns the position just past `-->` if the cursor is at a closed comment.
fn try_skip_comment(cur: &Cursor<'_>) -> Option<usize> {
    if !cur.starts_with(HtmlTag::COMMENT_OPEN) {
        return None;
    }
    cur.find_end_of(HtmlTag::COMMENT_CLOSE)
}

/// Returns `(end, body)` if the cursor is at a well-formed tag, where `end`
/// is just past `>` and `body` is the text between the angle brackets.
fn try_read_tag<'a>(cur: &Cursor<'a>) -> Option<(usize, &'a str)> {
    let start = cur.pos();
    let close = cur.find_byte(HtmlTag::CLOSE)?;
    let body = cur.slice(start + 1, close);
    HtmlTag::name(body)?;
    Some((close + 1, body))
}

static BLANK_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r?\n[ \t]*\r?\n").expect("Invalid blank line regex"));

/// Accumulates runs while tracking open marks, links and pending separators.
#[derive(Default)]
struct Runs {
    out: Vec<InlineNode>,
    marks: Vec<Mark>,
    links: Vec<Option<String>>,
    pending_break: bool,
    pending_space: bool,
}

impl Runs {
    fn push_text(&mut self, raw: &str) {
        for (i, paragraph) in BLANK_LINE.split(raw).enumerate() {
            if i > 0 {
                self.request_break();
            }
            self.push_paragraph_text(paragraph);
        }
    }

    fn push_paragraph_text(&mut self, raw: &str) {
        if raw.is_empty() {
            return;
        }
        let decoded = html_escape::decode_html_entities(raw);
        let leading = decoded.starts_with(char::is_whitespace);
        let trailing = decoded.ends_with(char::is_whitespace);
        let words = decoded.split_whitespace().collect::<Vec<_>>().join(" ");

        if words.is_empty() {
            if !self.out.is_empty() && !self.pending_break {
                self.pending_space = true;
            }
            return;
        }

        self.emit(words, leading);
        self.pending_space = trailing;
    }

    fn emit(&mut self, mut text: String, leading_space: bool) {
        if self.pending_break {
            if !self.out.is_empty() {
                self.out.push(InlineNode::Break);
            }
            self.pending_break = false;
        } else if !self.out.is_empty() {
            if leading_space {
                text.insert(0, ' ');
            } else if self.pending_space
                && let Some(InlineNode::Span { text: prev, .. }) = self.out.last_mut()
            {
                prev.push(' ');
            }
        }
        self.pending_space = false;

        let marks = self.active_marks();
        let href = self.active_link();
        if let Some(InlineNode::Span {
            text: prev,
            marks: prev_marks,
            href: prev_href,
        }) = self.out.last_mut()
            && *prev_marks == marks
            && *prev_href == href
        {
            prev.push_str(&text);
            return;
        }
        self.out.push(InlineNode::Span { text, marks, href });
    }

    fn request_break(&mut self) {
        if !self.out.is_empty() {
            self.pending_break = true;
            self.pending_space = false;
        }
    }

    fn apply_tag(&mut self, body: &str) {
        let Some((closing, name)) = HtmlTag::name(body) else {
            return;
        };

        if BlockBoundary::is_boundary(&name) {
            self.request_break();
        } else if let Some(mark) = Mark::from_tag(&name) {
            if closing {
                if let Some(idx) = self.marks.iter().rposition(|m| *m == mark) {
                    self.marks.remove(idx);
                }
            } else {
                self.marks.push(mark);
            }
        } else if name == Link::TAG {
            if closing {
                self.links.pop();
            } else {
                let href = Link::href(body)
                    .map(|h| html_escape::decode_html_entities(h).into_owned());
                self.links.push(href);
            }
        }
    }

    /// Open marks in first-opened order, without duplicates.
    fn active_marks(&self) -> Vec<Mark> {
        let mut marks = Vec::with_capacity(self.marks.len());
        for m in &self.marks {
            if !marks.contains(m) {
                marks.push(*m);
            }
        }
        marks
    }

    fn active_link(&self) -> Option<String> {
        self.links.iter().rev().find_map(|l| l.clone())
    }

    fn finish(self) -> Vec<InlineNode> {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_simple_text() {
        assert_eq!(parse_inline("Hello"), vec![InlineNode::plain("Hello")]);
    }

    #[test]
    fn empty_paragraph_yields_nothing() {
        assert!(parse_inline("<p></p>").is_empty());
        assert!(parse_inline("  \n\t ").is_empty());
        assert!(parse_inline("<p>&nbsp;</p>").is_empty());
    }

    #[test]
    fn paragraphs_are_separated_by_breaks() {
        assert_eq!(
            parse_inline("<p>One</p>\n<p>Two</p>"),
            vec![
                InlineNode::plain("One"),
                InlineNode::Break,
                InlineNode::plain("Two"),
            ]
        );
    }

    #[test]
    fn blank_lines_are_breaks() {
        assert_eq!(
            parse_inline("One\n\nTwo\r\n  \r\nThree"),
            vec![
                InlineNode::plain("One"),
                InlineNode::Break,
                InlineNode::plain("Two"),
                InlineNode::Break,
                InlineNode::plain("Three"),
            ]
        );
    }

    #[test]
    fn marks_split_runs() {
        assert_eq!(
            parse_inline("a <strong>b</strong> c"),
            vec![
                InlineNode::plain("a "),
                InlineNode::marked("b", &[Mark::Strong]),
                InlineNode::plain(" c"),
            ]
        );
    }

    #[test]
    fn nested_marks_accumulate() {
        assert_eq!(
            parse_inline("<b>bold <i>both</i></b>"),
            vec![
                InlineNode::marked("bold ", &[Mark::Strong]),
                InlineNode::marked("both", &[Mark::Strong, Mark::Em]),
            ]
        );
    }

    #[test]
    fn links_carry_href() {
        assert_eq!(
            parse_inline(r#"See <a href="https://x.test/?a=1&amp;b=2">docs</a>."#),
            vec![
                InlineNode::plain("See "),
                InlineNode::link("docs", "https://x.test/?a=1&b=2"),
                InlineNode::plain("."),
            ]
        );
    }

    #[test]
    fn entities_are_decoded() {
        assert_eq!(
            parse_inline("Fish &amp; Chips"),
            vec![InlineNode::plain("Fish & Chips")]
        );
    }

    #[test]
    fn lone_angle_bracket_is_text() {
        assert_eq!(parse_inline("a < b"), vec![InlineNode::plain("a < b")]);
        assert_eq!(parse_inline("x <"), vec![InlineNode::plain("x <")]);
    }

    #[test]
    fn unknown_tags_and_comments_are_skipped() {
        assert_eq!(
            parse_inline(r#"<span class="x">kept</span><!-- dropped --> too"#),
            vec![InlineNode::plain("kept too")]
        );
    }

    #[test]
    fn unterminated_comment_is_text() {
        assert_eq!(parse_inline("<!-- open"), vec![InlineNode::plain("<!-- open")]);
    }

    #[test]
    fn breaks_never_lead_trail_or_double() {
        assert_eq!(
            parse_inline("<br><p>Only</p><br/><br/>"),
            vec![InlineNode::plain("Only")]
        );
    }

    #[test]
    fn closures_satisfy_text_parser() {
        let parser = |raw: &str| vec![InlineNode::plain(raw.to_uppercase())];
        assert_eq!(parser.parse("hi"), vec![InlineNode::plain("HI")]);
    }
}
