//! # Block Assembly
//!
//! Recursive conversion of shortcode markup into page-builder [`Node`]s.
//!
//! ## Stages
//!
//! 1. **Sections** (`Assembler::assemble`): each `et_pb_section` is split into
//!    its columns. One column is spliced flat into the output; several
//!    columns become a single `ColumnsBlock` holding the non-empty ones.
//! 2. **Children** (`children`): inside a column or row, rows, images, texts
//!    and buttons are extracted in four independent passes and merged back
//!    into source order by offset.
//! 3. **Leaves** (`leaf`): images, buttons and texts become terminal nodes;
//!    rows recurse into stage 2.
//!
//! ## Key Invariants
//!
//! - Sibling order follows source offsets at every level
//! - Empty texts, rows, columns and sections produce no node at all
//! - A row with one item is that item; a section with one column is its items
//! - Conversion never fails: unrecognized or broken markup just yields less

pub mod children;
pub mod leaf;

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    keys::{KeyGenerator, UuidKeys},
    models::{ColumnGroup, ColumnsBlock, Node},
    parsing::{
        inline::{HtmlTextParser, TextParser},
        shortcode::{BlockKind, extract, extract_with_offsets, kinds::any_open_tag},
    },
};

pub use children::merge_by_offset;
pub use leaf::asset_reference;

/// Converts shortcode markup using an injected text parser and key source.
///
/// Holds no state of its own; one assembler can convert any number of pages.
pub struct Assembler<'a> {
    text_parser: &'a dyn TextParser,
    keys: &'a dyn KeyGenerator,
}

/// Side-channel summary of one page conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageReport {
    /// `et_pb_section` blocks found in the page.
    pub sections_found: usize,
    /// Sections that contributed at least one node.
    pub sections_retained: usize,
    /// Top-level nodes in the output.
    pub blocks_emitted: usize,
    /// Opening `et_pb_*` tags the converter does not handle, by name.
    pub inert_tags: BTreeMap<String, usize>,
    /// Opening tags of handled kinds whose pattern never matched there, by
    /// name. An `[et_pb_button]` without attributes or an unterminated
    /// `[et_pb_text]` lands here.
    pub unmatched_tags: BTreeMap<String, usize>,
}

impl PageReport {
    pub fn sections_dropped(&self) -> usize {
        self.sections_found - self.sections_retained
    }
}

impl<'a> Assembler<'a> {
    pub fn new(text_parser: &'a dyn TextParser, keys: &'a dyn KeyGenerator) -> Self {
        Self { text_parser, keys }
    }

    /// Converts a page body into its ordered top-level nodes.
    pub fn assemble(&self, source: &str) -> Vec<Node> {
        let mut out = vec![];
        for section in extract(source, BlockKind::Section) {
            out.extend(self.assemble_section(section));
        }
        out
    }

    /// Like [`Assembler::assemble`], also reporting what was found versus kept.
    ///
    /// `title` only labels the log output.
    pub fn assemble_page(&self, source: &str, title: &str) -> (Vec<Node>, PageReport) {
        let sections = extract(source, BlockKind::Section);
        log::info!("Found {} sections in page {title}", sections.len());

        let mut report = PageReport {
            sections_found: sections.len(),
            inert_tags: inert_tags(source),
            unmatched_tags: unmatched_tags(source),
            ..PageReport::default()
        };

        let mut out = vec![];
        for (i, section) in sections.into_iter().enumerate() {
            let nodes = self.assemble_section(section);
            if nodes.is_empty() {
                log::debug!("Section {i} of page {title} produced no blocks");
            } else {
                report.sections_retained += 1;
            }
            out.extend(nodes);
        }
        report.blocks_emitted = out.len();

        if report.sections_dropped() > 0 {
            log::info!(
                "Page {title}: kept {} of {} sections ({} blocks)",
                report.sections_retained,
                report.sections_found,
                report.blocks_emitted
            );
        }

        (out, report)
    }

    fn assemble_section(&self, section: &str) -> Vec<Node> {
        let columns = extract(section, BlockKind::Column);

        if let [only] = columns.as_slice() {
            return self.build_children(only);
        }

        let groups: Vec<ColumnGroup> = columns
            .into_iter()
            .filter_map(|col| {
                let items = self.build_children(col);
                if items.is_empty() {
                    return None;
                }
                Some(ColumnGroup {
                    key: self.keys.next_key(),
                    items,
                })
            })
            .collect();

        if groups.is_empty() {
            return vec![];
        }
        vec![Node::Columns(ColumnsBlock {
            key: self.keys.next_key(),
            columns: groups,
        })]
    }
}

/// Counts opening `et_pb_*` tags whose name no block kind handles.
pub fn inert_tags(source: &str) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for caps in any_open_tag().captures_iter(source) {
        let name = &caps[1];
        if !BlockKind::recognizes(name) {
            *counts.entry(name.to_string()).or_insert(0) += 1;
        }
    }
    counts
}

/// Counts opening tags of handled kinds that their kind's pattern did not
/// match at that position.
///
/// Each kind is scanned over the whole source, so this sees malformed tags
/// but not well-formed ones sitting outside any section or column.
pub fn unmatched_tags(source: &str) -> BTreeMap<String, usize> {
    let mut starts: BTreeMap<BlockKind, BTreeSet<usize>> = BTreeMap::new();
    let mut counts = BTreeMap::new();
    for caps in any_open_tag().captures_iter(source) {
        let (Some(tag), Some(kind)) = (caps.get(0), BlockKind::for_tag(&caps[1])) else {
            continue;
        };
        let matched = starts.entry(kind).or_insert_with(|| {
            extract_with_offsets(source, kind)
                .into_iter()
                .map(|block| block.offset)
                .collect()
        });
        if !matched.contains(&tag.start()) {
            *counts.entry(caps[1].to_string()).or_insert(0) += 1;
        }
    }
    counts
}

/// Converts markup with the bundled HTML text parser and random keys.
pub fn convert(source: &str) -> Vec<Node> {
    let keys = UuidKeys::default();
    Assembler::new(&HtmlTextParser, &keys).assemble(source)
}
