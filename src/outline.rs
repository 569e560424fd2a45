//! Anchor assignment and table-of-contents construction.
//!
//! Both serializers must agree exactly on which heading gets which anchor id
//! and which entries the table of contents lists. That agreement is enforced
//! structurally: [`outline_article`] runs the block parser over every
//! section, assigns every anchor, and hands back an [`Outline`] that pairs
//! anchors with the blocks they belong to. The serializers read ids off the
//! outline and never mint their own.
//!
//! # Anchor scheme
//!
//! - section `i` (0-based position) → `section-{i+1}`
//! - sub-heading ordinal `k` (1-based, reset per section) → `section-{i+1}-h3-{k}`
//!
//! Anchors are positional, never derived from heading text, so two sections
//! titled identically still get distinct ids. Numbering is 1-based in every
//! output target; tests pin this down since the historical behavior differed
//! between targets.

use crate::blocks::{Block, parse_blocks};
use crate::types::Article;
use serde::{Deserialize, Serialize};

/// One table-of-contents row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Anchor id, matching the `id` attribute of the rendered heading.
    pub id: String,
    /// Display text, verbatim from the heading.
    pub text: String,
    /// 2 for section headings, 3 for sub-headings.
    pub level: u8,
}

/// A block with its anchor resolved, ready for either serializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnchoredBlock {
    SubHeading { anchor: String, text: String },
    Paragraph { lines: Vec<String> },
}

/// A section with its anchor and parsed, anchored body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlinedSection {
    pub anchor: String,
    pub heading: String,
    pub blocks: Vec<AnchoredBlock>,
}

/// The shared structural skeleton both serializers consume.
///
/// `toc` is in document order, depth-first: each section's level-2 entry
/// followed by that section's level-3 entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outline {
    pub toc: Vec<TocEntry>,
    pub sections: Vec<OutlinedSection>,
}

/// Anchor for the section at 0-based position `index`.
pub fn section_anchor(index: usize) -> String {
    format!("section-{}", index + 1)
}

/// Anchor for the `ordinal`-th (1-based) sub-heading inside a section.
pub fn sub_heading_anchor(section_anchor: &str, ordinal: usize) -> String {
    format!("{}-h3-{}", section_anchor, ordinal)
}

/// Parse every section and assign all anchors. Total over any article.
pub fn outline_article(article: &Article) -> Outline {
    let mut toc = Vec::new();
    let mut sections = Vec::with_capacity(article.sections.len());

    for (index, section) in article.sections.iter().enumerate() {
        let anchor = section_anchor(index);
        toc.push(TocEntry {
            id: anchor.clone(),
            text: section.heading.clone(),
            level: 2,
        });

        let mut ordinal = 0;
        let blocks = parse_blocks(&section.content)
            .into_iter()
            .map(|block| match block {
                Block::SubHeading { text } => {
                    ordinal += 1;
                    let id = sub_heading_anchor(&anchor, ordinal);
                    toc.push(TocEntry {
                        id: id.clone(),
                        text: text.clone(),
                        level: 3,
                    });
                    AnchoredBlock::SubHeading { anchor: id, text }
                }
                Block::Paragraph { lines } => AnchoredBlock::Paragraph { lines },
            })
            .collect();

        sections.push(OutlinedSection {
            anchor,
            heading: section.heading.clone(),
            blocks,
        });
    }

    Outline { toc, sections }
}

impl Outline {
    /// All anchor ids present in the rendered body, in document order.
    ///
    /// By construction this equals the ids referenced from `toc`; tests for
    /// both serializers assert the same equality against their real output.
    pub fn body_anchors(&self) -> Vec<&str> {
        let mut anchors = Vec::new();
        for section in &self.sections {
            anchors.push(section.anchor.as_str());
            for block in &section.blocks {
                if let AnchoredBlock::SubHeading { anchor, .. } = block {
                    anchors.push(anchor.as_str());
                }
            }
        }
        anchors
    }
}
