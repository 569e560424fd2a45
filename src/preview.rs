//! The interactive preview render tree.
//!
//! The preview target is an on-screen, scroll-linked view driven by an
//! external UI layer. That layer consumes a typed, serializable
//! [`PreviewTree`] rather than an HTML string, so it can wire its own
//! scrolling and highlighting to the anchors. [`render_preview`] turns the
//! same tree into markup for display; it exists so tests (and a terminal
//! user) can see exactly what the UI would show.
//!
//! Structure comes from [`crate::outline`] and inline emphasis from
//! [`crate::inline`] — the same sources the standalone HTML serializer uses,
//! which is what keeps the two outputs structurally identical.

use crate::inline::{Span, parse_spans, spans_to_markup};
use crate::outline::{AnchoredBlock, TocEntry, outline_article};
use crate::types::Article;
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

/// The full render tree for one article preview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewTree {
    pub title: String,
    pub meta_description: String,
    /// Document-order TOC, level-2 and level-3 entries interleaved.
    pub toc: Vec<TocEntry>,
    pub sections: Vec<PreviewSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewSection {
    pub anchor: String,
    pub heading: String,
    pub blocks: Vec<PreviewBlock>,
}

/// A body node with inline emphasis already resolved into spans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PreviewBlock {
    SubHeading {
        anchor: String,
        text: String,
    },
    /// One paragraph; each inner `Vec<Span>` is one visual line, rendered
    /// with a line break between lines.
    Paragraph {
        lines: Vec<Vec<Span>>,
    },
}

/// Build the preview tree for an article. Pure: no I/O, no side effects.
pub fn build_preview(article: &Article) -> PreviewTree {
    let outline = outline_article(article);

    let sections = outline
        .sections
        .into_iter()
        .map(|section| PreviewSection {
            anchor: section.anchor,
            heading: section.heading,
            blocks: section
                .blocks
                .into_iter()
                .map(|block| match block {
                    AnchoredBlock::SubHeading { anchor, text } => {
                        PreviewBlock::SubHeading { anchor, text }
                    }
                    AnchoredBlock::Paragraph { lines } => PreviewBlock::Paragraph {
                        lines: lines.iter().map(|line| parse_spans(line)).collect(),
                    },
                })
                .collect(),
        })
        .collect();

    PreviewTree {
        title: article.title.clone(),
        meta_description: article.meta_description.clone(),
        toc: outline.toc,
        sections,
    }
}

/// Render the tree as display markup.
///
/// Level-3 TOC entries are grouped under their owning level-2 entry as an
/// indented sub-list; every entry links to its anchor.
pub fn render_preview(tree: &PreviewTree) -> Markup {
    html! {
        div.article-preview {
            h1.article-title { (tree.title) }
            (render_toc_panel(&tree.toc))
            @for section in &tree.sections {
                section.preview-section id=(section.anchor) {
                    h2 { (section.heading) }
                    @for block in &section.blocks {
                        (render_block(block))
                    }
                }
            }
        }
    }
}

fn render_toc_panel(toc: &[TocEntry]) -> Markup {
    // Group each level-2 entry with the level-3 entries that follow it.
    let mut groups: Vec<(&TocEntry, Vec<&TocEntry>)> = Vec::new();
    for entry in toc {
        if entry.level == 2 {
            groups.push((entry, Vec::new()));
        } else if let Some((_, children)) = groups.last_mut() {
            children.push(entry);
        }
    }

    html! {
        nav.toc-panel {
            p.toc-title { "目次" }
            ul {
                @for (section, children) in &groups {
                    li {
                        a href={ "#" (section.id) } { (section.text) }
                        @if !children.is_empty() {
                            ul {
                                @for child in children {
                                    li {
                                        a href={ "#" (child.id) } { (child.text) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_block(block: &PreviewBlock) -> Markup {
    match block {
        PreviewBlock::SubHeading { anchor, text } => html! {
            h3 id=(anchor) { (text) }
        },
        PreviewBlock::Paragraph { lines } => html! {
            p {
                @for (i, line) in lines.iter().enumerate() {
                    @if i > 0 { br; }
                    (spans_to_markup(line))
                }
            }
        },
    }
}
