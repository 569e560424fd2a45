//! CLI output formatting.
//!
//! Output is information-centric: the primary display for every entity is
//! its semantic identity — positional index plus heading text — with the
//! anchor it resolves to shown as trailing context. This reads as a content
//! inventory of the article while still letting users check exactly which
//! link target a heading received.
//!
//! ```text
//! 【完全ガイド】リモートワークとは？
//! 001 リモートワークとは？基礎知識 → #section-1
//!     001 黎明期 → #section-1-h3-1
//!     002 成長期 → #section-1-h3-2
//! 002 まとめ → #section-2
//!
//! 2 sections, 2 sub-headings, 4 TOC entries
//! ```
//!
//! Each display has a `format_*` function returning `Vec<String>` for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::outline::Outline;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format the article outline: title, per-section heading lines with their
/// anchors, sub-headings indented one level, then a totals line.
pub fn format_outline(title: &str, outline: &Outline) -> Vec<String> {
    let mut lines = vec![title.to_string()];

    let mut sub_total = 0;
    let mut section_index = 0;
    for section in &outline.sections {
        section_index += 1;
        lines.push(format!(
            "{} {} → #{}",
            format_index(section_index),
            section.heading,
            section.anchor
        ));
        let mut sub_index = 0;
        for block in &section.blocks {
            if let crate::outline::AnchoredBlock::SubHeading { anchor, text } = block {
                sub_index += 1;
                sub_total += 1;
                lines.push(format!(
                    "{}{} {} → #{}",
                    indent(1),
                    format_index(sub_index),
                    text,
                    anchor
                ));
            }
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "{} sections, {} sub-headings, {} TOC entries",
        outline.sections.len(),
        sub_total,
        outline.toc.len()
    ));
    lines
}

pub fn print_outline(title: &str, outline: &Outline) {
    for line in format_outline(title, outline) {
        println!("{}", line);
    }
}

/// Format the export summary: where the document went and how big it is.
pub fn format_export_summary(path: &Path, bytes: usize, sections: usize) -> Vec<String> {
    vec![format!(
        "{} → {} sections, {} bytes",
        path.display(),
        sections,
        bytes
    )]
}

pub fn print_export_summary(path: &Path, bytes: usize, sections: usize) {
    for line in format_export_summary(path, bytes, sections) {
        println!("{}", line);
    }
}
