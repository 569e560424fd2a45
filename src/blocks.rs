//! Block parsing for section bodies.
//!
//! A section's `content` is a flat string mixing prose and `### ` sub-heading
//! lines. Both rendering targets need the same structural reading of that
//! string, so parsing happens once here and the serializers consume the
//! resulting [`Block`] sequence — neither target re-scans the raw text.
//!
//! The grammar is deliberately tiny (this is not Markdown):
//!
//! - a line starting with `###` followed by one or more spaces is a
//!   sub-heading; the text after the marker is kept verbatim
//! - a blank line (after trimming) closes the current paragraph
//! - every other line joins the current paragraph, preserving line breaks
//!
//! The scan is a single left-to-right pass over lines with one piece of
//! state: the open paragraph buffer, flushed at blank lines and end of
//! input. Whitespace-only paragraphs are never emitted.

/// A parsed unit of a section body, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A `### ` line. Carries the heading text with the marker stripped.
    SubHeading { text: String },
    /// A contiguous run of non-blank lines between blank lines.
    Paragraph { lines: Vec<String> },
}

/// Split a `### heading` line into its trailing text, if it is one.
///
/// The marker is anchored at line start: exactly three hashes, then at least
/// one space, then non-empty text. `####` or `###text` are ordinary prose.
fn sub_heading_text(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("###")?;
    if rest.starts_with('#') || !rest.starts_with(' ') {
        return None;
    }
    let text = rest.trim_start_matches(' ');
    if text.is_empty() { None } else { Some(text) }
}

/// Parse one section body into its ordered block sequence.
pub fn parse_blocks(content: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<String> = Vec::new();

    let mut flush = |paragraph: &mut Vec<String>, blocks: &mut Vec<Block>| {
        if !paragraph.is_empty() {
            blocks.push(Block::Paragraph {
                lines: std::mem::take(paragraph),
            });
        }
    };

    for line in content.lines() {
        if let Some(text) = sub_heading_text(line) {
            flush(&mut paragraph, &mut blocks);
            blocks.push(Block::SubHeading {
                text: text.to_string(),
            });
        } else if line.trim().is_empty() {
            flush(&mut paragraph, &mut blocks);
        } else {
            paragraph.push(line.to_string());
        }
    }
    flush(&mut paragraph, &mut blocks);

    blocks
}
