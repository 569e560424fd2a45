//! Inline emphasis parsing shared by both rendering targets.
//!
//! The body markup supports exactly two inline forms: `**bold**` and
//! `*italic*`. Both the preview tree and the standalone HTML document pass
//! every paragraph line through [`parse_spans`] and render the result with
//! [`spans_to_markup`] — there is intentionally a single implementation, so
//! the two outputs can never disagree on emphasis.
//!
//! Matching rules:
//!
//! 1. `**X**` wins first, shortest non-empty enclosed span.
//! 2. `*X*` is matched inside the remaining plain-text runs, and only where
//!    neither delimiter touches another `*`.
//!
//! Emphasis does not nest: text inside a bold span is not re-scanned for
//! italics. Unbalanced delimiters are left as literal characters — malformed
//! input degrades, it never fails.

use maud::{Markup, html};
use serde::{Deserialize, Serialize};

/// One run of inline content within a paragraph line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Span {
    Text(String),
    Strong(String),
    Em(String),
}

/// Parse one paragraph line into its inline span sequence.
///
/// Total: any input produces a span list whose concatenated text (plus
/// delimiters of matched spans) reproduces the input.
pub fn parse_spans(line: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    for piece in split_strong(line) {
        match piece {
            StrongPiece::Strong(text) => spans.push(Span::Strong(text.to_string())),
            StrongPiece::Plain(text) => split_em(text, &mut spans),
        }
    }
    spans
}

/// Render a span sequence as HTML. Maud escapes the text of every variant,
/// so AI-supplied content cannot inject markup.
pub fn spans_to_markup(spans: &[Span]) -> Markup {
    html! {
        @for span in spans {
            @match span {
                Span::Text(t) => { (t) }
                Span::Strong(t) => { strong { (t) } }
                Span::Em(t) => { em { (t) } }
            }
        }
    }
}

enum StrongPiece<'a> {
    Plain(&'a str),
    Strong(&'a str),
}

/// First pass: carve `**X**` spans out of the line.
///
/// On seeing `**`, the closer is the nearest later `**` leaving at least one
/// enclosed character. An unclosed `**` stays literal.
fn split_strong(line: &str) -> Vec<StrongPiece<'_>> {
    let bytes = line.as_bytes();
    let mut pieces = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'*' && i + 1 < bytes.len() && bytes[i + 1] == b'*' {
            if let Some(close) = find_double_star(bytes, i + 3) {
                if plain_start < i {
                    pieces.push(StrongPiece::Plain(&line[plain_start..i]));
                }
                pieces.push(StrongPiece::Strong(&line[i + 2..close]));
                i = close + 2;
                plain_start = i;
            } else {
                // No closer anywhere: both stars are literal.
                i += 2;
            }
        } else {
            i += 1;
        }
    }
    if plain_start < bytes.len() {
        pieces.push(StrongPiece::Plain(&line[plain_start..]));
    }
    pieces
}

/// Find the next `**` at or after `from`.
fn find_double_star(bytes: &[u8], from: usize) -> Option<usize> {
    let mut i = from;
    while i + 1 < bytes.len() {
        if bytes[i] == b'*' && bytes[i + 1] == b'*' {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Second pass: carve `*X*` spans out of a plain-text run.
///
/// A delimiter only counts when it stands alone — a `*` adjacent to another
/// `*` belonged to a (possibly unbalanced) bold marker and stays literal.
fn split_em(text: &str, spans: &mut Vec<Span>) {
    let bytes = text.as_bytes();
    let mut plain_start = 0;
    let mut i = 0;

    let lone_star = |idx: usize| {
        bytes[idx] == b'*'
            && (idx == 0 || bytes[idx - 1] != b'*')
            && (idx + 1 == bytes.len() || bytes[idx + 1] != b'*')
    };

    while i < bytes.len() {
        if lone_star(i) {
            // Nearest lone-star closer with a non-empty enclosed span.
            let close = (i + 2..bytes.len()).find(|&k| lone_star(k));
            if let Some(close) = close {
                if plain_start < i {
                    spans.push(Span::Text(text[plain_start..i].to_string()));
                }
                spans.push(Span::Em(text[i + 1..close].to_string()));
                i = close + 1;
                plain_start = i;
                continue;
            }
        }
        i += 1;
    }
    if plain_start < bytes.len() {
        spans.push(Span::Text(text[plain_start..].to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Span {
        Span::Text(s.to_string())
    }

    fn strong(s: &str) -> Span {
        Span::Strong(s.to_string())
    }

    fn em(s: &str) -> Span {
        Span::Em(s.to_string())
    }

    #[test]
    fn bold_in_plain_text() {
        assert_eq!(
            parse_spans("a **b** c"),
            vec![text("a "), strong("b"), text(" c")]
        );
    }

    #[test]
    fn italic_in_plain_text() {
        assert_eq!(
            parse_spans("a *b* c"),
            vec![text("a "), em("b"), text(" c")]
        );
    }

    #[test]
    fn bold_takes_precedence_over_italic() {
        assert_eq!(
            parse_spans("**bold** and *italic*"),
            vec![strong("bold"), text(" and "), em("italic")]
        );
    }

    #[test]
    fn bold_matching_is_non_greedy() {
        assert_eq!(
            parse_spans("**a** mid **b**"),
            vec![strong("a"), text(" mid "), strong("b")]
        );
    }

    #[test]
    fn lone_star_is_literal() {
        assert_eq!(parse_spans("3 * 4 = 12"), vec![text("3 * 4 = 12")]);
    }

    #[test]
    fn unclosed_bold_is_literal() {
        assert_eq!(parse_spans("**open"), vec![text("**open")]);
    }

    #[test]
    fn unclosed_italic_is_literal() {
        assert_eq!(parse_spans("half *open"), vec![text("half *open")]);
    }

    #[test]
    fn empty_bold_is_literal() {
        assert_eq!(parse_spans("****"), vec![text("****")]);
    }

    #[test]
    fn italic_not_matched_inside_bold() {
        assert_eq!(parse_spans("**a *b* c**"), vec![strong("a *b* c")]);
    }

    #[test]
    fn stars_adjacent_to_broken_bold_stay_literal() {
        // The leading "**" never closes, so none of the stars pair up.
        assert_eq!(parse_spans("***x*"), vec![text("***x*")]);
    }

    #[test]
    fn consecutive_italics() {
        assert_eq!(
            parse_spans("*a* *b*"),
            vec![em("a"), text(" "), em("b")]
        );
    }

    #[test]
    fn multibyte_text_inside_emphasis() {
        assert_eq!(
            parse_spans("これは**重要**です"),
            vec![text("これは"), strong("重要"), text("です")]
        );
    }

    #[test]
    fn markup_renders_strong_and_em() {
        let html = spans_to_markup(&parse_spans("**b** and *i*")).into_string();
        assert_eq!(html, "<strong>b</strong> and <em>i</em>");
    }

    #[test]
    fn markup_has_no_residual_asterisks() {
        let html = spans_to_markup(&parse_spans("x **b** y *i* z")).into_string();
        assert!(!html.contains('*'));
    }

    #[test]
    fn markup_escapes_html_in_text() {
        let html = spans_to_markup(&parse_spans("<script> **<b>**")).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("<strong>&lt;b&gt;</strong>"));
    }
}
