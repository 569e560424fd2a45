//! Standalone HTML document serialization.
//!
//! Produces the portable artifact: one complete HTML document with an
//! embedded style block and zero external dependencies — no stylesheet
//! fetch, no script, no network access required to view it. The string is
//! what the surrounding UI copies to the clipboard or writes to a download;
//! this module only builds the payload.
//!
//! Structure (anchors, TOC) comes from [`crate::outline`] and inline
//! emphasis from [`crate::inline`], the same sources the preview uses, so
//! the document and the preview can never disagree on navigation targets.
//!
//! Serialization is deterministic: the same article yields byte-identical
//! output on every call. No timestamps, no generated ids, no ordering that
//! depends on anything but the article itself.

use crate::inline::{parse_spans, spans_to_markup};
use crate::outline::{AnchoredBlock, Outline, outline_article};
use crate::types::Article;
use maud::{DOCTYPE, Markup, html};

/// Inlined into every document; compiled in so the output never references
/// an external stylesheet.
const ARTICLE_CSS: &str = include_str!("../static/article.css");

/// Serialize an article as a self-contained HTML document.
pub fn export_article(article: &Article) -> String {
    let outline = outline_article(article);

    let markup = html! {
        (DOCTYPE)
        html lang="ja" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(article.meta_description);
                title { (article.title) }
                style { (ARTICLE_CSS) }
            }
            body {
                article {
                    h1 { (article.title) }
                    (render_toc(&outline))
                    @for section in &outline.sections {
                        section.article-section {
                            h2 id=(section.anchor) { (section.heading) }
                            div.content {
                                @for block in &section.blocks {
                                    (render_block(block))
                                }
                            }
                        }
                    }
                }
            }
        }
    };
    markup.into_string()
}

/// The flat TOC list: one `li` per entry, level carried as a class so the
/// stylesheet indents level-3 rows.
fn render_toc(outline: &Outline) -> Markup {
    html! {
        div.toc-container {
            p.toc-title { "目次" }
            ul.toc-list {
                @for entry in &outline.toc {
                    li class={ "toc-item-" (entry.level) } {
                        a href={ "#" (entry.id) } { (entry.text) }
                    }
                }
            }
        }
    }
}

fn render_block(block: &AnchoredBlock) -> Markup {
    match block {
        AnchoredBlock::SubHeading { anchor, text } => html! {
            h3 id=(anchor) { (text) }
        },
        // A paragraph is a blank-line-delimited run of lines; line breaks
        // inside the run become explicit <br> elements.
        AnchoredBlock::Paragraph { lines } => html! {
            p {
                @for (i, line) in lines.iter().enumerate() {
                    @if i > 0 { br; }
                    (spans_to_markup(&parse_spans(line)))
                }
            }
        },
    }
}

/// The download filename the UI offers for an exported document: runs of
/// characters outside `[A-Za-z0-9]` become a single `_`, then `.html`.
/// A title with no ASCII-alphanumeric characters at all (common for
/// Japanese titles) would collapse to bare underscores, so it falls back
/// to `article.html`.
pub fn suggested_filename(title: &str) -> String {
    let mut name = String::with_capacity(title.len());
    let mut last_was_gap = false;
    let mut has_alnum = false;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            name.push(c);
            last_was_gap = false;
            has_alnum = true;
        } else if !last_was_gap {
            name.push('_');
            last_was_gap = true;
        }
    }
    if !has_alnum {
        return "article.html".to_string();
    }
    format!("{}.html", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Section;

    fn article(sections: Vec<(&str, &str)>) -> Article {
        Article {
            title: "完全ガイド".to_string(),
            meta_description: "検索結果に出る説明".to_string(),
            sections: sections
                .into_iter()
                .map(|(heading, content)| Section {
                    heading: heading.to_string(),
                    content: content.to_string(),
                })
                .collect(),
        }
    }

    /// Anchor ids as they appear in `id="..."` attributes, in order.
    fn id_attributes(html: &str) -> Vec<String> {
        html.split(r#"id=""#)
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .map(|s| s.to_string())
            .collect()
    }

    /// Anchor ids referenced by `href="#..."` links, in order.
    fn href_targets(html: &str) -> Vec<String> {
        html.split(r##"href="#"##)
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn document_is_complete_and_self_contained() {
        let html = export_article(&article(vec![("A", "body")]));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="ja">"#));
        assert!(html.contains("<style>"));
        assert!(html.contains(".toc-container"));
        assert!(!html.contains("<script"));
        assert!(!html.contains("<link"));
    }

    #[test]
    fn metadata_comes_from_article() {
        let html = export_article(&article(vec![("A", "body")]));
        assert!(html.contains("<title>完全ガイド</title>"));
        assert!(html.contains(r#"<meta name="description" content="検索結果に出る説明">"#));
    }

    #[test]
    fn toc_targets_equal_body_ids() {
        let html = export_article(&article(vec![
            ("第一章", "intro\n\n### 其の一\nx\n\n### 其の二\ny"),
            ("第二章", "no subs"),
        ]));
        assert_eq!(href_targets(&html), id_attributes(&html));
        assert_eq!(
            id_attributes(&html),
            vec![
                "section-1",
                "section-1-h3-1",
                "section-1-h3-2",
                "section-2",
            ]
        );
    }

    #[test]
    fn sections_use_one_based_anchors() {
        let html = export_article(&article(vec![("A", "x"), ("B", "y")]));
        assert!(html.contains(r#"<h2 id="section-1">A</h2>"#));
        assert!(html.contains(r#"<h2 id="section-2">B</h2>"#));
        assert!(!html.contains(r#"id="section-0""#));
    }

    #[test]
    fn sub_headings_render_with_anchors() {
        let html = export_article(&article(vec![("A", "### 小見出し\n本文")]));
        assert!(html.contains(r#"<h3 id="section-1-h3-1">小見出し</h3>"#));
    }

    #[test]
    fn toc_rows_carry_level_classes() {
        let html = export_article(&article(vec![("A", "### s")]));
        assert!(html.contains(r#"class="toc-item-2""#));
        assert!(html.contains(r#"class="toc-item-3""#));
    }

    #[test]
    fn paragraph_line_breaks_become_br() {
        let html = export_article(&article(vec![("A", "one\ntwo\n\nthree")]));
        assert!(html.contains("<p>one<br>two</p>"));
        assert!(html.contains("<p>three</p>"));
    }

    #[test]
    fn inline_emphasis_converted() {
        let html = export_article(&article(vec![("A", "a **b** and *c* and a lone *")]));
        assert!(html.contains("<strong>b</strong>"));
        assert!(html.contains("<em>c</em>"));
        assert!(html.contains("a lone *"));
    }

    #[test]
    fn ai_supplied_text_is_escaped() {
        let html = export_article(&article(vec![("<img onerror=x>", "<script>alert(1)</script>")]));
        assert!(!html.contains("<img onerror"));
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn export_is_deterministic() {
        let a = article(vec![
            ("A", "### one\n**x**\n\ntext"),
            ("B", "*y*"),
        ]);
        assert_eq!(export_article(&a), export_article(&a));
    }

    #[test]
    fn filename_replaces_non_alphanumeric_runs() {
        assert_eq!(
            suggested_filename("SEO Guide 2025: The Basics"),
            "SEO_Guide_2025_The_Basics.html"
        );
    }

    #[test]
    fn filename_for_non_ascii_title_falls_back() {
        assert_eq!(suggested_filename("完全ガイド"), "article.html");
        assert_eq!(suggested_filename("【完全ガイド】とは？"), "article.html");
    }

    #[test]
    fn filename_keeps_ascii_from_mixed_title() {
        assert_eq!(suggested_filename("SEO対策ガイド2025"), "SEO_2025.html");
    }

    #[test]
    fn filename_for_empty_title() {
        assert_eq!(suggested_filename(""), "article.html");
    }
}
