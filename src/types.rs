//! The article content model shared by both rendering targets.
//!
//! An [`Article`] is produced upstream by the content generator (an LLM call
//! or a static fallback template — neither lives in this crate) and handed to
//! the pipeline as a finished value. The wire shape uses camelCase field
//! names (`metaDescription`) to match the generator's JSON output.
//!
//! The pipeline never mutates an article: sections keep their order, and a
//! section's only identity is its position in that order (anchor numbering
//! depends on it).

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArticleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid article: {0}")]
    Invalid(String),
}

/// A generated article: title, meta description, and ordered sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    /// Search-result summary, emitted as `<meta name="description">`.
    pub meta_description: String,
    pub sections: Vec<Section>,
}

/// One top-level section: an H2 heading plus its raw body text.
///
/// `content` uses a fixed tiny markup: `### ` lines open sub-headings,
/// blank lines separate paragraphs, `**bold**` and `*italic*` mark inline
/// emphasis. Nothing else is interpreted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    pub content: String,
}

impl Article {
    /// Check the shape the upstream generator is contractually required to
    /// deliver. The renderers assume a validated article and never re-check.
    pub fn validate(&self) -> Result<(), ArticleError> {
        if self.title.trim().is_empty() {
            return Err(ArticleError::Invalid("title is empty".to_string()));
        }
        if self.sections.is_empty() {
            return Err(ArticleError::Invalid("article has no sections".to_string()));
        }
        Ok(())
    }
}

/// Read, parse, and validate an article JSON file.
pub fn load_article(path: &Path) -> Result<Article, ArticleError> {
    let content = std::fs::read_to_string(path)?;
    let article: Article = serde_json::from_str(&content)?;
    article.validate()?;
    Ok(article)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, sections: Vec<Section>) -> Article {
        Article {
            title: title.to_string(),
            meta_description: "desc".to_string(),
            sections,
        }
    }

    fn section(heading: &str) -> Section {
        Section {
            heading: heading.to_string(),
            content: "Body.".to_string(),
        }
    }

    #[test]
    fn valid_article_passes() {
        let a = article("タイトル", vec![section("概要")]);
        assert!(a.validate().is_ok());
    }

    #[test]
    fn empty_title_rejected() {
        let a = article("   ", vec![section("概要")]);
        assert!(matches!(a.validate(), Err(ArticleError::Invalid(_))));
    }

    #[test]
    fn empty_sections_rejected() {
        let a = article("タイトル", vec![]);
        assert!(matches!(a.validate(), Err(ArticleError::Invalid(_))));
    }

    #[test]
    fn wire_shape_uses_camel_case() {
        let json = r#"{
            "title": "t",
            "metaDescription": "m",
            "sections": [{ "heading": "h", "content": "c" }]
        }"#;
        let a: Article = serde_json::from_str(json).unwrap();
        assert_eq!(a.meta_description, "m");
        assert_eq!(a.sections.len(), 1);

        let back = serde_json::to_string(&a).unwrap();
        assert!(back.contains("metaDescription"));
    }
}
