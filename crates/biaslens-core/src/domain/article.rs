//! Canonical article input shape.

use serde::{Deserialize, Serialize};

/// Minimum body length (in characters) for text-derived signals.
///
/// Signals other than domain reputation abstain below this threshold; a
/// headline-sized fragment carries too little text to score.
pub const MIN_SCORABLE_LEN: usize = 100;

/// Metadata accompanying an article body, as produced by the upstream
/// extraction collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleMetadata {
    /// Headline.
    pub title: String,
    /// Publisher domain, e.g. `www.example.com` (normalisation happens at lookup).
    pub domain: String,
    /// Canonical article URL.
    pub url: String,
    /// Byline, when the extractor found one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Publication date, when the extractor found one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// One article to analyze: body text plus extraction metadata.
///
/// Created fresh per request and discarded after the report is returned;
/// nothing in this core persists it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleInput {
    pub text: String,
    pub metadata: ArticleMetadata,
}

impl ArticleInput {
    /// Whether the body is long enough for text-derived signals.
    pub fn has_scorable_text(&self) -> bool {
        self.text.chars().count() >= MIN_SCORABLE_LEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_not_scorable() {
        let article = ArticleInput {
            text: "Breaking news.".to_string(),
            ..Default::default()
        };
        assert!(!article.has_scorable_text());
    }

    #[test]
    fn test_length_gate_boundary() {
        let article = ArticleInput {
            text: "x".repeat(MIN_SCORABLE_LEN),
            ..Default::default()
        };
        assert!(article.has_scorable_text());

        let article = ArticleInput {
            text: "x".repeat(MIN_SCORABLE_LEN - 1),
            ..Default::default()
        };
        assert!(!article.has_scorable_text());
    }

    #[test]
    fn test_serde_roundtrip() {
        let article = ArticleInput {
            text: "Some body text.".to_string(),
            metadata: ArticleMetadata {
                title: "A headline".to_string(),
                domain: "example.com".to_string(),
                url: "https://example.com/a-headline".to_string(),
                author: Some("Jordan Reyes".to_string()),
                date: None,
            },
        };
        let json = serde_json::to_string(&article).unwrap();
        let back: ArticleInput = serde_json::from_str(&json).unwrap();
        assert_eq!(article, back);
    }
}
