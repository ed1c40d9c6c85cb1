//! Rhetorical language-pattern signal.
//!
//! Same accumulation scheme as the keyword signal, but over *how* the text
//! argues rather than what it names: bare certainty assertions skew one way,
//! structural/systemic framing the other. Phrase weights stay in 0.3–0.6 and
//! confidence is capped lower — rhetoric is a weaker tell than vocabulary.

use crate::domain::{ArticleInput, SignalKind, SignalResult};
use crate::signals::phrase;

/// Certainty-assertion phrases; skew conservative (negative polarity).
const CERTAINTY_PHRASES: &[(&str, f64)] = &[
    ("they don't want you to know", 0.6),
    ("everyone knows", 0.5),
    ("common sense tells", 0.5),
    ("no one is talking about", 0.5),
    ("the truth is", 0.4),
    ("wake up", 0.4),
    ("it's obvious that", 0.4),
    ("make no mistake", 0.4),
    ("mark my words", 0.4),
    ("plain and simple", 0.3),
    ("the fact is", 0.3),
    ("believe me", 0.3),
];

/// Structural/systemic-framing phrases; skew liberal (positive polarity).
const SYSTEMIC_PHRASES: &[(&str, f64)] = &[
    ("structural inequality", 0.6),
    ("institutional bias", 0.6),
    ("power structures", 0.6),
    ("disproportionately affects", 0.6),
    ("lived experience", 0.6),
    ("root causes", 0.5),
    ("systemic failure", 0.5),
    ("intersection of", 0.5),
    ("historical context", 0.4),
    ("broader pattern", 0.4),
    ("underlying conditions", 0.4),
    ("social fabric", 0.3),
];

/// Total weighted sum at which confidence saturates.
const CONFIDENCE_SCALE: f64 = 20.0;

/// Confidence ceiling; rhetoric never gets keyword-level trust.
const MAX_CONFIDENCE: f64 = 0.5;

/// Score rhetorical framing phrases in the body text.
///
/// `None` below the length gate; in-band neutral when nothing matches.
pub fn evaluate(article: &ArticleInput) -> Option<SignalResult> {
    if !article.has_scorable_text() {
        return None;
    }

    let text = article.text.to_lowercase();
    let systemic = phrase::tally(&text, SYSTEMIC_PHRASES);
    let certainty = phrase::tally(&text, CERTAINTY_PHRASES);
    let total = systemic.sum + certainty.sum;

    if total == 0.0 {
        return Some(SignalResult::abstention(
            SignalKind::LanguagePatterns,
            "no rhetorical patterns matched",
        ));
    }

    let score = ((systemic.sum - certainty.sum) / total).clamp(-1.0, 1.0);
    let confidence = (total / CONFIDENCE_SCALE).min(MAX_CONFIDENCE);

    let mut details: Vec<String> = systemic
        .hits
        .iter()
        .map(|h| format!("systemic {h}"))
        .collect();
    details.extend(certainty.hits.iter().map(|h| format!("certainty {h}")));

    Some(
        SignalResult::new(
            SignalKind::LanguagePatterns,
            score,
            confidence,
            format!(
                "{} systemic-framing and {} certainty-assertion phrase(s) matched",
                systemic.hits.len(),
                certainty.hits.len()
            ),
        )
        .with_details(details),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn padded(text: &str) -> ArticleInput {
        ArticleInput {
            text: format!(
                "{text} {}",
                "city council reviewed the quarterly budget figures today. ".repeat(3)
            ),
            ..Default::default()
        }
    }

    #[test]
    fn test_short_text_is_missing() {
        let article = ArticleInput {
            text: "wake up".to_string(),
            ..Default::default()
        };
        assert!(evaluate(&article).is_none());
    }

    #[test]
    fn test_certainty_assertions_score_negative() {
        let result = evaluate(&padded(
            "Everyone knows the city failed. Make no mistake, mark my words.",
        ))
        .unwrap();
        assert!(result.score < 0.0);
        assert!(result.confidence <= 0.5);
    }

    #[test]
    fn test_systemic_framing_scores_positive() {
        let result = evaluate(&padded(
            "The report traced root causes and structural inequality in housing.",
        ))
        .unwrap();
        assert!(result.score > 0.0);
    }

    #[test]
    fn test_no_matches_yields_neutral() {
        let result = evaluate(&padded("Nothing rhetorical in this text at all.")).unwrap();
        assert_eq!(result.score, 0.0);
        assert_eq!(result.confidence, 0.1);
    }

    #[test]
    fn test_confidence_never_exceeds_cap() {
        let result = evaluate(&padded(&"lived experience ".repeat(60))).unwrap();
        assert!(result.confidence <= 0.5);
    }
}
