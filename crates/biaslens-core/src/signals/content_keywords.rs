//! Weighted political-keyword signal.
//!
//! Scores the body text against two static phrase tables, one per polarity.
//! Weights (0.3–0.9) track phrase specificity: "green new deal" pins the
//! author's frame far harder than "progressive" does.

use crate::domain::{ArticleInput, SignalKind, SignalResult};
use crate::signals::phrase;

/// Phrases that skew liberal (positive polarity).
const LIBERAL_PHRASES: &[(&str, f64)] = &[
    ("green new deal", 0.9),
    ("defund the police", 0.9),
    ("systemic racism", 0.9),
    ("climate emergency", 0.8),
    ("social justice", 0.8),
    ("racial equity", 0.8),
    ("reproductive rights", 0.8),
    ("voter suppression", 0.8),
    ("gun violence epidemic", 0.8),
    ("marginalized communities", 0.8),
    ("white nationalism", 0.8),
    ("tax the rich", 0.8),
    ("climate crisis", 0.7),
    ("undocumented immigrants", 0.7),
    ("universal healthcare", 0.7),
    ("corporate greed", 0.7),
    ("lgbtq rights", 0.7),
    ("income inequality", 0.6),
    ("living wage", 0.6),
    ("big oil", 0.6),
    ("far-right", 0.6),
    ("workers' rights", 0.5),
    ("affordable housing", 0.4),
    ("progressive", 0.3),
];

/// Phrases that skew conservative (negative polarity).
const CONSERVATIVE_PHRASES: &[(&str, f64)] = &[
    ("radical left", 0.9),
    ("deep state", 0.9),
    ("woke agenda", 0.9),
    ("socialist agenda", 0.9),
    ("gun grab", 0.9),
    ("illegal aliens", 0.8),
    ("open borders", 0.8),
    ("america first", 0.8),
    ("mainstream media bias", 0.8),
    ("border crisis", 0.7),
    ("cancel culture", 0.7),
    ("critical race theory", 0.7),
    ("government overreach", 0.7),
    ("second amendment rights", 0.7),
    ("pro-life", 0.7),
    ("fake news", 0.7),
    ("traditional values", 0.6),
    ("religious liberty", 0.6),
    ("big government", 0.6),
    ("job creators", 0.6),
    ("illegal immigrants", 0.6),
    ("family values", 0.5),
    ("law and order", 0.5),
    ("patriot", 0.3),
];

/// Total weighted sum at which confidence saturates.
const CONFIDENCE_SCALE: f64 = 20.0;

/// Confidence ceiling for this signal.
const MAX_CONFIDENCE: f64 = 0.8;

/// Score weighted political phrases in the body text.
///
/// `None` below the length gate. Past the gate this always produces a
/// result: zero hits on both tables yields the in-band neutral.
pub fn evaluate(article: &ArticleInput) -> Option<SignalResult> {
    if !article.has_scorable_text() {
        return None;
    }

    let text = article.text.to_lowercase();
    let liberal = phrase::tally(&text, LIBERAL_PHRASES);
    let conservative = phrase::tally(&text, CONSERVATIVE_PHRASES);
    let total = liberal.sum + conservative.sum;

    if total == 0.0 {
        return Some(SignalResult::abstention(
            SignalKind::ContentKeywords,
            "no weighted political phrases matched",
        ));
    }

    let score = ((liberal.sum - conservative.sum) / total).clamp(-1.0, 1.0);
    let confidence = (total / CONFIDENCE_SCALE).min(MAX_CONFIDENCE);

    let mut details: Vec<String> = liberal
        .hits
        .iter()
        .map(|h| format!("liberal {h}"))
        .collect();
    details.extend(conservative.hits.iter().map(|h| format!("conservative {h}")));

    Some(
        SignalResult::new(
            SignalKind::ContentKeywords,
            score,
            confidence,
            format!(
                "{} liberal-leaning and {} conservative-leaning phrase(s) matched",
                liberal.hits.len(),
                conservative.hits.len()
            ),
        )
        .with_details(details),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(text: &str) -> ArticleInput {
        ArticleInput {
            text: text.to_string(),
            ..Default::default()
        }
    }

    fn padded(text: &str) -> ArticleInput {
        // Pad neutral filler past the length gate without adding phrases.
        article(&format!("{text} {}", "the quick brown fox jumps over the lazy dog. ".repeat(4)))
    }

    #[test]
    fn test_short_text_is_missing() {
        assert!(evaluate(&article("green new deal")).is_none());
    }

    #[test]
    fn test_single_polarity_high_weight_phrase() {
        let result = evaluate(&padded("The senator embraced the green new deal.")).unwrap();
        assert!(result.score > 0.0);
        assert!(result.confidence > 0.0);
        assert!(result.details.iter().any(|d| d.contains("green new deal")));
    }

    #[test]
    fn test_conservative_phrase_scores_negative() {
        let result = evaluate(&padded("Critics called it a woke agenda and a gun grab.")).unwrap();
        assert!(result.score < 0.0);
    }

    #[test]
    fn test_single_polarity_is_saturated() {
        // Only one table matched, so the normalized ratio pins to that sign.
        let result = evaluate(&padded("radical left radical left")).unwrap();
        assert_eq!(result.score, -1.0);
    }

    #[test]
    fn test_no_hits_yields_neutral_not_missing() {
        let result = evaluate(&padded("A calm report on municipal road maintenance.")).unwrap();
        assert_eq!(result.score, 0.0);
        assert_eq!(result.confidence, 0.1);
    }

    #[test]
    fn test_confidence_grows_with_matches_and_caps() {
        let light = evaluate(&padded("green new deal")).unwrap();
        let heavy = evaluate(&padded(&"green new deal ".repeat(40))).unwrap();
        assert!(heavy.confidence > light.confidence);
        assert!(heavy.confidence <= 0.8);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let result = evaluate(&padded("GREEN NEW DEAL")).unwrap();
        assert!(result.score > 0.0);
    }
}
