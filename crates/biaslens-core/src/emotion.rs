//! Lexicon-based emotional charge analyzer.
//!
//! Independent of the political axis and never abstains. Each in-lexicon
//! token adds its valence to a compound sum, with two local adjustments: a
//! preceding intensifier (a sub-1.0 positive lexicon entry) scales the
//! current token's valence by `(1 + intensifier)`, and a negator preceding
//! an in-lexicon token subtracts half that token's valence — an approximate
//! flip, not a negation-scope parse. The normalized sum is then sign-
//! inverted: strong valence of either polarity reads as emotional charge,
//! so the published score measures "analyticalness".

use serde::{Deserialize, Serialize};

use crate::domain::EmotionLabel;

/// Floor for the normalization divisor; short texts stay damped.
const MIN_NORM_TOKENS: usize = 10;

/// Tokens that trigger the approximate negation flip.
const NEGATORS: &[&str] = &["not", "no", "never"];

/// Word valence table, roughly -2.8..+2.5.
///
/// Entries in (0, 1) double as intensifiers when they immediately precede
/// another lexicon word.
const VALENCE: &[(&str, f64)] = &[
    // Intensifiers
    ("very", 0.3),
    ("really", 0.3),
    ("highly", 0.3),
    ("totally", 0.35),
    ("truly", 0.35),
    ("completely", 0.4),
    ("deeply", 0.4),
    ("incredibly", 0.45),
    ("extremely", 0.5),
    ("absolutely", 0.5),
    ("utterly", 0.5),
    // Positive valence
    ("hope", 1.2),
    ("hopeful", 1.4),
    ("proud", 1.4),
    ("win", 1.5),
    ("success", 1.5),
    ("celebrate", 1.5),
    ("remarkable", 1.5),
    ("great", 1.6),
    ("triumph", 1.6),
    ("heroic", 1.6),
    ("happy", 1.7),
    ("best", 1.7),
    ("inspiring", 1.7),
    ("stunning", 1.7),
    ("joy", 1.8),
    ("beautiful", 1.8),
    ("extraordinary", 1.8),
    ("love", 1.9),
    ("wonderful", 1.9),
    ("brilliant", 1.9),
    ("outstanding", 1.9),
    ("superb", 1.9),
    ("delighted", 1.9),
    ("incredible", 1.9),
    ("excellent", 2.0),
    ("fantastic", 2.0),
    ("thrilled", 2.0),
    ("magnificent", 2.0),
    ("amazing", 2.1),
    ("perfect", 2.1),
    // Negative valence
    ("attack", -1.5),
    ("threat", -1.5),
    ("fear", -1.6),
    ("lie", -1.6),
    ("lies", -1.6),
    ("dangerous", -1.6),
    ("alarming", -1.6),
    ("angry", -1.7),
    ("scandal", -1.7),
    ("shocking", -1.7),
    ("crisis", -1.8),
    ("chaos", -1.8),
    ("destroy", -1.9),
    ("furious", -1.9),
    ("panic", -1.9),
    ("outrageous", -1.9),
    ("shameful", -1.9),
    ("awful", -2.0),
    ("deadly", -2.0),
    ("fraud", -2.0),
    ("rage", -2.0),
    ("brutal", -2.0),
    ("vicious", -2.0),
    ("corrupt", -2.0),
    ("betrayal", -2.0),
    ("terrible", -2.1),
    ("nightmare", -2.1),
    ("appalling", -2.1),
    ("horrible", -2.2),
    ("disgusting", -2.2),
    ("disaster", -2.2),
    ("tragedy", -2.3),
    ("hate", -2.3),
    ("terror", -2.4),
    ("catastrophe", -2.4),
    ("devastating", -2.4),
    ("horrific", -2.5),
    ("evil", -2.8),
];

/// Emotional charge estimate for one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalCharge {
    /// Analyticalness in [-1, 1]: negative is emotional, positive analytical.
    pub score: f64,
    /// Seven-bucket label for `score`.
    pub label: EmotionLabel,
    /// Magnitude of the raw valence signal in [0, 1].
    pub intensity: f64,
}

fn valence_of(token: &str) -> Option<f64> {
    VALENCE.iter().find(|(w, _)| *w == token).map(|(_, v)| *v)
}

fn is_intensifier(valence: f64) -> bool {
    valence > 0.0 && valence < 1.0
}

/// Score the emotional charge of a text.
///
/// Pure function of the text and the static lexicon; empty or entirely
/// out-of-lexicon input scores 0.0 (Neutral).
pub fn analyze(text: &str) -> EmotionalCharge {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();

    let mut compound = 0.0;
    let mut matched = 0usize;

    for (i, token) in tokens.iter().enumerate() {
        if NEGATORS.contains(token) {
            if let Some(next) = tokens.get(i + 1).and_then(|t| valence_of(t)) {
                compound -= next / 2.0;
            }
            continue;
        }

        if let Some(valence) = valence_of(token) {
            let scaled = match i.checked_sub(1).and_then(|j| valence_of(tokens[j])) {
                Some(prev) if is_intensifier(prev) => valence * (1.0 + prev),
                _ => valence,
            };
            compound += scaled;
            matched += 1;
        }
    }

    let normalized = (compound / matched.max(MIN_NORM_TOKENS) as f64).clamp(-1.0, 1.0);
    let score = -normalized;

    EmotionalCharge {
        score,
        label: EmotionLabel::from_score(score),
        intensity: normalized.abs(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_neutral() {
        let result = analyze("");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.label, EmotionLabel::Neutral);
        assert_eq!(result.intensity, 0.0);
    }

    #[test]
    fn test_out_of_lexicon_text_is_neutral() {
        let result = analyze("The committee reviewed the quarterly budget figures.");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.label, EmotionLabel::Neutral);
    }

    #[test]
    fn test_superlative_dense_text_reads_highly_emotional() {
        // Positive valence inverts to a strongly negative score: gushing
        // praise is emotional charge, not analysis.
        let text = "amazing incredible wonderful fantastic perfect magnificent \
                    amazing incredible wonderful fantastic perfect magnificent";
        let result = analyze(text);
        assert!(result.score < -0.6, "score was {}", result.score);
        assert_eq!(result.label, EmotionLabel::HighlyEmotional);
        assert!(result.intensity > 0.6);
    }

    #[test]
    fn test_intensifier_scales_following_token() {
        let plain = analyze(&"terrible news today. ".repeat(2));
        let boosted = analyze(&"extremely terrible news today. ".repeat(2));
        assert!(boosted.intensity > plain.intensity);
    }

    #[test]
    fn test_negation_halves_following_valence() {
        // "not amazing" subtracts half of amazing's valence before the word
        // itself is added, damping the compound sum.
        let plain = analyze("amazing amazing amazing amazing");
        let negated = analyze("not amazing not amazing not amazing not amazing");
        assert!(negated.intensity < plain.intensity);
    }

    #[test]
    fn test_punctuation_is_stripped() {
        let with = analyze("Amazing!!! Wonderful... Incredible?!");
        let without = analyze("amazing wonderful incredible");
        assert_eq!(with, without);
    }

    #[test]
    fn test_normalization_floor_damps_short_text() {
        // One strong word over the 10-token floor stays out of the extreme buckets.
        let result = analyze("evil");
        assert!(result.score > 0.0);
        assert!(result.score < 0.3);
    }

    #[test]
    fn test_determinism() {
        let text = "A devastating disaster, an absolutely horrific tragedy.";
        assert_eq!(analyze(text), analyze(text));
    }
}
