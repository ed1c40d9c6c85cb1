//! Framing-combination heuristic signal.
//!
//! Detects four boolean pattern classes — emotional/crisis language,
//! victim-oriented language, us-vs-them language, and rhetorical-question
//! framing — and maps their combinations onto a small fixed score table.
//! The least-trusted signal: its confidence never rises above 0.3.

use crate::domain::{ArticleInput, SignalKind, SignalResult};

/// Confidence whenever a framing combination is detected.
const FRAMING_CONFIDENCE: f64 = 0.3;

/// Emotional/crisis vocabulary.
const EMOTIONAL_PATTERNS: &[&str] = &[
    r"\bcrisis\b",
    r"\bcatastroph",
    r"\bdisaster\b",
    r"\bemergency\b",
    r"\bdevastat",
    r"\bterrifying\b",
    r"\bshocking\b",
    r"\boutrage",
    r"\bnightmare\b",
];

/// Victim-oriented constructions.
const VICTIM_PATTERNS: &[&str] = &[
    r"\bvictims? of\b",
    r"\bat the hands of\b",
    r"\bleft behind\b",
    r"\bpreyed upon\b",
    r"\bsuffering\b",
    r"\bexploited\b",
];

/// Us-vs-them constructions.
const US_VS_THEM_PATTERNS: &[&str] = &[
    r"\bthey want\b",
    r"\bthe elites?\b",
    r"\breal americans\b",
    r"\bthose people\b",
    r"\bthe establishment\b",
    r"\bordinary people\b",
    r"\bus versus them\b",
];

/// Rhetorical-question framing.
const QUESTION_PATTERNS: &[&str] = &[
    r"\b(why|how|what|who)\b[^.?!]{0,80}\?",
    r"\bisn't it time\b",
    r"\bhow much longer\b",
];

/// Whether any pattern in the class matches the lowercased text.
fn class_matches(text_lower: &str, patterns: &[&str]) -> bool {
    for pattern in patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            if re.is_match(text_lower) {
                return true;
            }
        }
    }
    false
}

/// Detect bias-indicating framing combinations.
///
/// `None` below the length gate; in-band neutral when no class fires.
pub fn evaluate(article: &ArticleInput) -> Option<SignalResult> {
    if !article.has_scorable_text() {
        return None;
    }

    let text = article.text.to_lowercase();
    let emotional = class_matches(&text, EMOTIONAL_PATTERNS);
    let victim = class_matches(&text, VICTIM_PATTERNS);
    let us_vs_them = class_matches(&text, US_VS_THEM_PATTERNS);
    let question = class_matches(&text, QUESTION_PATTERNS);

    let mut fired = Vec::new();
    if emotional {
        fired.push("emotional/crisis language".to_string());
    }
    if victim {
        fired.push("victim-oriented language".to_string());
    }
    if us_vs_them {
        fired.push("us-vs-them language".to_string());
    }
    if question {
        fired.push("rhetorical-question framing".to_string());
    }

    // Priority order: the combined emotional + us-vs-them pattern is the
    // strongest tell, then victim framing, then bare question framing at
    // half strength.
    let result = if emotional && us_vs_them {
        SignalResult::new(
            SignalKind::Framing,
            -0.3,
            FRAMING_CONFIDENCE,
            "emotional language combined with us-vs-them framing",
        )
    } else if victim {
        SignalResult::new(
            SignalKind::Framing,
            0.2,
            FRAMING_CONFIDENCE,
            "victim-oriented framing present",
        )
    } else if question {
        SignalResult::new(
            SignalKind::Framing,
            0.0,
            FRAMING_CONFIDENCE / 2.0,
            "rhetorical-question framing only",
        )
    } else if emotional || us_vs_them {
        // A single class short of a scored combination reads as neutral.
        SignalResult::new(
            SignalKind::Framing,
            0.0,
            FRAMING_CONFIDENCE,
            "isolated framing class, no scored combination",
        )
    } else {
        SignalResult::abstention(SignalKind::Framing, "no framing classes detected")
    };

    Some(result.with_details(fired))
}
