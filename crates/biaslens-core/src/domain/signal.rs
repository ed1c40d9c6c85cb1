//! Shared result shape for the leaning signals.
//!
//! Five independently-authored producers all emit the same fixed-field
//! record, which gives the combiner a single contract to depend on.

use serde::{Deserialize, Serialize};

/// Confidence carried by an in-band neutral ("looked, found nothing") result.
pub const NEUTRAL_CONFIDENCE: f64 = 0.1;

/// Identifies which signal produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    /// Publisher reputation table lookup.
    DomainReputation,
    /// Weighted political phrases in the body text.
    ContentKeywords,
    /// External tone-lookup service.
    Tone,
    /// Weighted rhetorical/framing phrases.
    LanguagePatterns,
    /// Rule-based framing combination heuristics.
    Framing,
}

impl SignalKind {
    /// All signals, in nominal-weight order.
    pub const ALL: [SignalKind; 5] = [
        SignalKind::DomainReputation,
        SignalKind::ContentKeywords,
        SignalKind::Tone,
        SignalKind::LanguagePatterns,
        SignalKind::Framing,
    ];

    /// Stable identifier used in explanations and structured logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DomainReputation => "domain_reputation",
            Self::ContentKeywords => "content_keywords",
            Self::Tone => "tone",
            Self::LanguagePatterns => "language_patterns",
            Self::Framing => "framing",
        }
    }
}

impl std::fmt::Display for SignalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One signal's contribution to the combined leaning estimate.
///
/// Score convention across the whole crate: negative leans conservative,
/// positive leans liberal. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalResult {
    /// Which producer emitted this result.
    pub kind: SignalKind,
    /// Leaning estimate in [-1, 1].
    pub score: f64,
    /// Self-reported reliability in [0, 1].
    pub confidence: f64,
    /// Human-readable account of how the score was derived.
    pub explanation: String,
    /// Per-match breakdown, in match order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl SignalResult {
    /// Create a result, clamping score and confidence into their ranges.
    pub fn new(kind: SignalKind, score: f64, confidence: f64, explanation: impl Into<String>) -> Self {
        Self {
            kind,
            score: score.clamp(-1.0, 1.0),
            confidence: confidence.clamp(0.0, 1.0),
            explanation: explanation.into(),
            details: Vec::new(),
        }
    }

    /// Attach a per-match breakdown.
    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }

    /// Neutral, low-confidence result: "no reliable evidence" as data.
    ///
    /// This is the in-band abstention a producer returns once its gates have
    /// passed but nothing matched. A producer that cannot run at all
    /// (unrecognized domain, sub-threshold text) returns `None` instead and
    /// the signal is simply missing from the combination.
    pub fn abstention(kind: SignalKind, why: impl Into<String>) -> Self {
        Self::new(kind, 0.0, NEUTRAL_CONFIDENCE, why)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_out_of_range_values() {
        let s = SignalResult::new(SignalKind::Tone, 3.5, -0.2, "x");
        assert_eq!(s.score, 1.0);
        assert_eq!(s.confidence, 0.0);
    }

    #[test]
    fn test_abstention_is_neutral_low_confidence() {
        let s = SignalResult::abstention(SignalKind::ContentKeywords, "no phrases matched");
        assert_eq!(s.score, 0.0);
        assert_eq!(s.confidence, NEUTRAL_CONFIDENCE);
        assert!(s.details.is_empty());
    }

    #[test]
    fn test_kind_ids_are_stable() {
        assert_eq!(SignalKind::DomainReputation.as_str(), "domain_reputation");
        assert_eq!(SignalKind::Framing.to_string(), "framing");
    }

    #[test]
    fn test_serde_roundtrip() {
        let s = SignalResult::new(SignalKind::Framing, -0.3, 0.3, "emotional + us-vs-them framing")
            .with_details(vec!["emotional language".to_string()]);
        let json = serde_json::to_string(&s).unwrap();
        let back: SignalResult = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
