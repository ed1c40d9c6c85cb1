//! Confidence-weighted signal combination.
//!
//! Every present signal contributes `score x nominal_weight x confidence`;
//! the shared denominator renormalizes over whatever subset actually showed
//! up, so a missing signal shrinks the evidence pool instead of dragging the
//! estimate toward zero. The combiner is the one place in the system that
//! can fail hard: when no supplied signal carries effective weight there is
//! no evidence to combine, and fabricating a neutral verdict would hide that
//! from the caller.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{AnalysisError, LeaningLabel, Result, SignalKind, SignalResult};

/// Combined-output confidence ceiling.
const MAX_COMBINED_CONFIDENCE: f64 = 0.9;

/// Static nominal weights per signal, summing to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightTable {
    weights: BTreeMap<SignalKind, f64>,
}

impl Default for WeightTable {
    fn default() -> Self {
        let mut weights = BTreeMap::new();
        weights.insert(SignalKind::DomainReputation, 0.35);
        weights.insert(SignalKind::ContentKeywords, 0.25);
        weights.insert(SignalKind::Tone, 0.20);
        weights.insert(SignalKind::LanguagePatterns, 0.12);
        weights.insert(SignalKind::Framing, 0.08);
        WeightTable { weights }
    }
}

impl WeightTable {
    /// Nominal weight for one signal; 0.0 for kinds the table omits.
    pub fn nominal(&self, kind: SignalKind) -> f64 {
        self.weights.get(&kind).copied().unwrap_or(0.0)
    }

    /// Sum of all nominal weights.
    pub fn total(&self) -> f64 {
        self.weights.values().sum()
    }

    /// Replace one signal's nominal weight.
    pub fn with_weight(mut self, kind: SignalKind, weight: f64) -> Self {
        self.weights.insert(kind, weight);
        self
    }

    /// Validate that weights are non-negative and sum to 1.0.
    pub fn validate(&self) -> Result<()> {
        if let Some((kind, w)) = self.weights.iter().find(|(_, w)| **w < 0.0) {
            return Err(AnalysisError::InvalidWeights(format!(
                "negative weight {w} for {kind}"
            )));
        }
        let total = self.total();
        if (total - 1.0).abs() > 1e-9 {
            return Err(AnalysisError::InvalidWeights(format!(
                "weights sum to {total}, expected 1.0"
            )));
        }
        Ok(())
    }
}

/// Combined political-leaning estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedLeaning {
    /// Weighted score in [-1, 1].
    pub score: f64,
    /// Seven-bucket label for `score`.
    pub label: LeaningLabel,
    /// Breadth-of-agreement confidence in [0, 0.9].
    pub confidence: f64,
    /// Signals that carried effective weight, in evaluation order.
    pub contributing: Vec<SignalKind>,
    /// Each contributing signal's individual score.
    pub per_signal: BTreeMap<SignalKind, f64>,
    /// Audit trail: contributing signal ids with their scores.
    pub explanation: String,
}

/// Combine the available signals into one leaning estimate.
///
/// `signals` may hold any subset of the five producers' outputs; producers
/// that abstained as missing are simply absent. Signals with zero
/// confidence (or zero nominal weight) are skipped. Errors with
/// [`AnalysisError::NoEvidence`] if and only if nothing contributed.
pub fn combine(signals: &[SignalResult], table: &WeightTable) -> Result<CombinedLeaning> {
    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;
    let mut contributing = Vec::new();
    let mut per_signal = BTreeMap::new();
    let mut parts = Vec::new();

    for signal in signals {
        let effective = table.nominal(signal.kind) * signal.confidence;
        if effective <= 0.0 {
            continue;
        }
        weighted_sum += signal.score * effective;
        weight_total += effective;
        contributing.push(signal.kind);
        per_signal.insert(signal.kind, signal.score);
        parts.push(format!("{} {:+.2}", signal.kind, signal.score));
    }

    if weight_total == 0.0 {
        return Err(AnalysisError::NoEvidence {
            signals_supplied: signals.len(),
        });
    }

    let score = (weighted_sum / weight_total).clamp(-1.0, 1.0);
    let active = contributing.len();
    let confidence = (active as f64 / SignalKind::ALL.len() as f64).min(MAX_COMBINED_CONFIDENCE);
    let label = LeaningLabel::from_score(score);
    let explanation = format!(
        "combined {active} of {} signals: {}",
        SignalKind::ALL.len(),
        parts.join(", ")
    );

    Ok(CombinedLeaning {
        score,
        label,
        confidence,
        contributing,
        per_signal,
        explanation,
    })
}
