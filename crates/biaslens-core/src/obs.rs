//! Structured observability hooks for the analysis lifecycle.
//!
//! This module provides:
//! - Analysis-scoped tracing spans via the `AnalysisSpan` RAII guard
//! - Emission functions for key lifecycle events: start, per-signal
//!   outcome, no-evidence failure, finish
//!
//! Events are emitted at `info!` level; per-signal outcomes at `debug!`.

use tracing::{debug, info, warn};

/// RAII guard that enters an analysis-scoped tracing span.
///
/// # Example
///
/// ```ignore
/// let _span = AnalysisSpan::enter("7b4c...");
/// // All tracing calls are now tagged with analysis_id.
/// ```
pub struct AnalysisSpan {
    _span: tracing::span::EnteredSpan,
}

impl AnalysisSpan {
    /// Create and enter a span tagged with the analysis id.
    pub fn enter(analysis_id: &str) -> Self {
        let span = tracing::info_span!("biaslens.analysis", analysis_id = %analysis_id);
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: analysis started for a publisher domain.
pub fn emit_analysis_started(analysis_id: &str, domain: &str, text_chars: usize) {
    info!(
        event = "analysis.started",
        analysis_id = %analysis_id,
        domain = %domain,
        text_chars = text_chars,
    );
}

/// Emit event: one signal produced a result.
pub fn emit_signal_evaluated(analysis_id: &str, signal: &str, score: f64, confidence: f64) {
    debug!(
        event = "signal.evaluated",
        analysis_id = %analysis_id,
        signal = %signal,
        score = score,
        confidence = confidence,
    );
}

/// Emit event: one signal abstained as missing.
pub fn emit_signal_abstained(analysis_id: &str, signal: &str) {
    debug!(event = "signal.abstained", analysis_id = %analysis_id, signal = %signal);
}

/// Emit event: the combiner found no usable evidence (warning level).
pub fn emit_no_evidence(analysis_id: &str, signals_supplied: usize) {
    warn!(
        event = "analysis.no_evidence",
        analysis_id = %analysis_id,
        signals_supplied = signals_supplied,
    );
}

/// Emit event: analysis finished with its headline numbers.
pub fn emit_analysis_finished(
    analysis_id: &str,
    score: f64,
    label: &str,
    confidence: f64,
    emotion_score: f64,
) {
    info!(
        event = "analysis.finished",
        analysis_id = %analysis_id,
        score = score,
        label = %label,
        confidence = confidence,
        emotion_score = emotion_score,
    );
}
