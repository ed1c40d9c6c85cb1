//! Error taxonomy for the analysis core.
//!
//! Thin evidence is never an error here: an under-evidenced signal abstains
//! (see `SignalResult::abstention`) and the combiner works with whatever
//! remains. The one hard failure is [`AnalysisError::NoEvidence`], raised
//! when every supplied signal carried zero effective weight — fabricating a
//! neutral verdict at that point would hide total absence of evidence from
//! the caller.

/// Errors produced by the analysis core.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// Every supplied signal was missing or carried zero effective weight.
    #[error("no usable evidence: {signals_supplied} signal(s) supplied, none with effective weight")]
    NoEvidence { signals_supplied: usize },

    /// A caller-supplied weight table failed validation.
    #[error("invalid weight table: {0}")]
    InvalidWeights(String),
}

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_evidence_display() {
        let err = AnalysisError::NoEvidence {
            signals_supplied: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("no usable evidence"));
        assert!(msg.contains('3'));
    }

    #[test]
    fn test_invalid_weights_display() {
        let err = AnalysisError::InvalidWeights("weights sum to 0.9".to_string());
        assert!(err.to_string().contains("invalid weight table"));
    }
}
