//! BiasLens Core Library
//!
//! Estimates two independent properties of a piece of text — political
//! leaning and emotional charge — by combining several unreliable,
//! heterogeneous signals into bounded, explainable scores.
//!
//! Five signals (publisher reputation, weighted keywords, external tone,
//! rhetorical patterns, framing heuristics) each produce the shared
//! [`SignalResult`] shape or abstain; the combiner weights each one by
//! `nominal weight x self-reported confidence` and renormalizes over
//! whatever evidence is present. The emotional charge analyzer runs
//! independently and never abstains. The only hard failure in the whole
//! pipeline is [`AnalysisError::NoEvidence`].

pub mod analyzer;
pub mod combine;
pub mod domain;
pub mod emotion;
pub mod metrics;
pub mod obs;
pub mod signals;
pub mod telemetry;

pub use analyzer::{AnalysisReport, Analyzer, AnalyzerConfig};

pub use combine::{combine, CombinedLeaning, WeightTable};

pub use domain::{
    AnalysisError, ArticleInput, ArticleMetadata, EmotionLabel, LeaningLabel, Result, SignalKind,
    SignalResult, MIN_SCORABLE_LEN, NEUTRAL_CONFIDENCE,
};

pub use emotion::EmotionalCharge;

pub use signals::tone::{HttpToneClient, ToneArticle, ToneClient, ToneConfig};

pub use metrics::METRICS;
pub use obs::{
    emit_analysis_finished, emit_analysis_started, emit_no_evidence, emit_signal_abstained,
    emit_signal_evaluated, AnalysisSpan,
};
pub use telemetry::init_tracing;

/// BiasLens version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
