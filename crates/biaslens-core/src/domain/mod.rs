//! Domain models for BiasLens.
//!
//! Canonical definitions for the core entities:
//! - `ArticleInput`: One article to analyze (body text plus metadata)
//! - `SignalResult`: The shared shape every leaning signal produces
//! - `LeaningLabel` / `EmotionLabel`: Seven-bucket labels for both axes
//! - `AnalysisError`: The error taxonomy (abstention is data, not an error)

pub mod article;
pub mod error;
pub mod labels;
pub mod signal;

// Re-export main types and errors
pub use article::{ArticleInput, ArticleMetadata, MIN_SCORABLE_LEN};
pub use error::{AnalysisError, Result};
pub use labels::{EmotionLabel, LeaningLabel};
pub use signal::{SignalKind, SignalResult, NEUTRAL_CONFIDENCE};
