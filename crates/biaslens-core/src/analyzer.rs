//! One-shot analysis orchestration.
//!
//! Wires the five leaning signals, the combiner, and the emotional charge
//! analyzer into a single `analyze` entry point. One analysis is a
//! short-lived unit of work: the signals share no mutable state and their
//! evaluation order does not affect the result; only the tone lookup
//! suspends.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::combine::{combine, CombinedLeaning, WeightTable};
use crate::domain::{ArticleInput, Result, SignalKind, SignalResult};
use crate::emotion::{self, EmotionalCharge};
use crate::metrics::METRICS;
use crate::obs::{self, AnalysisSpan};
use crate::signals::tone::{HttpToneClient, ToneClient, ToneConfig};
use crate::signals::{content_keywords, domain_reputation, framing, language_patterns, tone};

/// Analyzer configuration.
///
/// Passed in explicitly at construction; the analyzer holds no ambient
/// process-wide state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Tone service settings.
    #[serde(default)]
    pub tone: ToneConfig,
    /// Skip the network-backed tone signal entirely (offline runs).
    #[serde(default)]
    pub skip_tone: bool,
    /// Nominal signal weights.
    #[serde(default)]
    pub weights: WeightTable,
}

/// Full result of one analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Request-scoped id, also tagged on every log line of the analysis.
    pub analysis_id: Uuid,
    /// When the analysis completed.
    pub analyzed_at: DateTime<Utc>,
    /// Combined political-leaning estimate.
    pub leaning: CombinedLeaning,
    /// Independent emotional charge estimate.
    pub emotion: EmotionalCharge,
    /// Every signal that produced a result, in evaluation order.
    pub signals: Vec<SignalResult>,
}

/// Orchestrates the leaning signals, the combiner, and the emotional analyzer.
pub struct Analyzer {
    config: AnalyzerConfig,
    tone_client: Arc<dyn ToneClient>,
}

impl Analyzer {
    /// Analyzer with the reqwest-backed tone client.
    pub fn new(config: AnalyzerConfig) -> Self {
        let tone_client = Arc::new(HttpToneClient::new(config.tone.clone()));
        Self {
            config,
            tone_client,
        }
    }

    /// Analyzer with a caller-supplied tone client (tests, alternate services).
    pub fn with_tone_client(config: AnalyzerConfig, tone_client: Arc<dyn ToneClient>) -> Self {
        Self {
            config,
            tone_client,
        }
    }

    /// Run one full analysis.
    ///
    /// Fails only with [`crate::domain::AnalysisError::NoEvidence`] when every
    /// signal abstained as missing or carried zero effective weight; any
    /// degraded-but-present evidence yields a low-confidence success instead.
    pub async fn analyze(&self, article: &ArticleInput) -> Result<AnalysisReport> {
        let analysis_id = Uuid::new_v4();
        let id = analysis_id.to_string();
        let _span = AnalysisSpan::enter(&id);
        obs::emit_analysis_started(&id, &article.metadata.domain, article.text.chars().count());
        METRICS.inc_analyses();

        let mut signals: Vec<SignalResult> = Vec::new();
        let produced = [
            (
                SignalKind::DomainReputation,
                domain_reputation::evaluate(&article.metadata),
            ),
            (
                SignalKind::ContentKeywords,
                content_keywords::evaluate(article),
            ),
            (
                SignalKind::LanguagePatterns,
                language_patterns::evaluate(article),
            ),
            (SignalKind::Framing, framing::evaluate(article)),
        ];
        for (kind, outcome) in produced {
            match outcome {
                Some(signal) => {
                    obs::emit_signal_evaluated(&id, kind.as_str(), signal.score, signal.confidence);
                    signals.push(signal);
                }
                None => {
                    METRICS.inc_signals_abstained();
                    obs::emit_signal_abstained(&id, kind.as_str());
                }
            }
        }

        if self.config.skip_tone {
            debug!("tone signal disabled, treating as missing");
            METRICS.inc_signals_abstained();
            obs::emit_signal_abstained(&id, SignalKind::Tone.as_str());
        } else {
            let signal = tone::evaluate(self.tone_client.as_ref(), &self.config.tone, article).await;
            obs::emit_signal_evaluated(&id, SignalKind::Tone.as_str(), signal.score, signal.confidence);
            signals.push(signal);
        }

        let leaning = match combine(&signals, &self.config.weights) {
            Ok(leaning) => leaning,
            Err(err) => {
                obs::emit_no_evidence(&id, signals.len());
                return Err(err);
            }
        };

        let emotion = emotion::analyze(&article.text);

        obs::emit_analysis_finished(
            &id,
            leaning.score,
            leaning.label.as_str(),
            leaning.confidence,
            emotion.score,
        );

        Ok(AnalysisReport {
            analysis_id,
            analyzed_at: Utc::now(),
            leaning,
            emotion,
            signals,
        })
    }
}
