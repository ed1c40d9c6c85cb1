//! External tone-lookup signal.
//!
//! Queries a tone service with up to three candidate queries built from the
//! article (headline, URL-path tokens, lead text), strictly in order with a
//! fixed pause between attempts. The first query whose response carries at
//! least one numeric tone value wins; its tone average on the service's
//! -100..100 scale is rescaled into [-1, 1]. Transport and decode failures
//! never escape this module — an exhausted candidate list collapses into the
//! neutral abstention.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{ArticleInput, SignalKind, SignalResult};
use crate::metrics::METRICS;

/// Confidence assigned when the service returns usable tone data.
const SUCCESS_CONFIDENCE: f64 = 0.6;

/// Length of the lead-text candidate query, in characters.
const LEAD_QUERY_LEN: usize = 150;

/// Minimum length of a URL-path token worth querying.
const MIN_PATH_TOKEN_LEN: usize = 5;

/// Tone service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToneConfig {
    /// Service endpoint.
    pub base_url: String,
    /// Maximum articles requested per query.
    pub max_articles: usize,
    /// Pause between candidate queries, honoring service rate limits.
    pub attempt_delay_ms: u64,
    /// Per-request timeout.
    pub timeout_ms: u64,
}

impl Default for ToneConfig {
    fn default() -> Self {
        ToneConfig {
            base_url: std::env::var("BIASLENS_TONE_URL")
                .unwrap_or_else(|_| "https://api.gdeltproject.org/api/v2/doc/doc".to_string()),
            max_articles: 10,
            attempt_delay_ms: 1_000,
            timeout_ms: 10_000,
        }
    }
}

impl ToneConfig {
    /// Create a config from environment variables.
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Override the inter-attempt pause.
    pub fn with_attempt_delay_ms(mut self, delay_ms: u64) -> Self {
        self.attempt_delay_ms = delay_ms;
        self
    }
}

/// One article returned by the tone service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneArticle {
    /// Headline of the returned article, when present.
    #[serde(default)]
    pub title: Option<String>,
    /// Document tone on the service's -100..100 scale, when present.
    #[serde(default)]
    pub tone: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ToneResponse {
    #[serde(default)]
    articles: Vec<ToneArticle>,
}

/// One query-in / article-list-out exchange with the tone service.
///
/// Transport and decode failures surface as `Err`; the retry loop treats
/// them the same as a response with no usable tone values.
#[async_trait]
pub trait ToneClient: Send + Sync {
    /// Fetch candidate articles for one query.
    async fn fetch(&self, query: &str) -> anyhow::Result<Vec<ToneArticle>>;
}

/// reqwest-backed tone client.
pub struct HttpToneClient {
    config: ToneConfig,
    http: reqwest::Client,
}

impl HttpToneClient {
    /// Create a new client.
    pub fn new(config: ToneConfig) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(concat!("biaslens/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .expect("Failed to create HTTP client");

        HttpToneClient { config, http }
    }

    /// Create a client from environment variables.
    pub fn from_env() -> Self {
        Self::new(ToneConfig::from_env())
    }
}

#[async_trait]
impl ToneClient for HttpToneClient {
    async fn fetch(&self, query: &str) -> anyhow::Result<Vec<ToneArticle>> {
        let max_records = self.config.max_articles.to_string();
        let response = self
            .http
            .get(&self.config.base_url)
            .query(&[
                ("query", query),
                ("mode", "artlist"),
                ("format", "json"),
                ("maxrecords", max_records.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: ToneResponse = response.json().await?;
        Ok(body.articles)
    }
}

/// Build up to three candidate queries, most specific first.
fn candidate_queries(article: &ArticleInput) -> Vec<String> {
    let mut queries = Vec::new();

    let title = article.metadata.title.trim();
    if !title.is_empty() {
        queries.push(title.to_string());
    }

    // Path component of the URL, skipping scheme and host.
    if let Some(path) = article.metadata.url.splitn(4, '/').nth(3) {
        let tokens: Vec<&str> = path
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|t| t.len() > MIN_PATH_TOKEN_LEN && t.chars().any(|c| c.is_ascii_alphabetic()))
            .collect();
        if !tokens.is_empty() {
            queries.push(tokens.join(" "));
        }
    }

    let lead: String = article.text.chars().take(LEAD_QUERY_LEN).collect();
    let lead = lead.trim();
    if !lead.is_empty() {
        queries.push(lead.to_string());
    }

    queries.truncate(3);
    queries
}

/// Query the tone service over candidate queries, first success wins.
///
/// Never returns an error: a flaky or empty service collapses into the
/// neutral abstention rather than sinking the whole analysis. Worst-case
/// latency is `(candidates - 1) x attempt_delay` plus per-call network time.
pub async fn evaluate(
    client: &dyn ToneClient,
    config: &ToneConfig,
    article: &ArticleInput,
) -> SignalResult {
    let queries = candidate_queries(article);

    for (attempt, query) in queries.iter().enumerate() {
        if attempt > 0 {
            tokio::time::sleep(Duration::from_millis(config.attempt_delay_ms)).await;
        }
        METRICS.inc_tone_attempts();

        match client.fetch(query).await {
            Ok(articles) => {
                let tones: Vec<f64> = articles.iter().filter_map(|a| a.tone).collect();
                if tones.is_empty() {
                    debug!(attempt, "tone lookup returned no usable tone values");
                    continue;
                }

                let mean = tones.iter().sum::<f64>() / tones.len() as f64;
                let score = (mean / 100.0).clamp(-1.0, 1.0);
                return SignalResult::new(
                    SignalKind::Tone,
                    score,
                    SUCCESS_CONFIDENCE,
                    format!(
                        "external tone average {:+.1} across {} article(s)",
                        mean,
                        tones.len()
                    ),
                )
                .with_details(vec![
                    format!("query {}: {query}", attempt + 1),
                    format!("{} of {} articles carried tone", tones.len(), articles.len()),
                ]);
            }
            Err(err) => {
                METRICS.inc_tone_failures();
                warn!(attempt, error = %err, "tone lookup failed, advancing to next candidate");
            }
        }
    }

    SignalResult::abstention(SignalKind::Tone, "no usable tone data from any candidate query")
}
