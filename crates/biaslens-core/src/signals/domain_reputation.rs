//! Publisher reputation signal.
//!
//! Looks the publisher domain up against a static reputation table in three
//! stages: exact match, ordered pattern rules (first match wins), then
//! substring heuristics for known network names. Any match carries the same
//! fixed confidence; a domain no stage recognizes is a missing signal, not
//! an error.

use tracing::debug;

use crate::domain::{ArticleMetadata, SignalKind, SignalResult};

/// Confidence assigned on any table match, at every stage.
const MATCH_CONFIDENCE: f64 = 0.9;

/// Exact-match reputation table. Negative leans conservative, positive liberal.
const DOMAIN_SCORES: &[(&str, f64)] = &[
    ("foxnews.com", -0.8),
    ("breitbart.com", -0.9),
    ("dailywire.com", -0.85),
    ("theblaze.com", -0.8),
    ("oann.com", -0.9),
    ("newsmax.com", -0.85),
    ("nationalreview.com", -0.7),
    ("washingtontimes.com", -0.6),
    ("washingtonexaminer.com", -0.6),
    ("nypost.com", -0.5),
    ("wsj.com", -0.25),
    ("thehill.com", -0.05),
    ("apnews.com", 0.0),
    ("reuters.com", 0.05),
    ("bbc.com", 0.1),
    ("axios.com", 0.15),
    ("usatoday.com", 0.2),
    ("npr.org", 0.4),
    ("nytimes.com", 0.55),
    ("washingtonpost.com", 0.55),
    ("theguardian.com", 0.6),
    ("theatlantic.com", 0.6),
    ("slate.com", 0.65),
    ("cnn.com", 0.7),
    ("vox.com", 0.7),
    ("huffpost.com", 0.75),
    ("msnbc.com", 0.8),
    ("motherjones.com", 0.85),
];

/// How an ordered pattern rule matches a normalized domain.
#[derive(Debug, Clone, Copy)]
enum DomainPattern {
    Suffix(&'static str),
    Prefix(&'static str),
}

impl DomainPattern {
    fn matches(self, domain: &str) -> bool {
        match self {
            Self::Suffix(s) => domain.ends_with(s),
            Self::Prefix(p) => domain.starts_with(p),
        }
    }
}

/// Ordered pattern rules tried after the exact table; first match wins.
const PATTERN_RULES: &[(DomainPattern, f64, &str)] = &[
    (DomainPattern::Suffix(".gov"), 0.0, "government property"),
    (DomainPattern::Suffix(".mil"), -0.1, "military property"),
    (DomainPattern::Suffix(".edu"), 0.15, "university property"),
    (DomainPattern::Suffix("tribpub.com"), -0.1, "Tribune local paper"),
    (DomainPattern::Prefix("patriot"), -0.5, "patriot-branded outlet"),
    (DomainPattern::Prefix("progressive"), 0.5, "progressive-branded outlet"),
];

/// Last-resort substring heuristics for syndicated network properties.
const NETWORK_HINTS: &[(&str, f64)] = &[
    ("foxnews", -0.8),
    ("fox", -0.6),
    ("breitbart", -0.9),
    ("sinclair", -0.5),
    ("cnn", 0.5),
    ("msnbc", 0.7),
    ("nbc", 0.3),
    ("abcnews", 0.2),
    ("cbsnews", 0.2),
    ("huffington", 0.75),
];

/// Normalize a publisher domain for lookup.
fn normalize(domain: &str) -> String {
    let d = domain.trim().to_ascii_lowercase();
    d.strip_prefix("www.").unwrap_or(&d).to_string()
}

/// Look up the publisher's reputation.
///
/// Returns `None` when no stage recognizes the domain — the signal is then
/// missing from the combination rather than neutral.
pub fn evaluate(metadata: &ArticleMetadata) -> Option<SignalResult> {
    let domain = normalize(&metadata.domain);
    if domain.is_empty() {
        return None;
    }

    if let Some((_, score)) = DOMAIN_SCORES.iter().find(|(d, _)| *d == domain) {
        return Some(
            SignalResult::new(
                SignalKind::DomainReputation,
                *score,
                MATCH_CONFIDENCE,
                format!("publisher {domain} is a listed source"),
            )
            .with_details(vec![format!("exact match: {domain} ({score:+.2})")]),
        );
    }

    for (pattern, score, what) in PATTERN_RULES {
        if pattern.matches(&domain) {
            return Some(
                SignalResult::new(
                    SignalKind::DomainReputation,
                    *score,
                    MATCH_CONFIDENCE,
                    format!("publisher {domain} matches rule: {what}"),
                )
                .with_details(vec![format!("pattern rule: {what} ({score:+.2})")]),
            );
        }
    }

    for (needle, score) in NETWORK_HINTS {
        if domain.contains(needle) {
            return Some(
                SignalResult::new(
                    SignalKind::DomainReputation,
                    *score,
                    MATCH_CONFIDENCE,
                    format!("publisher {domain} resembles the {needle} network"),
                )
                .with_details(vec![format!("network hint: {needle} ({score:+.2})")]),
            );
        }
    }

    debug!(domain = %domain, "domain not recognized, signal missing");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(domain: &str) -> ArticleMetadata {
        ArticleMetadata {
            domain: domain.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_listed_conservative_outlet() {
        let result = evaluate(&meta("foxnews.com")).unwrap();
        assert_eq!(result.score, -0.8);
        assert_eq!(result.confidence, 0.9);
    }

    #[test]
    fn test_www_prefix_is_stripped() {
        let result = evaluate(&meta("www.cnn.com")).unwrap();
        assert_eq!(result.score, 0.7);
        assert_eq!(result.confidence, 0.9);
    }

    #[test]
    fn test_case_and_whitespace_normalized() {
        let result = evaluate(&meta("  WWW.MSNBC.COM ")).unwrap();
        assert_eq!(result.score, 0.8);
    }

    #[test]
    fn test_unknown_domain_is_missing() {
        assert!(evaluate(&meta("randomblog.xyz")).is_none());
        assert!(evaluate(&meta("")).is_none());
    }

    #[test]
    fn test_pattern_rule_first_match_wins() {
        let result = evaluate(&meta("senate.gov")).unwrap();
        assert_eq!(result.score, 0.0);
        assert_eq!(result.confidence, 0.9);
    }

    #[test]
    fn test_network_hint_fallback() {
        // Not in the exact table, no pattern rule, but carries a network name.
        let result = evaluate(&meta("foxbusiness.com")).unwrap();
        assert!(result.score < 0.0);
        assert_eq!(result.confidence, 0.9);
    }

    #[test]
    fn test_exact_match_beats_hint() {
        // cnn.com must resolve through the exact table, not the "cnn" hint.
        let result = evaluate(&meta("cnn.com")).unwrap();
        assert_eq!(result.score, 0.7);
    }
}
