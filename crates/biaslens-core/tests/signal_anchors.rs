//! Anchor tests for individual signal producers through the public API.

use biaslens_core::signals::{content_keywords, domain_reputation, framing, language_patterns};
use biaslens_core::{ArticleInput, ArticleMetadata, SignalKind};

fn with_domain(domain: &str) -> ArticleMetadata {
    ArticleMetadata {
        domain: domain.to_string(),
        ..Default::default()
    }
}

fn long_article(text: &str) -> ArticleInput {
    ArticleInput {
        text: format!(
            "{text} {}",
            "officials met this week to discuss routine administrative matters. ".repeat(3)
        ),
        ..Default::default()
    }
}

// ---- Domain reputation ----

#[test]
fn known_conservative_outlet_anchor() {
    let result = domain_reputation::evaluate(&with_domain("foxnews.com")).unwrap();
    assert_eq!(result.kind, SignalKind::DomainReputation);
    assert_eq!(result.score, -0.8);
    assert_eq!(result.confidence, 0.9);
}

#[test]
fn www_prefix_normalizes_before_lookup() {
    let result = domain_reputation::evaluate(&with_domain("www.cnn.com")).unwrap();
    assert_eq!(result.score, 0.7);
    assert_eq!(result.confidence, 0.9);
}

#[test]
fn unrecognized_domain_abstains_as_missing() {
    assert!(domain_reputation::evaluate(&with_domain("randomblog.xyz")).is_none());
}

// ---- Content keywords ----

#[test]
fn one_high_weight_phrase_sets_the_sign() {
    let result = content_keywords::evaluate(&long_article(
        "Critics described the plan as a woke agenda.",
    ))
    .unwrap();
    assert!(result.score < 0.0);
    assert!(result.confidence > 0.0);
}

#[test]
fn zero_hits_produce_in_band_neutral() {
    let result =
        content_keywords::evaluate(&long_article("A quiet afternoon at the public library."))
            .unwrap();
    assert_eq!(result.score, 0.0);
    assert_eq!(result.confidence, 0.1);
}

// ---- Determinism across producers ----

#[test]
fn pure_signals_are_deterministic() {
    let article = long_article(
        "Everyone knows the elites want this crisis. Why is no one asking about the root causes?",
    );
    let meta = with_domain("www.msnbc.com");

    for _ in 0..3 {
        assert_eq!(
            domain_reputation::evaluate(&meta),
            domain_reputation::evaluate(&meta)
        );
        assert_eq!(
            content_keywords::evaluate(&article),
            content_keywords::evaluate(&article)
        );
        assert_eq!(
            language_patterns::evaluate(&article),
            language_patterns::evaluate(&article)
        );
        assert_eq!(framing::evaluate(&article), framing::evaluate(&article));
    }
}
