//! The five independent leaning signals.
//!
//! Each producer is a pure function of `(text, metadata)` and its static
//! tables, except [`tone`], which performs network I/O. Producers gated on
//! input availability return `Option<SignalResult>`: `None` means the signal
//! is missing entirely (unrecognized domain, sub-threshold text) and is
//! simply absent from the combination. An in-band neutral result
//! (score 0.0, confidence 0.1) means "looked, found nothing".

pub mod content_keywords;
pub mod domain_reputation;
pub mod framing;
pub mod language_patterns;
pub mod tone;

mod phrase;
