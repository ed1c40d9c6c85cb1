//! Global atomic counters for BiasLens observability.
//!
//! Counters are incremented silently at the call site. Call
//! [`Metrics::flush`] to emit current values as a single
//! `tracing::info!` event (e.g. after a batch of analyses).

use std::sync::atomic::{AtomicU64, Ordering};

/// Global metrics singleton.
pub static METRICS: Metrics = Metrics::new();

/// Lightweight atomic counters — no allocations, no locking.
pub struct Metrics {
    analyses_run: AtomicU64,
    signals_abstained: AtomicU64,
    tone_attempts: AtomicU64,
    tone_failures: AtomicU64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub const fn new() -> Self {
        Self {
            analyses_run: AtomicU64::new(0),
            signals_abstained: AtomicU64::new(0),
            tone_attempts: AtomicU64::new(0),
            tone_failures: AtomicU64::new(0),
        }
    }

    /// Increment the analyses-run counter by one.
    pub fn inc_analyses(&self) {
        self.analyses_run.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "analyses_run", "counter incremented");
    }

    /// Increment the signals-abstained counter by one.
    pub fn inc_signals_abstained(&self) {
        self.signals_abstained.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "signals_abstained", "counter incremented");
    }

    /// Increment the tone-lookup-attempts counter by one.
    pub fn inc_tone_attempts(&self) {
        self.tone_attempts.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "tone_attempts", "counter incremented");
    }

    /// Increment the tone-lookup-failures counter by one.
    pub fn inc_tone_failures(&self) {
        self.tone_failures.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(metric = "tone_failures", "counter incremented");
    }

    /// Emit all current counter values as a single `info!` event.
    ///
    /// Call this at natural boundaries (end of a batch, process exit)
    /// rather than on every increment.
    pub fn flush(&self) {
        tracing::info!(
            metric = "flush",
            analyses_run = self.analyses_run(),
            signals_abstained = self.signals_abstained(),
            tone_attempts = self.tone_attempts(),
            tone_failures = self.tone_failures(),
        );
    }

    /// Read the current analyses-run count.
    pub fn analyses_run(&self) -> u64 {
        self.analyses_run.load(Ordering::Relaxed)
    }

    /// Read the current signals-abstained count.
    pub fn signals_abstained(&self) -> u64 {
        self.signals_abstained.load(Ordering::Relaxed)
    }

    /// Read the current tone-attempts count.
    pub fn tone_attempts(&self) -> u64 {
        self.tone_attempts.load(Ordering::Relaxed)
    }

    /// Read the current tone-failures count.
    pub fn tone_failures(&self) -> u64 {
        self.tone_failures.load(Ordering::Relaxed)
    }

    /// Reset all counters to zero (useful in tests).
    pub fn reset(&self) {
        self.analyses_run.store(0, Ordering::Relaxed);
        self.signals_abstained.store(0, Ordering::Relaxed);
        self.tone_attempts.store(0, Ordering::Relaxed);
        self.tone_failures.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_increment() {
        let m = Metrics::new();
        assert_eq!(m.analyses_run(), 0);
        m.inc_analyses();
        m.inc_analyses();
        assert_eq!(m.analyses_run(), 2);

        m.inc_signals_abstained();
        assert_eq!(m.signals_abstained(), 1);

        m.inc_tone_attempts();
        m.inc_tone_attempts();
        m.inc_tone_failures();
        assert_eq!(m.tone_attempts(), 2);
        assert_eq!(m.tone_failures(), 1);
    }

    #[test]
    fn reset_zeroes_all() {
        let m = Metrics::new();
        m.inc_analyses();
        m.inc_signals_abstained();
        m.inc_tone_attempts();
        m.reset();
        assert_eq!(m.analyses_run(), 0);
        assert_eq!(m.signals_abstained(), 0);
        assert_eq!(m.tone_attempts(), 0);
    }
}
