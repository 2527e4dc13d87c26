//! Language preference metrics.
//!
//! Counters for language switches, rejected switches, initialization
//! fallbacks and failed persistence writes.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global language metrics singleton.
pub struct LanguageMetrics {
    /// Number of successful `set_language` calls
    changes: AtomicUsize,

    /// Number of `set_language` calls rejected as unsupported
    rejections: AtomicUsize,

    /// Number of initializations that fell back to the default language
    /// because the persisted value was unreadable, malformed or unsupported
    fallbacks: AtomicUsize,

    /// Number of failed writes to persistent storage
    storage_failures: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<LanguageMetrics> = OnceLock::new();

impl LanguageMetrics {
    /// Get the global language metrics instance.
    pub fn global() -> &'static LanguageMetrics {
        METRICS.get_or_init(|| LanguageMetrics {
            changes: AtomicUsize::new(0),
            rejections: AtomicUsize::new(0),
            fallbacks: AtomicUsize::new(0),
            storage_failures: AtomicUsize::new(0),
        })
    }

    pub fn record_change(&self) {
        self.changes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejection(&self) {
        self.rejections.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_storage_failure(&self) {
        self.storage_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn changes(&self) -> usize {
        self.changes.load(Ordering::Relaxed)
    }

    pub fn rejections(&self) -> usize {
        self.rejections.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn storage_failures(&self) -> usize {
        self.storage_failures.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let changes = self.changes();
        let rejections = self.rejections();
        let requests = changes + rejections;
        let acceptance_rate = if requests > 0 {
            (changes as f64 / requests as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            changes,
            rejections,
            acceptance_rate,
            fallbacks: self.fallbacks(),
            storage_failures: self.storage_failures(),
        }
    }

    /// Reset all metrics to zero (useful for testing).
    pub fn reset(&self) {
        self.changes.store(0, Ordering::Relaxed);
        self.rejections.store(0, Ordering::Relaxed);
        self.fallbacks.store(0, Ordering::Relaxed);
        self.storage_failures.store(0, Ordering::Relaxed);
    }
}

/// Metrics report containing current language preference statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Number of accepted language changes
    pub changes: usize,

    /// Number of rejected language changes
    pub rejections: usize,

    /// Accepted changes as a percentage of all change requests (0-100)
    pub acceptance_rate: f64,

    /// Number of initializations that used the default language
    pub fallbacks: usize,

    /// Number of failed persistence writes
    pub storage_failures: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // Helper to reset metrics before each test
    fn reset_metrics() {
        LanguageMetrics::global().reset();
    }

    #[test]
    #[serial]
    fn test_counters() {
        reset_metrics();
        let metrics = LanguageMetrics::global();

        metrics.record_change();
        metrics.record_change();
        metrics.record_rejection();
        metrics.record_fallback();
        metrics.record_storage_failure();

        assert_eq!(metrics.changes(), 2);
        assert_eq!(metrics.rejections(), 1);
        assert_eq!(metrics.fallbacks(), 1);
        assert_eq!(metrics.storage_failures(), 1);
    }

    #[test]
    #[serial]
    fn test_report_empty() {
        reset_metrics();
        let report = LanguageMetrics::global().report();

        assert_eq!(report.changes, 0);
        assert_eq!(report.acceptance_rate, 0.0);
    }

    #[test]
    #[serial]
    fn test_report_acceptance_rate() {
        reset_metrics();
        let metrics = LanguageMetrics::global();

        for _ in 0..3 {
            metrics.record_change();
        }
        metrics.record_rejection();

        let report = metrics.report();
        assert!((report.acceptance_rate - 75.0).abs() < 0.01);
    }

    #[test]
    #[serial]
    fn test_report_serializes() {
        reset_metrics();
        let json = serde_json::to_string(&LanguageMetrics::global().report()).unwrap();
        assert!(json.contains("\"storage_failures\":0"));
    }

    #[test]
    fn test_global_returns_same_instance() {
        assert!(std::ptr::eq(LanguageMetrics::global(), LanguageMetrics::global()));
    }
}
