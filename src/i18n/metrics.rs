//! Lookup metrics for a language context.
//!
//! Counts how many `t()` lookups resolved to a translation and how many fell
//! back to returning the raw key, so leaked keys show up in reports.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Lookup counters owned by one `LanguageContext`.
#[derive(Debug, Default)]
pub struct LookupMetrics {
    /// Number of lookups that found a translation
    hits: AtomicUsize,

    /// Number of lookups that returned the key itself
    fallbacks: AtomicUsize,
}

impl LookupMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a lookup that found a translation.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that fell back to the key.
    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.hits();
        let fallbacks = self.fallbacks();
        let total = hits + fallbacks;
        let hit_rate = if total > 0 {
            (hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            hits,
            fallbacks,
            hit_rate,
        }
    }
}

/// Snapshot of lookup statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    /// Number of lookups that found a translation
    pub hits: usize,

    /// Number of lookups that returned the raw key
    pub fallbacks: usize,

    /// Hit rate as a percentage (0-100)
    pub hit_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Counter Tests ====================

    #[test]
    fn test_record_hit() {
        let metrics = LookupMetrics::new();

        assert_eq!(metrics.hits(), 0);
        metrics.record_hit();
        assert_eq!(metrics.hits(), 1);
        metrics.record_hit();
        assert_eq!(metrics.hits(), 2);
    }

    #[test]
    fn test_record_fallback() {
        let metrics = LookupMetrics::new();

        assert_eq!(metrics.fallbacks(), 0);
        metrics.record_fallback();
        assert_eq!(metrics.fallbacks(), 1);
    }

    #[test]
    fn test_instances_are_independent() {
        let first = LookupMetrics::new();
        let second = LookupMetrics::new();

        first.record_hit();
        assert_eq!(first.hits(), 1);
        assert_eq!(second.hits(), 0);
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_report_empty() {
        let report = LookupMetrics::new().report();

        assert_eq!(report.hits, 0);
        assert_eq!(report.fallbacks, 0);
        assert_eq!(report.hit_rate, 0.0);
    }

    #[test]
    fn test_report_hit_rate() {
        let metrics = LookupMetrics::new();

        // 3 hits, 1 fallback = 75% hit rate
        metrics.record_hit();
        metrics.record_hit();
        metrics.record_hit();
        metrics.record_fallback();

        let report = metrics.report();
        assert_eq!(report.hits, 3);
        assert_eq!(report.fallbacks, 1);
        assert_eq!(report.hit_rate, 75.0);
    }

    #[test]
    fn test_report_all_fallbacks() {
        let metrics = LookupMetrics::new();

        metrics.record_fallback();
        metrics.record_fallback();

        assert_eq!(metrics.report().hit_rate, 0.0);
    }

    #[test]
    fn test_report_serializes() {
        let metrics = LookupMetrics::new();
        metrics.record_hit();

        let json = serde_json::to_value(metrics.report()).expect("Should serialize");
        assert_eq!(json["hits"], 1);
        assert_eq!(json["fallbacks"], 0);
        assert_eq!(json["hit_rate"], 100.0);
    }
}
