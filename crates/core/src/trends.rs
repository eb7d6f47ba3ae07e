//! Per-day confidence rollups and the directional trend signal.
//!
//! Day grouping uses the UTC calendar date of the upload timestamp so
//! rollups are reproducible across environments. The direction heuristic is
//! a smoothing comparison of recent vs earlier daily averages, not a
//! statistical trend test; its exact boundary behavior is pinned by tests.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::verdict::VerdictStatus;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of trailing days treated as "recent" by the direction heuristic.
pub const RECENT_WINDOW_DAYS: usize = 3;

/// Minimum difference between recent and earlier means before the trend is
/// reported as moving.
pub const TREND_DELTA_THRESHOLD: f64 = 0.05;

// ---------------------------------------------------------------------------
// TrendDirection
// ---------------------------------------------------------------------------

/// Coarse signal comparing recent average confidence to prior average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Up => "up",
            TrendDirection::Down => "down",
            TrendDirection::Stable => "stable",
        }
    }
}

// ---------------------------------------------------------------------------
// DayRollup
// ---------------------------------------------------------------------------

/// Aggregated statistics for all documents uploaded on one UTC calendar day.
/// Derived on demand; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRollup {
    pub date: NaiveDate,
    pub document_count: usize,
    pub average_confidence: f64,
    pub authentic_count: usize,
    pub suspicious_count: usize,
    pub fraudulent_count: usize,
}

/// The full trend report for a document history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    /// One rollup per distinct day, ascending date order.
    pub rollups: Vec<DayRollup>,
    pub direction: TrendDirection,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Reduce a document history into per-day rollups and a trend direction.
///
/// An empty history is a defined empty state: no rollups, direction
/// [`TrendDirection::Stable`].
pub fn aggregate(documents: &[Document]) -> TrendSummary {
    struct DayAccumulator {
        confidence_sum: f64,
        count: usize,
        authentic: usize,
        suspicious: usize,
        fraudulent: usize,
    }

    let mut days: BTreeMap<NaiveDate, DayAccumulator> = BTreeMap::new();
    for doc in documents {
        let date = doc.uploaded_at.date_naive();
        let acc = days.entry(date).or_insert(DayAccumulator {
            confidence_sum: 0.0,
            count: 0,
            authentic: 0,
            suspicious: 0,
            fraudulent: 0,
        });
        acc.confidence_sum += doc.report.confidence_score;
        acc.count += 1;
        match doc.report.status {
            VerdictStatus::Authentic => acc.authentic += 1,
            VerdictStatus::Suspicious => acc.suspicious += 1,
            VerdictStatus::Fraudulent => acc.fraudulent += 1,
        }
    }

    let rollups: Vec<DayRollup> = days
        .into_iter()
        .map(|(date, acc)| DayRollup {
            date,
            document_count: acc.count,
            average_confidence: acc.confidence_sum / acc.count as f64,
            authentic_count: acc.authentic,
            suspicious_count: acc.suspicious,
            fraudulent_count: acc.fraudulent,
        })
        .collect();

    let direction = direction_for(&rollups);

    TrendSummary { rollups, direction }
}

/// Compute the trend direction from ascending-date rollups.
///
/// With fewer than 2 distinct days the trend is always `Stable`. Otherwise
/// the mean of the last `min(3, n)` daily averages is compared against the
/// sum of the remaining earlier averages divided by `max(1, n - 3)`; the
/// earlier term contributes 0 when no earlier days exist.
pub fn direction_for(rollups: &[DayRollup]) -> TrendDirection {
    let n = rollups.len();
    if n < 2 {
        return TrendDirection::Stable;
    }

    let window = RECENT_WINDOW_DAYS.min(n);
    let recent: f64 = rollups[n - window..]
        .iter()
        .map(|r| r.average_confidence)
        .sum::<f64>()
        / window as f64;

    let earlier_days = n.saturating_sub(RECENT_WINDOW_DAYS);
    let earlier: f64 = rollups[..earlier_days]
        .iter()
        .map(|r| r.average_confidence)
        .sum::<f64>()
        / earlier_days.max(1) as f64;

    let delta = recent - earlier;
    if delta > TREND_DELTA_THRESHOLD {
        TrendDirection::Up
    } else if delta < -TREND_DELTA_THRESHOLD {
        TrendDirection::Down
    } else {
        TrendDirection::Stable
    }
}

// ---------------------------------------------------------------------------
// History stats
// ---------------------------------------------------------------------------

/// Whole-history statistics for dashboard summary tiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryStats {
    pub total_documents: usize,
    pub overall_average_confidence: f64,
    pub authentic_count: usize,
    pub suspicious_count: usize,
    pub fraudulent_count: usize,
    pub blockchain_verified_count: usize,
}

/// Compute whole-history stats. An empty history yields zeroed stats.
pub fn history_stats(documents: &[Document]) -> HistoryStats {
    let total = documents.len();
    let confidence_sum: f64 = documents.iter().map(|d| d.report.confidence_score).sum();
    HistoryStats {
        total_documents: total,
        overall_average_confidence: if total == 0 {
            0.0
        } else {
            confidence_sum / total as f64
        },
        authentic_count: documents
            .iter()
            .filter(|d| d.report.status == VerdictStatus::Authentic)
            .count(),
        suspicious_count: documents
            .iter()
            .filter(|d| d.report.status == VerdictStatus::Suspicious)
            .count(),
        fraudulent_count: documents
            .iter()
            .filter(|d| d.report.status == VerdictStatus::Fraudulent)
            .count(),
        blockchain_verified_count: documents
            .iter()
            .filter(|d| d.report.blockchain_verified)
            .count(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
