//! Forensic verdict statuses and their confidence bands.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Confidence bands
// ---------------------------------------------------------------------------

/// Inclusive lower / exclusive upper confidence bounds for each verdict.
/// Confidence is always sampled uniformly within the band for its status.
pub const BAND_AUTHENTIC: (f64, f64) = (0.92, 0.99);
pub const BAND_SUSPICIOUS: (f64, f64) = (0.45, 0.85);
pub const BAND_FRAUDULENT: (f64, f64) = (0.15, 0.40);

// ---------------------------------------------------------------------------
// VerdictStatus
// ---------------------------------------------------------------------------

/// Classification outcome for an analyzed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictStatus {
    Authentic,
    Suspicious,
    Fraudulent,
}

impl VerdictStatus {
    /// All statuses in weight-vector order (authentic, suspicious, fraudulent).
    /// Cumulative weight scans must walk this order.
    pub const ALL: [VerdictStatus; 3] = [
        VerdictStatus::Authentic,
        VerdictStatus::Suspicious,
        VerdictStatus::Fraudulent,
    ];

    /// String representation for serialization and report rendering.
    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictStatus::Authentic => "authentic",
            VerdictStatus::Suspicious => "suspicious",
            VerdictStatus::Fraudulent => "fraudulent",
        }
    }

    /// Parse from a string. Unknown values return `None` because no verdict
    /// is a safe default.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "authentic" => Some(VerdictStatus::Authentic),
            "suspicious" => Some(VerdictStatus::Suspicious),
            "fraudulent" => Some(VerdictStatus::Fraudulent),
            _ => None,
        }
    }

    /// The `(low, high)` confidence band documents with this status fall in.
    pub fn confidence_band(&self) -> (f64, f64) {
        match self {
            VerdictStatus::Authentic => BAND_AUTHENTIC,
            VerdictStatus::Suspicious => BAND_SUSPICIOUS,
            VerdictStatus::Fraudulent => BAND_FRAUDULENT,
        }
    }

    /// Whether a confidence score lies within this status's band.
    pub fn band_contains(&self, confidence: f64) -> bool {
        let (low, high) = self.confidence_band();
        confidence >= low && confidence < high
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
