//! Analyzed-document records: the immutable output of the analysis pipeline.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Timestamp;
use crate::verdict::VerdictStatus;

// ---------------------------------------------------------------------------
// DocumentMetadata
// ---------------------------------------------------------------------------

/// Synthesized document metadata. All fields optional; when both dates are
/// present, `last_modified >= creation_date` holds after assembly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub creation_date: Option<Timestamp>,
    pub last_modified: Option<Timestamp>,
    pub software: Option<String>,
    pub author: Option<String>,
    pub producer: Option<String>,
}

// ---------------------------------------------------------------------------
// Tampering regions
// ---------------------------------------------------------------------------

/// Severity tag for a flagged tampering region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionSeverity {
    Low,
    Medium,
    High,
}

impl RegionSeverity {
    pub const ALL: [RegionSeverity; 3] = [
        RegionSeverity::Low,
        RegionSeverity::Medium,
        RegionSeverity::High,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RegionSeverity::Low => "low",
            RegionSeverity::Medium => "medium",
            RegionSeverity::High => "high",
        }
    }
}

/// A rectangular image region flagged as suspected manipulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TamperingRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub severity: RegionSeverity,
}

// ---------------------------------------------------------------------------
// AnalysisChecks
// ---------------------------------------------------------------------------

/// Per-check booleans and supporting evidence lists for one analysis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisChecks {
    pub text_extracted: bool,
    pub metadata_check: bool,
    pub font_consistency: bool,
    pub watermark_present: bool,
    pub suspicious_edits: bool,
    pub hidden_text_detected: bool,
    pub font_mismatches: Vec<String>,
    pub typos_detected: Vec<String>,
    pub anomalies: Vec<String>,
    pub ai_suggestions: Vec<String>,
}

// ---------------------------------------------------------------------------
// AnalysisReport
// ---------------------------------------------------------------------------

/// The full synthesized forensic result for one file.
///
/// Invariant: for `Authentic` and `Fraudulent` verdicts,
/// `blockchain_hash.is_some() == blockchain_verified`. The `Suspicious`
/// template samples the two fields independently (see `outcome` module).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub status: VerdictStatus,
    pub confidence_score: f64,
    pub ocr_text: Option<String>,
    pub metadata: Option<DocumentMetadata>,
    pub blockchain_verified: bool,
    pub blockchain_hash: Option<String>,
    pub tampering_heatmap: Vec<TamperingRegion>,
    pub checks: AnalysisChecks,
}

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// An analysis report plus identity and provenance. Created once at assembly
/// time and never mutated; histories are append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub filename: String,
    pub file_size: u64,
    pub uploaded_at: Timestamp,
    #[serde(flatten)]
    pub report: AnalysisReport,
}
