//! Weighted verdict sampling and per-status analysis field generation.
//!
//! The file category shifts the prior over the three verdicts; once a status
//! is chosen, field generation depends only on the status (plus the one
//! documented metadata override). Candidate evidence strings live in
//! declared `(text, inclusion probability)` tables rather than inline
//! literals so the probability model stays reviewable in one place.

use rand::Rng;

use crate::document::{AnalysisChecks, DocumentMetadata};
use crate::evidence::random_hash;
use crate::file::FileCategory;
use crate::types::Timestamp;
use crate::verdict::VerdictStatus;

// ---------------------------------------------------------------------------
// Category weight vectors
// ---------------------------------------------------------------------------

/// Outcome weights over (authentic, suspicious, fraudulent). Each vector
/// sums to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusWeights {
    pub authentic: f64,
    pub suspicious: f64,
    pub fraudulent: f64,
}

impl StatusWeights {
    /// The weight vector for a file category.
    ///
    /// PDFs are hardest to forge convincingly, images easiest.
    pub fn for_category(category: FileCategory) -> Self {
        match category {
            FileCategory::Pdf => StatusWeights {
                authentic: 0.60,
                suspicious: 0.25,
                fraudulent: 0.15,
            },
            FileCategory::Image => StatusWeights {
                authentic: 0.40,
                suspicious: 0.35,
                fraudulent: 0.25,
            },
            FileCategory::Word => StatusWeights {
                authentic: 0.50,
                suspicious: 0.35,
                fraudulent: 0.15,
            },
            FileCategory::Other => StatusWeights {
                authentic: 0.50,
                suspicious: 0.30,
                fraudulent: 0.20,
            },
        }
    }

    /// Weights in the fixed scan order (authentic, suspicious, fraudulent).
    pub fn as_array(&self) -> [(VerdictStatus, f64); 3] {
        [
            (VerdictStatus::Authentic, self.authentic),
            (VerdictStatus::Suspicious, self.suspicious),
            (VerdictStatus::Fraudulent, self.fraudulent),
        ]
    }

    pub fn sum(&self) -> f64 {
        self.authentic + self.suspicious + self.fraudulent
    }

    /// Draw a verdict: `u` uniform in `[0, 1)`, walk the cumulative sums in
    /// fixed order, stop at the first bucket whose cumulative sum reaches
    /// `u` (`<=` comparison, so ties resolve to the earlier bucket).
    pub fn sample(&self, rng: &mut impl Rng) -> VerdictStatus {
        let u: f64 = rng.random();
        let mut cumulative = 0.0;
        for (status, weight) in self.as_array() {
            cumulative += weight;
            if u <= cumulative {
                return status;
            }
        }
        // Unreachable for well-formed weights; guard against float round-off.
        VerdictStatus::Fraudulent
    }
}

// ---------------------------------------------------------------------------
// Per-flag probabilities (suspicious template)
// ---------------------------------------------------------------------------

pub const P_SUSPICIOUS_METADATA_CHECK: f64 = 0.5;
pub const P_SUSPICIOUS_FONT_CONSISTENCY: f64 = 0.7;
pub const P_SUSPICIOUS_WATERMARK_PRESENT: f64 = 0.3;
pub const P_SUSPICIOUS_EDITS: f64 = 0.6;
pub const P_SUSPICIOUS_HIDDEN_TEXT: f64 = 0.4;

/// Probability the suspicious template reports the ledger as verified.
pub const P_SUSPICIOUS_BLOCKCHAIN_VERIFIED: f64 = 0.3;

/// Probability the suspicious template attaches a hash. Sampled
/// independently of the verified flag; see [`BlockchainResolution`].
pub const P_SUSPICIOUS_BLOCKCHAIN_HASH: f64 = 0.3;

// ---------------------------------------------------------------------------
// Candidate tables
// ---------------------------------------------------------------------------

/// An evidence string candidate with its independent inclusion probability.
pub type WeightedCandidate = (&'static str, f64);

pub const AUTHENTIC_SUGGESTIONS: &[WeightedCandidate] = &[
    ("Document appears authentic with consistent formatting", 0.5),
    ("All security features are present and valid", 0.5),
    ("Metadata indicates legitimate creation process", 0.5),
];

pub const SUSPICIOUS_FONT_MISMATCHES: &[WeightedCandidate] = &[
    ("Arial mixed with Times New Roman in paragraph 2", 0.5),
    ("Inconsistent font sizes detected", 0.5),
];

pub const SUSPICIOUS_TYPOS: &[WeightedCandidate] = &[
    ("Misspelled \"recieve\" should be \"receive\"", 0.4),
    ("Grammar error in line 3", 0.4),
];

pub const SUSPICIOUS_ANOMALIES: &[WeightedCandidate] = &[
    ("Inconsistent font sizing detected", 0.5),
    ("Metadata timestamp anomaly", 0.5),
    ("Document modified after creation date", 0.5),
    ("Unusual software used for document type", 0.5),
];

pub const SUSPICIOUS_SUGGESTIONS: &[WeightedCandidate] = &[
    ("Document may have been edited after initial creation", 0.6),
    ("Consider requesting original document from issuing authority", 0.6),
    ("Multiple editing sessions detected in metadata", 0.6),
];

/// Always included in full for fraudulent verdicts.
pub const FRAUDULENT_FONT_MISMATCHES: &[&str] = &[
    "Multiple font families in single paragraph",
    "Inconsistent character spacing",
    "Font rendering quality varies across document",
];

/// Always included in full for fraudulent verdicts.
pub const FRAUDULENT_TYPOS: &[&str] = &[
    "Multiple spelling errors suggest automated generation",
    "Grammar inconsistencies throughout document",
    "Unusual character substitutions detected",
];

pub const FRAUDULENT_ANOMALIES: &[WeightedCandidate] = &[
    ("Multiple font families detected in single paragraph", 0.7),
    ("Digital signature missing or invalid", 0.7),
    ("Metadata indicates recent modifications", 0.7),
    ("Text overlay patterns suggest tampering", 0.7),
    ("Hidden text layers detected", 0.7),
    ("Inconsistent image compression", 0.7),
    ("Suspicious editing software detected", 0.7),
];

/// Always included in full for fraudulent verdicts.
pub const FRAUDULENT_SUGGESTIONS: &[&str] = &[
    "Document shows clear signs of digital manipulation",
    "Recommend immediate verification with issuing authority",
    "Multiple red flags indicate likely forgery",
    "Consider reporting to relevant authorities",
];

/// Editing software injected into suspicious and fraudulent metadata.
pub const SUSPECT_EDITING_SOFTWARE: &str = "Adobe Photoshop CC";

/// Author forced onto fraudulent metadata.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// How the verdict template resolves the blockchain fields.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockchainResolution {
    /// Use the evidence draw unchanged (authentic).
    Inherit,
    /// Independently sampled flag and optional hash (suspicious). The two
    /// draws are intentionally decoupled, so a hash can be present while
    /// `verified` is false. Known quirk of the demo generator, preserved
    /// for compatibility; the assembler does not repair it.
    Sampled {
        verified: bool,
        hash: Option<String>,
    },
    /// Verified forced false, hash forced absent (fraudulent).
    Rejected,
}

/// The sampled verdict with its rendered analysis fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub status: VerdictStatus,
    pub confidence_score: f64,
    pub checks: AnalysisChecks,
    pub blockchain: BlockchainResolution,
}

/// Sample a verdict for the category and render its template fields.
pub fn sample(category: FileCategory, rng: &mut impl Rng) -> Outcome {
    let status = StatusWeights::for_category(category).sample(rng);
    render(status, rng)
}

/// Render the analysis fields for an already-chosen status.
pub fn render(status: VerdictStatus, rng: &mut impl Rng) -> Outcome {
    let (low, high) = status.confidence_band();
    let confidence_score = rng.random_range(low..high);

    match status {
        VerdictStatus::Authentic => Outcome {
            status,
            confidence_score,
            checks: AnalysisChecks {
                text_extracted: true,
                metadata_check: true,
                font_consistency: true,
                watermark_present: true,
                suspicious_edits: false,
                hidden_text_detected: false,
                font_mismatches: Vec::new(),
                typos_detected: Vec::new(),
                anomalies: Vec::new(),
                ai_suggestions: sample_candidates(AUTHENTIC_SUGGESTIONS, rng),
            },
            blockchain: BlockchainResolution::Inherit,
        },
        VerdictStatus::Suspicious => {
            let checks = AnalysisChecks {
                text_extracted: true,
                metadata_check: rng.random_bool(P_SUSPICIOUS_METADATA_CHECK),
                font_consistency: rng.random_bool(P_SUSPICIOUS_FONT_CONSISTENCY),
                watermark_present: rng.random_bool(P_SUSPICIOUS_WATERMARK_PRESENT),
                suspicious_edits: rng.random_bool(P_SUSPICIOUS_EDITS),
                hidden_text_detected: rng.random_bool(P_SUSPICIOUS_HIDDEN_TEXT),
                font_mismatches: sample_candidates(SUSPICIOUS_FONT_MISMATCHES, rng),
                typos_detected: sample_candidates(SUSPICIOUS_TYPOS, rng),
                anomalies: sample_candidates(SUSPICIOUS_ANOMALIES, rng),
                ai_suggestions: sample_candidates(SUSPICIOUS_SUGGESTIONS, rng),
            };
            let verified = rng.random_bool(P_SUSPICIOUS_BLOCKCHAIN_VERIFIED);
            let hash = if rng.random_bool(P_SUSPICIOUS_BLOCKCHAIN_HASH) {
                Some(random_hash(rng))
            } else {
                None
            };
            Outcome {
                status,
                confidence_score,
                checks,
                blockchain: BlockchainResolution::Sampled { verified, hash },
            }
        }
        VerdictStatus::Fraudulent => Outcome {
            status,
            confidence_score,
            checks: AnalysisChecks {
                text_extracted: true,
                metadata_check: false,
                font_consistency: false,
                watermark_present: false,
                suspicious_edits: true,
                hidden_text_detected: true,
                font_mismatches: full_list(FRAUDULENT_FONT_MISMATCHES),
                typos_detected: full_list(FRAUDULENT_TYPOS),
                anomalies: sample_candidates(FRAUDULENT_ANOMALIES, rng),
                ai_suggestions: full_list(FRAUDULENT_SUGGESTIONS),
            },
            blockchain: BlockchainResolution::Rejected,
        },
    }
}

/// Apply the per-status metadata override to synthesized metadata.
///
/// - Suspicious: very recent modification with photo-editing software,
///   regardless of category.
/// - Fraudulent: created just now by unknown author with photo-editing
///   software.
pub fn apply_metadata_override(
    status: VerdictStatus,
    metadata: &mut DocumentMetadata,
    now: Timestamp,
) {
    match status {
        VerdictStatus::Authentic => {}
        VerdictStatus::Suspicious => {
            metadata.last_modified = Some(now);
            metadata.software = Some(SUSPECT_EDITING_SOFTWARE.to_string());
        }
        VerdictStatus::Fraudulent => {
            metadata.creation_date = Some(now);
            metadata.software = Some(SUSPECT_EDITING_SOFTWARE.to_string());
            metadata.author = Some(UNKNOWN_AUTHOR.to_string());
        }
    }
}

/// Independently include each candidate with its declared probability.
fn sample_candidates(table: &[WeightedCandidate], rng: &mut impl Rng) -> Vec<String> {
    table
        .iter()
        .filter(|(_, p)| rng.random_bool(*p))
        .map(|(text, _)| text.to_string())
        .collect()
}

fn full_list(table: &[&str]) -> Vec<String> {
    table.iter().map(|s| s.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
