//! Synthetic supporting-evidence generation.
//!
//! Produces the raw material an analysis is built from: an OCR text sample,
//! a plausible metadata block, a blockchain verification draw, and (for
//! images) candidate tampering regions. Deterministic in shape, randomized
//! in content; a pure function of the category and the RNG stream.

use chrono::{Duration, Utc};
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::document::{DocumentMetadata, RegionSeverity, TamperingRegion};
use crate::file::FileCategory;

// ---------------------------------------------------------------------------
// Candidate corpora
// ---------------------------------------------------------------------------

/// Fixed OCR text corpus. One sample is drawn per analysis.
pub const OCR_SAMPLES: [&str; 4] = [
    "CERTIFICATE OF COMPLETION\nThis is to certify that John Doe has successfully completed the Advanced Data Science Course on December 15, 2024.",
    "OFFICIAL TRANSCRIPT\nStudent: Jane Smith\nGPA: 3.85\nDegree: Bachelor of Science in Computer Science\nGraduation Date: May 2024",
    "EMPLOYMENT VERIFICATION\nThis letter confirms that Michael Johnson has been employed as Senior Software Engineer since January 2023.",
    "IDENTITY DOCUMENT\nName: Sarah Wilson\nDate of Birth: March 12, 1995\nDocument Number: ID123456789\nExpiry Date: March 2029",
];

const SOFTWARE_PDF: [&str; 4] = [
    "Adobe Acrobat Pro",
    "Microsoft Word",
    "LibreOffice",
    "PDFCreator",
];

const SOFTWARE_WORD: [&str; 3] = ["Microsoft Word 2019", "Google Docs", "LibreOffice Writer"];

const SOFTWARE_IMAGE: [&str; 4] = ["Adobe Photoshop", "GIMP", "Canva", "iPhone Camera"];

/// Author candidates. The empty string is a valid draw (author stripped).
const AUTHORS: [&str; 4] = ["John Doe", "System Administrator", "HR Department", ""];

/// Producer string attached to PDF metadata only.
pub const PDF_PRODUCER: &str = "PDF Library 1.2";

// ---------------------------------------------------------------------------
// Probabilities and ranges
// ---------------------------------------------------------------------------

/// Probability that the ledger lookup reports the document as anchored.
pub const P_BLOCKCHAIN_VERIFIED: f64 = 0.6;

/// Probability that an image gets candidate tampering regions at all.
pub const P_TAMPERING_REGIONS: f64 = 0.4;

/// Creation date is uniform within the past year.
const CREATION_WINDOW_SECS: i64 = 365 * 24 * 60 * 60;

/// Last-modified date is uniform within the past 30 days.
const MODIFIED_WINDOW_SECS: i64 = 30 * 24 * 60 * 60;

// ---------------------------------------------------------------------------
// Evidence
// ---------------------------------------------------------------------------

/// Raw synthesized evidence for one file, before the verdict template is
/// applied by the assembler.
#[derive(Debug, Clone)]
pub struct Evidence {
    pub ocr_text: String,
    pub metadata: DocumentMetadata,
    pub blockchain_verified: bool,
    /// Present iff `blockchain_verified`. Verdict templates may override.
    pub blockchain_hash: Option<String>,
    /// Candidate regions; non-empty only for images that passed the
    /// [`P_TAMPERING_REGIONS`] coin flip.
    pub tampering_regions: Vec<TamperingRegion>,
}

/// Synthesize evidence for a file of the given category.
///
/// Always succeeds; the output shape is deterministic while the content is
/// drawn from the RNG stream.
pub fn synthesize(category: FileCategory, rng: &mut impl Rng) -> Evidence {
    let now = Utc::now();

    let ocr_text = (*OCR_SAMPLES
        .choose(rng)
        .unwrap_or(&OCR_SAMPLES[0]))
    .to_string();

    let creation_date = now - Duration::seconds(rng.random_range(0..CREATION_WINDOW_SECS));
    let last_modified = now - Duration::seconds(rng.random_range(0..MODIFIED_WINDOW_SECS));

    let software = match category {
        FileCategory::Pdf => SOFTWARE_PDF.choose(rng),
        FileCategory::Word => SOFTWARE_WORD.choose(rng),
        FileCategory::Image | FileCategory::Other => SOFTWARE_IMAGE.choose(rng),
    }
    .map(|s| s.to_string());

    let author = AUTHORS.choose(rng).map(|s| s.to_string());

    let producer = match category {
        FileCategory::Pdf => Some(PDF_PRODUCER.to_string()),
        _ => None,
    };

    let blockchain_verified = rng.random_bool(P_BLOCKCHAIN_VERIFIED);
    let blockchain_hash = if blockchain_verified {
        Some(random_hash(rng))
    } else {
        None
    };

    let tampering_regions = if category == FileCategory::Image && rng.random_bool(P_TAMPERING_REGIONS)
    {
        let count = rng.random_range(1..=2);
        (0..count).map(|_| random_region(rng)).collect()
    } else {
        Vec::new()
    };

    Evidence {
        ocr_text,
        metadata: DocumentMetadata {
            creation_date: Some(creation_date),
            last_modified: Some(last_modified),
            software,
            author,
            producer,
        },
        blockchain_verified,
        blockchain_hash,
        tampering_regions,
    }
}

/// Generate a `0x`-prefixed 32-byte hex hash from the RNG stream.
pub fn random_hash(rng: &mut impl Rng) -> String {
    let bytes: [u8; 32] = rng.random();
    let mut out = String::with_capacity(2 + 64);
    out.push_str("0x");
    for b in bytes {
        out.push_str(&format!("{b:02x}"));
    }
    out
}

/// Generate one tampering region with randomized geometry and severity.
fn random_region(rng: &mut impl Rng) -> TamperingRegion {
    let severity = *RegionSeverity::ALL
        .choose(rng)
        .unwrap_or(&RegionSeverity::Medium);
    TamperingRegion {
        x: rng.random_range(0.0..300.0),
        y: rng.random_range(0.0..200.0),
        width: rng.random_range(30.0..150.0),
        height: rng.random_range(15.0..60.0),
        severity,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
