//! Composition of evidence and outcome into an immutable [`Document`].

use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

use crate::document::{AnalysisReport, Document};
use crate::error::CoreError;
use crate::evidence;
use crate::file::FileDescriptor;
use crate::outcome::{self, BlockchainResolution};
use crate::verdict::VerdictStatus;

/// Run one full analysis: synthesize evidence, sample an outcome, merge the
/// two, and stamp identity fields.
///
/// Cross-field invariants enforced here:
/// - `metadata.last_modified >= metadata.creation_date` when both are set.
/// - The tampering heatmap is empty for authentic verdicts, truncated to a
///   single region for suspicious ones, and passed through whole for
///   fraudulent ones.
///
/// The document id is derived from the RNG stream, so a seeded RNG yields a
/// reproducible id. Only the upload timestamp escapes seed control.
pub fn assemble(
    descriptor: &FileDescriptor,
    owner_id: Uuid,
    rng: &mut impl Rng,
) -> Result<Document, CoreError> {
    if descriptor.name.trim().is_empty() {
        return Err(CoreError::Analysis(
            "cannot analyze a file with an empty name".to_string(),
        ));
    }
    if descriptor.size_bytes == 0 {
        return Err(CoreError::Analysis(format!(
            "file \"{}\" is empty and cannot be analyzed",
            descriptor.name
        )));
    }

    let now = Utc::now();
    let evidence = evidence::synthesize(descriptor.category, rng);
    let outcome = outcome::sample(descriptor.category, rng);

    let mut metadata = evidence.metadata;
    outcome::apply_metadata_override(outcome.status, &mut metadata, now);
    if let (Some(creation), Some(modified)) = (metadata.creation_date, metadata.last_modified) {
        if modified < creation {
            metadata.last_modified = Some(creation);
        }
    }

    let (blockchain_verified, blockchain_hash) = match outcome.blockchain {
        BlockchainResolution::Inherit => (evidence.blockchain_verified, evidence.blockchain_hash),
        BlockchainResolution::Sampled { verified, hash } => (verified, hash),
        BlockchainResolution::Rejected => (false, None),
    };

    let tampering_heatmap = match outcome.status {
        VerdictStatus::Authentic => Vec::new(),
        VerdictStatus::Suspicious => evidence.tampering_regions.into_iter().take(1).collect(),
        VerdictStatus::Fraudulent => evidence.tampering_regions,
    };

    let id = uuid::Builder::from_random_bytes(rng.random()).into_uuid();

    Ok(Document {
        id,
        owner_id,
        filename: descriptor.name.clone(),
        file_size: descriptor.size_bytes,
        uploaded_at: now,
        report: AnalysisReport {
            status: outcome.status,
            confidence_score: outcome.confidence_score,
            ocr_text: Some(evidence.ocr_text),
            metadata: Some(metadata),
            blockchain_verified,
            blockchain_hash,
            tampering_heatmap,
            checks: outcome.checks,
        },
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
