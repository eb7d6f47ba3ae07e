//! Upload validation rules applied before a file enters the queue.

use crate::error::CoreError;
use crate::file::{file_extension, FileDescriptor};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum accepted upload size.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Extensions accepted for analysis.
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "jpg", "jpeg", "png", "gif", "doc", "docx", "txt"];

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate an upload descriptor.
///
/// Rules:
/// - The filename must not be empty and must carry an extension.
/// - The extension must be one of [`ALLOWED_EXTENSIONS`].
/// - The file must not exceed [`MAX_UPLOAD_BYTES`].
///
/// Rejected files never reach the analysis assembler.
pub fn validate_upload(descriptor: &FileDescriptor) -> Result<(), CoreError> {
    if descriptor.name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Filename must not be empty".to_string(),
        ));
    }

    let ext = file_extension(&descriptor.name).ok_or_else(|| {
        CoreError::Validation(format!(
            "File \"{}\" has no extension; expected one of: {}",
            descriptor.name,
            ALLOWED_EXTENSIONS.join(", ")
        ))
    })?;

    if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        return Err(CoreError::Validation(format!(
            "Unsupported file type \".{ext}\"; expected one of: {}",
            ALLOWED_EXTENSIONS.join(", ")
        )));
    }

    if descriptor.size_bytes > MAX_UPLOAD_BYTES {
        return Err(CoreError::Validation(format!(
            "File size {} exceeds the {} byte limit",
            descriptor.size_bytes, MAX_UPLOAD_BYTES
        )));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
