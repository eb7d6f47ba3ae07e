//! Uploaded-file descriptors and content-category classification.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// FileCategory
// ---------------------------------------------------------------------------

/// Declared content category of an uploaded file.
///
/// The category shifts the prior over analysis outcomes (some formats are
/// easier to forge convincingly than others) and selects which software
/// candidates appear in synthesized metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Image,
    Pdf,
    Word,
    Other,
}

impl FileCategory {
    /// String representation for serialization and logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileCategory::Image => "image",
            FileCategory::Pdf => "pdf",
            FileCategory::Word => "word",
            FileCategory::Other => "other",
        }
    }

    /// Parse from a string, defaulting to `Other` for unknown values.
    pub fn from_str(s: &str) -> Self {
        match s {
            "image" => FileCategory::Image,
            "pdf" => FileCategory::Pdf,
            "word" => FileCategory::Word,
            _ => FileCategory::Other,
        }
    }

    /// Classify a lowercase file extension.
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "jpg" | "jpeg" | "png" | "gif" => FileCategory::Image,
            "pdf" => FileCategory::Pdf,
            "doc" | "docx" => FileCategory::Word,
            _ => FileCategory::Other,
        }
    }

    /// Classify a filename by its extension.
    pub fn from_filename(name: &str) -> Self {
        match file_extension(name) {
            Some(ext) => Self::from_extension(&ext),
            None => FileCategory::Other,
        }
    }
}

/// Extract the lowercased extension of a filename, if any.
pub fn file_extension(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

// ---------------------------------------------------------------------------
// FileDescriptor
// ---------------------------------------------------------------------------

/// Caller-supplied description of an uploaded file. Immutable input to the
/// analysis pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub name: String,
    pub size_bytes: u64,
    pub category: FileCategory,
}

impl FileDescriptor {
    /// Build a descriptor, deriving the category from the filename extension.
    pub fn from_name(name: impl Into<String>, size_bytes: u64) -> Self {
        let name = name.into();
        let category = FileCategory::from_filename(&name);
        Self {
            name,
            size_bytes,
            category,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_as_str_round_trips() {
        for cat in [
            FileCategory::Image,
            FileCategory::Pdf,
            FileCategory::Word,
            FileCategory::Other,
        ] {
            assert_eq!(FileCategory::from_str(cat.as_str()), cat);
        }
    }

    #[test]
    fn category_from_str_defaults_unknown_to_other() {
        assert_eq!(FileCategory::from_str("spreadsheet"), FileCategory::Other);
        assert_eq!(FileCategory::from_str(""), FileCategory::Other);
    }

    #[test]
    fn image_extensions_classify_as_image() {
        for ext in ["jpg", "jpeg", "png", "gif"] {
            assert_eq!(FileCategory::from_extension(ext), FileCategory::Image);
        }
    }

    #[test]
    fn document_extensions_classify_correctly() {
        assert_eq!(FileCategory::from_extension("pdf"), FileCategory::Pdf);
        assert_eq!(FileCategory::from_extension("doc"), FileCategory::Word);
        assert_eq!(FileCategory::from_extension("docx"), FileCategory::Word);
    }

    #[test]
    fn unknown_extension_classifies_as_other() {
        assert_eq!(FileCategory::from_extension("txt"), FileCategory::Other);
        assert_eq!(FileCategory::from_extension("exe"), FileCategory::Other);
    }

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(file_extension("SCAN.PDF"), Some("pdf".to_string()));
        assert_eq!(FileCategory::from_filename("photo.JPG"), FileCategory::Image);
    }

    #[test]
    fn extension_uses_last_dot() {
        assert_eq!(file_extension("archive.tar.gz"), Some("gz".to_string()));
    }

    #[test]
    fn missing_extension_returns_none() {
        assert_eq!(file_extension("README"), None);
        assert_eq!(file_extension(".gitignore"), None);
        assert_eq!(file_extension("trailing."), None);
    }

    #[test]
    fn descriptor_from_name_derives_category() {
        let desc = FileDescriptor::from_name("diploma.pdf", 1024);
        assert_eq!(desc.category, FileCategory::Pdf);
        assert_eq!(desc.size_bytes, 1024);
    }
}
