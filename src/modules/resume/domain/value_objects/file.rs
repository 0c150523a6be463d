use serde::Serialize;
use std::fmt;
use std::path::Path;

use crate::resume::domain::errors::ValidationError;

pub const MIN_FILE_SIZE_BYTES: u64 = 1024; // 1 KiB
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024; // 10 MiB
pub const MAX_FILE_NAME_LEN: usize = 255;

const FORBIDDEN_FILE_NAME_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

// ============================================================================
// FileType
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Pdf,
    Doc,
    Docx,
}

impl FileType {
    pub const ALL: [FileType; 3] = [FileType::Pdf, FileType::Doc, FileType::Docx];

    pub const fn extension(self) -> &'static str {
        match self {
            FileType::Pdf => "pdf",
            FileType::Doc => "doc",
            FileType::Docx => "docx",
        }
    }

    pub const fn mime_type(self) -> &'static str {
        match self {
            FileType::Pdf => "application/pdf",
            FileType::Doc => "application/msword",
            FileType::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    pub fn from_extension(ext: &str) -> Result<Self, ValidationError> {
        let lower = ext.trim().to_ascii_lowercase();
        FileType::ALL
            .into_iter()
            .find(|t| t.extension() == lower)
            .ok_or(ValidationError::InvalidExtension(lower))
    }

    pub fn from_mime_type(mime_type: &str) -> Result<Self, ValidationError> {
        let lower = mime_type.trim().to_ascii_lowercase();
        FileType::ALL
            .into_iter()
            .find(|t| t.mime_type() == lower)
            .ok_or(ValidationError::UnsupportedMimeType(lower))
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

// ============================================================================
// FileName
// ============================================================================

/// Original name of an uploaded résumé file. Always carries an allowed extension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FileName(String);

impl FileName {
    pub fn try_new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if value.trim().is_empty() {
            return Err(ValidationError::EmptyField("file_name"));
        }

        let actual = value.chars().count();
        if actual > MAX_FILE_NAME_LEN {
            return Err(ValidationError::Length {
                field: "file_name",
                min: 1,
                max: MAX_FILE_NAME_LEN,
                actual,
            });
        }

        if value
            .chars()
            .any(|c| c.is_control() || FORBIDDEN_FILE_NAME_CHARS.contains(&c))
        {
            return Err(ValidationError::InvalidCharacters("file_name"));
        }

        FileType::from_extension(&extension_of(&value)?)?;

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased extension, without the dot.
    pub fn extension(&self) -> String {
        // Validated at construction.
        extension_of(&self.0).unwrap_or_default()
    }

    pub fn file_type(&self) -> Option<FileType> {
        FileType::from_extension(&self.extension()).ok()
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn extension_of(file_name: &str) -> Result<String, ValidationError> {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .trim();

    if ext.is_empty() {
        return Err(ValidationError::InvalidExtension(String::new()));
    }

    Ok(ext.to_ascii_lowercase())
}

// ============================================================================
// FileSize
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FileSize(u64);

impl FileSize {
    pub fn try_new(bytes: u64) -> Result<Self, ValidationError> {
        if !(MIN_FILE_SIZE_BYTES..=MAX_FILE_SIZE_BYTES).contains(&bytes) {
            return Err(ValidationError::FileSizeOutOfRange {
                min_bytes: MIN_FILE_SIZE_BYTES,
                max_bytes: MAX_FILE_SIZE_BYTES,
                actual_bytes: bytes,
            });
        }
        Ok(Self(bytes))
    }

    pub fn bytes(&self) -> u64 {
        self.0
    }
}

// ============================================================================
// StorageKey
// ============================================================================

/// Opaque object key issued by the file storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StorageKey(String);

impl StorageKey {
    pub fn try_new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyField("storage_key"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// FileDescriptor
// ============================================================================

/// Everything the lifecycle needs to know about the stored file. Replaced wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDescriptor {
    name: FileName,
    size: FileSize,
    file_type: FileType,
    storage_key: StorageKey,
}

impl FileDescriptor {
    pub fn new(
        name: FileName,
        size: FileSize,
        file_type: FileType,
        storage_key: StorageKey,
    ) -> Result<Self, ValidationError> {
        if name.file_type() != Some(file_type) {
            return Err(ValidationError::MimeExtensionMismatch {
                mime_type: file_type.mime_type().to_string(),
                ext: name.extension(),
            });
        }

        Ok(Self {
            name,
            size,
            file_type,
            storage_key,
        })
    }

    /// Same stored object under a new display name. The extension cannot change.
    pub fn renamed(&self, name: FileName) -> Result<Self, ValidationError> {
        let current = self.name.extension();
        let requested = name.extension();
        if current != requested {
            return Err(ValidationError::ExtensionChange {
                from: current,
                to: requested,
            });
        }

        Ok(Self {
            name,
            ..self.clone()
        })
    }

    pub fn name(&self) -> &FileName {
        &self.name
    }

    pub fn size(&self) -> FileSize {
        self.size
    }

    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    pub fn storage_key(&self) -> &StorageKey {
        &self.storage_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(name: &str, file_type: FileType) -> Result<FileDescriptor, ValidationError> {
        FileDescriptor::new(
            FileName::try_new(name)?,
            FileSize::try_new(4096)?,
            file_type,
            StorageKey::try_new("owner/abc-resume")?,
        )
    }

    // -----------------------
    // FileName tests
    // -----------------------

    #[test]
    fn test_file_name_accepts_allowed_extensions() {
        for name in ["cv.pdf", "cv.DOC", "my resume.docx", "이력서.pdf"] {
            assert!(FileName::try_new(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_file_name_rejects_forbidden_characters() {
        for name in ["../cv.pdf", "a/b.pdf", "c:cv.pdf", "cv?.pdf", "cv|x.pdf", "cv\n.pdf"] {
            assert_eq!(
                FileName::try_new(name),
                Err(ValidationError::InvalidCharacters("file_name")),
                "{name:?}"
            );
        }
    }

    #[test]
    fn test_file_name_rejects_unknown_or_missing_extension() {
        assert_eq!(
            FileName::try_new("photo.png"),
            Err(ValidationError::InvalidExtension("png".to_string()))
        );
        assert_eq!(
            FileName::try_new("resume"),
            Err(ValidationError::InvalidExtension(String::new()))
        );
    }

    #[test]
    fn test_file_name_length_bounds() {
        assert_eq!(
            FileName::try_new(""),
            Err(ValidationError::EmptyField("file_name"))
        );

        let longest = format!("{}.pdf", "a".repeat(MAX_FILE_NAME_LEN - 4));
        assert!(FileName::try_new(longest).is_ok());

        let too_long = format!("{}.pdf", "a".repeat(MAX_FILE_NAME_LEN));
        assert!(matches!(
            FileName::try_new(too_long),
            Err(ValidationError::Length { .. })
        ));
    }

    #[test]
    fn test_file_name_extension_is_lowercased() {
        let name = FileName::try_new("CV.PDF").unwrap();
        assert_eq!(name.extension(), "pdf");
        assert_eq!(name.file_type(), Some(FileType::Pdf));
    }

    // -----------------------
    // FileType / FileSize tests
    // -----------------------

    #[test]
    fn test_file_type_mime_lookup() {
        assert_eq!(
            FileType::from_mime_type("application/pdf"),
            Ok(FileType::Pdf)
        );
        assert_eq!(
            FileType::from_mime_type(
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            ),
            Ok(FileType::Docx)
        );
        assert!(FileType::from_mime_type("image/png").is_err());
    }

    #[test]
    fn test_file_size_bounds() {
        assert!(FileSize::try_new(MIN_FILE_SIZE_BYTES).is_ok());
        assert!(FileSize::try_new(MAX_FILE_SIZE_BYTES).is_ok());
        assert!(FileSize::try_new(MIN_FILE_SIZE_BYTES - 1).is_err());
        assert!(FileSize::try_new(MAX_FILE_SIZE_BYTES + 1).is_err());
        assert!(FileSize::try_new(0).is_err());
    }

    #[test]
    fn test_storage_key_rejects_blank() {
        assert_eq!(
            StorageKey::try_new("  "),
            Err(ValidationError::EmptyField("storage_key"))
        );
    }

    // -----------------------
    // FileDescriptor tests
    // -----------------------

    #[test]
    fn test_descriptor_requires_matching_type() {
        assert!(descriptor("cv.pdf", FileType::Pdf).is_ok());
        assert!(matches!(
            descriptor("cv.docx", FileType::Pdf),
            Err(ValidationError::MimeExtensionMismatch { .. })
        ));
    }

    #[test]
    fn test_renamed_keeps_storage_and_rejects_extension_change() {
        let original = descriptor("cv.pdf", FileType::Pdf).unwrap();

        let renamed = original
            .renamed(FileName::try_new("final-cv.PDF").unwrap())
            .unwrap();
        assert_eq!(renamed.name().as_str(), "final-cv.PDF");
        assert_eq!(renamed.storage_key(), original.storage_key());
        assert_eq!(renamed.size(), original.size());

        let err = original
            .renamed(FileName::try_new("cv.docx").unwrap())
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::ExtensionChange {
                from: "pdf".to_string(),
                to: "docx".to_string()
            }
        );
    }
}
