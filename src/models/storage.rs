//! Wire types for folders and files as returned by the backend.
//!
//! These are read-only snapshots: fetched on view entry, discarded on
//! navigation away. The backend owns all mutation.

use serde::{Deserialize, Deserializer};

/// A named grouping of files owned by a user.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Folder {
    pub id: i64,
    pub name: String,
    /// Cached count maintained by the backend.
    pub file_count: u64,
    /// ISO-8601 creation timestamp.
    pub created_at: String,
}

/// A single stored object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoredFile {
    pub id: i64,
    /// Opaque storage reference; the client never interprets it.
    pub telegram_file_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FileKind,
    /// Size in bytes.
    pub size: u64,
    /// ISO-8601 upload timestamp.
    pub uploaded_at: String,
}

/// Closed enumeration of file type tags.
///
/// Any tag this client doesn't recognize lands on [`FileKind::Other`],
/// so downstream dispatch over the enum stays total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileKind {
    Photo,
    Video,
    Audio,
    Document,
    #[default]
    Other,
}

impl FileKind {
    /// Map the backend's type string onto the closed enumeration.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "photo" => Self::Photo,
            "video" => Self::Video,
            "audio" => Self::Audio,
            "document" => Self::Document,
            _ => Self::Other,
        }
    }

    /// Whether this file can be previewed as an image.
    pub fn is_photo(self) -> bool {
        self == Self::Photo
    }
}

impl<'de> Deserialize<'de> for FileKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_kinds() {
        assert_eq!(FileKind::from_tag("photo"), FileKind::Photo);
        assert_eq!(FileKind::from_tag("video"), FileKind::Video);
        assert_eq!(FileKind::from_tag("audio"), FileKind::Audio);
        assert_eq!(FileKind::from_tag("document"), FileKind::Document);
        assert_eq!(FileKind::from_tag("other"), FileKind::Other);
    }

    #[test]
    fn test_unknown_kind_falls_back() {
        assert_eq!(FileKind::from_tag("sticker"), FileKind::Other);
        assert_eq!(FileKind::from_tag(""), FileKind::Other);
    }

    #[test]
    fn test_kind_deserializes_from_wire_tag() {
        let kind: FileKind = serde_json::from_str("\"photo\"").unwrap();
        assert_eq!(kind, FileKind::Photo);
        let kind: FileKind = serde_json::from_str("\"sticker\"").unwrap();
        assert_eq!(kind, FileKind::Other);
    }

    #[test]
    fn test_is_photo() {
        assert!(FileKind::Photo.is_photo());
        assert!(!FileKind::Video.is_photo());
        assert!(!FileKind::Other.is_photo());
    }
}
