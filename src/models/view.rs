//! Top-level view cursor.
//!
//! Exactly one of the two views is on screen at any time. The cursor also
//! acts as the staleness guard for in-flight requests: an async completion
//! tagged with a folder id is applied only if the cursor still points at
//! that folder, otherwise the response is dropped.

/// Which top-level view is on screen.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ViewCursor {
    /// Folder grid (default view).
    #[default]
    FolderList,
    /// File gallery scoped to one folder.
    Gallery { id: i64, name: String },
}

impl ViewCursor {
    /// Cursor for the gallery of the given folder.
    pub fn gallery(id: i64, name: impl Into<String>) -> Self {
        Self::Gallery {
            id,
            name: name.into(),
        }
    }

    /// Whether the cursor is on the gallery of exactly this folder.
    ///
    /// This is the apply-or-drop test for late-arriving responses.
    pub fn is_gallery(&self, folder_id: i64) -> bool {
        matches!(self, Self::Gallery { id, .. } if *id == folder_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_folder_list() {
        assert_eq!(ViewCursor::default(), ViewCursor::FolderList);
    }

    #[test]
    fn test_gallery_guard_matches_only_own_folder() {
        let cursor = ViewCursor::gallery(4, "Vacation");
        assert!(cursor.is_gallery(4));
        assert!(!cursor.is_gallery(5));
        assert!(!ViewCursor::FolderList.is_gallery(4));
    }

    #[test]
    fn test_superseded_navigation_drops_response() {
        // A response for folder 1 arrives after the user moved to folder 2.
        let mut cursor = ViewCursor::gallery(1, "Old");
        cursor = ViewCursor::gallery(2, "New");
        assert!(!cursor.is_gallery(1));
        assert!(cursor.is_gallery(2));

        // And after the user left the gallery entirely.
        cursor = ViewCursor::FolderList;
        assert!(!cursor.is_gallery(2));
    }
}
