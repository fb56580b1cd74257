//! Typed wrappers around the storage backend's REST endpoints.
//!
//! Each operation is a single request/response pair with no retries and
//! no batching: bulk deletes are issued by callers as independent
//! concurrent [`delete_file`] calls. Any non-success outcome surfaces as
//! a [`FetchError`].

use serde::Deserialize;

use crate::config::API_BASE_URL;
use crate::core::error::FetchError;
use crate::models::{Folder, StoredFile};
use crate::utils::fetch::{fetch_json, request_delete};

/// Account-wide usage summary returned by the stats endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stats {
    pub total_folders: u64,
    pub total_files: u64,
    pub total_size_mb: f64,
}

// Response envelopes, matching the backend's JSON bodies.

#[derive(Deserialize)]
struct FoldersEnvelope {
    folders: Vec<Folder>,
}

#[derive(Deserialize)]
struct FilesEnvelope {
    files: Vec<StoredFile>,
}

#[derive(Deserialize)]
struct UrlEnvelope {
    url: String,
}

#[derive(Deserialize)]
struct StatsEnvelope {
    stats: Stats,
}

/// List all folders owned by a user.
pub async fn list_folders(user_id: i64) -> Result<Vec<Folder>, FetchError> {
    let url = format!("{}/folders/{}", API_BASE_URL, user_id);
    fetch_json::<FoldersEnvelope>(&url).await.map(|e| e.folders)
}

/// List the files stored in a folder.
pub async fn list_files(folder_id: i64) -> Result<Vec<StoredFile>, FetchError> {
    let url = format!("{}/folders/{}/files", API_BASE_URL, folder_id);
    fetch_json::<FilesEnvelope>(&url).await.map(|e| e.files)
}

/// Resolve a time-limited access URL for a file, usable directly as an
/// image or download source.
pub async fn resolve_file_url(file_id: i64) -> Result<String, FetchError> {
    let url = format!("{}/file/{}/url", API_BASE_URL, file_id);
    fetch_json::<UrlEnvelope>(&url).await.map(|e| e.url)
}

/// Delete a single file.
pub async fn delete_file(file_id: i64) -> Result<(), FetchError> {
    request_delete(&format!("{}/files/{}", API_BASE_URL, file_id)).await
}

/// Delete a folder and all files inside it.
pub async fn delete_folder(folder_id: i64) -> Result<(), FetchError> {
    request_delete(&format!("{}/folders/{}", API_BASE_URL, folder_id)).await
}

/// Fetch the account usage summary.
pub async fn user_stats(user_id: i64) -> Result<Stats, FetchError> {
    let url = format!("{}/stats/{}", API_BASE_URL, user_id);
    fetch_json::<StatsEnvelope>(&url).await.map(|e| e.stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FileKind;

    #[test]
    fn test_folders_envelope() {
        let json = r#"{
            "success": true,
            "folders": [
                {"id": 1, "name": "Vacation", "file_count": 3, "created_at": "2024-05-01T10:00:00"}
            ]
        }"#;
        let env: FoldersEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(env.folders.len(), 1);
        assert_eq!(env.folders[0].name, "Vacation");
        assert_eq!(env.folders[0].file_count, 3);
    }

    #[test]
    fn test_files_envelope() {
        let json = r#"{
            "success": true,
            "files": [
                {
                    "id": 7,
                    "telegram_file_id": "AgACAgQAAx",
                    "name": "beach.jpg",
                    "type": "photo",
                    "size": 204800,
                    "uploaded_at": "2024-05-02T12:33:00"
                }
            ]
        }"#;
        let env: FilesEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(env.files[0].kind, FileKind::Photo);
        assert_eq!(env.files[0].size, 204800);
    }

    #[test]
    fn test_url_envelope() {
        let json = r#"{"success": true, "url": "https://api.telegram.org/file/x", "file_name": "a.jpg"}"#;
        let env: UrlEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(env.url, "https://api.telegram.org/file/x");
    }

    #[test]
    fn test_stats_envelope() {
        let json = r#"{
            "success": true,
            "stats": {"total_folders": 2, "total_files": 10, "total_size_mb": 41.5, "top_folders_text": ""}
        }"#;
        let env: StatsEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(env.stats.total_files, 10);
        assert!((env.stats.total_size_mb - 41.5).abs() < f64::EPSILON);
    }
}
