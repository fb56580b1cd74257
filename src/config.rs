//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "Telecloud";

/// Tagline displayed under the application name.
pub const APP_TAGLINE: &str = "Organize your files with unlimited storage";

// =============================================================================
// Network Configuration
// =============================================================================

/// Base URL of the storage backend API.
pub const API_BASE_URL: &str = "https://telegram-cloud-api.onrender.com/api";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Entry Parameters
// =============================================================================

/// Query-string parameter carrying the user id (set by the Telegram bot
/// when it hands out the web link).
pub const USER_ID_PARAM: &str = "userId";

// =============================================================================
// User-Facing Messages
// =============================================================================

/// Short, per-context messages for normalized failure reporting.
pub mod messages {
    /// Folder list fetch failed (inline banner).
    pub const LOAD_FOLDERS_FAILED: &str = "Failed to load folders";
    /// File list fetch failed (inline banner).
    pub const LOAD_FILES_FAILED: &str = "Failed to load files";
    /// No user id in the query string (blocking error view).
    pub const NO_USER_ID: &str = "User ID not provided";
    /// Folder delete failed (blocking alert).
    pub const DELETE_FOLDER_FAILED: &str = "Failed to delete folder";
    /// Single file delete failed (blocking alert).
    pub const DELETE_FILE_FAILED: &str = "Failed to delete file";
    /// One or more deletes in a bulk operation failed (blocking alert).
    pub const DELETE_FILES_FAILED: &str = "Failed to delete some files";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
