//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`fetch`] - Network fetching with timeout
//! - [`dom`] - Browser API helpers (dialogs, downloads, query params)
//! - [`format`] - Display formatting for sizes, dates, and counts

pub mod dom;
pub mod fetch;
pub mod format;
