//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Folder`], [`StoredFile`], [`FileKind`] - Backend wire types
//! - [`GalleryModel`] - Pure state of the file gallery view
//! - [`ViewCursor`] - Which top-level view is on screen

mod gallery;
mod storage;
mod view;

pub use gallery::GalleryModel;
pub use storage::{FileKind, Folder, StoredFile};
pub use view::ViewCursor;
