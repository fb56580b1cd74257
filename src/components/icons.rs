//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::FileKind;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronLeft as Back, LuDownload as Download, LuFile as File, LuFileText as FileDocument,
        LuFilm as FileVideo, LuFolder as Folder, LuImage as FilePhoto, LuMusic as FileAudio,
        LuPaperclip as FileOther, LuRefreshCw as Refresh, LuTrash2 as Trash, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowClockwise as Refresh, BsChevronLeft as Back, BsDownload as Download,
        BsFileEarmark as File, BsFileEarmarkImage as FilePhoto, BsFileEarmarkMusic as FileAudio,
        BsFileEarmarkPlay as FileVideo, BsFileEarmarkText as FileDocument, BsFolderFill as Folder,
        BsPaperclip as FileOther, BsTrash as Trash, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(BACK, Back);
themed_icon!(CLOSE, Close);
themed_icon!(DOWNLOAD, Download);
themed_icon!(FILE, File);
themed_icon!(FILE_AUDIO, FileAudio);
themed_icon!(FILE_DOCUMENT, FileDocument);
themed_icon!(FILE_OTHER, FileOther);
themed_icon!(FILE_PHOTO, FilePhoto);
themed_icon!(FILE_VIDEO, FileVideo);
themed_icon!(FOLDER, Folder);
themed_icon!(REFRESH, Refresh);
themed_icon!(TRASH, Trash);

/// Glyph for a file's type tag.
///
/// Total over the closed enumeration; tags the wire layer didn't
/// recognize have already collapsed to [`FileKind::Other`].
pub fn file_kind_icon(kind: FileKind) -> Icon {
    match kind {
        FileKind::Photo => FILE_PHOTO,
        FileKind::Video => FILE_VIDEO,
        FileKind::Audio => FILE_AUDIO,
        FileKind::Document => FILE_DOCUMENT,
        FileKind::Other => FILE_OTHER,
    }
}
