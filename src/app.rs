//! Root application module.
//!
//! Contains the main App component, AppContext definition, and the
//! per-view signal state following Leptos conventions.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::Shell;
use crate::config::{USER_ID_PARAM, messages};
use crate::core::FetchError;
use crate::core::api::{self, Stats};
use crate::models::{Folder, GalleryModel, StoredFile, ViewCursor};
use crate::utils::dom;

// ============================================================================
// FolderState
// ============================================================================

/// Folder list state managed with Leptos signals.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct FolderState {
    /// Read-only snapshot of the user's folders.
    pub folders: RwSignal<Vec<Folder>>,
    /// Whether a folder list fetch is in flight.
    pub loading: RwSignal<bool>,
    /// User-facing message when the last fetch failed.
    pub error: RwSignal<Option<String>>,
    /// Account usage summary (cosmetic, loads independently).
    pub stats: RwSignal<Option<Stats>>,
}

impl FolderState {
    pub fn new() -> Self {
        Self {
            folders: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            stats: RwSignal::new(None),
        }
    }

    /// Fetch the folder list, replacing the current snapshot.
    pub async fn load(self, user_id: i64) {
        self.loading.set(true);
        self.error.set(None);
        match api::list_folders(user_id).await {
            Ok(folders) => self.folders.set(folders),
            Err(e) => {
                dom::warn(&format!("Folder list fetch failed: {}", e));
                self.error.set(Some(messages::LOAD_FOLDERS_FAILED.to_string()));
            }
        }
        self.loading.set(false);
    }

    /// Refresh the usage summary. Failures are cosmetic and only logged.
    pub async fn refresh_stats(self, user_id: i64) {
        match api::user_stats(user_id).await {
            Ok(stats) => self.stats.set(Some(stats)),
            Err(e) => dom::warn(&format!("Stats fetch failed: {}", e)),
        }
    }

    /// Delete a folder, then reload the whole list so the snapshot and
    /// its file counts stay authoritative. A failure surfaces a blocking
    /// alert and leaves state untouched.
    pub async fn delete(self, user_id: i64, folder_id: i64) {
        match api::delete_folder(folder_id).await {
            Ok(()) => {
                self.load(user_id).await;
                self.refresh_stats(user_id).await;
            }
            Err(e) => {
                dom::warn(&format!("Folder delete failed: {}", e));
                dom::alert(messages::DELETE_FOLDER_FAILED);
            }
        }
    }
}

impl Default for FolderState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// GalleryState
// ============================================================================

/// Gallery view state: a [`GalleryModel`] behind a signal plus the
/// fetch flags.
///
/// Every async completion re-checks the view cursor before touching the
/// model, so a response from a superseded navigation is dropped instead
/// of overwriting the current folder's state.
#[derive(Clone, Copy)]
pub struct GalleryState {
    pub model: RwSignal<GalleryModel>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    /// Shared view cursor, used as the staleness guard.
    cursor: RwSignal<ViewCursor>,
}

impl GalleryState {
    fn new(cursor: RwSignal<ViewCursor>) -> Self {
        Self {
            model: RwSignal::new(GalleryModel::default()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            cursor,
        }
    }

    /// Discard all gallery state (navigation away).
    pub fn reset(self) {
        self.model.update(|m| m.reset());
        self.loading.set(false);
        self.error.set(None);
    }

    /// Whether the cursor still points at the gallery of this folder.
    fn current(self, folder_id: i64) -> bool {
        self.cursor.with_untracked(|c| c.is_gallery(folder_id))
    }

    /// Fetch the folder's files. Photos get their preview URLs resolved
    /// eagerly in detached tasks.
    pub async fn load(self, folder_id: i64) {
        self.loading.set(true);
        self.error.set(None);
        let result = api::list_files(folder_id).await;
        if !self.current(folder_id) {
            // Superseded navigation; the view that issued this fetch is gone.
            return;
        }
        match result {
            Ok(files) => {
                let photos: Vec<i64> = files
                    .iter()
                    .filter(|f| f.kind.is_photo())
                    .map(|f| f.id)
                    .collect();
                self.model.update(|m| m.set_files(files));
                for file_id in photos {
                    spawn_local(self.prefetch_url(folder_id, file_id));
                }
            }
            Err(e) => {
                dom::warn(&format!("File list fetch failed: {}", e));
                self.error.set(Some(messages::LOAD_FILES_FAILED.to_string()));
            }
        }
        self.loading.set(false);
    }

    /// Resolve and cache a preview URL. A failure degrades the thumbnail
    /// to its type glyph, so it is logged and swallowed.
    async fn prefetch_url(self, folder_id: i64, file_id: i64) {
        match api::resolve_file_url(file_id).await {
            Ok(url) if self.current(folder_id) => {
                self.model.update(|m| m.cache_url(file_id, url));
            }
            Ok(_) => {}
            Err(e) => dom::warn(&format!("URL resolution failed for file {}: {}", file_id, e)),
        }
    }

    /// Resolve the file's URL unless cached, then open the modal on it.
    /// File and URL are set together; if resolution fails the modal
    /// stays closed.
    pub async fn open(self, folder_id: i64, file: StoredFile) {
        let cached = self
            .model
            .with_untracked(|m| m.url_for(file.id).map(str::to_string));
        let url = match cached {
            Some(url) => url,
            None => match api::resolve_file_url(file.id).await {
                Ok(url) => url,
                Err(e) => {
                    dom::warn(&format!("URL resolution failed for file {}: {}", file.id, e));
                    return;
                }
            },
        };
        if self.current(folder_id) {
            self.model.update(|m| m.open_file(file, url));
        }
    }

    /// Delete one file and prune it from the local snapshot (the rest of
    /// the list is still fresh). The caller decides how to surface a
    /// failure.
    pub async fn delete_one(self, file_id: i64) -> Result<(), FetchError> {
        api::delete_file(file_id).await?;
        self.model.update(|m| m.prune(file_id));
        Ok(())
    }

    /// Delete the selected files as independent concurrent calls, wait
    /// for all to settle, then re-fetch the folder and clear the
    /// selection. Partial failure surfaces one blocking alert.
    pub async fn delete_selected(self, folder_id: i64) {
        let ids = self.model.with_untracked(|m| m.selected_ids());
        if ids.is_empty() {
            return;
        }

        let results = futures::future::join_all(ids.into_iter().map(api::delete_file)).await;
        let failed = results.iter().filter(|r| r.is_err()).count();

        let refreshed = api::list_files(folder_id).await;
        if self.current(folder_id) {
            match refreshed {
                // set_files also clears the selection.
                Ok(files) => self.model.update(|m| m.set_files(files)),
                Err(e) => {
                    dom::warn(&format!("File list refresh failed: {}", e));
                    self.model.update(|m| m.clear_selection());
                }
            }
        }
        if failed > 0 {
            dom::warn(&format!("{} of the issued deletes failed", failed));
            dom::alert(messages::DELETE_FILES_FAILED);
        }
    }

    /// Flip a file's membership in the bulk-delete selection.
    pub fn toggle_selected(self, file_id: i64) {
        self.model.update(|m| m.toggle_selected(file_id));
    }

    /// Close the modal without side effects.
    pub fn close_modal(self) {
        self.model.update(|m| m.close());
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Architecture
///
/// Each view owns its state exclusively:
/// - **Folder state**: folder snapshot, loading/error flags, usage stats
/// - **Gallery state**: file snapshot, URL cache, selection, open file
/// - **View cursor**: which of the two views is on screen
#[derive(Clone, Copy)]
pub struct AppContext {
    /// User id parsed once from the entry URL; `None` renders the
    /// blocking error view.
    pub user_id: Option<i64>,

    /// Which top-level view is on screen.
    pub cursor: RwSignal<ViewCursor>,

    /// Folder grid state.
    pub folders: FolderState,

    /// File gallery state.
    pub gallery: GalleryState,
}

impl AppContext {
    pub fn new() -> Self {
        let cursor = RwSignal::new(ViewCursor::default());
        Self {
            user_id: dom::query_param(USER_ID_PARAM).and_then(|v| v.parse().ok()),
            cursor,
            folders: FolderState::new(),
            gallery: GalleryState::new(cursor),
        }
    }

    /// Enter a folder's gallery. The gallery starts from an empty model
    /// and fetches on entry, so nothing from a previous visit can leak.
    pub fn open_folder(&self, folder: &Folder) {
        self.gallery.reset();
        self.cursor
            .set(ViewCursor::gallery(folder.id, folder.name.clone()));
    }

    /// Leave the gallery, discarding its selection and URL cache.
    pub fn close_gallery(&self) {
        self.gallery.reset();
        self.cursor.set(ViewCursor::FolderList);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Kicks off the initial folder and stats fetches
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    if let Some(user_id) = ctx.user_id {
        spawn_local(ctx.folders.load(user_id));
        spawn_local(ctx.folders.refresh_stats(user_id));
    }

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: sans-serif;
                ">
                    <h1 style="color: #dc2626; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <p style="color: #6b7280; margin-bottom: 1rem;">
                        "An unexpected error occurred. Please try reloading the page."
                    </p>
                    <ul style="color: #dc2626; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: #2563eb;
                            color: white;
                            border: none;
                            padding: 0.75rem 2rem;
                            border-radius: 4px;
                            cursor: pointer;
                            font-size: 1rem;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Shell />
        </ErrorBoundary>
    }
}
