//! Gallery view state.
//!
//! [`GalleryModel`] owns everything the file gallery shows for the folder
//! it is scoped to: the file snapshot, the per-file resolved-URL cache,
//! the bulk-delete selection, and the file open in the modal. All
//! transitions are pure methods on the model; the reactive layer wraps
//! the whole model in a single signal.
//!
//! Lifecycle rule: the model is reset when navigating back to the folder
//! list, so nothing here survives across folder visits.

use std::collections::{HashMap, HashSet};

use super::storage::StoredFile;

/// Mutable state of the gallery view, scoped to one folder.
#[derive(Debug, Clone, Default)]
pub struct GalleryModel {
    /// Files in the current folder, in backend order.
    pub files: Vec<StoredFile>,
    /// File id -> resolved access URL. Entries are never invalidated
    /// within a visit; a stale entry is a UX risk, not a correctness one.
    urls: HashMap<i64, String>,
    /// File ids marked for bulk deletion.
    selection: HashSet<i64>,
    /// File open in the modal, together with its resolved URL.
    /// Both are set together or not at all.
    open: Option<(StoredFile, String)>,
}

impl GalleryModel {
    /// Replace the file snapshot (initial load or post-bulk-delete refresh).
    ///
    /// The selection is cleared, and cache/modal entries referring to ids
    /// no longer present are dropped. Cached URLs for surviving files are
    /// kept so a refresh doesn't re-resolve them.
    pub fn set_files(&mut self, files: Vec<StoredFile>) {
        self.files = files;
        self.selection.clear();
        let present: HashSet<i64> = self.files.iter().map(|f| f.id).collect();
        self.urls.retain(|id, _| present.contains(id));
        if let Some((file, _)) = &self.open
            && !present.contains(&file.id)
        {
            self.open = None;
        }
    }

    /// Discard everything (navigation away from the folder).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Remove exactly one file by id after a successful single delete.
    ///
    /// Also drops its selection mark and cached URL, and closes the modal
    /// if it was open on that file.
    pub fn prune(&mut self, file_id: i64) {
        self.files.retain(|f| f.id != file_id);
        self.selection.remove(&file_id);
        self.urls.remove(&file_id);
        if self.open.as_ref().is_some_and(|(f, _)| f.id == file_id) {
            self.open = None;
        }
    }

    /// Flip a file's membership in the bulk-delete selection.
    pub fn toggle_selected(&mut self, file_id: i64) {
        if !self.selection.remove(&file_id) {
            self.selection.insert(file_id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn is_selected(&self, file_id: i64) -> bool {
        self.selection.contains(&file_id)
    }

    pub fn selection_count(&self) -> usize {
        self.selection.len()
    }

    /// Ids currently marked for bulk deletion.
    pub fn selected_ids(&self) -> Vec<i64> {
        self.selection.iter().copied().collect()
    }

    /// Store a resolved URL for a file.
    pub fn cache_url(&mut self, file_id: i64, url: String) {
        self.urls.insert(file_id, url);
    }

    pub fn url_for(&self, file_id: i64) -> Option<&str> {
        self.urls.get(&file_id).map(String::as_str)
    }

    /// Open the modal on a file with its resolved URL.
    pub fn open_file(&mut self, file: StoredFile, url: String) {
        self.urls.insert(file.id, url.clone());
        self.open = Some((file, url));
    }

    /// Close the modal.
    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn open_entry(&self) -> Option<&(StoredFile, String)> {
        self.open.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FileKind;

    fn file(id: i64, name: &str) -> StoredFile {
        StoredFile {
            id,
            telegram_file_id: format!("tg-{}", id),
            name: name.to_string(),
            kind: FileKind::Photo,
            size: 1024,
            uploaded_at: "2024-05-02T12:33:00".to_string(),
        }
    }

    #[test]
    fn test_prune_removes_exactly_one_id() {
        let mut model = GalleryModel::default();
        model.set_files(vec![file(1, "a.jpg"), file(2, "b.jpg"), file(3, "c.jpg")]);

        model.prune(2);

        let ids: Vec<i64> = model.files.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_prune_closes_modal_open_on_that_file() {
        let mut model = GalleryModel::default();
        model.set_files(vec![file(1, "a.jpg"), file(2, "b.jpg")]);
        model.open_file(file(1, "a.jpg"), "https://cdn/a".to_string());

        model.prune(2);
        assert!(model.open_entry().is_some());

        model.prune(1);
        assert!(model.open_entry().is_none());
    }

    #[test]
    fn test_toggle_and_clear_selection() {
        let mut model = GalleryModel::default();
        model.set_files(vec![file(1, "a.jpg"), file(2, "b.jpg")]);

        model.toggle_selected(1);
        model.toggle_selected(2);
        assert_eq!(model.selection_count(), 2);

        model.toggle_selected(1);
        assert!(!model.is_selected(1));
        assert!(model.is_selected(2));

        // Bulk-delete reconciliation always ends with an empty selection,
        // whatever the individual outcomes were.
        model.clear_selection();
        assert_eq!(model.selection_count(), 0);
    }

    #[test]
    fn test_set_files_clears_selection_but_keeps_surviving_urls() {
        let mut model = GalleryModel::default();
        model.set_files(vec![file(1, "a.jpg"), file(2, "b.jpg")]);
        model.cache_url(1, "https://cdn/a".to_string());
        model.cache_url(2, "https://cdn/b".to_string());
        model.toggle_selected(2);

        // Refresh after a bulk delete that removed file 2.
        model.set_files(vec![file(1, "a.jpg")]);

        assert_eq!(model.selection_count(), 0);
        assert_eq!(model.url_for(1), Some("https://cdn/a"));
        assert_eq!(model.url_for(2), None);
    }

    #[test]
    fn test_reset_discards_all_state() {
        let mut model = GalleryModel::default();
        model.set_files(vec![file(1, "a.jpg")]);
        model.cache_url(1, "https://cdn/a".to_string());
        model.toggle_selected(1);
        model.open_file(file(1, "a.jpg"), "https://cdn/a".to_string());

        model.reset();

        assert!(model.files.is_empty());
        assert_eq!(model.url_for(1), None);
        assert_eq!(model.selection_count(), 0);
        assert!(model.open_entry().is_none());
    }

    #[test]
    fn test_open_sets_file_and_url_together() {
        let mut model = GalleryModel::default();
        model.set_files(vec![file(1, "a.jpg")]);

        model.open_file(file(1, "a.jpg"), "https://cdn/a".to_string());
        let (open_file, url) = model.open_entry().unwrap();
        assert_eq!(open_file.id, 1);
        assert_eq!(url, "https://cdn/a");
        // Opening also caches the URL for the grid thumbnail.
        assert_eq!(model.url_for(1), Some("https://cdn/a"));

        model.close();
        assert!(model.open_entry().is_none());
    }
}
