//! Gallery view-model.
//!
//! Owns the client-side gallery state and turns user intents into backend
//! calls. State is published through a [`tokio::sync::watch`] channel so any
//! presentation layer can subscribe and re-render on each transition; it is
//! only mutated between awaits, never across one.
//!
//! The file list is never patched locally: every successful upload or delete
//! is followed by exactly one re-fetch, and a failed call leaves the list as
//! the last server response.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

use crate::api::FileApi;
use crate::error::{Error, Result};
use crate::models::{FileCard, FileRecord, LocalFile};
use crate::notify::Notifier;
use crate::util::is_http_url;

/// Mutating request currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Uploading,
    Deleting,
}

/// Coarse view-model phase, derived from [`GalleryState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryPhase {
    Idle,
    Loading,
    Uploading,
    Mutating,
}

/// Snapshot of the gallery as the presentation layer sees it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryState {
    /// Last successful list response, in server order.
    pub files: Vec<FileRecord>,
    /// File picked for the next upload.
    pub selected_file: Option<LocalFile>,
    /// A list request is outstanding.
    pub loading: bool,
    pub mutation: Option<Mutation>,
}

impl GalleryState {
    pub fn phase(&self) -> GalleryPhase {
        match self.mutation {
            Some(Mutation::Uploading) => GalleryPhase::Uploading,
            Some(Mutation::Deleting) => GalleryPhase::Mutating,
            None if self.loading => GalleryPhase::Loading,
            None => GalleryPhase::Idle,
        }
    }

    pub fn uploading(&self) -> bool {
        self.mutation == Some(Mutation::Uploading)
    }

    pub fn deleting(&self) -> bool {
        self.mutation == Some(Mutation::Deleting)
    }

    /// One card per file, same order as `files`.
    pub fn cards(&self) -> Vec<FileCard> {
        self.files.iter().map(FileRecord::to_card).collect()
    }

    pub fn find(&self, key: &str) -> Option<&FileRecord> {
        self.files.iter().find(|file| file.key == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    Uploaded,
    /// Another mutation was in flight; nothing was sent.
    Ignored,
}

/// Answer to the "delete permanently?" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Self::Confirmed
        } else {
            Self::Declined
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Declined,
    /// Another mutation was in flight; nothing was sent.
    Ignored,
}

/// Bytes fetched through a record's view URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedFile {
    /// Suggested name for saving, derived from the record key.
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Framework-independent gallery controller.
///
/// Cloning is cheap and every clone drives the same state.
pub struct GalleryViewModel<A, N> {
    inner: Arc<Inner<A, N>>,
}

struct Inner<A, N> {
    api: A,
    notifier: N,
    state: watch::Sender<GalleryState>,
    list_generation: AtomicU64,
}

impl<A, N> Clone for GalleryViewModel<A, N> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A, N> PartialEq for GalleryViewModel<A, N> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<A, N> Eq for GalleryViewModel<A, N> {}

impl<A: FileApi, N: Notifier> GalleryViewModel<A, N> {
    pub fn new(api: A, notifier: N) -> Self {
        let (state, _) = watch::channel(GalleryState::default());
        Self {
            inner: Arc::new(Inner {
                api,
                notifier,
                state,
                list_generation: AtomicU64::new(0),
            }),
        }
    }

    pub fn api(&self) -> &A {
        &self.inner.api
    }

    pub fn notifier(&self) -> &N {
        &self.inner.notifier
    }

    /// Current state snapshot.
    pub fn state(&self) -> GalleryState {
        self.inner.state.borrow().clone()
    }

    /// Receiver that observes every state transition.
    pub fn subscribe(&self) -> watch::Receiver<GalleryState> {
        self.inner.state.subscribe()
    }

    /// Replace the file list with a fresh server response.
    ///
    /// Returns the number of records fetched. On failure the list is left
    /// untouched and an error notice is emitted. A request overtaken by a
    /// newer refresh never touches state or notifies; if it fails it reports
    /// the current list length.
    pub async fn refresh(&self) -> Result<usize> {
        let generation = self.begin_refresh(|_| {});
        self.complete_refresh(generation).await
    }

    /// Remember a local file for the next upload. No network call.
    pub fn select_file(&self, file: LocalFile) {
        tracing::debug!("Selected {} ({} bytes)", file.file_name, file.len());
        self.inner.state.send_modify(|state| {
            state.selected_file = Some(file);
        });
    }

    pub fn clear_selection(&self) {
        self.inner.state.send_if_modified(|state| state.selected_file.take().is_some());
    }

    /// Upload the selected file, then re-fetch the list.
    pub async fn upload(&self) -> Result<UploadOutcome> {
        let mut busy = false;
        let mut pending = None;
        self.inner.state.send_if_modified(|state| {
            if state.mutation.is_some() {
                busy = true;
                return false;
            }
            let Some(file) = state.selected_file.clone() else {
                return false;
            };
            state.mutation = Some(Mutation::Uploading);
            pending = Some(file);
            true
        });

        if busy {
            tracing::debug!("Upload ignored: another request is in flight");
            return Ok(UploadOutcome::Ignored);
        }
        let Some(file) = pending else {
            self.inner.notifier.warning("Please select a file!", None);
            return Err(Error::Validation("No file selected for upload".to_string()));
        };

        tracing::info!("Uploading {} ({} bytes)", file.file_name, file.len());
        match self.inner.api.upload(&file.bytes, &file.file_name).await {
            Ok(()) => {
                let generation = self.begin_refresh(|state| {
                    state.mutation = None;
                    if state.selected_file.as_ref() == Some(&file) {
                        state.selected_file = None;
                    }
                });
                self.inner
                    .notifier
                    .success("Uploaded!", Some(file.file_name.clone()));
                let _ = self.complete_refresh(generation).await;
                Ok(UploadOutcome::Uploaded)
            }
            Err(error) => {
                tracing::error!("Upload of {} failed: {}", file.file_name, error);
                self.inner.state.send_modify(|state| state.mutation = None);
                self.inner
                    .notifier
                    .error("Upload failed!", Some(error.to_string()));
                Err(error)
            }
        }
    }

    /// Delete the object behind `key` once the user has confirmed.
    pub async fn delete(&self, key: &str, confirmation: Confirmation) -> Result<DeleteOutcome> {
        if confirmation == Confirmation::Declined {
            return Ok(DeleteOutcome::Declined);
        }
        if key.trim().is_empty() {
            self.inner.notifier.warning("Nothing to delete", None);
            return Err(Error::Validation("File key must not be empty".to_string()));
        }

        let started = self.inner.state.send_if_modified(|state| {
            if state.mutation.is_some() {
                return false;
            }
            state.mutation = Some(Mutation::Deleting);
            true
        });
        if !started {
            tracing::debug!("Delete ignored: another request is in flight");
            return Ok(DeleteOutcome::Ignored);
        }

        tracing::info!("Deleting {key}");
        match self.inner.api.delete(key).await {
            Ok(()) => {
                let generation = self.begin_refresh(|state| state.mutation = None);
                self.inner
                    .notifier
                    .success("Deleted successfully!", Some(crate::display_name(Some(key))));
                let _ = self.complete_refresh(generation).await;
                Ok(DeleteOutcome::Deleted)
            }
            Err(error) => {
                tracing::error!("Delete of {key} failed: {error}");
                self.inner.state.send_modify(|state| state.mutation = None);
                self.inner
                    .notifier
                    .error("Could not delete file.", Some(error.to_string()));
                Err(error)
            }
        }
    }

    /// Resolve the URL to open for a record. No request is made.
    pub fn open(&self, record: &FileRecord) -> Result<String> {
        self.view_url_or_notify(record)
    }

    /// Fetch a record's bytes through its pre-signed URL.
    pub async fn download(&self, record: &FileRecord) -> Result<DownloadedFile> {
        let url = self.view_url_or_notify(record)?;

        match self.inner.api.fetch_view_url(&url).await {
            Ok(bytes) => {
                tracing::info!("Downloaded {} ({} bytes)", record.key, bytes.len());
                let file_name = record.display_name();
                self.inner
                    .notifier
                    .success("Downloaded", Some(file_name.clone()));
                Ok(DownloadedFile { file_name, bytes })
            }
            Err(error) => {
                tracing::error!("Download of {} failed: {}", record.key, error);
                self.inner.notifier.error(
                    "Download failed. The link may have expired.",
                    Some(error.to_string()),
                );
                Err(error)
            }
        }
    }

    fn view_url_or_notify(&self, record: &FileRecord) -> Result<String> {
        match record.view_url.as_deref() {
            Some(url) if is_http_url(url) => Ok(url.to_string()),
            _ => {
                let name = record.display_name();
                self.inner
                    .notifier
                    .error("This file has no viewable link.", Some(name.clone()));
                Err(Error::LinkExpired(format!("{name} has no view URL")))
            }
        }
    }

    fn begin_refresh(&self, update: impl FnOnce(&mut GalleryState)) -> u64 {
        let generation = self.inner.list_generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.state.send_modify(|state| {
            update(state);
            state.loading = true;
        });
        generation
    }

    async fn complete_refresh(&self, generation: u64) -> Result<usize> {
        let result = self.inner.api.list().await;
        let latest = self.inner.list_generation.load(Ordering::SeqCst) == generation;

        match result {
            Ok(files) => {
                let count = files.len();
                if latest {
                    tracing::info!("Loaded {count} files");
                    self.inner.state.send_modify(|state| {
                        state.files = files;
                        state.loading = false;
                    });
                } else {
                    tracing::debug!("Discarding stale file list ({count} files)");
                }
                Ok(count)
            }
            Err(error) if !latest => {
                tracing::debug!("Ignoring failure of superseded file list request: {error}");
                Ok(self.inner.state.borrow().files.len())
            }
            Err(error) => {
                tracing::error!("Failed to load files: {error}");
                self.inner.state.send_modify(|state| state.loading = false);
                self.inner
                    .notifier
                    .error("Could not load files.", Some(error.to_string()));
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use tokio::sync::Notify;

    use super::*;
    use crate::notify::{Notice, NoticeLevel};

    #[derive(Default)]
    struct MockApi {
        files: Mutex<Vec<FileRecord>>,
        list_calls: AtomicUsize,
        upload_calls: AtomicUsize,
        delete_calls: AtomicUsize,
        fetch_calls: AtomicUsize,
        fail_list: AtomicBool,
        fail_upload: AtomicBool,
        fail_delete: AtomicBool,
        fail_fetch: AtomicBool,
        upload_gate: Option<Arc<Notify>>,
        delete_gate: Option<Arc<Notify>>,
        /// Holds only the first `list` call, after it has read the files.
        first_list_gate: Option<Arc<Notify>>,
    }

    impl MockApi {
        fn with_files(files: Vec<FileRecord>) -> Self {
            Self {
                files: Mutex::new(files),
                ..Self::default()
            }
        }

        fn calls(counter: &AtomicUsize) -> usize {
            counter.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl FileApi for MockApi {
        async fn list(&self) -> Result<Vec<FileRecord>> {
            let call = self.list_calls.fetch_add(1, Ordering::SeqCst);
            let files = self.files.lock().unwrap().clone();
            if let (0, Some(gate)) = (call, &self.first_list_gate) {
                gate.notified().await;
            }
            if self.fail_list.load(Ordering::SeqCst) {
                return Err(Error::Network("connection refused".to_string()));
            }
            Ok(files)
        }

        async fn upload(&self, _bytes: &[u8], file_name: &str) -> Result<()> {
            self.upload_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.upload_gate {
                gate.notified().await;
            }
            if self.fail_upload.load(Ordering::SeqCst) {
                return Err(Error::Upload("HTTP 500".to_string()));
            }
            self.files
                .lock()
                .unwrap()
                .push(record(&format!("uploads/42-{file_name}")));
            Ok(())
        }

        async fn delete(&self, key: &str) -> Result<()> {
            self.delete_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.delete_gate {
                gate.notified().await;
            }
            if self.fail_delete.load(Ordering::SeqCst) {
                return Err(Error::Delete("HTTP 403".to_string()));
            }
            self.files.lock().unwrap().retain(|file| file.key != key);
            Ok(())
        }

        async fn fetch_view_url(&self, _url: &str) -> Result<Vec<u8>> {
            self.fetch_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_fetch.load(Ordering::SeqCst) {
                return Err(Error::LinkExpired("HTTP 403".to_string()));
            }
            Ok(b"contents".to_vec())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier(Mutex<Vec<Notice>>);

    impl RecordingNotifier {
        fn levels(&self) -> Vec<NoticeLevel> {
            self.0.lock().unwrap().iter().map(|n| n.level).collect()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: Notice) {
            self.0.lock().unwrap().push(notice);
        }
    }

    type TestModel = GalleryViewModel<MockApi, RecordingNotifier>;

    fn record(key: &str) -> FileRecord {
        FileRecord::new(key, Some(format!("https://bucket.example.com/{key}")))
    }

    fn model_with(api: MockApi) -> TestModel {
        GalleryViewModel::new(api, RecordingNotifier::default())
    }

    fn sample_file() -> LocalFile {
        LocalFile::new("report.pdf", b"%PDF".to_vec())
    }

    #[tokio::test]
    async fn refresh_replaces_files_and_returns_to_idle() {
        let vm = model_with(MockApi::with_files(vec![
            record("uploads/1-a.png"),
            record("uploads/2-b.pdf"),
        ]));
        assert_eq!(vm.state().phase(), GalleryPhase::Idle);

        assert_eq!(vm.refresh().await.unwrap(), 2);

        let state = vm.state();
        assert_eq!(state.phase(), GalleryPhase::Idle);
        assert_eq!(state.files.len(), 2);
        assert!(vm.notifier().levels().is_empty());
    }

    #[tokio::test]
    async fn cards_map_one_to_one_onto_files() {
        let vm = model_with(MockApi::with_files(vec![
            record("uploads/1-a.png"),
            record("uploads/2-b.pdf"),
            record("uploads/c.txt"),
        ]));
        vm.refresh().await.unwrap();

        let state = vm.state();
        let cards = state.cards();
        assert_eq!(cards.len(), state.files.len());
        let ids: Vec<_> = cards.iter().map(|card| card.id.as_str()).collect();
        assert_eq!(ids, vec!["uploads/1-a.png", "uploads/2-b.pdf", "uploads/c.txt"]);
        let names: Vec<_> = cards.iter().map(|card| card.display_name.as_str()).collect();
        assert_eq!(names, vec!["a.png", "b.pdf", "c.txt"]);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_files() {
        let vm = model_with(MockApi::with_files(vec![record("uploads/1-a.png")]));
        vm.refresh().await.unwrap();

        vm.api().fail_list.store(true, Ordering::SeqCst);
        let error = vm.refresh().await.unwrap_err();

        assert!(matches!(error, Error::Network(_)));
        let state = vm.state();
        assert_eq!(state.files, vec![record("uploads/1-a.png")]);
        assert_eq!(state.phase(), GalleryPhase::Idle);
        assert_eq!(vm.notifier().levels(), vec![NoticeLevel::Error]);
    }

    #[tokio::test]
    async fn upload_without_selection_is_rejected_locally() {
        let vm = model_with(MockApi::default());

        let error = vm.upload().await.unwrap_err();

        assert!(matches!(error, Error::Validation(_)));
        assert_eq!(MockApi::calls(&vm.api().upload_calls), 0);
        assert_eq!(MockApi::calls(&vm.api().list_calls), 0);
        assert_eq!(vm.notifier().levels(), vec![NoticeLevel::Warning]);
    }

    #[tokio::test]
    async fn successful_upload_clears_selection_and_refetches_once() {
        let vm = model_with(MockApi::default());
        vm.select_file(sample_file());

        let outcome = vm.upload().await.unwrap();

        assert_eq!(outcome, UploadOutcome::Uploaded);
        assert_eq!(MockApi::calls(&vm.api().upload_calls), 1);
        assert_eq!(MockApi::calls(&vm.api().list_calls), 1);
        let state = vm.state();
        assert_eq!(state.selected_file, None);
        assert_eq!(state.phase(), GalleryPhase::Idle);
        assert_eq!(state.files, vec![record("uploads/42-report.pdf")]);
        assert_eq!(vm.notifier().levels(), vec![NoticeLevel::Success]);
    }

    #[tokio::test]
    async fn failed_upload_keeps_selection_and_skips_refetch() {
        let api = MockApi::default();
        api.fail_upload.store(true, Ordering::SeqCst);
        let vm = model_with(api);
        vm.select_file(sample_file());

        let error = vm.upload().await.unwrap_err();

        assert!(matches!(error, Error::Upload(_)));
        assert_eq!(MockApi::calls(&vm.api().list_calls), 0);
        let state = vm.state();
        assert_eq!(state.selected_file, Some(sample_file()));
        assert!(!state.uploading());
        assert_eq!(vm.notifier().levels(), vec![NoticeLevel::Error]);

        vm.api().fail_upload.store(false, Ordering::SeqCst);
        assert_eq!(vm.upload().await.unwrap(), UploadOutcome::Uploaded);
        assert_eq!(vm.state().selected_file, None);
    }

    #[tokio::test]
    async fn second_upload_while_uploading_is_ignored() {
        let gate = Arc::new(Notify::new());
        let vm = model_with(MockApi {
            upload_gate: Some(Arc::clone(&gate)),
            ..MockApi::default()
        });
        vm.select_file(sample_file());
        let mut observer = vm.subscribe();
        let second = vm.clone();

        let (first, ignored) = tokio::join!(vm.upload(), async {
            tokio::task::yield_now().await;
            assert!(second.state().uploading());
            let outcome = second.upload().await;
            gate.notify_one();
            outcome
        });

        assert_eq!(first.unwrap(), UploadOutcome::Uploaded);
        assert_eq!(ignored.unwrap(), UploadOutcome::Ignored);
        assert_eq!(MockApi::calls(&vm.api().upload_calls), 1);
        assert_eq!(MockApi::calls(&vm.api().list_calls), 1);
        assert!(observer.has_changed().unwrap());
        assert_eq!(observer.borrow_and_update().phase(), GalleryPhase::Idle);
    }

    #[tokio::test]
    async fn delete_while_uploading_is_ignored() {
        let gate = Arc::new(Notify::new());
        let vm = model_with(MockApi {
            upload_gate: Some(Arc::clone(&gate)),
            ..MockApi::with_files(vec![record("uploads/1-a.png")])
        });
        vm.select_file(sample_file());
        let second = vm.clone();

        let (uploaded, ignored) = tokio::join!(vm.upload(), async {
            tokio::task::yield_now().await;
            assert_eq!(second.state().phase(), GalleryPhase::Uploading);
            let outcome = second
                .delete("uploads/1-a.png", Confirmation::Confirmed)
                .await;
            gate.notify_one();
            outcome
        });

        assert_eq!(uploaded.unwrap(), UploadOutcome::Uploaded);
        assert_eq!(ignored.unwrap(), DeleteOutcome::Ignored);
        assert_eq!(MockApi::calls(&vm.api().delete_calls), 0);
        assert_eq!(vm.notifier().levels(), vec![NoticeLevel::Success]);
    }

    #[tokio::test]
    async fn upload_while_deleting_is_ignored() {
        let gate = Arc::new(Notify::new());
        let vm = model_with(MockApi {
            delete_gate: Some(Arc::clone(&gate)),
            ..MockApi::with_files(vec![record("uploads/1-a.png")])
        });
        vm.select_file(sample_file());
        let second = vm.clone();

        let (deleted, ignored) = tokio::join!(
            vm.delete("uploads/1-a.png", Confirmation::Confirmed),
            async {
                tokio::task::yield_now().await;
                assert_eq!(second.state().phase(), GalleryPhase::Mutating);
                let outcome = second.upload().await;
                gate.notify_one();
                outcome
            }
        );

        assert_eq!(deleted.unwrap(), DeleteOutcome::Deleted);
        assert_eq!(ignored.unwrap(), UploadOutcome::Ignored);
        assert_eq!(MockApi::calls(&vm.api().upload_calls), 0);
        assert_eq!(vm.state().selected_file, Some(sample_file()));
        assert_eq!(vm.notifier().levels(), vec![NoticeLevel::Success]);
    }

    #[tokio::test]
    async fn blank_delete_key_is_rejected_locally() {
        let vm = model_with(MockApi::default());

        let error = vm.delete("   ", Confirmation::Confirmed).await.unwrap_err();

        assert!(matches!(error, Error::Validation(_)));
        assert_eq!(MockApi::calls(&vm.api().delete_calls), 0);
        assert_eq!(vm.state().phase(), GalleryPhase::Idle);
        assert_eq!(vm.notifier().levels(), vec![NoticeLevel::Warning]);
    }

    #[tokio::test]
    async fn overtaken_refresh_response_is_discarded() {
        let gate = Arc::new(Notify::new());
        let vm = model_with(MockApi {
            first_list_gate: Some(Arc::clone(&gate)),
            ..MockApi::with_files(vec![record("uploads/1-a.png")])
        });
        let second = vm.clone();

        let (older, newer) = tokio::join!(vm.refresh(), async {
            tokio::task::yield_now().await;
            second.api().files.lock().unwrap().push(record("uploads/2-b.pdf"));
            let outcome = second.refresh().await;
            gate.notify_one();
            outcome
        });

        assert_eq!(newer.unwrap(), 2);
        assert_eq!(older.unwrap(), 1);
        let state = vm.state();
        assert_eq!(
            state.files,
            vec![record("uploads/1-a.png"), record("uploads/2-b.pdf")]
        );
        assert_eq!(state.phase(), GalleryPhase::Idle);
        assert!(vm.notifier().levels().is_empty());
    }

    #[tokio::test]
    async fn overtaken_refresh_failure_is_not_reported() {
        let gate = Arc::new(Notify::new());
        let vm = model_with(MockApi {
            first_list_gate: Some(Arc::clone(&gate)),
            ..MockApi::with_files(vec![record("uploads/1-a.png")])
        });
        let second = vm.clone();

        let (older, newer) = tokio::join!(vm.refresh(), async {
            tokio::task::yield_now().await;
            let outcome = second.refresh().await;
            second.api().fail_list.store(true, Ordering::SeqCst);
            gate.notify_one();
            outcome
        });

        assert_eq!(newer.unwrap(), 1);
        assert_eq!(older.unwrap(), 1);
        let state = vm.state();
        assert_eq!(state.files, vec![record("uploads/1-a.png")]);
        assert!(!state.loading);
        assert!(vm.notifier().levels().is_empty());
    }

    #[tokio::test]
    async fn successful_delete_refetches_once() {
        let vm = model_with(MockApi::with_files(vec![
            record("uploads/1-a.png"),
            record("uploads/2-b.pdf"),
        ]));
        vm.refresh().await.unwrap();

        let outcome = vm
            .delete("uploads/1-a.png", Confirmation::Confirmed)
            .await
            .unwrap();

        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(MockApi::calls(&vm.api().delete_calls), 1);
        assert_eq!(MockApi::calls(&vm.api().list_calls), 2);
        assert_eq!(vm.state().files, vec![record("uploads/2-b.pdf")]);
        assert_eq!(vm.notifier().levels(), vec![NoticeLevel::Success]);
    }

    #[tokio::test]
    async fn failed_delete_leaves_files_unchanged() {
        let vm = model_with(MockApi::with_files(vec![record("uploads/1-a.png")]));
        vm.refresh().await.unwrap();
        vm.api().fail_delete.store(true, Ordering::SeqCst);

        let error = vm
            .delete("uploads/1-a.png", Confirmation::Confirmed)
            .await
            .unwrap_err();

        assert!(matches!(error, Error::Delete(_)));
        assert_eq!(MockApi::calls(&vm.api().list_calls), 1);
        let state = vm.state();
        assert_eq!(state.files, vec![record("uploads/1-a.png")]);
        assert_eq!(state.phase(), GalleryPhase::Idle);
        assert_eq!(vm.notifier().levels(), vec![NoticeLevel::Error]);
    }

    #[tokio::test]
    async fn declined_delete_sends_nothing() {
        let vm = model_with(MockApi::with_files(vec![record("uploads/1-a.png")]));

        let outcome = vm
            .delete("uploads/1-a.png", Confirmation::from(false))
            .await
            .unwrap();

        assert_eq!(outcome, DeleteOutcome::Declined);
        assert_eq!(MockApi::calls(&vm.api().delete_calls), 0);
        assert!(vm.notifier().levels().is_empty());
    }

    #[tokio::test]
    async fn refetch_failure_after_delete_still_reports_deletion() {
        let vm = model_with(MockApi::with_files(vec![record("uploads/1-a.png")]));
        vm.refresh().await.unwrap();
        vm.api().fail_list.store(true, Ordering::SeqCst);

        let outcome = vm
            .delete("uploads/1-a.png", Confirmation::Confirmed)
            .await
            .unwrap();

        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(
            vm.notifier().levels(),
            vec![NoticeLevel::Success, NoticeLevel::Error]
        );
        assert_eq!(vm.state().phase(), GalleryPhase::Idle);
    }

    #[tokio::test]
    async fn open_without_view_url_makes_no_request() {
        let vm = model_with(MockApi::default());
        let record = FileRecord::new("uploads/1-a.png", None);

        let error = vm.open(&record).unwrap_err();
        assert!(matches!(error, Error::LinkExpired(_)));

        let error = vm.download(&record).await.unwrap_err();
        assert!(matches!(error, Error::LinkExpired(_)));

        assert_eq!(MockApi::calls(&vm.api().fetch_calls), 0);
        assert_eq!(
            vm.notifier().levels(),
            vec![NoticeLevel::Error, NoticeLevel::Error]
        );
    }

    #[tokio::test]
    async fn open_returns_view_url() {
        let vm = model_with(MockApi::default());
        let url = vm.open(&record("uploads/1-a.png")).unwrap();
        assert_eq!(url, "https://bucket.example.com/uploads/1-a.png");
        assert!(vm.notifier().levels().is_empty());
    }

    #[tokio::test]
    async fn download_uses_display_name() {
        let vm = model_with(MockApi::default());

        let file = vm.download(&record("uploads/12345-report.pdf")).await.unwrap();

        assert_eq!(
            file,
            DownloadedFile {
                file_name: "report.pdf".to_string(),
                bytes: b"contents".to_vec(),
            }
        );
        assert_eq!(vm.state(), GalleryState::default());
        assert_eq!(vm.notifier().levels(), vec![NoticeLevel::Success]);
    }

    #[tokio::test]
    async fn expired_link_is_reported_once() {
        let api = MockApi::default();
        api.fail_fetch.store(true, Ordering::SeqCst);
        let vm = model_with(api);

        let error = vm.download(&record("uploads/1-a.png")).await.unwrap_err();

        assert!(matches!(error, Error::LinkExpired(_)));
        assert_eq!(vm.notifier().levels(), vec![NoticeLevel::Error]);
    }

    #[test]
    fn phase_prefers_in_flight_mutation() {
        let state = GalleryState {
            loading: true,
            mutation: Some(Mutation::Deleting),
            ..GalleryState::default()
        };
        assert_eq!(state.phase(), GalleryPhase::Mutating);

        let state = GalleryState {
            loading: true,
            ..GalleryState::default()
        };
        assert_eq!(state.phase(), GalleryPhase::Loading);
    }

    #[test]
    fn clear_selection_drops_pending_file() {
        let vm = model_with(MockApi::default());
        vm.select_file(sample_file());
        vm.clear_selection();
        assert_eq!(vm.state().selected_file, None);
    }
}
