//! Main view model: folder collection and selection.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::binding::{Command, Observable};
use crate::models::Folder;
use crate::traits::{FolderError, FolderLister};

/// The shape the composition root registers: one shared view model behind
/// an async mutex, mutated only by whoever holds the lock.
pub type SharedViewModel = Arc<Mutex<MainViewModel>>;

/// View model for the main window.
///
/// Owns the current folder collection and the selected folder as
/// observable properties. The lister and the root path are injected at
/// construction; nothing here reaches for ambient state.
pub struct MainViewModel {
    lister: Arc<dyn FolderLister>,
    root: PathBuf,
    folders: Observable<Vec<Folder>>,
    selected_folder: Observable<Option<Folder>>,
}

impl MainViewModel {
    pub fn new(lister: Arc<dyn FolderLister>, root: PathBuf) -> Self {
        Self {
            lister,
            root,
            folders: Observable::new(Vec::new()),
            selected_folder: Observable::new(None),
        }
    }

    /// The directory whose subdirectories are listed.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The most recent completed fetch result.
    pub fn folders(&self) -> &[Folder] {
        self.folders.get()
    }

    /// The folder currently selected in the view, if any.
    pub fn selected_folder(&self) -> Option<&Folder> {
        self.selected_folder.get().as_ref()
    }

    /// Register a callback fired when the folder collection changes.
    pub fn on_folders_changed(
        &mut self,
        subscriber: impl Fn(&Vec<Folder>) + Send + Sync + 'static,
    ) {
        self.folders.subscribe(subscriber);
    }

    /// Register a callback fired when the selection changes.
    pub fn on_selection_changed(
        &mut self,
        subscriber: impl Fn(&Option<Folder>) + Send + Sync + 'static,
    ) {
        self.selected_folder.subscribe(subscriber);
    }

    /// Fetch the subdirectories of the root and replace the collection.
    ///
    /// Subscribers are notified exactly once when the collection changed.
    /// Fetch failures are not caught here; they propagate to the caller.
    pub async fn refresh(&mut self) -> Result<(), FolderError> {
        let folders = self.lister.list_subdirectories(&self.root).await?;
        self.folders.set(folders);
        Ok(())
    }

    /// Store the selection made in the view. No membership check against
    /// the current collection is performed.
    pub fn select(&mut self, folder: Option<Folder>) {
        self.selected_folder.set(folder);
    }

    /// A zero-argument command equivalent to calling
    /// [`refresh`](Self::refresh) on the shared instance.
    pub fn refresh_command(view_model: &SharedViewModel) -> Command<FolderError> {
        let handle = view_model.clone();
        Command::new(move || {
            let handle = handle.clone();
            Box::pin(async move { handle.lock().await.refresh().await })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockFolderLister;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn view_model_with(names: &[&str]) -> (Arc<MockFolderLister>, MainViewModel) {
        let lister = Arc::new(MockFolderLister::with_folder_names(names));
        let view_model = MainViewModel::new(lister.clone(), PathBuf::from("/fixed/root"));
        (lister, view_model)
    }

    #[tokio::test]
    async fn test_refresh_replaces_folders_and_notifies_once() {
        let (_, mut view_model) = view_model_with(&["a", "b", "c"]);

        let notifications = Arc::new(AtomicUsize::new(0));
        let counter = notifications.clone();
        view_model.on_folders_changed(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        view_model.refresh().await.unwrap();

        let names: Vec<&str> = view_model.folders().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert_eq!(notifications.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_refresh_uses_the_injected_root() {
        let (lister, mut view_model) = view_model_with(&[]);

        view_model.refresh().await.unwrap();

        assert_eq!(
            lister.requested_paths(),
            vec![PathBuf::from("/fixed/root")]
        );
    }

    #[tokio::test]
    async fn test_refresh_failure_propagates_and_leaves_state_untouched() {
        let (lister, mut view_model) = view_model_with(&["a"]);
        view_model.refresh().await.unwrap();

        lister.fail_with_io(std::io::ErrorKind::NotFound);
        let result = view_model.refresh().await;

        assert!(matches!(result, Err(FolderError::Io(_))));
        assert_eq!(view_model.folders().len(), 1);
    }

    #[tokio::test]
    async fn test_last_completed_fetch_wins() {
        let (lister, mut view_model) = view_model_with(&["first"]);
        view_model.refresh().await.unwrap();

        lister.set_folders(vec![Folder {
            name: "second".to_string(),
            path: "/mock/second".to_string(),
        }]);
        view_model.refresh().await.unwrap();

        let names: Vec<&str> = view_model.folders().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["second"]);
    }

    #[tokio::test]
    async fn test_selection_is_stored_without_membership_validation() {
        let (_, mut view_model) = view_model_with(&["a"]);
        view_model.refresh().await.unwrap();

        let outsider = Folder {
            name: "not-in-collection".to_string(),
            path: "/elsewhere".to_string(),
        };
        view_model.select(Some(outsider.clone()));

        assert_eq!(view_model.selected_folder(), Some(&outsider));
    }

    #[tokio::test]
    async fn test_command_is_equivalent_to_calling_refresh() {
        let lister = Arc::new(MockFolderLister::with_folder_names(&["x", "y"]));
        let shared: SharedViewModel = Arc::new(Mutex::new(MainViewModel::new(
            lister.clone(),
            PathBuf::from("/fixed/root"),
        )));

        let notifications = Arc::new(AtomicUsize::new(0));
        let counter = notifications.clone();
        shared.lock().await.on_folders_changed(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let command = MainViewModel::refresh_command(&shared);
        assert!(command.can_execute());
        command.execute().await.unwrap();

        let view_model = shared.lock().await;
        let names: Vec<&str> = view_model.folders().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["x", "y"]);
        assert_eq!(notifications.load(Ordering::SeqCst), 1);
        assert_eq!(lister.call_count(), 1);
    }

    #[tokio::test]
    async fn test_command_failure_surfaces_to_the_driver() {
        let lister = Arc::new(MockFolderLister::new());
        lister.fail_with_io(std::io::ErrorKind::PermissionDenied);
        let shared: SharedViewModel = Arc::new(Mutex::new(MainViewModel::new(
            lister,
            PathBuf::from("/denied"),
        )));

        let command = MainViewModel::refresh_command(&shared);
        let result = command.execute().await;

        assert!(matches!(result, Err(FolderError::Io(_))));
    }
}
