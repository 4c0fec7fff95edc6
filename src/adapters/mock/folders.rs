//! Mock folder lister with configurable responses.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::models::Folder;
use crate::traits::{FolderError, FolderLister};

/// Folder lister returning canned results, for tests.
///
/// Configure the folders to return with [`set_folders`](Self::set_folders)
/// or make the next call fail with [`fail_with_io`](Self::fail_with_io).
/// Every requested path is recorded and available via
/// [`requested_paths`](Self::requested_paths).
#[derive(Debug, Default)]
pub struct MockFolderLister {
    folders: Mutex<Vec<Folder>>,
    error_kind: Mutex<Option<io::ErrorKind>>,
    calls: Mutex<Vec<PathBuf>>,
}

impl MockFolderLister {
    /// Create a mock that returns an empty folder list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that returns folders with the given names; paths are
    /// derived as `/mock/<name>`.
    pub fn with_folder_names(names: &[&str]) -> Self {
        let mock = Self::new();
        mock.set_folders(
            names
                .iter()
                .map(|name| Folder {
                    name: (*name).to_string(),
                    path: format!("/mock/{name}"),
                })
                .collect(),
        );
        mock
    }

    /// Replace the folders returned by subsequent calls.
    pub fn set_folders(&self, folders: Vec<Folder>) {
        *self.folders.lock().unwrap() = folders;
    }

    /// Make every subsequent call fail with an IO error of `kind`.
    pub fn fail_with_io(&self, kind: io::ErrorKind) {
        *self.error_kind.lock().unwrap() = Some(kind);
    }

    /// Paths passed to `list_subdirectories` so far, in call order.
    pub fn requested_paths(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl FolderLister for MockFolderLister {
    async fn list_subdirectories(&self, path: &Path) -> Result<Vec<Folder>, FolderError> {
        self.calls.lock().unwrap().push(path.to_path_buf());

        if let Some(kind) = *self.error_kind.lock().unwrap() {
            return Err(FolderError::Io(io::Error::new(kind, "mock failure")));
        }

        Ok(self.folders.lock().unwrap().clone())
    }
}
