//! Filesystem-backed folder lister adapter.
//!
//! Production implementation of [`FolderLister`] on top of
//! `std::fs::read_dir`. The enumeration itself is synchronous and blocking;
//! it runs on a blocking worker thread so the caller's task yields while it
//! executes.

use std::fs;
use std::io;
use std::path::Path;

use async_trait::async_trait;

use crate::models::Folder;
use crate::traits::{FolderError, FolderLister};

/// Folder lister backed by the real filesystem.
///
/// Stateless; the composition root registers it with a transient lifetime,
/// so every resolution gets a fresh instance.
#[derive(Debug, Clone, Default)]
pub struct FsFolderLister;

impl FsFolderLister {
    /// Create a new filesystem folder lister.
    pub fn new() -> Self {
        Self
    }
}

/// Enumerate the immediate subdirectories of `path`, skipping files.
fn enumerate_subdirectories(path: &Path) -> Result<Vec<Folder>, io::Error> {
    let mut folders = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            folders.push(Folder::from_path(&entry.path()));
        }
    }
    Ok(folders)
}

#[async_trait]
impl FolderLister for FsFolderLister {
    async fn list_subdirectories(&self, path: &Path) -> Result<Vec<Folder>, FolderError> {
        tracing::info!(path = %path.display(), "listing subdirectories");

        let path = path.to_path_buf();
        let folders = tokio::task::spawn_blocking(move || enumerate_subdirectories(&path))
            .await
            .map_err(|err| FolderError::Worker(err.to_string()))??;

        Ok(folders)
    }
}
