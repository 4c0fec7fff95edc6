//! Folder listing trait abstraction.
//!
//! Abstracts directory enumeration behind a trait so the view model can be
//! exercised in tests without touching the filesystem.

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Folder;

/// Errors surfaced by a [`FolderLister`].
///
/// Filesystem failures are passed through unmodified; nothing in this crate
/// catches or translates them.
#[derive(Debug, Error)]
pub enum FolderError {
    /// The underlying enumeration failed (missing path, not a directory,
    /// permission denied).
    #[error("failed to enumerate folders: {0}")]
    Io(#[from] std::io::Error),

    /// The blocking worker running the enumeration was torn down before it
    /// finished.
    #[error("folder enumeration worker failed: {0}")]
    Worker(String),
}

/// Trait for enumerating the immediate subdirectories of a path.
///
/// Implementations wrap a synchronous enumeration as an asynchronous unit
/// of work. No ordering is guaranteed and no path validation is performed
/// beyond what the underlying enumeration does.
///
/// # Example
///
/// ```ignore
/// use dirview::traits::FolderLister;
///
/// async fn print_folders<L: FolderLister>(lister: &L) -> Result<(), FolderError> {
///     for folder in lister.list_subdirectories(Path::new("/tmp")).await? {
///         println!("{}", folder.name);
///     }
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait FolderLister: Send + Sync {
    /// List the immediate subdirectories of `path`.
    ///
    /// # Returns
    /// - `Ok(folders)` with one entry per subdirectory, files excluded
    /// - `Err(error)` if `path` cannot be enumerated
    async fn list_subdirectories(&self, path: &Path) -> Result<Vec<Folder>, FolderError>;
}
