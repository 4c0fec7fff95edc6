use std::path::Path;

use serde::{Deserialize, Serialize};

/// A single entry in the folder list: one immediate subdirectory of the
/// configured root.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Folder {
    pub name: String,
    pub path: String,
}

impl Folder {
    /// Build a `Folder` from a directory path. The name falls back to the
    /// full path when the path has no final component (e.g. `/`).
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            name,
            path: path.display().to_string(),
        }
    }
}
