//! Shared fixtures for integration tests.

use std::fs;

use tempfile::TempDir;

use dirview::models::Folder;

/// Create a temporary root containing the given subdirectories plus one
/// stray file that must never show up in a listing.
pub fn fixture_root(subdirs: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    for name in subdirs {
        fs::create_dir(dir.path().join(name)).expect("create subdir");
    }
    fs::write(dir.path().join("stray.txt"), "not a folder").expect("create stray file");
    dir
}

/// Folder names in sorted order, for order-insensitive assertions.
pub fn folder_names(folders: &[Folder]) -> Vec<String> {
    let mut names: Vec<String> = folders.iter().map(|f| f.name.clone()).collect();
    names.sort();
    names
}
