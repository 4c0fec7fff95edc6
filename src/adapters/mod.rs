//! Concrete implementations of trait abstractions.
//!
//! Production adapters implement the traits defined in `crate::traits`;
//! the [`mock`] submodule provides test doubles for each of them.
//!
//! # Adapters
//!
//! - [`FsFolderLister`] - Folder listing via `std::fs::read_dir`
//!
//! # Mock Implementations
//!
//! - [`mock::MockFolderLister`] - Canned folder lists and injectable failures

pub mod fs_folders;
pub mod mock;

pub use fs_folders::FsFolderLister;
pub use mock::MockFolderLister;
