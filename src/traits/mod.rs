//! Trait abstractions for dependency injection and testability.
//!
//! Every service the view model consumes is defined here as a trait, with
//! production adapters and mocks living in `crate::adapters`.
//!
//! # Traits
//!
//! - [`FolderLister`] - Enumerate the immediate subdirectories of a path

pub mod folders;

pub use folders::{FolderError, FolderLister};
