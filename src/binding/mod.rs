//! Binding-layer contracts consumed by the view model.
//!
//! The view layer is an external collaborator; the view model only depends
//! on two narrow pieces from it, implemented here with plain callback
//! registration:
//!
//! - [`Observable`] - a property container that notifies subscribers when
//!   its value changes
//! - [`Command`] - a zero-argument triggerable action with an
//!   enabled-state query

pub mod command;
pub mod observable;

pub use command::{Command, CommandFuture};
pub use observable::Observable;
