//! View-model layer: observable state the view binds to.

mod locator;
mod main_view_model;

pub use locator::{ActivationError, ViewModelLocator};
pub use main_view_model::{MainViewModel, SharedViewModel};
