//! View-model locator: resolve and eagerly populate.

use std::sync::Arc;

use thiserror::Error;

use crate::registry::{RegistryError, ServiceRegistry};
use crate::traits::FolderError;
use crate::viewmodel::SharedViewModel;

/// Failures while activating the view model.
#[derive(Debug, Error)]
pub enum ActivationError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Fetch(#[from] FolderError),
}

/// Resolves the shared view model and runs the initial fetch before the
/// view binds to it.
///
/// This is the single fetch-trigger path at startup; the event loop only
/// refreshes on an explicit user command afterwards.
pub struct ViewModelLocator {
    registry: Arc<ServiceRegistry>,
}

impl ViewModelLocator {
    pub fn new(registry: Arc<ServiceRegistry>) -> Self {
        Self { registry }
    }

    /// Resolve the singleton view model, fetch once, hand it over.
    pub async fn main_view_model(&self) -> Result<SharedViewModel, ActivationError> {
        let view_model = self.registry.resolve::<SharedViewModel>()?;
        view_model.lock().await.refresh().await?;
        Ok(view_model)
    }
}
