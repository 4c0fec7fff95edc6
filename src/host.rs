//! Composition root.
//!
//! `Host::build` wires the whole application: the folder lister (transient,
//! a fresh adapter per resolution), the shared view model (singleton, state
//! survives for the process's lifetime), and the main view (transient).
//! `start` and `shutdown` bracket the application's visible lifetime; the
//! registry and its singleton cache are released when the host is shut
//! down on the exit path.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::adapters::FsFolderLister;
use crate::config::AppConfig;
use crate::registry::{Lifetime, RegistryError, ServiceRegistry};
use crate::traits::FolderLister;
use crate::ui::MainView;
use crate::viewmodel::{MainViewModel, SharedViewModel};

/// Owns the service registry and the application lifecycle around it.
pub struct Host {
    registry: Arc<ServiceRegistry>,
    started: bool,
}

impl Host {
    /// Build the registry with the production registrations.
    ///
    /// The root path from `config` is injected into the view model's
    /// construction rule; no component carries a hard-coded path.
    pub fn build(config: &AppConfig) -> Result<Self, RegistryError> {
        let mut registry = ServiceRegistry::new();

        registry.register::<Arc<dyn FolderLister>, _>(Lifetime::Transient, |_| {
            Ok(Arc::new(FsFolderLister::new()) as Arc<dyn FolderLister>)
        });

        let root = config.root.clone();
        registry.register::<SharedViewModel, _>(Lifetime::Singleton, move |registry| {
            let lister = registry.resolve::<Arc<dyn FolderLister>>()?;
            Ok(Arc::new(Mutex::new(MainViewModel::new(
                lister,
                root.clone(),
            ))))
        });

        let root_label = config.root.display().to_string();
        registry.register::<MainView, _>(Lifetime::Transient, move |_| {
            Ok(MainView::new(root_label.clone()))
        });

        Ok(Self {
            registry: Arc::new(registry),
            started: false,
        })
    }

    /// Handle for resolving services; components receive this explicitly.
    pub fn registry(&self) -> Arc<ServiceRegistry> {
        self.registry.clone()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Mark the host started. Must run before the main view is resolved.
    pub fn start(&mut self) {
        self.started = true;
        tracing::info!("host started");
    }

    /// Stop the host and release the registry, singleton cache included.
    pub fn shutdown(mut self) {
        self.started = false;
        tracing::info!("host stopped");
    }
}
