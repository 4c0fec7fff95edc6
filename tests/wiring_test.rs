//! Integration tests for registry wiring with test doubles.
//!
//! The production host always registers the filesystem lister; these tests
//! build their own registry around `MockFolderLister` to verify that the
//! view model works against any lister handed to it at construction.

use std::path::PathBuf;
use std::sync::Arc;

use dirview::adapters::MockFolderLister;
use dirview::registry::{Lifetime, ServiceRegistry};
use dirview::traits::FolderLister;
use dirview::viewmodel::{MainViewModel, SharedViewModel, ViewModelLocator};
use tokio::sync::Mutex;

fn registry_with_mock(mock: Arc<MockFolderLister>, root: &str) -> ServiceRegistry {
    let mut registry = ServiceRegistry::new();

    let lister: Arc<dyn FolderLister> = mock;
    registry.register::<Arc<dyn FolderLister>, _>(Lifetime::Transient, move |_| Ok(lister.clone()));

    let root = PathBuf::from(root);
    registry.register::<SharedViewModel, _>(Lifetime::Singleton, move |registry| {
        let lister = registry.resolve::<Arc<dyn FolderLister>>()?;
        Ok(Arc::new(Mutex::new(MainViewModel::new(
            lister,
            root.clone(),
        ))))
    });

    registry
}

#[tokio::test]
async fn test_activation_fetches_through_the_injected_lister() {
    let mock = Arc::new(MockFolderLister::with_folder_names(&["one", "two"]));
    let registry = registry_with_mock(mock.clone(), "/fixed/root");

    let locator = ViewModelLocator::new(Arc::new(registry));
    let view_model = locator.main_view_model().await.unwrap();

    let vm = view_model.lock().await;
    let names: Vec<&str> = vm.folders().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["one", "two"]);
    assert_eq!(mock.call_count(), 1);
    assert_eq!(mock.requested_paths(), vec![PathBuf::from("/fixed/root")]);
}

#[tokio::test]
async fn test_command_through_the_registry_matches_a_direct_refresh() {
    let mock = Arc::new(MockFolderLister::with_folder_names(&["first"]));
    let registry = Arc::new(registry_with_mock(mock.clone(), "/fixed/root"));

    let view_model = registry.resolve::<SharedViewModel>().unwrap();
    let command = MainViewModel::refresh_command(&view_model);

    command.execute().await.unwrap();
    let after_command = view_model.lock().await.folders().to_vec();

    mock.set_folders(after_command.clone());
    view_model.lock().await.refresh().await.unwrap();
    let after_direct = view_model.lock().await.folders().to_vec();

    assert_eq!(after_command, after_direct);
    assert_eq!(mock.call_count(), 2);
}

#[tokio::test]
async fn test_resolving_again_keeps_the_fetched_state() {
    let mock = Arc::new(MockFolderLister::with_folder_names(&["kept"]));
    let registry = Arc::new(registry_with_mock(mock, "/fixed/root"));

    let locator = ViewModelLocator::new(registry.clone());
    locator.main_view_model().await.unwrap();

    // The singleton means a later resolution sees the state populated by
    // the activation fetch, not a reset view model.
    let resolved = registry.resolve::<SharedViewModel>().unwrap();
    assert_eq!(resolved.lock().await.folders().len(), 1);
}
