//! Application Store
//!
//! Loads applications before a patch is merged and persists them afterwards.
//! The in-memory store backs tests and offline use; the sled store backs the CLI.

pub mod persistence;

pub use persistence::SledApplicationStore;

use crate::application::Application;
use crate::error::StorageError;
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// Application Store interface
pub trait ApplicationStore: Send + Sync {
    fn get(&self, application_id: &str) -> Result<Option<Application>, StorageError>;
    fn put(&self, application: &Application) -> Result<(), StorageError>;

    /// Remove an application; returns whether it existed
    fn delete(&self, application_id: &str) -> Result<bool, StorageError>;

    /// All applications, ordered by identifier
    fn list(&self) -> Result<Vec<Application>, StorageError>;
}

/// Map-backed store, lost on drop
#[derive(Default)]
pub struct InMemoryApplicationStore {
    applications: RwLock<BTreeMap<String, Application>>,
}

impl InMemoryApplicationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ApplicationStore for InMemoryApplicationStore {
    fn get(&self, application_id: &str) -> Result<Option<Application>, StorageError> {
        Ok(self.applications.read().get(application_id).cloned())
    }

    fn put(&self, application: &Application) -> Result<(), StorageError> {
        self.applications
            .write()
            .insert(application.application_id.clone(), application.clone());
        Ok(())
    }

    fn delete(&self, application_id: &str) -> Result<bool, StorageError> {
        Ok(self.applications.write().remove(application_id).is_some())
    }

    fn list(&self) -> Result<Vec<Application>, StorageError> {
        Ok(self.applications.read().values().cloned().collect())
    }
}
