//! Persistence layer for the Application Store

use crate::application::Application;
use crate::error::StorageError;
use crate::store::ApplicationStore;
use std::path::Path;
use tracing::debug;

const APPLICATIONS_TREE: &str = "applications";

/// Sled-based implementation of ApplicationStore
///
/// Applications live in their own tree keyed by identifier, JSON-encoded.
pub struct SledApplicationStore {
    db: sled::Db,
    applications: sled::Tree,
}

impl SledApplicationStore {
    /// Open (or create) a store at the given directory
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let db = sled::open(path.as_ref()).map_err(|e| {
            StorageError::Backend(format!("Failed to open sled database: {}", e))
        })?;
        Self::from_db(db)
    }

    /// Use an already opened database
    pub fn from_db(db: sled::Db) -> Result<Self, StorageError> {
        let applications = db.open_tree(APPLICATIONS_TREE)?;
        Ok(Self { db, applications })
    }

    /// Get the underlying sled database (for advanced operations)
    pub fn db(&self) -> &sled::Db {
        &self.db
    }

    fn decode(id: &str, bytes: &[u8]) -> Result<Application, StorageError> {
        serde_json::from_slice(bytes).map_err(|e| StorageError::CorruptRecord {
            id: id.to_string(),
            reason: e.to_string(),
        })
    }
}

impl ApplicationStore for SledApplicationStore {
    fn get(&self, application_id: &str) -> Result<Option<Application>, StorageError> {
        match self.applications.get(application_id.as_bytes())? {
            Some(value) => Ok(Some(Self::decode(application_id, &value)?)),
            None => Ok(None),
        }
    }

    fn put(&self, application: &Application) -> Result<(), StorageError> {
        let value = serde_json::to_vec(application).map_err(|e| StorageError::CorruptRecord {
            id: application.application_id.clone(),
            reason: format!("Failed to serialize application: {}", e),
        })?;
        self.applications
            .insert(application.application_id.as_bytes(), value)?;
        self.applications.flush()?;
        debug!(application_id = %application.application_id, "Application stored");
        Ok(())
    }

    fn delete(&self, application_id: &str) -> Result<bool, StorageError> {
        let existed = self.applications.remove(application_id.as_bytes())?.is_some();
        self.applications.flush()?;
        Ok(existed)
    }

    fn list(&self) -> Result<Vec<Application>, StorageError> {
        let mut out = Vec::new();
        for entry in self.applications.iter() {
            let (key, value) = entry?;
            let id = String::from_utf8_lossy(&key).into_owned();
            out.push(Self::decode(&id, &value)?);
        }
        Ok(out)
    }
}
