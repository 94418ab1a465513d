//! Application service: load, merge, persist.

use crate::application::Application;
use crate::error::{ApiError, RegistryError};
use crate::patch::{ApplicationMerger, ApplicationPatch};
use crate::registry::ServiceRegistry;
use crate::store::ApplicationStore;
use std::sync::Arc;
use tracing::{info, warn};

/// Collaborators the application service works with
///
/// Built once at startup and passed explicitly; nothing is looked up lazily
/// from process-wide state.
#[derive(Clone)]
pub struct ServiceContext {
    pub store: Arc<dyn ApplicationStore>,
    pub merger: Arc<ApplicationMerger>,
}

impl ServiceContext {
    pub fn new(store: Arc<dyn ApplicationStore>, merger: Arc<ApplicationMerger>) -> Self {
        Self { store, merger }
    }

    /// Resolve every collaborator from `registry`, failing on the first missing one
    pub fn from_registry(registry: &ServiceRegistry) -> Result<Self, RegistryError> {
        Ok(Self {
            store: registry.resolve::<Arc<dyn ApplicationStore>>()?,
            merger: registry.resolve::<Arc<ApplicationMerger>>()?,
        })
    }

    /// Register this context's collaborators into `registry`
    pub fn register_into(&self, registry: &ServiceRegistry) {
        registry.register::<Arc<dyn ApplicationStore>>(Arc::clone(&self.store));
        registry.register::<Arc<ApplicationMerger>>(Arc::clone(&self.merger));
    }
}

/// CRUD and patch operations over stored applications
pub struct ApplicationService {
    context: ServiceContext,
}

impl ApplicationService {
    pub fn new(context: ServiceContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &ServiceContext {
        &self.context
    }

    /// Store a new application; fails if the identifier is taken
    pub fn create(&self, application: &Application) -> Result<(), ApiError> {
        if application.application_id.trim().is_empty() {
            return Err(ApiError::InvalidPayload(
                "applicationId must not be blank".to_string(),
            ));
        }
        if self.context.store.get(&application.application_id)?.is_some() {
            return Err(ApiError::ApplicationExists(
                application.application_id.clone(),
            ));
        }
        self.context.store.put(application)?;
        info!(application_id = %application.application_id, "Application created");
        Ok(())
    }

    pub fn get(&self, application_id: &str) -> Result<Application, ApiError> {
        self.context
            .store
            .get(application_id)?
            .ok_or_else(|| ApiError::ApplicationNotFound(application_id.to_string()))
    }

    pub fn list(&self) -> Result<Vec<Application>, ApiError> {
        Ok(self.context.store.list()?)
    }

    pub fn delete(&self, application_id: &str) -> Result<(), ApiError> {
        if !self.context.store.delete(application_id)? {
            return Err(ApiError::ApplicationNotFound(application_id.to_string()));
        }
        info!(application_id, "Application deleted");
        Ok(())
    }

    /// Merge `patch` into the stored application and persist the result.
    ///
    /// The merge runs on a working copy; a rejected patch is not persisted and
    /// the stored application stays as it was.
    pub fn patch(
        &self,
        application_id: &str,
        patch: &ApplicationPatch,
    ) -> Result<Application, ApiError> {
        let mut application = self.get(application_id)?;
        if patch.is_empty() {
            return Ok(application);
        }

        if let Err(e) = self.context.merger.apply(&mut application, patch) {
            warn!(application_id, error = %e, "Patch not persisted");
            return Err(e.into());
        }

        self.context.store.put(&application)?;
        info!(application_id, "Application patched");
        Ok(application)
    }
}
