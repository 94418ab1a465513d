//! Service registry: typed lookup of shared services.
//!
//! Services are registered by their concrete type (often an `Arc<dyn Trait>`)
//! and resolved by the same type. Nothing is ambient: callers hold the registry
//! and pass it to whatever needs to resolve from it.

use crate::error::RegistryError;
use parking_lot::{Mutex, RwLock};
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Registry of singleton services keyed by type
#[derive(Default)]
pub struct ServiceRegistry {
    services: RwLock<HashMap<TypeId, Box<dyn Any + Send + Sync>>>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `service` under its type, returning the instance it replaced
    pub fn register<T>(&self, service: T) -> Option<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        debug!(service = type_name::<T>(), "Registering service");
        self.services
            .write()
            .insert(TypeId::of::<T>(), Box::new(service))
            .and_then(|previous| previous.downcast::<T>().ok())
            .map(|previous| *previous)
    }

    /// Resolve the instance registered for `T`
    pub fn resolve<T>(&self) -> Result<T, RegistryError>
    where
        T: Clone + Send + Sync + 'static,
    {
        let services = self.services.read();
        match services
            .get(&TypeId::of::<T>())
            .and_then(|entry| (**entry).downcast_ref::<T>())
        {
            Some(service) => Ok(service.clone()),
            None => {
                warn!(service = type_name::<T>(), "Service not registered");
                Err(RegistryError::ServiceUnavailable {
                    service: type_name::<T>(),
                })
            }
        }
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.services.read().contains_key(&TypeId::of::<T>())
    }

    /// Remove the instance registered for `T`; returns whether one existed
    pub fn unregister<T: 'static>(&self) -> bool {
        self.services.write().remove(&TypeId::of::<T>()).is_some()
    }
}

/// Resolves a service from a registry once and hands out the cached instance
///
/// A failed resolution is not cached, so a later call can succeed once the
/// service has been registered.
pub struct ServiceFactory<T> {
    cached: Mutex<Option<T>>,
}

impl<T> ServiceFactory<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            cached: Mutex::new(None),
        }
    }

    pub fn get(&self, registry: &ServiceRegistry) -> Result<T, RegistryError> {
        let mut cached = self.cached.lock();
        if let Some(service) = cached.as_ref() {
            return Ok(service.clone());
        }
        let service = registry.resolve::<T>()?;
        *cached = Some(service.clone());
        Ok(service)
    }

    pub fn is_resolved(&self) -> bool {
        self.cached.lock().is_some()
    }
}

impl<T> Default for ServiceFactory<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
