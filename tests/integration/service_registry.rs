//! Integration tests for the service registry and service context

use appmerge::error::RegistryError;
use appmerge::patch::{ApplicationMerger, TagDuplicatePolicy};
use appmerge::registry::{ServiceFactory, ServiceRegistry};
use appmerge::service::{ApplicationService, ServiceContext};
use appmerge::store::{ApplicationStore, InMemoryApplicationStore};
use std::sync::Arc;

#[test]
fn test_context_requires_every_service() {
    let registry = ServiceRegistry::new();
    registry.register(Arc::new(ApplicationMerger::default()));

    let err = ServiceContext::from_registry(&registry).err().unwrap();
    let RegistryError::ServiceUnavailable { service } = err;
    assert!(service.contains("ApplicationStore"), "got {}", service);
}

#[test]
fn test_context_resolves_registered_services() {
    let registry = ServiceRegistry::new();
    let store: Arc<dyn ApplicationStore> = Arc::new(InMemoryApplicationStore::new());
    registry.register(Arc::clone(&store));
    registry.register(Arc::new(ApplicationMerger::new(TagDuplicatePolicy::Preserve)));

    let context = ServiceContext::from_registry(&registry).unwrap();
    assert!(Arc::ptr_eq(&context.store, &store));
    assert_eq!(context.merger.tag_policy(), TagDuplicatePolicy::Preserve);

    let service = ApplicationService::new(context);
    assert!(service.list().unwrap().is_empty());
}

#[test]
fn test_factory_resolves_once() {
    let registry = ServiceRegistry::new();
    let factory: ServiceFactory<Arc<ApplicationMerger>> = ServiceFactory::new();

    let err = factory.get(&registry).err().unwrap();
    assert!(err.to_string().starts_with("Unable to retrieve"));

    let merger = Arc::new(ApplicationMerger::default());
    registry.register(Arc::clone(&merger));
    let first = factory.get(&registry).unwrap();
    registry.unregister::<Arc<ApplicationMerger>>();
    let second = factory.get(&registry).unwrap();

    assert!(Arc::ptr_eq(&first, &merger));
    assert!(Arc::ptr_eq(&second, &merger));
}
