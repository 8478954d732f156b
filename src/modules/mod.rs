pub mod books;
pub mod categories;
pub mod pagination;
pub mod policy;

use std::sync::Arc;

use bookgate_clients::ServiceRegistry;
use bookgate_kernel::ModuleRegistry;

/// Register all resource modules with the registry
pub fn register_all(registry: &mut ModuleRegistry, services: Arc<ServiceRegistry>) {
    registry.register(books::create_module(services.clone()));
    registry.register(categories::create_module(services));
}
