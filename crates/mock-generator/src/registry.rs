//! Named custom generators.
//!
//! The registry is a side table for applications that want to share value
//! generators by name. The engine does not consult it; overrides reference
//! it explicitly, e.g. `FieldOverride::value(move || slug())` with `slug`
//! fetched from the registry.

use mock_core::MockValue;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};
use tracing::debug;

/// A registered zero-argument generator.
pub type CustomGenerator = Arc<dyn Fn() -> MockValue + Send + Sync>;

/// Name to generator mapping. Registering an existing name replaces it.
#[derive(Default)]
pub struct GeneratorRegistry {
    entries: RwLock<HashMap<String, CustomGenerator>>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a generator, silently replacing any previous one.
    pub fn register<F>(&self, name: impl Into<String>, generator: F)
    where
        F: Fn() -> MockValue + Send + Sync + 'static,
    {
        let name = name.into();
        debug!(name = %name, "Registering custom generator");
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name, Arc::new(generator));
    }

    pub fn get(&self, name: &str) -> Option<CustomGenerator> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    /// Names of all registered generators, in no particular order.
    pub fn list(&self) -> Vec<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }
}

impl fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("names", &self.list())
            .finish()
    }
}

/// The process-wide registry.
pub fn global() -> &'static GeneratorRegistry {
    static GLOBAL: OnceLock<GeneratorRegistry> = OnceLock::new();
    GLOBAL.get_or_init(GeneratorRegistry::new)
}
