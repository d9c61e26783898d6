//! Services handed over by the host, and the install hook that checks them.

use crate::config::descriptor::PluginDescriptor;
use crate::core::error::PluginbotError;
use crate::core::schemas;
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// A running service instance. The host decides the concrete type.
pub type ServiceHandle = Arc<dyn Any + Send + Sync>;

/// Install hook signature: `(services, plugin_to_install)`.
pub type InstallHook = fn(&Services, &PluginDescriptor) -> Result<(), PluginbotError>;

/// Service instances grouped by category name, each category in provide order.
#[derive(Clone, Default)]
pub struct Services {
    categories: BTreeMap<String, Vec<ServiceHandle>>,
}

impl Services {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `handle` to `category`.
    pub fn provide(&mut self, category: &str, handle: ServiceHandle) -> &mut Self {
        self.categories
            .entry(category.to_string())
            .or_default()
            .push(handle);
        self
    }

    pub fn get(&self, category: &str) -> &[ServiceHandle] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn first(&self, category: &str) -> Option<&ServiceHandle> {
        self.get(category).first()
    }

    pub fn database(&self) -> Option<&ServiceHandle> {
        self.first(schemas::DATABASE_SERVICE)
    }
}

impl fmt::Debug for Services {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: BTreeMap<&str, usize> = self
            .categories
            .iter()
            .map(|(k, v)| (k.as_str(), v.len()))
            .collect();
        f.debug_struct("Services").field("categories", &counts).finish()
    }
}

/// Require a database service; nothing else happens yet.
///
/// `plugin_to_install` is accepted for the host's calling convention and not
/// inspected.
pub fn install(services: &Services, plugin_to_install: &PluginDescriptor) -> Result<(), PluginbotError> {
    if services.database().is_none() {
        tracing::warn!(plugin = %plugin_to_install.path, "install called without a database service");
        return Err(PluginbotError::MissingDependency(
            schemas::MISSING_DATABASE_MESSAGE.to_string(),
        ));
    }
    Ok(())
}
