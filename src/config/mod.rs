//! Plugin configuration resolution.
//!
//! A [`Config`] is the core plugin set followed by every enabled row of the
//! host's `plugins` table, plus the install hook the host calls with its
//! running services.
//!
//! The caller owns the database connection: open it with
//! [`crate::core::db::db_connect`], hand it to [`create_config`], and drop it
//! when done. Nothing is resolved at load time.
//!
//! Order is always core first, then database rows in row order. Duplicate paths
//! are kept as-is.

pub mod core_plugins;
pub mod descriptor;
pub mod install;

use crate::core::db;
use crate::core::error::PluginbotError;
use crate::core::schemas;
use crate::core::store::Store;
use rusqlite::Connection;
use serde::Serialize;
use std::fmt;

pub use core_plugins::core_plugins;
pub use descriptor::PluginDescriptor;
pub use install::{InstallHook, ServiceHandle, Services};

/// Resolved plugin configuration.
#[derive(Clone, Serialize)]
pub struct Config {
    pub plugins: Vec<PluginDescriptor>,
    #[serde(skip)]
    pub install: InstallHook,
}

impl Config {
    /// Run the install hook.
    pub fn install(
        &self,
        services: &Services,
        plugin_to_install: &PluginDescriptor,
    ) -> Result<(), PluginbotError> {
        (self.install)(services, plugin_to_install)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("plugins", &self.plugins)
            .finish_non_exhaustive()
    }
}

/// Enabled plugins from storage, mapped to descriptors.
///
/// A missing `plugins` table means no plugins are enabled.
pub fn enabled_plugins(conn: &Connection) -> Result<Vec<PluginDescriptor>, PluginbotError> {
    if !db::table_exists(conn, schemas::PLUGIN_TABLE)? {
        tracing::debug!(table = schemas::PLUGIN_TABLE, "plugin table absent; no enabled plugins");
        return Ok(Vec::new());
    }
    let rows = db::enabled_plugin_rows(conn)?;
    tracing::debug!(count = rows.len(), "loaded enabled plugin rows");
    rows.into_iter().map(PluginDescriptor::try_from).collect()
}

/// Build the configuration: core plugins, then enabled database plugins.
pub fn build_config(conn: &Connection, store: &Store) -> Result<Config, PluginbotError> {
    let mut plugins = core_plugins(store);
    plugins.extend(enabled_plugins(conn)?);
    tracing::info!(plugins = plugins.len(), root = %store.root.display(), "resolved plugin configuration");

    Ok(Config {
        plugins,
        install: install::install,
    })
}

/// Factory the host calls once its storage handle is open.
pub fn create_config(conn: &Connection, store: &Store) -> Result<Config, PluginbotError> {
    build_config(conn, store)
}
