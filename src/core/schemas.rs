//! Hardcoded names and paths shared by the resolver and the CLI.
//!
//! Everything here is environment-independent. The storage layout is owned by
//! the host application; pluginbot only reads it.

// --- Storage ---
pub const PLUGIN_TABLE: &str = "plugins";
pub const DATABASE_NAME: &str = "mydb";

/// Enabled plugin rows in the table's natural scan order.
pub const SELECT_ENABLED_PLUGINS: &str = "SELECT path, config FROM plugins WHERE enabled = 1";

pub const TABLE_EXISTS_QUERY: &str =
    "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1)";

// --- Plugin layout ---
pub const PLUGIN_DIRECTORY: &str = "./plugins";

pub const EXPRESS_APP_PLUGIN: &str = "./plugins/core-plugins/express-app";
pub const CATS_PLUGIN: &str = "./plugins/animals/cats";
pub const DOGS_PLUGIN: &str = "./plugins/animals/dogs";
pub const ADOPTION_PLUGIN: &str = "./plugins/adoption";

/// Core plugin paths in load order.
pub const CORE_PLUGIN_PATHS: [&str; 4] =
    [EXPRESS_APP_PLUGIN, CATS_PLUGIN, DOGS_PLUGIN, ADOPTION_PLUGIN];

// --- express-app settings ---
pub const EXPRESS_APP_PORT: u16 = 3001;
pub const EXPRESS_APP_API_BASE_URL: &str = "/api";
pub const UI_ENTRY_FILE: &str = "./public/index.html";
pub const UI_STATIC_DIR: &str = "./public/";

// --- Services ---
pub const DATABASE_SERVICE: &str = "database";
pub const MISSING_DATABASE_MESSAGE: &str = "no database has been provided";
