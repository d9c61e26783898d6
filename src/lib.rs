//! pluginbot: plugin configuration loading for a plugin-hosted application.
//!
//! The host asks pluginbot for its plugin list once storage is open. The list
//! is a fixed set of core plugins followed by every enabled row of the
//! `plugins` table in the application's SQLite database. The resolved
//! [`config::Config`] also carries the install hook the host calls with its
//! running services.
//!
//! ```no_run
//! use pluginbot::config;
//! use pluginbot::core::{db, store::Store};
//!
//! # fn main() -> Result<(), pluginbot::core::error::PluginbotError> {
//! let store = Store::discover(None)?;
//! let conn = db::db_connect(&store.database_path())?;
//! let config = config::create_config(&conn, &store)?;
//! for plugin in &config.plugins {
//!     println!("{}", plugin.path);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Crate Structure
//!
//! - [`core`]: errors, storage access, constants, and path resolution
//! - [`config`]: descriptors, the core plugin set, the resolver, and the install hook

mod cli;
pub mod config;
pub mod core;

use cli::{Cli, Command, ConfigCli, InstallCli};
use clap::Parser;
use colored::Colorize;
use config::{Config, PluginDescriptor, Services};
use crate::core::{db, error, output, schemas, store::Store};
use std::sync::{Arc, Mutex};

const SETTINGS_PREVIEW_CHARS: usize = 120;

pub fn run() -> Result<(), error::PluginbotError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Version => {
            println!("v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Config(config_cli) => run_config(config_cli),
        Command::Install(install_cli) => run_install(install_cli),
    }
}

fn run_config(cli: ConfigCli) -> Result<(), error::PluginbotError> {
    let store = Store::discover(cli.root.root.as_deref())?;
    let conn = db::db_connect(&store.database_path())?;
    let config = config::create_config(&conn, &store)?;

    match cli.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&config)?),
        "text" => print!("{}", render_text(&config)),
        other => {
            return Err(error::PluginbotError::ValidationError(format!(
                "unknown format '{}' (expected 'text' or 'json')",
                other
            )));
        }
    }
    Ok(())
}

fn run_install(cli: InstallCli) -> Result<(), error::PluginbotError> {
    let store = Store::discover(cli.root.root.as_deref())?;
    let conn = db::db_connect(&store.database_path())?;
    let config = config::create_config(&conn, &store)?;

    let mut services = Services::new();
    services.provide(schemas::DATABASE_SERVICE, Arc::new(Mutex::new(conn)));

    config.install(&services, &PluginDescriptor::new(cli.plugin))?;
    println!("{}", "install ok".bright_green());
    Ok(())
}

fn render_text(config: &Config) -> String {
    let core_count = schemas::CORE_PLUGIN_PATHS.len();
    let mut out = format!("{} ({})\n", "Plugins".bold(), config.plugins.len());
    for (i, plugin) in config.plugins.iter().enumerate() {
        let source = if i < core_count {
            "core".bright_cyan()
        } else {
            "db".bright_magenta()
        };
        let settings = output::render_settings(&plugin.settings, SETTINGS_PREVIEW_CHARS);
        if settings.is_empty() {
            out.push_str(&format!("{:>3}. [{}] {}\n", i + 1, source, plugin.path));
        } else {
            out.push_str(&format!(
                "{:>3}. [{}] {}  {}\n",
                i + 1,
                source,
                plugin.path,
                settings.dimmed()
            ));
        }
    }
    out
}
