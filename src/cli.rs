//! CLI struct definitions for the pluginbot command-line interface.
//!
//! All clap-derived types live here. Dispatch lives in `lib.rs`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "pluginbot",
    version = env!("CARGO_PKG_VERSION"),
    about = "Resolve the plugin configuration for a pluginbot application",
    disable_version_flag = true
)]
pub(crate) struct Cli {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(clap::Args, Debug)]
pub(crate) struct RootArgs {
    /// Application root holding the plugin database (defaults to $PLUGINBOT_ROOT, then the current directory).
    #[clap(long)]
    pub root: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub(crate) struct ConfigCli {
    #[clap(flatten)]
    pub root: RootArgs,
    /// Output format: 'text' or 'json'.
    #[clap(long, default_value = "text")]
    pub format: String,
}

#[derive(clap::Args, Debug)]
pub(crate) struct InstallCli {
    #[clap(flatten)]
    pub root: RootArgs,
    /// Plugin path handed to the install hook.
    #[clap(long, default_value = "")]
    pub plugin: String,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Print the resolved plugin list (core plugins, then enabled database plugins)
    Config(ConfigCli),
    /// Run the install hook with the plugin database as the database service
    Install(InstallCli),
    /// Print the pluginbot version
    Version,
}
