//! Application root handle and path resolution.
//!
//! The root is the directory that holds the plugin database and the UI bundle.
//! Paths handed to plugins are absolute and lexically normalized.

use crate::core::db;
use crate::core::error::PluginbotError;
use std::path::{Component, Path, PathBuf};

/// Environment variable consulted when no root is given explicitly.
pub const ROOT_ENV_VAR: &str = "PLUGINBOT_ROOT";

/// Store handle representing an application root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    /// Absolute path to the application root directory
    pub root: PathBuf,
}

impl Store {
    pub fn new(root: &Path) -> Result<Self, PluginbotError> {
        Ok(Self {
            root: resolve_path(root, Path::new(""))?,
        })
    }

    /// Pick the root from an explicit path, then `PLUGINBOT_ROOT`, then the
    /// current directory.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, PluginbotError> {
        if let Some(root) = explicit {
            return Self::new(root);
        }
        match std::env::var(ROOT_ENV_VAR) {
            Ok(root) if !root.trim().is_empty() => Self::new(Path::new(&root)),
            Ok(_) | Err(std::env::VarError::NotPresent) => Self::new(&std::env::current_dir()?),
            Err(e) => Err(PluginbotError::EnvVarError(e)),
        }
    }

    pub fn database_path(&self) -> PathBuf {
        db::database_path(&self.root)
    }

    /// Resolve `relative` against the root.
    pub fn resolve(&self, relative: &str) -> PathBuf {
        // root is already absolute, so this cannot consult the working directory
        normalize(&self.root.join(relative))
    }
}

/// Join `relative` onto `base` and return an absolute, normalized path.
///
/// A relative `base` is anchored at the current working directory. `.` and
/// `..` are folded lexically; symlinks are not followed and the path does not
/// need to exist.
pub fn resolve_path(base: &Path, relative: &Path) -> Result<PathBuf, PluginbotError> {
    let joined = base.join(relative);
    let absolute = if joined.is_absolute() {
        joined
    } else {
        std::env::current_dir()?.join(joined)
    };
    Ok(normalize(&absolute))
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
