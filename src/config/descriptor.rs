//! Plugin descriptors: where the host loads a plugin from, and with what settings.

use crate::core::db::PluginRow;
use crate::core::error::PluginbotError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A plugin the host should load.
///
/// Serializes flat as `{"path": ..., <settings>}`. `settings` never carries a
/// `path` key; the descriptor's own `path` always wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginDescriptor {
    pub path: String,
    #[serde(flatten)]
    pub settings: Map<String, Value>,
}

impl PluginDescriptor {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            settings: Map::new(),
        }
    }

    /// Add one setting. A `path` key is ignored.
    pub fn with_setting(mut self, key: &str, value: impl Into<Value>) -> Self {
        if key != "path" {
            self.settings.insert(key.to_string(), value.into());
        }
        self
    }

    /// Shallow-merge `config` alongside `path`, with `path` applied last.
    pub fn from_config(path: impl Into<String>, mut config: Map<String, Value>) -> Self {
        config.remove("path");
        Self {
            path: path.into(),
            settings: config,
        }
    }

    pub fn setting(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }
}

impl TryFrom<PluginRow> for PluginDescriptor {
    type Error = PluginbotError;

    fn try_from(row: PluginRow) -> Result<Self, Self::Error> {
        let config = match row.config.as_deref().map(str::trim) {
            None | Some("") => Map::new(),
            Some(text) => match serde_json::from_str::<Value>(text)? {
                Value::Object(map) => map,
                Value::Null => Map::new(),
                other => {
                    return Err(PluginbotError::ValidationError(format!(
                        "plugin {}: config must be a JSON object, got {}",
                        row.path, other
                    )));
                }
            },
        };
        Ok(Self::from_config(row.path, config))
    }
}
