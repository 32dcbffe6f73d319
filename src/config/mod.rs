pub mod models;

use std::fs;
use std::ops::Index;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{ConfigItem, FileLoggingConfigItem, SkipReasonsConfigItem};
use crate::core::types::Bool;
use crate::errors::{Error, Result};
use crate::extensions::enums::parse_variant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ConfigKey {
    FileLoggingEnabled,
    DetailedSkipReasons,
}

/// On-disk shape; every item is optional and falls back to its default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub file_logging_enabled: FileLoggingConfigItem,
    #[serde(default)]
    pub detailed_skip_reasons: SkipReasonsConfigItem,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    data: ConfigFile,
}

/// `(key, description, value)` triples in `ConfigKey` order.
#[derive(Debug, Clone)]
pub struct ConfigRows(Vec<(String, String, String)>);

impl ConfigRows {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &(String, String, String)> {
        self.0.iter()
    }
}

impl Index<usize> for ConfigRows {
    type Output = (String, String, String);
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl Config {
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::config(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| Error::config(format!("Invalid JSON in '{}': {}", path.display(), e)))?;
        Ok(Self { data })
    }

    pub fn view(&self) -> &ConfigFile {
        &self.data
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled.get_value().0
    }

    pub fn detailed_skip_reasons(&self) -> bool {
        self.data.detailed_skip_reasons.get_value().0
    }

    fn item(&self, key: ConfigKey) -> &dyn ConfigItem<Bool> {
        match key {
            ConfigKey::FileLoggingEnabled => &self.data.file_logging_enabled,
            ConfigKey::DetailedSkipReasons => &self.data.detailed_skip_reasons,
        }
    }

    fn item_mut(&mut self, key: ConfigKey) -> &mut dyn ConfigItem<Bool> {
        match key {
            ConfigKey::FileLoggingEnabled => &mut self.data.file_logging_enabled,
            ConfigKey::DetailedSkipReasons => &mut self.data.detailed_skip_reasons,
        }
    }

    pub fn rows(&self) -> ConfigRows {
        ConfigRows(
            ConfigKey::iter()
                .map(|key| {
                    let item = self.item(key);
                    (
                        key.to_string(),
                        item.description().to_string(),
                        item.get_value().to_string(),
                    )
                })
                .collect(),
        )
    }

    /// Update one item in memory. Nothing is written back to disk.
    pub fn set(&mut self, key_str: &str, new_value: &str) -> Result<()> {
        let key: ConfigKey = parse_variant(key_str, "configuration key")?;
        self.item_mut(key).set_value(new_value)
    }
}
