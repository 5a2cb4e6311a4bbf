use crate::error::{Result, RosterError};
use crate::store::{check_key, DEFAULT_KEY};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
/// Browsers typically allow around 5 MiB of local storage per origin.
const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

pub const KEY_STORAGE_KEY: &str = "storage-key";
pub const KEY_QUOTA: &str = "quota";

/// Configuration for roster, stored in `{data_dir}/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// Key the roster blob is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Largest blob the store accepts, in bytes. 0 disables the limit.
    #[serde(default = "default_quota_bytes")]
    pub quota_bytes: usize,
}

fn default_storage_key() -> String {
    DEFAULT_KEY.to_string()
}

fn default_quota_bytes() -> usize {
    DEFAULT_QUOTA_BYTES
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            quota_bytes: default_quota_bytes(),
        }
    }
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RosterError::Io)?;
        let config: RosterConfig =
            serde_json::from_str(&content).map_err(RosterError::Serialization)?;
        check_key(&config.storage_key)
            .map_err(|e| RosterError::Config(format!("{}: {}", config_path.display(), e)))?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RosterError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RosterError::Serialization)?;
        fs::write(config_path, content).map_err(RosterError::Io)?;
        Ok(())
    }

    pub fn quota(&self) -> Option<usize> {
        match self.quota_bytes {
            0 => None,
            bytes => Some(bytes),
        }
    }

    pub fn keys() -> &'static [&'static str] {
        &[KEY_STORAGE_KEY, KEY_QUOTA]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_STORAGE_KEY => Some(self.storage_key.clone()),
            KEY_QUOTA => Some(self.quota_bytes.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            KEY_STORAGE_KEY => {
                check_key(value).map_err(|e| e.to_string())?;
                self.storage_key = value.to_string();
                Ok(())
            }
            KEY_QUOTA => {
                self.quota_bytes = value
                    .parse()
                    .map_err(|_| format!("Invalid quota (expected bytes): {}", value))?;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}
