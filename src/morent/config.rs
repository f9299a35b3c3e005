use crate::error::{MorentError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for morent, stored in the data dir as config.json
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MorentConfig {
    /// Path of the catalog document the file source reads.
    #[serde(default)]
    pub catalog_file: Option<PathBuf>,
}

impl MorentConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(MorentError::Io)?;
        let config: MorentConfig =
            serde_json::from_str(&content).map_err(MorentError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(MorentError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(MorentError::Serialization)?;
        fs::write(config_path, content).map_err(MorentError::Io)?;
        Ok(())
    }
}
