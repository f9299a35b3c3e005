use crate::commands::{CmdMessage, CmdResult};
use crate::config::MorentConfig;
use crate::error::{MorentError, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    SetCatalog(PathBuf),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = MorentConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            if key != "catalog" {
                return Err(MorentError::Api(format!("Unknown config key: {}", key)));
            }
        }
        ConfigAction::SetCatalog(path) => {
            config.catalog_file = Some(path.clone());
            config.save(config_dir)?;
            result.add_message(CmdMessage::success(format!(
                "catalog set to {}",
                path.display()
            )));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_all_returns_current_config() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap(), MorentConfig::default());
    }

    #[test]
    fn set_catalog_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = PathBuf::from("/data/catalog.json");
        let result = run(dir.path(), ConfigAction::SetCatalog(path.clone())).unwrap();
        assert_eq!(result.config.unwrap().catalog_file, Some(path.clone()));

        let reloaded = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(reloaded.config.unwrap().catalog_file, Some(path));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(dir.path(), ConfigAction::ShowKey("nope".into())).is_err());
    }
}
