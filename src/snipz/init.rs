use crate::api::{SnipzApi, SnipzPaths};
use crate::clipboard::SystemClipboard;
use crate::config::SnipzConfig;
use crate::error::{Result, SnipzError};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

/// Overrides the data directory (tests, portable installs).
pub const HOME_ENV_VAR: &str = "SNIPZ_HOME";

pub struct SnipzContext {
    pub api: SnipzApi<FileStore, SystemClipboard>,
    pub config: SnipzConfig,
}

/// Picks the data directory: an explicit override wins, then the platform's
/// per-user data directory.
pub fn resolve_data_dir(override_dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = override_dir.filter(|d| !d.as_os_str().is_empty()) {
        return Ok(dir);
    }
    ProjectDirs::from("com", "snipz", "snipz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| SnipzError::Store("Could not determine data directory".to_string()))
}

pub fn initialize() -> Result<SnipzContext> {
    let override_dir = std::env::var_os(HOME_ENV_VAR).map(PathBuf::from);
    let data_dir = resolve_data_dir(override_dir)?;
    debug!(data_dir = %data_dir.display(), "initializing");

    let config = SnipzConfig::load(&data_dir)?;
    let store = FileStore::new(&data_dir);
    let paths = SnipzPaths::new(data_dir);
    let api = SnipzApi::new(store, SystemClipboard::new(), paths, config.clone());

    Ok(SnipzContext { api, config })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins() {
        let dir = resolve_data_dir(Some(PathBuf::from("/tmp/snipz-test"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/snipz-test"));
    }

    #[test]
    fn empty_override_is_ignored() {
        if let Ok(dir) = resolve_data_dir(Some(PathBuf::new())) {
            assert!(!dir.as_os_str().is_empty());
        }
    }
}
