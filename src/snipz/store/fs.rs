use super::KeyValueStore;
use crate::error::{Result, SnipzError};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// File-backed key-value store: the value for `key` lives in `<root>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn value_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(SnipzError::Store(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(SnipzError::Io)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.value_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SnipzError::Io(e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.value_path(key)?;
        self.ensure_dir()?;

        // Write beside the target and rename so a crash never leaves half a record.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(SnipzError::Io)?;
        fs::rename(&tmp, &path).map_err(SnipzError::Io)?;
        Ok(())
    }

    fn key_path(&self, key: &str) -> Option<PathBuf> {
        self.value_path(key).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_key_reads_as_none() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path());
        assert_eq!(store.get("clippy-items").unwrap(), None);
    }

    #[test]
    fn set_creates_directory_and_file() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("nested").join("data");
        let mut store = FileStore::new(&root);

        store.set("clippy-items", "[]").unwrap();

        let written = fs::read_to_string(root.join("clippy-items.json")).unwrap();
        assert_eq!(written, "[]");
        assert_eq!(store.get("clippy-items").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn set_replaces_existing_value() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path());
        store.set("k", "first").unwrap();
        store.set("k", "second").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("second"));
        assert!(!temp.path().join("k.json.tmp").exists());
    }

    #[test]
    fn rejects_path_like_keys() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path());
        assert!(store.set("../escape", "x").is_err());
        assert!(store.get("").is_err());
        assert_eq!(store.key_path("a/b"), None);
    }

    #[test]
    fn key_path_points_at_json_file() {
        let store = FileStore::new("/data");
        assert_eq!(
            store.key_path("clippy-items"),
            Some(PathBuf::from("/data/clippy-items.json"))
        );
    }
}
