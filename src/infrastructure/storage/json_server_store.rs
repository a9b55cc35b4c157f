//! JSON file backed server list.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::entities::ServerRecord;
use crate::domain::errors::StorageError;
use crate::domain::ports::ServerStorePort;
use crate::infrastructure::config::storage::write_atomic;

/// Storage key of the persisted server list.
pub const SERVERS_STORAGE_KEY: &str = "karaoke_eternal_servers";

/// Stores the server list as a JSON array in the data directory.
#[derive(Debug, Clone)]
pub struct JsonServerStore {
    path: PathBuf,
}

impl JsonServerStore {
    /// Creates a store under `data_dir`.
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(format!("{SERVERS_STORAGE_KEY}.json")),
        }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ServerStorePort for JsonServerStore {
    fn load(&self) -> Vec<ServerRecord> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No saved servers");
            return Vec::new();
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read saved servers");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<ServerRecord>>(&content) {
            Ok(servers) => servers,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to parse saved servers");
                Vec::new()
            }
        }
    }

    fn save(&self, servers: &[ServerRecord]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(servers)?;
        write_atomic(&self.path, content.as_bytes())?;
        debug!(count = servers.len(), path = %self.path.display(), "Saved servers");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> Vec<ServerRecord> {
        vec![
            ServerRecord::from_parts("a1", "Living Room", "https://192.168.1.50:3000", true),
            ServerRecord::from_parts("b2", "Den", "http://den.local", false),
        ]
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = JsonServerStore::new(dir.path());

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let store = JsonServerStore::new(&dir.path().join("nested"));

        store.save(&sample()).unwrap();

        assert_eq!(store.load(), sample());
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = JsonServerStore::new(dir.path());
        fs::write(store.path(), "[{\"id\": 12,").unwrap();

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_wrong_shape_loads_empty() {
        let dir = tempdir().unwrap();
        let store = JsonServerStore::new(dir.path());
        fs::write(store.path(), r#"{"servers": []}"#).unwrap();

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_reads_browser_style_payload() {
        let dir = tempdir().unwrap();
        let store = JsonServerStore::new(dir.path());
        fs::write(
            store.path(),
            r#"[{"id":"x","name":"Party","url":"https://party.local","isDefault":true}]"#,
        )
        .unwrap();

        let loaded = store.load();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name(), "Party");
        assert!(loaded[0].is_default());
    }

    #[test]
    fn test_save_of_load_is_fixed_point() {
        let dir = tempdir().unwrap();
        let store = JsonServerStore::new(dir.path());
        store.save(&sample()).unwrap();
        let first = fs::read(store.path()).unwrap();

        store.save(&store.load()).unwrap();

        assert_eq!(fs::read(store.path()).unwrap(), first);
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let dir = tempdir().unwrap();
        let store = JsonServerStore::new(dir.path());
        store.save(&sample()).unwrap();

        store.save(&sample()[1..]).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id().as_str(), "b2");
    }
}
