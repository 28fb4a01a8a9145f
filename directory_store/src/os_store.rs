//! Operating-system directory store
//!
//! `std::fs`-backed implementation. Hidden entries follow the dot-name
//! convention; file types come from lowercased extensions; timestamps are
//! seconds since the epoch.

use crate::entry::StoreEntry;
use crate::store::{DirectoryStore, StoreError};
use std::fs;
use std::path::Path;
use std::time::UNIX_EPOCH;

/// [`DirectoryStore`] over the process's real filesystem
#[derive(Debug, Default, Clone)]
pub struct OsDirectoryStore;

impl OsDirectoryStore {
    /// Creates a store over the real filesystem
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryStore for OsDirectoryStore {
    fn list_entries(
        &self,
        path: &str,
        want_folders: bool,
        want_files: bool,
        want_hidden: bool,
    ) -> Result<Vec<StoreEntry>, StoreError> {
        let dir = Path::new(path);
        if dir.is_file() {
            return Err(StoreError::NotADirectory(path.to_string()));
        }
        let reader = fs::read_dir(dir).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                StoreError::NotFound(path.to_string())
            } else {
                StoreError::Io(err.to_string())
            }
        })?;

        let mut entries = Vec::new();
        for item in reader {
            let item = item.map_err(|err| StoreError::Io(err.to_string()))?;
            let name = item.file_name().to_string_lossy().into_owned();
            let metadata = item
                .metadata()
                .map_err(|err| StoreError::Io(err.to_string()))?;
            let is_folder = metadata.is_dir();
            let hidden = name.starts_with('.');

            let kind_ok = if is_folder { want_folders } else { want_files };
            if !kind_ok || (hidden && !want_hidden) {
                continue;
            }

            let modified = metadata
                .modified()
                .ok()
                .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
                .map(|duration| duration.as_secs())
                .unwrap_or(0);
            let file_type = if is_folder {
                String::new()
            } else {
                Path::new(&name)
                    .extension()
                    .map(|ext| ext.to_string_lossy().to_lowercase())
                    .unwrap_or_default()
            };

            entries.push(StoreEntry {
                name,
                is_folder,
                size: if is_folder { 0 } else { metadata.len() },
                file_type,
                modified,
                hidden,
            });
        }
        Ok(entries)
    }

    fn path_exists(&self, path: &str) -> bool {
        Path::new(path).exists()
    }
}
