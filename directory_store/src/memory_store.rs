//! In-memory directory store
//!
//! A deterministic test double: directories are registered explicitly and
//! their entries keep insertion order, so enumeration-order assertions are
//! stable across runs.

use crate::entry::StoreEntry;
use crate::store::{DirectoryStore, StoreError};
use std::collections::HashMap;

/// Deterministic in-memory implementation of [`DirectoryStore`]
#[derive(Debug, Default)]
pub struct MemoryDirectoryStore {
    directories: HashMap<String, Vec<StoreEntry>>,
}

impl MemoryDirectoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an empty directory
    pub fn add_dir(&mut self, path: impl Into<String>) {
        self.directories.entry(path.into()).or_default();
    }

    /// Appends an entry to a directory, creating the directory if needed.
    /// Folder entries also register their own child directory so they can
    /// be listed and bound.
    pub fn add_entry(&mut self, dir: &str, entry: StoreEntry) {
        if entry.is_folder {
            self.add_dir(join(dir, &entry.name));
        }
        self.directories
            .entry(dir.to_string())
            .or_default()
            .push(entry);
    }
}

fn join(dir: &str, name: &str) -> String {
    if dir.is_empty() || dir.ends_with('/') {
        format!("{}{}", dir, name)
    } else {
        format!("{}/{}", dir, name)
    }
}

impl DirectoryStore for MemoryDirectoryStore {
    fn list_entries(
        &self,
        path: &str,
        want_folders: bool,
        want_files: bool,
        want_hidden: bool,
    ) -> Result<Vec<StoreEntry>, StoreError> {
        let entries = self
            .directories
            .get(path)
            .ok_or_else(|| StoreError::NotFound(path.to_string()))?;
        Ok(entries
            .iter()
            .filter(|entry| {
                let kind_ok = if entry.is_folder {
                    want_folders
                } else {
                    want_files
                };
                kind_ok && (want_hidden || !entry.hidden)
            })
            .cloned()
            .collect())
    }

    fn path_exists(&self, path: &str) -> bool {
        if self.directories.contains_key(path) {
            return true;
        }
        // A leaf entry exists if its parent directory lists it.
        match path.rsplit_once('/') {
            Some((dir, name)) => self.find_entry(dir, name).is_ok(),
            None => false,
        }
    }
}
