//! Directory query surface

use crate::entry::StoreEntry;
use thiserror::Error;

/// Errors that can occur during directory queries
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Path or entry does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// Attempted to list through a non-directory object
    #[error("not a directory: {0}")]
    NotADirectory(String),

    /// Underlying I/O failure
    #[error("i/o error: {0}")]
    Io(String),
}

/// Read-only directory enumeration and existence queries
///
/// Calls may block on backing I/O; this layer adds no timeouts or
/// cancellation of its own.
pub trait DirectoryStore: Send + Sync {
    /// Lists the entries of a directory in backing-store iteration order,
    /// filtered by folder/file kind and hidden visibility
    fn list_entries(
        &self,
        path: &str,
        want_folders: bool,
        want_files: bool,
        want_hidden: bool,
    ) -> Result<Vec<StoreEntry>, StoreError>;

    /// Returns true if the path exists in the backing store
    fn path_exists(&self, path: &str) -> bool;

    /// Finds one entry of a directory by name, using the store's
    /// case-insensitive collation
    fn find_entry(&self, path: &str, name: &str) -> Result<StoreEntry, StoreError> {
        self.list_entries(path, true, true, true)?
            .into_iter()
            .find(|entry| entry.name.to_lowercase() == name.to_lowercase())
            .ok_or_else(|| StoreError::NotFound(format!("{}/{}", path, name)))
    }
}
