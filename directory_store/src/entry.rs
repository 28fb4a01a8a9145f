//! Enumerated directory entries

use serde::{Deserialize, Serialize};

/// One entry of a directory listing, carrying the attributes the resolver
/// caches into filesystem segments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreEntry {
    /// Entry name
    pub name: String,
    /// Whether the entry is a folder
    pub is_folder: bool,
    /// Size in bytes (0 for folders)
    pub size: u64,
    /// Lowercased file type tag (empty for folders)
    pub file_type: String,
    /// Last modification time, seconds since the epoch
    pub modified: u64,
    /// Whether the entry is hidden from default enumeration
    pub hidden: bool,
}

impl StoreEntry {
    /// Creates a folder entry
    pub fn folder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_folder: true,
            size: 0,
            file_type: String::new(),
            modified: 0,
            hidden: false,
        }
    }

    /// Creates a file entry
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        let name = name.into();
        let file_type = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();
        Self {
            name,
            is_folder: false,
            size,
            file_type,
            modified: 0,
            hidden: false,
        }
    }

    /// Marks the entry hidden
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Sets the modification timestamp
    pub fn modified_at(mut self, modified: u64) -> Self {
        self.modified = modified;
        self
    }
}
