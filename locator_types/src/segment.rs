//! Tagged address segments
//!
//! A segment is one immutable unit of a virtual namespace address.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Cached attributes of a filesystem entry, pre-populated from the
/// directory query that produced the segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryAttributes {
    /// Size in bytes (0 for folders)
    pub size: u64,
    /// Lowercased file type tag (empty for folders)
    pub file_type: String,
    /// Last modification time, seconds since the epoch
    pub modified: u64,
    /// Whether the entry is hidden from default enumeration
    pub hidden: bool,
}

/// A real file or directory name relative to a folder's target directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Entry name as reported by the backing store
    pub name: String,
    /// Whether the entry is a folder
    pub is_folder: bool,
    /// Cached attributes, when the segment came from an enumeration
    pub attrs: Option<EntryAttributes>,
}

impl FileEntry {
    /// Creates an entry without cached attributes
    pub fn new(name: impl Into<String>, is_folder: bool) -> Self {
        Self {
            name: name.into(),
            is_folder,
            attrs: None,
        }
    }

    /// Creates an entry carrying cached attributes
    pub fn with_attrs(name: impl Into<String>, is_folder: bool, attrs: EntryAttributes) -> Self {
        Self {
            name: name.into(),
            is_folder,
            attrs: Some(attrs),
        }
    }
}

/// One tagged, variable-size unit of a namespace address
///
/// Segments are immutable once constructed. Structural equality (`==`) is
/// byte-wise; the semantic ordering used for sorting lives in
/// [`crate::compare`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemSegment {
    /// Zero-width tag denoting "the namespace root itself". Only valid as
    /// the entire locator, never nested.
    RootMarker,
    /// A registered namespace extension, identified by GUID
    Guid(Uuid),
    /// A drive-style filesystem root
    Drive(char),
    /// A UNC-style network root
    NetworkRoot,
    /// A real file or directory under a folder's target directory
    FileSystemEntry(FileEntry),
}

/// Kind tag of a segment, ordered by sort rank: virtual entries precede
/// real files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SegmentKind {
    RootMarker,
    Guid,
    Drive,
    NetworkRoot,
    FileSystemEntry,
}

impl ItemSegment {
    /// Creates a drive segment, normalizing the letter to ASCII uppercase
    pub fn drive(letter: char) -> Self {
        Self::Drive(letter.to_ascii_uppercase())
    }

    /// Creates a filesystem entry segment without cached attributes
    pub fn entry(name: impl Into<String>, is_folder: bool) -> Self {
        Self::FileSystemEntry(FileEntry::new(name, is_folder))
    }

    /// Returns the kind tag of this segment
    pub fn kind(&self) -> SegmentKind {
        match self {
            ItemSegment::RootMarker => SegmentKind::RootMarker,
            ItemSegment::Guid(_) => SegmentKind::Guid,
            ItemSegment::Drive(_) => SegmentKind::Drive,
            ItemSegment::NetworkRoot => SegmentKind::NetworkRoot,
            ItemSegment::FileSystemEntry(_) => SegmentKind::FileSystemEntry,
        }
    }
}

impl fmt::Display for ItemSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemSegment::RootMarker => write!(f, "<root>"),
            ItemSegment::Guid(id) => write!(f, "::{{{}}}", id),
            ItemSegment::Drive(letter) => write!(f, "{}:", letter),
            ItemSegment::NetworkRoot => write!(f, "//"),
            ItemSegment::FileSystemEntry(entry) => write!(f, "{}", entry.name),
        }
    }
}
