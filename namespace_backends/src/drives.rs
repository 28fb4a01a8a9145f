//! Drive mount configuration
//!
//! The drive table is the single source of truth for which drives exist,
//! their volume GUIDs, where they mount, and whether the overlay backend
//! serves them. Nodes consult the table; nothing probes hardware here.

use namespace_core::{DriveRef, OverlayProbe};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// One mounted drive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveMount {
    /// Uppercase drive letter
    pub letter: char,
    /// Stable volume GUID; the letter and GUID address the same drive
    pub volume_guid: Uuid,
    /// Absolute mount path in the backing store
    pub mount_path: String,
    /// Human-readable volume label
    pub label: String,
    /// Whether the overlay backend serves this drive
    pub overlay: bool,
}

impl DriveMount {
    pub fn new(
        letter: char,
        volume_guid: Uuid,
        mount_path: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            letter: letter.to_ascii_uppercase(),
            volume_guid,
            mount_path: mount_path.into(),
            label: label.into(),
            overlay: false,
        }
    }

    /// Marks the drive as overlay-served
    pub fn overlaid(mut self) -> Self {
        self.overlay = true;
        self
    }
}

/// Ordered collection of drive mounts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DriveTable {
    mounts: Vec<DriveMount>,
}

impl DriveTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a mount, keeping table order
    pub fn add(&mut self, mount: DriveMount) {
        self.mounts.push(mount);
    }

    /// Looks up a mount by letter, case-insensitively
    pub fn by_letter(&self, letter: char) -> Option<&DriveMount> {
        self.mounts
            .iter()
            .find(|mount| mount.letter.eq_ignore_ascii_case(&letter))
    }

    /// Looks up a mount by volume GUID
    pub fn by_guid(&self, guid: Uuid) -> Option<&DriveMount> {
        self.mounts.iter().find(|mount| mount.volume_guid == guid)
    }

    /// Resolves either drive reference form to its mount
    pub fn resolve(&self, drive: &DriveRef) -> Option<&DriveMount> {
        match drive {
            DriveRef::Letter(letter) => self.by_letter(*letter),
            DriveRef::Guid(guid) => self.by_guid(*guid),
        }
    }

    /// The mounts in table order
    pub fn mounts(&self) -> &[DriveMount] {
        &self.mounts
    }
}

/// Overlay decisions answered from the drive table
///
/// Both reference forms of the same drive resolve to the same mount, so
/// the two forms necessarily reach the same decision.
pub struct TableOverlayProbe {
    drives: Arc<DriveTable>,
}

impl TableOverlayProbe {
    pub fn new(drives: Arc<DriveTable>) -> Self {
        Self { drives }
    }
}

impl OverlayProbe for TableOverlayProbe {
    fn drive_has_overlay(&self, drive: &DriveRef) -> bool {
        self.drives
            .resolve(drive)
            .map(|mount| mount.overlay)
            .unwrap_or(false)
    }
}
