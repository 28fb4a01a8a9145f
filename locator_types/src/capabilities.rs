//! Capability bitmasks
//!
//! A capability mask describes what operations an item supports. Fixed
//! masks exist for the namespace root and the computer-root singleton;
//! everything else is obtained by delegating to the bound object and
//! intersecting.

use bitflags::bitflags;

bitflags! {
    /// Capability bits of a namespace item
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ItemCapabilities: u32 {
        /// The item can be renamed
        const CAN_RENAME = 1 << 0;
        /// The item can be deleted
        const CAN_DELETE = 1 << 1;
        /// The item exposes a property sheet
        const HAS_PROPERTY_SHEET = 1 << 2;
        /// The item accepts dropped objects
        const IS_DROP_TARGET = 1 << 3;
        /// The item is a storage object
        const STORAGE = 1 << 4;
        /// The item contains storage objects somewhere beneath it
        const STORAGE_ANCESTOR = 1 << 5;
        /// The item contains filesystem objects somewhere beneath it
        const FILESYSTEM_ANCESTOR = 1 << 6;
        /// The item is a folder
        const IS_FOLDER = 1 << 7;
        /// The item is part of a real filesystem
        const IS_FILESYSTEM = 1 << 8;
        /// The item has at least one subfolder
        const HAS_SUBFOLDER = 1 << 9;
        /// The item's cached state should be revalidated before use.
        /// Always cleared by the resolver's attribute post-condition.
        const NEEDS_VALIDATION = 1 << 10;
        /// The item is hidden from default enumeration
        const HIDDEN = 1 << 11;
    }
}

impl ItemCapabilities {
    /// Fixed mask of the namespace root
    pub const ROOT_FOLDER: Self = Self::STORAGE
        .union(Self::HAS_PROPERTY_SHEET)
        .union(Self::STORAGE_ANCESTOR)
        .union(Self::FILESYSTEM_ANCESTOR)
        .union(Self::IS_FOLDER)
        .union(Self::IS_FILESYSTEM)
        .union(Self::HAS_SUBFOLDER);

    /// Fixed mask of the computer-root singleton
    pub const COMPUTER_ROOT: Self = Self::CAN_RENAME
        .union(Self::CAN_DELETE)
        .union(Self::HAS_PROPERTY_SHEET)
        .union(Self::IS_DROP_TARGET)
        .union(Self::FILESYSTEM_ANCESTOR)
        .union(Self::IS_FOLDER)
        .union(Self::HAS_SUBFOLDER);
}
