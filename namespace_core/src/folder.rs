//! The five-operation namespace contract
//!
//! Every backend (the root itself, the computer-root singleton, drive
//! overlays, network roots, filesystem folders) implements the same five
//! operations, and compound locators are resolved by recursing through
//! this contract across backend boundaries.

use crate::env::BindContext;
use crate::error::NamespaceError;
use directory_store::StoreEntry;
use locator_types::{
    EntryAttributes, FileEntry, ItemCapabilities, ItemLocator, SortKey,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Enumeration filter flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumFlags {
    pub want_folders: bool,
    pub want_files: bool,
    pub want_hidden: bool,
}

impl EnumFlags {
    /// Folders only, hidden excluded
    pub fn folders() -> Self {
        Self {
            want_folders: true,
            want_files: false,
            want_hidden: false,
        }
    }

    /// Folders and files, hidden excluded
    pub fn visible() -> Self {
        Self {
            want_folders: true,
            want_files: true,
            want_hidden: false,
        }
    }

    /// Everything, hidden included
    pub fn everything() -> Self {
        Self {
            want_folders: true,
            want_files: true,
            want_hidden: true,
        }
    }
}

/// Name synthesis form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NameForm {
    /// Machine-readable, re-parseable text
    Parsing,
    /// Default human-readable text
    Normal,
    /// Text offered for in-place editing
    Editing,
}

/// Name scope: relative to the containing folder, or absolute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NameScope {
    InFolder,
    Absolute,
}

/// Output mode of display-name synthesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayMode {
    pub form: NameForm,
    pub scope: NameScope,
}

impl DisplayMode {
    pub fn new(form: NameForm, scope: NameScope) -> Self {
        Self { form, scope }
    }

    pub fn parsing_absolute() -> Self {
        Self::new(NameForm::Parsing, NameScope::Absolute)
    }

    pub fn parsing_in_folder() -> Self {
        Self::new(NameForm::Parsing, NameScope::InFolder)
    }

    pub fn normal_in_folder() -> Self {
        Self::new(NameForm::Normal, NameScope::InFolder)
    }

    pub fn normal_absolute() -> Self {
        Self::new(NameForm::Normal, NameScope::Absolute)
    }
}

/// Result of name parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    /// The locator the text resolved to
    pub locator: ItemLocator,
    /// Length of the consumed text prefix
    pub chars_consumed: usize,
    /// Capabilities of the parsed item, when the caller requested them
    pub attributes: Option<ItemCapabilities>,
}

/// A bound non-folder object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafObject {
    /// Absolute backing path of the object
    pub path: String,
    /// The entry the leaf was bound from
    pub entry: FileEntry,
}

impl LeafObject {
    /// Capabilities of the leaf. Leaves report `NEEDS_VALIDATION`; the
    /// resolver's attribute post-condition clears it.
    pub fn capabilities(&self) -> ItemCapabilities {
        let mut caps = ItemCapabilities::STORAGE
            | ItemCapabilities::IS_FILESYSTEM
            | ItemCapabilities::CAN_RENAME
            | ItemCapabilities::CAN_DELETE
            | ItemCapabilities::HAS_PROPERTY_SHEET
            | ItemCapabilities::NEEDS_VALIDATION;
        if self.entry.attrs.as_ref().is_some_and(|attrs| attrs.hidden) {
            caps |= ItemCapabilities::HIDDEN;
        }
        caps
    }
}

/// Result of binding a locator: a child folder node or a leaf object
pub enum Binding {
    Folder(Box<dyn NamespaceFolder>),
    Leaf(LeafObject),
}

impl std::fmt::Debug for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Binding::Folder(_) => f.debug_tuple("Folder").finish(),
            Binding::Leaf(leaf) => f.debug_tuple("Leaf").field(leaf).finish(),
        }
    }
}

impl Binding {
    /// Capabilities of the bound object; folders report their own fixed
    /// mask (their `attributes_of` with an empty list)
    pub fn capabilities(
        &self,
        requested: ItemCapabilities,
    ) -> Result<ItemCapabilities, NamespaceError> {
        match self {
            Binding::Folder(folder) => folder.attributes_of(&[], requested),
            Binding::Leaf(leaf) => Ok(leaf.capabilities()),
        }
    }

    /// Unwraps the folder node, failing with `InvalidAddress` for leaves
    pub fn into_folder(self, at: &ItemLocator) -> Result<Box<dyn NamespaceFolder>, NamespaceError> {
        match self {
            Binding::Folder(folder) => Ok(folder),
            Binding::Leaf(_) => Err(NamespaceError::invalid_address(at)),
        }
    }
}

/// The uniform contract every namespace backend supplies for its subtree
pub trait NamespaceFolder: Send + Sync {
    /// Converts user-facing text into a locator, consuming the longest
    /// parseable prefix per segment
    fn parse_name(
        &self,
        text: &str,
        ctx: &BindContext<'_>,
    ) -> Result<ParsedName, NamespaceError>;

    /// Produces the ordered set of direct child locators. The result is a
    /// finite one-shot sequence; a fresh call re-enumerates from scratch.
    fn enumerate(&self, flags: EnumFlags) -> Result<Vec<ItemLocator>, NamespaceError>;

    /// Resolves a locator to a child folder or leaf, delegating suffixes
    /// to the produced child
    fn bind(
        &self,
        locator: &ItemLocator,
        ctx: &BindContext<'_>,
    ) -> Result<Binding, NamespaceError>;

    /// Total preorder over locators within this folder's subtree
    fn compare(
        &self,
        a: &ItemLocator,
        b: &ItemLocator,
        key: SortKey,
    ) -> Result<Ordering, NamespaceError>;

    /// Synthesizes a human- or machine-readable name for a locator
    fn display_name(
        &self,
        locator: &ItemLocator,
        mode: DisplayMode,
    ) -> Result<String, NamespaceError>;

    /// Computes the intersected capability mask of a set of locators.
    /// An empty list yields the folder's own fixed mask.
    fn attributes_of(
        &self,
        locators: &[ItemLocator],
        requested: ItemCapabilities,
    ) -> Result<ItemCapabilities, NamespaceError>;
}

/// Wraps a store entry as a filesystem segment payload, caching its
/// attributes
pub fn file_entry_from_store(entry: StoreEntry) -> FileEntry {
    FileEntry {
        name: entry.name,
        is_folder: entry.is_folder,
        attrs: Some(EntryAttributes {
            size: entry.size,
            file_type: entry.file_type,
            modified: entry.modified,
            hidden: entry.hidden,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_flags_presets() {
        assert!(EnumFlags::folders().want_folders);
        assert!(!EnumFlags::folders().want_files);
        assert!(EnumFlags::visible().want_files);
        assert!(!EnumFlags::visible().want_hidden);
        assert!(EnumFlags::everything().want_hidden);
    }

    #[test]
    fn test_leaf_capabilities_include_needs_validation() {
        let leaf = LeafObject {
            path: "/desk/a.txt".to_string(),
            entry: FileEntry::new("a.txt", false),
        };
        assert!(leaf
            .capabilities()
            .contains(ItemCapabilities::NEEDS_VALIDATION));
        assert!(!leaf.capabilities().contains(ItemCapabilities::HIDDEN));
    }

    #[test]
    fn test_hidden_leaf_reports_hidden_bit() {
        let leaf = LeafObject {
            path: "/desk/.secret".to_string(),
            entry: FileEntry::with_attrs(
                ".secret",
                false,
                EntryAttributes {
                    size: 1,
                    file_type: String::new(),
                    modified: 0,
                    hidden: true,
                },
            ),
        };
        assert!(leaf.capabilities().contains(ItemCapabilities::HIDDEN));
    }

    #[test]
    fn test_file_entry_from_store_caches_attrs() {
        let entry = file_entry_from_store(StoreEntry::file("a.txt", 42).modified_at(7));
        assert_eq!(entry.name, "a.txt");
        let attrs = entry.attrs.unwrap();
        assert_eq!(attrs.size, 42);
        assert_eq!(attrs.modified, 7);
        assert_eq!(attrs.file_type, "txt");
    }
}
