//! Unit-test doubles
//!
//! Deterministic stand-ins for the backend crates so the resolver's own
//! logic can be exercised in isolation. Stub folders answer the five
//! operations with fixed labels and locally-computed results.

use crate::env::{
    BackendFactories, BindContext, DriveRef, ExternalResolver, NamespaceEnv, OverlayProbe,
};
use crate::error::NamespaceError;
use crate::folder::{
    file_entry_from_store, Binding, DisplayMode, EnumFlags, LeafObject, NamespaceFolder,
    ParsedName,
};
use crate::path::{split_parent, take_component};
use crate::root::RootFolder;
use directory_store::{DirectoryStore, MemoryDirectoryStore, StoreEntry};
use extension_registry::{ExtensionInfo, InMemoryExtensionRegistry, RegistryScope};
use locator_types::{ItemCapabilities, ItemLocator, ItemSegment, SortKey};
use std::cmp::Ordering;
use std::sync::Arc;
use uuid::Uuid;

/// Machine-scope fixture extension
pub(crate) const G1: Uuid = Uuid::from_u128(0x11111111_1111_4111_8111_111111111111);
/// User-scope fixture extension
pub(crate) const G2: Uuid = Uuid::from_u128(0x22222222_2222_4222_8222_222222222222);

/// A named folder node with self-contained answers to the five operations
#[derive(Clone)]
struct StubFolder {
    name: String,
    mask: ItemCapabilities,
}

impl StubFolder {
    fn named(name: impl Into<String>, mask: ItemCapabilities) -> Self {
        Self {
            name: name.into(),
            mask,
        }
    }
}

impl NamespaceFolder for StubFolder {
    fn parse_name(
        &self,
        text: &str,
        _ctx: &BindContext<'_>,
    ) -> Result<ParsedName, NamespaceError> {
        if text.starts_with("::") {
            return Err(NamespaceError::ParseError {
                consumed: 0,
                reason: format!("'{}' has no virtual children", self.name),
            });
        }
        let mut segments = Vec::new();
        let mut rest = text;
        while !rest.is_empty() {
            let (component, remainder, _) = take_component(rest);
            if !component.is_empty() {
                segments.push(ItemSegment::entry(component, !remainder.is_empty()));
            }
            rest = remainder;
        }
        Ok(ParsedName {
            locator: ItemLocator::from_segments(segments),
            chars_consumed: text.len(),
            attributes: None,
        })
    }

    fn enumerate(&self, _flags: EnumFlags) -> Result<Vec<ItemLocator>, NamespaceError> {
        Ok(Vec::new())
    }

    fn bind(
        &self,
        locator: &ItemLocator,
        ctx: &BindContext<'_>,
    ) -> Result<Binding, NamespaceError> {
        let Some((first, rest)) = locator.split_first() else {
            return Ok(Binding::Folder(Box::new(self.clone())));
        };
        match first {
            ItemSegment::FileSystemEntry(entry) => {
                let child = StubFolder::named(entry.name, self.mask);
                if rest.is_empty() {
                    Ok(Binding::Folder(Box::new(child)))
                } else {
                    child.bind(&rest, ctx)
                }
            }
            _ => Err(NamespaceError::invalid_address(locator)),
        }
    }

    fn compare(
        &self,
        a: &ItemLocator,
        b: &ItemLocator,
        key: SortKey,
    ) -> Result<Ordering, NamespaceError> {
        Ok(locator_types::compare(a, b, key))
    }

    fn display_name(
        &self,
        locator: &ItemLocator,
        _mode: DisplayMode,
    ) -> Result<String, NamespaceError> {
        match locator.segments().last() {
            None => Ok(self.name.clone()),
            Some(segment) => Ok(segment.to_string()),
        }
    }

    fn attributes_of(
        &self,
        _locators: &[ItemLocator],
        requested: ItemCapabilities,
    ) -> Result<ItemCapabilities, NamespaceError> {
        Ok(self.mask & requested)
    }
}

/// Overlay probe answering yes for at most one drive letter
struct StubOverlay {
    letter: Option<char>,
}

impl OverlayProbe for StubOverlay {
    fn drive_has_overlay(&self, drive: &DriveRef) -> bool {
        match (drive, self.letter) {
            (DriveRef::Letter(l), Some(overlaid)) => l.eq_ignore_ascii_case(&overlaid),
            _ => false,
        }
    }
}

/// Factories producing stub nodes, with filesystem lookups answered by
/// the fixture store
struct StubFactories {
    store: Arc<dyn DirectoryStore>,
}

impl BackendFactories for StubFactories {
    fn computer_root(&self) -> Box<dyn NamespaceFolder> {
        Box::new(StubFolder::named("computer", ItemCapabilities::COMPUTER_ROOT))
    }

    fn drive_overlay(&self, drive: &DriveRef) -> Result<Box<dyn NamespaceFolder>, NamespaceError> {
        let name = match drive {
            DriveRef::Letter(letter) => format!("overlay-{}", letter.to_ascii_uppercase()),
            DriveRef::Guid(id) => format!("overlay-{}", id),
        };
        Ok(Box::new(StubFolder::named(name, ItemCapabilities::ROOT_FOLDER)))
    }

    fn network_root(&self) -> Box<dyn NamespaceFolder> {
        Box::new(StubFolder::named("network", ItemCapabilities::ROOT_FOLDER))
    }

    fn filesystem_folder(&self, path: &str) -> Result<Binding, NamespaceError> {
        let (parent, name) =
            split_parent(path).ok_or_else(|| NamespaceError::not_found(path))?;
        let entry = self.store.find_entry(parent, name)?;
        if entry.is_folder {
            Ok(Binding::Folder(Box::new(StubFolder::named(
                entry.name,
                ItemCapabilities::ROOT_FOLDER,
            ))))
        } else {
            Ok(Binding::Leaf(LeafObject {
                path: path.to_string(),
                entry: file_entry_from_store(entry),
            }))
        }
    }
}

/// External resolver that claims every text with a fixed locator
pub(crate) struct ClaimEverything(pub ItemLocator);

impl ExternalResolver for ClaimEverything {
    fn claim(&self, _text: &str) -> Option<ItemLocator> {
        Some(self.0.clone())
    }
}

fn build_env(overlay_letter: Option<char>) -> Arc<NamespaceEnv> {
    let mut store = MemoryDirectoryStore::new();
    store.add_dir("/desk");
    store.add_entry("/desk", StoreEntry::folder("Sub"));
    store.add_entry("/desk", StoreEntry::file("a.txt", 10));
    store.add_entry("/desk", StoreEntry::file(".secret", 1).hidden());
    if let Some(letter) = overlay_letter {
        store.add_dir(format!("{}:", letter.to_ascii_uppercase()));
    }
    let store: Arc<dyn DirectoryStore> = Arc::new(store);

    let mut registry = InMemoryExtensionRegistry::new();
    registry
        .register(RegistryScope::Machine, G1, ExtensionInfo::labeled("Machine One"))
        .expect("fixture registration");
    registry
        .register(RegistryScope::User, G2, ExtensionInfo::labeled("User Two"))
        .expect("fixture registration");

    Arc::new(NamespaceEnv {
        directory_store: Arc::clone(&store),
        registry: Arc::new(registry),
        overlay: Arc::new(StubOverlay {
            letter: overlay_letter,
        }),
        factories: Arc::new(StubFactories { store }),
    })
}

/// Environment over the `/desk` fixture: folder `Sub`, file `a.txt`,
/// hidden file `.secret`; extensions `G1` (machine) and `G2` (user);
/// no drive overlays.
pub(crate) fn test_env() -> Arc<NamespaceEnv> {
    build_env(None)
}

/// Root folder over the fixture environment
pub(crate) fn test_root() -> RootFolder {
    RootFolder::new("/desk", test_env())
}

/// Root folder whose environment overlays one drive letter
pub(crate) fn test_root_with_overlay(letter: char) -> RootFolder {
    RootFolder::new("/desk", build_env(Some(letter)))
}
