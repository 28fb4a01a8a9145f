//! Filesystem folder backend
//!
//! A node over one absolute directory path. Children are the directory's
//! entries; subfolders bind to fresh nodes over the joined path, files
//! bind to leaf objects.

use directory_store::DirectoryStore;
use locator_types::{compare, ItemCapabilities, ItemLocator, ItemSegment, SortKey};
use namespace_core::path::{base_name, join_path, take_component};
use namespace_core::{
    file_entry_from_store, BindContext, Binding, DisplayMode, EnumFlags, LeafObject, NameForm,
    NameScope, NamespaceError, NamespaceFolder, ParsedName,
};
use std::cmp::Ordering;
use std::sync::Arc;

/// Fixed mask of a real directory
const FOLDER_MASK: ItemCapabilities = ItemCapabilities::ROOT_FOLDER
    .union(ItemCapabilities::CAN_RENAME)
    .union(ItemCapabilities::CAN_DELETE)
    .union(ItemCapabilities::IS_DROP_TARGET);

/// Shortcut suffix hidden from non-parsing names
const SHORTCUT_SUFFIX: &str = ".lnk";

/// A namespace node over one real directory
#[derive(Clone)]
pub struct FileSystemFolder {
    path: String,
    store: Arc<dyn DirectoryStore>,
}

impl FileSystemFolder {
    /// Creates a node over an absolute directory path
    pub fn new(path: impl Into<String>, store: Arc<dyn DirectoryStore>) -> Self {
        Self {
            path: path.into(),
            store,
        }
    }

    /// The absolute backing path of this node
    pub fn path(&self) -> &str {
        &self.path
    }

    fn child(&self, name: &str) -> Self {
        Self::new(join_path(&self.path, name), Arc::clone(&self.store))
    }
}

impl NamespaceFolder for FileSystemFolder {
    fn parse_name(
        &self,
        text: &str,
        ctx: &BindContext<'_>,
    ) -> Result<ParsedName, NamespaceError> {
        if text.is_empty() {
            return finish(self, ItemLocator::empty(), 0, ctx);
        }
        let (component, remainder, sep_len) = take_component(text);
        let entry = self
            .store
            .find_entry(&self.path, component)
            .map_err(|_| NamespaceError::ParseError {
                consumed: 0,
                reason: format!("no entry '{}' in {}", component, self.path),
            })?;
        let is_folder = entry.is_folder;
        let segment = ItemSegment::FileSystemEntry(file_entry_from_store(entry));
        let prefix = ItemLocator::simple(segment);
        if remainder.is_empty() {
            return finish(self, prefix, component.len() + sep_len, ctx);
        }
        if !is_folder {
            return Err(NamespaceError::ParseError {
                consumed: component.len(),
                reason: format!("'{}' is not a folder", component),
            });
        }
        let parsed = self
            .child(component)
            .parse_name(remainder, ctx)
            .map_err(|err| err.offset_consumed(component.len() + sep_len))?;
        Ok(ParsedName {
            locator: prefix.concat(&parsed.locator),
            chars_consumed: component.len() + sep_len + parsed.chars_consumed,
            attributes: parsed.attributes,
        })
    }

    fn enumerate(&self, flags: EnumFlags) -> Result<Vec<ItemLocator>, NamespaceError> {
        let entries = self.store.list_entries(
            &self.path,
            flags.want_folders,
            flags.want_files,
            flags.want_hidden,
        )?;
        Ok(entries
            .into_iter()
            .map(|entry| {
                ItemLocator::simple(ItemSegment::FileSystemEntry(file_entry_from_store(entry)))
            })
            .collect())
    }

    fn bind(
        &self,
        locator: &ItemLocator,
        ctx: &BindContext<'_>,
    ) -> Result<Binding, NamespaceError> {
        let Some((first, rest)) = locator.split_first() else {
            return Ok(Binding::Folder(Box::new(self.clone())));
        };
        let ItemSegment::FileSystemEntry(named) = first else {
            return Err(NamespaceError::invalid_address(locator));
        };
        let entry = self.store.find_entry(&self.path, &named.name)?;
        if entry.is_folder {
            let child = self.child(&entry.name);
            if rest.is_empty() {
                return Ok(Binding::Folder(Box::new(child)));
            }
            return child.bind(&rest, ctx);
        }
        if !rest.is_empty() {
            return Err(NamespaceError::invalid_address(locator));
        }
        Ok(Binding::Leaf(LeafObject {
            path: join_path(&self.path, &entry.name),
            entry: file_entry_from_store(entry),
        }))
    }

    fn compare(
        &self,
        a: &ItemLocator,
        b: &ItemLocator,
        key: SortKey,
    ) -> Result<Ordering, NamespaceError> {
        // The whole subtree shares one collation, so no delegation is
        // needed below this node.
        Ok(compare(a, b, key))
    }

    fn display_name(
        &self,
        locator: &ItemLocator,
        mode: DisplayMode,
    ) -> Result<String, NamespaceError> {
        let Some(last) = locator.segments().last() else {
            return Ok(if mode.form == NameForm::Parsing && mode.scope == NameScope::Absolute {
                self.path.clone()
            } else {
                base_name(&self.path).to_string()
            });
        };
        let ItemSegment::FileSystemEntry(entry) = last else {
            return Err(NamespaceError::invalid_address(locator));
        };
        if mode.form == NameForm::Parsing && mode.scope == NameScope::Absolute {
            let mut path = self.path.clone();
            for segment in locator.segments() {
                match segment {
                    ItemSegment::FileSystemEntry(part) => path = join_path(&path, &part.name),
                    _ => return Err(NamespaceError::invalid_address(locator)),
                }
            }
            return Ok(path);
        }
        let mut name = entry.name.clone();
        if !entry.is_folder && mode.form != NameForm::Parsing {
            let lowered = name.to_lowercase();
            if lowered.len() > SHORTCUT_SUFFIX.len() && lowered.ends_with(SHORTCUT_SUFFIX) {
                name.truncate(name.len() - SHORTCUT_SUFFIX.len());
            }
        }
        Ok(name)
    }

    fn attributes_of(
        &self,
        locators: &[ItemLocator],
        requested: ItemCapabilities,
    ) -> Result<ItemCapabilities, NamespaceError> {
        if locators.is_empty() {
            return Ok(FOLDER_MASK & requested);
        }
        let mut mask = ItemCapabilities::all();
        for locator in locators {
            mask &= self.bind(locator, &BindContext::new())?.capabilities(requested)?;
        }
        Ok((mask & requested).difference(ItemCapabilities::NEEDS_VALIDATION))
    }
}

fn finish(
    folder: &FileSystemFolder,
    locator: ItemLocator,
    consumed: usize,
    ctx: &BindContext<'_>,
) -> Result<ParsedName, NamespaceError> {
    let attributes = match ctx.want_attributes {
        Some(requested) => Some(folder.attributes_of(std::slice::from_ref(&locator), requested)?),
        None => None,
    };
    Ok(ParsedName {
        locator,
        chars_consumed: consumed,
        attributes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use directory_store::{MemoryDirectoryStore, StoreEntry};

    fn sample() -> FileSystemFolder {
        let mut store = MemoryDirectoryStore::new();
        store.add_dir("/data");
        store.add_entry("/data", StoreEntry::folder("docs"));
        store.add_entry("/data/docs", StoreEntry::file("notes.txt", 12));
        store.add_entry("/data", StoreEntry::file("Report.lnk", 3));
        FileSystemFolder::new("/data", Arc::new(store))
    }

    #[test]
    fn test_parse_nested_path() {
        let folder = sample();
        let parsed = folder
            .parse_name("docs/notes.txt", &BindContext::new())
            .unwrap();
        assert_eq!(parsed.chars_consumed, "docs/notes.txt".len());
        assert_eq!(parsed.locator.segment_count(), 2);
    }

    #[test]
    fn test_parse_through_file_fails_with_offset() {
        let folder = sample();
        let err = folder
            .parse_name("docs/notes.txt/deeper", &BindContext::new())
            .unwrap_err();
        match err {
            NamespaceError::ParseError { consumed, .. } => {
                assert_eq!(consumed, "docs/notes.txt".len())
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_bind_nested_file_is_leaf() {
        let folder = sample();
        let locator = ItemLocator::from_segments(vec![
            ItemSegment::entry("docs", true),
            ItemSegment::entry("notes.txt", false),
        ]);
        match folder.bind(&locator, &BindContext::new()).unwrap() {
            Binding::Leaf(leaf) => assert_eq!(leaf.path, "/data/docs/notes.txt"),
            Binding::Folder(_) => panic!("file bound to a folder"),
        }
    }

    #[test]
    fn test_bind_is_case_insensitive_but_canonicalizes() {
        let folder = sample();
        let locator = ItemLocator::simple(ItemSegment::entry("DOCS", true));
        match folder.bind(&locator, &BindContext::new()).unwrap() {
            Binding::Folder(_) => {}
            Binding::Leaf(_) => panic!("folder bound to a leaf"),
        }
    }

    #[test]
    fn test_enumerate_wraps_entries() {
        let folder = sample();
        let children = folder.enumerate(EnumFlags::visible()).unwrap();
        assert_eq!(children.len(), 2);
        assert!(children.iter().all(|child| child.segment_count() == 1));
    }

    #[test]
    fn test_display_absolute_parsing_name() {
        let folder = sample();
        let locator = ItemLocator::from_segments(vec![
            ItemSegment::entry("docs", true),
            ItemSegment::entry("notes.txt", false),
        ]);
        assert_eq!(
            folder
                .display_name(&locator, DisplayMode::parsing_absolute())
                .unwrap(),
            "/data/docs/notes.txt"
        );
    }

    #[test]
    fn test_display_suppresses_shortcut_suffix() {
        let folder = sample();
        let locator = ItemLocator::simple(ItemSegment::entry("Report.lnk", false));
        assert_eq!(
            folder
                .display_name(&locator, DisplayMode::normal_in_folder())
                .unwrap(),
            "Report"
        );
        assert_eq!(
            folder
                .display_name(&locator, DisplayMode::parsing_in_folder())
                .unwrap(),
            "Report.lnk"
        );
    }

    #[test]
    fn test_folder_mask_and_clearing() {
        let folder = sample();
        let own = folder.attributes_of(&[], ItemCapabilities::all()).unwrap();
        assert!(own.contains(ItemCapabilities::IS_FOLDER));
        assert!(own.contains(ItemCapabilities::CAN_DELETE));

        let file = ItemLocator::simple(ItemSegment::entry("Report.lnk", false));
        let mask = folder
            .attributes_of(std::slice::from_ref(&file), ItemCapabilities::all())
            .unwrap();
        assert!(mask.contains(ItemCapabilities::STORAGE));
        assert!(!mask.contains(ItemCapabilities::NEEDS_VALIDATION));
    }
}
