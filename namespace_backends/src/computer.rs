//! Computer-root singleton backend
//!
//! The virtual folder containing every mounted drive. Drives are
//! addressable by letter or by volume GUID; both forms bind to the same
//! filesystem node at the drive's mount path.

use crate::drives::{DriveMount, DriveTable};
use crate::filesystem::FileSystemFolder;
use directory_store::DirectoryStore;
use locator_types::{compare, ItemCapabilities, ItemLocator, ItemSegment, SortKey};
use namespace_core::path::is_separator;
use namespace_core::{
    BindContext, Binding, DisplayMode, EnumFlags, NameForm, NamespaceError, NamespaceFolder,
    ParsedName, COMPUTER_ROOT_LABEL,
};
use std::cmp::Ordering;
use std::sync::Arc;
use uuid::Uuid;

/// The merged view over all mounted drives
#[derive(Clone)]
pub struct ComputerRootFolder {
    drives: Arc<DriveTable>,
    store: Arc<dyn DirectoryStore>,
}

impl ComputerRootFolder {
    pub fn new(drives: Arc<DriveTable>, store: Arc<dyn DirectoryStore>) -> Self {
        Self { drives, store }
    }

    fn mount_folder(&self, mount: &DriveMount) -> FileSystemFolder {
        FileSystemFolder::new(mount.mount_path.clone(), Arc::clone(&self.store))
    }

    fn letter_mount(&self, letter: char) -> Result<&DriveMount, NamespaceError> {
        self.drives
            .by_letter(letter)
            .ok_or_else(|| NamespaceError::not_found(format!("drive {}:", letter)))
    }

    fn guid_mount(&self, guid: Uuid) -> Result<&DriveMount, NamespaceError> {
        self.drives
            .by_guid(guid)
            .ok_or_else(|| NamespaceError::not_found(format!("volume {}", guid)))
    }

    fn finish(
        &self,
        locator: ItemLocator,
        consumed: usize,
        ctx: &BindContext<'_>,
    ) -> Result<ParsedName, NamespaceError> {
        let attributes = match ctx.want_attributes {
            Some(requested) => {
                Some(self.attributes_of(std::slice::from_ref(&locator), requested)?)
            }
            None => None,
        };
        Ok(ParsedName {
            locator,
            chars_consumed: consumed,
            attributes,
        })
    }
}

impl NamespaceFolder for ComputerRootFolder {
    fn parse_name(
        &self,
        text: &str,
        ctx: &BindContext<'_>,
    ) -> Result<ParsedName, NamespaceError> {
        if text.is_empty() {
            return self.finish(ItemLocator::empty(), 0, ctx);
        }
        if let Some(guid_text) = text.strip_prefix("::") {
            let trimmed = guid_text
                .strip_prefix('{')
                .and_then(|t| t.strip_suffix('}'))
                .unwrap_or(guid_text);
            let id = Uuid::parse_str(trimmed).map_err(|_| NamespaceError::ParseError {
                consumed: 0,
                reason: format!("'{}' is not a volume GUID", guid_text),
            })?;
            self.guid_mount(id)?;
            return self.finish(
                ItemLocator::simple(ItemSegment::Guid(id)),
                text.len(),
                ctx,
            );
        }
        let Some((letter, remainder, consumed)) = split_drive_prefix(text) else {
            return Err(NamespaceError::ParseError {
                consumed: 0,
                reason: format!("'{}' does not name a drive", text),
            });
        };
        let mount = self.letter_mount(letter)?;
        let prefix = ItemLocator::simple(ItemSegment::drive(letter));
        if remainder.is_empty() {
            return self.finish(prefix, consumed, ctx);
        }
        let parsed = self
            .mount_folder(mount)
            .parse_name(remainder, ctx)
            .map_err(|err| err.offset_consumed(consumed))?;
        Ok(ParsedName {
            locator: prefix.concat(&parsed.locator),
            chars_consumed: consumed + parsed.chars_consumed,
            attributes: parsed.attributes,
        })
    }

    fn enumerate(&self, flags: EnumFlags) -> Result<Vec<ItemLocator>, NamespaceError> {
        if !flags.want_folders {
            return Ok(Vec::new());
        }
        Ok(self
            .drives
            .mounts()
            .iter()
            .map(|mount| ItemLocator::simple(ItemSegment::Drive(mount.letter)))
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
        let mount = match first {
            ItemSegment::Drive(letter) => self.letter_mount(letter)?,
            ItemSegment::Guid(id) => self.guid_mount(id)?,
            _ => return Err(NamespaceError::invalid_address(locator)),
        };
        let folder = self.mount_folder(mount);
        if rest.is_empty() {
            return Ok(Binding::Folder(Box::new(folder)));
        }
        folder.bind(&rest, ctx)
    }

    fn compare(
        &self,
        a: &ItemLocator,
        b: &ItemLocator,
        key: SortKey,
    ) -> Result<Ordering, NamespaceError> {
        Ok(compare(a, b, key))
    }

    fn display_name(
        &self,
        locator: &ItemLocator,
        mode: DisplayMode,
    ) -> Result<String, NamespaceError> {
        let Some((first, rest)) = locator.split_first() else {
            return Ok(COMPUTER_ROOT_LABEL.to_string());
        };
        let mount = match &first {
            ItemSegment::Drive(letter) => self.letter_mount(*letter)?,
            ItemSegment::Guid(id) => self.guid_mount(*id)?,
            _ => return Err(NamespaceError::invalid_address(locator)),
        };
        if !rest.is_empty() {
            return self.mount_folder(mount).display_name(&rest, mode);
        }
        match mode.form {
            NameForm::Parsing => Ok(format!("{}:", mount.letter)),
            _ => Ok(format!("{} ({}:)", mount.label, mount.letter)),
        }
    }

    fn attributes_of(
        &self,
        locators: &[ItemLocator],
        requested: ItemCapabilities,
    ) -> Result<ItemCapabilities, NamespaceError> {
        if locators.is_empty() {
            return Ok(ItemCapabilities::COMPUTER_ROOT & requested);
        }
        let mut mask = ItemCapabilities::all();
        for locator in locators {
            mask &= self.bind(locator, &BindContext::new())?.capabilities(requested)?;
        }
        Ok((mask & requested).difference(ItemCapabilities::NEEDS_VALIDATION))
    }
}

/// Splits a leading drive designator: `(letter, remainder, consumed)`
fn split_drive_prefix(text: &str) -> Option<(char, &str, usize)> {
    let mut chars = text.chars();
    let letter = chars.next().filter(char::is_ascii_alphabetic)?;
    if chars.next() != Some(':') {
        return None;
    }
    match chars.next() {
        None => Some((letter, "", 2)),
        Some(c) if is_separator(c) => Some((letter, &text[3..], 3)),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drives::DriveMount;
    use directory_store::{MemoryDirectoryStore, StoreEntry};

    const VOL_C: Uuid = Uuid::from_u128(0xc001);

    fn sample() -> ComputerRootFolder {
        let mut store = MemoryDirectoryStore::new();
        store.add_dir("C:");
        store.add_entry("C:", StoreEntry::folder("docs"));
        store.add_entry("C:/docs", StoreEntry::file("notes.txt", 5));
        store.add_dir("D:");

        let mut drives = DriveTable::new();
        drives.add(DriveMount::new('C', VOL_C, "C:", "System"));
        drives.add(DriveMount::new('D', Uuid::from_u128(0xd001), "D:", "Data"));
        ComputerRootFolder::new(Arc::new(drives), Arc::new(store))
    }

    #[test]
    fn test_enumerates_drives_in_table_order() {
        let computer = sample();
        let children = computer.enumerate(EnumFlags::folders()).unwrap();
        assert_eq!(
            children,
            vec![
                ItemLocator::simple(ItemSegment::Drive('C')),
                ItemLocator::simple(ItemSegment::Drive('D')),
            ]
        );
        assert!(computer
            .enumerate(EnumFlags {
                want_folders: false,
                want_files: true,
                want_hidden: false,
            })
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_parse_drive_path() {
        let computer = sample();
        let parsed = computer
            .parse_name("c:/docs/notes.txt", &BindContext::new())
            .unwrap();
        assert_eq!(parsed.chars_consumed, "c:/docs/notes.txt".len());
        assert_eq!(
            parsed.locator.first(),
            Some(&ItemSegment::Drive('C'))
        );
        assert_eq!(parsed.locator.segment_count(), 3);
    }

    #[test]
    fn test_parse_unknown_drive_is_not_found() {
        let computer = sample();
        let err = computer.parse_name("z:/docs", &BindContext::new()).unwrap_err();
        assert_eq!(err, NamespaceError::not_found("drive z:"));
    }

    #[test]
    fn test_letter_and_guid_forms_bind_to_same_subtree() {
        let computer = sample();
        let by_letter = ItemLocator::from_segments(vec![
            ItemSegment::Drive('C'),
            ItemSegment::entry("docs", true),
        ]);
        let by_guid = ItemLocator::from_segments(vec![
            ItemSegment::Guid(VOL_C),
            ItemSegment::entry("docs", true),
        ]);
        for locator in [by_letter, by_guid] {
            match computer.bind(&locator, &BindContext::new()).unwrap() {
                Binding::Folder(folder) => {
                    let name = folder
                        .display_name(&ItemLocator::empty(), DisplayMode::parsing_absolute())
                        .unwrap();
                    assert_eq!(name, "C:/docs");
                }
                Binding::Leaf(_) => panic!("folder bound to a leaf"),
            }
        }
    }

    #[test]
    fn test_drive_display_names() {
        let computer = sample();
        let locator = ItemLocator::simple(ItemSegment::Drive('C'));
        assert_eq!(
            computer
                .display_name(&locator, DisplayMode::parsing_in_folder())
                .unwrap(),
            "C:"
        );
        assert_eq!(
            computer
                .display_name(&locator, DisplayMode::normal_in_folder())
                .unwrap(),
            "System (C:)"
        );
    }

    #[test]
    fn test_own_mask() {
        let computer = sample();
        let mask = computer.attributes_of(&[], ItemCapabilities::all()).unwrap();
        assert_eq!(mask, ItemCapabilities::COMPUTER_ROOT);
    }
}
