//! Enumeration merger
//!
//! Merges the two backing sources into one ordered set of simple child
//! locators: the computer-root singleton first, then machine-scope
//! registry entries, then user-scope entries (duplicates across scopes
//! preserved), then the target directory's own entries in backing-store
//! iteration order.

use crate::env::COMPUTER_ROOT_GUID;
use crate::error::NamespaceError;
use crate::folder::{file_entry_from_store, EnumFlags};
use crate::root::RootFolder;
use locator_types::{ItemLocator, ItemSegment};

pub(crate) fn merge_children(
    root: &RootFolder,
    flags: EnumFlags,
) -> Result<Vec<ItemLocator>, NamespaceError> {
    let mut children = Vec::new();

    if flags.want_folders {
        children.push(ItemLocator::simple(ItemSegment::Guid(COMPUTER_ROOT_GUID)));
        for entry in root.env().registry.enumerate_all() {
            children.push(ItemLocator::simple(ItemSegment::Guid(entry.guid)));
        }
    }

    let entries = root.env().directory_store.list_entries(
        root.target_directory(),
        flags.want_folders,
        flags.want_files,
        flags.want_hidden,
    )?;
    for entry in entries {
        children.push(ItemLocator::simple(ItemSegment::FileSystemEntry(
            file_entry_from_store(entry),
        )));
    }

    Ok(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::folder::NamespaceFolder;
    use crate::testing::{test_root, G1, G2};

    fn names(locators: &[ItemLocator]) -> Vec<String> {
        locators
            .iter()
            .map(|locator| match locator.first() {
                Some(ItemSegment::Guid(id)) if *id == COMPUTER_ROOT_GUID => "computer".to_string(),
                Some(ItemSegment::Guid(id)) => format!("guid:{}", id),
                Some(ItemSegment::FileSystemEntry(entry)) => entry.name.clone(),
                other => format!("{:?}", other),
            })
            .collect()
    }

    #[test]
    fn test_folders_only_order() {
        let root = test_root();
        let children = root.enumerate(EnumFlags::folders()).unwrap();
        assert_eq!(
            names(&children),
            vec![
                "computer".to_string(),
                format!("guid:{}", G1),
                format!("guid:{}", G2),
                "Sub".to_string(),
            ]
        );
    }

    #[test]
    fn test_files_appended_after_folders() {
        let root = test_root();
        let children = root.enumerate(EnumFlags::visible()).unwrap();
        let all = names(&children);
        assert_eq!(all.first().unwrap(), "computer");
        assert_eq!(all.last().unwrap(), "a.txt");
        assert!(all.contains(&"Sub".to_string()));
    }

    #[test]
    fn test_files_only_skips_virtual_entries() {
        let root = test_root();
        let flags = EnumFlags {
            want_folders: false,
            want_files: true,
            want_hidden: false,
        };
        let children = root.enumerate(flags).unwrap();
        assert_eq!(names(&children), vec!["a.txt".to_string()]);
    }

    #[test]
    fn test_hidden_entries_require_flag() {
        let root = test_root();
        let visible = root.enumerate(EnumFlags::visible()).unwrap();
        assert!(!names(&visible).contains(&".secret".to_string()));

        let everything = root.enumerate(EnumFlags::everything()).unwrap();
        assert!(names(&everything).contains(&".secret".to_string()));
    }

    #[test]
    fn test_results_are_simple_locators() {
        let root = test_root();
        for child in root.enumerate(EnumFlags::everything()).unwrap() {
            assert_eq!(child.segment_count(), 1);
        }
    }

    #[test]
    fn test_fresh_call_re_enumerates() {
        let root = test_root();
        let first = root.enumerate(EnumFlags::folders()).unwrap();
        let second = root.enumerate(EnumFlags::folders()).unwrap();
        assert_eq!(first, second);
    }
}
