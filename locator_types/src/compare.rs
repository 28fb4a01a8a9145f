//! Segment and locator ordering
//!
//! `compare` is a strict total preorder for any fixed sort key: the root
//! (empty locator) sorts before every child, virtual entries precede real
//! files by kind rank, and filesystem names collate case-insensitively.

use crate::locator::ItemLocator;
use crate::segment::{FileEntry, ItemSegment};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Column key used to break filesystem-entry ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Case-insensitive name collation (the default)
    #[default]
    Name,
    /// Size first, name as the fallback
    Size,
    /// File type first, name as the fallback
    FileType,
    /// Modification time first, name as the fallback
    Modified,
}

/// Compares two locators segment-by-segment from the front
///
/// The empty locator sorts first; differing kinds order by kind rank;
/// equal leading segments recurse on the remainders.
pub fn compare(a: &ItemLocator, b: &ItemLocator, key: SortKey) -> Ordering {
    match (a.split_first(), b.split_first()) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some((first_a, rest_a)), Some((first_b, rest_b))) => {
            match compare_segments(&first_a, &first_b, key) {
                Ordering::Equal => compare(&rest_a, &rest_b, key),
                unequal => unequal,
            }
        }
    }
}

/// Compares two segments: by kind rank first, then within the kind
pub fn compare_segments(a: &ItemSegment, b: &ItemSegment, key: SortKey) -> Ordering {
    match a.kind().cmp(&b.kind()) {
        Ordering::Equal => {}
        unequal => return unequal,
    }
    match (a, b) {
        (ItemSegment::Guid(ga), ItemSegment::Guid(gb)) => ga.as_bytes().cmp(gb.as_bytes()),
        (ItemSegment::Drive(da), ItemSegment::Drive(db)) => {
            da.to_ascii_uppercase().cmp(&db.to_ascii_uppercase())
        }
        (ItemSegment::FileSystemEntry(ea), ItemSegment::FileSystemEntry(eb)) => {
            compare_entries(ea, eb, key)
        }
        // RootMarker and NetworkRoot carry no payload to distinguish.
        _ => Ordering::Equal,
    }
}

fn compare_entries(a: &FileEntry, b: &FileEntry, key: SortKey) -> Ordering {
    let by_key = match key {
        SortKey::Name => Ordering::Equal,
        SortKey::Size => attr_size(a).cmp(&attr_size(b)),
        SortKey::FileType => attr_type(a).cmp(attr_type(b)),
        SortKey::Modified => attr_modified(a).cmp(&attr_modified(b)),
    };
    by_key.then_with(|| compare_names(&a.name, &b.name))
}

/// Case-insensitive name collation of the backing store
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn attr_size(entry: &FileEntry) -> u64 {
    entry.attrs.as_ref().map(|a| a.size).unwrap_or(0)
}

fn attr_type(entry: &FileEntry) -> &str {
    entry.attrs.as_ref().map(|a| a.file_type.as_str()).unwrap_or("")
}

fn attr_modified(entry: &FileEntry) -> u64 {
    entry.attrs.as_ref().map(|a| a.modified).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::EntryAttributes;
    use uuid::Uuid;

    fn entry_with(name: &str, size: u64, file_type: &str, modified: u64) -> ItemLocator {
        ItemLocator::simple(ItemSegment::FileSystemEntry(FileEntry::with_attrs(
            name,
            false,
            EntryAttributes {
                size,
                file_type: file_type.to_string(),
                modified,
                hidden: false,
            },
        )))
    }

    #[test]
    fn test_empty_locator_sorts_first() {
        let child = ItemLocator::simple(ItemSegment::entry("a.txt", false));
        assert_eq!(
            compare(&ItemLocator::empty(), &child, SortKey::Name),
            Ordering::Less
        );
        assert_eq!(
            compare(&child, &ItemLocator::empty(), SortKey::Name),
            Ordering::Greater
        );
        assert_eq!(
            compare(&ItemLocator::empty(), &ItemLocator::empty(), SortKey::Name),
            Ordering::Equal
        );
    }

    #[test]
    fn test_kind_rank_groups_virtual_before_real() {
        let guid = ItemLocator::simple(ItemSegment::Guid(Uuid::new_v4()));
        let drive = ItemLocator::simple(ItemSegment::drive('c'));
        let network = ItemLocator::simple(ItemSegment::NetworkRoot);
        let file = ItemLocator::simple(ItemSegment::entry("a.txt", false));

        assert_eq!(compare(&guid, &drive, SortKey::Name), Ordering::Less);
        assert_eq!(compare(&drive, &network, SortKey::Name), Ordering::Less);
        assert_eq!(compare(&network, &file, SortKey::Name), Ordering::Less);
    }

    #[test]
    fn test_names_collate_case_insensitively() {
        let upper = ItemLocator::simple(ItemSegment::entry("Notes.txt", false));
        let lower = ItemLocator::simple(ItemSegment::entry("notes.txt", false));
        assert_eq!(compare(&upper, &lower, SortKey::Name), Ordering::Equal);
    }

    #[test]
    fn test_drive_letters_compare_case_insensitively() {
        let lower = ItemLocator::simple(ItemSegment::Drive('c'));
        let upper = ItemLocator::simple(ItemSegment::Drive('C'));
        assert_eq!(compare(&lower, &upper, SortKey::Name), Ordering::Equal);
    }

    #[test]
    fn test_size_key_orders_by_size_then_name() {
        let small = entry_with("zzz.txt", 10, "txt", 0);
        let large = entry_with("aaa.txt", 500, "txt", 0);
        assert_eq!(compare(&small, &large, SortKey::Size), Ordering::Less);

        let tied_a = entry_with("aaa.txt", 10, "txt", 0);
        let tied_b = entry_with("bbb.txt", 10, "txt", 0);
        assert_eq!(compare(&tied_a, &tied_b, SortKey::Size), Ordering::Less);
    }

    #[test]
    fn test_modified_key_orders_by_timestamp() {
        let older = entry_with("b.txt", 1, "txt", 100);
        let newer = entry_with("a.txt", 1, "txt", 200);
        assert_eq!(compare(&older, &newer, SortKey::Modified), Ordering::Less);
    }

    #[test]
    fn test_equal_leads_recurse_on_remainders() {
        let base = ItemLocator::simple(ItemSegment::drive('c'));
        let a = base.concat(&ItemLocator::simple(ItemSegment::entry("aaa", true)));
        let b = base.concat(&ItemLocator::simple(ItemSegment::entry("bbb", true)));
        assert_eq!(compare(&a, &b, SortKey::Name), Ordering::Less);
        // The shorter chain is a prefix and sorts first.
        assert_eq!(compare(&base, &a, SortKey::Name), Ordering::Less);
    }

    #[test]
    fn test_preorder_laws_over_sample_set() {
        let set = vec![
            ItemLocator::empty(),
            ItemLocator::simple(ItemSegment::Guid(Uuid::from_u128(1))),
            ItemLocator::simple(ItemSegment::Guid(Uuid::from_u128(2))),
            ItemLocator::simple(ItemSegment::drive('a')),
            ItemLocator::simple(ItemSegment::drive('c')),
            ItemLocator::simple(ItemSegment::NetworkRoot),
            entry_with("alpha.txt", 5, "txt", 10),
            entry_with("Alpha.txt", 5, "txt", 10),
            entry_with("beta.txt", 7, "txt", 20),
        ];
        for a in &set {
            assert_eq!(compare(a, a, SortKey::Name), Ordering::Equal);
            for b in &set {
                assert_eq!(
                    compare(a, b, SortKey::Name),
                    compare(b, a, SortKey::Name).reverse()
                );
                for c in &set {
                    if compare(a, b, SortKey::Name) == Ordering::Less
                        && compare(b, c, SortKey::Name) == Ordering::Less
                    {
                        assert_eq!(compare(a, c, SortKey::Name), Ordering::Less);
                    }
                }
            }
        }
    }
}
