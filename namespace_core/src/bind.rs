//! Binding dispatch and delegating comparison
//!
//! `dispatch_bind` resolves a locator to a concrete child node or leaf,
//! delegating suffixes to the produced child across backend boundaries.
//! The Guid and Drive forms of the same underlying drive must reach the
//! same decision, so both funnel through one overlay check.

use crate::env::{BindContext, DriveRef, COMPUTER_ROOT_GUID};
use crate::error::NamespaceError;
use crate::folder::{Binding, NamespaceFolder};
use crate::path::join_path;
use crate::root::RootFolder;
use locator_types::{compare_segments, ItemLocator, ItemSegment, SortKey};
use std::cmp::Ordering;

pub(crate) fn dispatch_bind(
    root: &RootFolder,
    locator: &ItemLocator,
    ctx: &BindContext<'_>,
) -> Result<Binding, NamespaceError> {
    let Some((first, rest)) = locator.split_first() else {
        // The empty locator denotes this node itself.
        return Ok(Binding::Folder(Box::new(root.clone())));
    };

    let (child, tail) = match &first {
        ItemSegment::RootMarker => {
            if rest.is_empty() {
                return Ok(Binding::Folder(Box::new(root.clone())));
            }
            // The root marker is only valid as the entire locator.
            return Err(NamespaceError::invalid_address(locator));
        }
        ItemSegment::Guid(id) if *id == COMPUTER_ROOT_GUID => {
            (Binding::Folder(root.env().factories.computer_root()), rest)
        }
        ItemSegment::Guid(id) => overlay_dispatch(root, DriveRef::Guid(*id), locator, rest)?,
        ItemSegment::Drive(letter) => {
            overlay_dispatch(root, DriveRef::Letter(*letter), locator, rest)?
        }
        ItemSegment::NetworkRoot => {
            (Binding::Folder(root.env().factories.network_root()), rest)
        }
        ItemSegment::FileSystemEntry(entry) => {
            let path = join_path(root.target_directory(), &entry.name);
            (root.env().factories.filesystem_folder(&path)?, rest)
        }
    };

    if tail.is_empty() {
        return Ok(child);
    }
    match child {
        Binding::Folder(folder) => folder.bind(&tail, ctx),
        Binding::Leaf(_) => Err(NamespaceError::invalid_address(locator)),
    }
}

/// One decision point for both segment forms of a drive: overlay root
/// when available, computer-root singleton otherwise. The singleton
/// receives the undecomposed locator so the drive identity survives the
/// fallback, mirroring the parser's fallback rule.
fn overlay_dispatch(
    root: &RootFolder,
    drive: DriveRef,
    locator: &ItemLocator,
    rest: ItemLocator,
) -> Result<(Binding, ItemLocator), NamespaceError> {
    if root.env().overlay.drive_has_overlay(&drive) {
        let folder = root.env().factories.drive_overlay(&drive)?;
        Ok((Binding::Folder(folder), rest))
    } else {
        Ok((
            Binding::Folder(root.env().factories.computer_root()),
            locator.clone(),
        ))
    }
}

/// Compares locators, delegating remainders to the backend that owns them
///
/// Leading segments are compared locally; when they tie and both locators
/// continue, the leading segment is bound and the owning backend compares
/// the remainders. Deeper nesting recurses through the same delegation.
pub(crate) fn compare_delegating(
    root: &RootFolder,
    a: &ItemLocator,
    b: &ItemLocator,
    key: SortKey,
) -> Result<Ordering, NamespaceError> {
    let (Some((first_a, rest_a)), Some((first_b, rest_b))) = (a.split_first(), b.split_first())
    else {
        return Ok(locator_types::compare(a, b, key));
    };

    match compare_segments(&first_a, &first_b, key) {
        Ordering::Equal => {}
        unequal => return Ok(unequal),
    }
    match (rest_a.is_empty(), rest_b.is_empty()) {
        (true, true) => Ok(Ordering::Equal),
        (true, false) => Ok(Ordering::Less),
        (false, true) => Ok(Ordering::Greater),
        (false, false) => {
            let prefix = ItemLocator::simple(first_a);
            match root.bind(&prefix, &BindContext::new())? {
                Binding::Folder(folder) => folder.compare(&rest_a, &rest_b, key),
                Binding::Leaf(_) => Ok(locator_types::compare(&rest_a, &rest_b, key)),
            }
        }
    }
}
