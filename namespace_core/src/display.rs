//! Display-name synthesis and capability resolution
//!
//! Names depend on the output mode: parsing names must round-trip through
//! the parser, normal names are what a person should read. Capability
//! masks are intersections over the input set, with the `NEEDS_VALIDATION`
//! bit unconditionally cleared as a fixed post-condition.

use crate::env::{BindContext, DriveRef, COMPUTER_ROOT_GUID, COMPUTER_ROOT_LABEL};
use crate::error::NamespaceError;
use crate::folder::{DisplayMode, NameForm, NameScope, NamespaceFolder};
use crate::path::join_path;
use crate::root::RootFolder;
use locator_types::{FileEntry, ItemCapabilities, ItemLocator, ItemSegment};
use uuid::Uuid;

/// Well-known shortcut suffix suppressed outside parsing mode
const SHORTCUT_SUFFIX: &str = ".lnk";

pub(crate) fn resolve_display_name(
    root: &RootFolder,
    locator: &ItemLocator,
    mode: DisplayMode,
) -> Result<String, NamespaceError> {
    let Some((first, rest)) = locator.split_first() else {
        return Ok(root_name(root, mode));
    };

    if rest.is_empty() {
        return match first {
            ItemSegment::RootMarker => Ok(root_name(root, mode)),
            ItemSegment::Guid(id) => guid_name(root, id, mode),
            ItemSegment::FileSystemEntry(entry) => Ok(entry_name(root, &entry, mode)),
            // A bare drive keeps the owning backend's labeling, so the
            // segment stays in the locator handed over.
            ItemSegment::Drive(letter) => {
                drive_backend(root, letter)?.display_name(locator, mode)
            }
            ItemSegment::NetworkRoot => root
                .env()
                .factories
                .network_root()
                .display_name(&ItemLocator::empty(), mode),
        };
    }
    delegate_name(root, ItemLocator::simple(first), &rest, mode)
}

fn root_name(root: &RootFolder, mode: DisplayMode) -> String {
    if mode.form == NameForm::Parsing && mode.scope == NameScope::Absolute {
        root.target_directory().to_string()
    } else {
        root.root_label().to_string()
    }
}

fn guid_name(root: &RootFolder, id: Uuid, mode: DisplayMode) -> Result<String, NamespaceError> {
    if mode.form == NameForm::Parsing {
        let supports_path_form = root
            .env()
            .registry
            .lookup(id)
            .map(|info| info.supports_path_form)
            .unwrap_or(false);
        if supports_path_form && mode.scope == NameScope::Absolute {
            return delegate_name(
                root,
                ItemLocator::simple(ItemSegment::Guid(id)),
                &ItemLocator::empty(),
                mode,
            );
        }
        return Ok(canonical_guid_text(id));
    }
    match root.env().registry.lookup(id) {
        Ok(info) => Ok(info.friendly_label),
        Err(_) if id == COMPUTER_ROOT_GUID => Ok(COMPUTER_ROOT_LABEL.to_string()),
        Err(err) => Err(err.into()),
    }
}

fn entry_name(root: &RootFolder, entry: &FileEntry, mode: DisplayMode) -> String {
    if mode.form == NameForm::Parsing && mode.scope == NameScope::Absolute {
        return join_path(root.target_directory(), &entry.name);
    }
    let mut name = entry.name.clone();
    if !entry.is_folder && mode.form != NameForm::Parsing {
        name = suppress_shortcut_suffix(name);
    }
    name
}

fn drive_backend(
    root: &RootFolder,
    letter: char,
) -> Result<Box<dyn NamespaceFolder>, NamespaceError> {
    let drive = DriveRef::Letter(letter);
    if root.env().overlay.drive_has_overlay(&drive) {
        root.env().factories.drive_overlay(&drive)
    } else {
        Ok(root.env().factories.computer_root())
    }
}

fn delegate_name(
    root: &RootFolder,
    prefix: ItemLocator,
    rest: &ItemLocator,
    mode: DisplayMode,
) -> Result<String, NamespaceError> {
    let folder = root
        .bind(&prefix, &BindContext::new())?
        .into_folder(&prefix)?;
    folder.display_name(rest, mode)
}

/// Renders the canonical re-parseable form: `::{GUID}` in uppercase
pub fn canonical_guid_text(id: Uuid) -> String {
    format!("::{{{}}}", id.hyphenated().to_string().to_uppercase())
}

fn suppress_shortcut_suffix(name: String) -> String {
    if name.len() > SHORTCUT_SUFFIX.len()
        && name.to_lowercase().ends_with(SHORTCUT_SUFFIX)
    {
        name[..name.len() - SHORTCUT_SUFFIX.len()].to_string()
    } else {
        name
    }
}

pub(crate) fn resolve_attributes(
    root: &RootFolder,
    locators: &[ItemLocator],
    requested: ItemCapabilities,
) -> Result<ItemCapabilities, NamespaceError> {
    if locators.is_empty() {
        return Ok(ItemCapabilities::ROOT_FOLDER & requested);
    }

    let mut mask = ItemCapabilities::all();
    for locator in locators {
        let item_mask = match locator.split_first() {
            None => ItemCapabilities::ROOT_FOLDER,
            Some((ItemSegment::RootMarker, rest)) if rest.is_empty() => {
                ItemCapabilities::ROOT_FOLDER
            }
            Some((ItemSegment::Guid(id), rest)) if rest.is_empty() && id == COMPUTER_ROOT_GUID => {
                ItemCapabilities::COMPUTER_ROOT
            }
            _ => root
                .bind(locator, &BindContext::new())?
                .capabilities(requested)?,
        };
        mask &= item_mask;
    }
    // Fixed post-condition, regardless of what any backend reported.
    Ok((mask & requested).difference(ItemCapabilities::NEEDS_VALIDATION))
}
