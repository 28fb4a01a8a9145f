//! Drive overlay backend
//!
//! Serves one overlaid drive. Parsed locators carry the drive segment as
//! their head so they remain meaningful at the namespace root, which
//! hands the whole drive-designated text to this node.

use crate::drives::DriveMount;
use crate::filesystem::FileSystemFolder;
use directory_store::DirectoryStore;
use locator_types::{ItemCapabilities, ItemLocator, ItemSegment, SortKey};
use namespace_core::{
    BindContext, Binding, DisplayMode, EnumFlags, NameForm, NamespaceError, NamespaceFolder,
    ParsedName,
};
use std::cmp::Ordering;
use std::sync::Arc;
use uuid::Uuid;

/// Overlay root node for one drive
#[derive(Clone)]
pub struct DriveOverlayFolder {
    letter: char,
    volume_guid: Uuid,
    label: String,
    inner: FileSystemFolder,
}

impl DriveOverlayFolder {
    pub fn new(mount: &DriveMount, store: Arc<dyn DirectoryStore>) -> Self {
        Self {
            letter: mount.letter,
            volume_guid: mount.volume_guid,
            label: mount.label.clone(),
            inner: FileSystemFolder::new(mount.mount_path.clone(), store),
        }
    }

    /// The drive letter this overlay serves
    pub fn letter(&self) -> char {
        self.letter
    }

    fn owns(&self, segment: &ItemSegment) -> bool {
        match segment {
            ItemSegment::Drive(letter) => letter.eq_ignore_ascii_case(&self.letter),
            ItemSegment::Guid(id) => *id == self.volume_guid,
            _ => false,
        }
    }
}

impl NamespaceFolder for DriveOverlayFolder {
    fn parse_name(
        &self,
        text: &str,
        ctx: &BindContext<'_>,
    ) -> Result<ParsedName, NamespaceError> {
        let Some(remainder) = strip_drive_designator(text, self.letter) else {
            return Err(NamespaceError::ParseError {
                consumed: 0,
                reason: format!("'{}' does not designate drive {}:", text, self.letter),
            });
        };
        let consumed = text.len() - remainder.len();
        let prefix = ItemLocator::simple(ItemSegment::Drive(self.letter));
        if remainder.is_empty() {
            let attributes = match ctx.want_attributes {
                Some(requested) => Some(self.attributes_of(&[], requested)?),
                None => None,
            };
            return Ok(ParsedName {
                locator: prefix,
                chars_consumed: consumed,
                attributes,
            });
        }
        let parsed = self
            .inner
            .parse_name(remainder, ctx)
            .map_err(|err| err.offset_consumed(consumed))?;
        Ok(ParsedName {
            locator: prefix.concat(&parsed.locator),
            chars_consumed: consumed + parsed.chars_consumed,
            attributes: parsed.attributes,
        })
    }

    fn enumerate(&self, flags: EnumFlags) -> Result<Vec<ItemLocator>, NamespaceError> {
        self.inner.enumerate(flags)
    }

    fn bind(
        &self,
        locator: &ItemLocator,
        ctx: &BindContext<'_>,
    ) -> Result<Binding, NamespaceError> {
        match locator.split_first() {
            None => Ok(Binding::Folder(Box::new(self.clone()))),
            // A leading segment for this same drive folds into the node.
            Some((first, rest)) if self.owns(&first) => {
                if rest.is_empty() {
                    Ok(Binding::Folder(Box::new(self.clone())))
                } else {
                    self.inner.bind(&rest, ctx)
                }
            }
            Some(_) => self.inner.bind(locator, ctx),
        }
    }

    fn compare(
        &self,
        a: &ItemLocator,
        b: &ItemLocator,
        key: SortKey,
    ) -> Result<Ordering, NamespaceError> {
        self.inner.compare(a, b, key)
    }

    fn display_name(
        &self,
        locator: &ItemLocator,
        mode: DisplayMode,
    ) -> Result<String, NamespaceError> {
        match locator.split_first() {
            None => match mode.form {
                NameForm::Parsing => Ok(format!("{}:", self.letter)),
                _ => Ok(format!("{} ({}:)", self.label, self.letter)),
            },
            Some((first, rest)) if self.owns(&first) => {
                if rest.is_empty() {
                    self.display_name(&ItemLocator::empty(), mode)
                } else {
                    self.inner.display_name(&rest, mode)
                }
            }
            Some(_) => self.inner.display_name(locator, mode),
        }
    }

    fn attributes_of(
        &self,
        locators: &[ItemLocator],
        requested: ItemCapabilities,
    ) -> Result<ItemCapabilities, NamespaceError> {
        if locators.is_empty() {
            return self.inner.attributes_of(&[], requested);
        }
        let mut mask = ItemCapabilities::all();
        for locator in locators {
            mask &= self.bind(locator, &BindContext::new())?.capabilities(requested)?;
        }
        Ok((mask & requested).difference(ItemCapabilities::NEEDS_VALIDATION))
    }
}

/// Strips `X:` plus an optional separator, case-insensitively
fn strip_drive_designator(text: &str, letter: char) -> Option<&str> {
    let mut chars = text.chars();
    if !chars.next()?.eq_ignore_ascii_case(&letter) {
        return None;
    }
    if chars.next() != Some(':') {
        return None;
    }
    let rest = &text[2..];
    match rest.chars().next() {
        Some(c) if c == '/' || c == '\\' => Some(&rest[1..]),
        _ => Some(rest),
    }
}
