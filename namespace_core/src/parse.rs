//! Name parsing
//!
//! Converts user-facing text into a locator. Rules are evaluated in a
//! fixed precedence order against the remaining unconsumed text; whenever
//! a rule produces a segment with text left over, the produced child's
//! own parser handles the remainder and the results are threaded back.

use crate::env::{BindContext, DriveRef, COMPUTER_ROOT_GUID, NAMESPACE_SCHEME};
use crate::error::NamespaceError;
use crate::folder::{file_entry_from_store, Binding, NamespaceFolder, ParsedName};
use crate::path::{is_separator, join_path, take_component};
use crate::root::RootFolder;
use locator_types::{ItemLocator, ItemSegment};
use uuid::Uuid;

pub(crate) fn parse_root_name(
    root: &RootFolder,
    text: &str,
    ctx: &BindContext<'_>,
) -> Result<ParsedName, NamespaceError> {
    // Rule 1: literal GUID marker.
    if let Some(after_marker) = text.strip_prefix("::") {
        let (guid_text, remainder, sep_len) = take_component(after_marker);
        let id = parse_guid_text(guid_text)?;
        return finish_segment(
            root,
            ItemSegment::Guid(id),
            2 + guid_text.len(),
            remainder,
            sep_len,
            ctx,
        );
    }

    // Rule 2: drive-letter pattern. Zero characters are consumed at this
    // level; the whole drive-containing text is delegated onward.
    if let Some(letter) = leading_drive_letter(text) {
        let drive = DriveRef::Letter(letter);
        let mount = format!("{}:", letter);
        let overlay_ok = root.env().directory_store.path_exists(&mount)
            && root.env().overlay.drive_has_overlay(&drive);
        if overlay_ok {
            let child = root.env().factories.drive_overlay(&drive)?;
            return child.parse_name(text, ctx);
        }
        let singleton = root.env().factories.computer_root();
        let parsed = singleton.parse_name(text, ctx)?;
        return Ok(ParsedName {
            locator: ItemLocator::simple(ItemSegment::Guid(COMPUTER_ROOT_GUID))
                .concat(&parsed.locator),
            chars_consumed: parsed.chars_consumed,
            attributes: parsed.attributes,
        });
    }

    // Rule 3: network-root pattern.
    if let Some(after_prefix) = strip_network_prefix(text) {
        if after_prefix.is_empty() {
            return finish_complete(
                root,
                ItemLocator::simple(ItemSegment::NetworkRoot),
                text.len(),
                ctx,
            );
        }
        let child = root.env().factories.network_root();
        let parsed = child
            .parse_name(after_prefix, ctx)
            .map_err(|err| err.offset_consumed(2))?;
        return Ok(ParsedName {
            locator: ItemLocator::simple(ItemSegment::NetworkRoot).concat(&parsed.locator),
            chars_consumed: 2 + parsed.chars_consumed,
            attributes: parsed.attributes,
        });
    }

    // Rule 4: a caller-supplied resolver may claim the entire text.
    if let Some(resolver) = ctx.external_resolver {
        if let Some(locator) = resolver.claim(text) {
            return finish_complete(root, locator, text.len(), ctx);
        }
    }

    // Rule 5: URL-style schemes.
    if let Some((scheme, suffix)) = leading_scheme(text) {
        if scheme.eq_ignore_ascii_case(NAMESPACE_SCHEME) {
            let guid_text = suffix.strip_prefix("::").unwrap_or(suffix);
            let id = parse_guid_text(guid_text)?;
            return finish_complete(
                root,
                ItemLocator::simple(ItemSegment::Guid(id)),
                text.len(),
                ctx,
            );
        }
        return match ctx.url_resolver {
            Some(resolver) => resolver.resolve_url(text),
            None => Err(NamespaceError::unsupported(format!(
                "url scheme '{}'",
                scheme
            ))),
        };
    }

    // Rule 6: relative filesystem path.
    if text.is_empty() {
        return finish_complete(
            root,
            ItemLocator::simple(ItemSegment::Guid(COMPUTER_ROOT_GUID)),
            0,
            ctx,
        );
    }
    let (component, remainder, sep_len) = take_component(text);
    let entry = root
        .env()
        .directory_store
        .find_entry(root.target_directory(), component)
        .map_err(|_| NamespaceError::not_found(join_path(root.target_directory(), component)))?;
    finish_segment(
        root,
        ItemSegment::FileSystemEntry(file_entry_from_store(entry)),
        component.len(),
        remainder,
        sep_len,
        ctx,
    )
}

/// Completes a rule that produced one segment: recurse into the produced
/// child when text remains, otherwise compute requested attributes.
fn finish_segment(
    root: &RootFolder,
    segment: ItemSegment,
    consumed: usize,
    remainder: &str,
    sep_len: usize,
    ctx: &BindContext<'_>,
) -> Result<ParsedName, NamespaceError> {
    let prefix = ItemLocator::simple(segment);
    if remainder.is_empty() {
        return finish_complete(root, prefix, consumed + sep_len, ctx);
    }
    let child = match root.bind(&prefix, ctx)? {
        Binding::Folder(folder) => folder,
        Binding::Leaf(_) => {
            return Err(NamespaceError::ParseError {
                consumed,
                reason: format!("'{}' is not a folder", prefix),
            })
        }
    };
    let parsed = child
        .parse_name(remainder, ctx)
        .map_err(|err| err.offset_consumed(consumed + sep_len))?;
    Ok(ParsedName {
        locator: prefix.concat(&parsed.locator),
        chars_consumed: consumed + sep_len + parsed.chars_consumed,
        attributes: parsed.attributes,
    })
}

fn finish_complete(
    root: &RootFolder,
    locator: ItemLocator,
    consumed: usize,
    ctx: &BindContext<'_>,
) -> Result<ParsedName, NamespaceError> {
    let attributes = match ctx.want_attributes {
        Some(requested) => Some(root.attributes_of(std::slice::from_ref(&locator), requested)?),
        None => None,
    };
    Ok(ParsedName {
        locator,
        chars_consumed: consumed,
        attributes,
    })
}

fn parse_guid_text(text: &str) -> Result<Uuid, NamespaceError> {
    let trimmed = text
        .strip_prefix('{')
        .and_then(|t| t.strip_suffix('}'))
        .unwrap_or(text);
    Uuid::parse_str(trimmed).map_err(|_| NamespaceError::ParseError {
        consumed: 0,
        reason: format!("'{}' is not a GUID", text),
    })
}

fn leading_drive_letter(text: &str) -> Option<char> {
    let mut chars = text.chars();
    let letter = chars.next().filter(char::is_ascii_alphabetic)?;
    if chars.next() != Some(':') {
        return None;
    }
    match chars.next() {
        None => Some(letter.to_ascii_uppercase()),
        Some(c) if is_separator(c) => Some(letter.to_ascii_uppercase()),
        Some(_) => None,
    }
}

fn strip_network_prefix(text: &str) -> Option<&str> {
    text.strip_prefix("\\\\").or_else(|| text.strip_prefix("//"))
}

fn leading_scheme(text: &str) -> Option<(&str, &str)> {
    let (scheme, suffix) = text.split_once(':')?;
    // Single letters are drive patterns, not schemes.
    if scheme.len() < 2 || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some((scheme, suffix))
}
