//! Binary segment and locator codec
//!
//! Each segment encodes as one tag byte followed by a fixed-shape payload.
//! Locators frame their segments with little-endian u16 length prefixes
//! behind a leading segment count. Decoding rejects unknown tags and
//! payloads whose length does not match the tag's expected shape.
//!
//! Zero-length input is rejected as a *segment*: the empty locator is a
//! valid locator value, not a decodable segment.
//!
//! Encoding is fallible too: every length prefix is a u16, and a field
//! that does not fit is rejected with a typed error rather than wrapped.

use crate::locator::ItemLocator;
use crate::segment::{EntryAttributes, FileEntry, ItemSegment};
use thiserror::Error;
use uuid::Uuid;

/// Errors produced by the locator codec
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocatorError {
    /// Zero-length input is not a decodable segment
    #[error("empty input is not a decodable segment")]
    EmptySegment,

    /// The tag byte is not a known segment kind
    #[error("unrecognized segment tag {0:#04x}")]
    UnknownTag(u8),

    /// The payload ended before the tag's expected shape was complete
    #[error("truncated payload for segment tag {tag:#04x}")]
    TruncatedPayload { tag: u8 },

    /// The payload does not match the tag's expected shape
    #[error("malformed payload for segment tag {tag:#04x}")]
    MalformedPayload { tag: u8 },

    /// A locator frame declared more segments or bytes than were present
    #[error("truncated locator frame")]
    TruncatedFrame,

    /// A locator frame carried trailing bytes past its declared contents
    #[error("trailing bytes after locator frame")]
    TrailingBytes,

    /// A string field was too long for its u16 length prefix
    #[error("string field of {len} bytes exceeds the u16 length prefix")]
    StringTooLong { len: usize },

    /// An encoded segment body was too long for its u16 frame prefix
    #[error("segment body of {len} bytes exceeds the u16 frame prefix")]
    SegmentTooLarge { len: usize },

    /// A locator held more segments than the u16 count prefix carries
    #[error("locator of {count} segments exceeds the u16 count prefix")]
    TooManySegments { count: usize },
}

const TAG_ROOT_MARKER: u8 = 0x00;
const TAG_GUID: u8 = 0x01;
const TAG_DRIVE: u8 = 0x02;
const TAG_NETWORK_ROOT: u8 = 0x03;
const TAG_FS_ENTRY: u8 = 0x04;

impl ItemSegment {
    /// Encodes this segment into its binary representation
    ///
    /// Fails with [`LocatorError::StringTooLong`] when a name or file type
    /// does not fit its u16 length prefix.
    pub fn encode(&self) -> Result<Vec<u8>, LocatorError> {
        Ok(match self {
            ItemSegment::RootMarker => vec![TAG_ROOT_MARKER],
            ItemSegment::Guid(id) => {
                let mut out = Vec::with_capacity(17);
                out.push(TAG_GUID);
                out.extend_from_slice(id.as_bytes());
                out
            }
            ItemSegment::Drive(letter) => vec![TAG_DRIVE, *letter as u8],
            ItemSegment::NetworkRoot => vec![TAG_NETWORK_ROOT],
            ItemSegment::FileSystemEntry(entry) => encode_fs_entry(entry)?,
        })
    }

    /// Decodes a segment from its binary representation
    ///
    /// Fails with [`LocatorError::EmptySegment`] on zero-length input, with
    /// [`LocatorError::UnknownTag`] on an unrecognized tag byte, and with a
    /// payload error when the bytes do not match the tag's shape exactly.
    pub fn decode(bytes: &[u8]) -> Result<ItemSegment, LocatorError> {
        let (&tag, payload) = bytes.split_first().ok_or(LocatorError::EmptySegment)?;
        match tag {
            TAG_ROOT_MARKER => expect_empty(tag, payload, ItemSegment::RootMarker),
            TAG_GUID => {
                let raw: [u8; 16] = payload
                    .try_into()
                    .map_err(|_| shape_error(tag, payload.len() < 16))?;
                Ok(ItemSegment::Guid(Uuid::from_bytes(raw)))
            }
            TAG_DRIVE => {
                let [letter] = payload else {
                    return Err(shape_error(tag, payload.is_empty()));
                };
                if !letter.is_ascii_alphabetic() {
                    return Err(LocatorError::MalformedPayload { tag });
                }
                Ok(ItemSegment::Drive(*letter as char))
            }
            TAG_NETWORK_ROOT => expect_empty(tag, payload, ItemSegment::NetworkRoot),
            TAG_FS_ENTRY => decode_fs_entry(payload),
            other => Err(LocatorError::UnknownTag(other)),
        }
    }
}

impl ItemLocator {
    /// Encodes the locator as a segment count followed by length-prefixed
    /// segment encodings. The empty locator encodes to a zero count.
    ///
    /// Fails when the segment count or an encoded segment body does not
    /// fit its u16 prefix, so every frame this produces decodes back.
    pub fn encode(&self) -> Result<Vec<u8>, LocatorError> {
        let count = u16::try_from(self.segments().len()).map_err(|_| {
            LocatorError::TooManySegments {
                count: self.segments().len(),
            }
        })?;
        let mut out = Vec::new();
        put_u16(&mut out, count);
        for segment in self.segments() {
            let body = segment.encode()?;
            let len = u16::try_from(body.len())
                .map_err(|_| LocatorError::SegmentTooLarge { len: body.len() })?;
            put_u16(&mut out, len);
            out.extend_from_slice(&body);
        }
        Ok(out)
    }

    /// Decodes a locator frame produced by [`encode`](Self::encode)
    pub fn decode(bytes: &[u8]) -> Result<ItemLocator, LocatorError> {
        let mut cursor = bytes;
        let count = get_u16(&mut cursor).ok_or(LocatorError::TruncatedFrame)?;
        let mut segments = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let len = get_u16(&mut cursor).ok_or(LocatorError::TruncatedFrame)? as usize;
            if cursor.len() < len {
                return Err(LocatorError::TruncatedFrame);
            }
            let (body, rest) = cursor.split_at(len);
            segments.push(ItemSegment::decode(body)?);
            cursor = rest;
        }
        if !cursor.is_empty() {
            return Err(LocatorError::TrailingBytes);
        }
        Ok(ItemLocator::from_segments(segments))
    }
}

fn expect_empty(
    tag: u8,
    payload: &[u8],
    segment: ItemSegment,
) -> Result<ItemSegment, LocatorError> {
    if payload.is_empty() {
        Ok(segment)
    } else {
        Err(LocatorError::MalformedPayload { tag })
    }
}

fn shape_error(tag: u8, truncated: bool) -> LocatorError {
    if truncated {
        LocatorError::TruncatedPayload { tag }
    } else {
        LocatorError::MalformedPayload { tag }
    }
}

fn encode_fs_entry(entry: &FileEntry) -> Result<Vec<u8>, LocatorError> {
    let mut out = vec![TAG_FS_ENTRY, entry.is_folder as u8];
    put_string(&mut out, &entry.name)?;
    match &entry.attrs {
        None => out.push(0),
        Some(attrs) => {
            out.push(1);
            out.extend_from_slice(&attrs.size.to_le_bytes());
            out.extend_from_slice(&attrs.modified.to_le_bytes());
            out.push(attrs.hidden as u8);
            put_string(&mut out, &attrs.file_type)?;
        }
    }
    Ok(out)
}

fn decode_fs_entry(payload: &[u8]) -> Result<ItemSegment, LocatorError> {
    let tag = TAG_FS_ENTRY;
    let mut cursor = payload;
    let is_folder = get_bool(&mut cursor, tag)?;
    let name = get_string(&mut cursor, tag)?;
    let has_attrs = get_bool(&mut cursor, tag)?;
    let attrs = if has_attrs {
        let size = get_u64(&mut cursor, tag)?;
        let modified = get_u64(&mut cursor, tag)?;
        let hidden = get_bool(&mut cursor, tag)?;
        let file_type = get_string(&mut cursor, tag)?;
        Some(EntryAttributes {
            size,
            file_type,
            modified,
            hidden,
        })
    } else {
        None
    };
    if !cursor.is_empty() {
        return Err(LocatorError::MalformedPayload { tag });
    }
    Ok(ItemSegment::FileSystemEntry(FileEntry {
        name,
        is_folder,
        attrs,
    }))
}

fn put_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_le_bytes());
}

fn put_string(out: &mut Vec<u8>, value: &str) -> Result<(), LocatorError> {
    let len = u16::try_from(value.len())
        .map_err(|_| LocatorError::StringTooLong { len: value.len() })?;
    put_u16(out, len);
    out.extend_from_slice(value.as_bytes());
    Ok(())
}

fn get_u16(cursor: &mut &[u8]) -> Option<u16> {
    let (head, rest) = cursor.split_first_chunk::<2>()?;
    *cursor = rest;
    Some(u16::from_le_bytes(*head))
}

fn get_u64(cursor: &mut &[u8], tag: u8) -> Result<u64, LocatorError> {
    let (head, rest) = cursor
        .split_first_chunk::<8>()
        .ok_or(LocatorError::TruncatedPayload { tag })?;
    *cursor = rest;
    Ok(u64::from_le_bytes(*head))
}

fn get_bool(cursor: &mut &[u8], tag: u8) -> Result<bool, LocatorError> {
    let (&byte, rest) = cursor
        .split_first()
        .ok_or(LocatorError::TruncatedPayload { tag })?;
    *cursor = rest;
    match byte {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(LocatorError::MalformedPayload { tag }),
    }
}

fn get_string(cursor: &mut &[u8], tag: u8) -> Result<String, LocatorError> {
    let len = get_u16(cursor).ok_or(LocatorError::TruncatedPayload { tag })? as usize;
    if cursor.len() < len {
        return Err(LocatorError::TruncatedPayload { tag });
    }
    let (body, rest) = cursor.split_at(len);
    *cursor = rest;
    String::from_utf8(body.to_vec()).map_err(|_| LocatorError::MalformedPayload { tag })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_segments() -> Vec<ItemSegment> {
        vec![
            ItemSegment::RootMarker,
            ItemSegment::Guid(Uuid::new_v4()),
            ItemSegment::drive('c'),
            ItemSegment::NetworkRoot,
            ItemSegment::entry("notes.txt", false),
            ItemSegment::FileSystemEntry(FileEntry::with_attrs(
                "docs",
                true,
                EntryAttributes {
                    size: 0,
                    file_type: String::new(),
                    modified: 1_700_000_000,
                    hidden: false,
                },
            )),
            ItemSegment::FileSystemEntry(FileEntry::with_attrs(
                ".profile",
                false,
                EntryAttributes {
                    size: 812,
                    file_type: "profile".to_string(),
                    modified: 1_650_000_000,
                    hidden: true,
                },
            )),
        ]
    }

    #[test]
    fn test_segment_round_trip() {
        for segment in sample_segments() {
            let encoded = segment.encode().unwrap();
            let decoded = ItemSegment::decode(&encoded).unwrap();
            assert_eq!(decoded, segment);
        }
    }

    #[test]
    fn test_name_at_length_prefix_boundary_round_trips() {
        let segment = ItemSegment::entry("a".repeat(u16::MAX as usize), false);
        let encoded = segment.encode().unwrap();
        assert_eq!(ItemSegment::decode(&encoded).unwrap(), segment);
    }

    #[test]
    fn test_encode_rejects_name_past_length_prefix() {
        let len = u16::MAX as usize + 1;
        let segment = ItemSegment::entry("a".repeat(len), false);
        assert_eq!(segment.encode(), Err(LocatorError::StringTooLong { len }));
    }

    #[test]
    fn test_locator_encode_rejects_oversized_segment_body() {
        // Both strings fit their own prefixes, but the combined body does
        // not fit the frame's u16 length prefix.
        let entry = FileEntry::with_attrs(
            "n".repeat(u16::MAX as usize),
            false,
            EntryAttributes {
                size: 0,
                file_type: "t".repeat(u16::MAX as usize),
                modified: 0,
                hidden: false,
            },
        );
        let locator = ItemLocator::simple(ItemSegment::FileSystemEntry(entry));
        assert!(matches!(
            locator.encode(),
            Err(LocatorError::SegmentTooLarge { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_empty_input() {
        assert_eq!(ItemSegment::decode(&[]), Err(LocatorError::EmptySegment));
    }

    #[test]
    fn test_decode_rejects_unknown_tag() {
        assert_eq!(
            ItemSegment::decode(&[0x7f]),
            Err(LocatorError::UnknownTag(0x7f))
        );
    }

    #[test]
    fn test_decode_rejects_truncated_guid() {
        let mut bytes = ItemSegment::Guid(Uuid::new_v4()).encode().unwrap();
        bytes.truncate(9);
        assert_eq!(
            ItemSegment::decode(&bytes),
            Err(LocatorError::TruncatedPayload { tag: 0x01 })
        );
    }

    #[test]
    fn test_decode_rejects_oversized_payload() {
        assert_eq!(
            ItemSegment::decode(&[0x00, 0xff]),
            Err(LocatorError::MalformedPayload { tag: 0x00 })
        );
        assert_eq!(
            ItemSegment::decode(&[0x02, b'C', b'D']),
            Err(LocatorError::MalformedPayload { tag: 0x02 })
        );
    }

    #[test]
    fn test_decode_rejects_non_alphabetic_drive() {
        assert_eq!(
            ItemSegment::decode(&[0x02, b'7']),
            Err(LocatorError::MalformedPayload { tag: 0x02 })
        );
    }

    #[test]
    fn test_locator_round_trip() {
        let locator = ItemLocator::from_segments(sample_segments());
        let decoded = ItemLocator::decode(&locator.encode().unwrap()).unwrap();
        assert_eq!(decoded, locator);
    }

    #[test]
    fn test_empty_locator_is_a_valid_frame() {
        let empty = ItemLocator::empty();
        let encoded = empty.encode().unwrap();
        assert_eq!(encoded, vec![0, 0]);
        assert_eq!(ItemLocator::decode(&encoded).unwrap(), empty);
    }

    #[test]
    fn test_locator_decode_rejects_truncated_frame() {
        let locator = ItemLocator::simple(ItemSegment::drive('c'));
        let mut bytes = locator.encode().unwrap();
        bytes.pop();
        assert_eq!(
            ItemLocator::decode(&bytes),
            Err(LocatorError::TruncatedFrame)
        );
    }

    #[test]
    fn test_locator_decode_rejects_trailing_bytes() {
        let mut bytes = ItemLocator::simple(ItemSegment::NetworkRoot).encode().unwrap();
        bytes.push(0xaa);
        assert_eq!(
            ItemLocator::decode(&bytes),
            Err(LocatorError::TrailingBytes)
        );
    }
}
