//! Wire format contract
//!
//! Encoded locators are stored and exchanged, so the tag bytes and frame
//! layout are load-bearing: a change here silently invalidates every
//! persisted address.

// Stable tag bytes of the segment encoding.
pub const TAG_ROOT_MARKER: u8 = 0x00;
pub const TAG_GUID: u8 = 0x01;
pub const TAG_DRIVE: u8 = 0x02;
pub const TAG_NETWORK_ROOT: u8 = 0x03;
pub const TAG_FS_ENTRY: u8 = 0x04;
