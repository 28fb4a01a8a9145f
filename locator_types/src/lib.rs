//! # Locator Types
//!
//! This crate defines the address model of the virtual namespace.
//!
//! ## Philosophy
//!
//! - **Addresses are values, not handles**: a locator is an immutable chain
//!   of tagged segments that can be copied, stored, and compared freely
//! - **Encoding is a contract**: the binary form of a segment is explicit
//!   and testable, never a reinterpretation of in-memory layout
//! - **Structural vs. semantic equality are distinct**: two segments can be
//!   byte-unequal (different name casing) yet compare equal in sort order
//!
//! ## Design
//!
//! - An `ItemSegment` is one tagged unit of address (GUID, drive letter,
//!   network root, filesystem entry, or root marker)
//! - An `ItemLocator` is an ordered, possibly-empty sequence of segments;
//!   the empty locator denotes the namespace root itself
//! - `compare` provides a strict total preorder used for stable sorting

pub mod capabilities;
pub mod codec;
pub mod compare;
pub mod locator;
pub mod segment;

pub use capabilities::ItemCapabilities;
pub use codec::LocatorError;
pub use compare::{compare, compare_names, compare_segments, SortKey};
pub use locator::ItemLocator;
pub use segment::{EntryAttributes, FileEntry, ItemSegment, SegmentKind};
