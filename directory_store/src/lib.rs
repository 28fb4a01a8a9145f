//! # Directory Store
//!
//! This crate defines the directory-enumeration collaborator consumed by
//! the namespace resolver.
//!
//! ## Design
//!
//! - **StoreEntry**: one enumerated entry with the attribute tuple the
//!   resolver caches into filesystem segments
//! - **DirectoryStore**: the query surface (`list_entries`, `path_exists`)
//!   plus case-insensitive point lookup
//! - **OsDirectoryStore**: `std::fs`-backed implementation
//! - **MemoryDirectoryStore**: deterministic in-memory double, shipped in
//!   `src/` so downstream crates can build fixtures from it

pub mod entry;
pub mod memory_store;
pub mod os_store;
pub mod store;

pub use entry::StoreEntry;
pub use memory_store::MemoryDirectoryStore;
pub use os_store::OsDirectoryStore;
pub use store::{DirectoryStore, StoreError};
