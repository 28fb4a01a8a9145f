//! Capability mask and identifier contract
//!
//! Capability bits cross the API boundary as integers and the well-known
//! GUID is persisted inside encoded locators, so both are pinned to
//! literal values.
