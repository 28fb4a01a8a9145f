//! # Namespace Contract Tests
//!
//! This crate provides "golden" tests for the namespace contracts to
//! ensure they don't drift accidentally over time.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: wire tags, sort ranks, and fixed masks
//!   are written out as literal values
//! - **Testability first**: contract tests fail when an interface changes
//! - **Mechanism not policy**: define what must be stable, not how to
//!   use it
//!
//! ## Structure
//!
//! - `wire`: the binary segment and locator frame layout
//! - `ordering`: segment kind ranks and comparator laws
//! - `masks`: fixed capability masks and well-known identifiers
//! - `folder_contract`: shape of the five-operation backend trait

pub mod folder_contract;
pub mod masks;
pub mod ordering;
pub mod wire;
