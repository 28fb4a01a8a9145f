//! # Extension Registry
//!
//! This crate implements the scoped store mapping GUIDs to virtual
//! namespace providers.
//!
//! ## Philosophy
//!
//! Registration order is meaningful and preserved: machine-scope entries
//! always precede user-scope entries in merged enumeration, and a GUID
//! registered in both scopes appears twice. The duplication is the
//! documented reference behavior, not an accident, and consumers are
//! expected to handle it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use uuid::Uuid;

/// Error types for registry operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// GUID already registered in the same scope
    #[error("extension {0} already registered in this scope")]
    AlreadyRegistered(Uuid),
    /// GUID not registered in any scope
    #[error("extension {0} is not registered")]
    NotFound(Uuid),
}

/// Registration scope. Machine-scope entries precede user-scope entries
/// everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegistryScope {
    Machine,
    User,
}

/// One enumerated registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionEntry {
    pub guid: Uuid,
    pub scope: RegistryScope,
}

/// Metadata registered alongside an extension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionInfo {
    /// Human-readable label shown outside parsing mode
    pub friendly_label: String,
    /// Whether the extension can render itself as a filesystem path
    pub supports_path_form: bool,
}

impl ExtensionInfo {
    /// Creates metadata with a label and no path form
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            friendly_label: label.into(),
            supports_path_form: false,
        }
    }

    /// Marks the extension as supporting a filesystem path form
    pub fn with_path_form(mut self) -> Self {
        self.supports_path_form = true;
        self
    }
}

/// Read-only view of the extension registry
pub trait ExtensionRegistry: Send + Sync {
    /// Lists the GUIDs registered in one scope, in registration order
    fn enumerate(&self, scope: RegistryScope) -> Vec<Uuid>;

    /// Looks up the metadata of a registered extension
    fn lookup(&self, guid: Uuid) -> Result<ExtensionInfo, RegistryError>;

    /// Lists every registration: machine scope first, then user scope,
    /// both in registration order. A GUID present in both scopes appears
    /// twice; no deduplication is performed.
    fn enumerate_all(&self) -> Vec<ExtensionEntry> {
        let mut entries = Vec::new();
        for guid in self.enumerate(RegistryScope::Machine) {
            entries.push(ExtensionEntry {
                guid,
                scope: RegistryScope::Machine,
            });
        }
        for guid in self.enumerate(RegistryScope::User) {
            entries.push(ExtensionEntry {
                guid,
                scope: RegistryScope::User,
            });
        }
        entries
    }
}

/// In-memory registry store
///
/// Keeps per-scope registration order in vectors and metadata in a map,
/// mirroring how the backing scoped stores are consumed: ordered
/// enumeration plus point lookup.
#[derive(Debug, Default)]
pub struct InMemoryExtensionRegistry {
    machine: Vec<Uuid>,
    user: Vec<Uuid>,
    info: HashMap<Uuid, ExtensionInfo>,
}

impl InMemoryExtensionRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an extension in one scope
    ///
    /// Rejects a duplicate GUID within the same scope. The same GUID may
    /// be registered once in each scope.
    pub fn register(
        &mut self,
        scope: RegistryScope,
        guid: Uuid,
        info: ExtensionInfo,
    ) -> Result<(), RegistryError> {
        let slot = match scope {
            RegistryScope::Machine => &mut self.machine,
            RegistryScope::User => &mut self.user,
        };
        if slot.contains(&guid) {
            return Err(RegistryError::AlreadyRegistered(guid));
        }
        slot.push(guid);
        self.info.insert(guid, info);
        Ok(())
    }

    /// Returns the total number of registrations across both scopes
    pub fn count(&self) -> usize {
        self.machine.len() + self.user.len()
    }
}

impl ExtensionRegistry for InMemoryExtensionRegistry {
    fn enumerate(&self, scope: RegistryScope) -> Vec<Uuid> {
        match scope {
            RegistryScope::Machine => self.machine.clone(),
            RegistryScope::User => self.user.clone(),
        }
    }

    fn lookup(&self, guid: Uuid) -> Result<ExtensionInfo, RegistryError> {
        self.info
            .get(&guid)
            .cloned()
            .ok_or(RegistryError::NotFound(guid))
    }
}
