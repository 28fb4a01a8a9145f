//! Resolver error taxonomy
//!
//! Every error carries the offending locator or text so the immediate
//! caller can report a user-visible failure. This layer performs no
//! retries and no partial recovery.

use extension_registry::RegistryError;
use directory_store::StoreError;
use locator_types::{ItemLocator, LocatorError};
use thiserror::Error;

/// Errors surfaced by the namespace resolver
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NamespaceError {
    /// Codec decode failure; fatal to the single call
    #[error("malformed locator: {0}")]
    MalformedLocator(#[from] LocatorError),

    /// Structurally invalid locator, e.g. a nested root marker
    #[error("structurally invalid address: {locator}")]
    InvalidAddress { locator: String },

    /// Referenced GUID unregistered, or filesystem entry absent
    #[error("not found: {what}")]
    NotFound { what: String },

    /// A requested capability this layer does not implement
    #[error("unsupported: {operation}")]
    Unsupported { operation: String },

    /// Name parsing failure, carrying the consumed prefix length
    #[error("parse failed after {consumed} characters: {reason}")]
    ParseError { consumed: usize, reason: String },

    /// Extension registry failure
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Directory store failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl NamespaceError {
    /// Builds an `InvalidAddress` error for a locator
    pub fn invalid_address(locator: &ItemLocator) -> Self {
        Self::InvalidAddress {
            locator: locator.to_string(),
        }
    }

    /// Builds a `NotFound` error
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Builds an `Unsupported` error
    pub fn unsupported(operation: impl Into<String>) -> Self {
        Self::Unsupported {
            operation: operation.into(),
        }
    }

    /// Shifts a `ParseError`'s consumed length by a caller-consumed
    /// prefix; other variants pass through unchanged
    pub fn offset_consumed(self, offset: usize) -> Self {
        match self {
            Self::ParseError { consumed, reason } => Self::ParseError {
                consumed: consumed + offset,
                reason,
            },
            other => other,
        }
    }
}
