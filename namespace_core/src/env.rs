//! Collaborator environment
//!
//! The resolver consumes its collaborators (directory store, extension
//! registry, overlay-availability check, backend factories) through this
//! read-only bundle. The root owns one `Arc<NamespaceEnv>` and nothing
//! else that is shared.

use crate::folder::{Binding, NamespaceFolder, ParsedName};
use crate::error::NamespaceError;
use directory_store::DirectoryStore;
use extension_registry::ExtensionRegistry;
use locator_types::{ItemCapabilities, ItemLocator};
use std::sync::Arc;
use uuid::Uuid;

/// GUID of the computer-root singleton extension
pub const COMPUTER_ROOT_GUID: Uuid = Uuid::from_u128(0x6a1b6f80_4bd1_43f2_9d6e_2f1a0c7d9b01);

/// Label of the computer-root singleton outside parsing mode
pub const COMPUTER_ROOT_LABEL: &str = "Computer";

/// URL scheme owned by this namespace
pub const NAMESPACE_SCHEME: &str = "shell";

/// A drive identified by letter or by volume GUID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveRef {
    Letter(char),
    Guid(Uuid),
}

/// Decides whether a drive is mounted through the overlay backend
///
/// Implementations must reach the same decision for the letter form and
/// the GUID form of the same underlying drive.
pub trait OverlayProbe: Send + Sync {
    fn drive_has_overlay(&self, drive: &DriveRef) -> bool;
}

/// Factories producing the child backend nodes this resolver locates and
/// invokes but does not implement
pub trait BackendFactories: Send + Sync {
    /// The computer-root singleton's folder node
    fn computer_root(&self) -> Box<dyn NamespaceFolder>;

    /// The overlay backend's root node for a drive
    fn drive_overlay(&self, drive: &DriveRef) -> Result<Box<dyn NamespaceFolder>, NamespaceError>;

    /// The network-namespace root node
    fn network_root(&self) -> Box<dyn NamespaceFolder>;

    /// A folder node or leaf object for an absolute filesystem path
    fn filesystem_folder(&self, path: &str) -> Result<Binding, NamespaceError>;
}

/// A caller-supplied resolver that may claim an entire name text
pub trait ExternalResolver {
    /// Returns a fully-formed locator to short-circuit all later parse
    /// rules, or `None` to decline
    fn claim(&self, text: &str) -> Option<ItemLocator>;
}

/// A caller-supplied resolver for URL schemes this namespace does not own
pub trait UrlResolver {
    fn resolve_url(&self, text: &str) -> Result<ParsedName, NamespaceError>;
}

/// Per-call binding/parsing options
#[derive(Default, Clone, Copy)]
pub struct BindContext<'a> {
    /// Pluggable resolver that may claim the whole text (parse rule 4)
    pub external_resolver: Option<&'a dyn ExternalResolver>,
    /// Delegate for foreign URL schemes (parse rule 5)
    pub url_resolver: Option<&'a dyn UrlResolver>,
    /// When set, `parse_name` also computes the item's capabilities
    pub want_attributes: Option<ItemCapabilities>,
}

impl<'a> BindContext<'a> {
    /// Context with no optional collaborators
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests attribute computation alongside parsing
    pub fn with_attributes(mut self, requested: ItemCapabilities) -> Self {
        self.want_attributes = Some(requested);
        self
    }
}

/// The read-only collaborator bundle owned by the root
pub struct NamespaceEnv {
    pub directory_store: Arc<dyn DirectoryStore>,
    pub registry: Arc<dyn ExtensionRegistry>,
    pub overlay: Arc<dyn OverlayProbe>,
    pub factories: Arc<dyn BackendFactories>,
}
