//! The root namespace folder
//!
//! Owns an immutable target directory, its own absolute locator (empty
//! for the true root), and the read-only collaborator environment. Holds
//! no mutable state; clones are cheap views over the same environment.

use crate::bind::dispatch_bind;
use crate::display::{resolve_attributes, resolve_display_name};
use crate::enumerate::merge_children;
use crate::env::{BindContext, NamespaceEnv};
use crate::error::NamespaceError;
use crate::folder::{Binding, DisplayMode, EnumFlags, NamespaceFolder, ParsedName};
use crate::parse::parse_root_name;
use locator_types::{ItemCapabilities, ItemLocator, SortKey};
use std::cmp::Ordering;
use std::sync::Arc;

/// Default localized label of the namespace root
pub const DEFAULT_ROOT_LABEL: &str = "Desktop";

/// The merged root folder of the virtual namespace
#[derive(Clone)]
pub struct RootFolder {
    target_directory: String,
    root_locator: ItemLocator,
    root_label: String,
    env: Arc<NamespaceEnv>,
}

impl RootFolder {
    /// Creates a root over a backing directory
    pub fn new(target_directory: impl Into<String>, env: Arc<NamespaceEnv>) -> Self {
        Self {
            target_directory: target_directory.into(),
            root_locator: ItemLocator::empty(),
            root_label: DEFAULT_ROOT_LABEL.to_string(),
            env,
        }
    }

    /// Overrides the localized root label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.root_label = label.into();
        self
    }

    /// Sets the root's own absolute locator (empty for the true root)
    pub fn with_root_locator(mut self, locator: ItemLocator) -> Self {
        self.root_locator = locator;
        self
    }

    /// The backing directory whose entries appear as children
    pub fn target_directory(&self) -> &str {
        &self.target_directory
    }

    /// This folder's own absolute address
    pub fn root_locator(&self) -> &ItemLocator {
        &self.root_locator
    }

    /// The localized root label
    pub fn root_label(&self) -> &str {
        &self.root_label
    }

    pub(crate) fn env(&self) -> &NamespaceEnv {
        &self.env
    }
}

impl NamespaceFolder for RootFolder {
    fn parse_name(
        &self,
        text: &str,
        ctx: &BindContext<'_>,
    ) -> Result<ParsedName, NamespaceError> {
        parse_root_name(self, text, ctx)
    }

    fn enumerate(&self, flags: EnumFlags) -> Result<Vec<ItemLocator>, NamespaceError> {
        merge_children(self, flags)
    }

    fn bind(
        &self,
        locator: &ItemLocator,
        ctx: &BindContext<'_>,
    ) -> Result<Binding, NamespaceError> {
        dispatch_bind(self, locator, ctx)
    }

    fn compare(
        &self,
        a: &ItemLocator,
        b: &ItemLocator,
        key: SortKey,
    ) -> Result<Ordering, NamespaceError> {
        crate::bind::compare_delegating(self, a, b, key)
    }

    fn display_name(
        &self,
        locator: &ItemLocator,
        mode: DisplayMode,
    ) -> Result<String, NamespaceError> {
        resolve_display_name(self, locator, mode)
    }

    fn attributes_of(
        &self,
        locators: &[ItemLocator],
        requested: ItemCapabilities,
    ) -> Result<ItemCapabilities, NamespaceError> {
        resolve_attributes(self, locators, requested)
    }
}
