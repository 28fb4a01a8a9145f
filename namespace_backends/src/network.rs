//! Network root backend
//!
//! Placeholder node for the UNC-style network subtree. Remote browsing is
//! served by a separate provider; this node answers the contract with an
//! empty subtree so network locators stay addressable.

use locator_types::{compare, ItemCapabilities, ItemLocator, SortKey};
use namespace_core::{
    BindContext, Binding, DisplayMode, EnumFlags, NamespaceError, NamespaceFolder, ParsedName,
};
use std::cmp::Ordering;

/// Label of the network subtree outside parsing mode
const NETWORK_LABEL: &str = "Network";

/// Root of the network namespace subtree
#[derive(Clone, Default)]
pub struct NetworkRootFolder;

impl NetworkRootFolder {
    pub fn new() -> Self {
        Self
    }
}

impl NamespaceFolder for NetworkRootFolder {
    fn parse_name(
        &self,
        text: &str,
        _ctx: &BindContext<'_>,
    ) -> Result<ParsedName, NamespaceError> {
        if text.is_empty() {
            return Ok(ParsedName {
                locator: ItemLocator::empty(),
                chars_consumed: 0,
                attributes: None,
            });
        }
        Err(NamespaceError::unsupported(format!(
            "network name '{}'",
            text
        )))
    }

    fn enumerate(&self, _flags: EnumFlags) -> Result<Vec<ItemLocator>, NamespaceError> {
        Ok(Vec::new())
    }

    fn bind(
        &self,
        locator: &ItemLocator,
        _ctx: &BindContext<'_>,
    ) -> Result<Binding, NamespaceError> {
        if locator.is_empty() {
            return Ok(Binding::Folder(Box::new(self.clone())));
        }
        Err(NamespaceError::not_found(locator.to_string()))
    }

    fn compare(
        &self,
        a: &ItemLocator,
        b: &ItemLocator,
        key: SortKey,
    ) -> Result<Ordering, NamespaceError> {
        Ok(compare(a, b, key))
    }

    fn display_name(
        &self,
        locator: &ItemLocator,
        mode: DisplayMode,
    ) -> Result<String, NamespaceError> {
        if !locator.is_empty() {
            return Err(NamespaceError::not_found(locator.to_string()));
        }
        match mode.form {
            namespace_core::NameForm::Parsing => Ok("//".to_string()),
            _ => Ok(NETWORK_LABEL.to_string()),
        }
    }

    fn attributes_of(
        &self,
        locators: &[ItemLocator],
        requested: ItemCapabilities,
    ) -> Result<ItemCapabilities, NamespaceError> {
        if let Some(locator) = locators.iter().find(|locator| !locator.is_empty()) {
            return Err(NamespaceError::not_found(locator.to_string()));
        }
        let own = ItemCapabilities::IS_FOLDER | ItemCapabilities::HAS_SUBFOLDER;
        Ok(own & requested)
    }
}
