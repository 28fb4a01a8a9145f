//! Standard backend wiring
//!
//! Produces the concrete nodes the resolver requests and assembles the
//! full collaborator environment from a store, a registry, and a drive
//! table.

use crate::computer::ComputerRootFolder;
use crate::drives::{DriveTable, TableOverlayProbe};
use crate::filesystem::FileSystemFolder;
use crate::network::NetworkRootFolder;
use crate::overlay::DriveOverlayFolder;
use directory_store::DirectoryStore;
use extension_registry::ExtensionRegistry;
use namespace_core::path::split_parent;
use namespace_core::{
    file_entry_from_store, BackendFactories, Binding, DriveRef, LeafObject, NamespaceEnv,
    NamespaceError, NamespaceFolder,
};
use std::sync::Arc;

/// Factory wiring over the standard backend set
pub struct StandardFactories {
    store: Arc<dyn DirectoryStore>,
    drives: Arc<DriveTable>,
}

impl StandardFactories {
    pub fn new(store: Arc<dyn DirectoryStore>, drives: Arc<DriveTable>) -> Self {
        Self { store, drives }
    }
}

impl BackendFactories for StandardFactories {
    fn computer_root(&self) -> Box<dyn NamespaceFolder> {
        Box::new(ComputerRootFolder::new(
            Arc::clone(&self.drives),
            Arc::clone(&self.store),
        ))
    }

    fn drive_overlay(&self, drive: &DriveRef) -> Result<Box<dyn NamespaceFolder>, NamespaceError> {
        let mount = self
            .drives
            .resolve(drive)
            .ok_or_else(|| match drive {
                DriveRef::Letter(letter) => {
                    NamespaceError::not_found(format!("drive {}:", letter))
                }
                DriveRef::Guid(id) => NamespaceError::not_found(format!("volume {}", id)),
            })?;
        Ok(Box::new(DriveOverlayFolder::new(
            mount,
            Arc::clone(&self.store),
        )))
    }

    fn network_root(&self) -> Box<dyn NamespaceFolder> {
        Box::new(NetworkRootFolder::new())
    }

    fn filesystem_folder(&self, path: &str) -> Result<Binding, NamespaceError> {
        if let Some((parent, name)) = split_parent(path) {
            let entry = self.store.find_entry(parent, name)?;
            if !entry.is_folder {
                return Ok(Binding::Leaf(LeafObject {
                    path: path.to_string(),
                    entry: file_entry_from_store(entry),
                }));
            }
        } else if !self.store.path_exists(path) {
            return Err(NamespaceError::not_found(path));
        }
        Ok(Binding::Folder(Box::new(FileSystemFolder::new(
            path,
            Arc::clone(&self.store),
        ))))
    }
}

/// Assembles the full environment from the standard backends
pub fn standard_env(
    store: Arc<dyn DirectoryStore>,
    registry: Arc<dyn ExtensionRegistry>,
    drives: Arc<DriveTable>,
) -> Arc<NamespaceEnv> {
    Arc::new(NamespaceEnv {
        directory_store: Arc::clone(&store),
        registry,
        overlay: Arc::new(TableOverlayProbe::new(Arc::clone(&drives))),
        factories: Arc::new(StandardFactories::new(store, drives)),
    })
}
