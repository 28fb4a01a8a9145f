//! # Namespace Integration Fixtures
//!
//! Shared fixture wiring for the end-to-end resolver tests: one in-memory
//! world with a desktop directory, two mounted drives (one overlaid), and
//! a populated extension registry, assembled through the standard backend
//! factories.

use directory_store::{DirectoryStore, MemoryDirectoryStore, StoreEntry};
use extension_registry::{ExtensionInfo, ExtensionRegistry, InMemoryExtensionRegistry, RegistryScope};
use namespace_backends::{standard_env, DriveMount, DriveTable};
use namespace_core::RootFolder;
use std::sync::Arc;
use uuid::Uuid;

/// Machine-scope extension ("Recycle Bin")
pub const EXT_RECYCLE: Uuid = Uuid::from_u128(0x645ff040_5081_4001_9001_aa0042c0a2e1);
/// User-scope extension ("Control Panel")
pub const EXT_CONTROL: Uuid = Uuid::from_u128(0x21ec2020_3aea_4069_a2dd_08002b30309d);
/// Extension registered in both scopes
pub const EXT_DUP: Uuid = Uuid::from_u128(0x871c5380_42a0_4069_a2ea_08002b30309d);
/// Volume GUID of the overlaid C: drive
pub const VOL_C: Uuid = Uuid::from_u128(0xc0000000_0000_4000_8000_000000000001);
/// Volume GUID of the plain D: drive
pub const VOL_D: Uuid = Uuid::from_u128(0xd0000000_0000_4000_8000_000000000001);

/// The desktop backing directory of the fixture root
pub const DESKTOP: &str = "/desk";

/// Builds the fixture directory store
///
/// `/desk` holds the folder `Sub` (containing `inner.txt`), the files
/// `a.txt` and `Report.lnk`, and the hidden file `.secret`. `C:` holds
/// `docs/notes.txt`; `D:` is empty.
pub fn fixture_store() -> MemoryDirectoryStore {
    let mut store = MemoryDirectoryStore::new();
    store.add_dir(DESKTOP);
    store.add_entry(DESKTOP, StoreEntry::folder("Sub"));
    store.add_entry(DESKTOP, StoreEntry::file("a.txt", 10).modified_at(100));
    store.add_entry(DESKTOP, StoreEntry::file("Report.lnk", 3).modified_at(50));
    store.add_entry(DESKTOP, StoreEntry::file(".secret", 1).hidden());
    store.add_entry("/desk/Sub", StoreEntry::file("inner.txt", 7));

    store.add_dir("C:");
    store.add_entry("C:", StoreEntry::folder("docs"));
    store.add_entry("C:/docs", StoreEntry::file("notes.txt", 20));
    store.add_dir("D:");
    store
}

/// Builds the fixture registry: machine scope `EXT_RECYCLE` then
/// `EXT_DUP`, user scope `EXT_CONTROL` then `EXT_DUP` again, plus the
/// path-form volume registration for `VOL_C`.
pub fn fixture_registry() -> InMemoryExtensionRegistry {
    let mut registry = InMemoryExtensionRegistry::new();
    let registrations = [
        (RegistryScope::Machine, EXT_RECYCLE, ExtensionInfo::labeled("Recycle Bin")),
        (RegistryScope::Machine, EXT_DUP, ExtensionInfo::labeled("Shared Tool")),
        (RegistryScope::User, EXT_CONTROL, ExtensionInfo::labeled("Control Panel")),
        (RegistryScope::User, EXT_DUP, ExtensionInfo::labeled("Shared Tool")),
        (
            RegistryScope::Machine,
            VOL_C,
            ExtensionInfo::labeled("System Volume").with_path_form(),
        ),
    ];
    for (scope, guid, info) in registrations {
        registry
            .register(scope, guid, info)
            .expect("fixture registration");
    }
    registry
}

/// Builds the fixture drive table: `C:` overlaid, `D:` plain
pub fn fixture_drives() -> DriveTable {
    let mut drives = DriveTable::new();
    drives.add(DriveMount::new('C', VOL_C, "C:", "System").overlaid());
    drives.add(DriveMount::new('D', VOL_D, "D:", "Data"));
    drives
}

/// Builds a root folder over the full fixture world
pub fn fixture_root() -> RootFolder {
    let store: Arc<dyn DirectoryStore> = Arc::new(fixture_store());
    let registry: Arc<dyn ExtensionRegistry> = Arc::new(fixture_registry());
    let env = standard_env(store, registry, Arc::new(fixture_drives()));
    RootFolder::new(DESKTOP, env)
}
