//! # Namespace Core
//!
//! This crate implements the virtual namespace resolver: a single
//! hierarchical folder whose children merge two heterogeneous sources,
//! extensions registered in a scoped GUID registry and the contents of
//! one real backing directory, behind one uniform addressing,
//! comparison, enumeration, naming, and binding contract.
//!
//! ## Philosophy
//!
//! - **One contract, many backends**: every backend implements the same
//!   five operations (parse, enumerate, bind, compare, display/attributes),
//!   and the resolver recurses through that contract instead of
//!   special-casing backend identity
//! - **Immutable root, owned children**: the root folder is immutable after
//!   construction and safe to share across unlimited readers; every bound
//!   child is freshly created and exclusively owned by its caller
//! - **Errors are reported, not recovered**: no retries, no silent
//!   truncation; the only fallbacks are the two specified
//!   overlay-vs-singleton policy branches

pub mod bind;
pub mod display;
pub mod enumerate;
pub mod env;
pub mod error;
pub mod folder;
pub mod parse;
pub mod path;
pub mod root;
pub mod singleton;

pub use env::{
    BackendFactories, BindContext, DriveRef, ExternalResolver, NamespaceEnv, OverlayProbe,
    UrlResolver, COMPUTER_ROOT_GUID, COMPUTER_ROOT_LABEL, NAMESPACE_SCHEME,
};
pub use error::NamespaceError;
pub use folder::{
    file_entry_from_store, Binding, DisplayMode, EnumFlags, LeafObject, NameForm, NameScope,
    NamespaceFolder, ParsedName,
};
pub use root::RootFolder;
pub use singleton::shared_root;

#[cfg(test)]
pub(crate) mod testing;
