//! # Namespace Backends
//!
//! This crate implements the concrete backend nodes the resolver locates
//! and invokes: filesystem folders, the computer-root singleton, drive
//! overlay roots, and the network root.
//!
//! ## Philosophy
//!
//! - **Self-contained subtrees**: every backend node answers the five
//!   namespace operations for its own subtree without reaching back into
//!   the resolver
//! - **The drive table is configuration**: which drives exist, where they
//!   mount, and whether they are overlaid is data, never probing logic
//!   baked into a node

pub mod computer;
pub mod drives;
pub mod factories;
pub mod filesystem;
pub mod network;
pub mod overlay;

pub use computer::ComputerRootFolder;
pub use drives::{DriveMount, DriveTable, TableOverlayProbe};
pub use factories::{standard_env, StandardFactories};
pub use filesystem::FileSystemFolder;
pub use network::NetworkRootFolder;
pub use overlay::DriveOverlayFolder;
