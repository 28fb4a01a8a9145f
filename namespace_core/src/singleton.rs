//! Process-wide shared root
//!
//! The first caller's configuration wins; every later call observes the
//! same instance regardless of the arguments it passed. Handing out
//! `Arc` clones keeps the instance alive independently of initialization
//! order at shutdown.

use crate::env::NamespaceEnv;
use crate::root::RootFolder;
use std::sync::{Arc, OnceLock};

static SHARED_ROOT: OnceLock<Arc<RootFolder>> = OnceLock::new();

/// Returns the process-wide root folder, creating it on first call
///
/// Concurrent first calls race to install their candidate; exactly one
/// wins and all callers, including the losers, receive the winner.
pub fn shared_root(target_directory: &str, env: Arc<NamespaceEnv>) -> Arc<RootFolder> {
    let candidate = Arc::new(RootFolder::new(target_directory, env));
    if SHARED_ROOT.set(Arc::clone(&candidate)).is_ok() {
        return candidate;
    }
    // Lost the race; the winner is installed by now.
    SHARED_ROOT.get().cloned().unwrap_or(candidate)
}
