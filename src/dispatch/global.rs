//! The process-wide dispatch registry.
//!
//! ## Initialization contract
//!
//! - `init_global(config)` installs a configured registry. It must run before
//!   anything touches the global registry, typically first thing in `main`.
//! - Otherwise the first use installs a registry with the default config.
//! - There is no teardown; the registry lives for the process.
//!
//! The standard trait impls of the container types (`PartialEq`, `Hash`,
//! `Display`) go through this registry.

use std::sync::OnceLock;

use super::{DispatchConfig, DispatchRegistry};
use crate::detect::Dynamic;
use crate::error::{Error, Result};

static GLOBAL: OnceLock<DispatchRegistry> = OnceLock::new();

/// Install the process-wide registry with `config`.
///
/// Fails with [`Error::GlobalAlreadyInitialized`] once any registry has been
/// installed, explicitly or by first use.
pub fn init_global(config: DispatchConfig) -> Result<&'static DispatchRegistry> {
    let mut installed = false;
    let registry = GLOBAL.get_or_init(|| {
        installed = true;
        DispatchRegistry::with_config(config)
    });
    if installed {
        Ok(registry)
    } else {
        Err(Error::GlobalAlreadyInitialized)
    }
}

/// The process-wide registry, installing the default one on first use.
pub fn global() -> &'static DispatchRegistry {
    GLOBAL.get_or_init(DispatchRegistry::new)
}

/// [`DispatchRegistry::are_equal`] on the process-wide registry.
pub fn are_equal(x: &dyn Dynamic, y: &dyn Dynamic) -> bool {
    global().are_equal(x, y)
}

/// [`DispatchRegistry::hash_of`] on the process-wide registry.
pub fn hash_of(x: &dyn Dynamic) -> i32 {
    global().hash_of(x)
}

/// [`DispatchRegistry::string_of`] on the process-wide registry.
pub fn string_of(x: &dyn Dynamic) -> String {
    global().string_of(x)
}
