//! Environment variable providers for `${sysenv.NAME}` references
//!
//! Providers are queried on every resolution. Nothing is cached, so a
//! variable set after the configuration was built is visible on the next
//! read.

use std::collections::HashMap;

/// Looks up an environment variable by name.
pub trait EnvProvider {
    /// Current value of `name`, or `None` when unset.
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads the live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvProvider for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvProvider for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<F> EnvProvider for F
where
    F: Fn(&str) -> Option<String>,
{
    fn var(&self, name: &str) -> Option<String> {
        self(name)
    }
}
