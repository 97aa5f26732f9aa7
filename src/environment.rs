//! # Environment Sources
//!
//! Probe parameters come from the process environment and are re-read on every
//! request. Handlers read them through [`EnvironmentSource`] so that tests can
//! supply a fixed map instead of mutating the global environment.

use std::collections::HashMap;
use std::fmt;

/// Lookup of environment values by name
pub trait EnvironmentSource: Send + Sync + fmt::Debug {
    /// Current value of `key`, or `None` when unset or not valid unicode
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads the live process environment on every lookup
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl EnvironmentSource for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Fixed set of values, used by tests and embedders
#[derive(Debug, Clone, Default)]
pub struct StaticEnvironment {
    vars: HashMap<String, String>,
}

impl StaticEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a value
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl FromIterator<(String, String)> for StaticEnvironment {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().collect(),
        }
    }
}

impl EnvironmentSource for StaticEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_environment_lookup() {
        let env = StaticEnvironment::new()
            .with("HOSTNAME", "abc123")
            .with("HOSTNAME", "def456");
        assert_eq!(env.var("HOSTNAME").as_deref(), Some("def456"));
        assert_eq!(env.var("DB_HOST"), None);
    }

    #[test]
    fn test_process_environment_reads_path() {
        // PATH is set in every environment the tests run in
        assert!(ProcessEnvironment.var("PATH").is_some());
        assert!(ProcessEnvironment
            .var("PROBE_SERVICE_SURELY_UNSET_VARIABLE")
            .is_none());
    }
}
