//! Configuration Loader
//!
//! Layers built-in defaults, an optional configuration file and `PROBE_`
//! prefixed environment variables into a [`ProbeConfig`].

use config::{Config, Environment, File};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::error::ConfigResult;
use super::ProbeConfig;
use crate::constants::defaults;

/// Names an optional configuration file (format chosen by extension)
pub const CONFIG_FILE_ENV: &str = "PROBE_CONFIG_FILE";

/// Prefix for environment overrides, e.g. `PROBE_SERVER__BIND_ADDRESS`
pub const ENV_PREFIX: &str = "PROBE";

impl ProbeConfig {
    /// Load configuration from the process environment
    pub fn load() -> ConfigResult<Self> {
        let file = std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from);
        Self::load_from(file.as_deref(), environment_overrides())
    }

    /// Load configuration from an explicit file and override source
    ///
    /// Useful for testing without modifying global environment variables.
    pub fn load_from(file: Option<&Path>, overrides: Environment) -> ConfigResult<Self> {
        let mut builder = Config::builder()
            .set_default("environment", detect_environment())?
            .set_default("server.bind_address", defaults::BIND_ADDRESS)?
            .set_default("server.failure_status_unavailable", false)?
            .set_default("filesystem.scratch_path", defaults::SCRATCH_PATH)?;

        if let Some(path) = file {
            debug!(config_file = %path.display(), "Adding configuration file source");
            builder = builder.add_source(File::from(path).required(true));
        }

        let config: ProbeConfig = builder.add_source(overrides).build()?.try_deserialize()?;
        config.validate()?;

        info!(
            environment = %config.environment,
            bind_address = %config.server.bind_address,
            scratch_path = %config.filesystem.scratch_path.display(),
            failure_status_unavailable = config.server.failure_status_unavailable,
            "Configuration loaded successfully"
        );

        Ok(config)
    }
}

/// `PROBE_` environment source with `__` separating nested keys
pub fn environment_overrides() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Get current environment from environment variables
pub fn detect_environment() -> String {
    std::env::var("PROBE_ENV")
        .or_else(|_| std::env::var("APP_ENV"))
        .unwrap_or_else(|_| defaults::ENVIRONMENT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn overrides(pairs: &[(&str, &str)]) -> Environment {
        environment_overrides().source(Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        ))
    }

    #[test]
    fn test_load_uses_defaults_without_sources() {
        let config = ProbeConfig::load_from(None, overrides(&[])).unwrap();
        assert_eq!(config.server.bind_address, "0.0.0.0:8080");
        assert_eq!(
            config.filesystem.scratch_path,
            PathBuf::from("/staging/scratch.txt")
        );
        assert!(!config.server.failure_status_unavailable);
    }

    #[test]
    fn test_environment_overrides_nested_keys() {
        let config = ProbeConfig::load_from(
            None,
            overrides(&[
                ("PROBE_SERVER__BIND_ADDRESS", "127.0.0.1:9000"),
                ("PROBE_SERVER__FAILURE_STATUS_UNAVAILABLE", "true"),
                ("PROBE_FILESYSTEM__SCRATCH_PATH", "/tmp/scratch.txt"),
                ("PROBE_ENVIRONMENT", "production"),
            ]),
        )
        .unwrap();

        assert_eq!(config.server.bind_address, "127.0.0.1:9000");
        assert!(config.server.failure_status_unavailable);
        assert_eq!(
            config.filesystem.scratch_path,
            PathBuf::from("/tmp/scratch.txt")
        );
        assert!(config.is_production_environment());
    }

    #[test]
    fn test_file_source_is_overridden_by_environment() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            "[server]\nbind_address = \"127.0.0.1:7000\"\n\n[filesystem]\nscratch_path = \"/mnt/efs/scratch.txt\""
        )
        .unwrap();

        let config = ProbeConfig::load_from(
            Some(file.path()),
            overrides(&[("PROBE_SERVER__BIND_ADDRESS", "127.0.0.1:7001")]),
        )
        .unwrap();

        assert_eq!(config.server.bind_address, "127.0.0.1:7001");
        assert_eq!(
            config.filesystem.scratch_path,
            PathBuf::from("/mnt/efs/scratch.txt")
        );
    }

    #[test]
    fn test_missing_required_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(ProbeConfig::load_from(Some(&missing), overrides(&[])).is_err());
    }

    #[test]
    fn test_invalid_bind_address_fails_validation() {
        let result = ProbeConfig::load_from(
            None,
            overrides(&[("PROBE_SERVER__BIND_ADDRESS", "localhost")]),
        );
        assert!(result.is_err());
    }
}
